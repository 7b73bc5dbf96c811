//! Conversation loading - one-shot deserialization of conversation
//! definitions, with a courtesy-phrase fallback for entities that have
//! nothing scripted to say.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use game_entities::EntityConfig;

use crate::conversation::ConversationGraph;

/// Default location of the generic courtesy-phrase definition.
pub const COURTESY_PHRASES_PATH: &str = "conversations/courtesy_phrases.json";

/// Errors raised while loading conversation definitions.
///
/// A malformed definition is fatal for that load attempt; node lookups
/// inside a loaded graph are never errors.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read conversation definition at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed conversation definition at {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed loader settings at {}", path.display())]
    MalformedSettings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Loader configuration, read from a TOML settings file or defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderSettings {
    /// Definition used when an entity has no conversation of its own.
    #[serde(default = "default_courtesy_phrases_path")]
    pub courtesy_phrases_path: PathBuf,
}

fn default_courtesy_phrases_path() -> PathBuf {
    PathBuf::from(COURTESY_PHRASES_PATH)
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            courtesy_phrases_path: default_courtesy_phrases_path(),
        }
    }
}

impl LoaderSettings {
    /// Load settings from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, LoadError> {
        let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| LoadError::MalformedSettings {
            path: path.to_owned(),
            source,
        })
    }
}

/// Deserializes conversation graphs for entities.
#[derive(Debug, Clone, Default)]
pub struct ConversationLoader {
    settings: LoaderSettings,
}

impl ConversationLoader {
    /// Create a loader with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with the given settings.
    pub fn with_settings(settings: LoaderSettings) -> Self {
        Self { settings }
    }

    /// The courtesy-phrase definition this loader falls back to.
    pub fn courtesy_phrases_path(&self) -> &Path {
        &self.settings.courtesy_phrases_path
    }

    /// Deserialize a graph from the given definition file.
    pub fn load_graph(&self, path: &Path) -> Result<ConversationGraph, LoadError> {
        let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| LoadError::Malformed {
            path: path.to_owned(),
            source,
        })
    }

    /// Resolve and deserialize the graph for an entity.
    ///
    /// Falls back to the courtesy-phrase definition when the configured
    /// path is empty or the file does not exist. If the deserialized graph
    /// carries no starting node, one is chosen at random so an entity with
    /// several unordered lines opens on a different one each encounter.
    /// A missing or malformed courtesy definition is unrecoverable and
    /// surfaces as the `Err`.
    pub fn load_for_entity(&self, config: &EntityConfig) -> Result<ConversationGraph, LoadError> {
        let configured = Path::new(&config.conversation_config_path);
        let path = if config.conversation_config_path.is_empty() || !configured.exists() {
            log::debug!(
                "entity {} has no conversation definition, using courtesy phrases",
                config.entity_id
            );
            self.settings.courtesy_phrases_path.as_path()
        } else {
            configured
        };

        let mut graph = self.load_graph(path)?;
        assign_random_starting_conversation(&mut graph, &mut rand::thread_rng());
        Ok(graph)
    }
}

/// Pick a starting node uniformly at random from the ids actually defined
/// in the graph.
///
/// Does nothing when the graph already has a current node or holds no
/// nodes at all. Ids are sorted before sampling so a seeded rng selects
/// deterministically regardless of map iteration order.
pub fn assign_random_starting_conversation(graph: &mut ConversationGraph, rng: &mut impl Rng) {
    if graph.current_conversation_id().is_some() {
        return;
    }

    let mut ids: Vec<String> = graph.conversation_ids().map(str::to_owned).collect();
    ids.sort_unstable();

    if let Some(id) = ids.choose(rng) {
        graph.set_current_conversation(id.clone());
    }
}
