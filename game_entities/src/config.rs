//! Authored per-entity configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::entity::{EntityId, EntityStatus};

/// Reward properties an entity can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityProperty {
    XpReward,
    GoldReward,
}

/// Configuration for one entity, loaded from an authored JSON file.
///
/// The conversation path may be empty (the entity has no scripted dialog)
/// and the resume template carries `<xp>` / `<gold>` placeholders filled in
/// from [`EntityProperty`] values when the reward summary is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityConfig {
    pub entity_id: EntityId,

    #[serde(default)]
    pub entity_name: Option<String>,

    #[serde(default)]
    pub entity_status: EntityStatus,

    /// Path to the entity's conversation definition, or empty.
    #[serde(default)]
    pub conversation_config_path: String,

    /// Template for the quest reward summary.
    #[serde(default)]
    pub resume_template: String,

    #[serde(default)]
    pub entity_properties: HashMap<EntityProperty, String>,

    /// Additional authored data in a flexible map.
    #[serde(default)]
    pub extra_properties: HashMap<String, serde_json::Value>,
}

impl EntityConfig {
    /// Create a new configuration with the given entity ID.
    pub fn new(entity_id: impl Into<EntityId>) -> Self {
        Self {
            entity_id: entity_id.into(),
            entity_name: None,
            entity_status: EntityStatus::default(),
            conversation_config_path: String::new(),
            resume_template: String::new(),
            entity_properties: HashMap::new(),
            extra_properties: HashMap::new(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.entity_name = Some(name.into());
        self
    }

    /// Set the disposition status.
    pub fn with_status(mut self, status: EntityStatus) -> Self {
        self.entity_status = status;
        self
    }

    /// Set the conversation definition path.
    pub fn with_conversation_path(mut self, path: impl Into<String>) -> Self {
        self.conversation_config_path = path.into();
        self
    }

    /// Set the reward summary template.
    pub fn with_resume_template(mut self, template: impl Into<String>) -> Self {
        self.resume_template = template.into();
        self
    }

    /// Set a reward property.
    pub fn with_property(mut self, property: EntityProperty, value: impl Into<String>) -> Self {
        self.entity_properties.insert(property, value.into());
        self
    }

    /// Get a reward property value.
    pub fn property(&self, property: EntityProperty) -> Option<&str> {
        self.entity_properties.get(&property).map(String::as_str)
    }

    /// Name shown to the player; falls back to the entity ID when the
    /// entity has no authored name.
    pub fn display_name(&self) -> &str {
        self.entity_name
            .as_deref()
            .unwrap_or_else(|| self.entity_id.as_str())
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::Malformed)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&raw)
    }
}

/// Errors raised while loading entity configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read entity config at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed entity config")]
    Malformed(#[source] serde_json::Error),
}
