//! Entity identity and disposition.

use serde::{Deserialize, Serialize};

/// Unique identifier for entities in the game world.
///
/// Ids are assigned by authored configuration files, so they are plain
/// strings rather than generated values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Create an entity ID from an authored string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Disposition of an entity toward the player.
///
/// Authored files store the status in upper case (`"FOE"` etc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityStatus {
    Friendly,
    #[default]
    Neutral,
    Foe,
}

impl EntityStatus {
    /// Hostile entities never get their conversation resolved.
    pub fn is_hostile(&self) -> bool {
        matches!(self, EntityStatus::Foe)
    }
}
