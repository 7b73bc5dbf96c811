//! Conversation node definitions - one unit of dialog text plus its
//! outgoing choices.

use serde::{Deserialize, Serialize};

use super::ConversationChoice;

/// A single dialog node.
///
/// The choice order is the order shown to the player; it carries no
/// traversal meaning. A node with no choices is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique key within the owning graph. Loaders typically assign
    /// numeric strings.
    pub id: String,

    /// Text shown to the player.
    pub dialog: String,

    #[serde(default)]
    pub choices: Vec<ConversationChoice>,
}

impl Conversation {
    /// Create a new node with no choices.
    pub fn new(id: impl Into<String>, dialog: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dialog: dialog.into(),
            choices: Vec::new(),
        }
    }

    /// Append an outgoing choice.
    pub fn with_choice(mut self, choice: ConversationChoice) -> Self {
        self.choices.push(choice);
        self
    }

    /// A node with no choices ends the conversation.
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }
}
