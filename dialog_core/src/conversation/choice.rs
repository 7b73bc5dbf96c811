//! Choice definitions - player-selectable transitions between dialog nodes.

use serde::{Deserialize, Serialize};

use crate::events::CommandEvent;

/// One player-selectable option on a dialog node.
///
/// A destination that does not resolve within the owning graph means the
/// choice ends the conversation; there is no dedicated sentinel value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationChoice {
    /// Text shown to the player.
    pub text: String,

    /// Id of the conversation node this choice leads to.
    pub destination_id: String,

    /// Side effect dispatched to observers when the choice is taken.
    /// Absent for purely narrative choices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_event: Option<CommandEvent>,
}

impl ConversationChoice {
    /// Create a purely narrative choice.
    pub fn new(text: impl Into<String>, destination_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            destination_id: destination_id.into(),
            command_event: None,
        }
    }

    /// Attach a command event to this choice.
    pub fn with_command_event(mut self, event: CommandEvent) -> Self {
        self.command_event = Some(event);
        self
    }
}

// Selectable-list widgets render entries through Display.
impl std::fmt::Display for ConversationChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
