//! Command events and the observer contract for dialog side effects.

use serde::{Deserialize, Serialize};

use crate::conversation::ConversationGraph;

/// An in-game effect triggered by taking a dialog choice.
///
/// Events are opaque to the graph itself; game systems register observers
/// and interpret the events they care about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandEvent {
    /// Open the entity's shop inventory.
    OpenShop,

    /// Close the conversation window.
    EndConversation,

    /// Accept the quest offered by the entity.
    AcceptQuest { quest_id: String },

    /// Grant the player an item.
    GiveItem { item_id: String },

    /// Award experience for a completed dialog milestone.
    AddQuestXp { amount: u32 },
}

/// A game system interested in dialog side effects.
///
/// Observers are registered on a [`ConversationGraph`] as shared handles
/// because they are typically owned by systems that outlive any single
/// conversation. Dispatch is synchronous and happens before the graph
/// advances, so an observer querying the graph during the callback sees
/// the pre-transition state.
pub trait ConversationObserver {
    fn on_command_event(&self, graph: &ConversationGraph, event: &CommandEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_event_wire_format() {
        assert_eq!(
            serde_json::to_string(&CommandEvent::OpenShop).unwrap(),
            "\"OpenShop\""
        );
        let event: CommandEvent = serde_json::from_str("\"EndConversation\"").unwrap();
        assert_eq!(event, CommandEvent::EndConversation);
    }

    #[test]
    fn test_payload_event_wire_format() {
        let raw = r#"{ "AcceptQuest": { "quest_id": "wolves_in_the_pasture" } }"#;
        let event: CommandEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(
            event,
            CommandEvent::AcceptQuest {
                quest_id: "wolves_in_the_pasture".to_owned()
            }
        );
    }
}
