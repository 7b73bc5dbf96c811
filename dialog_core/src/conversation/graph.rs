//! Conversation graph - the traversal engine for dialog sessions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;

use super::{Conversation, ConversationChoice};
use crate::events::{CommandEvent, ConversationObserver};

/// A directed graph of dialog nodes with a cursor on the active node.
///
/// The graph is deserialized in one shot from a conversation definition and
/// then mutated only by [`select_choice`](Self::select_choice) and explicit
/// [`set_current_conversation`](Self::set_current_conversation) calls. Each
/// open conversation owns its own instance; the observer registry is the
/// only attachment to longer-lived game systems, and it must be cleared
/// with [`remove_all_observers`](Self::remove_all_observers) before an
/// instance is discarded.
#[derive(Serialize, Deserialize, Default)]
pub struct ConversationGraph {
    #[serde(default)]
    conversations: HashMap<String, Conversation>,

    #[serde(default)]
    current_conversation_id: Option<String>,

    #[serde(skip)]
    observers: Vec<Rc<dyn ConversationObserver>>,
}

impl ConversationGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, keyed by its own id.
    pub fn add_conversation(&mut self, conversation: Conversation) {
        self.conversations
            .insert(conversation.id.clone(), conversation);
    }

    /// Look up a node by id. An absent id is a normal outcome, not an
    /// error; callers treat `None` as "nothing to show".
    pub fn get_conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.get(id)
    }

    /// Move the cursor to the given id, unconditionally.
    ///
    /// Existence is not validated here; callers are expected to have just
    /// resolved the id via [`get_conversation`](Self::get_conversation).
    pub fn set_current_conversation(&mut self, id: impl Into<String>) {
        self.current_conversation_id = Some(id.into());
    }

    /// Id of the active node, if any.
    pub fn current_conversation_id(&self) -> Option<&str> {
        self.current_conversation_id.as_deref()
    }

    /// The active node, if the cursor is set and resolves.
    pub fn current_conversation(&self) -> Option<&Conversation> {
        self.current_conversation_id
            .as_deref()
            .and_then(|id| self.conversations.get(id))
    }

    /// Choices of the active node, or `None` when there is no active node.
    pub fn current_choices(&self) -> Option<&[ConversationChoice]> {
        self.current_conversation().map(|c| c.choices.as_slice())
    }

    /// Take a choice: dispatch its command event to every registered
    /// observer, then advance the cursor to the destination.
    ///
    /// Dispatch completes strictly before the cursor moves, so observers
    /// querying the graph during the callback see the pre-transition
    /// state. A destination that does not resolve ends the conversation:
    /// the cursor is cleared and the current view goes absent.
    pub fn select_choice(&mut self, choice: &ConversationChoice) {
        if let Some(event) = &choice.command_event {
            self.notify(event);
        }

        if self.conversations.contains_key(&choice.destination_id) {
            self.current_conversation_id = Some(choice.destination_id.clone());
        } else {
            self.current_conversation_id = None;
        }
    }

    /// Register an observer for command events.
    pub fn register_observer(&mut self, observer: Rc<dyn ConversationObserver>) {
        self.observers.push(observer);
    }

    /// Detach every observer. Called by whoever discards the graph, so a
    /// replaced graph can never dispatch into systems that have moved on
    /// to its successor.
    pub fn remove_all_observers(&mut self) {
        self.observers.clear();
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Iterate over all node ids.
    pub fn conversation_ids(&self) -> impl Iterator<Item = &str> {
        self.conversations.keys().map(String::as_str)
    }

    /// Iterate over all nodes.
    pub fn all_conversations(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.values()
    }

    /// Number of nodes in the graph.
    pub fn conversation_count(&self) -> usize {
        self.conversations.len()
    }

    /// Whether the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    fn notify(&self, event: &CommandEvent) {
        for observer in &self.observers {
            observer.on_command_event(self, event);
        }
    }
}

impl std::fmt::Debug for ConversationGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationGraph")
            .field("conversations", &self.conversations)
            .field("current_conversation_id", &self.current_conversation_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every dispatch along with the cursor position seen during
    /// the callback.
    #[derive(Default)]
    struct RecordingObserver {
        seen: RefCell<Vec<(Option<String>, CommandEvent)>>,
    }

    impl ConversationObserver for RecordingObserver {
        fn on_command_event(&self, graph: &ConversationGraph, event: &CommandEvent) {
            self.seen.borrow_mut().push((
                graph.current_conversation_id().map(str::to_owned),
                event.clone(),
            ));
        }
    }

    fn tavern_graph() -> ConversationGraph {
        let mut graph = ConversationGraph::new();
        graph.add_conversation(
            Conversation::new("1", "Welcome to the Prancing Pony.")
                .with_choice(ConversationChoice::new("A mug of ale, please", "2"))
                .with_choice(
                    ConversationChoice::new("Goodbye", "out")
                        .with_command_event(CommandEvent::EndConversation),
                ),
        );
        graph.add_conversation(
            Conversation::new("2", "Coming right up.")
                .with_choice(ConversationChoice::new("Thanks", "3")),
        );
        graph.add_conversation(Conversation::new("3", "Safe travels."));
        graph.set_current_conversation("1");
        graph
    }

    #[test]
    fn test_lookup_present_and_absent() {
        let graph = tavern_graph();
        assert_eq!(graph.get_conversation("2").unwrap().dialog, "Coming right up.");
        assert!(graph.get_conversation("42").is_none());
    }

    #[test]
    fn test_set_current_is_unchecked() {
        let mut graph = tavern_graph();
        graph.set_current_conversation("no_such_node");

        // The cursor moves anyway, but the resolved view goes absent.
        assert_eq!(graph.current_conversation_id(), Some("no_such_node"));
        assert!(graph.current_conversation().is_none());
        assert!(graph.current_choices().is_none());
    }

    #[test]
    fn test_select_resolving_choice_advances_cursor() {
        let mut graph = tavern_graph();
        let choice = graph.current_choices().unwrap()[0].clone();

        graph.select_choice(&choice);

        assert_eq!(graph.current_conversation_id(), Some("2"));
        let texts: Vec<_> = graph
            .current_choices()
            .unwrap()
            .iter()
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(texts, ["Thanks"]);
    }

    #[test]
    fn test_select_unresolving_choice_ends_conversation() {
        let mut graph = tavern_graph();
        let goodbye = graph.current_choices().unwrap()[1].clone();

        graph.select_choice(&goodbye);

        assert!(graph.current_conversation_id().is_none());
        assert!(graph.current_conversation().is_none());
        assert!(graph.current_choices().is_none());
    }

    #[test]
    fn test_dispatch_happens_once_per_observer_before_cursor_moves() {
        let mut graph = tavern_graph();
        let first = Rc::new(RecordingObserver::default());
        let second = Rc::new(RecordingObserver::default());
        graph.register_observer(first.clone());
        graph.register_observer(second.clone());

        let goodbye = graph.current_choices().unwrap()[1].clone();
        graph.select_choice(&goodbye);

        for observer in [&first, &second] {
            let seen = observer.seen.borrow();
            assert_eq!(seen.len(), 1);
            // The callback ran while the cursor still pointed at node "1".
            assert_eq!(seen[0].0.as_deref(), Some("1"));
            assert_eq!(seen[0].1, CommandEvent::EndConversation);
        }
    }

    #[test]
    fn test_narrative_choice_dispatches_nothing() {
        let mut graph = tavern_graph();
        let observer = Rc::new(RecordingObserver::default());
        graph.register_observer(observer.clone());

        let ale = graph.current_choices().unwrap()[0].clone();
        graph.select_choice(&ale);

        assert!(observer.seen.borrow().is_empty());
    }

    #[test]
    fn test_removed_observers_receive_nothing() {
        let mut graph = tavern_graph();
        let observer = Rc::new(RecordingObserver::default());
        graph.register_observer(observer.clone());
        graph.remove_all_observers();
        assert_eq!(graph.observer_count(), 0);

        let goodbye = graph.current_choices().unwrap()[1].clone();
        graph.select_choice(&goodbye);

        assert!(observer.seen.borrow().is_empty());
    }

    #[test]
    fn test_definition_wire_format() {
        let raw = r#"{
            "current_conversation_id": "1",
            "conversations": {
                "1": {
                    "id": "1",
                    "dialog": "Need anything?",
                    "choices": [
                        { "text": "Show me your wares", "destination_id": "2", "command_event": "OpenShop" },
                        { "text": "Any work for me?", "destination_id": "3",
                          "command_event": { "AcceptQuest": { "quest_id": "lost_amulet" } } }
                    ]
                },
                "2": { "id": "2", "dialog": "Take your pick." },
                "3": { "id": "3", "dialog": "Find my amulet, would you?" }
            }
        }"#;

        let graph: ConversationGraph = serde_json::from_str(raw).unwrap();
        assert_eq!(graph.conversation_count(), 3);
        assert_eq!(graph.current_conversation_id(), Some("1"));

        let choices = graph.current_choices().unwrap();
        assert_eq!(choices[0].command_event, Some(CommandEvent::OpenShop));
        assert_eq!(
            choices[1].command_event,
            Some(CommandEvent::AcceptQuest {
                quest_id: "lost_amulet".to_owned()
            })
        );
    }

    #[test]
    fn test_definition_without_current_id() {
        let raw = r#"{
            "conversations": {
                "1": { "id": "1", "dialog": "Nice weather today." }
            }
        }"#;

        let graph: ConversationGraph = serde_json::from_str(raw).unwrap();
        assert!(graph.current_conversation_id().is_none());
        assert_eq!(graph.conversation_count(), 1);
    }
}
