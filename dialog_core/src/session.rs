//! Dialog session - headless view state for one open conversation.
//!
//! The presentation layer reads the title, dialog text, and displayed
//! choice list from here and forwards player selections back in. Nothing
//! in this module knows about widgets; it is plain string and state logic.

use game_entities::{EntityConfig, EntityId, EntityProperty};

use crate::conversation::{ConversationChoice, ConversationGraph};
use crate::loader::{ConversationLoader, LoadError};

/// State of one open conversation with an entity.
///
/// Owns the active [`ConversationGraph`]; a host needing several
/// simultaneous dialogs gives each its own session. Replacing the graph
/// detaches all observers from the outgoing one, so a discarded graph can
/// never dispatch into systems that subscribed to its successor.
#[derive(Debug, Default)]
pub struct DialogSession {
    graph: ConversationGraph,
    title: String,
    dialog_text: String,
    choices: Vec<ConversationChoice>,
    current_entity_id: Option<EntityId>,
    current_entity_name: Option<String>,
}

impl DialogSession {
    /// Create an empty session with no conversation loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Window title: the entity's display name, or empty.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Dialog text of the node currently shown, or empty.
    pub fn dialog_text(&self) -> &str {
        &self.dialog_text
    }

    /// Choices currently offered to the player, in presentation order.
    pub fn choices(&self) -> &[ConversationChoice] {
        &self.choices
    }

    /// Entity this session is talking to, if any.
    pub fn current_entity_id(&self) -> Option<&EntityId> {
        self.current_entity_id.as_ref()
    }

    /// Display name of the entity, if any.
    pub fn current_entity_name(&self) -> Option<&str> {
        self.current_entity_name.as_deref()
    }

    /// The active conversation graph.
    pub fn graph(&self) -> &ConversationGraph {
        &self.graph
    }

    /// Mutable access to the active graph, used by game systems to
    /// register observers after a new conversation is installed.
    pub fn graph_mut(&mut self) -> &mut ConversationGraph {
        &mut self.graph
    }

    /// Open a conversation with the given entity.
    ///
    /// Hostile entities never get their conversation resolved: the view is
    /// cleared and the load is skipped outright. Otherwise the loader
    /// resolves the definition (courtesy phrases when nothing is scripted)
    /// and the view is populated from the graph's starting node.
    pub fn load_conversation(
        &mut self,
        loader: &ConversationLoader,
        config: &EntityConfig,
    ) -> Result<(), LoadError> {
        self.title.clear();
        self.clear_dialog();

        if config.entity_status.is_hostile() {
            log::debug!("entity {} is hostile, skipping conversation", config.entity_id);
            return Ok(());
        }

        let graph = loader.load_for_entity(config)?;

        self.current_entity_id = Some(config.entity_id.clone());
        self.current_entity_name = Some(config.display_name().to_owned());
        self.title = config.display_name().to_owned();

        self.set_conversation_graph(graph);
        Ok(())
    }

    /// Replace the active graph.
    ///
    /// All observers are detached from the outgoing graph first; callers
    /// holding observer handles re-register on the new graph.
    pub fn set_conversation_graph(&mut self, graph: ConversationGraph) {
        self.graph.remove_all_observers();
        self.graph = graph;
        self.refresh();
    }

    /// Take the displayed choice at `index`.
    ///
    /// An out-of-range index is ignored, matching how a widget with no
    /// selection reports nothing. After the transition the view either
    /// shows the destination node or goes empty when the conversation
    /// ended.
    pub fn choose(&mut self, index: usize) {
        let Some(choice) = self.choices.get(index).cloned() else {
            return;
        };
        self.graph.select_choice(&choice);
        self.refresh();
    }

    /// Show the quest reward summary for an entity.
    ///
    /// Renders the entity's resume template: `<xp>` and `<gold>` are
    /// filled from the reward properties (missing values render as `0`)
    /// and one `Obtained : {drop}` line is appended per dropped item.
    pub fn load_resume(&mut self, config: &EntityConfig, drops: &[String]) {
        self.title.clear();
        self.clear_dialog();

        self.current_entity_id = Some(config.entity_id.clone());
        self.dialog_text = render_resume(config, drops);
    }

    /// Show the class upgrade message.
    pub fn load_upgrade_class(&mut self, player_class: &str) {
        self.clear_dialog();

        self.dialog_text = format!("Your character class was upgraded to {player_class}");
        log::info!("class upgraded to {player_class}");
    }

    /// Rebuild the displayed text and choices from the graph's current
    /// node. An absent or unresolved node leaves the view empty.
    fn refresh(&mut self) {
        self.clear_dialog();

        let Some(conversation) = self.graph.current_conversation() else {
            return;
        };
        self.dialog_text = conversation.dialog.clone();
        self.choices = conversation.choices.clone();
    }

    fn clear_dialog(&mut self) {
        self.dialog_text.clear();
        self.choices.clear();
    }
}

fn render_resume(config: &EntityConfig, drops: &[String]) -> String {
    let xp = config.property(EntityProperty::XpReward).unwrap_or("0");
    let gold = config.property(EntityProperty::GoldReward).unwrap_or("0");

    let mut resume = config
        .resume_template
        .replace("<xp>", xp)
        .replace("<gold>", gold);

    for drop in drops {
        resume.push('\n');
        resume.push_str("Obtained : ");
        resume.push_str(drop);
    }
    resume
}
