//! Conversation module - dialog nodes, choices, and the traversal graph.
//!
//! The graph consists of:
//! - **Conversations**: nodes holding dialog text and outgoing choices
//! - **Choices**: player-selectable transitions, optionally carrying a
//!   command event
//! - **A cursor**: the id of the node currently shown to the player

mod choice;
mod graph;
mod node;

pub use choice::*;
pub use graph::*;
pub use node::*;
