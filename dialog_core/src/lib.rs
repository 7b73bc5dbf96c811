//! # Dialog Core (Palaver)
//!
//! Narrative dialog-graph engine. This crate loads serialized conversation
//! definitions, walks the graph of dialog nodes and player choices, and
//! dispatches command events to game-logic observers as choices are taken.
//!
//! ## Core Components
//!
//! - **conversation**: dialog nodes, choices, and the traversal graph
//! - **events**: command events and the observer contract
//! - **loader**: one-shot deserialization with courtesy-phrase fallback
//! - **session**: headless view state read by the presentation layer
//!
//! ## Design Philosophy
//!
//! - **Synchronous**: every operation runs to completion; observers are
//!   notified before the graph advances
//! - **Permissive**: an id that does not resolve ends the conversation
//!   instead of erroring; only malformed definitions are fatal
//! - **Instance-per-conversation**: each open dialog owns its graph, and
//!   observers are detached whenever a graph is replaced

pub mod conversation;
pub mod events;
pub mod loader;
pub mod session;

pub use conversation::*;
pub use events::*;
pub use loader::*;
pub use session::*;
