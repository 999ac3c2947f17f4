//! sift-app - Application state and orchestration for sift
//!
//! This crate implements the TEA (The Elm Architecture) core of the reader:
//! a single `AppState` mutated only by [`handler::update`], a closed
//! [`Message`] union, and [`UpdateAction`]s that the event loop turns into
//! asynchronous operations. Each operation reports back with exactly one
//! message.

pub mod actions;
pub mod command_line;
pub mod commands;
pub mod config;
pub mod engine;
pub mod filter;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod overlay;
pub mod process;
pub mod prune;
pub mod refresh;
pub mod signals;
pub mod state;
pub mod status;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::AppState;
