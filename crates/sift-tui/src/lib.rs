//! sift-tui - Terminal UI for sift
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! Engine from sift-app and adds terminal rendering, event polling and
//! widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::{run, run_with_backend};
