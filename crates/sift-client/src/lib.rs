//! # sift-client - Daemon API Client and OS Integration
//!
//! Provides the asynchronous capabilities the application core consumes as
//! opaque operations: content and source queries against the sift daemon,
//! item and source mutations, pruning, the external pattern tool, the
//! clipboard and the system browser.
//!
//! Depends on [`sift_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Capability Trait
//! - [`Backend`] - `Send` async trait implemented by every data-access backend
//! - [`ContentQuery`], [`ContentPage`] - Content listing request/response
//! - [`ItemChange`], [`SourceOp`] - Mutations correlated by stable id
//!
//! ### HTTP Client
//! - [`ApiClient`] - Pooled `reqwest` client for the daemon REST API
//! - [`ApiConfig`] - Base URL, API key and timeout
//!
//! ### OS Integration
//! - [`copy_to_clipboard()`], [`open_in_browser()`], [`run_tool()`]
//! - [`ToolConfig`] - External pattern tool command line
//!
//! ### Live Backend
//! - [`LiveBackend`] - API client plus OS integration, created once at startup

pub mod api;
pub mod backend;
pub mod live;
pub mod system;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{ApiClient, ApiConfig, DEFAULT_API_URL};
pub use backend::{Backend, ContentPage, ContentQuery, ItemChange, LocalBackend, SourceOp};
pub use live::LiveBackend;
pub use system::{copy_to_clipboard, open_in_browser, run_tool, ToolConfig};
