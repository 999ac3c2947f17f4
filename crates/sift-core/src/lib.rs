//! # sift-core - Core Domain Types
//!
//! Foundation crate for sift. Provides domain types, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ContentItem`] - A single article, post or video with priority and read state
//! - [`Source`] - A configured RSS feed, subreddit or YouTube channel
//! - [`Priority`], [`SourceType`], [`SortDirection`] - Classification enums
//! - [`ItemId`], [`SourceId`] - Stable identifiers used to correlate async results
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use sift_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all sift crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use types::{
    ContentItem, ItemId, Priority, SortDirection, Source, SourceId, SourceType,
};
