//! Configuration file parsing for sift
//!
//! Settings live in `<config_dir>/sift/config.toml`; command line flags
//! override individual values.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
