//! Settings file loading and creation

use std::path::{Path, PathBuf};

use sift_core::prelude::*;

use super::types::Settings;

const APP_DIR: &str = "sift";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# sift configuration

[api]
url = "http://127.0.0.1:8989"
# key = ""               # sent as X-API-Key when set
timeout_secs = 10

[behavior]
refresh_interval_secs = 300   # 0 disables auto-refresh
status_timeout_ms = 3000
mark_read_on_open = true
history_size = 100

[filters]
# priority = "all"       # all | high | medium | low
show_all = false         # include read items
# source_type = "rss"    # rss | reddit | youtube
sort = "newest"          # newest | oldest
show_unprioritized = false

[tool]
command = "fabric"
args = ["--pattern"]
timeout_secs = 120

[browser]
command = ""             # empty uses the system default

[log]
# level = "debug"        # SIFT_LOG overrides this
# directory = ""         # default: <data dir>/sift/logs
"#;

/// `<config_dir>/sift/config.toml`, when a config directory exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or the default location when `None`.
///
/// A missing file yields defaults. Read and parse failures are returned so
/// the caller can report them once logging is up.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let config_path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            debug!("No config directory, using default settings");
            return Ok(Settings::default());
        }
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&config_path)
        .map_err(|e| Error::config(format!("Failed to read {:?}: {}", config_path, e)))?;
    let settings = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {:?}: {}", config_path, e)))?;
    debug!("Loaded settings from {:?}", config_path);
    Ok(settings)
}

/// Write a commented default config to `path` (or the default location)
/// unless one already exists. Returns the config path.
pub fn init_config_file(path: Option<&Path>) -> Result<PathBuf> {
    let config_path = path
        .map(Path::to_path_buf)
        .or_else(default_config_path)
        .ok_or_else(|| Error::config("cannot determine config directory"))?;

    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
        return Ok(config_path);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config: {}", e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(config_path)
}
