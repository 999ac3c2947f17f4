//! sift - a terminal reader for prioritized RSS, Reddit and YouTube content
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use sift_app::config::{init_config_file, load_settings, CliOverrides};
use tracing::{error, info, warn};

/// sift - read what matters from your feeds
#[derive(Parser, Debug)]
#[command(name = "sift", version)]
#[command(about = "A terminal reader for prioritized RSS, Reddit and YouTube content", long_about = None)]
struct Args {
    /// Path to the config file (default: <config dir>/sift/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the sift daemon API
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// API key sent to the daemon
    #[arg(long, value_name = "KEY", env = "SIFT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Auto-refresh interval in seconds (0 disables)
    #[arg(long = "refresh", value_name = "SECS")]
    refresh_interval_secs: Option<u64>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            refresh_interval_secs: self.refresh_interval_secs,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = init_config_file(args.config.as_deref())?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    color_eyre::install()?;

    let loaded = load_settings(args.config.as_deref());
    let mut settings = loaded.as_ref().cloned().unwrap_or_default();
    settings.apply_overrides(&args.overrides());

    // Log to file; the TUI owns stdout
    let log_dir = sift_core::logging::init(&settings.log_config())?;
    if let Err(e) = &loaded {
        warn!("{}; using default settings", e);
    }
    info!(
        "Settings: api={} refresh={}s",
        settings.api.url, settings.behavior.refresh_interval_secs
    );

    let result = sift_tui::run(settings).await;
    if let Err(e) = &result {
        error!("Application error: {:?}", e);
        eprintln!("sift exited with an error; logs are in {}", log_dir.display());
    }
    Ok(result?)
}
