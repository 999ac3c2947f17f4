//! OS integration: clipboard, browser launch and the external pattern tool

use std::process::{Command, Stdio};
use std::time::Duration;

use tokio::io::AsyncWriteExt;

use sift_core::prelude::*;

/// Command line of the external pattern tool.
///
/// The pattern name is appended after `args`, and the article text is
/// written to the tool's stdin: `fabric --pattern summarize < article`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub command: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            command: "fabric".to_string(),
            args: vec!["--pattern".to_string()],
            timeout: Duration::from_secs(120),
        }
    }
}

/// Copy `text` to the system clipboard.
///
/// `arboard` is synchronous, so the call runs on the blocking pool.
pub async fn copy_to_clipboard(text: String) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| Error::clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| Error::clipboard(e.to_string()))
    })
    .await
    .map_err(|e| Error::clipboard(format!("clipboard task failed: {}", e)))?
}

/// Open `url` in `browser`, or the platform default opener when empty.
pub fn open_in_browser(url: &str, browser: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(Error::browser("item has no URL"));
    }

    let spawn = |cmd: &str| {
        Command::new(cmd)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| Error::browser(format!("{}: {}", cmd, e)))
    };

    if !browser.is_empty() {
        return spawn(browser);
    }

    if cfg!(target_os = "windows") {
        return Command::new("cmd")
            .args(["/c", "start", "", url])
            .spawn()
            .map(|_| ())
            .map_err(|e| Error::browser(e.to_string()));
    }

    match default_opener() {
        Some(opener) => spawn(opener),
        None => Err(Error::browser("no default browser opener for this platform")),
    }
}

/// Platform opener used when no browser is configured
fn default_opener() -> Option<&'static str> {
    if cfg!(target_os = "macos") {
        Some("open")
    } else if cfg!(unix) {
        Some("xdg-open")
    } else {
        None
    }
}

/// Run the external pattern tool over `content`.
///
/// Returns trimmed stdout. A non-zero exit is reported with the tool's
/// stderr; exceeding `config.timeout` kills the child.
pub async fn run_tool(config: &ToolConfig, pattern: &str, content: &str) -> Result<String> {
    let mut child = tokio::process::Command::new(&config.command)
        .args(&config.args)
        .arg(pattern)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| Error::tool(&config.command, e.to_string()))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(content.as_bytes())
            .await
            .map_err(|e| Error::tool(&config.command, format!("writing stdin: {}", e)))?;
        // Dropping stdin closes the pipe so the tool sees EOF
    }

    let output = tokio::time::timeout(config.timeout, child.wait_with_output())
        .await
        .map_err(|_| Error::ToolTimeout {
            tool: config.command.clone(),
            secs: config.timeout.as_secs(),
        })?
        .map_err(|e| Error::tool(&config.command, e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let reason = if stderr.is_empty() {
            format!("exited with {}", output.status)
        } else {
            stderr
        };
        return Err(Error::tool(&config.command, reason));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    debug!(
        "Tool '{}' pattern '{}' produced {} bytes",
        config.command,
        pattern,
        stdout.len()
    );
    Ok(stdout)
}
