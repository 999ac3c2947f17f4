//! Main TUI runner - entry points and event loop

use ratatui::DefaultTerminal;
use sift_app::config::Settings;
use sift_app::Engine;
use sift_client::{ApiClient, Backend, LiveBackend};
use sift_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI against the daemon configured in `settings`
pub async fn run(settings: Settings) -> Result<()> {
    let api = ApiClient::new(&settings.api_config())?;
    info!("Using daemon at {}", settings.api.url);
    let backend = LiveBackend::new(api, settings.tool_config(), settings.browser.command.clone());
    run_with_backend(settings, backend).await
}

/// Run the TUI with an explicit backend
pub async fn run_with_backend<B>(settings: Settings, backend: B) -> Result<()>
where
    B: Backend + Clone + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_paste() {
        warn!("Bracketed paste unavailable: {}", e);
    }

    let mut engine = Engine::new(settings, backend);
    if let Ok(size) = term.size() {
        engine.state.terminal_size = (size.width, size.height);
    }
    engine.spawn_signal_handler();
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    terminal::disable_paste();
    ratatui::restore();

    if let Err(e) = &result {
        error!("Event loop failed: {}", e);
    }
    info!("sift exiting");
    result
}

/// Main event loop
fn run_loop<B>(terminal: &mut DefaultTerminal, engine: &mut Engine<B>) -> Result<()>
where
    B: Backend + Clone + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Operation results, timers and signals
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
