//! Engine - owns the application state, the message channel and the
//! backend shared by every operation

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use sift_client::Backend;

use crate::actions::handle_action;
use crate::config::Settings;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::process;
use crate::refresh::RefreshKind;
use crate::signals;
use crate::state::AppState;

/// Capacity of the message channel
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for sift.
///
/// Frontends feed input messages through [`Engine::process_message`] and
/// render `state` between calls. Operation results arrive on `msg_rx` and
/// are applied by [`Engine::drain_pending_messages`].
pub struct Engine<B> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel. Clone this for input sources.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel
    pub msg_rx: mpsc::Receiver<Message>,

    /// Data access and OS capabilities, cloned into each operation
    backend: B,

    pub settings: Settings,

    /// OS signal listener, aborted on drop
    signal_task: Option<JoinHandle<()>>,
}

impl<B> Engine<B>
where
    B: Backend + Clone + Send + Sync + 'static,
{
    pub fn new(settings: Settings, backend: B) -> Self {
        let state = AppState::with_settings(&settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            backend,
            settings,
            signal_task: None,
        }
    }

    /// Dispatch the startup operations: initial content load, sources
    /// load and the first auto-refresh timer when enabled.
    pub fn start(&mut self) {
        let mut actions = vec![
            self.state.start_load(RefreshKind::Initial),
            UpdateAction::LoadSources,
        ];
        match self.state.auto_refresh_interval() {
            Some(after) => {
                info!("Auto-refresh every {}s", after.as_secs());
                actions.push(UpdateAction::ScheduleAutoRefresh { after });
            }
            None => info!("Auto-refresh disabled"),
        }

        for action in actions {
            handle_action(action, self.msg_tx.clone(), &self.backend);
        }
    }

    /// Translate SIGINT/SIGTERM/SIGHUP into `Message::Quit`
    pub fn spawn_signal_handler(&mut self) {
        let task = signals::spawn_signal_handler(self.msg_tx.clone());
        if let Some(old) = self.signal_task.replace(task) {
            old.abort();
        }
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.backend);
    }

    /// Process every message already waiting in the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it. Returns `false` when the
    /// channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}

impl<B> Drop for Engine<B> {
    fn drop(&mut self) {
        if let Some(task) = self.signal_task.take() {
            task.abort();
        }
    }
}
