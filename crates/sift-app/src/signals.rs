//! OS signal handling for graceful shutdown

use std::fmt;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use sift_core::prelude::*;

use crate::message::Message;

/// A signal that ends the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
    /// The controlling terminal went away
    Hangup,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
            ShutdownSignal::Hangup => "SIGHUP",
        };
        f.write_str(name)
    }
}

/// Spawn a task that turns the first shutdown signal into `Message::Quit`.
///
/// The returned handle is aborted by the engine when it is dropped.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(forward_shutdown(tx, wait_for_signal()))
}

/// Await `signal` and forward a quit request. Listener setup failures are
/// logged and leave the session running.
async fn forward_shutdown<F>(tx: mpsc::Sender<Message>, signal: F)
where
    F: Future<Output = Result<ShutdownSignal>>,
{
    match signal.await {
        Ok(sig) => {
            info!("{} received, quitting", sig);
            if tx.send(Message::Quit).await.is_err() {
                debug!("Engine gone before {} could be delivered", sig);
            }
        }
        Err(e) => error!("Signal handler error: {}", e),
    }
}

async fn wait_for_signal() -> Result<ShutdownSignal> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let listen = |kind: SignalKind, name: ShutdownSignal| {
            signal(kind).map_err(|e| {
                Error::terminal(format!("Failed to listen for {}: {}", name, e))
            })
        };
        let mut sigint = listen(SignalKind::interrupt(), ShutdownSignal::Interrupt)?;
        let mut sigterm = listen(SignalKind::terminate(), ShutdownSignal::Terminate)?;
        let mut sighup = listen(SignalKind::hangup(), ShutdownSignal::Hangup)?;

        let sig = tokio::select! {
            _ = sigint.recv() => ShutdownSignal::Interrupt,
            _ = sigterm.recv() => ShutdownSignal::Terminate,
            _ = sighup.recv() => ShutdownSignal::Hangup,
        };
        Ok(sig)
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c().await.map_err(|e| {
            Error::terminal(format!("Failed to listen for {}: {}", ShutdownSignal::Interrupt, e))
        })?;
        Ok(ShutdownSignal::Interrupt)
    }
}
