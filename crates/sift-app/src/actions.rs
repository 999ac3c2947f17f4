//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each action becomes one spawned task that sends exactly one message
//! back to the event loop, whether the operation succeeded or failed.

use std::future::Future;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use sift_client::Backend;
use sift_core::Error;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Spawn `op` and deliver its message to the event loop
fn spawn_op<F>(msg_tx: mpsc::Sender<Message>, op: F)
where
    F: Future<Output = Message> + Send + 'static,
{
    tokio::spawn(async move {
        let msg = op.await;
        if msg_tx.send(msg).await.is_err() {
            debug!("Event loop gone, dropping operation result");
        }
    });
}

/// Execute an action by spawning a background task
pub fn handle_action<B>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, backend: &B)
where
    B: Backend + Clone + Send + Sync + 'static,
{
    let backend = backend.clone();

    match action {
        UpdateAction::LoadContent {
            query,
            kind,
            anchor,
        } => spawn_op(msg_tx, async move {
            match backend.load_content(&query).await {
                Ok(page) => Message::ContentLoaded { page, kind, anchor },
                Err(e) => {
                    warn!("load_content failed: {}", e);
                    Message::ContentLoadFailed {
                        kind,
                        error: e.to_string(),
                        malformed: matches!(e, Error::MalformedResponse { .. }),
                    }
                }
            }
        }),

        UpdateAction::LoadSources => spawn_op(msg_tx, async move {
            match backend.load_sources().await {
                Ok(sources) => Message::SourcesLoaded(sources),
                Err(e) => Message::SourcesLoadFailed(e.to_string()),
            }
        }),

        UpdateAction::MutateItem {
            item_id,
            change,
            silent,
        } => spawn_op(msg_tx, async move {
            match backend.mutate_item(&item_id, change).await {
                Ok(()) => Message::ItemMutated {
                    item_id,
                    change,
                    silent,
                },
                Err(e) => Message::ItemMutationFailed {
                    item_id,
                    change,
                    error: e.to_string(),
                },
            }
        }),

        UpdateAction::SourceOp { op } => spawn_op(msg_tx, async move {
            match backend.source_op(&op).await {
                Ok(message) => Message::SourceOpCompleted { op, message },
                Err(e) => Message::SourceOpFailed {
                    op,
                    error: e.to_string(),
                },
            }
        }),

        UpdateAction::CountPrune { age_days } => spawn_op(msg_tx, async move {
            match backend.count_prunable(age_days).await {
                Ok(count) => Message::PruneCounted { count, age_days },
                Err(e) => Message::PruneCountFailed(e.to_string()),
            }
        }),

        UpdateAction::ExecutePrune { age_days } => spawn_op(msg_tx, async move {
            match backend.prune(age_days).await {
                Ok(deleted) => Message::PruneCompleted { deleted },
                Err(e) => Message::PruneFailed(e.to_string()),
            }
        }),

        UpdateAction::RunTool {
            pattern,
            item_id,
            content,
        } => spawn_op(msg_tx, async move {
            match backend.run_tool(&pattern, &content).await {
                Ok(output) => Message::ToolCompleted {
                    pattern,
                    item_id,
                    output,
                },
                Err(e) => Message::ToolFailed {
                    pattern,
                    error: e.to_string(),
                },
            }
        }),

        UpdateAction::CopyToClipboard { text, label } => spawn_op(msg_tx, async move {
            match backend.copy_to_clipboard(&text).await {
                Ok(()) => Message::ClipboardCopied { label },
                Err(e) => Message::ClipboardFailed(e.to_string()),
            }
        }),

        UpdateAction::OpenInBrowser { url } => spawn_op(msg_tx, async move {
            match backend.open_in_browser(&url).await {
                Ok(()) => Message::BrowserOpened { url },
                Err(e) => Message::BrowserFailed(e.to_string()),
            }
        }),

        UpdateAction::ScheduleAutoRefresh { after } => spawn_op(msg_tx, async move {
            tokio::time::sleep(after).await;
            Message::AutoRefreshFired
        }),

        UpdateAction::ExpireStatus { generation, after } => spawn_op(msg_tx, async move {
            tokio::time::sleep(after).await;
            Message::StatusExpired { generation }
        }),
    }
}
