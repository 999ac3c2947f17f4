//! Message processing: the TEA update loop plus action dispatch

use tokio::sync::mpsc;

use sift_client::Backend;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Follow-up messages are applied immediately, in order; every action
/// produced along the way is dispatched as a background operation.
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &B,
) where
    B: Backend + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        for action in result.actions {
            handle_action(action, msg_tx.clone(), backend);
        }

        msg = result.message;
    }
}
