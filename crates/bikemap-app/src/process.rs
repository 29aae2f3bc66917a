//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function,
//! dispatching any actions along the way.

use bikemap_platform::{LocationProvider, StationFeed};
use tokio::sync::{mpsc, watch};

use crate::actions::{handle_action, Services};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<L, F>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<L, F>,
    shutdown_rx: &watch::Receiver<bool>,
) where
    L: LocationProvider + Send + Sync + 'static,
    F: StationFeed + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services, shutdown_rx.clone());
        }

        msg = result.message;
    }
}
