//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each action runs on its own tokio task and reports back through the
//! message channel. Tasks race their work against the shutdown signal, and a
//! send into a closed channel is dropped, so nothing lands on a torn-down view.

use std::future::Future;
use std::sync::Arc;

use bikemap_core::prelude::*;
use bikemap_platform::{locate, LocationProvider, StationFeed};
use tokio::sync::{mpsc, watch};

use crate::handler::UpdateAction;
use crate::message::Message;

/// The capabilities actions run against
pub struct Services<L, F> {
    pub location: Arc<L>,
    pub feed: Arc<F>,
}

impl<L, F> Services<L, F> {
    pub fn new(location: L, feed: F) -> Self {
        Self {
            location: Arc::new(location),
            feed: Arc::new(feed),
        }
    }
}

impl<L, F> Clone for Services<L, F> {
    fn clone(&self) -> Self {
        Self {
            location: Arc::clone(&self.location),
            feed: Arc::clone(&self.feed),
        }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<L, F>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    services: &Services<L, F>,
    shutdown_rx: watch::Receiver<bool>,
) where
    L: LocationProvider + Send + Sync + 'static,
    F: StationFeed + Send + Sync + 'static,
{
    match action {
        UpdateAction::RequestLocation => {
            spawn_location_request(msg_tx, Arc::clone(&services.location), shutdown_rx);
        }

        UpdateAction::FetchStations => {
            spawn_station_fetch(msg_tx, Arc::clone(&services.feed), shutdown_rx);
        }
    }
}

fn spawn_location_request<L>(
    msg_tx: mpsc::Sender<Message>,
    provider: Arc<L>,
    shutdown_rx: watch::Receiver<bool>,
) where
    L: LocationProvider + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let work = async move {
            match locate(provider.as_ref()).await {
                Ok(coordinate) => Message::LocationResolved { coordinate },
                Err(Error::PermissionDenied) => Message::LocationPermissionDenied,
                Err(Error::LocationUnsupported) => Message::LocationUnsupported,
                Err(e) => Message::LocationFailed {
                    error: e.to_string(),
                },
            }
        };
        deliver(msg_tx, shutdown_rx, work).await;
    });
}

fn spawn_station_fetch<F>(
    msg_tx: mpsc::Sender<Message>,
    feed: Arc<F>,
    shutdown_rx: watch::Receiver<bool>,
) where
    F: StationFeed + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let work = async move {
            debug!("Fetching stations from {}", StationFeed::endpoint(feed.as_ref()));
            match StationFeed::fetch_stations(feed.as_ref()).await {
                Ok(stations) => Message::StationsLoaded { stations },
                Err(e) => Message::StationFeedFailed {
                    error: e.to_string(),
                },
            }
        };
        deliver(msg_tx, shutdown_rx, work).await;
    });
}

/// Await `work` unless shutdown fires first, then post its message
async fn deliver(
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
    work: impl Future<Output = Message>,
) {
    let message = tokio::select! {
        message = work => message,
        _ = shutdown_rx.wait_for(|stop| *stop) => {
            debug!("Shutdown before action completed, dropping result");
            return;
        }
    };

    if *shutdown_rx.borrow() {
        debug!("Shutdown signalled, dropping {:?}", message);
        return;
    }

    if msg_tx.send(message).await.is_err() {
        debug!("Message channel closed, dropping action result");
    }
}
