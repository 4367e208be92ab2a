//! Shared application state for the bridge server.

use std::sync::Arc;

use taskbridge::dispatch::Dispatcher;
use tokio::sync::Notify;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Owns the status tally for the lifetime of the process.
    pub dispatcher: Arc<Dispatcher>,
    /// Signalled once a caller asks the process to exit.
    pub exit: Arc<Notify>,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            exit: Arc::new(Notify::new()),
        }
    }

    /// Ask the server to stop after in-flight responses are delivered.
    ///
    /// `notify_one` stores a permit, so a request that lands before the
    /// shutdown future starts waiting is not lost.
    pub fn request_exit(&self) {
        self.exit.notify_one();
    }

    pub async fn exit_requested(self) {
        self.exit.notified().await;
    }
}
