//! Dispatcher for middleware action dispatch
//!
//! Actions sent through the dispatcher go back to the background worker and
//! re-enter the middleware chain from the beginning. Async tasks spawned by
//! the orchestrator report their outcomes the same way, so the channel's
//! FIFO order is the order reducers see them in.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
