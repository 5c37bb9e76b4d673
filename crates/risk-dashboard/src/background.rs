//! Background worker thread that processes actions through middleware
//!
//! - Main thread renders, polls input and runs the reducers
//! - Background thread runs the middleware chain, which starts remote calls
//! - Actions dispatched by middleware (and by finished remote calls) re-enter
//!   the chain through the same channel

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, RecvError, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: actions from the main thread and from dispatcher re-entry
/// - `action_tx`: used to create the dispatcher handed to middleware
/// - `result_tx`: actions not consumed by middleware, for the reducers
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    loop {
        let action = match action_rx.recv() {
            Ok(action) => action,
            Err(RecvError) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        };

        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            if result_tx.send(action).is_err() {
                log::error!("Failed to send quit action to main thread");
            }
            break;
        }

        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        let should_forward = middleware
            .iter_mut()
            .all(|mw| mw.handle(&action, &current_state, &dispatcher));

        if should_forward && result_tx.send(action).is_err() {
            log::error!("Result channel disconnected, shutting down");
            break;
        }
    }

    log::info!("Background worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::FormAction;
    use std::sync::mpsc::channel;

    /// Consumes every `Char` and dispatches a `Backspace` instead
    struct Rewrite;

    impl Middleware for Rewrite {
        fn handle(&mut self, action: &Action, _: &AppState, dispatcher: &Dispatcher) -> bool {
            if let Action::Form(FormAction::Char(_)) = action {
                dispatcher.dispatch(Action::Form(FormAction::Backspace));
                return false;
            }
            true
        }
    }

    #[test]
    fn test_consumed_actions_re_enter_and_quit_stops() {
        let (action_tx, action_rx) = channel();
        let (result_tx, result_rx) = channel();
        let state: SharedState = Arc::new(RwLock::new(AppState::default()));

        let handle = spawn_background_worker(
            action_rx,
            action_tx.clone(),
            result_tx,
            state,
            vec![Box::new(Rewrite)],
        );

        action_tx.send(Action::Form(FormAction::Char('x'))).unwrap();
        let first = result_rx.recv().unwrap();
        assert!(matches!(first, Action::Form(FormAction::Backspace)));

        action_tx.send(Action::Global(GlobalAction::Quit)).unwrap();
        let last = result_rx.recv().unwrap();
        assert!(matches!(last, Action::Global(GlobalAction::Quit)));
        handle.join().unwrap();
    }
}
