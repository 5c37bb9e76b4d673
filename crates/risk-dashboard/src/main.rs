use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod dispatcher;
mod domain_models;
mod logger;
mod middleware;
mod orchestrator;
mod reducers;
mod state;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use background::{spawn_background_worker, SharedState};
use dispatcher::Dispatcher;
use middleware::{
    analysis_middleware::AnalysisMiddleware, keyboard_middleware::KeyboardMiddleware, Middleware,
};
use risk_client::HttpRiskClient;
use risk_config::AppConfig;
use state::AppState;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting risk-dashboard, logging to {}", log_file.display());

    let config = AppConfig::load();
    log::info!("Risk service at {}", config.service_url);

    let client = HttpRiskClient::new(&config.service_url)
        .with_context(|| format!("Invalid service URL '{}'", config.service_url))?;

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let state: SharedState = Arc::new(RwLock::new(AppState::new(config)));

    let (action_tx, action_rx) = channel::<Action>();
    let (result_tx, result_rx) = channel::<Action>();

    // Order matters: keys are translated before analysis requests are handled
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(KeyboardMiddleware::new()),
        Box::new(AnalysisMiddleware::new(
            Arc::new(client),
            Dispatcher::new(action_tx.clone()),
        )),
    ];

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        state.clone(),
        middleware,
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &state, &action_tx, &result_rx, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // unblock the worker if the loop ended on an error
    let _ = action_tx.send(Action::Global(GlobalAction::Quit));
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }
    log::info!("Exiting risk-dashboard");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &SharedState,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        // Apply everything the worker forwarded since the last frame
        let pending: Vec<Action> = result_rx.try_iter().collect();
        if !pending.is_empty() {
            let mut guard = state
                .write()
                .map_err(|e| anyhow::anyhow!("State lock poisoned: {}", e))?;
            let current = std::mem::take(&mut *guard);
            *guard = pending.iter().fold(current, reducers::reduce);
        }

        let snapshot = state
            .read()
            .map_err(|e| anyhow::anyhow!("State lock poisoned: {}", e))?
            .clone();

        if !snapshot.running {
            break;
        }

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(&snapshot, area, frame);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // ignore key release
                if key.kind == KeyEventKind::Press
                    && action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .is_err()
                {
                    log::error!("Action channel disconnected");
                    break;
                }
            }
        }
    }

    Ok(())
}
