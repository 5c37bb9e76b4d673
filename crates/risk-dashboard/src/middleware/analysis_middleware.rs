//! Analysis Middleware
//!
//! Handles remote operation requests:
//! - Reads inputs from the form and session snapshot
//! - Commits the folder field as session folder before folder-scoped calls,
//!   superseding the calls still running against the previous folder
//! - Fetches repository risk whenever the session folder changes
//! - Hands the call to the orchestrator, which reports back via actions

use crate::actions::{Action, AnalysisAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{OperationKind, OperationOutcome};
use crate::middleware::Middleware;
use crate::orchestrator::{Launch, Orchestrator};
use crate::state::AppState;
use risk_client::RiskClient;
use std::sync::Arc;
use tokio::runtime::Runtime;

pub struct AnalysisMiddleware {
    orchestrator: Orchestrator,
    /// Runtime the orchestrator spawns network tasks on
    _runtime: Runtime,
}

impl AnalysisMiddleware {
    /// `dispatcher` must feed the background worker so outcomes re-enter the chain
    pub fn new(client: Arc<dyn RiskClient>, dispatcher: Dispatcher) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        let orchestrator = Orchestrator::new(client, dispatcher, runtime.handle().clone());
        Self {
            orchestrator,
            _runtime: runtime,
        }
    }

    /// Make the folder field the session folder; returns the folder to use
    fn commit_folder(&self, state: &AppState, dispatcher: &Dispatcher) -> String {
        let folder = state.form.folder_name().to_string();
        if !folder.is_empty() && folder != state.session.folder {
            log::info!(
                "AnalysisMiddleware: folder '{}' -> '{}'",
                state.session.folder,
                folder
            );
            self.orchestrator.supersede_folder_scoped();
            dispatcher.dispatch(Action::Analysis(AnalysisAction::FolderChanged(
                folder.clone(),
            )));
            launched(self.orchestrator.repository_risk(&folder));
        }
        folder
    }
}

fn launched(launch: Launch) {
    if let Err(e) = launch {
        log::debug!("AnalysisMiddleware: not started: {}", e);
    }
}

impl Middleware for AnalysisMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Analysis(analysis) = action else {
            return true;
        };

        match analysis {
            AnalysisAction::Clone => {
                launched(
                    self.orchestrator
                        .clone_repository(&state.form.repo_url, &state.form.folder),
                );
                false
            }
            AnalysisAction::Scan => {
                let folder = self.commit_folder(state, dispatcher);
                launched(self.orchestrator.scan(&folder));
                false
            }
            AnalysisAction::Summarize => {
                let folder = self.commit_folder(state, dispatcher);
                launched(self.orchestrator.summarize(&folder));
                false
            }
            AnalysisAction::ExplainSelected => {
                let path = state
                    .session
                    .selected_file()
                    .map(|file| file.path.as_str())
                    .unwrap_or_default();
                launched(self.orchestrator.explain_file(path));
                false
            }
            AnalysisAction::AnalyzeChange => {
                let folder = self.commit_folder(state, dispatcher);
                launched(
                    self.orchestrator
                        .analyze_change(&folder, &state.form.changed_file),
                );
                false
            }
            AnalysisAction::ApplyFolder => {
                if self.commit_folder(state, dispatcher).is_empty() {
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                        "Please enter folder name first.",
                        "Folder",
                    )));
                }
                false
            }
            AnalysisAction::Succeeded { seq, outcome } => {
                // a successful clone moves the session to the cloned folder
                if let OperationOutcome::Cloned { folder, .. } = outcome.as_ref() {
                    let current = state
                        .session
                        .operations
                        .accepts(OperationKind::Clone, *seq);
                    if current && *folder != state.session.folder {
                        self.orchestrator.supersede_folder_scoped();
                        launched(self.orchestrator.repository_risk(folder));
                    }
                }
                true
            }
            AnalysisAction::FolderChanged(_)
            | AnalysisAction::Rejected { .. }
            | AnalysisAction::Started { .. }
            | AnalysisAction::Failed { .. } => true,
        }
    }
}
