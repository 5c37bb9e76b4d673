//! Session Reducer
//!
//! Applies operation lifecycle actions to the session. A completion only
//! lands when its sequence number is the latest one begun for its kind;
//! anything older is dropped without touching state.

use crate::actions::{AnalysisAction, StatusBarAction};
use crate::domain_models::{OperationKind, OperationOutcome, OperationStatus, Seq};
use crate::state::{Explanation, OutputRegion, SessionState};

pub fn reduce_session(mut state: SessionState, action: &AnalysisAction) -> SessionState {
    match action {
        AnalysisAction::FolderChanged(name) => {
            if state.set_folder(name) {
                log::info!("Session folder is now '{}'", state.folder);
            }
        }
        AnalysisAction::Rejected { kind, message } => {
            state.operations.reject(*kind, message.clone());
            state.output = OutputRegion::Failure(message.clone());
        }
        AnalysisAction::Started { kind, seq } if !follows_impact(&state, *kind, *seq) => {
            log::debug!("Discarding PR risk #{} of a superseded change analysis", seq);
        }
        AnalysisAction::Started { kind, seq } => {
            state.operations.begin(*kind, *seq);
            if kind.uses_output_panel() {
                state.output = OutputRegion::Progress(kind.progress_text().to_string());
            }
        }
        AnalysisAction::Succeeded { seq, outcome } => {
            let kind = outcome.kind();
            if !state.operations.accepts(kind, *seq) {
                log::debug!("Discarding stale {:?} result #{}", kind, seq);
                return state;
            }
            state.operations.finish(kind, OperationStatus::Success);
            apply_outcome(&mut state, outcome);
        }
        AnalysisAction::Failed { kind, seq, message } => {
            if !state.operations.accepts(*kind, *seq) {
                log::debug!("Discarding stale {:?} failure #{}", kind, seq);
                return state;
            }
            state
                .operations
                .finish(*kind, OperationStatus::Error(message.clone()));
            if *kind != OperationKind::RepositoryRisk {
                state.output = OutputRegion::Failure(message.clone());
            }
            if *kind == OperationKind::ImpactAnalysis {
                // the PR risk shown belongs to an earlier change
                state.pr_risk = None;
                state.operations.reset(OperationKind::PrRiskAnalysis);
            }
        }
        AnalysisAction::Clone
        | AnalysisAction::Scan
        | AnalysisAction::Summarize
        | AnalysisAction::ExplainSelected
        | AnalysisAction::AnalyzeChange
        | AnalysisAction::ApplyFolder => {}
    }
    state
}

/// PR risk runs under the sequence number of the impact analysis it follows;
/// it is only armed while that impact result is the one on display
fn follows_impact(state: &SessionState, kind: OperationKind, seq: Seq) -> bool {
    kind != OperationKind::PrRiskAnalysis
        || state.operations.succeeded(OperationKind::ImpactAnalysis, seq)
}

fn apply_outcome(state: &mut SessionState, outcome: &OperationOutcome) {
    match outcome {
        OperationOutcome::Cloned {
            folder,
            repo_url,
            message,
        } => {
            state.repo_url = repo_url.clone();
            state.set_folder(folder);
            state.output = OutputRegion::Message(message.clone());
        }
        OperationOutcome::Scanned(listing) => {
            state.output = OutputRegion::Message(outcome.summary());
            state.listing = Some(listing.clone());
            state.file_cursor = 0;
        }
        OperationOutcome::Summarized(summary) => {
            state.summary = Some(summary.clone());
            state.output = OutputRegion::Summary;
        }
        OperationOutcome::Explained { path, explanation } => {
            state.explanation = Some(Explanation {
                path: path.clone(),
                text: explanation.explanation.clone(),
            });
            state.output = OutputRegion::Explanation;
        }
        OperationOutcome::ImpactAnalyzed(result) => {
            state.impact = Some(result.clone());
        }
        OperationOutcome::PrRiskAnalyzed(result) => {
            state.pr_risk = Some(result.clone());
        }
        OperationOutcome::RepositoryRiskLoaded { snapshot, .. } => {
            state.repository_risk = Some(snapshot.clone());
        }
    }
}

/// Status bar message for an analysis action, evaluated before reduction
///
/// Stale completions and no-op folder changes produce nothing.
pub fn status_notice(state: &SessionState, action: &AnalysisAction) -> Option<StatusBarAction> {
    match action {
        AnalysisAction::FolderChanged(name) if name.trim() != state.folder => Some(
            StatusBarAction::info(format!("Folder set to {}", name.trim()), "Folder"),
        ),
        AnalysisAction::Rejected { kind, message } => {
            Some(StatusBarAction::error(message.clone(), kind.label()))
        }
        AnalysisAction::Started { kind, seq } if follows_impact(state, *kind, *seq) => Some(
            StatusBarAction::running(kind.progress_text(), kind.label()),
        ),
        AnalysisAction::Succeeded { seq, outcome }
            if state.operations.accepts(outcome.kind(), *seq) =>
        {
            Some(StatusBarAction::success(
                outcome.summary(),
                outcome.kind().label(),
            ))
        }
        AnalysisAction::Failed { kind, seq, message } if state.operations.accepts(*kind, *seq) => {
            Some(StatusBarAction::error(message.clone(), kind.label()))
        }
        _ => None,
    }
}
