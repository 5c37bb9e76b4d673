//! Analysis Actions
//!
//! Requests are dispatched by the keyboard middleware and consumed by the
//! analysis middleware, which turns them into remote calls. Lifecycle
//! actions are dispatched by the orchestrator and reduced into the session.

use crate::domain_models::{OperationKind, OperationOutcome, Seq};

/// Remote operation requests and lifecycle
#[derive(Debug, Clone)]
pub enum AnalysisAction {
    // Requests (read their inputs from the form and session)
    /// Clone the repository URL into the folder
    Clone,
    /// Scan the current folder for files
    Scan,
    /// Summarize the current folder
    Summarize,
    /// Explain the file under the file list cursor
    ExplainSelected,
    /// Analyze impact and PR risk of the changed file
    AnalyzeChange,
    /// Make the folder field the session folder
    ApplyFolder,

    // Lifecycle
    /// The session folder changed; folder-scoped results are discarded
    FolderChanged(String),
    /// A call was rejected before reaching the network
    Rejected { kind: OperationKind, message: String },
    /// A call was initiated
    Started { kind: OperationKind, seq: Seq },
    /// A call completed successfully
    Succeeded { seq: Seq, outcome: Box<OperationOutcome> },
    /// A call failed
    Failed {
        kind: OperationKind,
        seq: Seq,
        message: String,
    },
}

impl AnalysisAction {
    pub fn succeeded(seq: Seq, outcome: OperationOutcome) -> Self {
        Self::Succeeded {
            seq,
            outcome: Box::new(outcome),
        }
    }
}
