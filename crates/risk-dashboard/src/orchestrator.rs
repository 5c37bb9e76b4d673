//! Orchestrator
//!
//! Turns user intents into remote calls. Every call is validated first;
//! rejected calls never reach the client. Accepted calls take the next
//! sequence number for their kind and dispatch `Started` before the network
//! task is spawned, so the session marks the call pending before any
//! completion can arrive. The spawned task reports exactly one outcome per
//! stage through the dispatcher. The PR risk stage of a change analysis
//! reuses the impact analysis sequence number, which ties its result to the
//! impact result it follows.

use crate::actions::{Action, AnalysisAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{OperationKind, OperationOutcome, Seq};
use risk_client::{ChangeSetRequest, ClientError, CloneRequest, RiskClient};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

const SCAN_FAILED: &str = "Failed to scan repository.";
const SUMMARIZE_FAILED: &str = "Failed to analyze repository.";
const EXPLAIN_FAILED: &str = "Failed to analyze file.";
const CHANGE_FAILED: &str = "Failed to analyze change risk";
const REPOSITORY_RISK_FAILED: &str = "Failed to fetch repository risk.";
const CLONE_SUCCEEDED: &str = "Repository cloned successfully!";

/// Input rejected before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a repository URL.")]
    MissingRepoUrl,
    #[error("Please enter folder name first.")]
    MissingFolder,
    #[error("Please select a file to explain.")]
    MissingFilePath,
    #[error("Please enter the changed file.")]
    MissingChangedFile,
}

/// Result of initiating an operation
pub type Launch = Result<JoinHandle<()>, ValidationError>;

/// Per-kind monotonically increasing sequence numbers
#[derive(Debug, Default)]
pub struct Sequencer {
    latest: [AtomicU64; OperationKind::COUNT],
}

impl Sequencer {
    /// Issue the next sequence number for `kind` (starting at 1)
    pub fn next(&self, kind: OperationKind) -> Seq {
        self.latest[kind.index()].fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `seq` is the most recently issued number for `kind`
    pub fn is_latest(&self, kind: OperationKind, seq: Seq) -> bool {
        self.latest[kind.index()].load(Ordering::SeqCst) == seq
    }

    /// Supersede the call of `kind` in flight without issuing a new one
    pub fn invalidate(&self, kind: OperationKind) {
        self.latest[kind.index()].fetch_add(1, Ordering::SeqCst);
    }
}

/// Sequences remote calls and reports their outcomes as actions
#[derive(Clone)]
pub struct Orchestrator {
    client: Arc<dyn RiskClient>,
    dispatcher: Dispatcher,
    sequencer: Arc<Sequencer>,
    handle: Handle,
}

impl Orchestrator {
    pub fn new(client: Arc<dyn RiskClient>, dispatcher: Dispatcher, handle: Handle) -> Self {
        Self {
            client,
            dispatcher,
            sequencer: Arc::new(Sequencer::default()),
            handle,
        }
    }

    /// Mark every folder-scoped call in flight as superseded
    ///
    /// Call before the session switches folder so a running change analysis
    /// does not go on to its PR risk stage.
    pub fn supersede_folder_scoped(&self) {
        for kind in OperationKind::FOLDER_SCOPED {
            self.sequencer.invalidate(kind);
        }
    }

    /// Clone `repo_url` into `folder`; on success the folder becomes the
    /// session folder
    pub fn clone_repository(&self, repo_url: &str, folder: &str) -> Launch {
        let kind = OperationKind::Clone;
        let repo_url = repo_url.trim().to_string();
        let folder = folder.trim().to_string();
        if repo_url.is_empty() {
            return self.reject(kind, ValidationError::MissingRepoUrl);
        }
        if folder.is_empty() {
            return self.reject(kind, ValidationError::MissingFolder);
        }

        let seq = self.begin(kind);
        let client = Arc::clone(&self.client);
        Ok(self.spawn(async move {
            let request = CloneRequest::new(repo_url.clone(), folder.clone());
            match client.clone_repository(&request).await {
                Ok(response) => {
                    let message = response
                        .message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| CLONE_SUCCEEDED.to_string());
                    log::info!("Cloned {} into '{}'", repo_url, folder);
                    AnalysisAction::succeeded(
                        seq,
                        OperationOutcome::Cloned {
                            folder,
                            repo_url,
                            message,
                        },
                    )
                }
                Err(e) => {
                    let message = e.message_or(&e.to_string());
                    failure(kind, seq, &e, message)
                }
            }
        }))
    }

    /// List the files of `folder`
    pub fn scan(&self, folder: &str) -> Launch {
        let kind = OperationKind::Scan;
        let folder = self.require_folder(kind, folder)?;
        let seq = self.begin(kind);
        let client = Arc::clone(&self.client);
        Ok(self.spawn(async move {
            match client.scan_repository(&folder).await {
                Ok(listing) => {
                    log::info!("Scanned '{}': {} files", folder, listing.file_count());
                    AnalysisAction::succeeded(seq, OperationOutcome::Scanned(listing))
                }
                Err(e) => failure(kind, seq, &e, SCAN_FAILED),
            }
        }))
    }

    /// Architecture summary of `folder`; independent of any scan
    pub fn summarize(&self, folder: &str) -> Launch {
        let kind = OperationKind::Summarize;
        let folder = self.require_folder(kind, folder)?;
        let seq = self.begin(kind);
        let client = Arc::clone(&self.client);
        Ok(self.spawn(async move {
            match client.summarize_repository(&folder).await {
                Ok(summary) => {
                    log::info!("Summarized '{}'", folder);
                    AnalysisAction::succeeded(seq, OperationOutcome::Summarized(summary))
                }
                Err(e) => failure(kind, seq, &e, SUMMARIZE_FAILED),
            }
        }))
    }

    /// Explain one scanned file
    pub fn explain_file(&self, path: &str) -> Launch {
        let kind = OperationKind::ExplainFile;
        if path.trim().is_empty() {
            return self.reject(kind, ValidationError::MissingFilePath);
        }

        let path = path.to_string();
        let seq = self.begin(kind);
        let client = Arc::clone(&self.client);
        Ok(self.spawn(async move {
            match client.explain_file(&path).await {
                Ok(explanation) => {
                    log::info!("Explained {}", path);
                    AnalysisAction::succeeded(
                        seq,
                        OperationOutcome::Explained { path, explanation },
                    )
                }
                Err(e) => failure(kind, seq, &e, EXPLAIN_FAILED),
            }
        }))
    }

    /// Impact analysis of one changed file, followed by PR risk analysis of
    /// the same change set when impact analysis succeeds
    pub fn analyze_change(&self, folder: &str, changed_file: &str) -> Launch {
        let kind = OperationKind::ImpactAnalysis;
        let folder = self.require_folder(kind, folder)?;
        let changed_file = changed_file.trim();
        if changed_file.is_empty() {
            return self.reject(kind, ValidationError::MissingChangedFile);
        }

        let request = ChangeSetRequest::single(folder, changed_file);
        let impact_seq = self.begin(kind);
        let client = Arc::clone(&self.client);
        let dispatcher = self.dispatcher.clone();
        let sequencer = Arc::clone(&self.sequencer);
        Ok(self.handle.spawn(async move {
            let impact = match client.impact_analysis(&request).await {
                Ok(impact) => impact,
                Err(e) => {
                    let action = failure(kind, impact_seq, &e, CHANGE_FAILED);
                    dispatcher.dispatch(Action::Analysis(action));
                    return;
                }
            };
            log::info!(
                "Impact analysis of {:?}: {} entries",
                request.changed_files,
                impact.analysis.len()
            );
            dispatcher.dispatch(Action::Analysis(AnalysisAction::succeeded(
                impact_seq,
                OperationOutcome::ImpactAnalyzed(impact),
            )));

            if !sequencer.is_latest(kind, impact_seq) {
                log::debug!("Change analysis #{} superseded, skipping PR risk", impact_seq);
                return;
            }

            let pr_kind = OperationKind::PrRiskAnalysis;
            let pr_seq = impact_seq;
            announce(&dispatcher, pr_kind, pr_seq);
            let action = match client.pr_risk_analysis(&request).await {
                Ok(result) => {
                    log::info!("PR risk of {:?}: {}", request.changed_files, result.classification);
                    AnalysisAction::succeeded(pr_seq, OperationOutcome::PrRiskAnalyzed(result))
                }
                Err(e) => failure(pr_kind, pr_seq, &e, CHANGE_FAILED),
            };
            dispatcher.dispatch(Action::Analysis(action));
        }))
    }

    /// Repository-wide risk of `folder`
    pub fn repository_risk(&self, folder: &str) -> Launch {
        let kind = OperationKind::RepositoryRisk;
        let folder = self.require_folder(kind, folder)?;
        let seq = self.begin(kind);
        let client = Arc::clone(&self.client);
        Ok(self.spawn(async move {
            match client.repository_risk(&folder).await {
                Ok(snapshot) => {
                    log::info!("Repository risk of '{}': {}", folder, snapshot.classification);
                    AnalysisAction::succeeded(
                        seq,
                        OperationOutcome::RepositoryRiskLoaded { folder, snapshot },
                    )
                }
                Err(e) => {
                    let message = e.message_or(REPOSITORY_RISK_FAILED);
                    failure(kind, seq, &e, message)
                }
            }
        }))
    }

    fn require_folder(&self, kind: OperationKind, folder: &str) -> Result<String, ValidationError> {
        let folder = folder.trim();
        if folder.is_empty() {
            self.dispatch_rejection(kind, &ValidationError::MissingFolder);
            return Err(ValidationError::MissingFolder);
        }
        Ok(folder.to_string())
    }

    fn reject(&self, kind: OperationKind, error: ValidationError) -> Launch {
        self.dispatch_rejection(kind, &error);
        Err(error)
    }

    fn dispatch_rejection(&self, kind: OperationKind, error: &ValidationError) {
        log::warn!("{:?} rejected: {}", kind, error);
        self.dispatcher
            .dispatch(Action::Analysis(AnalysisAction::Rejected {
                kind,
                message: error.to_string(),
            }));
    }

    fn begin(&self, kind: OperationKind) -> Seq {
        begin(&self.sequencer, &self.dispatcher, kind)
    }

    /// Run a single-stage operation and dispatch its outcome
    fn spawn<F>(&self, task: F) -> JoinHandle<()>
    where
        F: Future<Output = AnalysisAction> + Send + 'static,
    {
        let dispatcher = self.dispatcher.clone();
        self.handle.spawn(async move {
            let action = task.await;
            dispatcher.dispatch(Action::Analysis(action));
        })
    }
}

fn begin(sequencer: &Sequencer, dispatcher: &Dispatcher, kind: OperationKind) -> Seq {
    let seq = sequencer.next(kind);
    announce(dispatcher, kind, seq);
    seq
}

fn announce(dispatcher: &Dispatcher, kind: OperationKind, seq: Seq) {
    log::info!("{:?} #{} started", kind, seq);
    dispatcher.dispatch(Action::Analysis(AnalysisAction::Started { kind, seq }));
}

fn failure(
    kind: OperationKind,
    seq: Seq,
    error: &ClientError,
    message: impl Into<String>,
) -> AnalysisAction {
    log::error!("{:?} #{} failed: {}", kind, seq, error);
    AnalysisAction::Failed {
        kind,
        seq,
        message: message.into(),
    }
}
