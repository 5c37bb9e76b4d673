//! Session State
//!
//! The current folder, the latest snapshot of every remote result and the
//! status of each operation kind.

use crate::domain_models::{OperationKind, OperationStatus, Seq};
use risk_client::{
    FileEntry, ImpactAnalysisResult, PrRiskResult, RepositoryRiskSnapshot, RepositorySummary,
    ScanResponse,
};

/// What the shared output panel currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputRegion {
    #[default]
    Placeholder,
    /// An operation is in flight
    Progress(String),
    /// Plain message (clone result, scan count)
    Message(String),
    /// Failure or validation text
    Failure(String),
    /// The stored repository summary
    Summary,
    /// The stored file explanation
    Explanation,
}

/// Explanation of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub path: String,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
struct OperationEntry {
    status: OperationStatus,
    /// Sequence number of the call whose completion will be accepted
    latest: Option<Seq>,
}

/// Status and accepted sequence number per operation kind
#[derive(Debug, Clone, Default)]
pub struct OperationTable {
    entries: [OperationEntry; OperationKind::COUNT],
}

impl OperationTable {
    pub fn status(&self, kind: OperationKind) -> &OperationStatus {
        &self.entries[kind.index()].status
    }

    /// Record a newly initiated call; it supersedes any call in flight
    pub fn begin(&mut self, kind: OperationKind, seq: Seq) {
        let entry = &mut self.entries[kind.index()];
        entry.status = OperationStatus::Pending;
        entry.latest = Some(seq);
    }

    /// Whether a completion tagged `seq` is the current call of `kind`
    pub fn accepts(&self, kind: OperationKind, seq: Seq) -> bool {
        self.entries[kind.index()].latest == Some(seq)
    }

    pub fn finish(&mut self, kind: OperationKind, status: OperationStatus) {
        self.entries[kind.index()].status = status;
    }

    /// Back to idle; any call still in flight will be ignored
    pub fn reset(&mut self, kind: OperationKind) {
        self.entries[kind.index()] = OperationEntry::default();
    }

    /// Mark a kind as failed without a call (validation)
    ///
    /// A call in flight keeps its pending status until it completes.
    pub fn reject(&mut self, kind: OperationKind, message: impl Into<String>) {
        let entry = &mut self.entries[kind.index()];
        if !entry.status.is_pending() {
            entry.status = OperationStatus::Error(message.into());
        }
    }

    /// Whether `seq` is the current call of `kind` and it succeeded
    pub fn succeeded(&self, kind: OperationKind, seq: Seq) -> bool {
        self.accepts(kind, seq) && self.status(kind) == &OperationStatus::Success
    }
}

/// Session state
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Repository URL of the last successful clone
    pub repo_url: String,
    /// Folder all folder-scoped operations run against
    pub folder: String,
    pub operations: OperationTable,
    pub listing: Option<ScanResponse>,
    /// Cursor into `listing.files`
    pub file_cursor: usize,
    pub summary: Option<RepositorySummary>,
    pub explanation: Option<Explanation>,
    pub impact: Option<ImpactAnalysisResult>,
    pub pr_risk: Option<PrRiskResult>,
    pub repository_risk: Option<RepositoryRiskSnapshot>,
    pub output: OutputRegion,
}

impl SessionState {
    pub fn status(&self, kind: OperationKind) -> &OperationStatus {
        self.operations.status(kind)
    }

    pub fn has_folder(&self) -> bool {
        !self.folder.is_empty()
    }

    /// Switch to another folder
    ///
    /// Results that belong to the previous folder are dropped and their
    /// operations reset to idle. The repository URL and the repository
    /// summary are kept. Returns false when the folder did not change.
    pub fn set_folder(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name == self.folder {
            return false;
        }

        self.folder = name.to_string();
        self.listing = None;
        self.file_cursor = 0;
        self.explanation = None;
        self.impact = None;
        self.pr_risk = None;
        self.repository_risk = None;
        for kind in OperationKind::FOLDER_SCOPED {
            self.operations.reset(kind);
        }
        if self.output == OutputRegion::Explanation {
            self.output = OutputRegion::Placeholder;
        }
        true
    }

    pub fn files(&self) -> &[FileEntry] {
        self.listing
            .as_ref()
            .map(|listing| listing.files.as_slice())
            .unwrap_or_default()
    }

    /// File under the cursor
    pub fn selected_file(&self) -> Option<&FileEntry> {
        self.files().get(self.file_cursor)
    }

    pub fn select_next(&mut self) {
        let len = self.files().len();
        if len > 0 {
            self.file_cursor = (self.file_cursor + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.files().len();
        if len > 0 {
            self.file_cursor = (self.file_cursor + len - 1) % len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(paths: &[&str]) -> ScanResponse {
        ScanResponse {
            files: paths
                .iter()
                .map(|p| FileEntry {
                    path: p.to_string(),
                })
                .collect(),
            total_files: Some(paths.len() as u64),
        }
    }

    #[test]
    fn test_set_folder_same_name_is_noop() {
        let mut session = SessionState {
            folder: "demo".to_string(),
            listing: Some(listing(&["a.js"])),
            ..Default::default()
        };
        assert!(!session.set_folder(" demo "));
        assert!(session.listing.is_some());
    }

    #[test]
    fn test_set_folder_clears_folder_scoped_results() {
        let mut session = SessionState {
            repo_url: "https://example.com/x.git".to_string(),
            folder: "demo".to_string(),
            listing: Some(listing(&["a.js", "b.js"])),
            file_cursor: 1,
            impact: Some(ImpactAnalysisResult::default()),
            pr_risk: Some(PrRiskResult::default()),
            repository_risk: Some(RepositoryRiskSnapshot::default()),
            summary: Some(RepositorySummary::default()),
            ..Default::default()
        };
        session.operations.begin(OperationKind::Scan, 3);

        assert!(session.set_folder("other"));
        assert_eq!(session.folder, "other");
        assert_eq!(session.repo_url, "https://example.com/x.git");
        assert!(session.listing.is_none());
        assert_eq!(session.file_cursor, 0);
        assert!(session.impact.is_none());
        assert!(session.pr_risk.is_none());
        assert!(session.repository_risk.is_none());
        assert!(session.summary.is_some());
        assert_eq!(session.status(OperationKind::Scan), &OperationStatus::Idle);
        assert!(!session.operations.accepts(OperationKind::Scan, 3));
    }

    #[test]
    fn test_rejection_keeps_call_in_flight_pending() {
        let mut operations = OperationTable::default();
        operations.begin(OperationKind::Scan, 1);
        operations.reject(OperationKind::Scan, "Please enter folder name first.");
        assert!(operations.status(OperationKind::Scan).is_pending());

        operations.finish(OperationKind::Scan, OperationStatus::Success);
        operations.reject(OperationKind::Scan, "Please enter folder name first.");
        assert_eq!(
            operations.status(OperationKind::Scan).error(),
            Some("Please enter folder name first.")
        );
    }

    #[test]
    fn test_succeeded_requires_current_call() {
        let mut operations = OperationTable::default();
        operations.begin(OperationKind::ImpactAnalysis, 2);
        assert!(!operations.succeeded(OperationKind::ImpactAnalysis, 2));

        operations.finish(OperationKind::ImpactAnalysis, OperationStatus::Success);
        assert!(operations.succeeded(OperationKind::ImpactAnalysis, 2));
        assert!(!operations.succeeded(OperationKind::ImpactAnalysis, 1));

        operations.reset(OperationKind::ImpactAnalysis);
        assert!(!operations.succeeded(OperationKind::ImpactAnalysis, 2));
    }

    #[test]
    fn test_file_cursor_wraps() {
        let mut session = SessionState {
            listing: Some(listing(&["a.js", "b.js", "c.js"])),
            ..Default::default()
        };
        session.select_previous();
        assert_eq!(session.selected_file().unwrap().path, "c.js");
        session.select_next();
        assert_eq!(session.selected_file().unwrap().path, "a.js");
    }

    #[test]
    fn test_cursor_on_empty_listing() {
        let mut session = SessionState::default();
        session.select_next();
        assert!(session.selected_file().is_none());
    }
}
