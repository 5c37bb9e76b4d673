//! Remote operation model
//!
//! Every remote call the dashboard makes is one of a fixed set of kinds.
//! Each initiated call is tagged with a per-kind sequence number so that only
//! the most recent call of a kind can update the session.

use risk_client::{
    FileExplanation, ImpactAnalysisResult, PrRiskResult, RepositoryRiskSnapshot,
    RepositorySummary, ScanResponse,
};

/// Sequence number of an initiated operation, unique per kind
///
/// The PR risk stage of a change analysis carries the number of its impact
/// analysis.
pub type Seq = u64;

/// Kind of remote operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Clone,
    Scan,
    Summarize,
    ExplainFile,
    ImpactAnalysis,
    PrRiskAnalysis,
    RepositoryRisk,
}

impl OperationKind {
    pub const COUNT: usize = 7;

    pub const ALL: [OperationKind; Self::COUNT] = [
        OperationKind::Clone,
        OperationKind::Scan,
        OperationKind::Summarize,
        OperationKind::ExplainFile,
        OperationKind::ImpactAnalysis,
        OperationKind::PrRiskAnalysis,
        OperationKind::RepositoryRisk,
    ];

    /// Operations whose results belong to the current folder
    pub const FOLDER_SCOPED: [OperationKind; 5] = [
        OperationKind::Scan,
        OperationKind::ExplainFile,
        OperationKind::ImpactAnalysis,
        OperationKind::PrRiskAnalysis,
        OperationKind::RepositoryRisk,
    ];

    /// Stable index for table lookups
    pub fn index(self) -> usize {
        match self {
            Self::Clone => 0,
            Self::Scan => 1,
            Self::Summarize => 2,
            Self::ExplainFile => 3,
            Self::ImpactAnalysis => 4,
            Self::PrRiskAnalysis => 5,
            Self::RepositoryRisk => 6,
        }
    }

    /// Short name used as status bar source
    pub fn label(self) -> &'static str {
        match self {
            Self::Clone => "Clone",
            Self::Scan => "Scan",
            Self::Summarize => "Summarize",
            Self::ExplainFile => "Explain",
            Self::ImpactAnalysis => "Impact",
            Self::PrRiskAnalysis => "PR Risk",
            Self::RepositoryRisk => "Repo Risk",
        }
    }

    /// Text shown while an operation of this kind is in flight
    pub fn progress_text(self) -> &'static str {
        match self {
            Self::Clone => "Cloning repository...",
            Self::Scan => "Scanning repository...",
            Self::Summarize => "Analyzing repository with AI...",
            Self::ExplainFile => "Analyzing file like a staff engineer...",
            Self::ImpactAnalysis => "Analyzing change impact...",
            Self::PrRiskAnalysis => "Assessing PR risk...",
            Self::RepositoryRisk => "Analyzing repository structure...",
        }
    }

    /// Whether progress and failures of this kind are shown in the output panel
    ///
    /// Change analysis and repository risk render into their own cards.
    pub fn uses_output_panel(self) -> bool {
        matches!(
            self,
            Self::Clone | Self::Scan | Self::Summarize | Self::ExplainFile
        )
    }
}

/// Status of the latest call of one operation kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OperationStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error(String),
}

impl OperationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Successful result of a remote operation
#[derive(Debug, Clone)]
pub enum OperationOutcome {
    Cloned {
        folder: String,
        repo_url: String,
        message: String,
    },
    Scanned(ScanResponse),
    Summarized(RepositorySummary),
    Explained {
        path: String,
        explanation: FileExplanation,
    },
    ImpactAnalyzed(ImpactAnalysisResult),
    PrRiskAnalyzed(PrRiskResult),
    RepositoryRiskLoaded {
        folder: String,
        snapshot: RepositoryRiskSnapshot,
    },
}

impl OperationOutcome {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Cloned { .. } => OperationKind::Clone,
            Self::Scanned(_) => OperationKind::Scan,
            Self::Summarized(_) => OperationKind::Summarize,
            Self::Explained { .. } => OperationKind::ExplainFile,
            Self::ImpactAnalyzed(_) => OperationKind::ImpactAnalysis,
            Self::PrRiskAnalyzed(_) => OperationKind::PrRiskAnalysis,
            Self::RepositoryRiskLoaded { .. } => OperationKind::RepositoryRisk,
        }
    }

    /// Status bar text for a successful outcome
    pub fn summary(&self) -> String {
        match self {
            Self::Cloned { message, .. } => message.clone(),
            Self::Scanned(listing) => format!("Found {} files.", listing.file_count()),
            Self::Summarized(_) => "Repository analysis ready".to_string(),
            Self::Explained { path, .. } => format!("Explained {}", path),
            Self::ImpactAnalyzed(result) => match result.analysis.first() {
                Some(entry) => format!("Impact of {}: {}", entry.file, entry.risk_level),
                None => "Impact analysis returned no entries".to_string(),
            },
            Self::PrRiskAnalyzed(result) => format!("PR risk: {}", result.classification),
            Self::RepositoryRiskLoaded { folder, snapshot } => {
                format!("{}: {}", folder, snapshot.classification)
            }
        }
    }
}
