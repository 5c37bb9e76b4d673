//! Risk analysis service client
//!
//! This crate provides a trait-based client for the remote code risk
//! analysis service. The dashboard only talks to the [`RiskClient`] trait,
//! which keeps the orchestration logic testable against fakes and mock
//! endpoints.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              RiskClient trait                    │
//! │  - clone_repository() / scan_repository()        │
//! │  - summarize_repository() / explain_file()       │
//! │  - impact_analysis() / pr_risk_analysis()        │
//! │  - repository_risk()                             │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ HttpRiskClient  │
//!              │ (reqwest, JSON) │
//!              └─────────────────┘
//! ```
//!
//! Every failure is classified into a [`ClientError`]: the request never got
//! a response, the service answered with a non-2xx status, or the payload
//! could not be decoded.
//!
//! # Example
//!
//! ```rust,no_run
//! use risk_client::{ChangeSetRequest, HttpRiskClient, RiskClient};
//!
//! # async fn example() -> Result<(), risk_client::ClientError> {
//! let client = HttpRiskClient::new("http://127.0.0.1:8000")?;
//! let request = ChangeSetRequest::single("demo", "lib/utils.js");
//! let impact = client.impact_analysis(&request).await?;
//! println!("{} entries", impact.analysis.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

/// Service origin used when nothing else is configured
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";

pub use client::RiskClient;
pub use error::{ClientError, ClientResult};
pub use http_client::HttpRiskClient;
pub use types::{
    AiAnalysis, ChangeSetRequest, CloneRequest, CloneResponse, Confidence, ExecutiveAnalysis,
    ExecutiveSummary, FileEntry, FileExplanation, FileImpact, HybridGovernance,
    ImpactAnalysisResult, MergeControl, NarrativeSection, PrRiskResult, RepositoryRiskSnapshot,
    RepositorySummary, ReviewerSuggestion, ScanResponse, TestingRecommendation,
};
