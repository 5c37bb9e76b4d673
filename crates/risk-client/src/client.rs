//! Risk service client trait
//!
//! This module defines the `RiskClient` trait that every client
//! implementation must satisfy. The dashboard holds an
//! `Arc<dyn RiskClient>` and never sees the transport.

use crate::error::ClientResult;
use crate::types::{
    ChangeSetRequest, CloneRequest, CloneResponse, FileExplanation, ImpactAnalysisResult,
    PrRiskResult, RepositoryRiskSnapshot, RepositorySummary, ScanResponse,
};
use async_trait::async_trait;

/// Risk analysis service client
///
/// One method per service endpoint. Each call performs exactly one remote
/// round-trip; no retries and no caching happen at this layer.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use risk_client::{RiskClient, ScanResponse};
///
/// async fn list_files(client: &dyn RiskClient) -> risk_client::ClientResult<ScanResponse> {
///     client.scan_repository("demo").await
/// }
/// ```
#[async_trait]
pub trait RiskClient: Send + Sync {
    /// Ask the service to clone `repo_url` into the workspace folder
    ///
    /// `POST /clone-repo`
    async fn clone_repository(&self, request: &CloneRequest) -> ClientResult<CloneResponse>;

    /// List the source files of a cloned repository
    ///
    /// `GET /scan-repo?folder_name=...`
    async fn scan_repository(&self, folder_name: &str) -> ClientResult<ScanResponse>;

    /// Architecture analysis plus a prose explanation of the repository
    ///
    /// `GET /summarize-repo?folder_name=...`
    async fn summarize_repository(&self, folder_name: &str) -> ClientResult<RepositorySummary>;

    /// Prose explanation of a single file
    ///
    /// `path` is a path as reported by a scan of the repository.
    ///
    /// `GET /explain-file?path=...`
    async fn explain_file(&self, path: &str) -> ClientResult<FileExplanation>;

    /// Per-file impact metrics for a change set
    ///
    /// `POST /impact-analysis`
    async fn impact_analysis(&self, request: &ChangeSetRequest)
        -> ClientResult<ImpactAnalysisResult>;

    /// Aggregate PR risk assessment for a change set
    ///
    /// `POST /pr-risk-analysis`
    async fn pr_risk_analysis(&self, request: &ChangeSetRequest) -> ClientResult<PrRiskResult>;

    /// Repository-wide risk scores and executive narrative
    ///
    /// `GET /repo-risk-score?folder_name=...`
    async fn repository_risk(&self, folder_name: &str) -> ClientResult<RepositoryRiskSnapshot>;
}
