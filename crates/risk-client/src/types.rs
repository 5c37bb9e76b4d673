//! Risk service data transfer objects
//!
//! These types mirror the JSON shapes of the risk analysis service. They are
//! deliberately lenient: nested sections the service only sometimes produces
//! are `Option`s, and scalar fields fall back to their defaults when missing,
//! so a partial payload still decodes. Enumerated values (classifications,
//! severities, merge decisions) are kept as strings because the service
//! occasionally emits values outside the documented sets; interpreting them
//! is the dashboard's job.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /clone-repo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneRequest {
    pub repo_url: String,
    pub folder_name: String,
}

impl CloneRequest {
    pub fn new(repo_url: impl Into<String>, folder_name: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            folder_name: folder_name.into(),
        }
    }
}

/// Response of `POST /clone-repo`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body shared by `POST /impact-analysis` and `POST /pr-risk-analysis`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSetRequest {
    pub folder_name: String,
    pub changed_files: Vec<String>,
}

impl ChangeSetRequest {
    /// Change set consisting of exactly one changed file
    pub fn single(folder_name: impl Into<String>, changed_file: impl Into<String>) -> Self {
        Self {
            folder_name: folder_name.into(),
            changed_files: vec![changed_file.into()],
        }
    }
}

/// A single file reported by `GET /scan-repo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
}

/// Response of `GET /scan-repo`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResponse {
    #[serde(default)]
    pub files: Vec<FileEntry>,
    #[serde(default)]
    pub total_files: Option<u64>,
}

impl ScanResponse {
    /// Total reported by the service, or the number of listed files
    pub fn file_count(&self) -> u64 {
        self.total_files.unwrap_or(self.files.len() as u64)
    }
}

/// Response of `GET /summarize-repo`
///
/// `analysis` is free-form JSON produced by the architecture analyzer and is
/// displayed verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    #[serde(default)]
    pub analysis: Value,
    #[serde(default)]
    pub explanation: String,
}

/// Response of `GET /explain-file`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileExplanation {
    #[serde(default)]
    pub explanation: String,
}

/// Per-file impact metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImpact {
    pub file: String,
    /// Risk score, nominally in `[0, 100]`
    pub risk_score: f64,
    /// `LOW`, `MEDIUM` or `HIGH`
    pub risk_level: String,
    pub direct_dependents: u64,
    pub transitive_dependents: u64,
    pub depth: u64,
}

/// AI commentary attached to an impact analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutiveSummary {
    pub severity: String,
    pub why_risky: String,
    pub testing_recommendation: String,
    pub developer_action: String,
}

/// Response of `POST /impact-analysis`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactAnalysisResult {
    /// One entry per requested changed file, in request order
    #[serde(default)]
    pub analysis: Vec<FileImpact>,
    #[serde(default)]
    pub executive_summary: ExecutiveSummary,
}

/// AI review summary of a PR
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiAnalysis {
    pub review_focus: String,
    pub testing_strategy: String,
    /// `LOW`, `MEDIUM` or `HIGH`
    pub merge_readiness: String,
    pub risk_explanation: String,
}

/// Suggested reviewers and review requirements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewerSuggestion {
    pub primary_reviewer: String,
    pub secondary_reviewer: Option<String>,
    pub approvals_required: u32,
    pub architecture_review: bool,
    pub security_review: bool,
    pub reason: String,
}

/// Structured testing guidance, one requirement level per testing kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestingRecommendation {
    pub unit_testing: Option<String>,
    pub integration_testing: Option<String>,
    pub regression_testing: Option<String>,
    pub performance_testing: Option<String>,
    pub security_testing: Option<String>,
    pub test_coverage_target: Option<String>,
}

/// Confidence of the risk assessment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Confidence {
    pub confidence_score: f64,
    pub confidence_level: String,
}

/// Gating recommendation of the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeControl {
    /// `BLOCK`, `MANUAL_REVIEW`, `ALLOW_WITH_REVIEW` or `AUTO_APPROVE`
    pub merge_decision: String,
    pub decision_reason: String,
}

/// Weighted governance decision combining score, depth and AI signal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HybridGovernance {
    pub governance_score: f64,
    pub governance_level: String,
    pub final_merge_decision: String,
    pub explanation: String,
}

/// Response of `POST /pr-risk-analysis`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrRiskResult {
    pub pr_risk_score: f64,
    pub classification: String,
    pub total_files_affected: u64,
    pub max_impact_depth: u64,
    pub high_risk_modules: Vec<String>,
    pub file_breakdown: Vec<FileImpact>,
    pub ai_analysis: AiAnalysis,
    pub reviewer_suggestion: Option<ReviewerSuggestion>,
    pub testing_recommendation: Option<TestingRecommendation>,
    pub confidence: Option<Confidence>,
    pub merge_control: Option<MergeControl>,
    pub hybrid_governance: Option<HybridGovernance>,
}

/// One section of the executive narrative
///
/// The narrative is model-generated: a section is sometimes plain text and
/// sometimes an object such as `{"overview": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NarrativeSection {
    Text(String),
    Fields(Map<String, Value>),
    Other(Value),
}

impl NarrativeSection {
    /// Text of this section, preferring the field named `key` for objects
    ///
    /// Falls back to the first string-valued field. Empty text counts as
    /// absent.
    pub fn text(&self, key: &str) -> Option<&str> {
        let text = match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Fields(fields) => fields
                .get(key)
                .and_then(Value::as_str)
                .or_else(|| fields.values().find_map(Value::as_str)),
            Self::Other(_) => None,
        };
        text.map(str::trim).filter(|text| !text.is_empty())
    }
}

/// Model-generated narrative about a repository's risk profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutiveAnalysis {
    pub executive_summary: Option<NarrativeSection>,
    pub primary_architectural_weakness: Option<NarrativeSection>,
    pub immediate_engineering_action: Option<NarrativeSection>,
    pub long_term_structural_recommendation: Option<NarrativeSection>,
}

/// Response of `GET /repo-risk-score`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryRiskSnapshot {
    pub overall_score: f64,
    /// `HEALTHY`, `STABLE`, `MODERATE RISK`, `HIGH RISK` or `CRITICAL`, in any case
    pub classification: String,
    pub architecture_score: f64,
    pub dependency_risk: f64,
    pub bus_factor_risk: f64,
    pub volatility_risk: f64,
    pub executive_analysis: Option<ExecutiveAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_change_set_request_serialization() {
        let request = ChangeSetRequest::single("demo", "lib/utils.js");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({"folder_name": "demo", "changed_files": ["lib/utils.js"]})
        );
    }

    #[test]
    fn test_scan_file_count_falls_back_to_listing() {
        let scan: ScanResponse =
            serde_json::from_value(json!({"files": [{"path": "a.rs"}, {"path": "b.rs"}]}))
                .unwrap();
        assert_eq!(scan.file_count(), 2);

        let scan: ScanResponse =
            serde_json::from_value(json!({"files": [], "total_files": 40})).unwrap();
        assert_eq!(scan.file_count(), 40);
    }

    #[test]
    fn test_pr_risk_without_optional_sections() {
        let result: PrRiskResult = serde_json::from_value(json!({
            "pr_risk_score": 42.5,
            "classification": "MEDIUM",
            "total_files_affected": 3,
            "max_impact_depth": 2,
            "high_risk_modules": [],
            "file_breakdown": [],
            "ai_analysis": {
                "review_focus": "API surface",
                "testing_strategy": "integration",
                "merge_readiness": "MEDIUM",
                "risk_explanation": "moderate fan-out"
            }
        }))
        .unwrap();

        assert_eq!(result.classification, "MEDIUM");
        assert_eq!(result.ai_analysis.merge_readiness, "MEDIUM");
        assert!(result.reviewer_suggestion.is_none());
        assert!(result.testing_recommendation.is_none());
        assert!(result.confidence.is_none());
        assert!(result.merge_control.is_none());
        assert!(result.hybrid_governance.is_none());
    }

    #[test]
    fn test_pr_risk_with_enterprise_sections() {
        let result: PrRiskResult = serde_json::from_value(json!({
            "pr_risk_score": 81,
            "classification": "CRITICAL",
            "reviewer_suggestion": {
                "primary_reviewer": "Senior Maintainer",
                "secondary_reviewer": null,
                "approvals_required": 2,
                "architecture_review": true,
                "security_review": true,
                "reason": "HIGH downstream impact detected"
            },
            "testing_recommendation": {
                "unit_testing": "Mandatory",
                "test_coverage_target": ">= 80%"
            },
            "confidence": {"confidence_score": 90.0, "confidence_level": "VERY HIGH"},
            "merge_control": {"merge_decision": "BLOCK", "decision_reason": "High risk"}
        }))
        .unwrap();

        let reviewers = result.reviewer_suggestion.unwrap();
        assert_eq!(reviewers.secondary_reviewer, None);
        assert_eq!(reviewers.approvals_required, 2);

        let testing = result.testing_recommendation.unwrap();
        assert_eq!(testing.unit_testing.as_deref(), Some("Mandatory"));
        assert_eq!(testing.regression_testing, None);

        assert_eq!(result.merge_control.unwrap().merge_decision, "BLOCK");
    }

    #[test]
    fn test_narrative_section_shapes() {
        let analysis: ExecutiveAnalysis = serde_json::from_value(json!({
            "executive_summary": {"overview": "Layered but tangled."},
            "immediate_engineering_action": "Break the cycle in core/.",
            "primary_architectural_weakness": {"finding": "God module"},
            "long_term_structural_recommendation": 7
        }))
        .unwrap();

        let summary = analysis.executive_summary.unwrap();
        assert_eq!(summary.text("overview"), Some("Layered but tangled."));

        let action = analysis.immediate_engineering_action.unwrap();
        assert_eq!(action.text("recommendation"), Some("Break the cycle in core/."));

        let weakness = analysis.primary_architectural_weakness.unwrap();
        assert_eq!(weakness.text("description"), Some("God module"));

        let long_term = analysis.long_term_structural_recommendation.unwrap();
        assert_eq!(long_term.text("recommendation"), None);
    }

    #[test]
    fn test_repository_risk_snapshot_partial() {
        let snapshot: RepositoryRiskSnapshot = serde_json::from_value(json!({
            "overall_score": 63.2,
            "classification": "Moderate Risk"
        }))
        .unwrap();
        assert_eq!(snapshot.classification, "Moderate Risk");
        assert_eq!(snapshot.dependency_risk, 0.0);
        assert!(snapshot.executive_analysis.is_none());
    }
}
