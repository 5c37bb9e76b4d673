//! PR Risk View Model
//!
//! Card for the PR risk assessment that follows a successful impact
//! analysis. The governance sections are only produced by newer service
//! versions; each one is omitted when absent.

use super::bands::{
    confidence_band, format_number, impact_band, merge_decision_band, merge_readiness_band,
    pr_classification_band,
};
use super::{push_field, Badge, CardBody, Field, Metric, Section};
use crate::domain_models::OperationKind;
use crate::state::SessionState;
use risk_client::{
    AiAnalysis, Confidence, HybridGovernance, MergeControl, PrRiskResult, ReviewerSuggestion,
    TestingRecommendation,
};
use risk_dashboard_theme::Band;

/// One row of the per-file breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRiskRow {
    pub file: String,
    pub score: String,
    pub level: Badge,
    pub depth: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrRiskDetails {
    pub classification: Badge,
    pub metrics: Vec<Metric>,
    pub high_risk_modules: Vec<String>,
    pub files: Vec<FileRiskRow>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrRiskViewModel {
    pub body: CardBody<PrRiskDetails>,
}

impl PrRiskViewModel {
    pub fn from_session(session: &SessionState) -> Self {
        Self {
            body: CardBody::project(
                session.status(OperationKind::PrRiskAnalysis),
                session.pr_risk.as_ref().map(Self::details),
                OperationKind::PrRiskAnalysis.progress_text(),
                "PR risk is assessed after a successful impact analysis.",
            ),
        }
    }

    fn details(result: &PrRiskResult) -> PrRiskDetails {
        let classification = Badge::new(
            &result.classification,
            pr_classification_band(&result.classification),
        );

        // display order; absent sections drop out
        let sections = [
            result.merge_control.as_ref().map(merge_control),
            result.confidence.as_ref().map(confidence),
            Some(ai_review(&result.ai_analysis)),
            result.reviewer_suggestion.as_ref().map(reviewers),
            result.testing_recommendation.as_ref().map(testing),
            result.hybrid_governance.as_ref().map(governance),
        ];

        PrRiskDetails {
            classification,
            metrics: vec![
                Metric::new("PR Risk Score", format_number(result.pr_risk_score)),
                Metric::new("Files Affected", result.total_files_affected.to_string()),
                Metric::new("Max Depth", result.max_impact_depth.to_string()),
            ],
            high_risk_modules: result.high_risk_modules.clone(),
            files: result
                .file_breakdown
                .iter()
                .map(|impact| FileRiskRow {
                    file: impact.file.clone(),
                    score: format_number(impact.risk_score),
                    level: Badge::new(&impact.risk_level, impact_band(&impact.risk_level)),
                    depth: impact.depth.to_string(),
                })
                .collect(),
            sections: sections
                .into_iter()
                .flatten()
                .filter(|section| section.badge.is_some() || !section.fields.is_empty())
                .collect(),
        }
    }
}

fn badge_for(text: &str, band: fn(&str) -> Band) -> Option<Badge> {
    let text = text.trim();
    (!text.is_empty()).then(|| Badge::new(text, band(text)))
}

fn merge_control(control: &MergeControl) -> Section {
    let mut fields = Vec::new();
    push_field(&mut fields, Field::new("Reason", &control.decision_reason));
    Section {
        title: "Merge Control",
        badge: badge_for(&control.merge_decision, merge_decision_band),
        fields,
    }
}

fn confidence(confidence: &Confidence) -> Section {
    Section {
        title: "Confidence",
        badge: badge_for(&confidence.confidence_level, confidence_band),
        fields: vec![Field::banded(
            "Score",
            format!("{}%", format_number(confidence.confidence_score)),
            confidence_band(&confidence.confidence_level),
        )],
    }
}

fn ai_review(analysis: &AiAnalysis) -> Section {
    let mut fields = Vec::new();
    push_field(&mut fields, Field::new("Review focus", &analysis.review_focus));
    push_field(
        &mut fields,
        Field::new("Testing strategy", &analysis.testing_strategy),
    );
    push_field(&mut fields, Field::new("Risk", &analysis.risk_explanation));
    Section {
        title: "AI Review",
        badge: badge_for(&analysis.merge_readiness, merge_readiness_band)
            .map(|badge| Badge::new(format!("READINESS {}", badge.text), badge.band)),
        fields,
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Required"
    } else {
        "Not required"
    }
}

fn reviewers(suggestion: &ReviewerSuggestion) -> Section {
    let mut fields = Vec::new();
    push_field(&mut fields, Field::new("Primary", &suggestion.primary_reviewer));
    if let Some(secondary) = &suggestion.secondary_reviewer {
        push_field(&mut fields, Field::new("Secondary", secondary));
    }
    fields.push(Field::new(
        "Approvals",
        suggestion.approvals_required.to_string(),
    ));
    fields.push(Field::new(
        "Architecture review",
        yes_no(suggestion.architecture_review),
    ));
    fields.push(Field::new(
        "Security review",
        yes_no(suggestion.security_review),
    ));
    push_field(&mut fields, Field::new("Reason", &suggestion.reason));
    Section {
        title: "Reviewers",
        badge: None,
        fields,
    }
}

fn testing(recommendation: &TestingRecommendation) -> Section {
    let levels = [
        ("Unit", &recommendation.unit_testing),
        ("Integration", &recommendation.integration_testing),
        ("Regression", &recommendation.regression_testing),
        ("Performance", &recommendation.performance_testing),
        ("Security", &recommendation.security_testing),
        ("Coverage target", &recommendation.test_coverage_target),
    ];

    let mut fields = Vec::new();
    for (label, level) in levels {
        if let Some(level) = level {
            push_field(&mut fields, Field::new(label, level));
        }
    }
    Section {
        title: "Testing",
        badge: None,
        fields,
    }
}

fn governance(governance: &HybridGovernance) -> Section {
    let mut fields = vec![Field::new(
        "Score",
        format_number(governance.governance_score),
    )];
    push_field(&mut fields, Field::new("Level", &governance.governance_level));
    push_field(&mut fields, Field::new("Explanation", &governance.explanation));
    Section {
        title: "Governance",
        badge: badge_for(&governance.final_merge_decision, merge_decision_band),
        fields,
    }
}
