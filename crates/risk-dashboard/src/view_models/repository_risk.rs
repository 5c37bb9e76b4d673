//! Repository Risk View Model
//!
//! Card for the repository-wide risk score of the session folder.

use super::bands::{format_number, repository_band};
use super::{push_field, Badge, CardBody, Field, Metric};
use crate::domain_models::OperationKind;
use crate::state::SessionState;
use risk_client::{ExecutiveAnalysis, RepositoryRiskSnapshot};
use risk_dashboard_theme::Band;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRiskDetails {
    /// Overall score, banded by the classification
    pub score: Metric,
    pub classification: Badge,
    /// Architecture, dependency, bus factor and volatility scores
    pub metrics: Vec<Metric>,
    /// Narrative sections that carry text
    pub narrative: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRiskViewModel {
    pub title: String,
    pub body: CardBody<RepositoryRiskDetails>,
}

impl RepositoryRiskViewModel {
    pub fn from_session(session: &SessionState) -> Self {
        let title = if session.has_folder() {
            format!("Repository Risk: {}", session.folder)
        } else {
            "Repository Risk".to_string()
        };

        let empty = if session.has_folder() {
            "No repository risk score for this folder yet."
        } else {
            "Enter a folder name to analyze repository risk."
        };

        let body = CardBody::project(
            session.status(OperationKind::RepositoryRisk),
            session.repository_risk.as_ref().map(Self::details),
            OperationKind::RepositoryRisk.progress_text(),
            empty,
        );

        Self { title, body }
    }

    fn details(snapshot: &RepositoryRiskSnapshot) -> RepositoryRiskDetails {
        let band = repository_band(&snapshot.classification);
        let classification = if snapshot.classification.trim().is_empty() {
            Badge::new("UNCLASSIFIED", Band::Neutral)
        } else {
            Badge::new(snapshot.classification.to_uppercase(), band)
        };

        RepositoryRiskDetails {
            score: Metric::new("Overall Score", format_number(snapshot.overall_score)),
            classification,
            metrics: vec![
                Metric::new("Architecture", format_number(snapshot.architecture_score)),
                Metric::new("Dependency Risk", format_number(snapshot.dependency_risk)),
                Metric::new("Bus Factor Risk", format_number(snapshot.bus_factor_risk)),
                Metric::new("Volatility Risk", format_number(snapshot.volatility_risk)),
            ],
            narrative: snapshot
                .executive_analysis
                .as_ref()
                .map(narrative)
                .unwrap_or_default(),
        }
    }
}

fn narrative(analysis: &ExecutiveAnalysis) -> Vec<Field> {
    let sections = [
        ("Overview", &analysis.executive_summary, "overview"),
        (
            "Primary Weakness",
            &analysis.primary_architectural_weakness,
            "description",
        ),
        (
            "Immediate Action",
            &analysis.immediate_engineering_action,
            "recommendation",
        ),
        (
            "Long-term",
            &analysis.long_term_structural_recommendation,
            "recommendation",
        ),
    ];

    let mut fields = Vec::new();
    for (label, section, key) in sections {
        if let Some(text) = section.as_ref().and_then(|section| section.text(key)) {
            push_field(&mut fields, Field::new(label, text));
        }
    }
    fields
}
