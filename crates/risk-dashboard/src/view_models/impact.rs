//! Impact View Model
//!
//! Card for the impact analysis of a single changed file. Only the first
//! analysis entry is shown since the dashboard requests one file at a time.

use super::bands::{format_number, impact_band};
use super::{push_field, Badge, CardBody, Field, Metric};
use crate::domain_models::OperationKind;
use crate::state::SessionState;
use risk_client::{FileImpact, ImpactAnalysisResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactEntry {
    pub file: String,
    pub risk_level: Badge,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactDetails {
    /// Absent when the service returned no entries
    pub entry: Option<ImpactEntry>,
    pub severity: Option<Badge>,
    pub summary: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactViewModel {
    pub body: CardBody<ImpactDetails>,
}

impl ImpactViewModel {
    pub fn from_session(session: &SessionState) -> Self {
        Self {
            body: CardBody::project(
                session.status(OperationKind::ImpactAnalysis),
                session.impact.as_ref().map(Self::details),
                OperationKind::ImpactAnalysis.progress_text(),
                "Enter a changed file and press F5 to analyze change risk.",
            ),
        }
    }

    fn details(result: &ImpactAnalysisResult) -> ImpactDetails {
        let summary = &result.executive_summary;
        let severity = Some(summary.severity.trim())
            .filter(|severity| !severity.is_empty())
            .map(|severity| Badge::new(severity, impact_band(severity)));

        let mut fields = Vec::new();
        push_field(&mut fields, Field::new("Why risky", &summary.why_risky));
        push_field(
            &mut fields,
            Field::new("Testing", &summary.testing_recommendation),
        );
        push_field(
            &mut fields,
            Field::new("Developer action", &summary.developer_action),
        );

        ImpactDetails {
            entry: result.analysis.first().map(entry),
            severity,
            summary: fields,
        }
    }
}

fn entry(impact: &FileImpact) -> ImpactEntry {
    ImpactEntry {
        file: impact.file.clone(),
        risk_level: Badge::new(&impact.risk_level, impact_band(&impact.risk_level)),
        metrics: vec![
            Metric::new("Risk Score", format_number(impact.risk_score)),
            Metric::new("Direct Dependents", impact.direct_dependents.to_string()),
            Metric::new(
                "Transitive Dependents",
                impact.transitive_dependents.to_string(),
            ),
            Metric::new("Depth", impact.depth.to_string()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::OperationStatus;
    use pretty_assertions::assert_eq;
    use risk_client::ExecutiveSummary;
    use risk_dashboard_theme::Band;

    fn analyzed(result: ImpactAnalysisResult) -> SessionState {
        let mut session = SessionState {
            folder: "demo".to_string(),
            impact: Some(result),
            ..Default::default()
        };
        session
            .operations
            .finish(OperationKind::ImpactAnalysis, OperationStatus::Success);
        session
    }

    #[test]
    fn test_high_impact_entry() {
        let session = analyzed(ImpactAnalysisResult {
            analysis: vec![FileImpact {
                file: "lib/utils.js".to_string(),
                risk_score: 87.5,
                risk_level: "HIGH".to_string(),
                direct_dependents: 5,
                transitive_dependents: 12,
                depth: 3,
            }],
            executive_summary: ExecutiveSummary {
                severity: "HIGH".to_string(),
                why_risky: "Shared helper".to_string(),
                testing_recommendation: String::new(),
                developer_action: "Add regression tests".to_string(),
            },
        });

        let vm = ImpactViewModel::from_session(&session);
        let expected = ImpactDetails {
            entry: Some(ImpactEntry {
                file: "lib/utils.js".to_string(),
                risk_level: Badge::new("HIGH", Band::Danger),
                metrics: vec![
                    Metric::new("Risk Score", "87.5"),
                    Metric::new("Direct Dependents", "5"),
                    Metric::new("Transitive Dependents", "12"),
                    Metric::new("Depth", "3"),
                ],
            }),
            severity: Some(Badge::new("HIGH", Band::Danger)),
            summary: vec![
                Field::new("Why risky", "Shared helper"),
                Field::new("Developer action", "Add regression tests"),
            ],
        };
        assert_eq!(vm.body, CardBody::Ready(expected));
    }

    #[test]
    fn test_empty_analysis_has_no_entry() {
        let session = analyzed(ImpactAnalysisResult::default());
        let details = ImpactViewModel::from_session(&session)
            .body
            .ready()
            .cloned()
            .unwrap();
        assert_eq!(details.entry, None);
        assert_eq!(details.severity, None);
        assert!(details.summary.is_empty());
    }

    #[test]
    fn test_failure_keeps_previous_result_visible() {
        let mut session = analyzed(ImpactAnalysisResult::default());
        session.operations.finish(
            OperationKind::ImpactAnalysis,
            OperationStatus::Error("Failed to analyze change risk".to_string()),
        );
        assert!(ImpactViewModel::from_session(&session).body.ready().is_some());
    }

    #[test]
    fn test_idle_hint() {
        let vm = ImpactViewModel::from_session(&SessionState::default());
        assert!(matches!(vm.body, CardBody::Empty(_)));
    }
}
