//! Dashboard View Model
//!
//! Everything one frame of the dashboard needs, projected from the state.

use super::{
    FormViewModel, ImpactViewModel, OutputViewModel, PrRiskViewModel, RepositoryRiskViewModel,
    StatusBarViewModel,
};
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub form: FormViewModel,
    pub repository_risk: RepositoryRiskViewModel,
    pub impact: ImpactViewModel,
    pub pr_risk: PrRiskViewModel,
    pub output: OutputViewModel,
    pub status_bar: StatusBarViewModel,
    pub show_help: bool,
}

impl DashboardViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let session = &state.session;
        Self {
            form: FormViewModel::from_state(state),
            repository_risk: RepositoryRiskViewModel::from_session(session),
            impact: ImpactViewModel::from_session(session),
            pr_risk: PrRiskViewModel::from_session(session),
            output: OutputViewModel::from_session(session, state.form.focus),
            status_bar: StatusBarViewModel::from_state(state),
            show_help: state.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, AnalysisAction};
    use crate::domain_models::{OperationKind, OperationOutcome};
    use crate::reducers::reduce;
    use crate::view_models::CardBody;
    use risk_client::{
        ExecutiveSummary, FileImpact, ImpactAnalysisResult, MergeControl, PrRiskResult,
    };
    use risk_dashboard_theme::Band;

    fn apply(state: AppState, actions: Vec<AnalysisAction>) -> AppState {
        actions
            .into_iter()
            .fold(state, |state, action| reduce(state, &Action::Analysis(action)))
    }

    #[test]
    fn test_change_risk_scenario_renders_both_cards() {
        let impact = ImpactAnalysisResult {
            analysis: vec![FileImpact {
                file: "lib/utils.js".to_string(),
                risk_score: 80.0,
                risk_level: "HIGH".to_string(),
                direct_dependents: 5,
                transitive_dependents: 12,
                depth: 3,
            }],
            executive_summary: ExecutiveSummary {
                severity: "HIGH".to_string(),
                ..Default::default()
            },
        };
        let pr_risk = PrRiskResult {
            classification: "CRITICAL".to_string(),
            merge_control: Some(MergeControl {
                merge_decision: "BLOCK".to_string(),
                decision_reason: "High risk".to_string(),
            }),
            ..Default::default()
        };

        let state = apply(
            AppState::default(),
            vec![
                AnalysisAction::FolderChanged("demo".to_string()),
                AnalysisAction::Started {
                    kind: OperationKind::ImpactAnalysis,
                    seq: 1,
                },
                AnalysisAction::succeeded(1, OperationOutcome::ImpactAnalyzed(impact)),
                AnalysisAction::Started {
                    kind: OperationKind::PrRiskAnalysis,
                    seq: 1,
                },
                AnalysisAction::succeeded(1, OperationOutcome::PrRiskAnalyzed(pr_risk)),
            ],
        );

        let vm = DashboardViewModel::from_state(&state);
        let impact = vm.impact.body.ready().expect("impact card");
        assert_eq!(impact.severity.as_ref().unwrap().band, Band::Danger);

        let pr_risk = vm.pr_risk.body.ready().expect("pr risk card");
        assert_eq!(pr_risk.classification.band, Band::Severe);
        assert_eq!(pr_risk.sections[0].badge.as_ref().unwrap().band, Band::Severe);

        assert!(matches!(vm.repository_risk.body, CardBody::Empty(_)));
    }
}
