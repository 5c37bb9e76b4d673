//! Form View Model
//!
//! Input fields plus a one-line overview of every operation's status.

use super::Badge;
use crate::domain_models::{OperationKind, OperationStatus};
use crate::state::{AppState, FormField};
use risk_dashboard_theme::Band;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputViewModel {
    pub label: &'static str,
    /// Typed text, or `None` to show the placeholder
    pub value: Option<String>,
    pub placeholder: &'static str,
    pub hint: &'static str,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormViewModel {
    pub inputs: Vec<InputViewModel>,
    /// Folder the folder-scoped operations currently run against
    pub active_folder: String,
    pub operations: Vec<Badge>,
}

impl FormViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let inputs = [FormField::RepoUrl, FormField::Folder, FormField::ChangedFile]
            .into_iter()
            .map(|field| {
                let value = state.form.value(field);
                InputViewModel {
                    label: field.label(),
                    value: (!value.is_empty()).then(|| value.to_string()),
                    placeholder: field.placeholder(),
                    hint: hint(field),
                    focused: state.form.focus == field,
                }
            })
            .collect();

        let active_folder = if state.session.has_folder() {
            state.session.folder.clone()
        } else {
            "none".to_string()
        };

        let operations = OperationKind::ALL
            .into_iter()
            .map(|kind| status_badge(kind, state.session.status(kind)))
            .collect();

        Self {
            inputs,
            active_folder,
            operations,
        }
    }
}

fn hint(field: FormField) -> &'static str {
    match field {
        FormField::RepoUrl => "Enter/F2 clone",
        FormField::Folder => "Enter apply, F3 scan, F4 summarize",
        FormField::ChangedFile => "Enter/F5 analyze",
        FormField::FileList => "Enter explain",
    }
}

fn status_badge(kind: OperationKind, status: &OperationStatus) -> Badge {
    let (symbol, band) = match status {
        OperationStatus::Idle => ("·", Band::Neutral),
        OperationStatus::Pending => ("…", Band::Info),
        OperationStatus::Success => ("✓", Band::Ok),
        OperationStatus::Error(_) => ("✗", Band::Danger),
    };
    Badge::new(format!("{} {}", symbol, kind.label()), band)
}
