//! View models
//!
//! Pre-computed presentation data. Every view model is projected from the
//! state on each frame and never fails: absent sections are omitted and
//! unknown labels land in the neutral band.

pub mod bands;
pub mod dashboard;
pub mod form;
pub mod impact;
pub mod output;
pub mod pr_risk;
pub mod repository_risk;
pub mod status_bar;

pub use dashboard::DashboardViewModel;
pub use form::FormViewModel;
pub use impact::ImpactViewModel;
pub use output::{OutputBody, OutputViewModel};
pub use pr_risk::PrRiskViewModel;
pub use repository_risk::RepositoryRiskViewModel;
pub use status_bar::StatusBarViewModel;

use crate::domain_models::OperationStatus;
use risk_dashboard_theme::Band;

/// A label rendered in its band color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub band: Band,
}

impl Badge {
    pub fn new(text: impl Into<String>, band: Band) -> Self {
        Self {
            text: text.into(),
            band,
        }
    }
}

/// A headline number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

impl Metric {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// `label: text` line, optionally banded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub text: String,
    pub band: Option<Band>,
}

impl Field {
    pub fn new(label: &'static str, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
            band: None,
        }
    }

    pub fn banded(label: &'static str, text: impl Into<String>, band: Band) -> Self {
        Self {
            label,
            text: text.into(),
            band: Some(band),
        }
    }
}

/// Push a field unless its text is blank
pub(crate) fn push_field(fields: &mut Vec<Field>, field: Field) {
    if !field.text.trim().is_empty() {
        fields.push(field);
    }
}

/// Titled group of fields inside a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub badge: Option<Badge>,
    pub fields: Vec<Field>,
}

/// What a result card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody<T> {
    /// Nothing to show yet; the hint explains how to get data
    Empty(String),
    Loading(String),
    Failed(String),
    Ready(T),
}

impl<T> CardBody<T> {
    /// Body for a card given its operation status and projected snapshot
    ///
    /// A pending call wins over an older snapshot.
    pub(crate) fn project(
        status: &OperationStatus,
        details: Option<T>,
        loading: &str,
        empty: &str,
    ) -> Self {
        if status.is_pending() {
            return Self::Loading(loading.to_string());
        }
        match (details, status.error()) {
            (Some(details), _) => Self::Ready(details),
            (None, Some(message)) => Self::Failed(message.to_string()),
            (None, None) => Self::Empty(empty.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(details) => Some(details),
            _ => None,
        }
    }
}
