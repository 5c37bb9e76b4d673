//! Actions module
//!
//! All state changes flow through actions. Actions are tagged by domain:
//! - `Global`: application-wide actions (raw keys, quit, help overlay)
//! - `Form`: editing and navigating the input form and file list
//! - `Analysis`: operation requests and their lifecycle (started, succeeded, failed)
//! - `StatusBar`: user feedback messages

pub mod analysis;
pub mod form;
pub mod global;
pub mod status_bar;

pub use analysis::AnalysisAction;
pub use form::FormAction;
pub use global::GlobalAction;
pub use status_bar::StatusBarAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Form and file list actions
    Form(FormAction),
    /// Remote operation requests and lifecycle
    Analysis(AnalysisAction),
    /// Status Bar actions
    StatusBar(StatusBarAction),
}
