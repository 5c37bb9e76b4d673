//! Application state
//!
//! State is owned by the main thread and changed only by reducers. The
//! background worker reads cloned snapshots.

pub mod app;
pub mod form;
pub mod session;
pub mod status_bar;

pub use app::AppState;
pub use form::{FormField, FormState};
pub use session::{Explanation, OutputRegion, SessionState};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
