//! Application State

use super::{FormState, SessionState, StatusBarState};
use risk_config::AppConfig;
use risk_dashboard_theme::Theme;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Help overlay visible
    pub show_help: bool,
    pub form: FormState,
    pub session: SessionState,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    pub app_config: AppConfig,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            app_config,
            ..Default::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            show_help: false,
            form: FormState::default(),
            session: SessionState::default(),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            app_config: AppConfig::default(),
        }
    }
}
