//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub emoji: &'static str,
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    /// Operation or area that produced the message
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for timestamp and source
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let metadata_style = Style::default().fg(theme.text_muted);

        match state.status_bar.latest() {
            Some(msg) => {
                let fg_color = match msg.kind {
                    StatusKind::Running => theme.status_running,
                    StatusKind::Success => theme.status_success,
                    StatusKind::Error => theme.status_error,
                    StatusKind::Warning => theme.status_warning,
                    StatusKind::Info => theme.status_info,
                };

                Self {
                    emoji: msg.kind.emoji(),
                    message: msg.message.clone(),
                    timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                    source: msg.source.clone(),
                    message_style: Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                    bg_color: theme.bg_primary,
                    metadata_style,
                }
            }
            None => Self {
                emoji: "👋",
                message: format!(
                    "Risk dashboard on {}. Press F1 for help",
                    state.app_config.service_url
                ),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style,
            },
        }
    }
}
