//! Help Overlay
//!
//! Centered panel listing the key bindings.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use risk_dashboard_theme::Theme;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Operations",
        &[
            ("F2", "Clone repository into folder"),
            ("F3", "Scan folder"),
            ("F4", "Summarize repository"),
            ("F5", "Analyze change risk"),
        ],
    ),
    (
        "Form",
        &[
            ("Tab / Shift+Tab", "Next / previous field"),
            ("Enter", "Clone, apply folder, analyze or explain"),
            ("Ctrl+U", "Clear field"),
            ("↑ ↓ / j k", "Move in file list"),
        ],
    ),
    (
        "General",
        &[
            ("F1", "Toggle help"),
            ("Esc", "Close help / quit"),
            ("Ctrl+C", "Quit"),
        ],
    ),
];

pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        let width = (area.width * 60 / 100).max(40).min(area.width);
        let height = (area.height * 70 / 100).max(18).min(area.height);
        let panel = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        Clear.render(panel, buf);

        let block = Block::default()
            .title(" Key Bindings ")
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(vec![
                Span::styled(" Esc", theme.key_hint()),
                Span::styled(" close ", theme.muted()),
            ]))
            .borders(Borders::ALL)
            .border_style(theme.panel_border_focused())
            .title_style(theme.panel_title())
            .style(theme.text().bg(theme.bg_overlay));

        let key_width = BINDINGS
            .iter()
            .flat_map(|(_, keys)| keys.iter())
            .map(|(key, _)| key.chars().count())
            .max()
            .unwrap_or_default();

        let mut lines = Vec::new();
        for (category, keys) in BINDINGS {
            lines.push(Line::styled(*category, theme.section_header()));
            for (key, description) in *keys {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:width$}  ", key, width = key_width), theme.key_hint()),
                    Span::styled(*description, theme.key_description()),
                ]));
            }
            lines.push(Line::default());
        }

        Paragraph::new(lines).block(block).render(panel, buf);
    }
}
