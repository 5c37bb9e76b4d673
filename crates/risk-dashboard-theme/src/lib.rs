//! Colors and styles for the risk dashboard
//!
//! Risk-bearing values are rendered through a [`Band`]: the view models
//! decide which band a score or label belongs to, the theme decides what
//! that band looks like.

mod band;

pub use band::Band;

use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,
    pub bg_overlay: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,
    pub status_running: Color,

    // Risk band colors
    pub band_ok: Color,
    pub band_info: Color,
    pub band_warn: Color,
    pub band_danger: Color,
    pub band_severe: Color,
    pub band_neutral: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c900,
            bg_overlay: tailwind::SLATE.c800,

            // Text
            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c300,
            text_muted: tailwind::SLATE.c500,

            // Accents
            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c700,

            // Status
            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,
            status_running: tailwind::AMBER.c400,

            // Bands
            band_ok: tailwind::GREEN.c500,
            band_info: tailwind::BLUE.c400,
            band_warn: tailwind::YELLOW.c400,
            band_danger: tailwind::RED.c500,
            band_severe: tailwind::PURPLE.c500,
            band_neutral: tailwind::SLATE.c400,

            // Selection
            selected_bg: tailwind::BLUE.c600,
            selected_fg: Color::White,
        }
    }

    /// Color of a risk band
    pub fn band_color(&self, band: Band) -> Color {
        match band {
            Band::Ok => self.band_ok,
            Band::Info => self.band_info,
            Band::Warn => self.band_warn,
            Band::Danger => self.band_danger,
            Band::Severe => self.band_severe,
            Band::Neutral => self.band_neutral,
        }
    }

    /// Bold foreground style for a banded value (scores, labels)
    pub fn band_style(&self, band: Band) -> Style {
        Style::default()
            .fg(self.band_color(band))
            .add_modifier(Modifier::BOLD)
    }

    /// Inverted style for banded badges (e.g. merge decisions)
    pub fn band_badge(&self, band: Band) -> Style {
        Style::default()
            .fg(self.bg_primary)
            .bg(self.band_color(band))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_secondary)
    }

    /// Style for the border of the focused panel or field
    pub fn panel_border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headers inside a card
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.text_secondary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for key hints (e.g., "F2" in "F2 clone")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for field labels ("Score", "Depth", ...)
    pub fn label(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for selected list rows
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for progress indicators
    pub fn running(&self) -> Style {
        Style::default()
            .fg(self.status_running)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_colors_are_distinct() {
        let theme = Theme::default();
        let colors: Vec<Color> = Band::ALL.iter().map(|b| theme.band_color(*b)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_band_style_uses_band_color() {
        let theme = Theme::default();
        assert_eq!(theme.band_style(Band::Danger).fg, Some(theme.band_danger));
        assert_eq!(theme.band_badge(Band::Ok).bg, Some(theme.band_ok));
    }
}
