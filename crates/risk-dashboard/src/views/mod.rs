//! Views
//!
//! Stateless ratatui widgets over the view models. The whole screen is
//! re-projected from the state on every frame.

pub mod cards;
pub mod dashboard;
pub mod help;
pub mod status_bar;

use crate::state::AppState;
use crate::view_models::DashboardViewModel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

pub use cards::{ImpactCard, PrRiskCard, RepositoryRiskCard};
pub use dashboard::{FormWidget, OutputWidget};
pub use help::HelpOverlay;
pub use status_bar::StatusBarWidget;

/// Height of the form: three inputs, the folder line and borders
const FORM_HEIGHT: u16 = 6;

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = DashboardViewModel::from_state(state);

    f.render_widget(Block::default().style(theme.text().bg(theme.bg_primary)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(columns[1]);

    f.render_widget(FormWidget::new(&vm.form, theme), rows[0]);
    f.render_widget(RepositoryRiskCard::new(&vm.repository_risk, theme), left[0]);
    f.render_widget(OutputWidget::new(&vm.output, theme), left[1]);
    f.render_widget(ImpactCard::new(&vm.impact, theme), right[0]);
    f.render_widget(PrRiskCard::new(&vm.pr_risk, theme), right[1]);
    f.render_widget(StatusBarWidget(&vm.status_bar), rows[2]);

    if vm.show_help {
        f.render_widget(HelpOverlay::new(theme), area);
    }
}
