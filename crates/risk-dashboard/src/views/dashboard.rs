//! Form and Output Widgets
//!
//! The input form across the top of the screen and the shared output panel
//! with the scanned file list beside it.

use crate::view_models::{FormViewModel, OutputBody, OutputViewModel};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap,
    },
};
use risk_dashboard_theme::Theme;

pub struct FormWidget<'a> {
    vm: &'a FormViewModel,
    theme: &'a Theme,
}

impl<'a> FormWidget<'a> {
    pub fn new(vm: &'a FormViewModel, theme: &'a Theme) -> Self {
        Self { vm, theme }
    }
}

impl Widget for FormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let vm = self.vm;

        let block = Block::default()
            .title(" Code Risk Dashboard ")
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title_style(theme.panel_title())
            .style(theme.text().bg(theme.bg_panel));

        let label_width = vm
            .inputs
            .iter()
            .map(|input| input.label.len())
            .max()
            .unwrap_or_default();

        let mut lines: Vec<Line> = vm
            .inputs
            .iter()
            .map(|input| {
                let marker = if input.focused { "▶ " } else { "  " };
                let label_style = if input.focused {
                    theme.panel_border_focused()
                } else {
                    theme.label()
                };
                let value = match &input.value {
                    Some(value) if input.focused => Span::styled(format!("{}█", value), theme.text()),
                    Some(value) => Span::styled(value.clone(), theme.text()),
                    None if input.focused => {
                        Span::styled(format!("█{}", input.placeholder), theme.muted())
                    }
                    None => Span::styled(input.placeholder, theme.muted()),
                };
                Line::from(vec![
                    Span::styled(marker, theme.key_hint()),
                    Span::styled(
                        format!("{:width$}  ", input.label, width = label_width),
                        label_style,
                    ),
                    value,
                    Span::styled(format!("   {}", input.hint), theme.key_description()),
                ])
            })
            .collect();

        let mut status = vec![
            Span::styled("  Active folder: ", theme.label()),
            Span::styled(vm.active_folder.clone(), theme.text()),
            Span::raw("   "),
        ];
        for badge in &vm.operations {
            status.push(Span::styled(badge.text.clone(), theme.band_style(badge.band)));
            status.push(Span::raw("  "));
        }
        lines.push(Line::from(status));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct OutputWidget<'a> {
    vm: &'a OutputViewModel,
    theme: &'a Theme,
}

impl<'a> OutputWidget<'a> {
    pub fn new(vm: &'a OutputViewModel, theme: &'a Theme) -> Self {
        Self { vm, theme }
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        let theme = self.theme;
        match &self.vm.body {
            OutputBody::Placeholder(text) => vec![Line::styled(*text, theme.muted())],
            OutputBody::Progress(text) => vec![Line::styled(format!("⏳ {}", text), theme.running())],
            OutputBody::Message(text) => vec![Line::styled(text.clone(), theme.success())],
            OutputBody::Failure(text) => vec![Line::styled(text.clone(), theme.error())],
            OutputBody::Summary {
                analysis,
                explanation,
            } => {
                let mut lines = vec![Line::styled("Architecture Analysis", theme.section_header())];
                lines.extend(
                    analysis
                        .lines()
                        .map(|line| Line::styled(line.to_string(), theme.text())),
                );
                lines.push(Line::default());
                lines.push(Line::styled("Executive Explanation", theme.section_header()));
                lines.extend(
                    explanation
                        .lines()
                        .map(|line| Line::styled(line.to_string(), theme.text())),
                );
                lines
            }
            OutputBody::Explanation { path, text } => {
                let mut lines = vec![Line::styled(path.clone(), theme.section_header())];
                lines.extend(
                    text.lines()
                        .map(|line| Line::styled(line.to_string(), theme.text())),
                );
                lines
            }
        }
    }
}

impl Widget for OutputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let vm = self.vm;

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let output_block = Block::default()
            .title(" Output ")
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title_style(theme.panel_title())
            .style(theme.text().bg(theme.bg_panel));

        Paragraph::new(self.body_lines())
            .block(output_block)
            .wrap(Wrap { trim: false })
            .render(halves[0], buf);

        let files_block = Block::default()
            .title(format!(" {} ", vm.files_title))
            .borders(Borders::ALL)
            .border_style(if vm.files_focused {
                theme.panel_border_focused()
            } else {
                theme.panel_border()
            })
            .title_style(theme.panel_title())
            .style(theme.text().bg(theme.bg_panel));

        if vm.files.is_empty() {
            Paragraph::new(Line::styled("Press F3 to scan the folder.", theme.muted()))
                .block(files_block)
                .render(halves[1], buf);
            return;
        }

        let items: Vec<ListItem> = vm
            .files
            .iter()
            .map(|row| ListItem::new(row.path.as_str()))
            .collect();
        let highlight = if vm.files_focused {
            theme.selected()
        } else {
            theme.muted().add_modifier(Modifier::REVERSED)
        };
        let list = List::new(items)
            .block(files_block)
            .highlight_style(highlight)
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(vm.cursor);
        StatefulWidget::render(list, halves[1], buf, &mut state);
    }
}
