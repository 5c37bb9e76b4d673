//! Risk Cards
//!
//! Repository risk, impact and PR risk cards. Each card is a bordered,
//! wrapped paragraph built from its view model.

use crate::view_models::{
    Badge, CardBody, Field, ImpactViewModel, Metric, PrRiskViewModel, RepositoryRiskViewModel,
    Section,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use risk_dashboard_theme::{Band, Theme};

fn card_block<'a>(title: impl Into<String>, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title.into()))
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title())
        .style(theme.text().bg(theme.bg_panel))
}

/// Single line for a body that is not ready
fn status_lines<T>(body: &CardBody<T>, theme: &Theme) -> Vec<Line<'static>> {
    let line = match body {
        CardBody::Empty(hint) => Line::styled(hint.clone(), theme.muted()),
        CardBody::Loading(text) => Line::styled(format!("⏳ {}", text), theme.running()),
        CardBody::Failed(message) => Line::styled(format!("✗ {}", message), theme.error()),
        CardBody::Ready(_) => return Vec::new(),
    };
    vec![line]
}

fn badge_span(badge: &Badge, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!(" {} {} ", badge.band.symbol(), badge.text),
        theme.band_badge(badge.band),
    )
}

fn metrics_line(metrics: &[Metric], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, metric) in metrics.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", theme.muted()));
        }
        spans.push(Span::styled(format!("{} ", metric.label), theme.label()));
        spans.push(Span::styled(metric.value.clone(), theme.text()));
    }
    Line::from(spans)
}

fn field_line(field: &Field, theme: &Theme) -> Line<'static> {
    let value_style = match field.band {
        Some(band) => theme.band_style(band),
        None => theme.text(),
    };
    Line::from(vec![
        Span::styled(format!("{}: ", field.label), theme.label()),
        Span::styled(field.text.clone(), value_style),
    ])
}

fn section_lines(section: &Section, theme: &Theme, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::default());
    let mut header = vec![Span::styled(section.title, theme.section_header())];
    if let Some(badge) = &section.badge {
        header.push(Span::raw(" "));
        header.push(badge_span(badge, theme));
    }
    lines.push(Line::from(header));
    lines.extend(section.fields.iter().map(|field| field_line(field, theme)));
}

fn render_card(block: Block<'_>, lines: Vec<Line<'static>>, area: Rect, buf: &mut Buffer) {
    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

pub struct RepositoryRiskCard<'a> {
    vm: &'a RepositoryRiskViewModel,
    theme: &'a Theme,
}

impl<'a> RepositoryRiskCard<'a> {
    pub fn new(vm: &'a RepositoryRiskViewModel, theme: &'a Theme) -> Self {
        Self { vm, theme }
    }
}

impl Widget for RepositoryRiskCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = card_block(&self.vm.title, theme);

        let lines = match self.vm.body.ready() {
            Some(details) => {
                let mut lines = Vec::new();
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", details.score.label), theme.label()),
                    Span::styled(
                        details.score.value.clone(),
                        theme.band_style(details.classification.band),
                    ),
                    Span::raw("  "),
                    badge_span(&details.classification, theme),
                ]));
                lines.push(metrics_line(&details.metrics, theme));
                if !details.narrative.is_empty() {
                    lines.push(Line::default());
                    lines.push(Line::styled("Executive Analysis", theme.section_header()));
                    lines.extend(details.narrative.iter().map(|f| field_line(f, theme)));
                }
                lines
            }
            None => status_lines(&self.vm.body, theme),
        };

        render_card(block, lines, area, buf);
    }
}

pub struct ImpactCard<'a> {
    vm: &'a ImpactViewModel,
    theme: &'a Theme,
}

impl<'a> ImpactCard<'a> {
    pub fn new(vm: &'a ImpactViewModel, theme: &'a Theme) -> Self {
        Self { vm, theme }
    }
}

impl Widget for ImpactCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = card_block("Change Impact", theme);

        let lines = match self.vm.body.ready() {
            Some(details) => {
                let mut lines = Vec::new();
                match &details.entry {
                    Some(entry) => {
                        lines.push(Line::from(vec![
                            Span::styled(entry.file.clone(), theme.text()),
                            Span::raw("  "),
                            badge_span(&entry.risk_level, theme),
                        ]));
                        lines.push(metrics_line(&entry.metrics, theme));
                    }
                    None => lines.push(Line::styled("No impact entries returned.", theme.muted())),
                }

                let mut header = vec![Span::styled("Executive Summary", theme.section_header())];
                if let Some(severity) = &details.severity {
                    header.push(Span::raw(" "));
                    header.push(badge_span(severity, theme));
                }
                lines.push(Line::default());
                lines.push(Line::from(header));
                lines.extend(details.summary.iter().map(|f| field_line(f, theme)));
                lines
            }
            None => status_lines(&self.vm.body, theme),
        };

        render_card(block, lines, area, buf);
    }
}

pub struct PrRiskCard<'a> {
    vm: &'a PrRiskViewModel,
    theme: &'a Theme,
}

impl<'a> PrRiskCard<'a> {
    pub fn new(vm: &'a PrRiskViewModel, theme: &'a Theme) -> Self {
        Self { vm, theme }
    }
}

impl Widget for PrRiskCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = card_block("PR Risk", theme);

        let lines = match self.vm.body.ready() {
            Some(details) => {
                let mut lines = Vec::new();
                lines.push(Line::from(vec![
                    Span::styled("Classification ", theme.label()),
                    badge_span(&details.classification, theme),
                ]));
                lines.push(metrics_line(&details.metrics, theme));

                if !details.high_risk_modules.is_empty() {
                    lines.push(Line::from(vec![
                        Span::styled("High-risk modules: ", theme.label()),
                        Span::styled(
                            details.high_risk_modules.join(", "),
                            theme.band_style(Band::Danger),
                        ),
                    ]));
                }

                for row in &details.files {
                    lines.push(Line::from(vec![
                        Span::styled("  • ", theme.muted()),
                        Span::styled(row.file.clone(), theme.text()),
                        Span::styled(format!("  score {} depth {} ", row.score, row.depth), theme.label()),
                        Span::styled(row.level.text.clone(), theme.band_style(row.level.band)),
                    ]));
                }

                for section in &details.sections {
                    section_lines(section, theme, &mut lines);
                }
                lines
            }
            None => status_lines(&self.vm.body, theme),
        };

        render_card(block, lines, area, buf);
    }
}
