//! Splash screen shown while the initial load runs.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::view_state::AppViewState;

use super::components::{render_status_indicator, StatusIndicatorType};
use super::theme::{COLOR_HEADER, COLOR_HEADER_BG, COLOR_PRIMARY};

pub const SPLASH_TITLE: &str = "Santa Cruz";
pub const SPLASH_SUBTITLE: &str = "Portal do Estudante";

/// Title, subtitle and load status, centered.
pub fn build_splash_lines(state: &AppViewState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            SPLASH_TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SPLASH_SUBTITLE, Style::default().fg(COLOR_PRIMARY))),
        Line::from(""),
    ];

    let status = if state.loading {
        StatusIndicatorType::spinner("Carregando...", state.tick_count)
    } else {
        StatusIndicatorType::done("Pronto")
    };
    lines.extend(render_status_indicator(&status));
    lines
}

pub fn render_splash(frame: &mut Frame, area: Rect, state: &AppViewState) {
    frame.render_widget(
        Block::default().style(Style::default().bg(COLOR_HEADER_BG)),
        area,
    );

    let lines = build_splash_lines(state);
    let height = lines.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(COLOR_HEADER_BG));
    frame.render_widget(para, rows[1]);
}
