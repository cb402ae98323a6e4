//! Home screen: greeting, menu cards and the tip of the day.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::HomeCard;
use crate::view_state::AppViewState;

use super::helpers::{scroll_offset, wrap_text};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_PRIMARY, COLOR_TEXT, COLOR_TIP_BG};

pub const GREETING: &str = "Olá, Estudante!";
pub const INTRO: &str = "Bem-vindo ao seu portal acadêmico. Aqui você encontra tudo o que precisa para o seu dia a dia na Santa Cruz.";
pub const TIP_TITLE: &str = "Dica do dia";
pub const TIP_TEXT: &str = "Mantenha seu portal sempre aberto para não perder nenhuma atualização de sala ou evento importante!";

/// Home lines plus the line of the highlighted card.
pub fn build_home_lines(state: &AppViewState, width: u16) -> (Vec<Line<'static>>, usize) {
    let width = width as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(Span::styled(
        GREETING,
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )));
    for row in wrap_text(INTRO, width) {
        lines.push(Line::from(Span::styled(row, Style::default().fg(COLOR_TEXT))));
    }
    lines.push(Line::from(""));

    let mut cursor_line = lines.len();
    for (idx, card) in HomeCard::ALL.iter().enumerate() {
        let selected = idx == state.home_cursor;
        if selected {
            cursor_line = lines.len();
        }

        let (marker, title_style) = if selected {
            (
                "▶ ",
                Style::default()
                    .fg(COLOR_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                "  ",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(COLOR_PRIMARY)),
            Span::styled(card.title(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", card.subtitle()),
            Style::default().fg(COLOR_DIM),
        )));
        lines.push(Line::from(""));
    }

    let tip_style = Style::default().bg(COLOR_TIP_BG);
    lines.push(Line::from(Span::styled(
        format!(" 💡 {}", TIP_TITLE),
        tip_style.fg(COLOR_PRIMARY).add_modifier(Modifier::BOLD),
    )));
    for row in wrap_text(TIP_TEXT, width.saturating_sub(2)) {
        lines.push(Line::from(Span::styled(format!(" {}", row), tip_style.fg(COLOR_TEXT))));
    }

    (lines, cursor_line)
}

pub fn render_home(frame: &mut Frame, area: Rect, state: &AppViewState) {
    let (lines, cursor_line) = build_home_lines(state, area.width);
    let offset = scroll_offset(cursor_line + 1, area.height as usize);
    frame.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), area);
}
