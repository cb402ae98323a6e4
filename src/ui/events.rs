//! Events screen ("Eventos Acadêmicos").

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::EventEntry;
use crate::view_state::AppViewState;

use super::components::render_empty_state;
use super::helpers::{clamp_lines, scroll_offset, truncate_to_width, wrap_text};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_PRIMARY, COLOR_TEXT};

pub const EVENTS_TITLE: &str = "Eventos Acadêmicos";
pub const NO_EVENTS: &str = "Nenhum evento programado";

/// Description rows shown per card
pub const DESCRIPTION_MAX_LINES: usize = 3;

fn push_event(lines: &mut Vec<Line<'static>>, event: &EventEntry, selected: bool, width: usize) {
    let marker = if selected { "▶ " } else { "  " };
    lines.push(Line::from(vec![
        Span::styled(marker, Style::default().fg(COLOR_PRIMARY)),
        Span::styled(
            truncate_to_width(&event.title, width.saturating_sub(2)),
            Style::default()
                .fg(if selected { COLOR_PRIMARY } else { COLOR_ACCENT })
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    if !event.description.trim().is_empty() {
        let wrapped = wrap_text(&event.description, width.saturating_sub(2));
        for row in clamp_lines(wrapped, DESCRIPTION_MAX_LINES, width.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(
                format!("  {}", row),
                Style::default().fg(COLOR_TEXT),
            )));
        }
    }

    let detail = Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD);
    let icon = Style::default().fg(COLOR_PRIMARY);
    lines.push(Line::from(vec![
        Span::styled("  📅 ", icon),
        Span::styled(event.date.clone(), detail),
        Span::styled("   ◷ ", icon),
        Span::styled(event.time.clone(), detail),
        Span::styled("   ⌖ ", icon),
        Span::styled(event.location.clone(), detail),
    ]));
    lines.push(Line::from(Span::styled(
        format!("  {}", "─".repeat(width.saturating_sub(4))),
        Style::default().fg(COLOR_BORDER),
    )));
}

/// Event cards plus the line of the highlighted card.
pub fn build_events_lines(state: &AppViewState, width: u16) -> (Vec<Line<'static>>, usize) {
    let width = width as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            EVENTS_TITLE,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if state.data.events.is_empty() {
        lines.extend(render_empty_state(NO_EVENTS));
        return (lines, 0);
    }

    let mut cursor_line = 0;
    for (idx, event) in state.data.events.iter().enumerate() {
        let selected = idx == state.events_cursor;
        if selected {
            cursor_line = lines.len();
        }
        push_event(&mut lines, event, selected, width);
    }
    lines.push(Line::from(Span::styled(
        format!("{} eventos", state.data.events.len()),
        Style::default().fg(COLOR_DIM),
    )));

    (lines, cursor_line)
}

pub fn render_events(frame: &mut Frame, area: Rect, state: &AppViewState) {
    let (lines, cursor_line) = build_events_lines(state, area.width);
    // Card is title, up to three description rows, details and a rule
    let offset = scroll_offset(cursor_line + DESCRIPTION_MAX_LINES + 2, area.height as usize);
    frame.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), area);
}
