//! FAQ screen ("Dúvidas Frequentes").
//!
//! Questions are grouped under their category. At most one answer is
//! expanded; URLs in it are styled as links and, when enabled, wrapped in
//! OSC 8 hyperlinks.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::view_state::AppViewState;

use super::components::render_empty_state;
use super::helpers::{scroll_offset, truncate_to_width, wrap_text};
use super::links::render_text_with_links;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_PRIMARY, COLOR_TEXT};

pub const FAQ_TITLE: &str = "Dúvidas Frequentes";
pub const NO_FAQ: &str = "Nenhuma informação disponível";

const CHEVRON_CLOSED: &str = "▸ ";
const CHEVRON_OPEN: &str = "▾ ";

/// FAQ lines plus the line of the highlighted question.
pub fn build_faq_lines(state: &AppViewState, width: u16) -> (Vec<Line<'static>>, usize) {
    let width = width as usize;
    let faq = state.faq();
    let mut lines = vec![
        Line::from(Span::styled(
            FAQ_TITLE,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if faq.is_empty() {
        lines.extend(render_empty_state(NO_FAQ));
        return (lines, 0);
    }

    let selected_index = faq.index_at(state.faq_cursor);
    let mut cursor_line = 0;

    for category in &faq.categories {
        lines.push(Line::from(Span::styled(
            category.name.to_uppercase(),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
        )));

        for item in &category.items {
            let open = state.accordion.is_open(item.index);
            let selected = selected_index == Some(item.index);
            if selected {
                cursor_line = lines.len();
            }

            let chevron = if open { CHEVRON_OPEN } else { CHEVRON_CLOSED };
            let question_style = if selected {
                Style::default()
                    .fg(COLOR_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(vec![
                Span::styled(chevron, Style::default().fg(COLOR_PRIMARY)),
                Span::styled(
                    truncate_to_width(&item.entry.question, width.saturating_sub(2)),
                    question_style,
                ),
            ]));

            if open {
                let base = Style::default().fg(COLOR_TEXT);
                for row in wrap_text(&item.entry.answer, width.saturating_sub(4)) {
                    let mut spans = vec![Span::raw("    ")];
                    spans.extend(render_text_with_links(&row, base, state.hyperlinks));
                    lines.push(Line::from(spans));
                }
                lines.push(Line::from(""));
            }
        }
        lines.push(Line::from(""));
    }

    (lines, cursor_line)
}

pub fn render_faq(frame: &mut Frame, area: Rect, state: &AppViewState) {
    let (lines, cursor_line) = build_faq_lines(state, area.width);
    let offset = scroll_offset(cursor_line, area.height as usize);
    frame.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), area);
}
