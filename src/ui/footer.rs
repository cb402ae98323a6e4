//! Nav bar and key hints at the bottom of the screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::View;
use crate::schedule::SelectionStep;
use crate::view_state::AppViewState;

use super::components::{nav_items, render_tab_selector};
use super::layout::LayoutContext;
use super::theme::{COLOR_DIM, COLOR_PRIMARY};

/// (key, action) pairs for the current screen.
pub fn keybind_hints(state: &AppViewState) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "telas")];
    match state.view {
        View::Home => hints.push(("Enter", "abrir")),
        View::Schedule => {
            if state.selection.step() == SelectionStep::NoCourse {
                hints.push(("digite", "buscar"));
            }
            hints.push(("Enter", "selecionar"));
            hints.push(("Esc", "voltar"));
            if state.selection.is_dirty() {
                hints.push(("Ctrl-L", "limpar"));
            }
        }
        View::Events => hints.push(("Esc", "voltar")),
        View::Faq => {
            hints.push(("Enter", "abrir/fechar"));
            if state.accordion.open_index().is_some() {
                hints.push(("o", "abrir link"));
            }
        }
    }
    if !(state.view == View::Schedule && state.selection.step() == SelectionStep::NoCourse) {
        hints.push(("w", "contato"));
        hints.push(("q", "sair"));
    } else {
        hints.push(("Ctrl-C", "sair"));
    }
    hints
}

fn hints_line(state: &AppViewState, ctx: &LayoutContext) -> Line<'static> {
    let hints = keybind_hints(state);
    let mut spans = vec![Span::raw(" ")];
    for (idx, (key, action)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(*key, Style::default().fg(COLOR_PRIMARY)));
        if !ctx.is_extra_small() {
            spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
        }
    }
    Line::from(spans)
}

pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppViewState, ctx: &LayoutContext) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(
        Paragraph::new(render_tab_selector(&nav_items(), state.view, ctx)),
        rows[0],
    );
    frame.render_widget(Paragraph::new(hints_line(state, ctx)), rows[1]);
}
