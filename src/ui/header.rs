//! Header bar: institution title and contact link.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::view_state::AppViewState;

use super::layout::LayoutContext;
use super::links::{wrap_osc8_hyperlink, STYLE_LINK};
use super::splash::{SPLASH_SUBTITLE, SPLASH_TITLE};
use super::theme::{COLOR_BORDER, COLOR_HEADER, COLOR_HEADER_BG, COLOR_PRIMARY};

pub const CONTACT_LABEL: &str = "Fale conosco";

fn contact_span(state: &AppViewState) -> Span<'static> {
    let label = format!("☎ {}", CONTACT_LABEL);
    let content = if state.hyperlinks {
        wrap_osc8_hyperlink(state.contact_url, &label)
    } else {
        label
    };
    Span::styled(content, STYLE_LINK)
}

pub fn build_header_lines(state: &AppViewState, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let title = Span::styled(
        SPLASH_TITLE,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    );

    if ctx.is_compact() {
        return vec![Line::from(vec![
            Span::raw(" "),
            title,
            Span::raw("  "),
            contact_span(state),
        ])];
    }

    vec![
        Line::from(vec![Span::raw(" "), title, Span::raw("    "), contact_span(state)]),
        Line::from(Span::styled(
            format!(" {}", SPLASH_SUBTITLE),
            Style::default().fg(COLOR_PRIMARY),
        )),
    ]
}

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppViewState, ctx: &LayoutContext) {
    let block = if ctx.is_compact() {
        Block::default()
    } else {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER))
    };
    let para = Paragraph::new(build_header_lines(state, ctx))
        .block(block.style(Style::default().bg(COLOR_HEADER_BG)));
    frame.render_widget(para, area);
}
