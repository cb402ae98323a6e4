//! Centered placeholder shown when a list has nothing to display.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::COLOR_DIM;

/// Lines for an empty list: a blank spacer then the italic message.
pub fn render_empty_state(message: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(COLOR_DIM)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_is_centered() {
        let lines = render_empty_state("Nenhum evento programado");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].alignment, Some(Alignment::Center));
        assert_eq!(lines[1].spans[0].content, "Nenhum evento programado");
    }
}
