//! Clickable links in rendered text.
//!
//! URLs are wrapped in OSC 8 escape sequences so terminals that support
//! them make the text clickable.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::links::detect_urls;
use crate::ui::theme::COLOR_LINK;

/// Style for link text - blue and underlined
pub const STYLE_LINK: Style = Style::new().fg(COLOR_LINK).add_modifier(Modifier::UNDERLINED);

/// Wrap text in an OSC 8 hyperlink escape sequence.
pub fn wrap_osc8_hyperlink(url: &str, text: &str) -> String {
    // OSC 8 format: ESC ] 8 ; ; url BEL text ESC ] 8 ; ; BEL
    format!("\x1b]8;;{}\x07{}\x1b]8;;\x07", url, text)
}

/// Split `text` into spans with detected URLs styled as links.
///
/// With `hyperlinks` set, link spans carry the OSC 8 sequence; otherwise
/// only the style marks them.
pub fn render_text_with_links(text: &str, base_style: Style, hyperlinks: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last_end = 0;

    for link in detect_urls(text) {
        if link.start > last_end {
            spans.push(Span::styled(text[last_end..link.start].to_string(), base_style));
        }

        let content = if hyperlinks {
            wrap_osc8_hyperlink(&link.url, &link.text)
        } else {
            link.text.clone()
        };
        spans.push(Span::styled(content, STYLE_LINK));
        last_end = link.end;
    }

    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }

    if spans.is_empty() && !text.is_empty() {
        spans.push(Span::styled(text.to_string(), base_style));
    }

    spans
}
