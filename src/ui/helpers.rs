//! Helper functions for UI rendering
//!
//! Width-aware truncation and wrapping, plus the scroll and centering math
//! shared by the screens.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for the splash loader
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks per spinner frame (the main loop ticks every 16ms)
const TICKS_PER_FRAME: u64 = 5;

/// Spinner glyph for a tick count.
pub fn spinner_frame(tick_count: u64) -> &'static str {
    let idx = (tick_count / TICKS_PER_FRAME) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[idx]
}

/// A column of at most `max_width` cells centered horizontally in `area`.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Truncate to `max_width` display cells, ending with "…" when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `max_width` display cells.
///
/// Existing line breaks are kept. Words wider than a line are broken by
/// character.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= max_width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if current_width + w > max_width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += w;
                }
            }
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Keep at most `max_lines` lines; the last kept line ends with "…" when
/// lines were dropped.
pub fn clamp_lines(mut lines: Vec<String>, max_lines: usize, max_width: usize) -> Vec<String> {
    if lines.len() <= max_lines || max_lines == 0 {
        lines.truncate(max_lines);
        return lines;
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let budget = max_width.saturating_sub(1);
        let mut kept = truncate_to_width(last, budget);
        if kept.ends_with('…') {
            kept.pop();
        }
        kept.push('…');
        *last = kept;
    }
    lines
}

/// First visible line so that `cursor_line` stays on screen.
pub fn scroll_offset(cursor_line: usize, viewport_height: usize) -> usize {
    if viewport_height == 0 || cursor_line < viewport_height.saturating_sub(1) {
        0
    } else {
        cursor_line + 2 - viewport_height
    }
}
