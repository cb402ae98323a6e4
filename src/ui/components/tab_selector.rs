//! Tab Selector Component
//!
//! The bottom navigation bar. Uses a `▶` marker for the active screen and
//! tightens its spacing on very small terminals.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::View;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_DIM, COLOR_PRIMARY};

/// A single tab in the nav bar
#[derive(Debug, Clone, Copy)]
pub struct TabItem {
    pub view: View,
    pub label: &'static str,
}

impl TabItem {
    pub fn new(view: View) -> Self {
        Self {
            view,
            label: view.label(),
        }
    }
}

/// One tab per screen, in nav order.
pub fn nav_items() -> Vec<TabItem> {
    View::ALL.iter().copied().map(TabItem::new).collect()
}

/// Render the tab row with `selected` marked.
pub fn render_tab_selector(items: &[TabItem], selected: View, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    spans.push(Span::raw(" "));

    for (idx, item) in items.iter().enumerate() {
        if item.view == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(COLOR_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                item.label,
                Style::default()
                    .fg(COLOR_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            let text_style = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ", text_style));
            spans.push(Span::styled(item.label, text_style));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { " " } else { "    " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}
