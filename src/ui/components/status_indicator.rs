//! Status Indicator Component
//!
//! Renders the splash status line: a spinner while loading, a check once done.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::helpers::spinner_frame;
use crate::ui::theme::{COLOR_DIM, COLOR_HEADER, COLOR_PRIMARY};

/// Status indicator types
#[derive(Debug, Clone, PartialEq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner {
        message: String,
        /// Animation tick the frame is chosen from
        tick: u64,
    },
    /// Finished step
    Done { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, tick: u64) -> Self {
        Self::Spinner {
            message: message.into(),
            tick,
        }
    }

    pub fn done(message: impl Into<String>) -> Self {
        Self::Done {
            message: message.into(),
        }
    }
}

/// Render a status indicator as lines.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    match indicator {
        StatusIndicatorType::Spinner { message, tick } => vec![Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(*tick)),
                Style::default().fg(COLOR_HEADER),
            ),
            Span::styled(message.clone(), Style::default().fg(COLOR_HEADER)),
        ])],

        StatusIndicatorType::Done { message } => vec![Line::from(vec![
            Span::styled("✓ ", Style::default().fg(COLOR_PRIMARY)),
            Span::styled(
                message.clone(),
                Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
            ),
        ])],
    }
}
