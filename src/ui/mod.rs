//! UI rendering for the campus portal
//!
//! Every frame is drawn from an [`AppViewState`] borrowed from the `App`:
//! - Splash overlay while the initial load runs
//! - Header with the institution title, contact link and load warning
//! - The active screen (home, schedule, events or FAQ) in a centered column
//! - Nav bar and key hints at the bottom
//!
//! ## Responsive Layout System
//!
//! Render functions receive a `LayoutContext` built from the terminal size.
//! On compact terminals the header shrinks to one row and timetable classes
//! collapse to a single line each.

mod components;
mod events;
mod faq;
mod footer;
mod header;
mod helpers;
mod home;
mod layout;
mod links;
mod schedule;
mod splash;
mod theme;

// Re-export layout system for external use
pub use layout::{breakpoints, LayoutContext};

// Re-export helpers used outside rendering
pub use helpers::{truncate_to_width, wrap_text};
pub use links::{render_text_with_links, wrap_osc8_hyperlink};

// Re-export screen text for callers that assert on rendered output
pub use events::{EVENTS_TITLE, NO_EVENTS};
pub use faq::{FAQ_TITLE, NO_FAQ};
pub use home::{GREETING, TIP_TITLE};
pub use schedule::{NO_CLASSES, NO_COURSES, SCHEDULE_TITLE, SEARCH_PLACEHOLDER};
pub use splash::SPLASH_TITLE;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, View};
use crate::view_state::AppViewState;

use events::render_events;
use faq::render_faq;
use footer::render_footer;
use header::render_header;
use helpers::centered_column;
use home::render_home;
use schedule::render_schedule;
use splash::render_splash;

/// Rows taken by the nav bar and key hints
const FOOTER_HEIGHT: u16 = 2;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI for the current app state
pub fn render(frame: &mut Frame, app: &App) {
    render_view(frame, &app.view_state());
}

/// Render one frame from a view state.
pub fn render_view(frame: &mut Frame, state: &AppViewState) {
    let area = frame.area();

    if state.splash_visible {
        render_splash(frame, area, state);
        return;
    }

    let ctx = LayoutContext::new(state.terminal_width, state.terminal_height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ctx.header_height()),
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Screen content
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    render_header(frame, chunks[0], state, &ctx);

    let content = centered_column(chunks[2], ctx.content_width());
    match state.view {
        View::Home => render_home(frame, content, state),
        View::Schedule => render_schedule(frame, content, state, &ctx),
        View::Events => render_events(frame, content, state),
        View::Faq => render_faq(frame, content, state),
    }

    render_footer(frame, chunks[3], state, &ctx);
}
