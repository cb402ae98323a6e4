//! Main view state struct for UI rendering
//!
//! `AppViewState` borrows everything a frame needs from the `App`, so render
//! functions never touch the `App` itself.

use crate::app::View;
use crate::faq::Accordion;
use crate::schedule::SelectionState;
use crate::startup::PortalData;

use super::{FaqViewState, ScheduleView};

/// Complete view state for one frame.
pub struct AppViewState<'a> {
    // =========================================================================
    // Core Application State
    // =========================================================================
    /// Current screen
    pub view: View,

    /// Splash overlay still up
    pub splash_visible: bool,

    /// Initial fetch still in flight
    pub loading: bool,

    /// Terminal dimensions
    pub terminal_width: u16,
    pub terminal_height: u16,

    /// Tick counter for animations (spinner)
    pub tick_count: u64,

    /// Header contact link
    pub contact_url: &'a str,

    // =========================================================================
    // Data
    // =========================================================================
    pub data: &'a PortalData,

    // =========================================================================
    // Per-screen UI state
    // =========================================================================
    pub home_cursor: usize,
    pub selection: &'a SelectionState,
    pub schedule_cursor: usize,
    pub events_cursor: usize,
    pub faq_cursor: usize,
    pub accordion: Accordion,

    /// Today's position in the weekday table; `None` on Sundays
    pub today: Option<usize>,

    /// Wrap URLs in OSC 8 sequences
    pub hyperlinks: bool,
}

impl<'a> AppViewState<'a> {
    pub fn schedule(&self) -> ScheduleView<'a> {
        ScheduleView::derive(&self.data.schedule, self.selection)
    }

    pub fn faq(&self) -> FaqViewState<'a> {
        FaqViewState::derive(&self.data.faq)
    }
}
