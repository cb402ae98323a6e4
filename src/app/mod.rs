//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`View`] - which screen is displayed
//! - [`HomeCard`] - menu cards on the home screen
//! - [`AppMessage`] - messages from background tasks
//!
//! Key handling lives in `handlers`, screen and cursor movement in
//! `navigation`. Neither performs I/O: links the user asks to open are
//! queued and drained by the main loop with [`App::take_link_requests`].

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{HomeCard, View};

use tokio::sync::mpsc;

use crate::faq::Accordion;
use crate::schedule::weekday::today_index;
use crate::schedule::{SelectionState, SelectionStep};
use crate::startup::{LoadFailure, PortalData};
use crate::view_state::AppViewState;

/// Main application state
pub struct App {
    /// Current screen
    pub view: View,
    /// Splash overlay is shown until the data settles and the delay runs out
    pub splash_visible: bool,
    /// Initial fetch still in flight
    pub loading: bool,
    /// Loaded collections (empty until `DataLoaded`)
    pub data: PortalData,
    /// Collections that failed to load; logged, never shown
    pub load_failures: Vec<LoadFailure>,
    /// Schedule lookup selection and course search
    pub selection: SelectionState,
    /// Highlighted home card
    pub home_cursor: usize,
    /// Highlighted option on the current schedule step
    pub schedule_cursor: usize,
    /// Highlighted event card
    pub events_cursor: usize,
    /// Highlighted FAQ question, as a position in display order
    pub faq_cursor: usize,
    /// Which FAQ answer is expanded
    pub accordion: Accordion,
    /// Header contact link
    pub contact_url: String,
    /// Today's position in the weekday table
    pub today: Option<usize>,
    /// Emit OSC 8 hyperlinks around detected URLs
    pub hyperlinks: bool,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Set when state changed and the frame must be redrawn
    pub needs_redraw: bool,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Terminal width in columns
    pub terminal_width: u16,
    /// Terminal height in rows
    pub terminal_height: u16,
    /// Links waiting to be opened by the main loop
    link_requests: Vec<String>,
    /// Channel for receiving async messages
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to send from background tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create a new App in the loading state.
    pub fn new(contact_url: impl Into<String>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            view: View::default(),
            splash_visible: true,
            loading: true,
            data: PortalData::default(),
            load_failures: Vec::new(),
            selection: SelectionState::new(),
            home_cursor: 0,
            schedule_cursor: 0,
            events_cursor: 0,
            faq_cursor: 0,
            accordion: Accordion::new(),
            contact_url: contact_url.into(),
            today: today_index(),
            hyperlinks: true,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 80,  // Default, will be updated on first render
            terminal_height: 24, // Default, will be updated on first render
            link_requests: Vec::new(),
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    /// Fix "today" instead of reading the clock.
    pub fn with_today(mut self, today: Option<usize>) -> Self {
        self.today = today;
        self
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations. Only the splash spinner animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.splash_visible {
            self.mark_dirty();
        }
    }

    /// Update terminal dimensions
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        if self.terminal_width != width || self.terminal_height != height {
            self.terminal_width = width;
            self.terminal_height = height;
            self.mark_dirty();
        }
    }

    /// True while typing edits the course search.
    pub fn is_text_entry(&self) -> bool {
        self.view == View::Schedule && self.selection.step() == SelectionStep::NoCourse
    }

    /// Queue a link for the main loop to open.
    pub(crate) fn request_link(&mut self, url: impl Into<String>) {
        self.link_requests.push(url.into());
    }

    /// Drain the links queued since the last call.
    pub fn take_link_requests(&mut self) -> Vec<String> {
        std::mem::take(&mut self.link_requests)
    }

    /// Borrow everything the UI needs for one frame.
    pub fn view_state(&self) -> AppViewState<'_> {
        AppViewState {
            view: self.view,
            splash_visible: self.splash_visible,
            loading: self.loading,
            terminal_width: self.terminal_width,
            terminal_height: self.terminal_height,
            tick_count: self.tick_count,
            contact_url: &self.contact_url,
            data: &self.data,
            home_cursor: self.home_cursor,
            selection: &self.selection,
            schedule_cursor: self.schedule_cursor,
            events_cursor: self.events_cursor,
            faq_cursor: self.faq_cursor,
            accordion: self.accordion,
            today: self.today,
            hyperlinks: self.hyperlinks,
        }
    }
}
