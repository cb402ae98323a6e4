//! Navigation methods for the App.

use tracing::{debug, warn};

use crate::links::first_url;
use crate::schedule::SelectionStep;
use crate::view_state::{FaqViewState, ScheduleView};

use super::{App, HomeCard, View};

impl App {
    /// Switch screens. Per-screen state is kept.
    pub fn navigate_to(&mut self, view: View) {
        if self.view != view {
            debug!(from = ?self.view, to = ?view, "navigate");
            self.view = view;
            self.mark_dirty();
        }
    }

    pub fn next_view(&mut self) {
        self.navigate_to(self.view.next());
    }

    pub fn prev_view(&mut self) {
        self.navigate_to(self.view.prev());
    }

    /// Number of selectable rows on the current screen.
    fn cursor_len(&self) -> usize {
        match self.view {
            View::Home => HomeCard::ALL.len(),
            View::Schedule => {
                ScheduleView::derive(&self.data.schedule, &self.selection).cursor_len()
            }
            View::Events => self.data.events.len(),
            View::Faq => self.data.faq.len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.view {
            View::Home => &mut self.home_cursor,
            View::Schedule => &mut self.schedule_cursor,
            View::Events => &mut self.events_cursor,
            View::Faq => &mut self.faq_cursor,
        }
    }

    /// Move the cursor of the current screen up
    pub fn move_up(&mut self) {
        let cursor = self.cursor_mut();
        if *cursor > 0 {
            *cursor -= 1;
        }
    }

    /// Move the cursor of the current screen down
    pub fn move_down(&mut self) {
        let len = self.cursor_len();
        let cursor = self.cursor_mut();
        if len > 0 && *cursor < len - 1 {
            *cursor += 1;
        }
    }

    /// Keep every cursor inside its list after the data or selection changed.
    pub(crate) fn clamp_cursors(&mut self) {
        let clamp = |cursor: &mut usize, len: usize| {
            *cursor = (*cursor).min(len.saturating_sub(1));
        };
        let schedule_len = ScheduleView::derive(&self.data.schedule, &self.selection).cursor_len();
        clamp(&mut self.home_cursor, HomeCard::ALL.len());
        clamp(&mut self.schedule_cursor, schedule_len);
        clamp(&mut self.events_cursor, self.data.events.len());
        clamp(&mut self.faq_cursor, self.data.faq.len());
    }

    /// Enter: open the home card, pick the schedule option or toggle the
    /// FAQ question under the cursor.
    pub fn activate(&mut self) {
        match self.view {
            View::Home => {
                if let Some(card) = HomeCard::ALL.get(self.home_cursor) {
                    self.navigate_to(card.target());
                }
            }
            View::Schedule => self.choose_schedule_option(),
            View::Events => {}
            View::Faq => {
                let faq = FaqViewState::derive(&self.data.faq);
                if let Some(index) = faq.index_at(self.faq_cursor) {
                    self.accordion.toggle(index);
                }
            }
        }
    }

    fn choose_schedule_option(&mut self) {
        let (step, choice) = {
            let view = ScheduleView::derive(&self.data.schedule, &self.selection);
            let choice = view
                .options()
                .get(self.schedule_cursor)
                .map(|s| s.to_string());
            (view.step(), choice)
        };
        let Some(choice) = choice else {
            return;
        };

        let result = match step {
            SelectionStep::NoCourse => {
                self.selection.choose_course(&self.data.schedule, choice);
                Ok(())
            }
            SelectionStep::CourseChosen => self.selection.choose_shift(choice),
            SelectionStep::CourseAndShiftChosen => self.selection.choose_period(choice),
            SelectionStep::FullySpecified => Ok(()),
        };

        match result {
            Ok(()) => self.schedule_cursor = 0,
            Err(err) => warn!(error = %err, "schedule selection rejected"),
        }
    }

    /// Esc: step back inside the current screen, or return home.
    pub fn go_back(&mut self) {
        match self.view {
            View::Home => {}
            View::Schedule => {
                if self.selection.step() != SelectionStep::NoCourse {
                    self.schedule_back();
                } else if !self.selection.search().is_empty() {
                    self.selection.clear_search();
                    self.schedule_cursor = 0;
                } else {
                    self.navigate_to(View::Home);
                }
            }
            View::Events => self.navigate_to(View::Home),
            View::Faq => {
                if self.accordion.open_index().is_some() {
                    self.accordion.close();
                } else {
                    self.navigate_to(View::Home);
                }
            }
        }
    }

    /// Undo the last schedule choice.
    pub(crate) fn schedule_back(&mut self) {
        if self.selection.back().is_ok() {
            self.schedule_cursor = 0;
        }
    }

    /// The "Limpar" action: start the schedule lookup over.
    pub fn reset_selection(&mut self) {
        self.selection.reset();
        self.schedule_cursor = 0;
    }

    /// Append to the course search.
    pub fn type_search_char(&mut self, c: char) {
        self.selection.push_search_char(c);
        self.schedule_cursor = 0;
    }

    /// Queue the header contact link.
    pub fn open_contact(&mut self) {
        let url = self.contact_url.clone();
        self.request_link(url);
    }

    /// Queue the first link of the expanded FAQ answer, if any.
    pub fn open_faq_link(&mut self) {
        let url = self
            .accordion
            .open_index()
            .and_then(|index| self.data.faq.get(index))
            .and_then(|entry| first_url(&entry.answer));
        if let Some(url) = url {
            self.request_link(url);
        }
    }
}
