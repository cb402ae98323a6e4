//! Progressive course → shift → period selection.
//!
//! `SelectionState` owns the three selection slots plus the course search
//! text. The current [`SelectionStep`] is derived from which slots are set,
//! so there is no separate state field that could drift.

use thiserror::Error;
use tracing::debug;

use crate::models::ScheduleEntry;

use super::engine::sole_shift;

/// Where the user is in the selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStep {
    /// Picking a course (search box + course list)
    NoCourse,
    /// Course chosen, picking a shift
    CourseChosen,
    /// Course and shift chosen, picking a period
    CourseAndShiftChosen,
    /// All three chosen, showing the timetable
    FullySpecified,
}

/// Rejected selection transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("a course must be chosen before a shift")]
    CourseNotChosen,

    #[error("a shift must be chosen before a period")]
    ShiftNotChosen,

    #[error("nothing to go back from")]
    AtStart,
}

/// UI-local selection slots for the schedule lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    course: Option<String>,
    shift: Option<String>,
    period: Option<String>,
    search: String,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn course(&self) -> Option<&str> {
        self.course.as_deref()
    }

    pub fn shift(&self) -> Option<&str> {
        self.shift.as_deref()
    }

    pub fn period(&self) -> Option<&str> {
        self.period.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current step, derived from the filled slots.
    pub fn step(&self) -> SelectionStep {
        match (&self.course, &self.shift, &self.period) {
            (None, _, _) => SelectionStep::NoCourse,
            (Some(_), None, _) => SelectionStep::CourseChosen,
            (Some(_), Some(_), None) => SelectionStep::CourseAndShiftChosen,
            (Some(_), Some(_), Some(_)) => SelectionStep::FullySpecified,
        }
    }

    /// Whether there is anything for "Limpar" to clear.
    pub fn is_dirty(&self) -> bool {
        self.course.is_some() || !self.search.is_empty()
    }

    /// Replace the course search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
    }

    /// Remove the last search character. Returns false if the search was empty.
    pub fn pop_search_char(&mut self) -> bool {
        self.search.pop().is_some()
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Choose a course.
    ///
    /// If the course offers exactly one shift, that shift is chosen too and
    /// the flow lands directly on period selection. Any previous period is
    /// cleared.
    pub fn choose_course(&mut self, entries: &[ScheduleEntry], course: impl Into<String>) {
        let course = course.into();
        let auto_shift = sole_shift(entries, &course).map(str::to_string);

        debug!(
            course = %course,
            auto_shift = ?auto_shift,
            "schedule: course chosen"
        );

        self.course = Some(course);
        self.shift = auto_shift;
        self.period = None;
    }

    /// Choose a shift for the current course.
    pub fn choose_shift(&mut self, shift: impl Into<String>) -> Result<(), SelectionError> {
        if self.course.is_none() {
            return Err(SelectionError::CourseNotChosen);
        }
        self.shift = Some(shift.into());
        self.period = None;
        Ok(())
    }

    /// Choose a period for the current course and shift.
    pub fn choose_period(&mut self, period: impl Into<String>) -> Result<(), SelectionError> {
        if self.course.is_none() {
            return Err(SelectionError::CourseNotChosen);
        }
        if self.shift.is_none() {
            return Err(SelectionError::ShiftNotChosen);
        }
        self.period = Some(period.into());
        Ok(())
    }

    /// Drop the course (and anything below it). Search text is kept.
    pub fn clear_course(&mut self) {
        self.course = None;
        self.shift = None;
        self.period = None;
    }

    /// Drop the shift, returning to shift selection. The course is kept.
    pub fn clear_shift(&mut self) {
        self.shift = None;
        self.period = None;
    }

    /// Drop the period, returning to period selection.
    pub fn clear_period(&mut self) {
        self.period = None;
    }

    /// Go back one step from wherever the flow is.
    pub fn back(&mut self) -> Result<SelectionStep, SelectionError> {
        match self.step() {
            SelectionStep::NoCourse => return Err(SelectionError::AtStart),
            SelectionStep::CourseChosen => self.clear_course(),
            SelectionStep::CourseAndShiftChosen => self.clear_shift(),
            SelectionStep::FullySpecified => self.clear_period(),
        }
        Ok(self.step())
    }

    /// Clear course, shift, period and search together.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
