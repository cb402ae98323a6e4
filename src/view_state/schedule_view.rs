//! What the schedule screen shows for the current selection.

use crate::models::ScheduleEntry;
use crate::schedule::{
    group_by_weekday, list_courses, list_periods, list_shifts, select_schedule, DayGroup,
    SelectionState, SelectionStep,
};

/// Derived schedule screen, one variant per selection step.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleView<'a> {
    /// Search box plus the filtered course list
    ChooseCourse {
        search: &'a str,
        courses: Vec<&'a str>,
    },
    /// Shift buttons for the chosen course
    ChooseShift {
        course: &'a str,
        shifts: Vec<&'a str>,
    },
    /// Period buttons for the chosen course and shift
    ChoosePeriod {
        course: &'a str,
        shift: &'a str,
        periods: Vec<&'a str>,
    },
    /// The timetable, grouped by weekday
    Timetable {
        course: &'a str,
        shift: &'a str,
        period: &'a str,
        days: Vec<DayGroup<'a>>,
    },
}

impl<'a> ScheduleView<'a> {
    /// Derive the screen from the full collection and the selection.
    pub fn derive(entries: &'a [ScheduleEntry], selection: &'a SelectionState) -> Self {
        match (selection.course(), selection.shift(), selection.period()) {
            (Some(course), Some(shift), Some(period)) => {
                let selected = select_schedule(entries, Some(course), Some(shift), Some(period));
                ScheduleView::Timetable {
                    course,
                    shift,
                    period,
                    days: group_by_weekday(&selected),
                }
            }
            (Some(course), Some(shift), None) => ScheduleView::ChoosePeriod {
                course,
                shift,
                periods: list_periods(entries, Some(course), Some(shift)),
            },
            (Some(course), None, _) => ScheduleView::ChooseShift {
                course,
                shifts: list_shifts(entries, Some(course)),
            },
            (None, _, _) => ScheduleView::ChooseCourse {
                search: selection.search(),
                courses: list_courses(entries, selection.search()),
            },
        }
    }

    pub fn step(&self) -> SelectionStep {
        match self {
            ScheduleView::ChooseCourse { .. } => SelectionStep::NoCourse,
            ScheduleView::ChooseShift { .. } => SelectionStep::CourseChosen,
            ScheduleView::ChoosePeriod { .. } => SelectionStep::CourseAndShiftChosen,
            ScheduleView::Timetable { .. } => SelectionStep::FullySpecified,
        }
    }

    /// The selectable options on this step; empty on the timetable.
    pub fn options(&self) -> &[&'a str] {
        match self {
            ScheduleView::ChooseCourse { courses, .. } => courses,
            ScheduleView::ChooseShift { shifts, .. } => shifts,
            ScheduleView::ChoosePeriod { periods, .. } => periods,
            ScheduleView::Timetable { .. } => &[],
        }
    }

    /// Rows the cursor moves over: the options, or the classes of the
    /// timetable.
    pub fn cursor_len(&self) -> usize {
        match self {
            ScheduleView::Timetable { days, .. } => days.iter().map(|d| d.entries.len()).sum(),
            other => other.options().len(),
        }
    }

    /// Whether typing edits the course search on this step.
    pub fn accepts_text(&self) -> bool {
        matches!(self, ScheduleView::ChooseCourse { .. })
    }
}
