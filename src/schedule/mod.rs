//! Class-schedule lookup ("ensalamento").
//!
//! - [`engine`] - pure filters deriving courses, shifts, periods and the
//!   weekday-grouped timetable from the full collection
//! - [`selection`] - the course → shift → period state machine
//! - [`weekday`] - weekday ordering table

pub mod engine;
pub mod selection;
pub mod weekday;

pub use engine::{
    group_by_weekday, list_courses, list_periods, list_shifts, parse_leading_int,
    select_schedule, sole_shift, DayGroup,
};
pub use selection::{SelectionError, SelectionState, SelectionStep};
pub use weekday::{weekday_index, weekday_rank, UNKNOWN_WEEKDAY_RANK, WEEKDAY_ORDER};
