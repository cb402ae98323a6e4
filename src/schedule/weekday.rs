//! Weekday ordering for timetable display.
//!
//! Day labels come straight from the spreadsheet and are looked up in the
//! fixed Monday..Saturday table as written. Labels that are not in the table
//! get [`UNKNOWN_WEEKDAY_RANK`] and sort after every known day.

use chrono::{Datelike, Local, Weekday};

/// Display order of the teaching days, Monday first.
pub const WEEKDAY_ORDER: [&str; 6] = ["Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado"];

/// Rank given to a label that is not in [`WEEKDAY_ORDER`].
pub const UNKNOWN_WEEKDAY_RANK: usize = usize::MAX;

/// Position of `label` in [`WEEKDAY_ORDER`], if it names a teaching day.
///
/// The match is exact: `"segunda-feira"` or `"Terca"` are not table entries.
pub fn weekday_index(label: &str) -> Option<usize> {
    WEEKDAY_ORDER.iter().position(|day| *day == label)
}

/// Sort rank of `label`; unknown labels rank after every known day.
pub fn weekday_rank(label: &str) -> usize {
    weekday_index(label).unwrap_or(UNKNOWN_WEEKDAY_RANK)
}

/// Table index for a calendar weekday. Sunday has no classes.
pub fn index_of(weekday: Weekday) -> Option<usize> {
    match weekday {
        Weekday::Mon => Some(0),
        Weekday::Tue => Some(1),
        Weekday::Wed => Some(2),
        Weekday::Thu => Some(3),
        Weekday::Fri => Some(4),
        Weekday::Sat => Some(5),
        Weekday::Sun => None,
    }
}

/// Table index of the current local day.
pub fn today_index() -> Option<usize> {
    index_of(Local::now().weekday())
}

/// Whether `label` names the same teaching day as table index `today`.
pub fn is_same_day(label: &str, today: Option<usize>) -> bool {
    match (weekday_index(label), today) {
        (Some(day), Some(today)) => day == today,
        _ => false,
    }
}
