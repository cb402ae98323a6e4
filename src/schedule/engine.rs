//! Cascading course → shift → period filters over the schedule collection.
//!
//! Every function here is pure: it borrows the full collection and returns
//! derived, ordered views of it. Nothing is cached; the collection holds tens
//! to a few hundred rows.

use std::collections::BTreeSet;

use crate::models::ScheduleEntry;

use super::weekday::weekday_rank;

/// Entries of one weekday, in the order they appear in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup<'a> {
    /// Weekday label as written in the sheet
    pub weekday: &'a str,
    /// Classes held on that day
    pub entries: Vec<&'a ScheduleEntry>,
}

/// Distinct course names, sorted, optionally narrowed by a case-insensitive
/// substring search.
pub fn list_courses<'a>(entries: &'a [ScheduleEntry], search: &str) -> Vec<&'a str> {
    let courses: BTreeSet<&str> = entries.iter().map(|e| e.course.as_str()).collect();

    if search.is_empty() {
        return courses.into_iter().collect();
    }

    let needle = search.to_lowercase();
    courses
        .into_iter()
        .filter(|course| course.to_lowercase().contains(&needle))
        .collect()
}

/// Distinct shifts offered for `course`, sorted.
pub fn list_shifts<'a>(entries: &'a [ScheduleEntry], course: Option<&str>) -> Vec<&'a str> {
    let Some(course) = course else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|e| e.course == course)
        .map(|e| e.shift.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct periods for `course` and `shift`, in numeric order.
///
/// Labels are ordered by the integer at their start (`"2º"` counts as 2);
/// labels without one count as 0. The sort is stable, so labels with equal
/// keys keep the order in which they were first seen.
pub fn list_periods<'a>(
    entries: &'a [ScheduleEntry],
    course: Option<&str>,
    shift: Option<&str>,
) -> Vec<&'a str> {
    let (Some(course), Some(shift)) = (course, shift) else {
        return Vec::new();
    };

    let mut periods: Vec<&str> = Vec::new();
    for entry in entries.iter().filter(|e| e.course == course && e.shift == shift) {
        if !periods.contains(&entry.period.as_str()) {
            periods.push(entry.period.as_str());
        }
    }

    periods.sort_by_key(|label| parse_leading_int(label));
    periods
}

/// Classes matching course, shift and period exactly.
pub fn select_schedule<'a>(
    entries: &'a [ScheduleEntry],
    course: Option<&str>,
    shift: Option<&str>,
    period: Option<&str>,
) -> Vec<&'a ScheduleEntry> {
    let (Some(course), Some(shift), Some(period)) = (course, shift, period) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|e| e.course == course && e.shift == shift && e.period == period)
        .collect()
}

/// Bucket classes by weekday and order the buckets Monday to Saturday.
///
/// Buckets whose label is not a known weekday go last; between themselves
/// they keep the order in which they were created.
pub fn group_by_weekday<'a>(entries: &[&'a ScheduleEntry]) -> Vec<DayGroup<'a>> {
    let mut groups: Vec<DayGroup<'a>> = Vec::new();

    for &entry in entries {
        match groups.iter_mut().find(|g| g.weekday == entry.weekday) {
            Some(group) => group.entries.push(entry),
            None => groups.push(DayGroup {
                weekday: entry.weekday.as_str(),
                entries: vec![entry],
            }),
        }
    }

    groups.sort_by_key(|g| weekday_rank(g.weekday));
    groups
}

/// Whether choosing `course` should skip the shift step.
///
/// Returns the single shift when the course offers exactly one.
pub fn sole_shift<'a>(entries: &'a [ScheduleEntry], course: &str) -> Option<&'a str> {
    let shifts = list_shifts(entries, Some(course));
    match shifts.as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}

/// Integer at the start of `label`, or 0 when there is none.
///
/// Leading whitespace and a single sign are accepted, then as many digits as
/// follow; anything after the digits is ignored.
pub fn parse_leading_int(label: &str) -> i64 {
    let trimmed = label.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return 0;
    }

    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -value
    } else {
        value
    }
}
