use serde::{Deserialize, Serialize};

use super::{deserialize_cell, deserialize_optional_cell};

/// Text shown when a class has no instructor assigned yet.
pub const INSTRUCTOR_PLACEHOLDER: &str = "A definir";

/// One class slot ("ensalamento"): which course, shift and period it belongs
/// to, on which weekday, and where it takes place.
///
/// Entries carry no identity; filters compare them field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(alias = "curso", default, deserialize_with = "deserialize_cell")]
    pub course: String,
    #[serde(alias = "turno", default, deserialize_with = "deserialize_cell")]
    pub shift: String,
    #[serde(alias = "periodo", alias = "período", default, deserialize_with = "deserialize_cell")]
    pub period: String,
    #[serde(alias = "dia", default, deserialize_with = "deserialize_cell")]
    pub weekday: String,
    #[serde(alias = "disciplina", default, deserialize_with = "deserialize_cell")]
    pub subject: String,
    #[serde(
        alias = "professor",
        default,
        deserialize_with = "deserialize_optional_cell",
        skip_serializing_if = "Option::is_none"
    )]
    pub instructor: Option<String>,
    #[serde(alias = "horario", alias = "horário", default, deserialize_with = "deserialize_cell")]
    pub time_slot: String,
    #[serde(alias = "sala", default, deserialize_with = "deserialize_cell")]
    pub room: String,
}

impl ScheduleEntry {
    /// Instructor name, or [`INSTRUCTOR_PLACEHOLDER`] when none is assigned.
    pub fn instructor_or_placeholder(&self) -> &str {
        self.instructor.as_deref().unwrap_or(INSTRUCTOR_PLACEHOLDER)
    }
}
