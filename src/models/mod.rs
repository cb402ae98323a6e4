//! Data model for the portal.
//!
//! All entities are supplied by the sheet service, deserialized once at
//! startup and never mutated afterwards.

mod event;
mod faq;
mod schedule;

pub use event::EventEntry;
pub use faq::FaqEntry;
pub use schedule::{ScheduleEntry, INSTRUCTOR_PLACEHOLDER};

use serde::Deserializer;

/// Deserialize a spreadsheet cell as a string.
///
/// Sheet services hand back numeric cells (a period typed as `3`) as JSON
/// numbers and blank cells as `null`; both become strings here.
pub(crate) fn deserialize_cell<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct CellVisitor;

    impl<'de> Visitor<'de> for CellVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number, boolean or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<String, E>
        where
            E: de::Error,
        {
            // Whole numbers come back from some sheet exports as `3.0`
            if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
                Ok((value as i64).to_string())
            } else {
                Ok(value.to_string())
            }
        }

        fn visit_bool<E>(self, value: bool) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_unit<E>(self) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_none<E>(self) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(CellVisitor)
}

/// Deserialize an optional cell, treating blank text as absent.
pub(crate) fn deserialize_optional_cell<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_cell(deserializer)?;
    if value.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}
