//! Spreadsheet payload decoding.
//!
//! Sheet services publish rows in one of two JSON shapes:
//!
//! - an array of row objects keyed by header (`[{"curso": "Direito", ...}]`)
//! - a `values` table whose first row holds the headers
//!   (`{"values": [["curso", ...], ["Direito", ...]]}`)
//!
//! Both are normalised to row objects and then deserialized into the model.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::FetchError;

/// Decode a sheet payload into typed rows.
///
/// `sheet` only labels errors.
pub fn decode_rows<T: DeserializeOwned>(sheet: &str, body: &[u8]) -> Result<Vec<T>, FetchError> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| FetchError::decode(sheet, format!("invalid JSON: {}", e)))?;

    let rows = match payload {
        Value::Array(rows) => rows,
        Value::Object(mut object) => match object.remove("values") {
            Some(Value::Array(table)) => table_to_rows(sheet, table)?,
            _ => {
                return Err(FetchError::decode(
                    sheet,
                    "expected an array of rows or a values table",
                ))
            }
        },
        _ => {
            return Err(FetchError::decode(
                sheet,
                "expected an array of rows or a values table",
            ))
        }
    };

    rows.into_iter()
        .map(normalize_keys)
        .enumerate()
        .filter(|(_, row)| !is_blank_row(row))
        .map(|(i, row)| {
            serde_json::from_value(row)
                .map_err(|e| FetchError::decode(sheet, format!("row {}: {}", i + 1, e)))
        })
        .collect()
}

/// Turn a header-first `values` table into row objects.
///
/// Short rows leave their trailing columns missing, which the model fills
/// with defaults. Header cells are trimmed and lower-cased.
fn table_to_rows(sheet: &str, table: Vec<Value>) -> Result<Vec<Value>, FetchError> {
    let mut rows = table.into_iter();

    let headers: Vec<String> = match rows.next() {
        Some(Value::Array(cells)) => cells.iter().map(header_name).collect(),
        Some(_) => return Err(FetchError::decode(sheet, "header row is not a list")),
        None => return Ok(Vec::new()),
    };

    rows.enumerate()
        .map(|(i, row)| match row {
            Value::Array(cells) => {
                let object: Map<String, Value> = headers
                    .iter()
                    .zip(cells)
                    .filter(|(header, _)| !header.is_empty())
                    .map(|(header, cell)| (header.clone(), cell))
                    .collect();
                Ok(Value::Object(object))
            }
            _ => Err(FetchError::decode(
                sheet,
                format!("row {} is not a list", i + 2),
            )),
        })
        .collect()
}

/// Row-object keys get the same treatment as table headers, so `Curso`
/// and ` curso ` both reach the `curso` field.
fn normalize_keys(row: Value) -> Value {
    match row {
        Value::Object(object) => Value::Object(
            object
                .into_iter()
                .map(|(key, value)| (key.trim().to_lowercase(), value))
                .filter(|(key, _)| !key.is_empty())
                .collect(),
        ),
        other => other,
    }
}

fn header_name(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.trim().to_lowercase(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Rows where every cell is empty are padding left by the spreadsheet.
fn is_blank_row(row: &Value) -> bool {
    match row {
        Value::Object(object) => object.values().all(|v| match v {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            _ => false,
        }),
        _ => false,
    }
}
