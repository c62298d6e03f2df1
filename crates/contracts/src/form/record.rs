//! Opaque record rows

use serde_json::Value;
use std::collections::HashMap;

/// One row of the maintained table. The engine never interprets a row beyond
/// reading and writing values by field id.
pub type Record = HashMap<String, Value>;

/// Normalizes a JSON value to the raw string form fields operate on.
/// Strings come back unquoted; null maps to empty.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Stringified value of `field_id` in `record`; empty when absent.
pub fn record_value(record: &Record, field_id: &str) -> String {
    record.get(field_id).map(value_to_string).unwrap_or_default()
}
