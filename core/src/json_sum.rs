use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::error::{BenchError, Result};

pub const DEFAULT_FIELD: &str = "value";

/// Running total over a JSON field. Stays integral until the first
/// non-integer (or out-of-range) number is seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonTotal {
    Int(i64),
    Float(f64),
}

impl JsonTotal {
    fn add(self, n: &serde_json::Number) -> Option<JsonTotal> {
        match (self, n.as_i64()) {
            (JsonTotal::Int(acc), Some(v)) => acc.checked_add(v).map(JsonTotal::Int),
            (JsonTotal::Int(acc), None) => Some(JsonTotal::Float(acc as f64 + n.as_f64()?)),
            (JsonTotal::Float(acc), _) => Some(JsonTotal::Float(acc + n.as_f64()?)),
        }
    }
}

impl fmt::Display for JsonTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonTotal::Int(v) => write!(f, "{}", v),
            // Debug keeps the fractional part on whole floats ("3.0").
            JsonTotal::Float(v) => write!(f, "{:?}", v),
        }
    }
}

fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Sum `field` across a top-level array of objects.
pub fn sum_field(text: &str, field: &str) -> Result<JsonTotal> {
    let doc: Value = serde_json::from_str(text)?;
    let items = match &doc {
        Value::Array(items) => items,
        other => {
            return Err(BenchError::UnexpectedJson {
                found: kind_name(other),
            });
        }
    };

    let mut total = JsonTotal::Int(0);
    for (index, item) in items.iter().enumerate() {
        let value = item.get(field).ok_or_else(|| BenchError::MissingField {
            index,
            field: field.to_string(),
        })?;
        let Value::Number(n) = value else {
            return Err(BenchError::NonNumericField {
                index,
                field: field.to_string(),
            });
        };
        total = total.add(n).ok_or(BenchError::ElementOverflow { index })?;
    }
    debug!(items = items.len(), ?total, "summed json field");
    Ok(total)
}
