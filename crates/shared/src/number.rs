use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Numeric column kept exactly as storage returned it.
///
/// Rows coming back from the record store are loosely typed: servings and
/// amounts show up as numbers, numeric strings, `null`, or missing entirely.
/// The raw value is preserved so exports reproduce the row, and coercion
/// happens on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LooseNumber(pub Value);

impl LooseNumber {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Coerce to a number. Returns `NaN` when the value has no numeric reading.
    pub fn as_number(&self) -> f64 {
        coerce(&self.0)
    }

    /// Coerced value, or `default` when it is zero, `NaN` or infinite.
    pub fn or(&self, default: f64) -> f64 {
        truthy(self.as_number()).unwrap_or(default)
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        Self(Value::from(value))
    }
}

impl From<i32> for LooseNumber {
    fn from(value: i32) -> Self {
        Self(Value::from(value))
    }
}

impl From<u32> for LooseNumber {
    fn from(value: u32) -> Self {
        Self(Value::from(value))
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        Self(Value::from(value))
    }
}

/// Numeric reading of an arbitrary JSON value.
///
/// Strings are trimmed before parsing and an empty string reads as zero;
/// booleans read as 0/1 and `null` as 0. Arrays and objects are not numbers.
pub fn coerce(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// `Some(n)` for a usable non-zero finite number.
pub fn truthy(n: f64) -> Option<f64> {
    (n.is_finite() && n != 0.0).then_some(n)
}
