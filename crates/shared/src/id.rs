use std::fmt;

use serde::{Deserialize, Serialize};

/// Row identifier as issued by the record store: a uuid string or an integer key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{id}"),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(id) => RecordId::Int(id),
            Err(_) => RecordId::Text(value.to_owned()),
        }
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(id) => RecordId::Int(id),
            Err(_) => RecordId::Text(value),
        }
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        RecordId::Int(value.into())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Int(value)
    }
}
