use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A row column that tells a missing key apart from an explicit `null`.
///
/// Pair with `#[serde(default, skip_serializing_if = "Column::is_absent")]`
/// so a key missing from the input is still missing on output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Column<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Column<T> {
    fn default() -> Self {
        Column::Absent
    }
}

impl<T> Column<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Column::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Column::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Column::Value(value) => Some(value),
            Column::Absent | Column::Null => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Column::Value(value) => Some(value),
            Column::Absent | Column::Null => None,
        }
    }

    pub fn as_deref(&self) -> Option<&T::Target>
    where
        T: Deref,
    {
        self.value().map(Deref::deref)
    }
}

/// `None` is stored as an explicit `null`.
impl<T> From<Option<T>> for Column<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Column::Null, Column::Value)
    }
}

impl<T: Serialize> Serialize for Column<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Column::Value(value) => value.serialize(serializer),
            Column::Absent | Column::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Column<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Column::from)
    }
}
