use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, thiserror::Error)]
#[error("invalid date '{input}', expected YYYY-MM-DD")]
pub struct DateParseError {
    pub input: String,
}

/// Calendar day a meal is planned on. No time-of-day, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlanDate(pub Date);

impl PlanDate {
    pub fn today() -> Self {
        Self(time::OffsetDateTime::now_utc().date())
    }

    pub fn date(&self) -> Date {
        self.0
    }
}

impl From<Date> for PlanDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl FromStr for PlanDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Timestamps like "2025-01-20T00:00:00Z" are cut down to their day.
        let trimmed = s.trim();
        let day = trimmed.split_once('T').map_or(trimmed, |(day, _)| day);

        Date::parse(day, DATE_FORMAT)
            .map(PlanDate)
            .map_err(|_| DateParseError {
                input: s.to_owned(),
            })
    }
}

impl fmt::Display for PlanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.format(DATE_FORMAT).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl Serialize for PlanDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlanDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
