use potluck_shared::PlanDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Date, Duration, Weekday};

/// First day of a displayed week.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sunday,
            WeekStart::Monday => Weekday::Monday,
        }
    }
}

/// Seven consecutive days, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub start: PlanDate,
    pub end: PlanDate,
}

impl Week {
    /// The week `date` falls in.
    pub fn containing(date: PlanDate, week_start: WeekStart) -> Self {
        let offset = i64::from(date.date().weekday().number_days_from_sunday())
            - i64::from(week_start.weekday().number_days_from_sunday());
        let days_since_start = offset.rem_euclid(7);

        Self::starting(date.date() - Duration::days(days_since_start))
    }

    fn starting(start: Date) -> Self {
        Self {
            start: start.into(),
            end: (start + Duration::days(6)).into(),
        }
    }

    pub fn next(&self) -> Self {
        Self::starting(self.start.date() + Duration::weeks(1))
    }

    pub fn previous(&self) -> Self {
        Self::starting(self.start.date() - Duration::weeks(1))
    }

    pub fn contains(&self, date: PlanDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> [PlanDate; 7] {
        let start = self.start.date();
        std::array::from_fn(|i| (start + Duration::days(i as i64)).into())
    }
}
