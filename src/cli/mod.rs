mod export;
mod menu;
mod plan;
mod scale;
mod shopping;

pub use export::*;
pub use menu::*;
pub use plan::*;
pub use scale::*;
pub use shopping::*;

use potluck_mealplan::{Week, WeekStart};
use potluck_shared::PlanDate;

use crate::error::Result;

/// Week containing `date`, or the current week.
pub fn resolve_week(date: Option<&str>, week_start: WeekStart) -> Result<Week> {
    let date = match date {
        Some(date) => date.parse()?,
        None => PlanDate::today(),
    };

    Ok(Week::containing(date, week_start))
}
