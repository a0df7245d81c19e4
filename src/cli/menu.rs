use potluck_mealplan::MenuSummary;
use potluck_shared::PlanDate;
use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::{cli::resolve_week, config::Config, error::Result, store::JsonPlanStore};

const DAY_HEADING: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday], [month repr:short] [day padding:none]");

#[tracing::instrument(skip(config))]
pub fn menu(config: &Config, plan_path: &str, date: Option<&str>) -> Result<String> {
    let store = JsonPlanStore::open(plan_path)?;
    let week = resolve_week(date, config.plan.week_start)?;
    let summary = MenuSummary::from_plan(&store.week(&week));

    Ok(render_menu(&summary))
}

pub fn render_menu(summary: &MenuSummary) -> String {
    let mut out = String::from("Weekly Menu Summary\n");
    if summary.days.is_empty() {
        out.push_str("Nothing planned this week.\n");
        return out;
    }

    for day in &summary.days {
        out.push_str(&format!("{}\n", day_heading(day.date)));
        for meal in &day.meals {
            out.push_str(&format!("  {:>6}  {}\n", meal.multiplier, meal.label));
        }
    }

    out
}

fn day_heading(date: PlanDate) -> String {
    date.date()
        .format(DAY_HEADING)
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use potluck_mealplan::WeekPlan;
    use potluck_shared::mealplan::PlannedMeal;

    #[test]
    fn test_render_menu() {
        let date: PlanDate = "2025-01-20".parse().unwrap();
        let plan = WeekPlan::group_by_date(vec![PlannedMeal::custom(1, date, "Leftovers", 2)]);

        let out = render_menu(&MenuSummary::from_plan(&plan));

        assert_eq!(out, "Weekly Menu Summary\nMonday, Jan 20\n      2x  Leftovers\n");
    }

    #[test]
    fn test_render_empty_menu() {
        let out = render_menu(&MenuSummary::default());

        assert!(out.ends_with("Nothing planned this week.\n"));
    }
}
