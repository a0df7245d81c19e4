use crate::WeekPlan;

/// Suggested file name for a downloaded export.
pub const EXPORT_FILE_NAME: &str = "meal_plan.json";

/// Dump the plan as pretty-printed JSON: dates as keys, full meal rows as values.
///
/// This is the plan itself, not the shopping list, so it can be re-imported
/// or fed to other tools.
pub fn export_json(plan: &WeekPlan) -> serde_json::Result<String> {
    serde_json::to_string_pretty(plan)
}

pub fn import_json(json: &str) -> serde_json::Result<WeekPlan> {
    serde_json::from_str(json)
}
