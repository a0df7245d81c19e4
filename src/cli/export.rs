use potluck_mealplan::export_json;

use crate::{
    cli::resolve_week,
    config::Config,
    error::{AppError, Result},
    store::JsonPlanStore,
};

/// Export the selected week. Writes to `output` when given, otherwise returns the JSON.
#[tracing::instrument(skip(config))]
pub fn export(
    config: &Config,
    plan_path: &str,
    date: Option<&str>,
    output: Option<&str>,
) -> Result<String> {
    let store = JsonPlanStore::open(plan_path)?;
    let week = resolve_week(date, config.plan.week_start)?;
    let plan = store.week(&week);
    let json = export_json(&plan)?;

    let Some(output) = output else {
        return Ok(json);
    };

    std::fs::write(output, &json).map_err(|source| AppError::Output {
        path: output.to_string(),
        source,
    })?;

    tracing::info!(path = output, meals = plan.meal_count(), "meal plan exported");

    Ok(format!(
        "{} meals are included in this export, written to {output}",
        plan.meal_count()
    ))
}
