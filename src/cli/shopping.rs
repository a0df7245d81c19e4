use potluck_mealplan::format_number;
use potluck_shopping::ShoppingListLine;

use crate::{
    cli::resolve_week,
    config::{Config, OutputFormat},
    error::Result,
    store::JsonPlanStore,
};

pub const EMPTY_SHOPPING_LIST: &str =
    "No ingredients found. Add recipes to your plan to see items here.";

#[tracing::instrument(skip(config))]
pub fn shopping_list(
    config: &Config,
    plan_path: &str,
    date: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let store = JsonPlanStore::open(plan_path)?;
    let week = resolve_week(date, config.plan.week_start)?;
    let lines = store.week(&week).shopping_list();

    tracing::info!(start = %week.start, items = lines.len(), "shopping list ready");

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&lines)?),
        OutputFormat::Text => Ok(render_shopping_list(&lines)),
    }
}

pub fn render_shopping_list(lines: &[ShoppingListLine]) -> String {
    if lines.is_empty() {
        return format!("Shopping List\n{EMPTY_SHOPPING_LIST}\n");
    }

    let width = lines.iter().map(|line| line.name.chars().count()).max().unwrap_or(0);

    let mut out = format!("Shopping List ({} items)\n", lines.len());
    for line in lines {
        let quantity = format_number(line.quantity);
        let item = match line.unit.as_deref() {
            Some(unit) if !unit.is_empty() => format!("{quantity} {unit}"),
            _ => quantity,
        };
        out.push_str(&format!("  {:<width$}  {item}\n", line.name));
    }

    out
}
