use potluck_mealplan::format_number;
use potluck_shopping::{ScaledIngredient, ServingAdjuster, scale_recipe};

use crate::{
    config::OutputFormat,
    error::{AppError, Result},
    store::JsonRecipeStore,
};

/// Show one recipe's ingredients at `servings` servings.
#[tracing::instrument]
pub fn scale(recipes_path: &str, id: &str, servings: f64, format: OutputFormat) -> Result<String> {
    let recipes = JsonRecipeStore::open(recipes_path)?;
    let recipe = recipes
        .recipe(id)
        .ok_or_else(|| AppError::RecipeNotFound(id.to_string()))?;

    let mut adjuster = ServingAdjuster::for_recipe(recipe);
    let servings = adjuster.set(servings);
    let ingredients = scale_recipe(recipe, servings);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ingredients)?),
        OutputFormat::Text => {
            let title = recipe.title.as_deref().unwrap_or("Ingredients");
            Ok(render_scaled(title, servings, &ingredients))
        }
    }
}

pub fn render_scaled(title: &str, servings: f64, ingredients: &[ScaledIngredient]) -> String {
    let mut out = format!("{title} ({} servings)\n", format_number(servings));

    for ingredient in ingredients {
        let amount = ingredient.amount.map(format_number).unwrap_or_default();
        let unit = ingredient.unit.as_deref().unwrap_or_default();
        let line = format!("{amount} {unit}");
        out.push_str(&format!("  {}  {}\n", ingredient.name, line.trim()));
    }

    out
}
