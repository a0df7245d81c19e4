use potluck_mealplan::NewPlannedMeal;
use potluck_shared::PlanDate;

use crate::{
    error::{AppError, Result},
    store::{JsonPlanStore, JsonRecipeStore},
};

/// What to put on the plan: a stored recipe or a free-form meal name.
#[derive(Debug, Clone, PartialEq)]
pub enum MealSource {
    Recipe { id: String, recipes_path: String },
    Custom { name: String },
}

#[tracing::instrument]
pub fn add_meal(
    plan_path: &str,
    date: &str,
    source: MealSource,
    servings: Option<f64>,
) -> Result<String> {
    let date: PlanDate = date.parse()?;

    let meal = match source {
        MealSource::Recipe { id, recipes_path } => {
            let recipes = JsonRecipeStore::open(&recipes_path)?;
            let recipe = recipes
                .recipe(&id)
                .cloned()
                .ok_or(AppError::RecipeNotFound(id))?;
            NewPlannedMeal::for_recipe(date, recipe, servings)?
        }
        MealSource::Custom { name } => NewPlannedMeal::custom(date, name, servings)?,
    };

    let mut store = JsonPlanStore::open(plan_path)?;
    let planned = store.add(meal);
    let message = format!("Planned {} on {} ({})", planned.label(), planned.date, planned.id);
    store.save()?;

    Ok(message)
}

#[tracing::instrument]
pub fn remove_meal(plan_path: &str, id: &str) -> Result<String> {
    let mut store = JsonPlanStore::open(plan_path)?;
    if !store.remove(id) {
        return Err(AppError::MealNotFound(id.to_string()));
    }
    store.save()?;

    Ok(format!("Removed {id}"))
}
