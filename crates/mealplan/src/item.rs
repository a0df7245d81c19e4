use potluck_shared::{
    Column, LooseNumber, PlanDate, RecordId,
    mealplan::PlannedMeal,
    recipe::RecipeSnapshot,
};
use serde_json::Map;

use crate::MealPlanError;

/// Meal about to be added to the plan, before the store assigns it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlannedMeal {
    pub date: PlanDate,
    pub servings: f64,
    pub meal_name: String,
    pub recipe: Option<RecipeSnapshot>,
}

impl NewPlannedMeal {
    /// Plan a recipe. Servings default to the recipe's own serving count.
    pub fn for_recipe(
        date: PlanDate,
        recipe: RecipeSnapshot,
        servings: Option<f64>,
    ) -> Result<Self, MealPlanError> {
        let servings = validate_servings(servings.unwrap_or_else(|| recipe.effective_servings()))?;

        Ok(Self {
            date,
            servings,
            meal_name: recipe.title.as_deref().unwrap_or_default().to_owned(),
            recipe: Some(recipe),
        })
    }

    /// Plan a free-form meal that is not backed by a recipe.
    pub fn custom(
        date: PlanDate,
        name: impl Into<String>,
        servings: Option<f64>,
    ) -> Result<Self, MealPlanError> {
        let meal_name = name.into();
        if meal_name.trim().is_empty() {
            return Err(MealPlanError::EmptyMealName);
        }

        Ok(Self {
            date,
            servings: validate_servings(servings.unwrap_or(1.0))?,
            meal_name,
            recipe: None,
        })
    }

    /// Stored row. The recipe snapshot goes under `recipe_ref`.
    pub fn into_planned(self, id: RecordId) -> PlannedMeal {
        PlannedMeal {
            id,
            date: self.date,
            servings: Column::Value(LooseNumber::from(self.servings)),
            meal_name: Column::Value(self.meal_name),
            recipe_id: self.recipe.as_ref().map(|recipe| recipe.id.clone()).into(),
            recipes: Column::Absent,
            recipe_ref: self.recipe.into(),
            extra: Map::new(),
        }
    }
}

fn validate_servings(servings: f64) -> Result<f64, MealPlanError> {
    if servings > 0.0 && servings.is_finite() {
        Ok(servings)
    } else {
        Err(MealPlanError::InvalidServings(servings))
    }
}
