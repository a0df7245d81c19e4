use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Column, LooseNumber, PlanDate, RecordId, recipe::RecipeSnapshot};

/// One scheduled occurrence of a meal, as stored in the meal plan table.
///
/// Every column keeps whether it was missing or `null`, so a row written
/// back out has the keys it was read with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub id: RecordId,
    pub date: PlanDate,
    #[serde(default, skip_serializing_if = "Column::is_absent")]
    pub servings: Column<LooseNumber>,
    #[serde(default, skip_serializing_if = "Column::is_absent")]
    pub meal_name: Column<String>,
    #[serde(default, skip_serializing_if = "Column::is_absent")]
    pub recipe_id: Column<RecordId>,
    /// Recipe joined onto the row by the database.
    #[serde(default, skip_serializing_if = "Column::is_absent")]
    pub recipes: Column<RecipeSnapshot>,
    /// Recipe snapshot captured when the meal was planned.
    #[serde(default, skip_serializing_if = "Column::is_absent")]
    pub recipe_ref: Column<RecipeSnapshot>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlannedMeal {
    pub fn custom(
        id: impl Into<RecordId>,
        date: PlanDate,
        name: impl Into<String>,
        servings: impl Into<LooseNumber>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            servings: Column::Value(servings.into()),
            meal_name: Column::Value(name.into()),
            recipe_id: Column::Null,
            recipes: Column::Absent,
            recipe_ref: Column::Null,
            extra: Map::new(),
        }
    }

    pub fn with_recipe(
        id: impl Into<RecordId>,
        date: PlanDate,
        recipe: RecipeSnapshot,
        servings: impl Into<LooseNumber>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            servings: Column::Value(servings.into()),
            meal_name: recipe.title.clone(),
            recipe_id: Column::Value(recipe.id.clone()),
            recipes: Column::Absent,
            recipe_ref: Column::Value(recipe),
            extra: Map::new(),
        }
    }

    /// Planned servings, `1` when missing, zero or not a number.
    pub fn effective_servings(&self) -> f64 {
        self.servings.value().map_or(1.0, |servings| servings.or(1.0))
    }

    /// Embedded recipe under either key, `recipe_ref` first.
    pub fn recipe(&self) -> Option<&RecipeSnapshot> {
        self.recipe_ref.value().or(self.recipes.value())
    }

    /// The embedded recipe, unless the row says it references none.
    pub fn linked_recipe(&self) -> Option<&RecipeSnapshot> {
        if self.recipe_id.is_null() {
            return None;
        }
        self.recipe()
    }

    /// Display label: recipe title for linked meals, otherwise the free-form name.
    pub fn label(&self) -> &str {
        let title = self.linked_recipe().and_then(|recipe| recipe.title.as_deref());

        title.or(self.meal_name.as_deref()).unwrap_or_default()
    }
}
