use std::collections::HashMap;

use potluck_shared::{Column, mealplan::PlannedMeal};
use serde::Serialize;

use crate::scale::{round_quantity, serving_ratio};

/// One consolidated row of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListLine {
    /// Name as first encountered for this line.
    pub name: String,
    /// Unit as first encountered for this line. Left out of JSON when the
    /// ingredients had no unit key at all.
    #[serde(skip_serializing_if = "Column::is_absent")]
    pub unit: Column<String>,
    pub quantity: f64,
}

/// Ingredient Aggregation Service
///
/// Stateless domain service turning planned meals into a shopping list.
/// Every linked recipe's ingredients are scaled by planned servings over
/// native servings, then summed per ingredient:
/// - names match case-insensitively, units must match exactly
///   ("Flour 1 cup" + "flour 2 cup" = "Flour 3 cup", "cup" and "Cup" stay apart)
/// - quantities are summed unrounded, the total is rounded to 2 decimals
/// - meals without a recipe, and ingredients without a name, are skipped
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    /// Aggregate the ingredients of `meals` into a list sorted by name.
    ///
    /// Never fails: malformed rows contribute nothing.
    #[tracing::instrument(skip_all)]
    pub fn aggregate<'a>(
        meals: impl IntoIterator<Item = &'a PlannedMeal>,
    ) -> Vec<ShoppingListLine> {
        let mut index: HashMap<(String, Column<String>), usize> = HashMap::new();
        let mut lines: Vec<ShoppingListLine> = Vec::new();
        let mut linked = 0;

        for meal in meals {
            let Some(recipe) = meal.linked_recipe() else {
                continue;
            };
            linked += 1;

            let ingredients = recipe.ingredients();
            if ingredients.is_empty() {
                tracing::debug!(meal = %meal.id, recipe = %recipe.id, "recipe has no ingredients");
                continue;
            }

            let ratio = serving_ratio(meal.effective_servings(), Some(recipe.effective_servings()));

            for ingredient in ingredients {
                let contribution = ingredient.amount * ratio;
                if !contribution.is_finite() {
                    tracing::warn!(
                        meal = %meal.id,
                        ingredient = %ingredient.name,
                        "skipping non-finite quantity"
                    );
                    continue;
                }

                let key = (ingredient.name.to_lowercase(), ingredient.unit.clone());
                let line = *index.entry(key).or_insert_with(|| {
                    lines.push(ShoppingListLine {
                        name: ingredient.name.clone(),
                        unit: ingredient.unit.clone(),
                        quantity: 0.0,
                    });
                    lines.len() - 1
                });

                lines[line].quantity += contribution;
            }
        }

        for line in &mut lines {
            line.quantity = round_quantity(line.quantity);
        }

        // Stable: lines with the same name keep the order their units were first seen.
        lines.sort_by_cached_key(|line| line.name.to_lowercase());

        tracing::debug!(linked, lines = lines.len(), "shopping list aggregated");

        lines
    }
}
