use potluck_shared::{Column, recipe::RecipeSnapshot, truthy};
use serde::Serialize;

/// Round to two decimals, halves away from zero.
pub fn round_quantity(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Serving count to divide by: anything zero, missing or not finite counts as one.
pub fn effective_servings(servings: Option<f64>) -> f64 {
    servings.and_then(truthy).unwrap_or(1.0)
}

/// Planned servings over the recipe's native serving count.
pub fn serving_ratio(target_servings: f64, base_servings: Option<f64>) -> f64 {
    target_servings / effective_servings(base_servings)
}

/// Scale a base amount to `target_servings`, unrounded.
///
/// This is what the aggregator accumulates; rounding happens once on the total.
pub fn scale_exact(
    base_amount: Option<f64>,
    base_servings: Option<f64>,
    target_servings: f64,
) -> f64 {
    match base_amount {
        Some(amount) if amount.is_finite() => {
            amount * serving_ratio(target_servings, base_servings)
        }
        _ => 0.0,
    }
}

/// Scale a base amount to `target_servings` and round it for display.
///
/// A missing amount scales to `0`.
pub fn scale(base_amount: Option<f64>, base_servings: Option<f64>, target_servings: f64) -> f64 {
    round_quantity(scale_exact(base_amount, base_servings, target_servings))
}

/// Ingredient line of a recipe shown at an adjusted serving count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledIngredient {
    pub name: String,
    /// `None` when the recipe gives no amount, shown blank.
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Column::is_absent")]
    pub unit: Column<String>,
}

/// Every ingredient of `recipe` scaled to `target_servings`.
pub fn scale_recipe(recipe: &RecipeSnapshot, target_servings: f64) -> Vec<ScaledIngredient> {
    let base_servings = Some(recipe.effective_servings());

    recipe
        .ingredients()
        .into_iter()
        .map(|ingredient| ScaledIngredient {
            amount: truthy(ingredient.amount)
                .map(|amount| scale(Some(amount), base_servings, target_servings)),
            name: ingredient.name,
            unit: ingredient.unit,
        })
        .collect()
}

/// Serving stepper for a single recipe view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServingAdjuster {
    pub base: f64,
    pub current: f64,
}

impl ServingAdjuster {
    pub fn new(base: f64) -> Self {
        Self {
            base,
            current: base,
        }
    }

    pub fn for_recipe(recipe: &RecipeSnapshot) -> Self {
        Self::new(recipe.effective_servings())
    }

    /// Step by `delta`. Ignored when the result would not stay positive.
    pub fn adjust(&mut self, delta: f64) -> f64 {
        self.set(self.current + delta)
    }

    pub fn set(&mut self, servings: f64) -> f64 {
        if servings > 0.0 && servings.is_finite() {
            self.current = servings;
        }
        self.current
    }

    pub fn ratio(&self) -> f64 {
        serving_ratio(self.current, Some(self.base))
    }

    pub fn scale(&self, base_amount: Option<f64>) -> f64 {
        scale(base_amount, Some(self.base), self.current)
    }
}
