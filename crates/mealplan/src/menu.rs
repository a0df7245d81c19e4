use potluck_shared::{PlanDate, mealplan::PlannedMeal, recipe::RecipeSnapshot};
use potluck_shopping::round_quantity;
use serde::Serialize;

use crate::WeekPlan;

/// One meal line of the weekly menu summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuLine {
    pub label: String,
    /// How many batches of the recipe to cook (`1.5x`), or the planned servings for custom meals.
    pub multiplier: String,
    pub linked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuDay {
    pub date: PlanDate,
    pub meals: Vec<MenuLine>,
}

/// Weekly menu: every planned meal by day, recipe-backed or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuSummary {
    pub days: Vec<MenuDay>,
}

impl MenuSummary {
    pub fn from_plan(plan: &WeekPlan) -> Self {
        let days = plan
            .days()
            .filter(|(_, meals)| !meals.is_empty())
            .map(|(date, meals)| MenuDay {
                date: *date,
                meals: meals.iter().map(MenuLine::from_meal).collect(),
            })
            .collect();

        Self { days }
    }

    /// Labels of meals planned without a recipe.
    pub fn named_meals(&self) -> impl Iterator<Item = &str> {
        self.days
            .iter()
            .flat_map(|day| day.meals.iter())
            .filter(|line| !line.linked)
            .map(|line| line.label.as_str())
    }
}

impl MenuLine {
    pub fn from_meal(meal: &PlannedMeal) -> Self {
        let recipe = meal.linked_recipe();
        let recipe_servings = recipe.and_then(RecipeSnapshot::native_servings);

        let multiplier = match recipe_servings {
            Some(servings) => format_number(round_quantity(meal.effective_servings() / servings)),
            None => format_number(meal.effective_servings()),
        };

        Self {
            label: meal.label().to_owned(),
            multiplier: format!("{multiplier}x"),
            linked: recipe.is_some(),
        }
    }
}

/// Shortest decimal form: `2`, `1.5`, `0.33`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
