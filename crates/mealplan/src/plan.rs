use std::collections::BTreeMap;

use potluck_shared::{PlanDate, mealplan::PlannedMeal};
use potluck_shopping::{IngredientAggregationService, ShoppingListLine};
use serde::{Deserialize, Serialize};

use crate::Week;

/// Planned meals keyed by day, serialized as `{"YYYY-MM-DD": [meal, ...]}`.
///
/// Days iterate in calendar order; meals within a day keep the order they
/// were fetched in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekPlan(BTreeMap<PlanDate, Vec<PlannedMeal>>);

impl WeekPlan {
    pub fn group_by_date(meals: impl IntoIterator<Item = PlannedMeal>) -> Self {
        let mut days: BTreeMap<PlanDate, Vec<PlannedMeal>> = BTreeMap::new();
        for meal in meals {
            days.entry(meal.date).or_default().push(meal);
        }

        Self(days)
    }

    /// Group only the meals falling inside `week`.
    pub fn for_week(meals: impl IntoIterator<Item = PlannedMeal>, week: &Week) -> Self {
        let plan = Self::group_by_date(meals.into_iter().filter(|meal| week.contains(meal.date)));

        tracing::debug!(
            start = %week.start,
            end = %week.end,
            meals = plan.meal_count(),
            "week plan loaded"
        );

        plan
    }

    pub fn day(&self, date: PlanDate) -> &[PlannedMeal] {
        self.0.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn days(&self) -> impl Iterator<Item = (&PlanDate, &Vec<PlannedMeal>)> {
        self.0.iter()
    }

    pub fn entries(&self) -> impl Iterator<Item = &PlannedMeal> {
        self.0.values().flatten()
    }

    pub fn meal_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.meal_count() == 0
    }

    pub fn shopping_list(&self) -> Vec<ShoppingListLine> {
        IngredientAggregationService::aggregate(self.entries())
    }
}
