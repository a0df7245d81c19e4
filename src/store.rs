use std::path::{Path, PathBuf};

use potluck_mealplan::{NewPlannedMeal, Week, WeekPlan};
use potluck_shared::{PlanDate, RecordId, mealplan::PlannedMeal, recipe::RecipeSnapshot};
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Read a JSON array of rows. A missing file is an empty table.
fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let path_str = path.display().to_string();

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path_str, "no records yet");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path_str,
                source,
            });
        }
    };

    serde_json::from_str(&json).map_err(|source| StoreError::Parse {
        path: path_str,
        source,
    })
}

/// Planned meal rows persisted as a JSON array.
#[derive(Debug)]
pub struct JsonPlanStore {
    path: PathBuf,
    meals: Vec<PlannedMeal>,
}

impl JsonPlanStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let meals = read_rows(&path)?;

        tracing::debug!(path = %path.display(), meals = meals.len(), "plan store opened");

        Ok(Self { path, meals })
    }

    pub fn meals(&self) -> &[PlannedMeal] {
        &self.meals
    }

    /// Meals planned between `start` and `end`, both inclusive.
    pub fn entries_between(&self, start: PlanDate, end: PlanDate) -> Vec<PlannedMeal> {
        self.meals
            .iter()
            .filter(|meal| start <= meal.date && meal.date <= end)
            .cloned()
            .collect()
    }

    pub fn week(&self, week: &Week) -> WeekPlan {
        WeekPlan::for_week(self.entries_between(week.start, week.end), week)
    }

    pub fn find(&self, id: &str) -> Option<&PlannedMeal> {
        self.meals.iter().find(|meal| meal.id.to_string() == id)
    }

    /// Insert a meal under a fresh id and return the stored row.
    pub fn add(&mut self, meal: NewPlannedMeal) -> &PlannedMeal {
        let id = RecordId::Text(uuid::Uuid::new_v4().to_string());
        tracing::info!(%id, date = %meal.date, name = %meal.meal_name, "meal planned");

        let index = self.meals.len();
        self.meals.push(meal.into_planned(id));
        &self.meals[index]
    }

    /// Delete a meal. Returns `false` when no row has this id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.meals.len();
        self.meals.retain(|meal| meal.id.to_string() != id);

        let removed = self.meals.len() != before;
        if removed {
            tracing::info!(id, "meal removed from plan");
        }
        removed
    }

    pub fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.meals)?;

        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// Recipe rows persisted as a JSON array.
#[derive(Debug, Default)]
pub struct JsonRecipeStore {
    recipes: Vec<RecipeSnapshot>,
}

impl JsonRecipeStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Ok(Self {
            recipes: read_rows(path.as_ref())?,
        })
    }

    pub fn recipe(&self, id: &str) -> Option<&RecipeSnapshot> {
        self.recipes.iter().find(|recipe| recipe.id.to_string() == id)
    }
}
