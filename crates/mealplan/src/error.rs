use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MealPlanError {
    #[error("Custom meals need a name")]
    EmptyMealName,

    #[error("Servings must be a positive number, got {0}")]
    InvalidServings(f64),
}
