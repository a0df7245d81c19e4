pub mod aggregation;
pub mod scale;

pub use aggregation::{IngredientAggregationService, ShoppingListLine};
pub use scale::{
    ScaledIngredient, ServingAdjuster, round_quantity, scale, scale_recipe, serving_ratio,
};
