use potluck_shared::{
    Column, PlanDate,
    mealplan::PlannedMeal,
    recipe::{IngredientList, RecipeSnapshot},
};
use potluck_shopping::{IngredientAggregationService, ShoppingListLine};
use serde_json::json;

fn pancakes() -> RecipeSnapshot {
    RecipeSnapshot::new(
        1,
        4,
        IngredientList::Native(vec![
            json!({"item": "flour", "amount": 2, "unit": "cup"}),
            json!({"item": "egg", "amount": 2, "unit": ""}),
        ]),
    )
    .with_title("Pancakes")
}

fn date(s: &str) -> PlanDate {
    s.parse().unwrap()
}

fn line(name: &str, unit: &str, quantity: f64) -> ShoppingListLine {
    ShoppingListLine {
        name: name.to_string(),
        unit: Column::Value(unit.to_string()),
        quantity,
    }
}

fn row(value: serde_json::Value) -> PlannedMeal {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_recipe_scaled_to_planned_servings() {
    let meals = vec![PlannedMeal::with_recipe(10, date("2025-01-20"), pancakes(), 8)];

    let lines = IngredientAggregationService::aggregate(&meals);

    assert_eq!(lines, vec![line("egg", "", 4.0), line("flour", "cup", 4.0)]);
}

#[test]
fn test_same_recipe_planned_twice_sums() {
    let meals = vec![
        PlannedMeal::with_recipe(10, date("2025-01-20"), pancakes(), 4),
        PlannedMeal::with_recipe(11, date("2025-01-22"), pancakes(), 8),
    ];

    let lines = IngredientAggregationService::aggregate(&meals);

    assert_eq!(lines, vec![line("egg", "", 6.0), line("flour", "cup", 6.0)]);
}

#[test]
fn test_custom_meal_contributes_nothing() {
    let meals = vec![row(json!({
        "id": 12,
        "date": "2025-01-20",
        "servings": 2,
        "meal_name": "Leftovers",
        "recipe_id": null,
        "recipes": null
    }))];

    assert!(IngredientAggregationService::aggregate(&meals).is_empty());
}

#[test]
fn test_recipe_ref_row_without_recipe_id() {
    let meals = vec![row(json!({
        "id": 1,
        "date": "2025-01-20",
        "servings": 8,
        "recipe_ref": {
            "id": 1,
            "servings": 4,
            "ingredients": [{"item": "flour", "amount": 2, "unit": "cup"}]
        }
    }))];

    let lines = IngredientAggregationService::aggregate(&meals);

    assert_eq!(lines, vec![line("flour", "cup", 4.0)]);
}

#[test]
fn test_null_recipe_ref_contributes_nothing() {
    let meals = vec![
        row(json!({
            "id": 12,
            "date": "2025-01-20",
            "servings": 2,
            "meal_name": "Leftovers",
            "recipe_ref": null
        })),
        row(json!({
            "id": 13,
            "date": "2025-01-20",
            "servings": 2,
            "recipe_id": null,
            "recipe_ref": {
                "id": 1,
                "servings": 1,
                "ingredients": [{"item": "flour", "amount": 2, "unit": "cup"}]
            }
        })),
    ];

    assert!(IngredientAggregationService::aggregate(&meals).is_empty());
}

#[test]
fn test_missing_and_null_units_stay_apart() {
    let recipe = RecipeSnapshot::new(
        4,
        1,
        IngredientList::Native(vec![
            json!({"item": "egg", "amount": 1}),
            json!({"item": "egg", "amount": 2, "unit": null}),
            json!({"item": "egg", "amount": 3}),
        ]),
    );
    let meals = vec![PlannedMeal::with_recipe(1, date("2025-01-20"), recipe, 1)];

    let lines = IngredientAggregationService::aggregate(&meals);

    let units: Vec<_> = lines.iter().map(|l| (l.unit.clone(), l.quantity)).collect();
    assert_eq!(units, vec![(Column::Absent, 4.0), (Column::Null, 2.0)]);
    assert_eq!(
        serde_json::to_value(&lines).unwrap(),
        json!([
            {"name": "egg", "quantity": 4.0},
            {"name": "egg", "unit": null, "quantity": 2.0}
        ])
    );
}

#[test]
fn test_custom_meal_next_to_recipe_is_ignored() {
    let meals = vec![
        PlannedMeal::custom(12, date("2025-01-20"), "Leftovers", 3),
        PlannedMeal::with_recipe(10, date("2025-01-21"), pancakes(), 4),
    ];

    let lines = IngredientAggregationService::aggregate(&meals);

    assert_eq!(lines, vec![line("egg", "", 2.0), line("flour", "cup", 2.0)]);
}

#[test]
fn test_zero_recipe_servings_counts_as_one() {
    let meals = vec![row(json!({
        "id": 13,
        "date": "2025-01-20",
        "servings": 2,
        "recipe_id": 5,
        "recipes": {
            "id": 5,
            "servings": 0,
            "ingredients": [{"item": "salt", "amount": 1, "unit": "tsp"}]
        }
    }))];

    let lines = IngredientAggregationService::aggregate(&meals);

    assert_eq!(lines, vec![line("salt", "tsp", 2.0)]);
}

#[test]
fn test_missing_or_invalid_servings_never_produce_nan() {
    let meals = vec![
        row(json!({
            "id": 1,
            "date": "2025-01-20",
            "recipe_id": 5,
            "recipes": {
                "id": 5,
                "servings": null,
                "ingredients": [{"item": "salt", "amount": 1, "unit": "tsp"}]
            }
        })),
        row(json!({
            "id": 2,
            "date": "2025-01-20",
            "servings": "a few",
            "recipe_id": 6,
            "recipes": {"id": 6, "ingredients": [{"item": "rice", "amount": "2", "unit": "cup"}]}
        })),
    ];

    let lines = IngredientAggregationService::aggregate(&meals);

    assert_eq!(lines, vec![line("rice", "cup", 2.0), line("salt", "tsp", 1.0)]);
    assert!(lines.iter().all(|l| l.quantity.is_finite()));
}

#[test]
fn test_encoded_ingredient_list_is_decoded() {
    let meals = vec![row(json!({
        "id": 14,
        "date": "2025-01-20",
        "servings": 1,
        "recipe_id": 7,
        "recipes": {
            "id": 7,
            "servings": 1,
            "ingredients": "[{\"item\":\"sugar\",\"amount\":1,\"unit\":\"cup\"}]"
        }
    }))];

    let lines = IngredientAggregationService::aggregate(&meals);

    assert_eq!(lines, vec![line("sugar", "cup", 1.0)]);
}

#[test]
fn test_malformed_ingredient_list_is_skipped() {
    let meals = vec![
        row(json!({
            "id": 15,
            "date": "2025-01-20",
            "servings": 1,
            "recipe_id": 8,
            "recipes": {"id": 8, "servings": 1, "ingredients": "not json"}
        })),
        row(json!({
            "id": 16,
            "date": "2025-01-20",
            "servings": 1,
            "recipe_id": 9,
            "recipes": {"id": 9, "servings": 1, "ingredients": "not valid data"}
        })),
        row(json!({
            "id": 17,
            "date": "2025-01-20",
            "servings": 1,
            "recipe_id": 10,
            "recipes": {"id": 10, "servings": 1}
        })),
        PlannedMeal::with_recipe(18, date("2025-01-21"), pancakes(), 4),
    ];

    let lines = IngredientAggregationService::aggregate(&meals);

    assert_eq!(lines, vec![line("egg", "", 2.0), line("flour", "cup", 2.0)]);
}

#[test]
fn test_nameless_ingredient_is_dropped() {
    let recipe = RecipeSnapshot::new(
        3,
        1,
        IngredientList::Native(vec![
            json!({"amount": 5, "unit": "g"}),
            json!({"item": "", "name": "", "amount": 1}),
            json!({"name": "yeast", "amount": 7, "unit": "g"}),
        ]),
    );
    let meals = vec![PlannedMeal::with_recipe(1, date("2025-01-20"), recipe, 1)];

    let lines = IngredientAggregationService::aggregate(&meals);

    assert_eq!(lines, vec![line("yeast", "g", 7.0)]);
}

#[test]
fn test_aggregation_is_idempotent() {
    let meals = vec![
        PlannedMeal::with_recipe(10, date("2025-01-20"), pancakes(), 3),
        PlannedMeal::with_recipe(11, date("2025-01-21"), pancakes(), 5),
    ];

    let first = IngredientAggregationService::aggregate(&meals);
    let second = IngredientAggregationService::aggregate(&meals);

    assert_eq!(first, second);
}

#[test]
fn test_input_order_does_not_matter() {
    let soup = RecipeSnapshot::new(
        2,
        2,
        IngredientList::Native(vec![
            json!({"item": "Egg", "amount": 1, "unit": ""}),
            json!({"item": "stock", "amount": 1, "unit": "l"}),
        ]),
    );
    let meals = vec![
        PlannedMeal::with_recipe(10, date("2025-01-20"), pancakes(), 2),
        PlannedMeal::with_recipe(11, date("2025-01-21"), soup, 3),
        PlannedMeal::custom(12, date("2025-01-22"), "Takeout", 2),
        PlannedMeal::with_recipe(13, date("2025-01-23"), pancakes(), 6),
    ];

    let forward = IngredientAggregationService::aggregate(&meals);

    let mut reversed_meals = meals.clone();
    reversed_meals.reverse();
    let reversed = IngredientAggregationService::aggregate(&reversed_meals);

    let summary = |lines: &[ShoppingListLine]| {
        lines
            .iter()
            .map(|l| (l.name.to_lowercase(), l.unit.clone(), l.quantity))
            .collect::<Vec<_>>()
    };

    assert_eq!(summary(&forward), summary(&reversed));
    assert_eq!(
        summary(&forward),
        vec![
            ("egg".to_string(), Column::Value(String::new()), 5.5),
            ("flour".to_string(), Column::Value("cup".to_string()), 4.0),
            ("stock".to_string(), Column::Value("l".to_string()), 1.5),
        ]
    );
}
