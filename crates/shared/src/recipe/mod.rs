use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Column, LooseNumber, RecordId, coerce, truthy};

/// Canonical ingredient every downstream computation works on.
///
/// Stored ingredient records are free-form JSON (`item` or `name`,
/// `amount` or `quantity`). [`Ingredient::from_record`] is the single place
/// those aliases are resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    /// A missing unit, a `null` unit and `""` are three different units.
    pub unit: Column<String>,
}

impl Ingredient {
    /// `unit: None` builds an ingredient whose record has no unit key.
    pub fn new(name: impl Into<String>, amount: f64, unit: Option<&str>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.map_or(Column::Absent, |unit| Column::Value(unit.to_owned())),
        }
    }

    /// Normalize a stored ingredient record. Records without a usable name are dropped.
    pub fn from_record(record: &Value) -> Option<Self> {
        let name =
            non_empty_str(record.get("item")).or_else(|| non_empty_str(record.get("name")))?;

        let amount = truthy(record.get("amount").map_or(f64::NAN, coerce))
            .or_else(|| truthy(record.get("quantity").map_or(f64::NAN, coerce)))
            .unwrap_or(0.0);

        let unit = match record.get("unit") {
            None => Column::Absent,
            Some(Value::Null) => Column::Null,
            Some(Value::String(unit)) => Column::Value(unit.to_owned()),
            Some(other) => Column::Value(other.to_string()),
        };

        Some(Self {
            name: name.to_owned(),
            amount,
            unit,
        })
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Ingredient column of a recipe row: a JSON array, or the same array
/// encoded as text. Anything else is kept verbatim and reads as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientList {
    Native(Vec<Value>),
    Encoded(String),
    Other(Value),
}

impl Default for IngredientList {
    fn default() -> Self {
        IngredientList::Native(Vec::new())
    }
}

impl IngredientList {
    /// Decode into canonical ingredients. Undecodable data yields an empty list.
    pub fn decode(&self) -> Vec<Ingredient> {
        match self {
            IngredientList::Native(records) => {
                records.iter().filter_map(Ingredient::from_record).collect()
            }
            IngredientList::Encoded(text) => match serde_json::from_str::<Vec<Value>>(text) {
                Ok(records) => records.iter().filter_map(Ingredient::from_record).collect(),
                Err(err) => {
                    tracing::debug!(error = %err, "ingredient list is not a JSON array, ignoring");
                    Vec::new()
                }
            },
            IngredientList::Other(value) => {
                tracing::debug!(kind = value_kind(value), "unsupported ingredient list, ignoring");
                Vec::new()
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Recipe as embedded in a planned meal row, or as listed in the recipe store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSnapshot {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Column::is_absent")]
    pub title: Column<String>,
    #[serde(default, skip_serializing_if = "Column::is_absent")]
    pub servings: Column<LooseNumber>,
    #[serde(default, skip_serializing_if = "Column::is_absent")]
    pub ingredients: Column<IngredientList>,
    /// Columns this crate does not interpret (image, author, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RecipeSnapshot {
    pub fn new(
        id: impl Into<RecordId>,
        servings: impl Into<LooseNumber>,
        ingredients: IngredientList,
    ) -> Self {
        Self {
            id: id.into(),
            title: Column::Absent,
            servings: Column::Value(servings.into()),
            ingredients: Column::Value(ingredients),
            extra: Map::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Column::Value(title.into());
        self
    }

    /// Stored serving count when it is a usable non-zero number.
    pub fn native_servings(&self) -> Option<f64> {
        self.servings.value().and_then(|servings| truthy(servings.as_number()))
    }

    /// Native serving count, `1` when missing, zero or not a number.
    pub fn effective_servings(&self) -> f64 {
        self.native_servings().unwrap_or(1.0)
    }

    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.ingredients
            .value()
            .map(IngredientList::decode)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_record_prefers_item_and_amount() {
        let ing = Ingredient::from_record(&json!({
            "item": "Flour",
            "name": "x",
            "amount": 2,
            "quantity": 9,
            "unit": "cup"
        }))
        .unwrap();
        assert_eq!(ing, Ingredient::new("Flour", 2.0, Some("cup")));
    }

    #[test]
    fn test_from_record_falls_back_to_name_and_quantity() {
        let ing =
            Ingredient::from_record(&json!({"item": "", "name": "egg", "quantity": "3"})).unwrap();
        assert_eq!(ing, Ingredient::new("egg", 3.0, None));
    }

    #[test]
    fn test_from_record_zero_amount_uses_quantity() {
        let ing = Ingredient::from_record(
            &json!({"item": "salt", "amount": 0, "quantity": 1, "unit": "tsp"}),
        )
        .unwrap();
        assert_eq!(ing.amount, 1.0);
    }

    #[test]
    fn test_from_record_defaults() {
        let ing =
            Ingredient::from_record(&json!({"item": "pepper", "amount": "a pinch", "unit": ""}))
                .unwrap();
        assert_eq!(ing, Ingredient::new("pepper", 0.0, Some("")));

        let ing =
            Ingredient::from_record(&json!({"item": "milk", "amount": 1, "unit": 250})).unwrap();
        assert_eq!(ing.unit.as_deref(), Some("250"));
    }

    #[test]
    fn test_from_record_missing_and_null_unit_differ() {
        let missing = Ingredient::from_record(&json!({"item": "egg", "amount": 1})).unwrap();
        let null =
            Ingredient::from_record(&json!({"item": "egg", "amount": 1, "unit": null})).unwrap();

        assert_eq!(missing.unit, Column::Absent);
        assert_eq!(null.unit, Column::Null);
        assert_ne!(missing, null);
    }

    #[test]
    fn test_from_record_without_name() {
        assert!(Ingredient::from_record(&json!({"amount": 2, "unit": "cup"})).is_none());
        assert!(Ingredient::from_record(&json!({"item": 12, "amount": 2})).is_none());
        assert!(Ingredient::from_record(&json!("flour")).is_none());
    }

    #[test]
    fn test_decode_encoded_list() {
        let list =
            IngredientList::Encoded(r#"[{"item":"sugar","amount":1,"unit":"cup"}]"#.to_owned());
        assert_eq!(list.decode(), vec![Ingredient::new("sugar", 1.0, Some("cup"))]);
    }

    #[test]
    fn test_decode_garbage_is_empty() {
        assert!(IngredientList::Encoded("not json".to_owned()).decode().is_empty());
        assert!(IngredientList::Encoded(r#"{"item":"sugar"}"#.to_owned()).decode().is_empty());
        assert!(IngredientList::Other(json!(42)).decode().is_empty());
    }

    #[test]
    fn test_ingredient_list_shapes() {
        let native: IngredientList = serde_json::from_value(json!([{"item": "egg"}])).unwrap();
        assert!(matches!(native, IngredientList::Native(_)));

        let encoded: IngredientList = serde_json::from_value(json!("[]")).unwrap();
        assert!(matches!(encoded, IngredientList::Encoded(_)));

        let other: IngredientList = serde_json::from_value(json!({"item": "egg"})).unwrap();
        assert!(matches!(other, IngredientList::Other(_)));
    }

    #[test]
    fn test_recipe_effective_servings() {
        let recipe: RecipeSnapshot =
            serde_json::from_value(json!({"id": 1, "servings": 0})).unwrap();
        assert_eq!(recipe.effective_servings(), 1.0);
        assert!(recipe.ingredients().is_empty());

        let recipe: RecipeSnapshot = serde_json::from_value(json!({
            "id": "abc",
            "servings": "4",
            "image": "x.png"
        }))
        .unwrap();
        assert_eq!(recipe.effective_servings(), 4.0);
        assert_eq!(recipe.extra.get("image"), Some(&json!("x.png")));
    }

    #[test]
    fn test_recipe_keeps_null_and_missing_columns() {
        let row = json!({"id": 3, "title": null, "ingredients": null});

        let recipe: RecipeSnapshot = serde_json::from_value(row.clone()).unwrap();

        assert!(recipe.servings.is_absent());
        assert!(recipe.ingredients().is_empty());
        assert_eq!(serde_json::to_value(&recipe).unwrap(), row);
    }
}
