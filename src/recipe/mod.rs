pub mod literal;

use serde::{Deserialize, Serialize};

use crate::error::{RecordField, RecordMaterializationError};

/// Number of stored nutrition values per recipe
pub const NUTRITION_LEN: usize = 7;

/// Nutrition values of a recipe (% of daily value).
/// Positions are fixed by the source table:
/// 0 calories, 1 total fat, 2 sugar, 3 sodium, 4 protein, 5 saturated fat, 6 carbohydrates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrition(pub [f64; NUTRITION_LEN]);

impl Nutrition {
    #[inline]
    pub fn calories(&self) -> f64 {
        self.0[0]
    }

    /// stored but not displayed
    #[inline]
    pub fn total_fat(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub fn sugar(&self) -> f64 {
        self.0[2]
    }

    #[inline]
    pub fn sodium(&self) -> f64 {
        self.0[3]
    }

    #[inline]
    pub fn protein(&self) -> f64 {
        self.0[4]
    }

    #[inline]
    pub fn saturated_fat(&self) -> f64 {
        self.0[5]
    }

    #[inline]
    pub fn carbohydrates(&self) -> f64 {
        self.0[6]
    }

    /// `(label, value, unit)` rows in display order
    pub fn displayed(&self) -> [(&'static str, f64, &'static str); 6] {
        [
            ("Calories", self.calories(), ""),
            ("Sugar", self.sugar(), "g"),
            ("Sodium", self.sodium(), "mg"),
            ("Protein", self.protein(), "g"),
            ("Saturated Fat", self.saturated_fat(), "g"),
            ("Carbohydrates", self.carbohydrates(), "g"),
        ]
    }

    /// Display rows rendered as `Label: value unit`, value to two decimals
    pub fn display_lines(&self) -> Vec<String> {
        self.displayed()
            .iter()
            .map(|(label, value, unit)| {
                format!("{}: {:.2} {}", label, value, unit)
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    /// Validate a stored value list
    pub fn from_values(values: &[f64]) -> Result<Self, RecordMaterializationError> {
        let arr: [f64; NUTRITION_LEN] = values.try_into().map_err(|_| {
            RecordMaterializationError::NutritionArity {
                expected: NUTRITION_LEN,
                actual: values.len(),
            }
        })?;
        if let Some(position) = arr.iter().position(|v| !v.is_finite()) {
            return Err(RecordMaterializationError::NonFiniteNutrition { position });
        }
        Ok(Nutrition(arr))
    }
}

/// A stored field that is either already structured
/// or kept as its serialized list literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredField<T> {
    Parsed(T),
    Literal(String),
}

/// One row of the recipe table as it arrives from storage.
/// Nothing in here is trusted until `validate` succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecipe {
    pub name: String,
    pub ingredients: StoredField<Vec<String>>,
    /// original serialized ingredient list, used when `ingredients` is unusable
    #[serde(default)]
    pub ingredients_raw: Option<String>,
    pub steps: StoredField<Vec<String>>,
    pub nutrition: StoredField<Vec<f64>>,
}

/// Validated recipe, immutable once the corpus is loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub name: String,
    /// canonical ingredient tokens, never empty
    pub ingredients: Vec<String>,
    pub ingredients_raw: Option<String>,
    pub steps: Vec<String>,
    pub nutrition: Nutrition,
}

impl RecipeRecord {
    /// Whitespace-joined ingredient text, the document the corpus vectors were built from
    pub fn ingredient_text(&self) -> String {
        self.ingredients.join(" ")
    }
}

fn parse_strings(
    field: &StoredField<Vec<String>>,
    name: RecordField,
) -> Result<Vec<String>, RecordMaterializationError> {
    match field {
        StoredField::Parsed(list) => Ok(list.clone()),
        StoredField::Literal(text) => literal::parse_string_list(text)
            .map_err(|reason| RecordMaterializationError::MalformedLiteral { field: name, reason }),
    }
}

impl RawRecipe {
    /// Turn a stored row into a typed record.
    /// `ingredients` falls back to `ingredients_raw` when it is malformed or empty.
    pub fn validate(&self) -> Result<RecipeRecord, RecordMaterializationError> {
        let ingredients = match parse_strings(&self.ingredients, RecordField::Ingredients) {
            Ok(list) if !list.is_empty() => list,
            canonical => {
                let fallback = self.ingredients_raw.as_deref().map(|raw| {
                    literal::parse_string_list(raw).map_err(|reason| {
                        RecordMaterializationError::MalformedLiteral {
                            field: RecordField::IngredientsRaw,
                            reason,
                        }
                    })
                });
                match (canonical, fallback) {
                    (_, Some(Ok(list))) if !list.is_empty() => list,
                    (Err(e), _) => return Err(e),
                    _ => return Err(RecordMaterializationError::EmptyIngredients),
                }
            }
        };

        let steps = parse_strings(&self.steps, RecordField::Steps)?;

        let nutrition_values = match &self.nutrition {
            StoredField::Parsed(values) => values.clone(),
            StoredField::Literal(text) => literal::parse_number_list(text).map_err(|reason| {
                RecordMaterializationError::MalformedLiteral {
                    field: RecordField::Nutrition,
                    reason,
                }
            })?,
        };
        let nutrition = Nutrition::from_values(&nutrition_values)?;

        Ok(RecipeRecord {
            name: self.name.clone(),
            ingredients,
            ingredients_raw: self.ingredients_raw.clone(),
            steps,
            nutrition,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(ingredients: &str, raw: Option<&str>) -> RawRecipe {
        RawRecipe {
            name: "pancakes".to_string(),
            ingredients: StoredField::Literal(ingredients.to_string()),
            ingredients_raw: raw.map(str::to_string),
            steps: StoredField::Literal("['mix', 'fry']".to_string()),
            nutrition: StoredField::Literal("[200.0, 10.0, 5.0, 3.0, 8.0, 2.0, 30.0]".to_string()),
        }
    }

    #[test]
    fn validates_literal_fields() {
        let record = raw("['egg', 'flour', 'milk']", None).validate().unwrap();
        assert_eq!(record.ingredients, vec!["egg", "flour", "milk"]);
        assert_eq!(record.steps, vec!["mix", "fry"]);
        assert_eq!(record.nutrition.calories(), 200.0);
        assert_eq!(record.nutrition.sodium(), 3.0);
        assert_eq!(record.nutrition.carbohydrates(), 30.0);
        assert_eq!(record.ingredient_text(), "egg flour milk");
    }

    #[test]
    fn nutrition_lines_use_two_decimals_and_spaced_units() {
        let nutrition = Nutrition([212.456, 10.0, 5.0, 3.126, 8.0, 2.0, 30.0]);
        assert_eq!(
            nutrition.display_lines(),
            vec![
                "Calories: 212.46",
                "Sugar: 5.00 g",
                "Sodium: 3.13 mg",
                "Protein: 8.00 g",
                "Saturated Fat: 2.00 g",
                "Carbohydrates: 30.00 g",
            ]
        );
    }

    #[test]
    fn falls_back_to_raw_ingredients() {
        let record = raw("not a list", Some("['egg', 'flour']")).validate().unwrap();
        assert_eq!(record.ingredients, vec!["egg", "flour"]);

        let record = raw("[]", Some("['egg']")).validate().unwrap();
        assert_eq!(record.ingredients, vec!["egg"]);
    }

    #[test]
    fn reports_canonical_error_when_fallback_fails() {
        let err = raw("not a list", Some("also not")).validate().unwrap_err();
        assert!(matches!(
            err,
            RecordMaterializationError::MalformedLiteral { field: RecordField::Ingredients, .. }
        ));
        assert_eq!(
            raw("[]", None).validate().unwrap_err(),
            RecordMaterializationError::EmptyIngredients
        );
    }

    #[test]
    fn nutrition_must_have_seven_finite_values() {
        let mut bad = raw("['egg']", None);
        bad.nutrition = StoredField::Parsed(vec![1.0, 2.0]);
        assert_eq!(
            bad.validate().unwrap_err(),
            RecordMaterializationError::NutritionArity { expected: 7, actual: 2 }
        );

        bad.nutrition = StoredField::Parsed(vec![1.0, 2.0, 3.0, f64::INFINITY, 5.0, 6.0, 7.0]);
        assert_eq!(
            bad.validate().unwrap_err(),
            RecordMaterializationError::NonFiniteNutrition { position: 3 }
        );
    }

    #[test]
    fn stored_field_accepts_list_or_string() {
        let json = r#"{
            "name": "toast",
            "ingredients": ["bread", "butter"],
            "steps": "['toast the bread']",
            "nutrition": [1, 2, 3, 4, 5, 6, 7]
        }"#;
        let row: RawRecipe = serde_json::from_str(json).unwrap();
        let record = row.validate().unwrap();
        assert_eq!(record.ingredients, vec!["bread", "butter"]);
        assert_eq!(record.steps, vec!["toast the bread"]);
        assert_eq!(record.nutrition.protein(), 5.0);
    }
}
