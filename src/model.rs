use serde::{Deserialize, Serialize};

/// Placeholder used when the model response carries no title.
pub const DEFAULT_TITLE: &str = "Your Custom Recipe";

/// One ingredient line of a generated recipe.
///
/// Only `name` matters for shopping-list matching; `quantity`, `unit` and
/// `note` are opaque strings passed through to the caller unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl RecipeIngredient {
    pub fn named(name: impl Into<String>) -> Self {
        RecipeIngredient {
            name: name.into(),
            quantity: None,
            unit: None,
            note: None,
        }
    }
}

/// Optional per-serving nutrition estimate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_grams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_grams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates_grams: Option<f64>,
}

/// A structured recipe as produced by the generation service.
///
/// Missing `title`, `ingredients` and `steps` are filled with defaults during
/// deserialization; all other fields stay optional. Unknown fields in the
/// model output are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for Recipe {
    fn default() -> Self {
        Recipe {
            title: default_title(),
            summary: None,
            servings: None,
            estimated_time_minutes: None,
            cuisine: None,
            ingredients: Vec::new(),
            steps: Vec::new(),
            nutrition: None,
            tips: Vec::new(),
        }
    }
}

/// User preferences driving one generation request.
///
/// `available_ingredients` is the raw pantry text as typed by the user;
/// it is parsed and normalized once per request by the pipeline.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub query: String,
    pub available_ingredients: String,
    pub servings: String,
    pub cuisine: String,
    pub time_preference: String,
}
