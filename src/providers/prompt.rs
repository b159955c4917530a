use serde_json::Value;

use crate::model::GenerationRequest;

/// The system instruction sent with every generation request.
///
/// Loaded from `prompt.txt` at compile time using the `include_str!` macro,
/// making it easy to edit without dealing with Rust string syntax.
pub const RECIPE_SYSTEM_PROMPT: &str = include_str!("prompt.txt");

/// The JSON schema the model is asked to follow, embedded from `schema.json`.
pub const RECIPE_JSON_SCHEMA: &str = include_str!("schema.json");

/// Parse the embedded recipe schema into a JSON value.
pub fn recipe_schema() -> Value {
    serde_json::from_str(RECIPE_JSON_SCHEMA).expect("embedded schema.json is valid JSON")
}

/// Assemble the user prompt for one generation request.
///
/// `available` is the already-normalized pantry list; it is inlined so the
/// model prefers ingredients the user has on hand.
pub fn build_prompt(request: &GenerationRequest, available: &[String]) -> String {
    let mut parts = vec![
        "Generate one excellent cooking recipe as JSON.".to_string(),
        "Follow this JSON schema strictly:".to_string(),
        RECIPE_JSON_SCHEMA.trim().to_string(),
        "Constraints:".to_string(),
        "- Keep ingredient names simple and common (no brand names).".to_string(),
        "- Provide clear step-by-step instructions.".to_string(),
        "- Use metric or common US units appropriately.".to_string(),
        "- Keep the title short, around 4-5 words.".to_string(),
    ];

    if !request.query.is_empty() {
        parts.push(format!("User request: {}", request.query));
    }
    if !available.is_empty() {
        parts.push(format!(
            "These ingredients are available at home; prefer using them where reasonable: {}",
            available.join(", ")
        ));
    }
    if !request.servings.is_empty() {
        parts.push(format!("Target servings: {}", request.servings));
    }
    if !request.cuisine.is_empty() {
        parts.push(format!("Preferred cuisine: {}", request.cuisine));
    }
    if !request.time_preference.is_empty() {
        parts.push(format!("Time preference: {}", request.time_preference));
    }
    parts.push("Return ONLY JSON. No markdown, no code fences, no commentary.".to_string());

    parts.join("\n")
}
