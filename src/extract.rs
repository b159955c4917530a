use log::debug;
use serde_json::Value;

use crate::error::GenieError;
use crate::model::Recipe;

/// Extract the JSON object embedded in a model response.
///
/// Tolerates three shapes of response: bare JSON, JSON wrapped in a fenced
/// code block (with an optional language tag), and JSON surrounded by prose.
/// Anything outside the first `{` .. last `}` span is discarded. Malformed
/// JSON is not repaired; it surfaces as [`GenieError::ParseError`].
pub fn extract_json(text: &str) -> Result<Value, GenieError> {
    let trimmed = text.trim();
    let body = strip_code_fence(trimmed).unwrap_or(trimmed);

    let span = match (body.find('{'), body.rfind('}')) {
        (Some(start), Some(end)) if end > start => &body[start..=end],
        _ => body,
    };

    serde_json::from_str(span).map_err(|e| {
        debug!("unparsable model response: {}", text);
        GenieError::ParseError(e.to_string())
    })
}

/// Extract and deserialize a [`Recipe`] from a model response, filling in
/// defaults for missing `title`, `ingredients` and `steps`.
pub fn parse_recipe(text: &str) -> Result<Recipe, GenieError> {
    let value = extract_json(text)?;
    serde_json::from_value(value).map_err(|e| GenieError::ParseError(e.to_string()))
}

/// Strip a code fence that wraps the entire response, returning the body.
fn strip_code_fence(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("```")?;
    let rest = rest.strip_suffix("```")?;

    // The opening fence line may carry a language tag ("json", "JSON5", ...)
    match rest.split_once('\n') {
        Some((tag, body)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
            Some(body.trim())
        }
        _ => Some(rest.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_bare_json() {
        let value = extract_json(r#"{"title": "Soup"}"#).unwrap();
        assert_eq!(value["title"], "Soup");
    }

    #[test]
    fn test_extract_fenced_json() {
        let value = extract_json("```json\n{\"title\": \"Soup\"}\n```").unwrap();
        assert_eq!(value["title"], "Soup");
    }

    #[test]
    fn test_extract_fenced_without_language_tag() {
        let value = extract_json("```\n{\"title\": \"Soup\"}\n```").unwrap();
        assert_eq!(value["title"], "Soup");
    }

    #[test]
    fn test_extract_json_surrounded_by_prose() {
        let text = "Here is your recipe! {\"title\": \"Soup\"} Enjoy cooking.";
        let value = extract_json(text).unwrap();
        assert_eq!(value["title"], "Soup");
    }

    #[test]
    fn test_extract_nested_braces_use_outermost_span() {
        let text = "intro {\"a\": {\"b\": 1}} outro";
        let value = extract_json(text).unwrap();
        assert_eq!(value["a"]["b"], 1);
    }

    #[test]
    fn test_extract_no_json_fails() {
        let err = extract_json("no json here").unwrap_err();
        assert!(matches!(err, GenieError::ParseError(_)));
    }

    #[test]
    fn test_extract_malformed_json_is_not_repaired() {
        let err = extract_json(r#"{"title": "Soup",}"#).unwrap_err();
        assert!(matches!(err, GenieError::ParseError(_)));
    }

    #[test]
    fn test_extract_round_trip() {
        let original = json!({
            "title": "Pasta",
            "ingredients": [{"name": "pasta"}],
            "steps": ["Cook."]
        });
        let serialized = serde_json::to_string(&original).unwrap();

        assert_eq!(extract_json(&serialized).unwrap(), original);
        assert_eq!(
            extract_json(&format!("```json\n{}\n```", serialized)).unwrap(),
            original
        );
        assert_eq!(
            extract_json(&format!("prose {} more prose", serialized)).unwrap(),
            original
        );
    }

    #[test]
    fn test_parse_recipe_fills_defaults() {
        let recipe = parse_recipe(r#"{"summary": "minimal"}"#).unwrap();
        assert_eq!(recipe.title, crate::model::DEFAULT_TITLE);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
        assert_eq!(recipe.summary.as_deref(), Some("minimal"));
    }

    #[test]
    fn test_parse_recipe_reads_ingredients() {
        let recipe = parse_recipe(
            r#"{"title": "Salad", "ingredients": [{"name": "lettuce", "quantity": "1"}], "steps": ["Toss."]}"#,
        )
        .unwrap();
        assert_eq!(recipe.ingredients[0].name, "lettuce");
        assert_eq!(recipe.ingredients[0].quantity.as_deref(), Some("1"));
    }
}
