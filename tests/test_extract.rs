use recipe_genie::{extract_json, parse_recipe, GenieError, Recipe, RecipeIngredient};

#[test]
fn test_round_trip_through_every_wrapping() {
    let recipe = Recipe {
        title: "Midnight Ramen".to_string(),
        ingredients: vec![RecipeIngredient::named("noodles")],
        steps: vec!["Boil.".to_string(), "Slurp.".to_string()],
        ..Default::default()
    };
    let serialized = serde_json::to_string(&recipe).unwrap();

    for wrapped in [
        serialized.clone(),
        format!("```json\n{}\n```", serialized),
        format!("```\n{}\n```", serialized),
        format!("Of course! Here you go: {} Enjoy!", serialized),
    ] {
        let parsed = parse_recipe(&wrapped).unwrap();
        assert_eq!(parsed, recipe, "failed for wrapping {:?}", wrapped);
    }
}

#[test]
fn test_no_json_fails_with_parse_error() {
    let err = extract_json("no json here").unwrap_err();
    assert!(matches!(err, GenieError::ParseError(_)));
    assert!(err.to_string().starts_with("Failed to parse recipe"));
}

#[test]
fn test_unbalanced_braces_fail() {
    assert!(extract_json("{\"title\": \"broken\"").is_err());
    assert!(extract_json("only a closing } here").is_err());
}

#[test]
fn test_extractor_does_not_repair_json() {
    // Trailing commas and unquoted keys stay errors
    assert!(extract_json("{\"a\": 1,}").is_err());
    assert!(extract_json("{a: 1}").is_err());
}
