//! Generate a recipe from free-form preferences and diff its ingredient list
//! against what the user already has at home.
//!
//! The crate has three pure cores: [`ingredients::normalize`] canonicalizes
//! ingredient names, [`ingredients::reconcile`] partitions a recipe's
//! ingredients into a shopping list and a have list, and
//! [`extract::extract_json`] recovers the JSON object from a model response
//! that may be fenced or wrapped in prose. Everything around them is plumbing
//! to the LLM providers.

pub mod builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod ingredients;
pub mod model;
pub mod providers;

use log::{debug, info};

pub use builder::{ProviderKind, RecipeGenerator, RecipeGeneratorBuilder};
pub use config::AiConfig;
pub use error::GenieError;
pub use extract::{extract_json, parse_recipe};
pub use ingredients::{normalize, parse_available, reconcile, ReconciliationResult};
pub use model::{GenerationRequest, Nutrition, Recipe, RecipeIngredient};

use crate::providers::{build_prompt, FallbackProvider, LlmProvider, ProviderFactory};

/// Everything the caller needs to render one generation result.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub recipe: Recipe,
    /// Recipe ingredients the user still needs to buy
    pub shopping_list: Vec<RecipeIngredient>,
    /// Recipe ingredients already on hand
    pub have_list: Vec<RecipeIngredient>,
    /// Normalized pantry names parsed from the request
    pub available: Vec<String>,
}

/// Generate a recipe using the configured default provider (or the fallback
/// chain when enabled) and reconcile it against the user's pantry.
pub async fn generate_recipe(request: &GenerationRequest) -> Result<GenerationOutcome, GenieError> {
    let config = AiConfig::load()?;

    if config.fallback.enabled {
        let provider =
            FallbackProvider::new(&config).map_err(|e| GenieError::Generation(e.to_string()))?;
        generate_recipe_with_provider(request, &provider).await
    } else {
        let provider = ProviderFactory::get_default_provider(&config)
            .map_err(|e| GenieError::Generation(e.to_string()))?;
        generate_recipe_with_provider(request, provider.as_ref()).await
    }
}

/// Generate a recipe with an explicitly injected provider.
///
/// The provider is threaded through as a parameter rather than configured as
/// process-global state, so tests and embedders can supply their own.
pub async fn generate_recipe_with_provider(
    request: &GenerationRequest,
    provider: &dyn LlmProvider,
) -> Result<GenerationOutcome, GenieError> {
    let available = parse_available(&request.available_ingredients);
    let prompt = build_prompt(request, &available);
    debug!("prompt for {}: {}", provider.provider_name(), prompt);

    let text = provider
        .generate(&prompt)
        .await
        .map_err(|e| GenieError::Generation(e.to_string()))?;

    let recipe = parse_recipe(&text)?;
    info!(
        "generated \"{}\" with {} ingredients",
        recipe.title,
        recipe.ingredients.len()
    );

    let ReconciliationResult {
        shopping_list,
        have_list,
    } = reconcile(&recipe.ingredients, &available);

    Ok(GenerationOutcome {
        recipe,
        shopping_list,
        have_list,
        available,
    })
}
