use crate::config::AiConfig;
use crate::model::GenerationRequest;
use crate::providers::{FallbackProvider, ProviderFactory};
use crate::{generate_recipe_with_provider, GenerationOutcome, GenieError};

/// Which LLM provider to use for generation
#[derive(Debug, Clone, Copy)]
pub enum ProviderKind {
    Google,
    OpenAI,
    Anthropic,
}

impl ProviderKind {
    /// Convert to provider name string used by the factory
    fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
        }
    }
}

/// Builder for configuring and executing a recipe generation
#[derive(Debug, Default)]
pub struct RecipeGeneratorBuilder {
    query: Option<String>,
    available: Option<String>,
    servings: Option<String>,
    cuisine: Option<String>,
    time_preference: Option<String>,
    provider: Option<ProviderKind>,
    api_key: Option<String>,
    model: Option<String>,
}

impl RecipeGeneratorBuilder {
    /// Describe the dish the user wants
    ///
    /// # Example
    /// ```
    /// use recipe_genie::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .query("a cozy weeknight pasta");
    /// ```
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Raw pantry text, split on commas and newlines
    ///
    /// # Example
    /// ```
    /// use recipe_genie::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .available("tomatoes, onions\ngarlic cloves");
    /// ```
    pub fn available(mut self, available: impl Into<String>) -> Self {
        self.available = Some(available.into());
        self
    }

    /// Target number of servings, passed through as free text
    pub fn servings(mut self, servings: impl Into<String>) -> Self {
        self.servings = Some(servings.into());
        self
    }

    /// Preferred cuisine, passed through as free text
    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Time preference, passed through as free text (e.g. "under 30 minutes")
    pub fn time_preference(mut self, time_preference: impl Into<String>) -> Self {
        self.time_preference = Some(time_preference.into());
        self
    }

    /// Pick a specific LLM provider instead of the configured default
    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the API key for the provider directly, bypassing config files and
    /// environment variables
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Build and execute the generation
    ///
    /// # Errors
    /// Returns `GenieError` if:
    /// - Neither a query nor available ingredients were provided
    /// - The provider cannot be constructed (missing API key)
    /// - The generation call fails
    /// - The response contains no parsable recipe
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_genie::RecipeGenerator;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let outcome = RecipeGenerator::builder()
    ///     .query("quick tomato soup")
    ///     .available("tomatoes, onions, garlic")
    ///     .build()
    ///     .await?;
    /// println!("buy: {} items", outcome.shopping_list.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<GenerationOutcome, GenieError> {
        let request = GenerationRequest {
            query: self.query.unwrap_or_default(),
            available_ingredients: self.available.unwrap_or_default(),
            servings: self.servings.unwrap_or_default(),
            cuisine: self.cuisine.unwrap_or_default(),
            time_preference: self.time_preference.unwrap_or_default(),
        };

        if request.query.trim().is_empty() && request.available_ingredients.trim().is_empty() {
            return Err(GenieError::Builder(
                "Nothing to generate from. Use .query() or .available()".to_string(),
            ));
        }

        // Ad-hoc credentials bypass the config file entirely
        if self.api_key.is_some() || self.model.is_some() {
            let name = self
                .provider
                .unwrap_or(ProviderKind::Google)
                .as_str();
            let provider = ProviderFactory::create_with_options(name, self.api_key, self.model)
                .map_err(|e| GenieError::Generation(e.to_string()))?;
            return generate_recipe_with_provider(&request, provider.as_ref()).await;
        }

        let config = AiConfig::load()?;
        match self.provider {
            Some(kind) => {
                let provider_config = config.providers.get(kind.as_str()).ok_or_else(|| {
                    GenieError::Builder(format!(
                        "Provider '{}' not found in configuration",
                        kind.as_str()
                    ))
                })?;
                let provider = ProviderFactory::create(kind.as_str(), provider_config, config.timeout)
                    .map_err(|e| GenieError::Generation(e.to_string()))?;
                generate_recipe_with_provider(&request, provider.as_ref()).await
            }
            None if config.fallback.enabled => {
                let provider = FallbackProvider::new(&config)
                    .map_err(|e| GenieError::Generation(e.to_string()))?;
                generate_recipe_with_provider(&request, &provider).await
            }
            None => {
                let provider = ProviderFactory::get_default_provider(&config)
                    .map_err(|e| GenieError::Generation(e.to_string()))?;
                generate_recipe_with_provider(&request, provider.as_ref()).await
            }
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeGenerator;

impl RecipeGenerator {
    /// Creates a new builder for generating recipes
    ///
    /// # Example
    /// ```
    /// use recipe_genie::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder();
    /// ```
    pub fn builder() -> RecipeGeneratorBuilder {
        RecipeGeneratorBuilder::default()
    }
}
