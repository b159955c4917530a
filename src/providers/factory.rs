use crate::config::{AiConfig, ProviderConfig};
use crate::providers::{AnthropicProvider, GoogleProvider, LlmProvider, OpenAIProvider};
use std::error::Error;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration.
    /// `timeout` is the whole-request timeout in seconds, applied to the
    /// provider's HTTP client.
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        timeout: u64,
    ) -> Result<Box<dyn LlmProvider>, Box<dyn Error>> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )
            .into());
        }

        match provider_name {
            "google" => Ok(Box::new(GoogleProvider::new(config, timeout)?)),
            "openai" => Ok(Box::new(OpenAIProvider::new(config, timeout)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config, timeout)?)),
            _ => Err(format!("Unknown provider: {}", provider_name).into()),
        }
    }

    /// Get the default provider from configuration
    pub fn get_default_provider(config: &AiConfig) -> Result<Box<dyn LlmProvider>, Box<dyn Error>> {
        let provider_name = &config.default_provider;
        let provider_config = config.providers.get(provider_name).ok_or_else(|| {
            format!(
                "Default provider '{}' not found in configuration",
                provider_name
            )
        })?;

        Self::create(provider_name, provider_config, config.timeout)
    }

    /// Create a provider from ad-hoc options, bypassing the config file.
    ///
    /// Used by the builder API when an API key or model is passed directly;
    /// missing pieces fall back to provider defaults and environment
    /// variables.
    pub fn create_with_options(
        provider_name: &str,
        api_key: Option<String>,
        model: Option<String>,
    ) -> Result<Box<dyn LlmProvider>, Box<dyn Error>> {
        let default_model = match provider_name {
            "google" => "gemini-1.5-flash",
            "openai" => "gpt-4o-mini",
            "anthropic" => "claude-3-5-haiku-latest",
            _ => return Err(format!("Unknown provider: {}", provider_name).into()),
        };

        let mut config = ProviderConfig::with_model(model.unwrap_or_else(|| default_model.into()));
        config.api_key = api_key;
        Self::create(provider_name, &config, AiConfig::default().timeout)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["google", "openai", "anthropic"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn create_test_provider_config() -> ProviderConfig {
        let mut config = ProviderConfig::with_model("test-model");
        config.api_key = Some("test-key".to_string());
        config
    }

    #[test]
    fn test_create_google_provider() {
        let config = create_test_provider_config();
        let provider = ProviderFactory::create("google", &config, 30).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_create_openai_provider() {
        let config = create_test_provider_config();
        let provider = ProviderFactory::create("openai", &config, 30).unwrap();
        assert_eq!(provider.provider_name(), "openai");
    }

    #[test]
    fn test_create_anthropic_provider() {
        let config = create_test_provider_config();
        let provider = ProviderFactory::create("anthropic", &config, 30).unwrap();
        assert_eq!(provider.provider_name(), "anthropic");
    }

    #[test]
    fn test_create_unknown_provider() {
        let config = create_test_provider_config();
        let result = ProviderFactory::create("unknown", &config, 30);
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("Unknown provider"));
        }
    }

    #[test]
    fn test_create_disabled_provider() {
        let mut config = create_test_provider_config();
        config.enabled = false;

        let result = ProviderFactory::create("google", &config, 30);
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("not enabled in configuration"));
        }
    }

    #[test]
    fn test_get_default_provider() {
        let mut providers = HashMap::new();
        providers.insert("google".to_string(), create_test_provider_config());

        let ai_config = AiConfig {
            default_provider: "google".to_string(),
            providers,
            ..Default::default()
        };

        let provider = ProviderFactory::get_default_provider(&ai_config).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_get_default_provider_not_found() {
        let ai_config = AiConfig {
            default_provider: "google".to_string(),
            providers: HashMap::new(),
            ..Default::default()
        };

        let result = ProviderFactory::get_default_provider(&ai_config);
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("not found"));
        }
    }

    #[test]
    fn test_create_with_options_uses_default_model() {
        let provider =
            ProviderFactory::create_with_options("google", Some("test-key".to_string()), None)
                .unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_available_providers() {
        let providers = ProviderFactory::available_providers();
        assert_eq!(providers.len(), 3);
        assert!(providers.contains(&"google"));
        assert!(providers.contains(&"openai"));
        assert!(providers.contains(&"anthropic"));
    }
}
