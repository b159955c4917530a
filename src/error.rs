use thiserror::Error;

/// Errors that can occur while generating a recipe or building a shopping list
#[derive(Error, Debug)]
pub enum GenieError {
    /// The model response contained no parsable JSON recipe
    #[error("Failed to parse recipe: {0}")]
    ParseError(String),

    /// The generation request to the LLM provider failed, including HTTP
    /// transport errors surfaced by the provider
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
