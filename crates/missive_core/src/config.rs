//! Model provider configuration.

use derive_getters::Getters;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Default base URL for the Gemini REST API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the model provider connection.
///
/// The API key is optional at construction time: a missing key is a
/// reported per-call failure in the service, not a startup crash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ModelConfig {
    /// API key for the provider, if configured
    #[builder(default)]
    api_key: Option<String>,
    /// Model identifier (e.g., "gemini-pro")
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Base URL of the provider API
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
}

impl ModelConfig {
    /// Creates a new builder for ModelConfig.
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::default()
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
