//! Configuration for the Missive server.

use derive_getters::Getters;
use missive_core::{ModelConfig, ModelConfigBuilder};
use tracing::debug;

/// Default socket address to bind.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Configuration for the server process.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ServiceConfig {
    /// Model provider configuration
    model: ModelConfig,
    /// Socket address to bind (e.g., "0.0.0.0:8000")
    #[builder(default = "DEFAULT_BIND_ADDR.to_string()")]
    bind_addr: String,
    /// Bearer token required from callers; open access when unset
    #[builder(default)]
    auth_token: Option<String>,
}

impl ServiceConfig {
    /// Creates a new builder for ServiceConfig.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `GEMINI_API_KEY` (optional; absence is reported per call, not a crash)
    /// - `GEMINI_MODEL` (default: "gemini-pro")
    /// - `GEMINI_BASE_URL` (default: production endpoint)
    /// - `MISSIVE_BIND_ADDR` (default: "0.0.0.0:8000")
    /// - `MISSIVE_AUTH_TOKEN` (optional)
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").ok();
        let mut model_builder = ModelConfigBuilder::default();
        model_builder.api_key(api_key.clone());
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            model_builder.model(model);
        }
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            model_builder.base_url(base_url);
        }
        let model = model_builder.build().expect("Valid ModelConfig");

        let bind_addr = std::env::var("MISSIVE_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let auth_token = std::env::var("MISSIVE_AUTH_TOKEN").ok();

        debug!(
            model = %model.model(),
            bind_addr = %bind_addr,
            api_key_present = api_key.is_some(),
            auth_enabled = auth_token.is_some(),
            "Loaded configuration from environment"
        );

        Self {
            model,
            bind_addr,
            auth_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let config = ServiceConfig::builder()
            .model(ModelConfig::default())
            .build()
            .unwrap();
        assert_eq!(config.bind_addr(), DEFAULT_BIND_ADDR);
        assert!(config.auth_token().is_none());
    }
}
