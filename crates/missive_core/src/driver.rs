//! Driver trait for text-generation providers.

use crate::{GenerateRequest, GenerateResponse, ModelConfig};
use async_trait::async_trait;
use missive_error::GeminiError;

/// A handle to an external text-generation model.
///
/// Implementations own the provider connection. Construction is fallible
/// so that a missing API key surfaces as an initialization error rather
/// than a panic; the service retries construction on every call until it
/// succeeds.
#[async_trait]
pub trait GenerativeDriver: Send + Sync + Sized {
    /// Builds a driver from explicit configuration.
    fn try_new(config: &ModelConfig) -> Result<Self, GeminiError>;

    /// Generates a response for the given request.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GeminiError>;
}
