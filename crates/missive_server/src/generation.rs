//! The generation service: wraps a caller prompt in the instruction
//! template, invokes the model driver, and normalizes every outcome into
//! a [`GenerationResult`].

use missive_core::{GenerateRequest, GenerationResult, GenerativeDriver, ModelConfig, prompt};
use missive_error::ServerError;
use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};

/// Error text reported when the model driver cannot be initialized.
pub const INIT_ERROR_TEXT: &str =
    "Failed to initialize Gemini client. Please check GEMINI_API_KEY in environment variables.";

/// Owns the lazily-initialized handle to the text-generation model.
///
/// The driver is built on first use behind a [`OnceCell`]; a failed
/// initialization is not cached, so a missing API key is re-reported on
/// every call until the configuration is corrected.
pub struct GenerationService<D> {
    config: ModelConfig,
    driver: OnceCell<D>,
}

impl<D> GenerationService<D>
where
    D: GenerativeDriver,
{
    /// Creates a service that builds its driver lazily from configuration.
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            driver: OnceCell::new(),
        }
    }

    /// Creates a service with an already-built driver (used in tests).
    pub fn with_driver(config: ModelConfig, driver: D) -> Self {
        Self {
            config,
            driver: OnceCell::new_with(Some(driver)),
        }
    }

    async fn driver(&self) -> Result<&D, missive_error::GeminiError> {
        self.driver
            .get_or_try_init(|| async { D::try_new(&self.config) })
            .await
    }

    /// Generates a business message from the caller's prompt.
    ///
    /// Configuration and provider failures are normalized into a failed
    /// [`GenerationResult`]; the `Err` branch is reserved for genuinely
    /// unexpected internal failures and never carries provider errors.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn generate_message(
        &self,
        prompt: &str,
    ) -> Result<GenerationResult, ServerError> {
        let driver = match self.driver().await {
            Ok(driver) => driver,
            Err(e) if e.is_initialization() => {
                warn!(error = %e.kind, "Driver initialization failed");
                return Ok(GenerationResult::failure(INIT_ERROR_TEXT));
            }
            Err(e) => {
                warn!(error = %e.kind, "Driver construction failed");
                return Ok(GenerationResult::failure(format!(
                    "Error generating message: {}",
                    e.kind
                )));
            }
        };

        let instruction = prompt::compose_instruction(prompt);
        let request = GenerateRequest::from_prompt(instruction);

        match driver.generate(&request).await {
            Ok(response) => {
                let text = response.text().unwrap_or_default().trim().to_string();
                debug!(message_len = text.len(), "Generated message");
                Ok(GenerationResult::success(text))
            }
            Err(e) => {
                warn!(error = %e.kind, "Generation failed");
                Ok(GenerationResult::failure(format!(
                    "Error generating message: {}",
                    e.kind
                )))
            }
        }
    }
}
