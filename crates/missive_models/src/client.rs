//! Reqwest client for the Gemini generateContent endpoint.

use crate::conversions;
use crate::dto::GenerateContentResponse;
use async_trait::async_trait;
use missive_core::{GenerateRequest, GenerateResponse, GenerativeDriver, ModelConfig};
use missive_error::{GeminiError, GeminiErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for the Gemini REST API.
///
/// Holds a connection pool, the API key, and the target model. The base
/// URL is injectable so tests can stand in for the provider.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new Gemini client against the production endpoint.
    #[instrument(skip_all, fields(model = %model.as_ref()))]
    pub fn new(
        api_key: impl Into<String>,
        model: impl AsRef<str>,
    ) -> Result<Self, GeminiError> {
        Self::new_with_base_url(api_key, model, missive_core::DEFAULT_BASE_URL)
    }

    /// Creates a new Gemini client against an explicit base URL.
    pub fn new_with_base_url(
        api_key: impl Into<String>,
        model: impl AsRef<str>,
        base_url: impl AsRef<str>,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder().build().map_err(|e| {
            GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string()))
        })?;

        let model = model.as_ref().to_string();
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        debug!(model = %model, url = %base_url, "Created Gemini client");

        Ok(Self {
            client,
            api_key: api_key.into(),
            model,
            base_url,
        })
    }

    /// Returns the model identifier.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Generates a response from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the provider rejects it, or
    /// the response cannot be parsed.
    #[instrument(skip(self, req), fields(model = %self.model))]
    pub async fn generate(
        &self,
        req: &GenerateRequest,
    ) -> Result<GenerateResponse, GeminiError> {
        let wire_request = conversions::to_content_request(req);
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        debug!(
            model = %self.model,
            content_count = wire_request.contents.len(),
            "Sending request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: error_text,
            }));
        }

        let content_response: GenerateContentResponse =
            response.json().await.map_err(|e| {
                error!(error = ?e, "Failed to parse response");
                GeminiError::new(GeminiErrorKind::ResponseParsing(format!(
                    "Failed to parse JSON: {}",
                    e
                )))
            })?;

        debug!(
            candidates = content_response.candidates.len(),
            "Received response"
        );

        conversions::from_content_response(&content_response)
    }
}

#[async_trait]
impl GenerativeDriver for GeminiClient {
    fn try_new(config: &ModelConfig) -> Result<Self, GeminiError> {
        let api_key = config
            .api_key()
            .as_deref()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Self::new_with_base_url(api_key, config.model(), config.base_url())
    }

    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GeminiError> {
        GeminiClient::generate(self, request).await
    }
}
