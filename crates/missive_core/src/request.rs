//! Request and response types for LLM generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Provider-neutral generation request.
///
/// # Examples
///
/// ```
/// use missive_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello!")])
///     .max_tokens(Some(100))
///     .temperature(Some(0.7))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(request.max_tokens(), &Some(100));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    #[builder(default)]
    temperature: Option<f32>,
}

impl GenerateRequest {
    /// Creates a new builder for GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Convenience constructor for a single user message.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(prompt)],
            max_tokens: None,
            temperature: None,
        }
    }
}

/// The unified response object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text outputs, one per candidate
    outputs: Vec<String>,
}

impl GenerateResponse {
    /// Creates a response from generated outputs.
    pub fn new(outputs: Vec<String>) -> Self {
        Self { outputs }
    }

    /// Returns the generated outputs.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Returns the first generated output, if any.
    pub fn text(&self) -> Option<&str> {
        self.outputs.first().map(String::as_str)
    }
}
