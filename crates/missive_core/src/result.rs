//! Wire-level request and result types for the generation endpoint.

use serde::{Deserialize, Serialize};

/// Inbound request body for message generation.
///
/// An empty prompt is accepted and forwarded unchanged; the service does
/// not enforce non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationRequest {
    /// Free-text instruction describing the desired message
    prompt: String,
}

impl GenerationRequest {
    /// Creates a new generation request.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Normalized outcome of a generation call.
///
/// Invariant: `success` implies `error` is `None` and the message is
/// populated; `!success` implies the message is empty and `error` holds a
/// human-readable description. The constructors are the only way to build
/// a result, so the invariant holds everywhere.
///
/// # Examples
///
/// ```
/// use missive_core::GenerationResult;
///
/// let ok = GenerationResult::success("Dear {name}, welcome aboard!");
/// assert!(ok.is_success());
/// assert!(ok.error().is_none());
///
/// let failed = GenerationResult::failure("Error generating message: timeout");
/// assert!(!failed.is_success());
/// assert_eq!(failed.generated_message(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    generated_message: String,
    success: bool,
    error: Option<String>,
}

impl GenerationResult {
    /// Builds a successful result carrying the generated message.
    pub fn success(generated_message: impl Into<String>) -> Self {
        Self {
            generated_message: generated_message.into(),
            success: true,
            error: None,
        }
    }

    /// Builds a failed result carrying a human-readable error.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            generated_message: String::new(),
            success: false,
            error: Some(error.into()),
        }
    }

    /// Returns the generated message (empty on failure).
    pub fn generated_message(&self) -> &str {
        &self.generated_message
    }

    /// Returns whether generation succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the error description, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
