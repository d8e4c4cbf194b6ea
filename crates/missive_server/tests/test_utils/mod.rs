//! Test utilities for Missive server tests.
//!
//! Provides a mock driver so service and router tests run without a
//! network or an API key.

use async_trait::async_trait;
use missive_core::{GenerateRequest, GenerateResponse, GenerativeDriver, ModelConfig};
use missive_error::{GeminiError, GeminiErrorKind};
use std::sync::{Arc, Mutex};

/// What the mock driver does when asked to generate.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Reply with a fixed text
    Reply(String),
    /// Fail with the given error kind
    Fail(GeminiErrorKind),
}

/// A stub [`GenerativeDriver`] that records every request it receives.
#[derive(Debug, Clone)]
pub struct MockDriver {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

#[allow(dead_code)]
impl MockDriver {
    /// Driver that replies with a fixed text.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Reply(text.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Driver that fails every generate call.
    pub fn failing(kind: GeminiErrorKind) -> Self {
        Self {
            behavior: MockBehavior::Fail(kind),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of generate calls received.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Content of the first message of the most recent request.
    pub fn last_prompt(&self) -> Option<String> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .and_then(|req| req.messages().first())
            .map(|msg| msg.content().clone())
    }
}

#[async_trait]
impl GenerativeDriver for MockDriver {
    fn try_new(config: &ModelConfig) -> Result<Self, GeminiError> {
        if config.api_key().is_none() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }
        Ok(Self::replying("Dear {name}, thank you for reaching out!"))
    }

    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GeminiError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.behavior {
            MockBehavior::Reply(text) => Ok(GenerateResponse::new(vec![text.clone()])),
            MockBehavior::Fail(kind) => Err(GeminiError::new(kind.clone())),
        }
    }
}

/// A [`ModelConfig`] carrying a key, for tests that reach the driver.
#[allow(dead_code)]
pub fn keyed_config() -> ModelConfig {
    ModelConfig::builder()
        .api_key(Some("test-key".to_string()))
        .build()
        .unwrap()
}
