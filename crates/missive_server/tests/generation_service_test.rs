//! Tests for the generation service against a stub driver.

mod test_utils;

use missive_core::ModelConfig;
use missive_error::GeminiErrorKind;
use missive_server::{GenerationService, INIT_ERROR_TEXT};
use test_utils::{MockDriver, keyed_config};

#[tokio::test]
async fn missing_api_key_reports_fixed_error_text() {
    // No key configured: the driver is never constructed, so no network
    // call can happen.
    let service = GenerationService::<MockDriver>::new(ModelConfig::default());

    let result = service.generate_message("any prompt").await.unwrap();

    assert!(!result.is_success());
    assert_eq!(result.generated_message(), "");
    assert_eq!(result.error(), Some(INIT_ERROR_TEXT));
}

#[tokio::test]
async fn failed_initialization_is_retried_on_every_call() {
    let service = GenerationService::<MockDriver>::new(ModelConfig::default());

    let first = service.generate_message("a").await.unwrap();
    let second = service.generate_message("b").await.unwrap();

    assert_eq!(first.error(), Some(INIT_ERROR_TEXT));
    assert_eq!(second.error(), Some(INIT_ERROR_TEXT));
}

#[tokio::test]
async fn driver_error_is_normalized_with_prefix() {
    let driver = MockDriver::failing(GeminiErrorKind::ApiRequest(
        "Request failed: connection reset".to_string(),
    ));
    let service = GenerationService::with_driver(keyed_config(), driver);

    let result = service.generate_message("welcome note").await.unwrap();

    assert!(!result.is_success());
    let error = result.error().unwrap();
    assert!(error.starts_with("Error generating message:"), "{error}");
    assert!(error.contains("connection reset"));
}

#[tokio::test]
async fn provider_http_error_is_normalized_not_raised() {
    let driver = MockDriver::failing(GeminiErrorKind::HttpError {
        status_code: 503,
        message: "overloaded".to_string(),
    });
    let service = GenerationService::with_driver(keyed_config(), driver);

    // Provider failures never take the Err branch.
    let result = service.generate_message("anything").await.unwrap();
    assert!(!result.is_success());
    assert!(result.error().unwrap().contains("503"));
}

#[tokio::test]
async fn generated_text_is_whitespace_trimmed() {
    let driver = MockDriver::replying("  Hello {name}!  \n");
    let service = GenerationService::with_driver(keyed_config(), driver);

    let result = service.generate_message("greeting").await.unwrap();

    assert!(result.is_success());
    assert_eq!(result.generated_message(), "Hello {name}!");
    assert!(result.error().is_none());
}

#[tokio::test]
async fn caller_prompt_is_wrapped_in_instruction_template() {
    let driver = MockDriver::replying("ok");
    let handle = driver.clone();
    let service = GenerationService::with_driver(keyed_config(), driver);

    service.generate_message("appointment reminder").await.unwrap();

    assert_eq!(handle.call_count(), 1);
    let sent = handle.last_prompt().unwrap();
    assert!(sent.contains("User's request: appointment reminder"));
    assert!(sent.contains("placeholders like {name}"));
}

#[tokio::test]
async fn empty_prompt_is_accepted_and_forwarded() {
    let driver = MockDriver::replying("Dear {name}, hello!");
    let handle = driver.clone();
    let service = GenerationService::with_driver(keyed_config(), driver);

    let result = service.generate_message("").await.unwrap();

    assert!(result.is_success());
    assert_eq!(handle.call_count(), 1);
    assert!(handle.last_prompt().unwrap().contains("User's request: \n"));
}
