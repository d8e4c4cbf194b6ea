//! Tests for the Gemini client implementation.
//!
//! The live tests require a valid `GEMINI_API_KEY` in the environment
//! (a `.env` file is honored).
//!
//! Run with: cargo test --package missive_models -- --ignored

use missive_core::{GenerateRequest, GenerativeDriver, Message, ModelConfig};
use missive_error::GeminiErrorKind;
use missive_models::GeminiClient;

#[tokio::test]
#[ignore] // Requires GEMINI_API_KEY and network access
async fn test_gemini_basic_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("GEMINI_API_KEY")?;
    let client = GeminiClient::new(api_key, "gemini-pro")?;

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("Say hello")])
        .max_tokens(Some(64))
        .build()?;

    let response = client.generate(&request).await?;

    assert!(!response.outputs().is_empty());
    println!("Response: {:?}", response.outputs());
    Ok(())
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_gemini_rejects_bad_key() -> Result<(), Box<dyn std::error::Error>> {
    let client = GeminiClient::new("not-a-real-key", "gemini-pro")?;

    let request = GenerateRequest::from_prompt("Say hello");
    let result = client.generate(&request).await;
    assert!(result.is_err());

    if let Err(e) = result {
        assert!(matches!(e.kind, GeminiErrorKind::HttpError { .. }));
    }
    Ok(())
}

#[tokio::test]
async fn test_gemini_unreachable_server() -> Result<(), Box<dyn std::error::Error>> {
    // Non-standard port where nothing is listening
    let client =
        GeminiClient::new_with_base_url("test-key", "gemini-pro", "http://localhost:59999")?;

    let request = GenerateRequest::from_prompt("Say hello");
    let result = client.generate(&request).await;
    assert!(result.is_err());

    if let Err(e) = result {
        assert!(matches!(e.kind, GeminiErrorKind::ApiRequest(_)));
    }
    Ok(())
}

#[test]
fn test_driver_construction_requires_key() {
    let config = ModelConfig::default();
    let result = <GeminiClient as GenerativeDriver>::try_new(&config);
    assert!(matches!(
        result.unwrap_err().kind,
        GeminiErrorKind::MissingApiKey
    ));
}
