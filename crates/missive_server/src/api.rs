//! HTTP API for message generation and health checks.

use crate::auth::CurrentCaller;
use crate::generation::GenerationService;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use missive_core::{GenerationRequest, GenerativeDriver};
use missive_error::ServerError;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, instrument};

/// API server state.
pub struct ApiState<D> {
    service: Arc<GenerationService<D>>,
    auth_token: Option<String>,
}

impl<D> ApiState<D> {
    /// Creates a new API state.
    pub fn new(service: Arc<GenerationService<D>>, auth_token: Option<String>) -> Self {
        Self {
            service,
            auth_token,
        }
    }

    /// Returns the configured bearer token, if any.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }
}

impl<D> Clone for ApiState<D> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            auth_token: self.auth_token.clone(),
        }
    }
}

/// Creates the API router.
pub fn create_router<D>(state: ApiState<D>) -> Router
where
    D: GenerativeDriver + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/generate-message", post(generate_message::<D>))
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Generate a message from the caller's prompt.
///
/// Service-level failures stay HTTP 200 with `success:false`; only an
/// unexpected internal error takes the 500 branch. Auth rejections are
/// produced by the extractor and pass through untouched.
#[instrument(skip_all)]
async fn generate_message<D>(
    _caller: CurrentCaller,
    State(state): State<ApiState<D>>,
    Json(request): Json<GenerationRequest>,
) -> Response
where
    D: GenerativeDriver + 'static,
{
    match state.service.generate_message(request.prompt()).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => internal_error_response(&e),
    }
}

/// Maps an unexpected internal error to the 500 response shape.
pub fn internal_error_response(err: &ServerError) -> Response {
    error!(error = %err, "Unexpected internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "detail": format!("Internal server error: {}", err.kind.message())
        })),
    )
        .into_response()
}
