//! Bearer-token authentication extractor.
//!
//! Stands in for the upstream identity collaborator. Rejections are
//! produced here and propagate to the caller unchanged; the handler
//! never re-wraps them.

use crate::api::ApiState;
use axum::extract::FromRequestParts;
use axum::http::{StatusCode, header::AUTHORIZATION, request::Parts};
use axum::response::{IntoResponse, Response};
use axum::Json;
use missive_core::GenerativeDriver;
use missive_error::{AuthError, AuthErrorKind};
use serde_json::json;
use tracing::warn;

/// Marker for an authenticated caller.
///
/// When the configuration carries an auth token, requests must present
/// `Authorization: Bearer <token>`. When no token is configured, access
/// is open and extraction always succeeds.
#[derive(Debug, Clone, Copy)]
pub struct CurrentCaller;

/// Rejection produced when authentication fails.
#[derive(Debug)]
pub struct AuthRejection(pub AuthError);

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": self.0.kind.to_string() })),
        )
            .into_response()
    }
}

#[async_trait::async_trait]
impl<D> FromRequestParts<ApiState<D>> for CurrentCaller
where
    D: GenerativeDriver + 'static,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ApiState<D>,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.auth_token() else {
            return Ok(CurrentCaller);
        };

        let presented = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match presented {
            None => {
                warn!("Request missing bearer credentials");
                Err(AuthRejection(AuthError::new(
                    AuthErrorKind::MissingCredentials,
                )))
            }
            Some(token) if token == expected => Ok(CurrentCaller),
            Some(_) => {
                warn!("Request presented an invalid bearer token");
                Err(AuthRejection(AuthError::new(AuthErrorKind::InvalidToken)))
            }
        }
    }
}
