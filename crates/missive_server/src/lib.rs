//! HTTP surface for the Missive message generation service.
//!
//! The boundary layer is deliberately thin: the router validates the
//! request shape, the auth extractor vets the caller, and the handler
//! delegates to [`GenerationService`], mapping its outcome 1:1 onto the
//! response contract.

mod api;
mod auth;
mod config;
mod generation;

pub use api::{ApiState, create_router, internal_error_response};
pub use auth::{AuthRejection, CurrentCaller};
pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use generation::{GenerationService, INIT_ERROR_TEXT};
