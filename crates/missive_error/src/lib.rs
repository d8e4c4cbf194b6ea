//! Error types for the Missive message generation service.
//!
//! Each subsystem gets a kind enum paired with a struct that records the
//! source location where the error was created.

mod auth;
mod gemini;
mod server;

pub use auth::{AuthError, AuthErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use server::{ServerError, ServerErrorKind};

/// Aggregate error type for callers that cross subsystem boundaries.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum MissiveError {
    /// Gemini provider error.
    #[display("{}", _0)]
    Gemini(GeminiError),
    /// Authentication error.
    #[display("{}", _0)]
    Auth(AuthError),
    /// Server error.
    #[display("{}", _0)]
    Server(ServerError),
}

impl std::error::Error for MissiveError {}

/// Result alias using [`MissiveError`].
pub type MissiveResult<T> = Result<T, MissiveError>;
