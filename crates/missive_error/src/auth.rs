//! Authentication error types.

/// Authentication error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    /// No credentials were presented
    MissingCredentials,
    /// Credentials were presented but did not match
    InvalidToken,
}

impl std::fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthErrorKind::MissingCredentials => write!(f, "Not authenticated"),
            AuthErrorKind::InvalidToken => {
                write!(f, "Invalid authentication credentials")
            }
        }
    }
}

/// Authentication error with source location.
///
/// # Examples
///
/// ```
/// use missive_error::{AuthError, AuthErrorKind};
///
/// let err = AuthError::new(AuthErrorKind::MissingCredentials);
/// assert!(format!("{}", err).contains("Not authenticated"));
/// ```
#[derive(Debug, Clone)]
pub struct AuthError {
    /// The kind of error that occurred
    pub kind: AuthErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl AuthError {
    /// Create a new AuthError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AuthErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Auth Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for AuthError {}
