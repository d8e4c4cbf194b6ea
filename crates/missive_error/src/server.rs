//! Server error types.

/// Server error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServerErrorKind {
    /// Configuration is missing or invalid
    Configuration(String),
    /// Unexpected internal failure
    Internal(String),
}

impl ServerErrorKind {
    /// The underlying message, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            ServerErrorKind::Configuration(msg) => msg,
            ServerErrorKind::Internal(msg) => msg,
        }
    }
}

impl std::fmt::Display for ServerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerErrorKind::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            ServerErrorKind::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

/// Server error with source location.
///
/// # Examples
///
/// ```
/// use missive_error::{ServerError, ServerErrorKind};
///
/// let err = ServerError::new(ServerErrorKind::Internal("oops".into()));
/// assert!(format!("{}", err).contains("oops"));
/// ```
#[derive(Debug, Clone)]
pub struct ServerError {
    /// The kind of error that occurred
    pub kind: ServerErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Server Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ServerError {}
