//! Error types for cvent-auth.
//!
//! Error text never carries the account number, user name or password.

/// Result type alias for cvent-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cvent-auth operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The vendor answered `Access is denied.`
    #[error("{0}")]
    AuthorizationFailure(String),

    /// The account is locked out.
    #[error("{0}")]
    AuthorizationLockout(String),

    /// Any other login failure. The text is already scrubbed.
    #[error("{0}")]
    Authentication(String),

    /// Client error outside of login.
    #[error("Client error: {0}")]
    Client(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),
}

impl From<cvent_client::Error> for Error {
    fn from(err: cvent_client::Error) -> Self {
        Error::with_source(ErrorKind::Client(err.to_string()), err)
    }
}
