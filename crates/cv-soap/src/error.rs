//! Error types for cvent-soap.

use cvent_client::{FaultKind, SoapFault};

/// Result type alias for cvent-soap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cvent-soap operations.
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
    pub fn with_source(kind: ErrorKind, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self { kind, source: Some(Box::new(source)) }
    }

    /// Returns true if the vendor rejected the search filter.
    pub fn is_invalid_search_filter(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidSearchFilter(_))
    }

    /// Returns the SOAP fault behind this error, if the remote call faulted.
    pub fn fault(&self) -> Option<&SoapFault> {
        match &self.kind {
            ErrorKind::Fault(fault)
            | ErrorKind::InvalidSearchFilter(fault)
            | ErrorKind::Vendor { fault, .. } => Some(fault),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Invalid operator value: {0}")]
    InvalidOperator(String),
    #[error("'{0}' is not a valid Cvent object")]
    InvalidObjectName(String),
    #[error("{}", .0.report())]
    Fault(SoapFault),
    #[error("Invalid search filter: {}", .0.report())]
    InvalidSearchFilter(SoapFault),
    #[error("{kind}: {}", .fault.report())]
    Vendor { kind: FaultKind, fault: SoapFault },
    #[error("{0}")]
    Auth(cvent_auth::ErrorKind),
    #[error("Client error: {0}")]
    Client(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<cvent_client::Error> for Error {
    fn from(err: cvent_client::Error) -> Self {
        use cvent_client::ErrorKind as ClientKind;

        let cvent_client::Error { kind, source } = err;
        let kind = match kind {
            ClientKind::Fault(fault) => ErrorKind::Fault(fault),
            ClientKind::InvalidSearchFilter(fault) => ErrorKind::InvalidSearchFilter(fault),
            ClientKind::Vendor { kind, fault } => ErrorKind::Vendor { kind, fault },
            other => ErrorKind::Client(other.to_string()),
        };
        Error { kind, source }
    }
}

impl From<cvent_auth::Error> for Error {
    fn from(err: cvent_auth::Error) -> Self {
        Error { kind: ErrorKind::Auth(err.kind), source: err.source }
    }
}
