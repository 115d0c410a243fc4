//! Error types for cvent-client.

use crate::fault::{FaultKind, SoapFault};

/// Result type alias for cvent-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cvent-client operations.
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

    /// Returns the SOAP fault behind this error, if the remote call faulted.
    pub fn fault(&self) -> Option<&SoapFault> {
        self.kind.fault()
    }

    /// Returns true if the vendor rejected the search filter.
    pub fn is_invalid_search_filter(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidSearchFilter(_))
    }

    /// Returns the classified vendor fault kind, if any.
    pub fn fault_kind(&self) -> Option<FaultKind> {
        match &self.kind {
            ErrorKind::Vendor { kind, .. } => Some(*kind),
            ErrorKind::InvalidSearchFilter(_) => Some(FaultKind::InvalidSearchFilter),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Remote call failed with a fault no table entry recognizes.
    #[error("{}", .0.report())]
    Fault(SoapFault),

    /// The vendor rejected the search filter (`INVALID_SEARCH_FILTER`).
    #[error("Invalid search filter: {}", .0.report())]
    InvalidSearchFilter(SoapFault),

    /// A fault recognized by the fault table.
    #[error("{kind}: {}", .fault.report())]
    Vendor { kind: FaultKind, fault: SoapFault },

    /// HTTP request failed before a SOAP response was produced.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Response body could not be decoded.
    #[error("XML error: {0}")]
    Xml(String),

    /// Parameter tree could not be encoded as an envelope.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Response decoded but did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl ErrorKind {
    /// Returns the SOAP fault carried by this kind, if any.
    pub fn fault(&self) -> Option<&SoapFault> {
        match self {
            ErrorKind::Fault(fault)
            | ErrorKind::InvalidSearchFilter(fault)
            | ErrorKind::Vendor { fault, .. } => Some(fault),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else {
            ErrorKind::Http(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::with_source(ErrorKind::Xml(err.to_string()), err)
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::with_source(ErrorKind::Xml(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}
