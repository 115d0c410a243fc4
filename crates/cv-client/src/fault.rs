//! SOAP faults and their classification into typed error kinds.
//!
//! Cvent reports most failures as a SOAP fault whose `faultstring` is an
//! upper-case code such as `INVALID_SEARCH_FILTER`. [`FaultMap`] is the
//! auditable table that turns those strings into a closed [`FaultKind`].

use crate::error::ErrorKind;

/// Fault message the vendor uses for a rejected search filter.
pub const INVALID_SEARCH_FILTER: &str = "INVALID_SEARCH_FILTER";

/// What was sent on the wire when a call faulted.
///
/// Password and session values are redacted before they are stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Request headers, one `name: value` per line.
    pub request_headers: String,
    /// The request envelope.
    pub request: String,
}

/// SOAP fault returned by a remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapFault {
    /// `faultcode`, e.g. `soap:Server`, or `HTTP` for transport failures.
    pub code: String,
    /// `faultstring`.
    pub message: String,
    /// HTTP status the fault arrived with, when it came over HTTP.
    pub status: Option<u16>,
    /// Last sent request, when the transport kept it.
    pub diagnostics: Option<Diagnostics>,
}

impl SoapFault {
    /// Create a fault without diagnostics.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            status: None,
            diagnostics: None,
        }
    }

    /// Record the HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the last sent request.
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Full diagnostic report used as the error text.
    pub fn report(&self) -> String {
        let mut message = String::from("Error with Cvent API. Exception occurred.\n");
        message.push_str(&format!("faultcode: {}\n", self.code));
        message.push_str(&format!("Code: {}\n", self.status.unwrap_or(0)));
        message.push_str(&format!("Message: {}\n", self.message));

        if let Some(ref diagnostics) = self.diagnostics {
            message.push_str("Sent Headers: \n");
            message.push_str(&diagnostics.request_headers);
            message.push_str("Sent Request: \n");
            message.push_str(&diagnostics.request);
        }

        message
    }
}

impl std::fmt::Display for SoapFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SOAP Fault: {} - {}", self.code, self.message)
    }
}

impl std::error::Error for SoapFault {}

/// Named vendor fault kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// The search filter was rejected.
    InvalidSearchFilter,
    /// The session header is missing, expired or unknown.
    InvalidSession,
    /// One of the supplied ids does not exist.
    InvalidId,
    /// A requested or filtered field does not exist on the object.
    InvalidField,
    /// The object type is not known to the vendor.
    InvalidObjectType,
    /// The account lacks permission for the call.
    InsufficientPrivileges,
    /// The account exhausted its API call allowance.
    CallLimitExceeded,
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FaultKind::InvalidSearchFilter => "Invalid search filter",
            FaultKind::InvalidSession => "Invalid session",
            FaultKind::InvalidId => "Invalid id",
            FaultKind::InvalidField => "Invalid field",
            FaultKind::InvalidObjectType => "Invalid object type",
            FaultKind::InsufficientPrivileges => "Insufficient privileges",
            FaultKind::CallLimitExceeded => "API call limit exceeded",
        };
        f.write_str(name)
    }
}

/// Table from fault-message substrings to [`FaultKind`]s.
///
/// Entries are tried in insertion order; the first whose pattern occurs in
/// the fault message wins. Messages no entry matches surface as
/// [`ErrorKind::Fault`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultMap {
    entries: Vec<(String, FaultKind)>,
}

impl Default for FaultMap {
    fn default() -> Self {
        Self::empty()
            .with_entry("INVALID_SESSION", FaultKind::InvalidSession)
            .with_entry("INVALID_ID", FaultKind::InvalidId)
            .with_entry("INVALID_FIELD", FaultKind::InvalidField)
            .with_entry("INVALID_OBJECT_TYPE", FaultKind::InvalidObjectType)
            .with_entry("INSUFFICIENT_PRIVILEGES", FaultKind::InsufficientPrivileges)
            .with_entry("API_CALL_LIMIT", FaultKind::CallLimitExceeded)
    }
}

impl FaultMap {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry.
    pub fn with_entry(mut self, pattern: impl Into<String>, kind: FaultKind) -> Self {
        self.entries.push((pattern.into(), kind));
        self
    }

    /// Look up the kind for a fault message.
    pub fn lookup(&self, message: &str) -> Option<FaultKind> {
        self.entries
            .iter()
            .find(|(pattern, _)| message.contains(pattern.as_str()))
            .map(|(_, kind)| *kind)
    }

    /// Turn a fault into the error kind callers see.
    ///
    /// An exact `INVALID_SEARCH_FILTER` message always becomes
    /// [`ErrorKind::InvalidSearchFilter`], regardless of table contents.
    pub fn classify(&self, fault: SoapFault) -> ErrorKind {
        if fault.message == INVALID_SEARCH_FILTER {
            return ErrorKind::InvalidSearchFilter(fault);
        }

        match self.lookup(&fault.message) {
            Some(FaultKind::InvalidSearchFilter) => ErrorKind::InvalidSearchFilter(fault),
            Some(kind) => ErrorKind::Vendor { kind, fault },
            None => ErrorKind::Fault(fault),
        }
    }
}
