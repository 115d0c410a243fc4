//! Login session state.

use crate::security::REDACTED;

/// An authenticated Cvent session.
///
/// Holds the `CventSessionHeader` value returned by `Login` and the
/// session-pinned `ServerURL`. The session value is redacted in Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    value: String,
    server_url: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("value", &REDACTED)
            .field("server_url", &self.server_url)
            .finish()
    }
}

impl Session {
    /// Create a session from the login result values.
    pub fn new(value: impl Into<String>, server_url: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            server_url: server_url.into(),
        }
    }

    /// The opaque session header value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The endpoint subsequent calls must go to.
    ///
    /// Empty when the login result carried no `ServerURL`.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}
