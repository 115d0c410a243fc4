//! Session/transport adapter.
//!
//! `Connection` owns the endpoint choice and the session, attaches the
//! session header to every call, and turns raw SOAP faults into typed
//! errors through the configured [`FaultMap`].

use serde_json::Value;
use tracing::{instrument, warn};

use crate::config::{ClientConfig, Environment};
use crate::error::{Error, ErrorKind, Result};
use crate::fault::FaultMap;
use crate::http::HttpTransport;
use crate::session::Session;
use crate::transport::{SoapRequest, SoapTransport};

/// A connection to the Cvent SOAP API.
///
/// Session state is instance-local. Logging in or out takes `&mut self`, so
/// calls on one connection are serialized by the borrow checker.
pub struct Connection<T = HttpTransport> {
    transport: T,
    environment: Environment,
    fault_map: FaultMap,
    session: Option<Session>,
}

impl<T> std::fmt::Debug for Connection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("environment", &self.environment)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl Connection<HttpTransport> {
    /// Create a connection over HTTP.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.clone())?;
        Ok(Self::with_transport(&config, transport))
    }
}

impl<T: SoapTransport> Connection<T> {
    /// Create a connection over a custom transport.
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            transport,
            environment: config.environment.clone(),
            fault_map: config.fault_map.clone(),
            session: None,
        }
    }

    /// The endpoint the next call goes to.
    ///
    /// The session-pinned URL once logged in, the configured environment
    /// before that.
    pub fn endpoint(&self) -> &str {
        match self.session {
            Some(ref session) if !session.server_url().is_empty() => session.server_url(),
            _ => self.environment.endpoint(),
        }
    }

    /// The configured environment.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The current session, if logged in.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns true once a session is held.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Install a session. Subsequent calls carry its header and go to its
    /// endpoint.
    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Drop the current session, returning it.
    pub fn clear_session(&mut self) -> Option<Session> {
        self.session.take()
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue one remote call.
    ///
    /// Faults are classified: `INVALID_SEARCH_FILTER` →
    /// [`ErrorKind::InvalidSearchFilter`], table hits → [`ErrorKind::Vendor`],
    /// anything else → [`ErrorKind::Fault`]. No retries.
    #[instrument(skip_all, fields(method = %method))]
    pub async fn call(&self, method: &str, params: Value) -> Result<Value> {
        let request = SoapRequest {
            endpoint: self.endpoint(),
            method,
            params: &params,
            session: self.session.as_ref().map(Session::value),
        };

        self.transport.call(request).await.map_err(|err| {
            let Error { kind, source } = err;
            match kind {
                ErrorKind::Fault(fault) => {
                    warn!(code = %fault.code, message = %fault.message, "Remote call faulted");
                    Error {
                        kind: self.fault_map.classify(fault),
                        source,
                    }
                }
                kind => Error { kind, source },
            }
        })
    }
}
