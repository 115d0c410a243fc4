//! Cvent API client.

use cvent_auth::AccountCredentials;
use cvent_client::{ClientConfig, Connection, HttpTransport, SoapTransport};
use serde_json::Value;
use tracing::info;

use crate::error::Result;
use crate::object_type::ObjectTypes;

mod describe;
mod retrieve;
mod search;

#[cfg(test)]
pub(crate) mod mock;

/// Cvent SOAP API client.
///
/// Wraps a [`Connection`] and checks object types against an
/// [`ObjectTypes`] whitelist before every call. Login and logout take
/// `&mut self`; every other operation takes `&self` and issues exactly one
/// remote call (two for [`search_and_retrieve`](Self::search_and_retrieve)).
#[derive(Debug)]
pub struct CventClient<T = HttpTransport> {
    connection: Connection<T>,
    object_types: ObjectTypes,
}

impl CventClient<HttpTransport> {
    /// Create a client over HTTP.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_connection(Connection::new(config)?))
    }

    /// Create a client for the production or sandbox endpoint.
    pub fn for_environment(sandbox: bool) -> Result<Self> {
        Self::new(ClientConfig::builder().sandbox(sandbox).build())
    }
}

impl<T: SoapTransport> CventClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self::from_connection(Connection::with_transport(config, transport))
    }

    /// Wrap an existing connection.
    pub fn from_connection(connection: Connection<T>) -> Self {
        Self {
            connection,
            object_types: ObjectTypes::default(),
        }
    }

    /// Replace the object type whitelist.
    pub fn with_object_types(mut self, object_types: ObjectTypes) -> Self {
        self.object_types = object_types;
        self
    }

    pub fn object_types(&self) -> &ObjectTypes {
        &self.object_types
    }

    pub fn connection(&self) -> &Connection<T> {
        &self.connection
    }

    pub fn connection_mut(&mut self) -> &mut Connection<T> {
        &mut self.connection
    }

    pub fn is_authenticated(&self) -> bool {
        self.connection.is_authenticated()
    }

    /// Log in. Returns `true` on success; every failure is an error.
    pub async fn login(
        &mut self,
        account_number: &str,
        username: &str,
        password: &str,
    ) -> Result<bool> {
        let credentials = AccountCredentials::new(account_number, username, password);
        self.login_with_credentials(&credentials).await
    }

    /// Log in with stored credentials.
    pub async fn login_with_credentials(&mut self, credentials: &AccountCredentials) -> Result<bool> {
        cvent_auth::login(&mut self.connection, credentials).await?;
        Ok(true)
    }

    /// Forget the session. Returns true if one was held.
    pub fn logout(&mut self) -> bool {
        let had_session = cvent_auth::logout(&mut self.connection);
        if had_session {
            info!("Logged out");
        }
        had_session
    }

    /// Validate the object type, then issue the call.
    async fn call(&self, object_type: &str, method: &str, params: Value) -> Result<Value> {
        self.object_types.validate(object_type)?;
        Ok(self.connection.call(method, params).await?)
    }
}
