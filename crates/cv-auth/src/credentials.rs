//! Account credentials.

use cvent_client::security::REDACTED;

use crate::error::{Error, ErrorKind, Result};

/// Environment variable holding the account number.
pub const ACCOUNT_NUMBER_VAR: &str = "CVENT_ACCOUNT_NUMBER";
/// Environment variable holding the API user name.
pub const USERNAME_VAR: &str = "CVENT_USERNAME";
/// Environment variable holding the API password.
pub const PASSWORD_VAR: &str = "CVENT_PASSWORD";

/// Credentials for the Cvent `Login` call.
///
/// The password is redacted in Debug output.
#[derive(Clone)]
pub struct AccountCredentials {
    account_number: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for AccountCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountCredentials")
            .field("account_number", &self.account_number)
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

impl AccountCredentials {
    /// Create credentials from explicit values.
    pub fn new(
        account_number: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Required environment variables:
    /// - `CVENT_ACCOUNT_NUMBER`
    /// - `CVENT_USERNAME`
    /// - `CVENT_PASSWORD`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::new(ErrorKind::EnvVar(name.to_string())))
        };

        Ok(Self::new(
            var(ACCOUNT_NUMBER_VAR)?,
            var(USERNAME_VAR)?,
            var(PASSWORD_VAR)?,
        ))
    }

    /// The account number.
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// The API user name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The API password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The literals that must never appear in error text.
    pub(crate) fn secrets(&self) -> [&str; 3] {
        [
            self.account_number.as_str(),
            self.username.as_str(),
            self.password.as_str(),
        ]
    }
}
