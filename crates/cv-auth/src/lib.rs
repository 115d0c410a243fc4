//! # cvent-auth
//!
//! Authentication for the Cvent SOAP API.
//!
//! ## Security
//!
//! - The password is redacted in Debug output
//! - Tracing skips credential parameters
//! - Login error text is scrubbed of the account number, user name and
//!   password
//!
//! ## Example
//!
//! ```rust,ignore
//! use cvent_auth::{login, AccountCredentials};
//! use cvent_client::{ClientConfig, Connection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut connection = Connection::new(ClientConfig::sandbox())?;
//!     let credentials = AccountCredentials::from_env()?;
//!
//!     let session = login(&mut connection, &credentials).await?;
//!     println!("calls now go to {}", session.server_url());
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod login;

pub use credentials::{AccountCredentials, ACCOUNT_NUMBER_VAR, PASSWORD_VAR, USERNAME_VAR};
pub use error::{Error, ErrorKind, Result};
pub use login::{interpret_login_result, login, logout, ACCESS_DENIED, LOCKED_OUT_PREFIX};
