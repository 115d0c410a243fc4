//! # cvent-api
//!
//! A Cvent SOAP API client library for Rust.
//!
//! This library wraps the Cvent `V200611` SOAP API: login, search, retrieve
//! and describe, with the API's loosely typed responses normalized into a
//! stable shape.
//!
//! ## Security
//!
//! - Passwords and session values are redacted in Debug output
//! - Fault diagnostics carry the sent request with secrets blanked
//! - Login error text is scrubbed of the account number, user name and
//!   password
//!
//! ## Crates
//!
//! - **cvent-client** - SOAP transport, session adapter, fault classification
//! - **cvent-auth** - Account credentials, Login, session lifecycle
//! - **cvent-soap** - Filters, Search, Retrieve, DescribeCvObject
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cvent_api::{AccountCredentials, ClientConfig, CventClient, Filter, SearchType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = CventClient::new(ClientConfig::sandbox())?;
//!     client
//!         .login_with_credentials(&AccountCredentials::from_env()?)
//!         .await?;
//!
//!     let contacts = client
//!         .search_and_retrieve(
//!             "Contact",
//!             [Filter::new("LastName", "starts with", "Sm")],
//!             &["FirstName", "LastName", "EmailAddress"],
//!             SearchType::AndSearch,
//!         )
//!         .await?;
//!
//!     for (id, contact) in &contacts {
//!         println!("{id}: {} {}", contact["FirstName"], contact["LastName"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use cvent_auth as auth;
#[cfg(feature = "client")]
pub use cvent_client as client;
#[cfg(feature = "soap")]
pub use cvent_soap as soap;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use cvent_auth::AccountCredentials;
#[cfg(feature = "client")]
pub use cvent_client::{ClientConfig, Connection, Environment, Session};
#[cfg(feature = "soap")]
pub use cvent_soap::{CventClient, Filter, ObjectTypes, Predicate, RecordSet, RetrieveOptions, SearchType};
