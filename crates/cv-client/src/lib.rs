//! # cvent-client
//!
//! Core SOAP infrastructure for the Cvent API.
//!
//! This crate provides the session/transport adapter the API crates build on:
//! - SOAP 1.1 envelope encoding and response decoding
//! - Session header attachment and endpoint pinning
//! - Fault capture with redacted request diagnostics
//! - Fault classification through an explicit table
//! - Scalar-or-array response normalization
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (cvent-auth, cvent-soap)                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Connection                              │
//! │  - Holds endpoint + session                                 │
//! │  - Attaches CventSessionHeader                              │
//! │  - Classifies faults into typed errors                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │               SoapTransport (HttpTransport)                 │
//! │  - Envelope building, SOAPAction, HTTP POST                 │
//! │  - Response tree decoding, SOAP fault extraction            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use cvent_client::{ClientConfig, Connection};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cvent_client::Error> {
//!     let connection = Connection::new(ClientConfig::sandbox())?;
//!
//!     let response = connection
//!         .call("Search", json!({ "ObjectType": "Event" }))
//!         .await?;
//!
//!     println!("{response}");
//!     Ok(())
//! }
//! ```

mod config;
mod connection;
pub mod envelope;
mod error;
mod fault;
mod http;
pub mod normalize;
pub mod security;
mod session;
mod transport;

pub use config::{ClientConfig, ClientConfigBuilder, Environment};
pub use connection::Connection;
pub use error::{Error, ErrorKind, Result};
pub use fault::{Diagnostics, FaultKind, FaultMap, SoapFault, INVALID_SEARCH_FILTER};
pub use http::HttpTransport;
pub use normalize::one_or_many;
pub use session::Session;
pub use transport::{SoapRequest, SoapTransport};

/// Target namespace of the Cvent `V200611` service.
pub const CVENT_NAMESPACE: &str = "http://api.cvent.com/2006-11";

/// Production SOAP endpoint.
pub const PRODUCTION_ENDPOINT: &str = "https://api.cvent.com/soap/V200611.ASMX";

/// Sandbox SOAP endpoint.
pub const SANDBOX_ENDPOINT: &str = "https://sandbox-api.cvent.com/soap/V200611.ASMX";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("cvent-api/", env!("CARGO_PKG_VERSION"));
