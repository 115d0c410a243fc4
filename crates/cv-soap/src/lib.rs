//! # cvent-soap
//!
//! Cvent SOAP API operations.
//!
//! ## Features
//!
//! - **Filters** - Typed search conditions with operator aliases and
//!   timestamp normalization
//! - **Search** - Ids matching a set of filters, always as a list
//! - **Retrieve** - Flat, ordered records with custom fields and survey
//!   answers folded in
//! - **Search and Retrieve** - Both in sequence
//! - **Describe** - Field schemas for object types
//!
//! ## Example
//!
//! ```rust,ignore
//! use cvent_soap::{CventClient, Filter, SearchType};
//! use cvent_client::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cvent_soap::Error> {
//!     let mut client = CventClient::new(ClientConfig::sandbox())?;
//!     client.login("ACME01", "api_user", "s3cret!").await?;
//!
//!     let events = client
//!         .search_and_retrieve(
//!             "Event",
//!             [Filter::new("EventStartDate", ">", chrono::Utc::now())],
//!             &["EventCode", "EventTitle"],
//!             SearchType::AndSearch,
//!         )
//!         .await?;
//!
//!     for (id, record) in &events {
//!         println!("{id}: {}", record["EventTitle"]);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod describe;
mod error;
mod filter;
mod object_type;
mod retrieve;
mod search;

pub use client::CventClient;
pub use describe::{CustomFieldDescription, CvObjectDescription, FieldDescription};
pub use error::{Error, ErrorKind, Result};
pub use filter::{Filter, FilterValue, Operator, Predicate, TIMESTAMP_FORMAT};
pub use object_type::{ObjectTypes, DEFAULT_OBJECT_TYPES};
pub use retrieve::{
    build_record_set, effective_fields, Ids, Record, RecordSet, RetrieveOptions, ANSWER_ARRAY_FIELD,
    ANSWER_FIELD, ID_FIELD,
};
pub use search::SearchType;
