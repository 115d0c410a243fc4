//! The remote procedure call seam.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// One remote call.
#[derive(Debug, Clone, Copy)]
pub struct SoapRequest<'a> {
    /// Endpoint URL the call goes to.
    pub endpoint: &'a str,
    /// Remote method name, e.g. `Search`.
    pub method: &'a str,
    /// Parameter tree (content of the method element).
    pub params: &'a Value,
    /// Session header value to attach, if logged in.
    pub session: Option<&'a str>,
}

/// Executes remote calls.
///
/// Implementations return the response tree on success. A remote fault must
/// come back as [`ErrorKind::Fault`](crate::ErrorKind::Fault); classifying it
/// is the [`Connection`](crate::Connection)'s job, not the transport's.
#[async_trait]
pub trait SoapTransport: Send + Sync {
    /// Perform a single call. No retries.
    async fn call(&self, request: SoapRequest<'_>) -> Result<Value>;
}

#[async_trait]
impl<T: SoapTransport + ?Sized> SoapTransport for Arc<T> {
    async fn call(&self, request: SoapRequest<'_>) -> Result<Value> {
        (**self).call(request).await
    }
}

#[async_trait]
impl<T: SoapTransport + ?Sized> SoapTransport for Box<T> {
    async fn call(&self, request: SoapRequest<'_>) -> Result<Value> {
        (**self).call(request).await
    }
}
