//! SOAP-over-HTTP transport.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::envelope::{self, Decoded};
use crate::error::{Error, ErrorKind, Result};
use crate::fault::{Diagnostics, SoapFault};
use crate::security::redact;
use crate::transport::{SoapRequest, SoapTransport};

const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// HTTP transport for the Cvent SOAP API.
///
/// Posts one SOAP 1.1 envelope per call. Faults carry the redacted request
/// as diagnostics.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new transport with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl SoapTransport for HttpTransport {
    #[instrument(skip(self, request), fields(method = %request.method, endpoint = %request.endpoint))]
    async fn call(&self, request: SoapRequest<'_>) -> Result<Value> {
        let url = url::Url::parse(request.endpoint)?;
        let body = envelope::encode(request.method, request.params, request.session)?;
        let action = format!("\"{}\"", envelope::soap_action(request.method));

        let diagnostics = Diagnostics {
            request_headers: format!(
                "POST {}\nContent-Type: {}\nSOAPAction: {}\n",
                request.endpoint, SOAP_CONTENT_TYPE, action
            ),
            request: redact::envelope(&body),
        };

        if self.config.enable_tracing {
            debug!(authenticated = request.session.is_some(), "Sending request");
        }

        let response = self
            .inner
            .post(url)
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .header("SOAPAction", action.as_str())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if self.config.enable_tracing {
            if status.is_success() {
                debug!(status = status.as_u16(), length = text.len(), "Response received");
            } else {
                info!(status = status.as_u16(), length = text.len(), "Non-success response");
            }
        }

        match envelope::decode(&text) {
            Ok(Decoded::Response(value)) if status.is_success() => Ok(value),
            Ok(Decoded::Fault(fault)) => Err(Error::new(ErrorKind::Fault(
                fault.with_status(status.as_u16()).with_diagnostics(diagnostics),
            ))),
            Ok(Decoded::Response(_)) => Err(http_fault(status, diagnostics)),
            Err(err) if !status.is_success() => {
                Err(Error { source: Some(Box::new(err)), ..http_fault(status, diagnostics) })
            }
            Err(err) => Err(err),
        }
    }
}

fn http_fault(status: reqwest::StatusCode, diagnostics: Diagnostics) -> Error {
    let message = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status")
    );
    Error::new(ErrorKind::Fault(
        SoapFault::new("HTTP", message)
            .with_status(status.as_u16())
            .with_diagnostics(diagnostics),
    ))
}
