//! Shared fixtures: a wiremock-backed fake Cvent endpoint and a
//! deterministic in-memory transport.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use cvent_api::client::{self, SoapRequest, SoapTransport};
use cvent_api::{ClientConfig, CventClient};
use serde_json::{json, Value};
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const ACCOUNT: &str = "ACME01";
pub const USERNAME: &str = "api_user";
pub const PASSWORD: &str = "s3cret!";

/// Wrap a body payload in a SOAP 1.1 envelope.
pub fn envelope(payload: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <soap:Body>{payload}</soap:Body>
</soap:Envelope>"#
    )
}

pub fn fault(code: &str, message: &str) -> String {
    envelope(&format!(
        "<soap:Fault><faultcode>{code}</faultcode><faultstring>{message}</faultstring></soap:Fault>"
    ))
}

/// A mock matching one remote method by its SOAPAction.
pub fn soap_call(remote_method: &str) -> MockBuilder {
    Mock::given(method("POST")).and(header(
        "SOAPAction",
        format!("\"http://api.cvent.com/2006-11/{remote_method}\"").as_str(),
    ))
}

pub fn xml(status: u16, body: String) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body, "text/xml; charset=utf-8")
}

/// Mount a successful Login whose session is pinned to `{uri}/pinned`.
pub async fn mount_login(server: &MockServer, session: &str) {
    let payload = format!(
        r#"<LoginResponse xmlns="http://api.cvent.com/2006-11"><LoginResult LoginSuccess="true" ServerURL="{}/pinned" CventSessionHeader="{session}"/></LoginResponse>"#,
        server.uri()
    );
    soap_call("Login")
        .respond_with(xml(200, envelope(&payload)))
        .mount(server)
        .await;
}

/// Route test logs through the test harness. `RUST_LOG=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn http_client(server: &MockServer) -> CventClient {
    init_tracing();
    let config = ClientConfig::builder()
        .with_endpoint(format!("{}/soap", server.uri()))
        .with_tracing(false)
        .build();
    CventClient::new(config).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: String,
    pub method: String,
    pub params: Value,
    pub session: Option<String>,
}

/// Replies are keyed by method; the last reply for a method repeats.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<String, VecDeque<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, remote_method: &str, response: Value) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry(remote_method.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SoapTransport for ScriptedTransport {
    async fn call(&self, request: SoapRequest<'_>) -> client::Result<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: request.endpoint.to_string(),
            method: request.method.to_string(),
            params: request.params.clone(),
            session: request.session.map(str::to_string),
        });

        let mut replies = self.replies.lock().unwrap();
        let reply = match replies.get_mut(request.method) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        Ok(reply.unwrap_or_else(|| json!({})))
    }
}

pub fn scripted_client(transport: ScriptedTransport) -> CventClient<ScriptedTransport> {
    init_tracing();
    CventClient::with_transport(&ClientConfig::sandbox(), transport)
}
