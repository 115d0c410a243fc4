//! Deterministic in-memory transport for client tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use cvent_client::{Error, ErrorKind, SoapFault, SoapRequest, SoapTransport};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub method: String,
    pub params: Value,
    pub session: Option<String>,
}

/// Replies are queued per method. The last queued reply repeats; a method
/// with no replies answers `{}`.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    replies: Mutex<HashMap<String, VecDeque<Result<Value, String>>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, method: &str, response: Value) -> Self {
        self.push(method, Ok(response))
    }

    /// Fault with the given message.
    pub fn fault(self, method: &str, message: &str) -> Self {
        self.push(method, Err(message.to_string()))
    }

    fn push(self, method: &str, reply: Result<Value, String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SoapTransport for MockTransport {
    async fn call(&self, request: SoapRequest<'_>) -> cvent_client::Result<Value> {
        self.calls.lock().unwrap().push(Call {
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

        match reply.unwrap_or_else(|| Ok(json!({}))) {
            Ok(value) => Ok(value),
            Err(message) => Err(Error::new(ErrorKind::Fault(SoapFault::new(
                "soap:Server",
                message,
            )))),
        }
    }
}
