use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{CoreError, RpcError};
use crate::rpc::envelope::RequestBody;
use crate::rpc::routing::RoutePath;

use super::RpcTransport;

enum Reply {
    Body(Value),
    Status(u16, String),
}

/// A mock transport for testing. Records every exchange and answers with
/// canned replies queued via the builder pattern. Once the queue is drained
/// it answers `{"result": null, "error": null}`.
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    exchanges: Mutex<Vec<(RoutePath, Value)>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            replies: VecDeque::new(),
        }
    }

    /// Every `(path, serialized body)` posted so far, oldest first.
    pub fn exchanges(&self) -> Vec<(RoutePath, Value)> {
        self.exchanges.lock().expect("mock lock poisoned").clone()
    }

    pub fn last_exchange(&self) -> (RoutePath, Value) {
        self.exchanges()
            .pop()
            .expect("at least one exchange must have happened")
    }
}

pub struct MockTransportBuilder {
    replies: VecDeque<Reply>,
}

impl MockTransportBuilder {
    pub fn with_reply(mut self, body: Value) -> Self {
        self.replies.push_back(Reply::Body(body));
        self
    }

    pub fn with_result(self, result: Value) -> Self {
        self.with_reply(json!({"result": result, "error": null, "id": "mock"}))
    }

    pub fn with_status(mut self, status: u16, body: &str) -> Self {
        self.replies.push_back(Reply::Status(status, body.to_owned()));
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            replies: Mutex::new(self.replies),
            exchanges: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn post(&self, path: &RoutePath, body: &RequestBody) -> Result<Value, CoreError> {
        let serialized = serde_json::to_value(body)?;
        self.exchanges
            .lock()
            .expect("mock lock poisoned")
            .push((path.clone(), serialized));

        let reply = self.replies.lock().expect("mock lock poisoned").pop_front();
        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status, body)) => Err(RpcError::HttpStatus { status, body }.into()),
            None => Ok(json!({"result": null, "error": null, "id": "mock"})),
        }
    }
}
