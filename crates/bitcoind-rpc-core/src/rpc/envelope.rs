//! JSON-RPC 1.0 request and response envelopes.
//!
//! Bitcoin Core accepts the legacy 1.0 envelope with named (object) or
//! positional (array) parameters. The client does not pipeline calls over a
//! connection, so every request carries the same fixed correlation id unless
//! the caller picks its own.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, RpcError};

/// Protocol version marker sent in every request.
pub const JSONRPC_VERSION: f64 = 1.0;

/// Correlation id used when the caller does not supply one.
pub const DEFAULT_REQUEST_ID: &str = "bitcoind-rpc";

/// Correlation id. JSON-RPC 1.0 allows any number, a string, or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Num(serde_json::Number),
    Str(String),
    Null,
}

impl Default for RequestId {
    fn default() -> Self {
        Self::Str(DEFAULT_REQUEST_ID.to_owned())
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_owned())
    }
}

impl From<String> for RequestId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

impl From<u64> for RequestId {
    fn from(id: u64) -> Self {
        Self::Num(id.into())
    }
}

impl From<i64> for RequestId {
    fn from(id: i64) -> Self {
        Self::Num(id.into())
    }
}

/// A single call as it goes over the wire.
///
/// Deserialization fills in the version, id and an empty parameter object
/// when they are missing, so hand-written `{"method": ...}` batch items are
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub method: String,
    #[serde(default = "empty_params")]
    pub params: Value,
    #[serde(default = "default_version")]
    pub jsonrpc: f64,
    #[serde(default)]
    pub id: RequestId,
}

fn empty_params() -> Value {
    Value::Object(serde_json::Map::new())
}

fn default_version() -> f64 {
    JSONRPC_VERSION
}

impl JsonRpcRequest {
    /// Build an envelope for `method`. Missing params become `{}`; the shape
    /// of `params` is left for the node to judge.
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Result<Self, CoreError> {
        let method = method.into();
        if method.is_empty() {
            return Err(CoreError::InvalidRequest(
                "method name must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            method,
            params: params.unwrap_or_else(empty_params),
            jsonrpc: JSONRPC_VERSION,
            id: RequestId::default(),
        })
    }

    pub fn with_id(mut self, id: impl Into<RequestId>) -> Self {
        self.id = id.into();
        self
    }

    /// Re-check invariants on an envelope that was deserialized rather than
    /// built through [`JsonRpcRequest::new`].
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.method.is_empty() {
            return Err(CoreError::InvalidRequest(
                "method name must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Body of one HTTP exchange: a single envelope or an ordered batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestBody {
    Single(JsonRpcRequest),
    Batch(Vec<JsonRpcRequest>),
}

impl RequestBody {
    /// Number of calls carried by this body.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Batch(requests) => requests.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Method name for log fields; batches are labelled as such.
    pub fn method(&self) -> &str {
        match self {
            Self::Single(request) => &request.method,
            Self::Batch(_) => "<batch>",
        }
    }
}

impl From<JsonRpcRequest> for RequestBody {
    fn from(request: JsonRpcRequest) -> Self {
        Self::Single(request)
    }
}

impl From<Vec<JsonRpcRequest>> for RequestBody {
    fn from(requests: Vec<JsonRpcRequest>) -> Self {
        Self::Batch(requests)
    }
}

/// The node's reply to one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub id: Value,
}

impl JsonRpcResponse {
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        serde_json::from_value(value).map_err(|e| {
            RpcError::InvalidResponse(format!("decode JSON-RPC response: {e}")).into()
        })
    }

    /// Decode a raw batch reply. Items stay in the order the node sent them.
    pub fn batch_from_value(value: Value) -> Result<Vec<Self>, CoreError> {
        serde_json::from_value(value).map_err(|e| {
            RpcError::InvalidResponse(format!("decode JSON-RPC batch response: {e}")).into()
        })
    }

    /// Turn a populated `error` field into a [`CoreError`].
    ///
    /// The client never does this on its own; it is here for callers running
    /// in full-response mode that want strict error handling.
    pub fn into_result(self) -> Result<Value, CoreError> {
        match self.error {
            None | Some(Value::Null) => Ok(self.result),
            Some(err) => Err(match parse_error_object(&err) {
                Some((code, message)) => RpcError::Protocol { code, message }.into(),
                None => RpcError::InvalidResponse(format!("non-standard JSON-RPC error: {err}"))
                    .into(),
            }),
        }
    }
}

/// Pull `code` and `message` out of a JSON-RPC error object.
pub(crate) fn parse_error_object(err: &Value) -> Option<(i64, String)> {
    #[derive(Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    serde_json::from_value::<JsonRpcError>(err.clone())
        .ok()
        .map(|parsed| (parsed.code, parsed.message))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_defaults_params_to_empty_object() {
        let req = JsonRpcRequest::new("getblockcount", None).expect("valid method");
        assert_eq!(req.method, "getblockcount");
        assert_eq!(req.params, json!({}));
        assert_eq!(req.id, RequestId::Str(DEFAULT_REQUEST_ID.into()));
    }

    #[test]
    fn new_keeps_positional_params() {
        let req = JsonRpcRequest::new("getblockhash", Some(json!([0]))).expect("valid method");
        assert_eq!(req.params, json!([0]));
    }

    #[test]
    fn new_rejects_empty_method() {
        let err = JsonRpcRequest::new("", None).expect_err("must reject empty method");
        assert!(matches!(err, CoreError::InvalidRequest(_)));
    }

    #[test]
    fn request_serializes_to_wire_shape() {
        let req = JsonRpcRequest::new("abandontransaction", Some(json!({"txid": "abc"})))
            .expect("valid method");
        let wire = serde_json::to_value(&req).expect("serializable");
        assert_eq!(
            wire,
            json!({
                "method": "abandontransaction",
                "params": {"txid": "abc"},
                "jsonrpc": 1.0,
                "id": DEFAULT_REQUEST_ID,
            })
        );
    }

    #[test]
    fn with_id_overrides_correlation_id() {
        let req = JsonRpcRequest::new("ping", None)
            .expect("valid method")
            .with_id(7u64);
        assert_eq!(serde_json::to_value(&req).expect("serializable")["id"], json!(7));
    }

    #[test]
    fn batch_body_serializes_as_array() {
        let body = RequestBody::from(vec![
            JsonRpcRequest::new("getblockcount", None).expect("valid"),
            JsonRpcRequest::new("getdifficulty", None).expect("valid"),
        ]);
        let wire = serde_json::to_value(&body).expect("serializable");
        let items = wire.as_array().expect("batch must be an array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["method"], "getblockcount");
        assert_eq!(items[1]["method"], "getdifficulty");
        assert_eq!(body.method(), "<batch>");
    }

    #[test]
    fn deserialize_fills_missing_envelope_fields() {
        let req: JsonRpcRequest =
            serde_json::from_value(json!({"method": "uptime"})).expect("must deserialize");
        assert_eq!(req.params, json!({}));
        assert_eq!(req.jsonrpc, JSONRPC_VERSION);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn deserialize_accepts_any_json_rpc_id() {
        let negative: JsonRpcRequest =
            serde_json::from_value(json!({"method": "getblockcount", "id": -1}))
                .expect("negative id");
        assert_eq!(negative.id, RequestId::from(-1i64));

        let fractional: JsonRpcRequest =
            serde_json::from_value(json!({"method": "getblockcount", "id": 1.5}))
                .expect("fractional id");
        assert_eq!(
            serde_json::to_value(&fractional).expect("serializable")["id"],
            json!(1.5)
        );

        let null: JsonRpcRequest =
            serde_json::from_value(json!({"method": "getblockcount", "id": null}))
                .expect("null id");
        assert_eq!(null.id, RequestId::Null);
        assert_eq!(serde_json::to_value(&null).expect("serializable")["id"], Value::Null);
    }

    #[test]
    fn into_result_passes_success_through() {
        let resp = JsonRpcResponse::from_value(json!({"result": 700000, "error": null, "id": "x"}))
            .expect("must decode");
        assert_eq!(resp.into_result().expect("no error"), json!(700000));
    }

    #[test]
    fn into_result_surfaces_protocol_error() {
        let resp = JsonRpcResponse::from_value(json!({
            "result": null,
            "error": {"code": -5, "message": "not found"},
            "id": "x"
        }))
        .expect("must decode");
        let err = resp.into_result().expect_err("error field must surface");
        assert!(matches!(
            err,
            CoreError::Rpc(RpcError::Protocol { code: -5, ref message }) if message == "not found"
        ));
    }

    #[test]
    fn into_result_rejects_non_standard_error() {
        let resp = JsonRpcResponse::from_value(json!({"result": null, "error": "boom"}))
            .expect("must decode");
        assert!(matches!(
            resp.into_result(),
            Err(CoreError::Rpc(RpcError::InvalidResponse(_)))
        ));
    }
}
