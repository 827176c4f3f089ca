//! End-to-end tests of the HTTP transport against an in-process fake node.

use std::sync::{Arc, Mutex, Once};
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use bitcoind_rpc_core::config::ClientConfigBuilder;
use bitcoind_rpc_core::methods::params::TxIdParams;
use bitcoind_rpc_core::rpc::{JsonRpcRequest, JsonRpcResponse};
use bitcoind_rpc_core::{ClientConfig, CoreError, RoutePath, RpcClient, RpcError};
use serde_json::{json, Value};

static TRACING_INIT: Once = Once::new();

const SECRET_KEY: &str = "cVt4o7BGAig1UXywgGSmARhxMdzP5qvQsxKkSsc1XEkw3tDTQFpy";

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("bitcoind_rpc_core=debug")
                }),
            )
            .with_test_writer()
            .try_init();
    });
}

// ==============================================================================
// Fake node
// ==============================================================================

#[derive(Debug, Clone)]
struct Seen {
    path: String,
    authorization: Option<String>,
    body: Value,
}

#[derive(Clone, Default)]
struct FakeNode {
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl FakeNode {
    fn seen(&self) -> Vec<Seen> {
        self.seen.lock().expect("fake node lock poisoned").clone()
    }

    fn last(&self) -> Seen {
        self.seen().pop().expect("fake node must have been called")
    }
}

fn envelope(result: Value, id: &Value) -> Value {
    json!({"result": result, "error": null, "id": id})
}

fn answer(request: &Value) -> Value {
    let id = request.get("id").cloned().unwrap_or(Value::Null);
    match request.get("method").and_then(Value::as_str) {
        Some("getblockcount") => envelope(json!(700000), &id),
        Some("getconnectioncount") => envelope(json!(8), &id),
        Some("dumpprivkey") => envelope(json!(SECRET_KEY), &id),
        Some("getmempoolentry") => json!({
            "result": null,
            "error": {"code": -5, "message": "not found"},
            "id": id
        }),
        _ => envelope(Value::Null, &id),
    }
}

async fn handle(
    State(node): State<FakeNode>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    node.seen
        .lock()
        .expect("fake node lock poisoned")
        .push(Seen {
            path: uri.path().to_owned(),
            authorization: headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned),
            body: body.clone(),
        });

    if let Some(batch) = body.as_array() {
        let replies: Vec<Value> = batch.iter().map(answer).collect();
        return Json(Value::Array(replies)).into_response();
    }

    match body.get("method").and_then(Value::as_str) {
        Some("boom") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "result": null,
                "error": {"code": -32603, "message": "Internal error"},
                "id": body["id"]
            })),
        )
            .into_response(),
        Some("plaintext") => (StatusCode::INTERNAL_SERVER_ERROR, "oops").into_response(),
        Some("notjson") => (StatusCode::OK, "definitely not json").into_response(),
        _ => Json(answer(&body)).into_response(),
    }
}

async fn spawn_fake_node() -> (FakeNode, u16) {
    init_tracing();
    let node = FakeNode::default();
    let router = Router::new()
        .route("/", post(handle))
        .route("/wallet/{name}", post(handle))
        .with_state(node.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port must bind");
    let port = listener.local_addr().expect("local addr").port();
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("fake node must serve");
    });
    (node, port)
}

fn client(
    port: u16,
    configure: impl FnOnce(ClientConfigBuilder) -> ClientConfigBuilder,
) -> RpcClient {
    let builder = ClientConfig::builder().host("127.0.0.1").port(port);
    let config = configure(builder).build().expect("config must build");
    RpcClient::new(config).expect("client must build")
}

// ==============================================================================
// Tests
// ==============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn node_call_posts_envelope_to_root_with_basic_auth() {
    let (node, port) = spawn_fake_node().await;
    let rpc = client(port, |b| b.pass("x"));

    let count = rpc.get_block_count().await.expect("call must succeed");
    assert_eq!(count, json!(700000));

    let seen = node.last();
    assert_eq!(seen.path, "/");
    assert_eq!(seen.authorization.as_deref(), Some("Basic Ong="));
    assert_eq!(seen.body["method"], "getblockcount");
    assert_eq!(seen.body["params"], json!({}));
    assert_eq!(seen.body["jsonrpc"], json!(1.0));
    assert_eq!(seen.body["id"], "bitcoind-rpc");
}

#[tokio::test(flavor = "multi_thread")]
async fn wallet_calls_route_to_wallet_paths() {
    let (node, port) = spawn_fake_node().await;
    let rpc = client(port, |b| b.user("alice").pass("secret").wallet("alice"));

    rpc.abandon_transaction(TxIdParams::new("abc"), None)
        .await
        .expect("default wallet call");
    let seen = node.last();
    assert_eq!(seen.path, "/wallet/alice");
    assert_eq!(seen.authorization.as_deref(), Some("Basic YWxpY2U6c2VjcmV0"));
    assert_eq!(seen.body["params"], json!({"txid": "abc"}));

    rpc.abandon_transaction(TxIdParams::new("abc"), Some("bob"))
        .await
        .expect("override wallet call");
    assert_eq!(node.last().path, "/wallet/bob");

    rpc.get_wallet_info(Some("cold storage"))
        .await
        .expect("encoded wallet call");
    assert_eq!(node.last().path, "/wallet/cold%20storage");
}

#[tokio::test(flavor = "multi_thread")]
async fn http_500_with_envelope_surfaces_server_error() {
    let (node, port) = spawn_fake_node().await;
    let rpc = client(port, |b| b.pass("x"));

    let err = rpc.rpc("boom", None, None).await.expect_err("500 must fail");
    assert!(matches!(
        err,
        CoreError::Rpc(RpcError::ServerError {
            status: 500,
            code: -32603,
            ..
        })
    ));
    assert_eq!(node.seen().len(), 1, "failed call must not be retried");
}

#[tokio::test(flavor = "multi_thread")]
async fn http_500_without_envelope_keeps_body() {
    let (_node, port) = spawn_fake_node().await;
    let rpc = client(port, |b| b.pass("x"));

    let err = rpc
        .rpc("plaintext", None, None)
        .await
        .expect_err("500 must fail");
    assert!(matches!(
        err,
        CoreError::Rpc(RpcError::HttpStatus { status: 500, ref body }) if body == "oops"
    ));
    assert_eq!(err.http_status(), Some(500));
}

#[tokio::test(flavor = "multi_thread")]
async fn non_json_success_body_is_invalid_response() {
    let (_node, port) = spawn_fake_node().await;
    let rpc = client(port, |b| b.pass("x"));

    let err = rpc
        .rpc("notjson", None, None)
        .await
        .expect_err("non-JSON must fail");
    assert!(matches!(err, CoreError::Rpc(RpcError::InvalidResponse(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn protocol_error_handling_depends_on_full_response() {
    let (_node, port) = spawn_fake_node().await;

    let unwrapping = client(port, |b| b.pass("x"));
    let result = unwrapping
        .get_mempool_entry(TxIdParams::new("abc"))
        .await
        .expect("2xx reply must not fail");
    assert_eq!(result, Value::Null);

    let full = client(port, |b| b.pass("x").full_response(true));
    let response = full
        .get_mempool_entry(TxIdParams::new("abc"))
        .await
        .expect("2xx reply must not fail");
    assert_eq!(response["error"], json!({"code": -5, "message": "not found"}));

    let strict = JsonRpcResponse::from_value(response)
        .expect("envelope must decode")
        .into_result();
    assert!(matches!(
        strict,
        Err(CoreError::Rpc(RpcError::Protocol { code: -5, .. }))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn batch_is_one_exchange_with_ordered_replies() {
    let (node, port) = spawn_fake_node().await;
    let rpc = client(port, |b| b.pass("x"));

    let requests = vec![
        JsonRpcRequest::new("getconnectioncount", None)
            .expect("valid")
            .with_id(1u64),
        JsonRpcRequest::new("getblockcount", None)
            .expect("valid")
            .with_id(2u64),
    ];
    let raw = rpc
        .batch(requests, &RoutePath::Node)
        .await
        .expect("batch must succeed");

    let replies = JsonRpcResponse::batch_from_value(raw).expect("batch must decode");
    let results: Vec<_> = replies.into_iter().map(|r| r.result).collect();
    assert_eq!(results, vec![json!(8), json!(700000)]);

    let seen = node.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].path, "/");
    assert_eq!(
        seen[0].body.as_array().map(Vec::len),
        Some(2),
        "batch must be posted as a single array"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn rate_limit_spaces_exchanges_and_counts_a_batch_once() {
    let (node, port) = spawn_fake_node().await;
    let rpc = client(port, |b| b.pass("x").requests_per_second(1));

    let started = Instant::now();
    rpc.get_block_count().await.expect("first call");
    rpc.get_connection_count().await.expect("second call");
    let batch = vec![
        JsonRpcRequest::new("getblockcount", None).expect("valid"),
        JsonRpcRequest::new("getconnectioncount", None).expect("valid"),
    ];
    rpc.batch(batch, &RoutePath::Node).await.expect("batch call");
    let elapsed = started.elapsed();

    assert!(
        elapsed >= Duration::from_millis(1900),
        "three exchanges at 1 rps must take about 2s, took {elapsed:?}"
    );
    assert_eq!(node.seen().len(), 3);
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log lock poisoned")).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .expect("log lock poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Current-thread runtime so the thread-local subscriber sees every event.
#[tokio::test]
async fn reply_bodies_stay_out_of_the_logs() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let (_node, port) = spawn_fake_node().await;
    let rpc = client(port, |b| b.user("alice").pass("hunter2").wallet("alice"));
    let key = rpc
        .rpc("dumpprivkey", Some(json!({"address": "bcrt1qexample"})), None)
        .await
        .expect("call must succeed");
    assert_eq!(key, json!(SECRET_KEY));

    let text = logs.text();
    assert!(text.contains("rpc response"), "debug events must be captured: {text}");
    assert!(!text.contains(SECRET_KEY), "reply body leaked into logs: {text}");
    assert!(!text.contains("hunter2"), "password leaked into logs: {text}");
}

#[tokio::test(flavor = "multi_thread")]
async fn connection_refused_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port must bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let rpc = client(port, |b| b.pass("x"));
    let err = rpc
        .get_block_count()
        .await
        .expect_err("closed port must fail");
    assert!(matches!(err, CoreError::Rpc(RpcError::Transport(_))));
}
