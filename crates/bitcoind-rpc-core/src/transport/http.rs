use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{header, Url};
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{CoreError, RpcError};
use crate::rpc::envelope::{parse_error_object, RequestBody};
use crate::rpc::routing::RoutePath;

use super::RpcTransport;

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Bitcoin Core JSON-RPC transport over HTTP(S) with basic auth.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
    auth: (String, String),
    limiter: Option<DirectRateLimiter>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .pool_max_idle_per_host(32)
            .tcp_nodelay(true)
            .build()
            .map_err(RpcError::Transport)?;

        let limiter = config
            .requests_per_second()
            .map(|limit| RateLimiter::direct(Quota::per_second(limit)));

        Ok(Self {
            client,
            endpoint: config.endpoint().clone(),
            auth: (config.user().to_owned(), config.pass().to_owned()),
            limiter,
        })
    }

    async fn wait_for_rate_limit(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }

    /// Full URL for `path`. Wallet names are pushed as a single
    /// percent-encoded path segment.
    fn url_for(&self, path: &RoutePath) -> Result<Url, CoreError> {
        let mut url = self.endpoint.clone();
        if let RoutePath::Wallet(name) = path {
            url.path_segments_mut()
                .map_err(|()| {
                    CoreError::Config(format!("endpoint {} cannot carry a path", self.endpoint))
                })?
                .pop_if_empty()
                .push("wallet")
                .push(name);
        }
        Ok(url)
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn post(&self, path: &RoutePath, body: &RequestBody) -> Result<Value, CoreError> {
        self.wait_for_rate_limit().await;
        let url = self.url_for(path)?;
        debug!(
            rpc.method = body.method(),
            rpc.path = %path,
            rpc.batch_size = body.len(),
            "rpc call"
        );

        let (user, pass) = &self.auth;
        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .basic_auth(user, Some(pass))
            .json(body)
            .send()
            .await
            .map_err(RpcError::Transport)?;
        let status = response.status();

        let text = response.text().await.map_err(RpcError::Transport)?;
        debug!(
            rpc.method = body.method(),
            rpc.path = %path,
            %status,
            body_len = text.len(),
            "rpc response"
        );

        if !status.is_success() {
            return Err(status_error(status.as_u16(), text));
        }

        serde_json::from_str(&text).map_err(|e| {
            RpcError::InvalidResponse(format!("decode JSON-RPC response: {e}; body={text}")).into()
        })
    }
}

/// Map a non-2xx reply to an error. bitcoind sends RPC failures as HTTP
/// 500/404 with an error envelope; when that envelope is present its code
/// and message are lifted out.
fn status_error(status: u16, body: String) -> CoreError {
    let envelope_error = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|value| value.get("error").and_then(parse_error_object));

    match envelope_error {
        Some((code, message)) => RpcError::ServerError {
            status,
            code,
            message,
        }
        .into(),
        None => RpcError::HttpStatus { status, body }.into(),
    }
}
