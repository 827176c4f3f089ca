use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::methods::MethodSpec;
use crate::transport::{HttpTransport, RpcTransport};

use super::envelope::{JsonRpcRequest, RequestBody};
use super::normalize::normalize;
use super::routing::RoutePath;

/// Typed JSON-RPC client for one Bitcoin Core node.
///
/// Holds an immutable [`ClientConfig`] and a transport; it keeps no other
/// state, so a single instance can be shared (e.g. behind an `Arc`) and used
/// from concurrent tasks. The per-procedure methods live in
/// [`crate::methods`].
pub struct RpcClient {
    config: ClientConfig,
    transport: Arc<dyn RpcTransport>,
}

impl RpcClient {
    /// Create a client talking HTTP to the node described by `config`.
    pub fn new(config: ClientConfig) -> Result<Self, CoreError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn RpcTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Post one envelope or an ordered batch to `path` in a single exchange
    /// and return the parsed reply untouched.
    pub async fn batch(
        &self,
        body: impl Into<RequestBody>,
        path: &RoutePath,
    ) -> Result<Value, CoreError> {
        let body = body.into();
        self.transport.post(path, &body).await
    }

    /// Call `method` with `params` (`{}` when `None`).
    ///
    /// This is the raw entry point: the call goes to `wallet`'s path when one
    /// is given and to the node root otherwise. The configured default wallet
    /// is not consulted here; see [`RpcClient::call`].
    pub async fn rpc(
        &self,
        method: &str,
        params: Option<Value>,
        wallet: Option<&str>,
    ) -> Result<Value, CoreError> {
        let request = JsonRpcRequest::new(method, params)?;
        self.send(request, &RoutePath::resolve(wallet, None)).await
    }

    /// Call a catalogued procedure. Wallet-scoped procedures go to the
    /// override wallet, else the configured default, else the node root.
    pub async fn call(
        &self,
        method: &MethodSpec,
        params: Option<Value>,
        wallet: Option<&str>,
    ) -> Result<Value, CoreError> {
        let path = method.scope.route(wallet, self.config.wallet());
        let request = JsonRpcRequest::new(method.name, params)?;
        self.send(request, &path).await
    }

    /// Call a procedure by name, looking up its scope in the catalog.
    /// Names the catalog does not know are routed like [`RpcClient::rpc`]:
    /// to `wallet` when given, otherwise to the node root.
    pub async fn call_named(
        &self,
        name: &str,
        params: Option<Value>,
        wallet: Option<&str>,
    ) -> Result<Value, CoreError> {
        match MethodSpec::lookup(name) {
            Some(method) => self.call(method, params, wallet).await,
            None => {
                warn!(rpc.method = name, "procedure not in catalog");
                self.rpc(name, params, wallet).await
            }
        }
    }

    async fn send(&self, request: JsonRpcRequest, path: &RoutePath) -> Result<Value, CoreError> {
        let response = self.batch(request, path).await?;
        Ok(normalize(response, self.config.full_response()))
    }
}

/// Encode a typed parameter record as the JSON `params` member.
pub fn to_params<P: Serialize + ?Sized>(params: &P) -> Result<Value, CoreError> {
    Ok(serde_json::to_value(params)?)
}
