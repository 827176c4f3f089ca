/// Failures raised while exchanging a request with the node.
///
/// Every variant is fatal to the call that produced it; nothing here is
/// retried or recovered by the client.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("HTTP transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("RPC server error {code}: {message} (HTTP status {status})")]
    ServerError {
        status: u16,
        code: i64,
        message: String,
    },

    /// A 2xx reply whose envelope carried an `error` object. Only produced
    /// on request, see `JsonRpcResponse::into_result`.
    #[error("RPC error {code}: {message}")]
    Protocol { code: i64, message: String },

    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("RPC communication failure: {0}")]
    Rpc(#[from] RpcError),

    #[error("invalid client configuration: {0}")]
    Config(String),

    #[error("invalid RPC request: {0}")]
    InvalidRequest(String),

    #[error("failed to encode RPC parameters: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CoreError {
    /// HTTP status of the failed exchange, when the node answered at all.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Rpc(RpcError::HttpStatus { status, .. })
            | Self::Rpc(RpcError::ServerError { status, .. }) => Some(*status),
            Self::Rpc(RpcError::Transport(err)) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
