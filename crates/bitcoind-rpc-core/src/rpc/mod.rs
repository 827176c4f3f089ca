//! Bitcoin Core JSON-RPC client core.
//!
//! Builds envelopes ([`envelope`]), picks the destination path
//! ([`routing`]), posts through an [`RpcTransport`](crate::transport::RpcTransport)
//! and unwraps replies ([`normalize`]). [`RpcClient`] ties these together.

mod client;
pub mod envelope;
pub mod normalize;
pub mod routing;

pub use client::{to_params, RpcClient};
pub use envelope::{JsonRpcRequest, JsonRpcResponse, RequestBody, RequestId};
pub use routing::{RoutePath, Scope};
