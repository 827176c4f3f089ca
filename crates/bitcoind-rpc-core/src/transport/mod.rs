//! HTTP transport abstraction.
//!
//! Defines the [`RpcTransport`] trait the client posts envelopes through and
//! provides the `reqwest` implementation ([`HttpTransport`]) plus a recording
//! test mock (`mock::MockTransport`).

mod http;
#[cfg(test)]
pub mod mock;

pub use http::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::CoreError;
use crate::rpc::envelope::RequestBody;
use crate::rpc::routing::RoutePath;

/// One HTTP POST of a JSON body to a path on the node.
///
/// Implementations handle authentication and connection management, and
/// report network failures, non-2xx statuses and non-JSON bodies as errors.
/// They must not retry, split or reorder what they are given.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn post(&self, path: &RoutePath, body: &RequestBody) -> Result<Value, CoreError>;
}
