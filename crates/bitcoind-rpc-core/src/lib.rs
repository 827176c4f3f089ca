pub mod config;
pub mod error;
pub mod methods;
pub mod rpc;
pub mod transport;

pub use config::ClientConfig;
pub use error::{CoreError, RpcError};
pub use methods::MethodSpec;
pub use rpc::{RoutePath, RpcClient, Scope};
