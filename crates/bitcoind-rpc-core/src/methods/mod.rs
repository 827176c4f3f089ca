//! Typed call surface for the node's procedures.
//!
//! Each category module declares its procedures once with `rpc_methods!`,
//! which produces both the category's entry in the [`CATEGORIES`] catalog
//! and one async method on [`RpcClient`](crate::rpc::RpcClient) per
//! procedure. Node-scoped methods always go to `/`; wallet-scoped ones take
//! an optional wallet override and otherwise use the configured default.

use crate::rpc::routing::Scope;

/// Declare a category of procedures.
///
/// ```text
/// rpc_methods! {
///     /// docs
///     node fn get_block_count() => "getblockcount";
///     wallet fn abandon_transaction(params: TxIdParams) => "abandontransaction";
/// }
/// ```
macro_rules! rpc_methods {
    ($(
        $(#[$meta:meta])*
        $scope:ident fn $fn_name:ident($($param:ident: $ty:ty)?) => $rpc:literal;
    )*) => {
        /// Procedures in this category, in declaration order.
        pub const METHODS: &[$crate::methods::MethodSpec] = &[
            $($crate::methods::MethodSpec::$scope($rpc),)*
        ];

        impl $crate::rpc::RpcClient {
            $(rpc_methods!(@method $scope $(#[$meta])* $fn_name($($param: $ty)?) => $rpc);)*
        }
    };

    (@method node $(#[$meta:meta])* $fn_name:ident() => $rpc:literal) => {
        $(#[$meta])*
        pub async fn $fn_name(
            &self,
        ) -> Result<::serde_json::Value, $crate::error::CoreError> {
            self.call(&$crate::methods::MethodSpec::node($rpc), None, None)
                .await
        }
    };
    (@method node $(#[$meta:meta])* $fn_name:ident($param:ident: $ty:ty) => $rpc:literal) => {
        $(#[$meta])*
        pub async fn $fn_name(
            &self,
            $param: $ty,
        ) -> Result<::serde_json::Value, $crate::error::CoreError> {
            let params = $crate::rpc::to_params(&$param)?;
            self.call(&$crate::methods::MethodSpec::node($rpc), Some(params), None)
                .await
        }
    };
    (@method wallet $(#[$meta:meta])* $fn_name:ident() => $rpc:literal) => {
        $(#[$meta])*
        pub async fn $fn_name(
            &self,
            wallet: Option<&str>,
        ) -> Result<::serde_json::Value, $crate::error::CoreError> {
            self.call(&$crate::methods::MethodSpec::wallet($rpc), None, wallet)
                .await
        }
    };
    (@method wallet $(#[$meta:meta])* $fn_name:ident($param:ident: $ty:ty) => $rpc:literal) => {
        $(#[$meta])*
        pub async fn $fn_name(
            &self,
            $param: $ty,
            wallet: Option<&str>,
        ) -> Result<::serde_json::Value, $crate::error::CoreError> {
            let params = $crate::rpc::to_params(&$param)?;
            self.call(&$crate::methods::MethodSpec::wallet($rpc), Some(params), wallet)
                .await
        }
    };
}

pub mod blockchain;
pub mod control;
pub mod generating;
pub mod mining;
pub mod network;
pub mod params;
pub mod rawtransactions;
pub mod util;
pub mod wallet;
pub mod zmq;

/// A remote procedure: its wire name and whether it is wallet-scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodSpec {
    pub name: &'static str,
    pub scope: Scope,
}

impl MethodSpec {
    pub const fn node(name: &'static str) -> Self {
        Self {
            name,
            scope: Scope::Node,
        }
    }

    pub const fn wallet(name: &'static str) -> Self {
        Self {
            name,
            scope: Scope::Wallet,
        }
    }

    /// Find a procedure in the catalog by its wire name.
    pub fn lookup(name: &str) -> Option<&'static MethodSpec> {
        catalog().find(|method| method.name == name)
    }
}

/// Every catalogued procedure, grouped the way `bitcoind help` groups them.
pub const CATEGORIES: &[(&str, &[MethodSpec])] = &[
    ("blockchain", blockchain::METHODS),
    ("control", control::METHODS),
    ("generating", generating::METHODS),
    ("mining", mining::METHODS),
    ("network", network::METHODS),
    ("rawtransactions", rawtransactions::METHODS),
    ("util", util::METHODS),
    ("wallet", wallet::METHODS),
    ("zmq", zmq::METHODS),
];

pub fn catalog() -> impl Iterator<Item = &'static MethodSpec> {
    CATEGORIES.iter().flat_map(|(_, methods)| methods.iter())
}
