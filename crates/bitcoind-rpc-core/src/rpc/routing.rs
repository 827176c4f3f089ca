//! Destination path selection.
//!
//! Node-level procedures go to `/`. Wallet procedures go to
//! `/wallet/<name>`, where the name comes from the per-call override first
//! and the client's configured default second. An empty name counts as
//! absent.

use std::fmt;

/// Fixed prefix of every wallet-scoped path.
pub const WALLET_PATH_PREFIX: &str = "/wallet/";

/// Where a call is sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoutePath {
    /// The node root, `/`.
    Node,
    /// A loaded wallet's endpoint, `/wallet/<name>`.
    Wallet(String),
}

impl RoutePath {
    /// Resolve the path for a call. `explicit` wins over `default`; with
    /// neither, the call goes to the node root and the node decides whether
    /// that is acceptable.
    pub fn resolve(explicit: Option<&str>, default: Option<&str>) -> Self {
        match non_empty(explicit).or_else(|| non_empty(default)) {
            Some(name) => Self::Wallet(name.to_owned()),
            None => Self::Node,
        }
    }

    pub fn wallet(&self) -> Option<&str> {
        match self {
            Self::Node => None,
            Self::Wallet(name) => Some(name),
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => f.write_str("/"),
            Self::Wallet(name) => write!(f, "{WALLET_PATH_PREFIX}{name}"),
        }
    }
}

fn non_empty(name: Option<&str>) -> Option<&str> {
    name.filter(|name| !name.is_empty())
}

/// Whether a procedure acts on the node as a whole or on one wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Node,
    Wallet,
}

impl Scope {
    /// Node procedures ignore wallets entirely; wallet procedures fall back
    /// to the configured default when no override is given.
    pub fn route(self, explicit: Option<&str>, default: Option<&str>) -> RoutePath {
        match self {
            Self::Node => RoutePath::Node,
            Self::Wallet => RoutePath::resolve(explicit, default),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => f.write_str("node"),
            Self::Wallet => f.write_str("wallet"),
        }
    }
}
