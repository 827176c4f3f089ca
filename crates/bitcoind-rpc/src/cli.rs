use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// bitcoind-rpc: call Bitcoin Core JSON-RPC procedures from the shell.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Node RPC host.
    #[arg(long, default_value = "127.0.0.1", env = "BITCOIND_RPC_HOST")]
    pub rpc_host: String,

    /// Node RPC port.
    #[arg(long, default_value = "8332", env = "BITCOIND_RPC_PORT")]
    pub rpc_port: u16,

    /// `http` or `https`.
    #[arg(long, default_value = "http", env = "BITCOIND_RPC_SCHEME")]
    pub rpc_scheme: String,

    /// RPC username (defaults to empty).
    #[arg(long, env = "BITCOIND_RPC_USER")]
    pub rpc_user: Option<String>,

    /// RPC password. Required unless --rpc-cookie-file is given.
    #[arg(long, env = "BITCOIND_RPC_PASS")]
    pub rpc_pass: Option<String>,

    /// bitcoind `.cookie` file to read credentials from.
    #[arg(long, env = "BITCOIND_RPC_COOKIE_FILE")]
    pub rpc_cookie_file: Option<PathBuf>,

    /// Wallet for wallet-scoped procedures and batches.
    #[arg(long, env = "BITCOIND_RPC_WALLET")]
    pub wallet: Option<String>,

    /// Print the whole JSON-RPC reply instead of only `result`.
    #[arg(long)]
    pub full_response: bool,

    /// Whole-request timeout in seconds.
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Maximum outbound requests per second.
    #[arg(long)]
    pub requests_per_second: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Call one procedure and print its reply.
    Call {
        /// Procedure name, e.g. `getblockcount`.
        method: String,
        /// Parameters as a JSON object (named) or array (positional).
        params: Option<String>,
    },
    /// Submit several calls in one HTTP exchange and print the raw replies.
    Batch {
        /// JSON array of `{"method": ..., "params": ...}` objects, or
        /// `@path` to read it from a file.
        requests: String,
    },
    /// List the catalogued procedures and their scope.
    Methods,
}
