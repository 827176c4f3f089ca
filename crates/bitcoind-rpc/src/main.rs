mod cli;

use std::time::Duration;

use bitcoind_rpc_core::methods::CATEGORIES;
use bitcoind_rpc_core::rpc::JsonRpcRequest;
use bitcoind_rpc_core::{ClientConfig, CoreError, RoutePath, RpcClient, RpcError};
use clap::Parser;
use eyre::{eyre, WrapErr};
use serde_json::Value;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so stdout carries only JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    if let Command::Methods = args.command {
        print_catalog();
        return Ok(());
    }

    let config = build_config(&args).wrap_err("invalid RPC client configuration")?;
    let endpoint = config.endpoint().to_string();
    let rpc = RpcClient::new(config).wrap_err("failed to create RPC client")?;
    let wallet = args.wallet.as_deref();

    let output = match &args.command {
        Command::Call { method, params } => {
            let params = params
                .as_deref()
                .map(serde_json::from_str::<Value>)
                .transpose()
                .wrap_err("params must be valid JSON")?;
            rpc.call_named(method, params, wallet).await
        }
        Command::Batch { requests } => {
            let requests = load_batch(requests).await?;
            tracing::debug!(batch_size = requests.len(), "submitting batch");
            rpc.batch(requests, &RoutePath::resolve(wallet, None)).await
        }
        Command::Methods => return Ok(()),
    }
    .map_err(|err| eyre!(format_rpc_error(&endpoint, &err)))?;

    println!(
        "{}",
        serde_json::to_string_pretty(&output).wrap_err("failed to render reply")?
    );
    Ok(())
}

fn build_config(args: &Cli) -> Result<ClientConfig, CoreError> {
    let mut builder = ClientConfig::builder()
        .scheme(args.rpc_scheme.as_str())
        .host(args.rpc_host.as_str())
        .port(args.rpc_port)
        .full_response(args.full_response)
        .timeout(Duration::from_secs(args.timeout_secs));
    if let Some(user) = &args.rpc_user {
        builder = builder.user(user.as_str());
    }
    if let Some(pass) = &args.rpc_pass {
        builder = builder.pass(pass.as_str());
    }
    if let Some(cookie_file) = &args.rpc_cookie_file {
        builder = builder.cookie_file(cookie_file);
    }
    if let Some(wallet) = &args.wallet {
        builder = builder.wallet(wallet.as_str());
    }
    if let Some(limit) = args.requests_per_second {
        builder = builder.requests_per_second(limit);
    }
    builder.build()
}

/// Parse batch input: inline JSON or `@path`. A single object is accepted as
/// a batch of one.
async fn load_batch(input: &str) -> eyre::Result<Vec<JsonRpcRequest>> {
    let text = match input.strip_prefix('@') {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("failed to read batch file {path}"))?,
        None => input.to_owned(),
    };

    let value: Value = serde_json::from_str(&text).wrap_err("batch must be valid JSON")?;
    let requests: Result<Vec<JsonRpcRequest>, _> = if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|request| vec![request])
    };
    let requests = requests
        .wrap_err("batch items must look like {\"method\": ..., \"params\": ...}")?;

    for (index, request) in requests.iter().enumerate() {
        request
            .validate()
            .wrap_err_with(|| format!("batch item {index}"))?;
    }
    Ok(requests)
}

fn print_catalog() {
    for (category, methods) in CATEGORIES {
        println!("== {category}");
        for method in methods.iter() {
            println!("  {:<32} {}", method.name, method.scope);
        }
    }
}

const TIMEOUT_HINT: &str =
    "hint: request timed out; the node may be busy, try a larger --timeout-secs";
const CONNECT_HINT: &str =
    "hint: could not connect; verify bitcoind is running with -server and the host/port";
const DNS_HINT: &str =
    "hint: hostname resolution failed; verify --rpc-host and your DNS/network";
const TLS_HINT: &str =
    "hint: TLS handshake failed; verify certificate trust and that the node serves HTTPS";

fn format_rpc_error(endpoint: &str, err: &CoreError) -> String {
    let mut lines = vec![
        format!("RPC call to `{endpoint}` failed"),
        format!("RPC error: {err}"),
    ];

    let hint = match err {
        CoreError::Rpc(RpcError::Transport(source)) if source.is_timeout() => Some(TIMEOUT_HINT),
        CoreError::Rpc(RpcError::Transport(source)) => network_hint(&error_chain(source))
            .or_else(|| source.is_connect().then_some(CONNECT_HINT)),
        CoreError::Rpc(RpcError::ServerError { code: -18, .. }) => Some(
            "hint: wallet not found or not loaded; check --wallet or run `loadwallet` first",
        ),
        CoreError::Rpc(RpcError::ServerError { code: -19, .. }) => {
            Some("hint: several wallets are loaded; pass --wallet to pick one")
        }
        _ => match err.http_status() {
            Some(401) | Some(403) => {
                Some("hint: authentication failed; verify --rpc-user/--rpc-pass or the cookie file")
            }
            Some(404) => Some(
                "hint: endpoint path or procedure not found; verify the wallet name and method",
            ),
            _ => None,
        },
    };
    if let Some(hint) = hint {
        lines.push(hint.to_owned());
    }

    lines.join("\n")
}

/// reqwest keeps the resolver and TLS details in the source chain, not in
/// the top-level message.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut next = err.source();
    while let Some(source) = next {
        text.push_str(": ");
        text.push_str(&source.to_string());
        next = source.source();
    }
    text
}

fn network_hint(chain: &str) -> Option<&'static str> {
    let chain = chain.to_lowercase();
    if chain.contains("dns error")
        || chain.contains("could not resolve host")
        || chain.contains("failed to lookup address")
    {
        Some(DNS_HINT)
    } else if chain.contains("tls") || chain.contains("certificate") || chain.contains("ssl") {
        Some(TLS_HINT)
    } else {
        None
    }
}
