//! Client configuration.
//!
//! A [`ClientConfig`] is built once through [`ClientConfig::builder`] and
//! never changes afterwards. Credential and connection problems are reported
//! by [`ClientConfigBuilder::build`], before any call is attempted.

mod connection;

use std::fmt;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::error::CoreError;

use connection::{parse_connection, resolve_auth};

pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8332;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct ClientConfig {
    user: String,
    pass: String,
    wallet: Option<String>,
    full_response: bool,
    endpoint: Url,
    timeout: Duration,
    connect_timeout: Duration,
    requests_per_second: Option<NonZeroU32>,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn pass(&self) -> &str {
        &self.pass
    }

    /// Default wallet for wallet-scoped procedures.
    pub fn wallet(&self) -> Option<&str> {
        self.wallet.as_deref()
    }

    /// Whether calls return the whole envelope instead of only `result`.
    pub fn full_response(&self) -> bool {
        self.full_response
    }

    /// Root URL of the node, e.g. `http://127.0.0.1:8332/`.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn requests_per_second(&self) -> Option<NonZeroU32> {
        self.requests_per_second
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .field("wallet", &self.wallet)
            .field("full_response", &self.full_response)
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("requests_per_second", &self.requests_per_second)
            .finish()
    }
}

#[derive(Default)]
pub struct ClientConfigBuilder {
    user: Option<String>,
    pass: Option<String>,
    cookie_file: Option<PathBuf>,
    wallet: Option<String>,
    full_response: bool,
    scheme: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    requests_per_second: Option<u32>,
}

impl ClientConfigBuilder {
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn pass(mut self, pass: impl Into<String>) -> Self {
        self.pass = Some(pass.into());
        self
    }

    /// Read credentials from a bitcoind `.cookie` file when no password is
    /// given explicitly.
    pub fn cookie_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.cookie_file = Some(path.into());
        self
    }

    pub fn wallet(mut self, wallet: impl Into<String>) -> Self {
        self.wallet = Some(wallet.into());
        self
    }

    pub fn full_response(mut self, full_response: bool) -> Self {
        self.full_response = full_response;
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Cap outbound HTTP requests per second. A batch counts as one request.
    pub fn requests_per_second(mut self, limit: u32) -> Self {
        self.requests_per_second = Some(limit);
        self
    }

    pub fn build(self) -> Result<ClientConfig, CoreError> {
        let (user, pass) = resolve_auth(
            self.user.as_deref(),
            self.pass.as_deref(),
            self.cookie_file.as_deref(),
        )?;
        let endpoint = parse_connection(
            self.scheme.as_deref().unwrap_or(DEFAULT_SCHEME),
            self.host.as_deref().unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )?;

        let requests_per_second = match self.requests_per_second {
            None => None,
            Some(limit) => Some(NonZeroU32::new(limit).ok_or_else(|| {
                CoreError::Config("requests_per_second must be at least 1".to_owned())
            })?),
        };

        Ok(ClientConfig {
            user,
            pass,
            wallet: self.wallet.filter(|wallet| !wallet.is_empty()),
            full_response: self.full_response,
            endpoint,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            requests_per_second,
        })
    }
}
