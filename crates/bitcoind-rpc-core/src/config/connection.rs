use std::path::Path;

use reqwest::Url;

use crate::error::CoreError;

/// Resolve the basic-auth pair.
///
/// Precedence:
/// 1. explicit `pass` (with `user`, which defaults to empty)
/// 2. cookie file (`username:password`) from `cookie_file`
///
/// Having neither is a configuration error.
pub(super) fn resolve_auth(
    user: Option<&str>,
    pass: Option<&str>,
    cookie_file: Option<&Path>,
) -> Result<(String, String), CoreError> {
    if let Some(pass) = pass {
        return Ok((user.unwrap_or_default().to_owned(), pass.to_owned()));
    }

    let Some(cookie_file) = cookie_file else {
        return Err(CoreError::Config(
            "rpc password is required (set pass or a cookie file)".to_owned(),
        ));
    };

    let content = std::fs::read_to_string(cookie_file).map_err(|e| {
        CoreError::Config(format!(
            "failed to read rpc cookie file {}: {e}",
            cookie_file.display()
        ))
    })?;
    let line = content
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or_else(|| {
            CoreError::Config(format!(
                "rpc cookie file {} is empty",
                cookie_file.display()
            ))
        })?;

    let (cookie_user, cookie_pass) = line.split_once(':').ok_or_else(|| {
        CoreError::Config(format!(
            "rpc cookie file {} must contain `username:password`",
            cookie_file.display()
        ))
    })?;
    if cookie_user.is_empty() || cookie_pass.is_empty() {
        return Err(CoreError::Config(format!(
            "rpc cookie file {} must contain non-empty `username:password`",
            cookie_file.display()
        )));
    }

    Ok((cookie_user.to_owned(), cookie_pass.to_owned()))
}

/// Build the node's root URL from its parts.
pub(super) fn parse_connection(scheme: &str, host: &str, port: u16) -> Result<Url, CoreError> {
    match scheme {
        "http" | "https" => {}
        other => {
            return Err(CoreError::Config(format!(
                "unsupported connection scheme `{other}`; expected http or https"
            )));
        }
    }
    if host.is_empty() {
        return Err(CoreError::Config("rpc host must not be empty".to_owned()));
    }

    // Bare IPv6 literals need brackets before a port can follow.
    let host = if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]")
    } else {
        host.to_owned()
    };

    let connection = format!("{scheme}://{host}:{port}/");
    Url::parse(&connection).map_err(|e| {
        CoreError::Config(format!("invalid connection `{connection}`: {e}"))
    })
}
