//! Configuration management for the Spotify top items CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, server settings, and other
//! runtime parameters.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use url::Url;

use crate::error::ConfigError;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables from
/// `spotop/.env` inside the platform-specific local data directory. A missing
/// file is not an error; every variable can also come from the real environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotop/.env`
/// - macOS: `~/Library/Application Support/spotop/.env`
/// - Windows: `%LOCALAPPDATA%/spotop/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotop/.env");
    path
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_url(name: &'static str, value: String) -> Result<Url, ConfigError> {
    Url::parse(&value).map_err(|e| ConfigError::InvalidValue {
        name,
        value,
        reason: e.to_string(),
    })
}

fn parse_addr(name: &'static str, value: String) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
        name,
        value,
        reason: e.to_string(),
    })
}

/// Returns the address of the local callback server.
///
/// Reads `SERVER_ADDRESS`, defaulting to `127.0.0.1:8888`. It must match the
/// host and port of the redirect URI registered with Spotify.
pub fn server_addr() -> Result<SocketAddr, ConfigError> {
    parse_addr("SERVER_ADDRESS", var_or("SERVER_ADDRESS", "127.0.0.1:8888"))
}

/// Returns the address the token exchange backend binds to.
///
/// Reads `EXCHANGE_SERVER_ADDRESS`, defaulting to `127.0.0.1:8889`.
pub fn exchange_server_addr() -> Result<SocketAddr, ConfigError> {
    parse_addr(
        "EXCHANGE_SERVER_ADDRESS",
        var_or("EXCHANGE_SERVER_ADDRESS", "127.0.0.1:8889"),
    )
}

/// Returns the Spotify API client ID.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_ID`. This one has no default: it is the ID
/// obtained when registering the application with Spotify's developer platform.
pub fn spotify_client_id() -> Result<String, ConfigError> {
    match var_or("SPOTIFY_API_AUTH_CLIENT_ID", "") {
        id if id.is_empty() => Err(ConfigError::MissingVar {
            name: "SPOTIFY_API_AUTH_CLIENT_ID",
        }),
        id => Ok(id),
    }
}

/// Returns the Spotify API client secret, if configured.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_SECRET` on every call. Only the token
/// exchange backend needs it; the login flow never sees it.
///
/// # Security Note
///
/// The client secret must never be logged, sent to the browser or put in a URL.
pub fn spotify_client_secret() -> Option<String> {
    Some(var_or("SPOTIFY_API_AUTH_CLIENT_SECRET", "")).filter(|s| !s.is_empty())
}

/// Returns the Spotify OAuth redirect URI.
///
/// Reads `SPOTIFY_API_REDIRECT_URI`, defaulting to `http://127.0.0.1:8888/callback`.
/// This must match the redirect URI registered in the Spotify application settings.
pub fn spotify_redirect_uri() -> Result<Url, ConfigError> {
    parse_url(
        "SPOTIFY_API_REDIRECT_URI",
        var_or("SPOTIFY_API_REDIRECT_URI", "http://127.0.0.1:8888/callback"),
    )
}

/// Returns the Spotify API scope permissions (`SPOTIFY_API_AUTH_SCOPE`).
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", "user-top-read")
}

/// Returns the Spotify OAuth authorization URL (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> Result<Url, ConfigError> {
    parse_url(
        "SPOTIFY_API_AUTH_URL",
        var_or("SPOTIFY_API_AUTH_URL", "https://accounts.spotify.com/authorize"),
    )
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", "https://api.spotify.com/v1")
}

/// Returns the upstream token endpoint used by the exchange backend.
pub fn spotify_apitoken_url() -> String {
    var_or(
        "SPOTIFY_API_TOKEN_URL",
        "https://accounts.spotify.com/api/token",
    )
}

/// Returns the URL of the token exchange backend the login flow posts to.
pub fn exchange_token_url() -> Result<Url, ConfigError> {
    parse_url(
        "EXCHANGE_TOKEN_URL",
        var_or(
            "EXCHANGE_TOKEN_URL",
            "http://127.0.0.1:8889/api/exchange-token",
        ),
    )
}

/// How long the CLI waits for the browser to come back (`LOGIN_TIMEOUT_SECS`).
pub fn login_timeout() -> Result<Duration, ConfigError> {
    let value = var_or("LOGIN_TIMEOUT_SECS", "120");
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidValue {
            name: "LOGIN_TIMEOUT_SECS",
            value,
            reason: e.to_string(),
        })
}
