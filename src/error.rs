//! Error types for the login flow and the top items fetcher.
//!
//! Every variant renders a message that can be shown to the end user as is.
//! None of these errors are retried automatically.

use thiserror::Error;

/// Configuration could not be resolved from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {name}")]
    MissingVar { name: &'static str },

    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Failure while trading an authorization code for an access token.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The verifier was not found in session storage, so the request was never sent.
    #[error("missing code verifier, please start the login again")]
    MissingVerifier,

    /// The exchange backend (or the upstream token endpoint behind it) refused the code.
    #[error("token exchange rejected ({status}): {reason}")]
    Rejected {
        status: u16,
        reason: String,
        description: String,
    },

    #[error("token exchange request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Failure of a login attempt.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The authorization server sent the user back with `?error=<reason>`.
    #[error("authorization error: {reason}")]
    AuthorizationDenied { reason: String },

    #[error("authentication failed: {0}")]
    Exchange(#[from] ExchangeError),

    #[error("callback server error: {0}")]
    CallbackServer(#[from] std::io::Error),

    #[error("authentication timed out after {secs} seconds")]
    TimedOut { secs: u64 },
}

/// Failure of a paginated top items fetch. No partial results accompany it.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid page plan: {0}")]
    InvalidPlan(String),

    /// The session's token outlived its `expires_in`; nothing was sent.
    #[error("access token expired")]
    TokenExpired,

    #[error("page at offset {offset} failed with status {status}")]
    Status { status: u16, offset: u32 },

    #[error("page at offset {offset} returned a malformed body: {source}")]
    Malformed {
        offset: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    /// Whether the access token itself is unusable, either refused by the API
    /// or already expired locally.
    ///
    /// There is no refresh flow, so the caller has to prompt a fresh login.
    pub fn is_token_rejected(&self) -> bool {
        matches!(self, Self::TokenExpired | Self::Status { status: 401, .. })
    }
}
