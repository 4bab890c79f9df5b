//! # API Module
//!
//! HTTP handlers for the two small servers the application runs.
//!
//! ## Callback page (`spotop tracks` / `spotop artists`)
//!
//! - [`callback`] - the redirect URI. Spotify sends the browser here with
//!   `?code=` or `?error=`; the handler feeds the page load to the login flow.
//! - [`health`] - status and version.
//!
//! ## Token exchange backend (`spotop serve`)
//!
//! - [`exchange_token`] - trades `{code, code_verifier}` for
//!   `{access_token, expires_in}` using the client secret, which only this
//!   server ever holds.
//! - [`method_not_allowed`] - `405` for anything but `POST` on the exchange route.
//!
//! Both are wired up in [`crate::server`].

mod callback;
mod exchange;
mod health;

pub use callback::callback;
pub use exchange::{
    ClientSecret, EnvClientSecret, ExchangeService, StaticClientSecret, exchange_token,
    method_not_allowed,
};
pub use health::health;
