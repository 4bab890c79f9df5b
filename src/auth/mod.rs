//! # Authentication Module
//!
//! OAuth 2.0 Authorization Code flow with PKCE, split into small pieces that
//! each do one job:
//!
//! - [`pkce`] - verifier generation and S256 challenge derivation
//! - [`authorize`] - authorization request URL and the navigation handoff
//! - [`callback`] - reading `code` / `error` off the redirect URL
//! - [`exchange`] - posting code and verifier to the exchange backend
//! - [`page`] - the page location, its session storage and the navigator
//! - [`flow`] - the login state machine tying the above together
//!
//! ```text
//! Idle --begin--> AwaitingCallback --callback--> Authenticated(Session)
//!                                             \-> Failed(AuthError)
//! ```
//!
//! The verifier lives in session storage for exactly one attempt and the
//! client secret never enters this module at all.

pub mod authorize;
pub mod callback;
pub mod exchange;
pub mod flow;
pub mod page;
pub mod pkce;

pub use authorize::{AuthorizationRequest, AuthorizeParams};
pub use callback::{CallbackResult, parse_callback};
pub use exchange::ExchangeClient;
pub use flow::{LoginFlow, LoginState};
pub use page::{BrowserPage, Navigator, SessionStorage, SystemBrowser, VERIFIER_KEY};
pub use pkce::PkcePair;
