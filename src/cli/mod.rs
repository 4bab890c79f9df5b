//! # CLI Module
//!
//! User-facing commands. Each one is a thin layer over the library: it reads
//! configuration, drives the login or the backend, and prints the result.
//!
//! - [`top`] - log in, fetch and print the ranked top tracks or artists for
//!   one range, or for every range when `--all-ranges` is given
//! - [`serve`] - run the token exchange backend that holds the client secret
//! - [`login`] - the interactive login used by [`top`]
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotop serve                              # in one terminal
//! spotop tracks --range long                # top 100 tracks of all time
//! spotop artists --all-ranges               # grouped by time range
//! spotop tracks --all-ranges --sequential   # one range after the other
//! ```
//!
//! Errors end the command through the crate's `error!` macro after a
//! readable message.

mod auth;
mod serve;
mod top;

pub use auth::login;
pub use serve::serve;
pub use top::{TopOptions, top};
