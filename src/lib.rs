//! Spotify Top Items CLI Library
//!
//! This library provides functionality for signing a user in to Spotify with the
//! OAuth 2.0 Authorization Code flow (PKCE) and ranking that user's top tracks
//! and artists across Spotify's time windows. It includes modules for the login
//! flow, the token exchange backend, paginated API access and console output.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local callback page and the token exchange backend
//! - `auth` - PKCE, authorization redirect, callback parsing, token exchange and login state
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by all layers
//! - `server` - Routers and listeners for the local HTTP servers
//! - `spotify` - Spotify Web API client (top items and range aggregation)
//! - `types` - Data structures and type definitions
//! - `utils` - Rendering helpers
//!
//! # Example
//!
//! ```
//! use spotop::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> spotop::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used for server plumbing where any error is simply reported to the user.
/// Domain operations return the typed errors from [`error`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Waiting for Spotify to redirect back...");
/// info!("Fetching {} ranges", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the binary and the `cli` layer use this macro. Library code returns
/// typed errors and lets the caller decide.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser, open the URL manually");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
