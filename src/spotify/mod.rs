//! # Spotify Integration Module
//!
//! Read access to the user's top items on the Spotify Web API.
//!
//! ```text
//! CLI (tracks / artists)
//!          ↓
//! ranges::aggregate_all / aggregate_one   one ranked list per time range
//!          ↓
//! top::TopItemsClient::fetch_top          pages of 50 joined into a top 100
//!          ↓
//! GET /me/top/{tracks|artists}?limit&offset&time_range   (Bearer token)
//! ```
//!
//! ## Pagination
//!
//! The endpoint caps `limit` at 50, so a top 100 takes two pages at offsets 0
//! and 50. Pages are fetched concurrently and concatenated in offset order;
//! ranking is whatever order Spotify returns, no local sort is applied. A
//! failed page fails the whole list because a ranking with a hole in it would
//! be silently wrong.
//!
//! ## Errors
//!
//! Everything surfaces as [`crate::error::FetchError`]. A `401` means the
//! token itself was refused, and a token past its `expires_in` is not sent at
//! all; there is no refresh flow, so the user has to log
//! in again. Nothing is retried.

pub mod ranges;
pub mod top;

pub use ranges::{RangeOutcome, Schedule, aggregate_all, aggregate_one};
pub use top::{FetchPlan, MAX_ITEMS, MAX_PAGE_SIZE, TopItemsClient};
