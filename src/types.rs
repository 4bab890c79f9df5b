use std::{fmt, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// An access token as handed out by the exchange backend.
///
/// Lives in memory only. `Debug` redacts the value so it never reaches a log.
#[derive(Clone)]
pub struct AccessToken {
    value: String,
    expires_in: u64,
    obtained_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: String, expires_in: u64) -> Self {
        Self {
            value,
            expires_in,
            obtained_at: Utc::now(),
        }
    }

    pub fn secret(&self) -> &str {
        &self.value
    }

    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.obtained_at + Duration::seconds(self.expires_in as i64)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}

/// The authenticated session: created when a login succeeds, dropped when the
/// command that owns it finishes. Cloning shares the same token.
#[derive(Debug, Clone)]
pub struct Session {
    token: Arc<AccessToken>,
}

impl Session {
    pub fn new(token: AccessToken) -> Self {
        Self {
            token: Arc::new(token),
        }
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }
}

/// Body posted to the token exchange backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRequest {
    pub code: String,
    pub code_verifier: String,
}

/// Success body of the token exchange backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// Error body of the token exchange backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Upstream window over which top items are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TimeRange {
    #[value(name = "short")]
    ShortTerm,
    #[value(name = "medium")]
    MediumTerm,
    #[value(name = "long")]
    LongTerm,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::ShortTerm,
        TimeRange::MediumTerm,
        TimeRange::LongTerm,
    ];

    /// Value of the `time_range` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "Last 4 weeks",
            TimeRange::MediumTerm => "Last 6 months",
            TimeRange::LongTerm => "All time",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of top items to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tracks,
    Artists,
}

impl Category {
    /// Last path segment of `/me/top/{type}`.
    pub fn as_path(&self) -> &'static str {
        match self {
            Category::Tracks => "tracks",
            Category::Artists => "artists",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    pub album: Option<TrackAlbum>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub preview_url: Option<String>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub popularity: Option<u32>,
}

/// One page of `/me/top/{type}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopItemsPage<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone)]
pub enum Item {
    Track(Track),
    Artist(Artist),
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Item::Track(t) => &t.id,
            Item::Artist(a) => &a.id,
        }
    }
}

/// An item and its 1-based position in the final ranked list.
#[derive(Debug, Clone)]
pub struct RankedItem {
    pub rank: u32,
    pub item: Item,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "Rank")]
    pub rank: u32,
    #[tabled(rename = "Track")]
    pub name: String,
    #[tabled(rename = "Artists")]
    pub artists: String,
    #[tabled(rename = "Album")]
    pub album: String,
    #[tabled(rename = "Preview")]
    pub preview: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "Rank")]
    pub rank: u32,
    #[tabled(rename = "Artist")]
    pub name: String,
    #[tabled(rename = "Genres")]
    pub genres: String,
}
