use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::{ArtistTableRow, Item, RankedItem, Track, TrackTableRow};

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

pub fn join_artist_names(track: &Track) -> String {
    if track.artists.is_empty() {
        return "Unknown Artist".to_string();
    }
    track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn track_rows(items: &[RankedItem]) -> Vec<TrackTableRow> {
    items
        .iter()
        .filter_map(|ranked| match &ranked.item {
            Item::Track(t) => Some(TrackTableRow {
                rank: ranked.rank,
                name: t.name.clone(),
                artists: join_artist_names(t),
                album: t.album.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
                preview: if t.preview_url.is_some() { "yes" } else { "-" }.to_string(),
            }),
            Item::Artist(_) => None,
        })
        .collect()
}

pub fn artist_rows(items: &[RankedItem]) -> Vec<ArtistTableRow> {
    items
        .iter()
        .filter_map(|ranked| match &ranked.item {
            Item::Artist(a) => Some(ArtistTableRow {
                rank: ranked.rank,
                name: a.name.clone(),
                genres: a.genres.iter().take(3).cloned().collect::<Vec<_>>().join(","),
            }),
            Item::Track(_) => None,
        })
        .collect()
}
