use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::clients::errors::Result;

/// Aggregation window the API uses to compute top items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// Several years of data, shown as "all time"
    LongTerm,
    /// Roughly the last four weeks
    ShortTerm,
}

impl TimeRange {
    /// Both windows, in the order they are presented
    pub const ALL: [TimeRange; 2] = [TimeRange::LongTerm, TimeRange::ShortTerm];

    /// Value of the `time_range` query parameter
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::LongTerm => "long_term",
            TimeRange::ShortTerm => "short_term",
        }
    }

    /// Human readable name used in section headings
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::LongTerm => "all time",
            TimeRange::ShortTerm => "last four weeks",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paging envelope returned by the top items endpoints.
///
/// Only `items` is required; the paging metadata is decoded but never followed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Page<T> {
    /// Ranked items, best first
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Top artists for one time window
pub type ArtistResult = Page<Artist>;
/// Top tracks for one time window
pub type TrackResult = Page<Track>;

/// Cover or profile picture
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

/// Follower count of an artist
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub total: u64,
}

/// Artist as ranked by the top artists endpoint. Only `name` is printed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Artist {
    /// Display name
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub followers: Followers,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

/// Artist reference embedded in tracks and albums
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimplifiedArtist {
    pub name: String,
    pub id: Option<String>,
    pub uri: Option<String>,
    pub href: Option<String>,
    pub external_urls: HashMap<String, String>,
}

/// Album a track belongs to
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Album {
    pub name: String,
    pub id: Option<String>,
    pub album_type: Option<String>,
    pub release_date: Option<String>,
    pub release_date_precision: Option<String>,
    pub artists: Vec<SimplifiedArtist>,
    pub images: Vec<Image>,
    pub external_urls: HashMap<String, String>,
}

/// Track as ranked by the top tracks endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Track {
    /// Display name
    pub name: String,
    /// Credited artists, primary first
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub album: Option<Album>,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub track_number: u32,
    #[serde(default)]
    pub disc_number: u32,
    #[serde(default)]
    pub is_local: bool,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_ids: HashMap<String, String>,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

impl Track {
    /// Name of the first credited artist. Local files may carry none.
    #[must_use]
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }
}

/// Parse a raw response body into `T`. Unknown fields are ignored.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}
