use std::fmt;

use serde::Deserialize;

use super::error::CatalogError;

pub type TrackId = u32;
pub type PlaylistId = u32;

/// A track rating in `0..=5`, where `0` means "unrated".
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;
    pub const UNRATED: Rating = Rating(0);

    /// Validate a raw value into a rating.
    pub fn new(value: u8) -> Result<Self, CatalogError> {
        if value > Self::MAX {
            Err(CatalogError::RatingOutOfRange(value))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_rated(self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<u8> for Rating {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rated() {
            write!(f, "{}/{}", self.0, Self::MAX)
        } else {
            f.write_str("unrated")
        }
    }
}

/// One catalog entry. Metadata only; there is no audio behind it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub duration_secs: u32,
    #[serde(default)]
    pub rating: Rating,
    /// Opaque artwork reference. Never fetched.
    #[serde(default)]
    pub cover_url: String,
}

/// A decorative grouping. `track_count` is declarative and not linked to
/// any `Track`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub track_count: u32,
    #[serde(default)]
    pub icon: String,
    /// Theme token, e.g. `"purple-pink"`.
    #[serde(default)]
    pub gradient: String,
}
