use std::path::PathBuf;

use thiserror::Error;

use super::model::TrackId;

/// Errors raised while loading the seed catalog or editing the track store.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate track id {0}")]
    DuplicateTrackId(TrackId),

    #[error("rating {0} is out of range (expected 0..=5)")]
    RatingOutOfRange(u8),
}
