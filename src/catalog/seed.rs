use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::error::CatalogError;
use super::model::{Playlist, Track};
use super::store::TrackStore;

/// Seed catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tracks: Vec<Track>,
    #[serde(default)]
    playlists: Vec<Playlist>,
}

/// The static data set the browser starts from.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub store: TrackStore,
    pub playlists: Vec<Playlist>,
}

impl Catalog {
    /// Parse the catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Parse a catalog document (`[[tracks]]` and `[[playlists]]` tables).
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text)?;
        Ok(Self {
            store: TrackStore::new(file.tracks)?,
            playlists: file.playlists,
        })
    }

    /// Read and parse a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }
}

/// Load the catalog at `path`, or the built-in one when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(p) => Catalog::load(p),
        None => Catalog::builtin(),
    }
}
