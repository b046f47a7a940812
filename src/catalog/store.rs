use std::collections::HashSet;

use super::error::CatalogError;
use super::model::{Rating, Track, TrackId};

/// Ordered, in-memory collection of tracks.
///
/// Track ids are unique; the only mutation after construction is a rating
/// change.
#[derive(Debug, Clone, Default)]
pub struct TrackStore {
    tracks: Vec<Track>,
}

impl TrackStore {
    /// Build a store, rejecting duplicate track ids.
    pub fn new(tracks: Vec<Track>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(tracks.len());
        for track in &tracks {
            if !seen.insert(track.id) {
                return Err(CatalogError::DuplicateTrackId(track.id));
            }
        }
        Ok(Self { tracks })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Position of the track with `id` in store order.
    pub fn position(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// Replace the rating of the track with `id`.
    ///
    /// Returns `false` and leaves the store untouched when no track matches.
    pub fn update_rating(&mut self, id: TrackId, rating: Rating) -> bool {
        match self.tracks.iter_mut().find(|t| t.id == id) {
            Some(track) => {
                track.rating = rating;
                true
            }
            None => false,
        }
    }

    /// Validate `raw` and then apply it like [`TrackStore::update_rating`].
    pub fn set_rating(&mut self, id: TrackId, raw: u8) -> Result<bool, CatalogError> {
        let rating = Rating::new(raw)?;
        Ok(self.update_rating(id, rating))
    }

    /// Distinct genres in first-seen order.
    pub fn genres(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.tracks
            .iter()
            .map(|t| t.genre.as_str())
            .filter(|g| seen.insert(g))
            .collect()
    }
}
