//! Playback selection: which track, if any, the transport bar shows.

use crate::catalog::{Track, TrackId};

/// The current track, tracked by id so rating edits never leave it stale.
///
/// Once a track is selected the selection never returns to `Empty`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Empty,
    Selected(TrackId),
}

impl Selection {
    pub fn current(&self) -> Option<TrackId> {
        match self {
            Self::Empty => None,
            Self::Selected(id) => Some(*id),
        }
    }

    /// Select `track`, replacing any previous selection.
    pub fn select_track(&mut self, track: &Track) {
        *self = Self::Selected(track.id);
    }

    /// Move to the track after the current one in `tracks`, wrapping around.
    ///
    /// `tracks` is the full catalog, not the filtered view. Does nothing when
    /// nothing is selected or the current id is not in `tracks`.
    pub fn next(&mut self, tracks: &[Track]) {
        self.step(tracks, |i, len| (i + 1) % len);
    }

    /// Move to the track before the current one in `tracks`, wrapping around.
    pub fn previous(&mut self, tracks: &[Track]) {
        self.step(tracks, |i, len| (i + len - 1) % len);
    }

    fn step(&mut self, tracks: &[Track], advance: impl Fn(usize, usize) -> usize) {
        let Self::Selected(id) = *self else {
            return;
        };
        let Some(index) = tracks.iter().position(|t| t.id == id) else {
            return;
        };
        *self = Self::Selected(tracks[advance(index, tracks.len())].id);
    }
}
