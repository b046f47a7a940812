//! Search and genre filtering over the track list.
//!
//! All functions here are pure: same inputs, same output, input order kept.

use std::ops::Range;

use super::model::Track;
use super::store::TrackStore;

/// Genre selector. `All` is the "all genres" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenreFilter {
    #[default]
    All,
    /// Exact, case-sensitive genre name.
    Only(String),
}

impl GenreFilter {
    pub fn matches(&self, genre: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(g) => g == genre,
        }
    }

    /// Label shown in the genre bar; `all_label` is used for the sentinel.
    pub fn label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            Self::All => all_label,
            Self::Only(g) => g,
        }
    }
}

/// True when `query` is a case-insensitive substring of the title or the
/// artist. An empty query matches everything.
pub fn matches_query(track: &Track, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    track.title.to_lowercase().contains(&query) || track.artist.to_lowercase().contains(&query)
}

/// Tracks passing both the query and the genre predicate, in input order.
pub fn filter<'a>(tracks: &'a [Track], query: &str, genre: &GenreFilter) -> Vec<&'a Track> {
    tracks
        .iter()
        .filter(|t| genre.matches(&t.genre) && matches_query(t, query))
        .collect()
}

/// Same predicate as [`filter`], returning positions into `tracks`.
pub fn matching_indices(tracks: &[Track], query: &str, genre: &GenreFilter) -> Vec<usize> {
    tracks
        .iter()
        .enumerate()
        .filter(|(_, t)| genre.matches(&t.genre) && matches_query(t, query))
        .map(|(i, _)| i)
        .collect()
}

/// The genre choices offered to the user: `All` followed by each distinct
/// genre in first-seen order.
pub fn genre_options(store: &TrackStore) -> Vec<GenreFilter> {
    std::iter::once(GenreFilter::All)
        .chain(
            store
                .genres()
                .into_iter()
                .map(|g| GenreFilter::Only(g.to_string())),
        )
        .collect()
}

/// Char range of the first case-insensitive occurrence of `query` in `text`.
///
/// Used for highlighting; returns `None` for an empty query.
pub fn match_span(text: &str, query: &str) -> Option<Range<usize>> {
    if query.is_empty() {
        return None;
    }

    let hay: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.chars().collect();
    if needle.len() > hay.len() {
        return None;
    }

    (0..=hay.len() - needle.len())
        .find(|&start| {
            hay[start..start + needle.len()]
                .iter()
                .zip(&needle)
                .all(|(h, n)| h.to_lowercase().eq(n.to_lowercase()))
        })
        .map(|start| start..start + needle.len())
}
