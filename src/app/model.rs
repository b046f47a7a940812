//! Application model types: `App` and `Focus`.
//!
//! The `App` struct holds the catalog, the playback selection, the transport
//! bar state and the view state (cursor, search query, genre filter).

use crate::catalog::{
    Catalog, CatalogError, GenreFilter, Playlist, Track, TrackStore, genre_options,
    matching_indices,
};

use super::selection::Selection;
use super::transport::Transport;

/// Which section receives cursor keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    Playlists,
    #[default]
    Tracks,
}

/// The main application model.
pub struct App {
    pub store: TrackStore,
    pub playlists: Vec<Playlist>,
    pub selection: Selection,
    pub transport: Transport,

    /// Cursor in the track list, as a position in `store`.
    pub cursor: usize,
    pub playlist_cursor: usize,
    pub focus: Focus,

    pub follow_playback: bool,
    pub filter_mode: bool,
    pub filter_query: String,
    pub genre: GenreFilter,
    pub details_window: bool,
    pub status: Option<String>,
}

impl App {
    /// Create a new `App` over `catalog` with nothing selected.
    pub fn new(catalog: Catalog, initial_volume: u8) -> Self {
        Self {
            store: catalog.store,
            playlists: catalog.playlists,
            selection: Selection::Empty,
            transport: Transport::new(initial_volume),

            cursor: 0,
            playlist_cursor: 0,
            focus: Focus::Tracks,

            follow_playback: true,
            filter_mode: false,
            filter_query: String::new(),
            genre: GenreFilter::All,
            details_window: false,
            status: None,
        }
    }

    /// Store positions of the tracks passing the search query and genre.
    pub fn display_indices(&self) -> Vec<usize> {
        matching_indices(self.store.tracks(), &self.filter_query, &self.genre)
    }

    pub fn genre_options(&self) -> Vec<GenreFilter> {
        genre_options(&self.store)
    }

    /// The track under the cursor, if it is visible.
    pub fn cursor_track(&self) -> Option<&Track> {
        let display = self.display_indices();
        if display.contains(&self.cursor) {
            self.store.tracks().get(self.cursor)
        } else {
            None
        }
    }

    /// The selected track shown by the transport bar.
    pub fn current_track(&self) -> Option<&Track> {
        self.selection.current().and_then(|id| self.store.get(id))
    }

    /// Return the next visible position after `current`, wrapping around.
    pub fn next_in_view_from(&self, current: usize) -> Option<usize> {
        let display = self.display_indices();
        if display.is_empty() {
            return None;
        }

        let pos = display.iter().position(|&i| i == current);
        match pos {
            Some(p) => Some(display[(p + 1) % display.len()]),
            None => Some(display[0]),
        }
    }

    /// Return the previous visible position before `current`, wrapping around.
    pub fn prev_in_view_from(&self, current: usize) -> Option<usize> {
        let display = self.display_indices();
        if display.is_empty() {
            return None;
        }

        let pos = display.iter().position(|&i| i == current);
        match pos {
            Some(0) => Some(display[display.len() - 1]),
            Some(p) => Some(display[p - 1]),
            None => Some(display[display.len() - 1]),
        }
    }

    /// Move the cursor down in the focused section.
    pub fn cursor_down(&mut self) {
        match self.focus {
            Focus::Tracks => {
                if let Some(next) = self.next_in_view_from(self.cursor) {
                    self.cursor = next;
                }
            }
            Focus::Playlists => {
                if !self.playlists.is_empty() {
                    self.playlist_cursor = (self.playlist_cursor + 1) % self.playlists.len();
                }
            }
        }
    }

    /// Move the cursor up in the focused section.
    pub fn cursor_up(&mut self) {
        match self.focus {
            Focus::Tracks => {
                if let Some(prev) = self.prev_in_view_from(self.cursor) {
                    self.cursor = prev;
                }
            }
            Focus::Playlists => {
                let len = self.playlists.len();
                if len > 0 {
                    self.playlist_cursor = (self.playlist_cursor + len - 1) % len;
                }
            }
        }
    }

    /// Jump to the first entry of the focused section.
    pub fn cursor_to_top(&mut self) {
        match self.focus {
            Focus::Tracks => {
                if let Some(&first) = self.display_indices().first() {
                    self.cursor = first;
                }
            }
            Focus::Playlists => self.playlist_cursor = 0,
        }
    }

    /// Jump to the last entry of the focused section.
    pub fn cursor_to_bottom(&mut self) {
        match self.focus {
            Focus::Tracks => {
                if let Some(&last) = self.display_indices().last() {
                    self.cursor = last;
                }
            }
            Focus::Playlists => self.playlist_cursor = self.playlists.len().saturating_sub(1),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Tracks if !self.playlists.is_empty() => Focus::Playlists,
            _ => Focus::Tracks,
        };
    }

    pub fn toggle_details_window(&mut self) {
        self.details_window = !self.details_window;
    }

    /// Select the cursor track for playback. Returns false when the list is
    /// empty or the cursor is hidden.
    pub fn play_cursor(&mut self) -> bool {
        if !self.display_indices().contains(&self.cursor) {
            return false;
        }
        let Some(track) = self.store.tracks().get(self.cursor) else {
            return false;
        };
        tracing::info!(track_id = track.id, title = %track.title, "track selected");
        self.selection.select_track(track);
        self.transport.sync_track(self.selection.current());
        true
    }

    /// Advance the selection over the full catalog, ignoring the filter.
    pub fn next_track(&mut self) {
        self.selection.next(self.store.tracks());
        self.after_selection_step();
    }

    /// Step the selection back over the full catalog, ignoring the filter.
    pub fn previous_track(&mut self) {
        self.selection.previous(self.store.tracks());
        self.after_selection_step();
    }

    fn after_selection_step(&mut self) {
        self.transport.sync_track(self.selection.current());
        if !self.follow_playback {
            return;
        }
        if let Some(pos) = self.selection.current().and_then(|id| self.store.position(id)) {
            if self.display_indices().contains(&pos) {
                self.cursor = pos;
            }
        }
    }

    /// Rate the cursor track. `raw` is validated to `0..=5`. Does nothing
    /// unless the track list has focus.
    pub fn rate_cursor(&mut self, raw: u8) -> Result<bool, CatalogError> {
        if self.focus != Focus::Tracks {
            return Ok(false);
        }
        let Some(id) = self.cursor_track().map(|t| t.id) else {
            return Ok(false);
        };
        let updated = self.store.set_rating(id, raw)?;
        if updated {
            tracing::info!(track_id = id, rating = raw, "rating changed");
        }
        Ok(updated)
    }

    /// Flip the transport's play/pause flag.
    pub fn toggle_play(&mut self) {
        self.transport.toggle_play();
    }

    /// Scrub the transport by `delta` seconds within the current track.
    pub fn scrub(&mut self, delta: i64) {
        if let Some(duration) = self.current_track().map(|t| t.duration_secs) {
            self.transport.seek_by(delta, duration);
        }
    }

    pub fn adjust_volume(&mut self, delta: i16) {
        self.transport.adjust_volume(delta);
    }

    /// Activate the playlist under the cursor. Playlists carry no track
    /// membership, so this only reports the activation.
    pub fn activate_playlist(&mut self) {
        let Some(playlist) = self.playlists.get(self.playlist_cursor) else {
            return;
        };
        tracing::info!(playlist_id = playlist.id, name = %playlist.name, "playlist activated");
        self.status = Some(format!(
            "Playlist: {} ({} tracks)",
            playlist.name, playlist.track_count
        ));
    }

    /// Move the genre selector forward or backward through the options.
    pub fn cycle_genre(&mut self, forward: bool) {
        let options = self.genre_options();
        let len = options.len();
        let pos = options.iter().position(|g| *g == self.genre).unwrap_or(0);
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        self.genre = options[next].clone();
        self.ensure_cursor_visible();
    }

    /// Enter filter mode: typed characters edit the search query.
    pub fn enter_filter_mode(&mut self) {
        self.filter_mode = true;
        self.focus = Focus::Tracks;
        self.ensure_cursor_visible();
    }

    /// Leave filter mode, keeping the query.
    pub fn exit_filter_mode(&mut self) {
        self.filter_mode = false;
    }

    /// Clear the search query and leave filter mode.
    pub fn clear_filter(&mut self) {
        self.filter_query.clear();
        self.filter_mode = false;
        self.ensure_cursor_visible();
    }

    /// Append a character to the search query and refresh the view.
    pub fn push_filter_char(&mut self, c: char) {
        self.filter_query.push(c);
        self.ensure_cursor_visible();
    }

    /// Remove the last character from the search query and refresh the view.
    pub fn pop_filter_char(&mut self) {
        self.filter_query.pop();
        self.ensure_cursor_visible();
    }

    /// Keep the cursor on a visible track, falling back to the first one.
    fn ensure_cursor_visible(&mut self) {
        let display = self.display_indices();
        if display.is_empty() {
            self.cursor = 0;
            return;
        }

        if !display.contains(&self.cursor) {
            self.cursor = display[0];
        }
    }
}
