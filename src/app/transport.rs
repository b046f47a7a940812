//! Transport bar state. Purely cosmetic: nothing here drives audio.

use crate::catalog::TrackId;

/// Elapsed position, volume and play/pause flag shown by the transport bar.
///
/// The elapsed position only moves on explicit scrubbing; no timer advances
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transport {
    track: Option<TrackId>,
    elapsed_secs: u32,
    volume: u8,
    playing: bool,
}

impl Transport {
    pub const MAX_VOLUME: u8 = 100;
    pub const DEFAULT_VOLUME: u8 = 75;

    pub fn new(initial_volume: u8) -> Self {
        Self {
            track: None,
            elapsed_secs: 0,
            volume: initial_volume.min(Self::MAX_VOLUME),
            playing: false,
        }
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Follow the selected track. A different track resets the elapsed
    /// position and the play flag; the same track keeps both.
    pub fn sync_track(&mut self, track: Option<TrackId>) {
        if self.track != track {
            self.track = track;
            self.elapsed_secs = 0;
            self.playing = false;
        }
    }

    /// Flip the play/pause flag. No-op while no track is shown.
    pub fn toggle_play(&mut self) {
        if self.track.is_some() {
            self.playing = !self.playing;
        }
    }

    /// Jump to `secs`, clamped to the track duration.
    pub fn seek_to(&mut self, secs: u32, duration_secs: u32) {
        if self.track.is_some() {
            self.elapsed_secs = secs.min(duration_secs);
        }
    }

    /// Scrub by `delta` seconds (positive or negative).
    pub fn seek_by(&mut self, delta: i64, duration_secs: u32) {
        let target = (i64::from(self.elapsed_secs) + delta).clamp(0, i64::from(duration_secs));
        self.seek_to(target as u32, duration_secs);
    }

    /// Change volume by `delta`, saturating at `0..=100`.
    pub fn adjust_volume(&mut self, delta: i16) {
        let v = (i16::from(self.volume) + delta).clamp(0, i16::from(Self::MAX_VOLUME));
        self.volume = v as u8;
    }

    /// Elapsed fraction of `duration_secs`, in `0.0..=1.0`.
    pub fn progress(&self, duration_secs: u32) -> f64 {
        if duration_secs == 0 {
            0.0
        } else {
            (f64::from(self.elapsed_secs) / f64::from(duration_secs)).clamp(0.0, 1.0)
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VOLUME)
    }
}
