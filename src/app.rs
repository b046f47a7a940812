//! Application module: the state the TUI renders and the runtime mutates.
//!
//! `App` (in `app::model`) owns the track store, the playback selection,
//! the cosmetic transport state and the view state (cursor, search query,
//! genre, focus).

mod model;
mod selection;
mod transport;

pub use model::*;
pub use selection::Selection;
pub use transport::Transport;
