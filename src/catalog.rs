//! Catalog module: track and playlist records, the in-memory track store,
//! the search/genre filter and the seed loader.
//!
//! Everything here is plain data and pure functions; the TUI layer in
//! `app` and `ui` drives it.

mod error;
mod filter;
mod model;
mod seed;
mod store;

pub use error::CatalogError;
pub use filter::{GenreFilter, filter, genre_options, match_span, matching_indices};
pub use model::*;
pub use seed::{Catalog, load_catalog};
pub use store::TrackStore;
