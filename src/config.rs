//! Configuration loader and schema types.
//!
//! This module exposes the settings that shape the browser (header text,
//! key step sizes, initial volume, catalog and log file locations) and the
//! helpers that load them from disk and the environment.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
