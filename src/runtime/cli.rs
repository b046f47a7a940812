use std::path::PathBuf;

use clap::Parser;

/// Browse a music catalog in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CliArgs {
    /// Catalog TOML file to browse instead of the built-in one.
    /// Overrides `catalog.path` from the config file.
    pub catalog: Option<PathBuf>,
}
