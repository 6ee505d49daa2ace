//! Loaders that turn RON/TOML data files into battle content.

pub mod character;
pub mod config;
pub mod factory;
pub mod grid;
pub mod roster;

pub use character::CharacterLoader;
pub use config::ConfigLoader;
pub use factory::{ContentFactory, ContentSet};
pub use grid::GridLoader;
pub use roster::RosterLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
