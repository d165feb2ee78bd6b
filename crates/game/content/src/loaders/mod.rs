//! Content loaders for reading buildup data from files.
//!
//! Catalogs are RON, tunables are TOML. Every loader validates what it reads
//! so runtimes can assume well-formed templates.

pub mod config;
pub mod factory;
pub mod item;
pub mod weapon;

pub use config::ConfigLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use item::ItemLoader;
pub use weapon::WeaponLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
