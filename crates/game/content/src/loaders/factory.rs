//! Content factory for loading every data file from one directory.

use std::path::{Path, PathBuf};

use buildup_core::BuildupConfig;

use crate::catalog::{ItemCatalog, WeaponCatalog};
use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, WeaponLoader};

/// Everything a buildup session needs, loaded once at startup.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: BuildupConfig,
    pub weapons: WeaponCatalog,
    pub items: ItemCatalog,
}

/// Content factory that loads all buildup content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── weapons.ron
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load buildup configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BuildupConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load weapon templates from `weapons.ron`.
    pub fn load_weapons(&self) -> LoadResult<WeaponCatalog> {
        let path = self.data_dir.join("weapons.ron");
        WeaponLoader::load(&path)
    }

    /// Load synthesis items from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load config and both catalogs.
    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        Ok(ContentBundle {
            config: self.load_config()?,
            weapons: self.load_weapons()?,
            items: self.load_items()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
