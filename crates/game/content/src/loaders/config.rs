//! Buildup configuration loader.

use std::path::Path;

use buildup_core::BuildupConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for buildup tunables from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`BuildupConfig::default`].
    pub fn load(path: &Path) -> LoadResult<BuildupConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BuildupConfig> {
        let config: BuildupConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.satchel_slots == 0 {
            anyhow::bail!("Config satchel_slots must be at least 1");
        }
        Ok(config)
    }
}
