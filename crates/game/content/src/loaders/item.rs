//! Synthesis item catalog loader.

use std::path::Path;

use crate::catalog::ItemCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for synthesis items from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load and validate an item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        for item in &catalog.items {
            if item.stack_size == 0 {
                anyhow::bail!("Item '{}' has stack_size 0", item.id);
            }
        }

        let duplicates = catalog.duplicate_ids();
        if !duplicates.is_empty() {
            anyhow::bail!("Duplicate item ids: {:?}", duplicates);
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildup_core::{Affinity, ItemId, Stat};

    const CATALOG: &str = r#"
ItemCatalog(
    items: [
        (
            id: "attack_stone",
            name: "Attack Stone",
            description: "Sharpens the edge.",
            deltas: (stats: { Attack: 5 }),
        ),
        (
            id: "bone_dust",
            name: "Bone Dust",
            deltas: (affinities: { Undead: 3 }),
            stack_size: 20,
            sell_value: 4,
        ),
    ],
)
"#;

    #[test]
    fn parses_items_with_defaults() {
        let catalog = ItemLoader::parse(CATALOG).unwrap();
        let stone = catalog.get(&ItemId::new("attack_stone")).unwrap();
        assert_eq!(stone.deltas.stat(Stat::Attack), 5);
        assert_eq!(stone.stack_size, 99);
        assert_eq!(stone.sell_value, 10);

        let dust = catalog.get(&ItemId::new("bone_dust")).unwrap();
        assert_eq!(dust.deltas.affinity(Affinity::Undead), 3);
        assert_eq!(dust.stack_size, 20);
    }

    #[test]
    fn negative_deltas_fail_to_load() {
        let content = CATALOG.replace("Attack: 5", "Attack: -5");
        assert!(ItemLoader::parse(&content).is_err());
    }

    #[test]
    fn unknown_stat_names_fail_to_load() {
        let content = CATALOG.replace("Attack: 5", "Power: 5");
        assert!(ItemLoader::parse(&content).is_err());
    }

    #[test]
    fn zero_stack_size_fails_to_load() {
        let content = CATALOG.replace("stack_size: 20", "stack_size: 0");
        let err = ItemLoader::parse(&content).unwrap_err();
        assert!(err.to_string().contains("stack_size"));
    }
}
