//! Weapon catalog loader.

use std::path::Path;

use crate::catalog::WeaponCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for weapon templates from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load and validate a weapon catalog from a RON file.
    ///
    /// Fails on malformed RON, negative amounts, invalid templates, or
    /// duplicate ids. Dangling evolution targets are not an error here; query
    /// [`WeaponCatalog::dangling_targets`] to report them.
    pub fn load(path: &Path) -> LoadResult<WeaponCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<WeaponCatalog> {
        let catalog: WeaponCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon catalog RON: {}", e))?;

        catalog
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid weapon template: {}", e))?;

        let duplicates = catalog.duplicate_ids();
        if !duplicates.is_empty() {
            anyhow::bail!("Duplicate weapon ids: {:?}", duplicates);
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildup_core::{Element, Stat, WeaponId};

    const CATALOG: &str = r#"
WeaponCatalog(
    weapons: [
        (
            id: "rusty_sword",
            name: "Rusty Sword",
            stats: {
                Attack: (current: 10, max: 100),
            },
            evolution_paths: [
                (
                    name: "Flame Blade",
                    target: Some("flame_blade"),
                    requirements: (
                        stats: { Attack: 40 },
                        affinities: { Fire: 30 },
                    ),
                ),
            ],
        ),
        (
            id: "flame_blade",
            name: "Flame Blade",
            weapon_type: Melee,
            affinities: { Fire: 30 },
        ),
    ],
)
"#;

    #[test]
    fn parses_sparse_templates() {
        let catalog = WeaponLoader::parse(CATALOG).unwrap();
        let sword = catalog.get(&WeaponId::new("rusty_sword")).unwrap();

        assert_eq!(sword.stats.current(Stat::Attack), 10);
        assert_eq!(sword.stats.max(Stat::Speed), 100);
        assert_eq!(sword.level_max, 10);
        assert_eq!(sword.experience_to_next_level, 100);

        let path = &sword.evolution_paths[0];
        assert_eq!(path.target, Some(WeaponId::new("flame_blade")));
        assert_eq!(path.requirements.affinity(Element::Fire), 30);
        assert!(catalog.dangling_targets().is_empty());
    }

    #[test]
    fn negative_amounts_fail_to_load() {
        let content = CATALOG.replace("Attack: 40", "Attack: -40");
        assert!(WeaponLoader::parse(&content).is_err());
    }

    #[test]
    fn current_above_max_fails_validation() {
        let content = CATALOG.replace("(current: 10, max: 100)", "(current: 120, max: 100)");
        let err = WeaponLoader::parse(&content).unwrap_err();
        assert!(err.to_string().contains("Invalid weapon template"));
    }

    #[test]
    fn duplicate_ids_fail_to_load() {
        let content = CATALOG.replace("id: \"flame_blade\"", "id: \"rusty_sword\"");
        let err = WeaponLoader::parse(&content).unwrap_err();
        assert!(err.to_string().contains("Duplicate weapon ids"));
    }
}
