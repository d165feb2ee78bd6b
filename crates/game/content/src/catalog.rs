//! Read-only catalogs of authored content.
//!
//! Both catalogs are also the on-disk root types of their RON files, so the
//! struct names must match what the data files declare.

use std::collections::BTreeSet;

use buildup_core::{ItemId, SynthesisItem, TemplateError, WeaponId, WeaponTemplate};

/// Weapon templates in authoring order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponCatalog {
    pub weapons: Vec<WeaponTemplate>,
}

/// An evolution path pointing at a weapon id the catalog does not contain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingTarget {
    pub weapon: WeaponId,
    pub path: String,
    pub target: WeaponId,
}

impl WeaponCatalog {
    pub fn new(weapons: Vec<WeaponTemplate>) -> Self {
        Self { weapons }
    }

    pub fn get(&self, id: &WeaponId) -> Option<&WeaponTemplate> {
        self.weapons.iter().find(|template| &template.id == id)
    }

    pub fn contains(&self, id: &WeaponId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &WeaponId> {
        self.weapons.iter().map(|template| &template.id)
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Validates every template in order, stopping at the first failure.
    pub fn validate(&self) -> Result<(), TemplateError> {
        self.weapons.iter().try_for_each(WeaponTemplate::validate)
    }

    /// Ids declared more than once.
    pub fn duplicate_ids(&self) -> Vec<WeaponId> {
        let mut seen = BTreeSet::new();
        self.weapons
            .iter()
            .filter(|template| !seen.insert(&template.id))
            .map(|template| template.id.clone())
            .collect()
    }

    /// Evolution targets that do not resolve to a template in this catalog.
    ///
    /// Paths with no target at all are not reported; they are simply never
    /// satisfiable.
    pub fn dangling_targets(&self) -> Vec<DanglingTarget> {
        self.weapons
            .iter()
            .flat_map(|template| {
                template.evolution_paths.iter().filter_map(move |path| {
                    let target = path.target.as_ref()?;
                    (!self.contains(target)).then(|| DanglingTarget {
                        weapon: template.id.clone(),
                        path: path.name.clone(),
                        target: target.clone(),
                    })
                })
            })
            .collect()
    }
}

/// Synthesis items in authoring order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCatalog {
    pub items: Vec<SynthesisItem>,
}

impl ItemCatalog {
    pub fn new(items: Vec<SynthesisItem>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: &ItemId) -> Option<&SynthesisItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter().map(|item| &item.id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn duplicate_ids(&self) -> Vec<ItemId> {
        let mut seen = BTreeSet::new();
        self.items
            .iter()
            .filter(|item| !seen.insert(&item.id))
            .map(|item| item.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildup_core::EvolutionPath;

    fn catalog() -> WeaponCatalog {
        WeaponCatalog::new(vec![
            WeaponTemplate::new("rusty_sword", "Rusty Sword")
                .with_path(EvolutionPath::new("Blaze").with_target("flame_blade"))
                .with_path(EvolutionPath::new("Void").with_target("void_blade"))
                .with_path(EvolutionPath::new("Nowhere")),
            WeaponTemplate::new("flame_blade", "Flame Blade"),
        ])
    }

    #[test]
    fn lookup_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 2);
        let blade = catalog.get(&WeaponId::new("flame_blade"));
        assert_eq!(blade.map(|t| t.name.as_str()), Some("Flame Blade"));
        assert!(catalog.get(&WeaponId::new("missing")).is_none());
    }

    #[test]
    fn dangling_targets_are_reported() {
        let dangling = catalog().dangling_targets();
        assert_eq!(
            dangling,
            vec![DanglingTarget {
                weapon: WeaponId::new("rusty_sword"),
                path: "Void".into(),
                target: WeaponId::new("void_blade"),
            }]
        );
    }

    #[test]
    fn duplicate_ids_are_found() {
        let mut catalog = catalog();
        catalog
            .weapons
            .push(WeaponTemplate::new("flame_blade", "Second Flame Blade"));
        assert_eq!(catalog.duplicate_ids(), vec![WeaponId::new("flame_blade")]);

        let items = ItemCatalog::new(vec![
            SynthesisItem::new("stone", "Stone"),
            SynthesisItem::new("stone", "Stone Again"),
        ]);
        assert_eq!(items.duplicate_ids(), vec![ItemId::new("stone")]);
    }
}
