//! Data-driven weapon and synthesis item content.
//!
//! This crate holds the authored catalogs and the loaders for the RON/TOML
//! data files:
//! - Weapon templates with their evolution paths (`weapons.ron`)
//! - Synthesis items (`items.ron`)
//! - Buildup tunables (`config.toml`)
//!
//! Catalogs are read-only once loaded. Runtimes instantiate weapons from them
//! and never write back.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{DanglingTarget, ItemCatalog, WeaponCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentBundle, ContentFactory, ItemLoader, WeaponLoader};
