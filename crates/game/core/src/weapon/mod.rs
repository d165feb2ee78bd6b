//! Weapon templates and live weapon instances.
//!
//! A [`WeaponTemplate`] is authored content and never changes after loading.
//! A [`WeaponProgression`] is a deep copy of a template that accumulates
//! experience, stats, and affinities for the lifetime of one equip.

mod progression;
mod snapshot;
mod template;

pub use progression::WeaponProgression;
pub use snapshot::WeaponSnapshot;
pub use template::{TemplateError, WeaponId, WeaponTemplate, WeaponType};
