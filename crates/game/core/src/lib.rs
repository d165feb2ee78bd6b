//! Deterministic weapon buildup logic shared by runtimes and content tools.
//!
//! `buildup-core` defines the canonical progression rules (stats, affinities,
//! leveling, synthesis, evolution gating) and exposes pure APIs with no I/O.
//! Weapons are instantiated from immutable [`WeaponTemplate`]s and mutated only
//! through [`WeaponProgression`] and [`SynthesisItem`]; evolution is evaluated
//! on demand and never committed by this crate.
pub mod config;
pub mod error;
pub mod evolution;
pub mod stats;
pub mod synthesis;
pub mod weapon;

pub use config::BuildupConfig;
pub use error::{BuildupError, ErrorSeverity};
pub use evolution::{
    EvolutionPath, RequirementCheck, RequirementReport, available_evolutions, is_satisfied,
    requirement_report,
};
pub use stats::{
    Affinity, AffinityBlock, AffinityKind, Attribute, AttributeVector, Element, KeyError, Stat,
    StatBlock, StatValue,
};
pub use synthesis::{AttributeChange, ItemId, SynthesisItem, SynthesisReport};
pub use weapon::{
    TemplateError, WeaponId, WeaponProgression, WeaponSnapshot, WeaponTemplate, WeaponType,
};
