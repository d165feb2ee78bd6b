use crate::stats::{Affinity, AttributeVector, Stat};
use crate::weapon::WeaponId;

/// A named transition to another weapon template, gated by minimum values.
///
/// A path without a `target` is never satisfiable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolutionPath {
    pub name: String,
    pub target: Option<WeaponId>,
    pub requirements: AttributeVector,
}

impl EvolutionPath {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<WeaponId>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn requires_stat(mut self, stat: Stat, minimum: u32) -> Self {
        self.requirements.stats.insert(stat, minimum);
        self
    }

    pub fn requires_affinity(mut self, affinity: impl Into<Affinity>, minimum: u32) -> Self {
        self.requirements.affinities.insert(affinity.into(), minimum);
        self
    }
}
