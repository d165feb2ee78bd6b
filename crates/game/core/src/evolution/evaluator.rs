use crate::stats::{Attribute, Stat};
use crate::weapon::{WeaponId, WeaponProgression};

use super::EvolutionPath;

/// Current value of `attribute` on `weapon`.
fn current_value(weapon: &WeaponProgression, attribute: Attribute) -> u32 {
    match attribute {
        Attribute::Stat(stat) => weapon.stats().current(stat),
        Attribute::Affinity(affinity) => weapon.affinity(affinity),
    }
}

/// True when `path` has a target and every requirement is met.
///
/// Requirements compare against stat `current` values and affinity totals.
/// Zero requirements are trivially met.
pub fn is_satisfied(weapon: &WeaponProgression, path: &EvolutionPath) -> bool {
    if path.target.is_none() {
        return false;
    }

    let stats_met = Stat::all()
        .into_iter()
        .all(|stat| weapon.stats().current(stat) >= path.requirements.stat(stat));
    stats_met
        && path
            .requirements
            .affinities
            .iter()
            .all(|(affinity, minimum)| weapon.affinity(*affinity) >= *minimum)
}

/// Satisfied paths, in the order given.
pub fn available_evolutions<'a>(
    weapon: &WeaponProgression,
    paths: &'a [EvolutionPath],
) -> Vec<&'a EvolutionPath> {
    paths
        .iter()
        .filter(|path| is_satisfied(weapon, path))
        .collect()
}

/// One requirement of a path checked against a weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequirementCheck {
    pub attribute: Attribute,
    pub current: u32,
    pub required: u32,
}

impl RequirementCheck {
    pub fn is_met(&self) -> bool {
        self.current >= self.required
    }

    /// Amount still missing, zero once met.
    pub fn shortfall(&self) -> u32 {
        self.required.saturating_sub(self.current)
    }
}

/// Per-requirement breakdown of a path, for "what's still needed" displays.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequirementReport {
    pub path: String,
    pub target: Option<WeaponId>,
    /// Non-zero requirements only, stats first.
    pub checks: Vec<RequirementCheck>,
    pub satisfied: bool,
}

impl RequirementReport {
    pub fn unmet(&self) -> impl Iterator<Item = &RequirementCheck> {
        self.checks.iter().filter(|check| !check.is_met())
    }
}

pub fn requirement_report(weapon: &WeaponProgression, path: &EvolutionPath) -> RequirementReport {
    let checks = path
        .requirements
        .entries()
        .map(|(attribute, required)| RequirementCheck {
            attribute,
            current: current_value(weapon, attribute),
            required,
        })
        .collect();

    RequirementReport {
        path: path.name.clone(),
        target: path.target.clone(),
        checks,
        satisfied: is_satisfied(weapon, path),
    }
}
