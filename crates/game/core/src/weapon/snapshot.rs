use crate::stats::{Affinity, Stat, StatValue};

use super::{WeaponId, WeaponProgression, WeaponType};

/// Read-only view of a weapon for display and logging.
///
/// Owns its data so it can outlive the weapon and be serialized.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSnapshot {
    pub template_id: WeaponId,
    pub name: String,
    pub weapon_type: WeaponType,
    pub level: u32,
    pub level_max: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,
    pub damage: u32,
    pub attack_speed: f32,
    pub attack_range_base: f32,
    pub stat_completion: f32,
    pub stats: Vec<(Stat, StatValue)>,
    /// Non-zero affinities only.
    pub affinities: Vec<(Affinity, u32)>,
    /// Names of evolution paths currently satisfied.
    pub available_evolutions: Vec<String>,
}

impl WeaponSnapshot {
    pub fn capture(weapon: &WeaponProgression) -> Self {
        Self {
            template_id: weapon.template_id().clone(),
            name: weapon.name().to_string(),
            weapon_type: weapon.weapon_type(),
            level: weapon.level(),
            level_max: weapon.level_max(),
            experience: weapon.experience(),
            experience_to_next_level: weapon.experience_to_next_level(),
            damage: weapon.damage(),
            attack_speed: weapon.attack_speed(),
            attack_range_base: weapon.attack_range_base(),
            stat_completion: weapon.stat_completion(),
            stats: weapon.stats().iter().collect(),
            affinities: weapon.affinities().nonzero().collect(),
            available_evolutions: weapon
                .available_evolutions()
                .into_iter()
                .map(|path| path.name.clone())
                .collect(),
        }
    }
}
