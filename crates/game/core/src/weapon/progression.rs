use crate::config::BuildupConfig;
use crate::evolution::{self, EvolutionPath};
use crate::stats::{Affinity, AffinityBlock, Element, Stat, StatBlock};

use super::{WeaponId, WeaponSnapshot, WeaponTemplate, WeaponType};

/// A live weapon instance: level, experience, stats, and affinities.
///
/// Created only through [`WeaponProgression::from_template`], which copies
/// every field out of the template. Mutations never reach the template.
///
/// Invariants:
/// - `1 <= level <= level_max`
/// - `experience_to_next_level >= 1`, non-decreasing across level-ups
/// - every stat has `current <= max`
#[derive(Clone, Debug, PartialEq)]
pub struct WeaponProgression {
    template_id: WeaponId,
    name: String,
    icon: Option<String>,
    weapon_type: WeaponType,
    attack_range_base: f32,

    level: u32,
    level_max: u32,
    experience: u32,
    experience_to_next_level: u32,

    stats: StatBlock,
    affinities: AffinityBlock,
    evolution_paths: Vec<EvolutionPath>,
}

impl WeaponProgression {
    /// Instantiates a fresh weapon at the template's authored baseline.
    ///
    /// Templates that skipped validation are normalized rather than rejected:
    /// `level_max` and the experience threshold are raised to 1 and stats are
    /// clamped to their max.
    pub fn from_template(template: &WeaponTemplate) -> Self {
        let mut stats = template.stats.clone();
        stats.normalize();

        Self {
            template_id: template.id.clone(),
            name: template.name.clone(),
            icon: template.icon.clone(),
            weapon_type: template.weapon_type,
            attack_range_base: template.attack_range_base,
            level: 1,
            level_max: template.level_max.max(1),
            experience: 0,
            experience_to_next_level: template.experience_to_next_level.max(1),
            stats,
            affinities: template.affinities.clone(),
            evolution_paths: template.evolution_paths.clone(),
        }
    }

    // ===== leveling =====

    /// Adds experience and processes any resulting level-ups.
    ///
    /// Each level-up consumes the current threshold and grows the next one by
    /// half (rounded half-up). At `level_max` experience keeps accumulating
    /// without further level-ups. Returns `true` if at least one level was
    /// gained.
    pub fn add_experience(&mut self, amount: u32) -> bool {
        self.experience = self.experience.saturating_add(amount);

        let mut leveled = false;
        while self.level < self.level_max && self.experience >= self.experience_to_next_level {
            self.experience -= self.experience_to_next_level;
            self.level += 1;
            self.experience_to_next_level =
                BuildupConfig::next_threshold(self.experience_to_next_level);
            leveled = true;
        }
        leveled
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= self.level_max
    }

    // ===== synthesis =====

    /// Raises a stat, clamped at its max. Returns the new current value.
    pub fn synthesize_stat(&mut self, stat: Stat, amount: u32) -> u32 {
        self.stats.add(stat, amount)
    }

    /// String entry point for [`Self::synthesize_stat`].
    ///
    /// Unknown names leave the weapon untouched and return `None`.
    pub fn synthesize_stat_named(&mut self, name: &str, amount: u32) -> Option<u32> {
        let stat = name.trim().parse::<Stat>().ok()?;
        Some(self.synthesize_stat(stat, amount))
    }

    /// Raises one of the five elemental affinities. Returns the new value.
    ///
    /// Monster affinities are not reachable here; they only change through
    /// [`crate::SynthesisItem::apply_to`].
    pub fn synthesize_element(&mut self, element: Element, amount: u32) -> u32 {
        self.affinities.add(element, amount)
    }

    /// String entry point for [`Self::synthesize_element`].
    ///
    /// Monster affinity names and unknown names return `None`.
    pub fn synthesize_element_named(&mut self, name: &str, amount: u32) -> Option<u32> {
        let element = name.trim().parse::<Element>().ok()?;
        Some(self.synthesize_element(element, amount))
    }

    pub(crate) fn affinities_mut(&mut self) -> &mut AffinityBlock {
        &mut self.affinities
    }

    // ===== derived =====

    /// Damage dealt per hit: the current attack stat.
    pub fn damage(&self) -> u32 {
        self.stats.current(Stat::Attack)
    }

    /// Attack speed multiplier: `1 + speed × 0.01`.
    pub fn attack_speed(&self) -> f32 {
        1.0 + self.stats.current(Stat::Speed) as f32 * 0.01
    }

    pub fn attack_range_base(&self) -> f32 {
        self.attack_range_base
    }

    pub fn stat_completion(&self) -> f32 {
        self.stats.completion_ratio()
    }

    /// Evolution paths whose requirements are currently met, in authoring order.
    pub fn available_evolutions(&self) -> Vec<&EvolutionPath> {
        evolution::available_evolutions(self, &self.evolution_paths)
    }

    pub fn evolution_path(&self, name: &str) -> Option<&EvolutionPath> {
        self.evolution_paths.iter().find(|path| path.name == name)
    }

    pub fn snapshot(&self) -> WeaponSnapshot {
        WeaponSnapshot::capture(self)
    }

    // ===== accessors =====

    pub fn template_id(&self) -> &WeaponId {
        &self.template_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn weapon_type(&self) -> WeaponType {
        self.weapon_type
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn level_max(&self) -> u32 {
        self.level_max
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn experience_to_next_level(&self) -> u32 {
        self.experience_to_next_level
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn affinities(&self) -> &AffinityBlock {
        &self.affinities
    }

    pub fn affinity(&self, affinity: impl Into<Affinity>) -> u32 {
        self.affinities.get(affinity)
    }

    pub fn evolution_paths(&self) -> &[EvolutionPath] {
        &self.evolution_paths
    }
}
