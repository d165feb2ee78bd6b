//! Bounded progression stats.
//!
//! Each of the four stats holds a `current` value and a per-weapon `max`.
//! `current <= max` holds after every mutation; additions past the ceiling are
//! silently discarded.

use std::collections::BTreeMap;

use crate::config::BuildupConfig;

/// The four bounded weapon stats.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stat {
    /// Drives weapon damage.
    Attack,
    /// Drives the attack speed multiplier.
    Speed,
    Magic,
    Endurance,
}

impl Stat {
    pub const COUNT: usize = 4;

    /// Returns all stats in display order.
    pub const fn all() -> [Stat; Self::COUNT] {
        [Stat::Attack, Stat::Speed, Stat::Magic, Stat::Endurance]
    }

    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// A bounded stat value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatValue {
    pub current: u32,
    pub max: u32,
}

impl StatValue {
    /// Builds a value, clamping `current` into `0..=max`.
    pub const fn new(current: u32, max: u32) -> Self {
        Self {
            current: if current > max { max } else { current },
            max,
        }
    }

    /// Room left before the ceiling.
    pub const fn headroom(&self) -> u32 {
        self.max.saturating_sub(self.current)
    }

    pub const fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl Default for StatValue {
    fn default() -> Self {
        Self::new(0, BuildupConfig::DEFAULT_STAT_MAX)
    }
}

/// Fixed table of all four stats.
///
/// Authored as a map (`{ Attack: (current: 10, max: 100) }`); stats missing
/// from the map fall back to [`StatValue::default`]. Authored values are kept
/// as written so template validation can report `current > max`; live weapons
/// call [`StatBlock::normalize`] on instantiation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "BTreeMap<Stat, StatValue>", into = "BTreeMap<Stat, StatValue>")
)]
pub struct StatBlock {
    values: [StatValue; Stat::COUNT],
}

impl StatBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter used by authoring code and tests.
    pub fn with(mut self, stat: Stat, current: u32, max: u32) -> Self {
        self.values[stat.as_index()] = StatValue::new(current, max);
        self
    }

    pub fn get(&self, stat: Stat) -> StatValue {
        self.values[stat.as_index()]
    }

    pub fn current(&self, stat: Stat) -> u32 {
        self.values[stat.as_index()].current
    }

    pub fn max(&self, stat: Stat) -> u32 {
        self.values[stat.as_index()].max
    }

    /// Adds `amount` to `stat`, clamping at its max.
    ///
    /// Returns the new current value.
    pub fn add(&mut self, stat: Stat, amount: u32) -> u32 {
        let value = &mut self.values[stat.as_index()];
        value.current += amount.min(value.headroom());
        value.current
    }

    /// Re-establishes `current <= max` for every stat.
    pub fn normalize(&mut self) {
        for value in &mut self.values {
            *value = StatValue::new(value.current, value.max);
        }
    }

    /// Mean of `current / max` over the four stats, in `[0, 1]`.
    ///
    /// A stat whose max is zero contributes `0.0`.
    pub fn completion_ratio(&self) -> f32 {
        let total: f64 = self
            .values
            .iter()
            .map(|value| {
                if value.max == 0 {
                    0.0
                } else {
                    f64::from(value.current) / f64::from(value.max)
                }
            })
            .sum();
        (total / Stat::COUNT as f64) as f32
    }

    /// Iterates stats in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, StatValue)> + '_ {
        Stat::all().into_iter().map(|stat| (stat, self.get(stat)))
    }
}

impl From<BTreeMap<Stat, StatValue>> for StatBlock {
    fn from(map: BTreeMap<Stat, StatValue>) -> Self {
        let mut block = Self::default();
        for (stat, value) in map {
            block.values[stat.as_index()] = value;
        }
        block
    }
}

impl From<StatBlock> for BTreeMap<Stat, StatValue> {
    fn from(block: StatBlock) -> Self {
        block.iter().collect()
    }
}
