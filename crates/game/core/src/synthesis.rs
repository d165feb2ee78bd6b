//! Synthesis items: reusable delta bundles applied to a weapon.

use core::fmt;

use crate::config::BuildupConfig;
use crate::stats::{Attribute, AttributeVector};
use crate::weapon::WeaponProgression;

/// Stable identifier of a synthesis item (`"attack_stone"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Immutable item definition carrying stat and affinity deltas.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SynthesisItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub deltas: AttributeVector,
    pub stack_size: u32,
    pub sell_value: u32,
}

impl Default for SynthesisItem {
    fn default() -> Self {
        Self {
            id: ItemId::new("item"),
            name: "Item".to_string(),
            description: String::new(),
            icon: None,
            deltas: AttributeVector::default(),
            stack_size: BuildupConfig::DEFAULT_STACK_SIZE,
            sell_value: BuildupConfig::DEFAULT_SELL_VALUE,
        }
    }
}

impl SynthesisItem {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_deltas(mut self, deltas: AttributeVector) -> Self {
        self.deltas = deltas;
        self
    }

    /// Applies every non-zero delta to `weapon`.
    ///
    /// Stats go through [`WeaponProgression::synthesize_stat`] (clamped),
    /// elemental affinities through [`WeaponProgression::synthesize_element`],
    /// and monster affinities are added directly. Never fails.
    pub fn apply_to(&self, weapon: &mut WeaponProgression) -> SynthesisReport {
        let mut changes = Vec::new();

        for (attribute, amount) in self.deltas.entries() {
            let (before, after) = match attribute {
                Attribute::Stat(stat) => {
                    let before = weapon.stats().current(stat);
                    (before, weapon.synthesize_stat(stat, amount))
                }
                Attribute::Affinity(affinity) => {
                    let before = weapon.affinity(affinity);
                    let after = match affinity.element() {
                        Some(element) => weapon.synthesize_element(element, amount),
                        None => weapon.affinities_mut().add(affinity, amount),
                    };
                    (before, after)
                }
            };
            changes.push(AttributeChange {
                attribute,
                requested: amount,
                before,
                after,
            });
        }

        SynthesisReport {
            item: self.id.clone(),
            changes,
        }
    }
}

/// A single attribute change caused by applying an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeChange {
    pub attribute: Attribute,
    pub requested: u32,
    pub before: u32,
    pub after: u32,
}

impl AttributeChange {
    pub fn applied(&self) -> u32 {
        self.after.saturating_sub(self.before)
    }

    /// True when part of the request was lost to a stat ceiling.
    pub fn was_clamped(&self) -> bool {
        self.applied() < self.requested
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynthesisReport {
    pub item: ItemId,
    pub changes: Vec<AttributeChange>,
}
