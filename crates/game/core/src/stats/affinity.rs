//! Elemental and monster affinity counters.
//!
//! Affinities are unbounded accumulators. Elemental affinities are raised by
//! direct synthesis; monster affinities only through synthesis items.

use std::collections::BTreeMap;

/// Whether an affinity is one of the five elements or a monster type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AffinityKind {
    Elemental,
    Monster,
}

/// All sixteen affinity identifiers.
///
/// Declaration order is the display order: elements first, then monster types.
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
pub enum Affinity {
    // elemental
    Fire,
    Ice,
    Lightning,
    Wind,
    Holy,
    // monster
    Undead,
    Beast,
    Aquatic,
    Earth,
    Plant,
    Flying,
    Armor,
    Mimic,
    Mage,
    Demon,
    Reptile,
}

impl Affinity {
    pub const COUNT: usize = 16;

    /// Returns all affinities in display order.
    pub const fn all() -> [Affinity; Self::COUNT] {
        [
            Affinity::Fire,
            Affinity::Ice,
            Affinity::Lightning,
            Affinity::Wind,
            Affinity::Holy,
            Affinity::Undead,
            Affinity::Beast,
            Affinity::Aquatic,
            Affinity::Earth,
            Affinity::Plant,
            Affinity::Flying,
            Affinity::Armor,
            Affinity::Mimic,
            Affinity::Mage,
            Affinity::Demon,
            Affinity::Reptile,
        ]
    }

    pub const fn as_index(self) -> usize {
        self as usize
    }

    pub const fn kind(self) -> AffinityKind {
        match self.element() {
            Some(_) => AffinityKind::Elemental,
            None => AffinityKind::Monster,
        }
    }

    /// The element this affinity corresponds to, if it is elemental.
    pub const fn element(self) -> Option<Element> {
        match self {
            Affinity::Fire => Some(Element::Fire),
            Affinity::Ice => Some(Element::Ice),
            Affinity::Lightning => Some(Element::Lightning),
            Affinity::Wind => Some(Element::Wind),
            Affinity::Holy => Some(Element::Holy),
            _ => None,
        }
    }
}

/// The five elemental affinities, the only ones open to direct synthesis.
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
pub enum Element {
    Fire,
    Ice,
    Lightning,
    Wind,
    Holy,
}

impl Element {
    pub const COUNT: usize = 5;

    pub const fn all() -> [Element; Self::COUNT] {
        [
            Element::Fire,
            Element::Ice,
            Element::Lightning,
            Element::Wind,
            Element::Holy,
        ]
    }
}

impl From<Element> for Affinity {
    fn from(element: Element) -> Self {
        match element {
            Element::Fire => Affinity::Fire,
            Element::Ice => Affinity::Ice,
            Element::Lightning => Affinity::Lightning,
            Element::Wind => Affinity::Wind,
            Element::Holy => Affinity::Holy,
        }
    }
}

/// Counter per affinity, all starting at zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "BTreeMap<Affinity, u32>", into = "BTreeMap<Affinity, u32>")
)]
pub struct AffinityBlock {
    values: [u32; Affinity::COUNT],
}

impl AffinityBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, affinity: Affinity, value: u32) -> Self {
        self.values[affinity.as_index()] = value;
        self
    }

    pub fn get(&self, affinity: impl Into<Affinity>) -> u32 {
        self.values[affinity.into().as_index()]
    }

    /// Adds `amount`, saturating at `u32::MAX`. Returns the new value.
    pub fn add(&mut self, affinity: impl Into<Affinity>, amount: u32) -> u32 {
        let slot = &mut self.values[affinity.into().as_index()];
        *slot = slot.saturating_add(amount);
        *slot
    }

    pub fn iter(&self) -> impl Iterator<Item = (Affinity, u32)> + '_ {
        Affinity::all()
            .into_iter()
            .map(|affinity| (affinity, self.values[affinity.as_index()]))
    }

    /// Non-zero affinities only, in display order.
    pub fn nonzero(&self) -> impl Iterator<Item = (Affinity, u32)> + '_ {
        self.iter().filter(|(_, value)| *value > 0)
    }
}

impl From<BTreeMap<Affinity, u32>> for AffinityBlock {
    fn from(map: BTreeMap<Affinity, u32>) -> Self {
        let mut block = Self::default();
        for (affinity, value) in map {
            block.values[affinity.as_index()] = value;
        }
        block
    }
}

impl From<AffinityBlock> for BTreeMap<Affinity, u32> {
    fn from(block: AffinityBlock) -> Self {
        block.nonzero().collect()
    }
}
