use std::collections::BTreeMap;

use super::{Affinity, Attribute, Stat};

/// Sparse amounts over stats and affinities.
///
/// Used both as evolution requirements (minimum values) and as synthesis item
/// deltas (amounts to add). Entries that are absent read as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttributeVector {
    pub stats: BTreeMap<Stat, u32>,
    pub affinities: BTreeMap<Affinity, u32>,
}

impl AttributeVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stat(mut self, stat: Stat, amount: u32) -> Self {
        self.stats.insert(stat, amount);
        self
    }

    pub fn with_affinity(mut self, affinity: impl Into<Affinity>, amount: u32) -> Self {
        self.affinities.insert(affinity.into(), amount);
        self
    }

    pub fn stat(&self, stat: Stat) -> u32 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }

    pub fn affinity(&self, affinity: impl Into<Affinity>) -> u32 {
        self.affinities.get(&affinity.into()).copied().unwrap_or(0)
    }

    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Stat(stat) => self.stat(stat),
            Attribute::Affinity(affinity) => self.affinity(affinity),
        }
    }

    /// True when every entry is zero (or there are no entries).
    pub fn is_empty(&self) -> bool {
        self.stats.values().all(|v| *v == 0) && self.affinities.values().all(|v| *v == 0)
    }

    /// Non-zero entries, stats first then affinities, each in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        let stats = self
            .stats
            .iter()
            .map(|(stat, amount)| (Attribute::Stat(*stat), *amount));
        let affinities = self
            .affinities
            .iter()
            .map(|(affinity, amount)| (Attribute::Affinity(*affinity), *amount));
        stats.chain(affinities).filter(|(_, amount)| *amount > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Element;

    #[test]
    fn absent_entries_read_as_zero() {
        let vector = AttributeVector::new().with_stat(Stat::Attack, 5);
        assert_eq!(vector.stat(Stat::Attack), 5);
        assert_eq!(vector.stat(Stat::Magic), 0);
        assert_eq!(vector.affinity(Element::Fire), 0);
    }

    #[test]
    fn entries_skip_zero_amounts() {
        let vector = AttributeVector::new()
            .with_stat(Stat::Speed, 0)
            .with_stat(Stat::Attack, 3)
            .with_affinity(Affinity::Undead, 2);
        let entries: Vec<_> = vector.entries().collect();
        assert_eq!(
            entries,
            vec![
                (Attribute::Stat(Stat::Attack), 3),
                (Attribute::Affinity(Affinity::Undead), 2),
            ]
        );
        assert!(!vector.is_empty());
        assert!(AttributeVector::new().with_stat(Stat::Speed, 0).is_empty());
    }
}
