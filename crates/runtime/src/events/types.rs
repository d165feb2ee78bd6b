//! Event types for different topics.

use buildup_core::{
    Element, ItemId, RequirementReport, Stat, SynthesisReport, WeaponId,
};
use serde::{Deserialize, Serialize};

/// Events related to weapon progression (experience and synthesis)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProgressionEvent {
    ExperienceGained {
        weapon: WeaponId,
        amount: u32,
        experience: u32,
        experience_to_next_level: u32,
    },

    /// Published once per grant, however many levels were gained.
    LeveledUp {
        weapon: WeaponId,
        from_level: u32,
        to_level: u32,
    },

    StatSynthesized {
        weapon: WeaponId,
        stat: Stat,
        before: u32,
        after: u32,
    },

    ElementSynthesized {
        weapon: WeaponId,
        element: Element,
        before: u32,
        after: u32,
    },

    ItemApplied {
        weapon: WeaponId,
        report: SynthesisReport,
    },
}

/// Events related to evolution gating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EvolutionEvent {
    /// Result of an explicit evolution query.
    Queried {
        weapon: WeaponId,
        reports: Vec<RequirementReport>,
    },

    /// The equipped weapon was replaced by a fresh instance of the target.
    Evolved {
        from: WeaponId,
        to: WeaponId,
        path: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EquipmentEvent {
    Equipped {
        weapon: WeaponId,
        replaced: Option<WeaponId>,
    },
    Unequipped {
        weapon: WeaponId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletEvent {
    GoldAdded { amount: u32, balance: u32 },
    GoldSpent { amount: u32, balance: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SatchelEvent {
    Stored {
        item: ItemId,
        quantity: u32,
        leftover: u32,
    },
    Removed {
        item: ItemId,
        remaining: u32,
    },
}
