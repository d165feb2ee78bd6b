//! Progression attributes of a weapon.
//!
//! ```text
//! [ StatBlock ]       attack / speed / magic / endurance, clamped to per-stat max
//! [ AffinityBlock ]   5 elemental + 11 monster counters, unbounded
//! [ AttributeVector ] sparse amounts over both, used for requirements and deltas
//! ```
//!
//! All identifiers are closed enums. String names only exist at the edges
//! (authoring files, tester input) and are parsed with [`Attribute::parse`]
//! or the per-enum `FromStr` impls.

pub mod affinity;
pub mod block;
pub mod vector;

pub use affinity::{Affinity, AffinityBlock, AffinityKind, Element};
pub use block::{Stat, StatBlock, StatValue};
pub use vector::AttributeVector;

use core::fmt;
use core::str::FromStr;

use crate::error::{BuildupError, ErrorSeverity};

/// Any attribute a requirement or delta can address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Stat(Stat),
    Affinity(Affinity),
}

impl Attribute {
    /// Parses a stat or affinity name (`"attack"`, `"fire"`, `"undead"`, ...).
    pub fn parse(name: &str) -> Result<Self, KeyError> {
        let name = name.trim();
        if let Ok(stat) = Stat::from_str(name) {
            return Ok(Self::Stat(stat));
        }
        Affinity::from_str(name)
            .map(Self::Affinity)
            .map_err(|_| KeyError::UnknownAttribute(name.to_string()))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stat(stat) => write!(f, "{}", stat),
            Self::Affinity(affinity) => write!(f, "{}", affinity),
        }
    }
}

impl From<Stat> for Attribute {
    fn from(stat: Stat) -> Self {
        Self::Stat(stat)
    }
}

impl From<Affinity> for Attribute {
    fn from(affinity: Affinity) -> Self {
        Self::Affinity(affinity)
    }
}

impl From<Element> for Attribute {
    fn from(element: Element) -> Self {
        Self::Affinity(element.into())
    }
}

/// Errors raised when a name does not match any known identifier.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("unknown stat '{0}'")]
    UnknownStat(String),

    #[error("unknown element '{0}'")]
    UnknownElement(String),

    #[error("unknown stat or affinity '{0}'")]
    UnknownAttribute(String),
}

impl BuildupError for KeyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownStat(_) => "KEY_UNKNOWN_STAT",
            Self::UnknownElement(_) => "KEY_UNKNOWN_ELEMENT",
            Self::UnknownAttribute(_) => "KEY_UNKNOWN_ATTRIBUTE",
        }
    }
}
