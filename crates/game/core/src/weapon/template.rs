use core::fmt;
use std::collections::BTreeSet;

use crate::config::BuildupConfig;
use crate::error::{BuildupError, ErrorSeverity};
use crate::evolution::EvolutionPath;
use crate::stats::{AffinityBlock, Stat, StatBlock};

/// Stable identifier of a weapon template (`"rusty_sword"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeaponId(pub String);

impl WeaponId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WeaponId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WeaponId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponType {
    #[default]
    Melee,
    Ranged,
}

/// Immutable authored weapon definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeaponTemplate {
    pub id: WeaponId,
    pub name: String,
    pub icon: Option<String>,
    pub weapon_type: WeaponType,
    pub attack_range_base: f32,
    pub level_max: u32,
    pub experience_to_next_level: u32,
    pub stats: StatBlock,
    pub affinities: AffinityBlock,
    /// Outgoing evolutions, in authoring order.
    pub evolution_paths: Vec<EvolutionPath>,
}

impl Default for WeaponTemplate {
    fn default() -> Self {
        Self {
            id: WeaponId::new("weapon"),
            name: "Weapon".to_string(),
            icon: None,
            weapon_type: WeaponType::default(),
            attack_range_base: BuildupConfig::DEFAULT_ATTACK_RANGE,
            level_max: BuildupConfig::DEFAULT_LEVEL_MAX,
            experience_to_next_level: BuildupConfig::DEFAULT_EXPERIENCE_TO_NEXT_LEVEL,
            stats: StatBlock::default(),
            affinities: AffinityBlock::default(),
            evolution_paths: Vec::new(),
        }
    }
}

impl WeaponTemplate {
    pub fn new(id: impl Into<WeaponId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_affinities(mut self, affinities: AffinityBlock) -> Self {
        self.affinities = affinities;
        self
    }

    pub fn with_path(mut self, path: EvolutionPath) -> Self {
        self.evolution_paths.push(path);
        self
    }

    pub fn with_level_max(mut self, level_max: u32) -> Self {
        self.level_max = level_max;
        self
    }

    pub fn with_experience_to_next_level(mut self, threshold: u32) -> Self {
        self.experience_to_next_level = threshold;
        self
    }

    pub fn with_weapon_type(mut self, weapon_type: WeaponType) -> Self {
        self.weapon_type = weapon_type;
        self
    }

    /// Checks the authored invariants that instantiation relies on.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.id.as_str().trim().is_empty() {
            return Err(TemplateError::EmptyId);
        }
        if self.level_max == 0 {
            return Err(TemplateError::ZeroLevelMax {
                weapon: self.id.clone(),
            });
        }
        if self.experience_to_next_level == 0 {
            return Err(TemplateError::ZeroExperienceThreshold {
                weapon: self.id.clone(),
            });
        }
        if !self.attack_range_base.is_finite() || self.attack_range_base < 0.0 {
            return Err(TemplateError::InvalidAttackRange {
                weapon: self.id.clone(),
                range: self.attack_range_base,
            });
        }
        for stat in Stat::all() {
            let value = self.stats.get(stat);
            if value.current > value.max {
                return Err(TemplateError::StatAboveMax {
                    weapon: self.id.clone(),
                    stat,
                    current: value.current,
                    max: value.max,
                });
            }
        }

        let mut names = BTreeSet::new();
        for path in &self.evolution_paths {
            if path.name.trim().is_empty() {
                return Err(TemplateError::UnnamedPath {
                    weapon: self.id.clone(),
                });
            }
            if !names.insert(path.name.as_str()) {
                return Err(TemplateError::DuplicatePath {
                    weapon: self.id.clone(),
                    path: path.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Authored template violates an instantiation invariant.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TemplateError {
    #[error("weapon template has an empty id")]
    EmptyId,

    #[error("weapon '{weapon}' has level_max 0")]
    ZeroLevelMax { weapon: WeaponId },

    #[error("weapon '{weapon}' has experience_to_next_level 0")]
    ZeroExperienceThreshold { weapon: WeaponId },

    #[error("weapon '{weapon}' has invalid attack range {range}")]
    InvalidAttackRange { weapon: WeaponId, range: f32 },

    #[error("weapon '{weapon}' stat {stat} has current {current} above max {max}")]
    StatAboveMax {
        weapon: WeaponId,
        stat: Stat,
        current: u32,
        max: u32,
    },

    #[error("weapon '{weapon}' has an evolution path without a name")]
    UnnamedPath { weapon: WeaponId },

    #[error("weapon '{weapon}' declares evolution path '{path}' twice")]
    DuplicatePath { weapon: WeaponId, path: String },
}

impl BuildupError for TemplateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyId => "TEMPLATE_EMPTY_ID",
            Self::ZeroLevelMax { .. } => "TEMPLATE_ZERO_LEVEL_MAX",
            Self::ZeroExperienceThreshold { .. } => "TEMPLATE_ZERO_EXPERIENCE_THRESHOLD",
            Self::InvalidAttackRange { .. } => "TEMPLATE_INVALID_ATTACK_RANGE",
            Self::StatAboveMax { .. } => "TEMPLATE_STAT_ABOVE_MAX",
            Self::UnnamedPath { .. } => "TEMPLATE_UNNAMED_PATH",
            Self::DuplicatePath { .. } => "TEMPLATE_DUPLICATE_PATH",
        }
    }
}
