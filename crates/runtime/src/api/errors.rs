//! Unified error types surfaced by the runtime API.
//!
//! Every variant is a refusal: the driver leaves the session untouched when it
//! returns one.
use buildup_core::{BuildupError, ErrorSeverity, ItemId, KeyError, WeaponId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no weapon equipped")]
    NoWeaponEquipped,

    #[error("weapon '{0}' is not in the catalog")]
    UnknownWeapon(WeaponId),

    #[error("item '{0}' is not in the catalog")]
    UnknownItem(ItemId),

    #[error("item '{0}' is not in the satchel")]
    ItemNotHeld(ItemId),

    #[error("satchel has no room for '{item}'")]
    SatchelFull { item: ItemId },

    #[error("weapon '{weapon}' has no evolution path named '{path}'")]
    UnknownEvolution { weapon: WeaponId, path: String },

    #[error("evolution '{path}' is locked ({unmet} requirement(s) unmet)")]
    EvolutionLocked { path: String, unmet: usize },

    #[error("evolution '{0}' has no target weapon")]
    MissingEvolutionTarget(String),

    #[error(transparent)]
    UnknownName(#[from] KeyError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl BuildupError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArgument(_) => ErrorSeverity::Validation,
            Self::UnknownName(err) => err.severity(),
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoWeaponEquipped => "RUNTIME_NO_WEAPON_EQUIPPED",
            Self::UnknownWeapon(_) => "RUNTIME_UNKNOWN_WEAPON",
            Self::UnknownItem(_) => "RUNTIME_UNKNOWN_ITEM",
            Self::ItemNotHeld(_) => "RUNTIME_ITEM_NOT_HELD",
            Self::SatchelFull { .. } => "RUNTIME_SATCHEL_FULL",
            Self::UnknownEvolution { .. } => "RUNTIME_UNKNOWN_EVOLUTION",
            Self::EvolutionLocked { .. } => "RUNTIME_EVOLUTION_LOCKED",
            Self::MissingEvolutionTarget(_) => "RUNTIME_MISSING_EVOLUTION_TARGET",
            Self::UnknownName(err) => err.error_code(),
            Self::InvalidArgument(_) => "RUNTIME_INVALID_ARGUMENT",
        }
    }
}
