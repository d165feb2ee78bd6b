//! Common error infrastructure for buildup-core.
//!
//! Domain-specific errors (e.g. [`crate::TemplateError`], [`crate::KeyError`]) are
//! defined next to the types they validate. This module provides the shared
//! classification used when logging or surfacing them.
//!
//! None of the core operations on a live weapon return errors: malformed content
//! degrades to "no effect". Errors only arise at the boundaries (parsing names,
//! validating authored templates).

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can carry on; the operation simply had no effect
/// - **Validation**: invalid input or content, should be fixed before retrying
/// - **Internal**: unexpected state inconsistency, indicates a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - session continues unaffected.
    ///
    /// Examples: unknown stat name typed into a tester, evolution still locked
    Recoverable,

    /// Validation error - invalid input or authored content.
    ///
    /// Examples: template with `current > max`, zero experience threshold
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all buildup errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BuildupError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
