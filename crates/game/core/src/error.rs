//! Common error infrastructure for quiver-core.
//!
//! Domain-specific errors (`NoFireItem`, `QuiverError`, `PersistError`) are
//! defined next to the operations that raise them. This module provides the
//! shared classification used by callers to decide how to react.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation family has its own error enum
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Deterministic**: No allocation or I/O is needed to classify an error

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Expected outcomes the player can act on (nothing to fire)
/// - **Validation**: Invalid requests that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Corrupted data; the caller must not continue with it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the player may pick up or select something else.
    ///
    /// Examples: no suitable missiles, every candidate is inscribed `=f`
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: quivering the wielded weapon, selecting an empty slot
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - saved state is corrupted, cannot continue.
    ///
    /// Examples: bad record cookie, active category outside the domain
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error means the data at hand cannot be trusted.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all quiver-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
