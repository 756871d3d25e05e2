//! Common error infrastructure for pack-core.
//!
//! Domain-specific errors (e.g. [`crate::RngError`], [`crate::SpawnError`]) are
//! defined next to the operations that raise them. This module only provides the
//! classification shared by all of them, so callers can decide how to surface a
//! failure without matching on every variant.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input (unknown ids, malformed ranges). Retrying with
///   the same input fails the same way.
/// - **Internal**: a consistency check that the loader should have made
///   impossible fired anyway. Indicates a bug or a hand-built snapshot.
/// - **Fatal**: the loaded data cannot produce packs at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all pack generation errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on what the caller can do about it
/// - Error codes are stable identifiers, safe for metrics and tests
pub trait PackError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
