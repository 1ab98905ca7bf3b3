//! Error types for ordering calls.

use thiserror::Error;

/// Precondition violations detected before any ordering work begins.
///
/// Both variants are contract errors raised synchronously to the caller;
/// nothing is caught or retried internally, and no partial result is ever
/// produced alongside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OrderError {
    /// A required input was never supplied to a
    /// [`PriorityOrderer`](crate::ordering::PriorityOrderer).
    ///
    /// Carries the parameter name. An empty-but-present sequence is a valid
    /// input and does not raise this.
    #[error("missing required argument `{0}`")]
    MissingArgument(&'static str),

    /// The priority list contains the same key more than once.
    ///
    /// Carries the parameter name. Duplicates are rejected, never silently
    /// deduplicated.
    #[error("`{0}` contains duplicate values")]
    DuplicatePriority(&'static str),
}
