//! Error Types
//!
//! Every error the store can report is a caller-contract violation: the
//! graph never fails because of its own state. Removing something that is
//! not there is not an error at all; those operations report absence through
//! their return value instead.

use thiserror::Error;

/// Errors produced by [`Digraph`](crate::graph::Digraph) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DigraphError {
    /// The edge did not supply an origin node.
    #[error("edge has no origin node")]
    MissingOrigin,

    /// The edge did not supply a destination node.
    #[error("edge has no destination node")]
    MissingDestination,
}

impl DigraphError {
    /// Whether this error was caused by a malformed argument.
    ///
    /// All current variants are; the method exists so callers can branch on
    /// the error class without matching every variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::MissingOrigin | Self::MissingDestination)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DigraphError>;
