//! Error types for the lattice explorer.
//!
//! The geometric core never fails: unknown groups produce an empty root set
//! and a missing decay channel is `None`. These errors cover the strict
//! entry points around it (parsing, basis edits, session selection, sweep
//! and config validation).

use thiserror::Error;

/// Errors raised outside the pure projection core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LatticeError {
    /// Group name did not match any of G2, F4, E6, E7, E8.
    #[error("unknown Lie group type: {name:?}")]
    UnknownGroup { name: String },

    /// Basis rows have exactly 8 coefficients.
    #[error("basis coefficient index {index} out of range (rows have 8 entries)")]
    CoefficientOutOfRange { index: usize },

    /// Selected node id is not an index into the current root set.
    #[error("node {id} out of range for a root set of {len}")]
    NodeOutOfRange { id: usize, len: usize },

    /// Sweep cannot produce any sample.
    #[error("invalid parameter sweep: {reason}")]
    InvalidSweep { reason: String },

    /// Configuration could not be read, parsed or validated.
    #[error("configuration error: {message}")]
    Config { message: String },
}

/// Result alias used across the crate.
pub type LatticeResult<T> = Result<T, LatticeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = LatticeError::UnknownGroup { name: "A3".into() };
        assert_eq!(err.to_string(), "unknown Lie group type: \"A3\"");

        let err = LatticeError::NodeOutOfRange { id: 300, len: 240 };
        assert!(err.to_string().contains("300"));
        assert!(err.to_string().contains("240"));
    }
}
