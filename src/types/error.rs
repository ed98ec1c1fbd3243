//! Error types for the abcore library.

use thiserror::Error;

/// All errors that can occur in the abcore library.
#[derive(Error, Debug)]
pub enum AbcError {
    /// IO error while reading an edge list.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Query window is empty or starts before timestamp 1.
    #[error("Invalid time window [{ts}, {te}]: expected 1 <= ts <= te")]
    InvalidWindow { ts: u64, te: u64 },

    /// Coreness thresholds must both be at least 1.
    #[error("Invalid coreness pair ({alpha}, {beta}): alpha and beta must be >= 1")]
    InvalidThreshold { alpha: u32, beta: u32 },
}

/// Convenience result type for abcore operations.
pub type AbcResult<T> = Result<T, AbcError>;
