//! Error types shared across the inner-product argument engine

use thiserror::Error;

/// Main error type for inner-product argument operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpaError {
    /// Fold preconditions on `mid` and the vector length violated
    #[error("invalid fold shape: mid {mid} for vector length {n}")]
    InvalidShape { mid: usize, n: usize },

    /// Inputs of unequal length where equality is required
    #[error("vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// `commit_to_fold` called on a workspace already reduced to length 1
    #[error("degenerate round: workspace vectors have length 1")]
    DegenerateRound,

    /// Round state machine transition not permitted
    #[error("protocol misuse: {0}")]
    ProtocolMisuse(String),

    /// Workspace residency does not match the backend it was handed to
    #[error("workspace memory does not reside in the backend's address space")]
    WrongMemorySpace,

    /// Allocation or kernel-scheduling failure
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Failure surfaced by a field, group, or transcript collaborator
    #[error("collaborator failure: {0}")]
    Collaborator(String),

    /// Proof bytes that do not decode to the wire tuple
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for inner-product argument operations
pub type IpaResult<T> = Result<T, IpaError>;
