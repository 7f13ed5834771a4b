//! # IPA Core
//!
//! Foundational types for the Ristretto255 inner-product argument engine:
//!
//! - group operations over Ristretto255 and scalar-field helpers
//! - Fiat–Shamir transcript protocol
//! - deterministic generator derivation
//! - the shared error taxonomy
//!
//! ## Mathematical Background
//!
//! The argument proves that a commitment
//!
//! ```text
//! C = <a, g> + <a, b>·q
//! ```
//!
//! is well-formed, where `a` and `b` are secret scalar vectors, `g` is a
//! public generator vector, and `q` is a public auxiliary generator. Each
//! round the prover commits to cross terms `(L, R)`, receives a challenge
//! `x`, and folds `a`, `b`, and `g` to half length; after `log2(n)` rounds a
//! single scalar opening remains.

pub mod errors;
pub mod generators;
pub mod group;
pub mod scalars;
pub mod transcript;

pub use errors::*;
pub use generators::*;
pub use group::*;
pub use scalars::*;
pub use transcript::*;

/// Re-export commonly used types from curve25519-dalek
pub use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
};

/// Re-export merlin transcript
pub use merlin::Transcript;
