//! # Inner-Product Argument Engine
//!
//! A round-based engine proving, in logarithmic communication, that a
//! commitment
//!
//! ```text
//! C = <a, g> + <a, b>·q
//! ```
//!
//! over Ristretto255 is well-formed, with interchangeable host and
//! device-accelerated backends for the folding and multiexponentiation work.
//!
//! ## Round protocol
//!
//! Each round the prover commits to the cross terms of the current vectors,
//!
//! ```text
//! L = <a_low, g_high> + <a_low, b_high>·q
//! R = <a_high, g_low> + <a_high, b_low>·q
//! ```
//!
//! the transcript absorbs `(L, R)` and yields a challenge `x`, and the
//! workspace folds to half length:
//!
//! ```text
//! a′ = x·a_low + x⁻¹·a_high
//! b′ = x⁻¹·b_low + x·b_high
//! g′ = x⁻¹·g_low + x·g_high
//! ```
//!
//! After `log2(n)` rounds a single opening `(a′, b′)` remains; the verifier
//! reconstructs the commitment the proof opens to from `(L_j, R_j, x_j, a′)`
//! and compares it against `C`.
//!
//! ## Backends
//!
//! [`IpaDriver`] dispatches the four protocol operations to the backend
//! chosen at construction. The host backend computes synchronously in host
//! memory; the device backend keeps the proof vectors device-resident and
//! overlaps its fold kernels and multiexponentiations. Both produce
//! byte-identical round messages for identical inputs and challenges.

pub mod descriptor;
pub mod device;
pub mod driver;
pub mod fold;
pub mod proof;
pub mod prover;
pub mod verifier;
pub mod workspace;

pub use descriptor::ProofDescriptor;
pub use driver::{Backend, IpaDriver};
pub use proof::InnerProductProof;
pub use prover::prove;
pub use verifier::verify;
pub use workspace::Workspace;
