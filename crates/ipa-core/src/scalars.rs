//! Scalar-field helpers over the Curve25519 scalar field

use crate::{IpaError, IpaResult};
use curve25519_dalek::scalar::Scalar;

/// Compute the inner product `<a, b>` of two scalar vectors
pub fn inner_product(a: &[Scalar], b: &[Scalar]) -> IpaResult<Scalar> {
    if a.len() != b.len() {
        return Err(IpaError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).sum())
}
