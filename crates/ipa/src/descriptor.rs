//! Immutable public inputs of a proof

use ipa_core::{inner_product, GroupElement, IpaError, IpaResult, Scalar};
use curve25519_dalek::ristretto::CompressedRistretto;

/// The public inputs shared by the prover and verifier of one proof
///
/// A descriptor is immutable and may back any number of concurrent
/// workspaces.
#[derive(Debug, Clone)]
pub struct ProofDescriptor {
    b_vector: Vec<Scalar>,
    g_vector: Vec<GroupElement>,
    q_value: GroupElement,
}

impl ProofDescriptor {
    /// Create a descriptor from its public inputs
    ///
    /// `b_vector` and `g_vector` must have the same power-of-two length.
    pub fn new(
        b_vector: Vec<Scalar>,
        g_vector: Vec<GroupElement>,
        q_value: GroupElement,
    ) -> IpaResult<Self> {
        if b_vector.len() != g_vector.len() {
            return Err(IpaError::LengthMismatch {
                expected: b_vector.len(),
                actual: g_vector.len(),
            });
        }
        if !b_vector.len().is_power_of_two() {
            return Err(IpaError::InvalidShape {
                mid: b_vector.len() / 2,
                n: b_vector.len(),
            });
        }

        Ok(Self {
            b_vector,
            g_vector,
            q_value,
        })
    }

    /// The vector length `n`
    pub fn length(&self) -> usize {
        self.b_vector.len()
    }

    /// The number of folding rounds, `log2(n)`
    pub fn num_rounds(&self) -> usize {
        self.length().trailing_zeros() as usize
    }

    /// The public scalar vector `b`
    pub fn b_vector(&self) -> &[Scalar] {
        &self.b_vector
    }

    /// The public generator vector `g`
    pub fn g_vector(&self) -> &[GroupElement] {
        &self.g_vector
    }

    /// The auxiliary commitment generator `q`
    pub fn q_value(&self) -> &GroupElement {
        &self.q_value
    }

    /// Compute the commitment `C = <a, g> + <a, b>·q` for a secret `a`
    pub fn commit(&self, a_vector: &[Scalar]) -> IpaResult<CompressedRistretto> {
        if a_vector.len() != self.length() {
            return Err(IpaError::LengthMismatch {
                expected: self.length(),
                actual: a_vector.len(),
            });
        }

        let product = inner_product(a_vector, &self.b_vector)?;
        let commit = GroupElement::multiscalar_mul(
            a_vector.iter().cloned().chain(std::iter::once(product)),
            self.g_vector.iter().cloned().chain(std::iter::once(self.q_value)),
        );
        Ok(commit.compress())
    }
}
