//! Group operations over the Ristretto255 prime-order group

use crate::{IpaError, IpaResult};
use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::{Identity, VartimeMultiscalarMul},
};
use serde::{Deserialize, Serialize};

/// A point of the Ristretto255 group, held in extended projective form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupElement(pub RistrettoPoint);

impl GroupElement {
    /// Identity element
    pub fn identity() -> Self {
        Self(RistrettoPoint::identity())
    }

    /// Decode a 32-byte canonical encoding
    pub fn from_compressed(compressed: &CompressedRistretto) -> IpaResult<Self> {
        compressed
            .decompress()
            .map(Self)
            .ok_or_else(|| IpaError::Collaborator("invalid compressed group element".to_string()))
    }

    /// Canonical 32-byte encoding of this point
    pub fn compress(&self) -> CompressedRistretto {
        self.0.compress()
    }

    /// Multi-scalar multiplication `Σ scalars_i · points_i`
    pub fn multiscalar_mul<I, J>(scalars: I, points: J) -> Self
    where
        I: IntoIterator<Item = Scalar>,
        J: IntoIterator<Item = GroupElement>,
    {
        Self(RistrettoPoint::vartime_multiscalar_mul(
            scalars,
            points.into_iter().map(|p| p.0),
        ))
    }
}

impl std::ops::Add for GroupElement {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::ops::AddAssign for GroupElement {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::ops::Mul<Scalar> for GroupElement {
    type Output = Self;

    fn mul(self, scalar: Scalar) -> Self {
        Self(self.0 * scalar)
    }
}

impl std::ops::Neg for GroupElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for GroupElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, p| acc + p)
    }
}

impl From<RistrettoPoint> for GroupElement {
    fn from(point: RistrettoPoint) -> Self {
        Self(point)
    }
}

impl From<GroupElement> for RistrettoPoint {
    fn from(element: GroupElement) -> Self {
        element.0
    }
}
