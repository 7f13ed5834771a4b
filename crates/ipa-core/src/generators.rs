//! Deterministic derivation of the argument's public generators

use crate::GroupElement;
use curve25519_dalek::ristretto::RistrettoPoint;
use sha2::Sha512;

/// Hash a label to a Ristretto point
fn hash_to_point(label: &[u8]) -> GroupElement {
    GroupElement(RistrettoPoint::hash_from_bytes::<Sha512>(label))
}

/// Derive the length-`n` generator vector `g`
///
/// Generators are independent of one another and of [`derive_q_value`]'s
/// output; callers on both sides of a proof obtain identical vectors from the
/// same label.
pub fn derive_g_vector(label: &[u8], n: usize) -> Vec<GroupElement> {
    (0..n)
        .map(|i| {
            let mut bytes = Vec::with_capacity(label.len() + 12);
            bytes.extend_from_slice(b"ipa-g-");
            bytes.extend_from_slice(label);
            bytes.extend_from_slice(&(i as u64).to_le_bytes());
            hash_to_point(&bytes)
        })
        .collect()
}

/// Derive the auxiliary commitment generator `q`
pub fn derive_q_value(label: &[u8]) -> GroupElement {
    let mut bytes = Vec::with_capacity(label.len() + 6);
    bytes.extend_from_slice(b"ipa-q-");
    bytes.extend_from_slice(label);
    hash_to_point(&bytes)
}
