//! Inner-product proof structure and wire format

use ipa_core::{CompressedRistretto, IpaError, IpaResult, Scalar};
use serde::{Deserialize, Serialize};

/// An inner-product argument proof
///
/// Carries one `(L, R)` pair per folding round plus the final openings of
/// the secret and public vectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerProductProof {
    /// L values from each folding round, `log2(n)` entries
    pub l_vector: Vec<CompressedRistretto>,
    /// R values from each folding round, `log2(n)` entries
    pub r_vector: Vec<CompressedRistretto>,
    /// Final folded value of the secret vector `a`
    pub a_final: Scalar,
    /// Final folded value of the public vector `b`
    pub b_final: Scalar,
}

impl InnerProductProof {
    /// Number of folding rounds
    pub fn num_rounds(&self) -> usize {
        self.l_vector.len()
    }

    /// Serialized length in bytes, `32·(2·k + 2)`
    pub fn serialized_size(&self) -> usize {
        32 * (2 * self.num_rounds() + 2)
    }

    /// Encode as `L_0‖R_0‖…‖L_{k−1}‖R_{k−1}‖a_final‖b_final`, each entry a
    /// canonical little-endian 32-byte string
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.serialized_size());
        for (l_value, r_value) in self.l_vector.iter().zip(&self.r_vector) {
            bytes.extend_from_slice(l_value.as_bytes());
            bytes.extend_from_slice(r_value.as_bytes());
        }
        bytes.extend_from_slice(self.a_final.as_bytes());
        bytes.extend_from_slice(self.b_final.as_bytes());
        bytes
    }

    /// Decode the wire format produced by [`to_bytes`](Self::to_bytes)
    pub fn from_bytes(bytes: &[u8]) -> IpaResult<Self> {
        if bytes.len() % 32 != 0 {
            return Err(IpaError::Serialization(
                "proof length is not a multiple of 32".to_string(),
            ));
        }
        let words = bytes.len() / 32;
        if words < 2 || (words - 2) % 2 != 0 {
            return Err(IpaError::Serialization(format!(
                "proof with {words} entries does not form (L, R) pairs plus two openings"
            )));
        }

        let k = (words - 2) / 2;
        let mut l_vector = Vec::with_capacity(k);
        let mut r_vector = Vec::with_capacity(k);
        for pair in bytes[..64 * k].chunks_exact(64) {
            l_vector.push(read_point(&pair[..32])?);
            r_vector.push(read_point(&pair[32..])?);
        }
        let a_final = read_scalar(&bytes[64 * k..64 * k + 32])?;
        let b_final = read_scalar(&bytes[64 * k + 32..])?;

        Ok(Self {
            l_vector,
            r_vector,
            a_final,
            b_final,
        })
    }
}

fn read_point(bytes: &[u8]) -> IpaResult<CompressedRistretto> {
    CompressedRistretto::from_slice(bytes)
        .map_err(|_| IpaError::Serialization("truncated group element".to_string()))
}

fn read_scalar(bytes: &[u8]) -> IpaResult<Scalar> {
    let array: [u8; 32] = bytes
        .try_into()
        .map_err(|_| IpaError::Serialization("truncated scalar".to_string()))?;
    Option::from(Scalar::from_canonical_bytes(array))
        .ok_or_else(|| IpaError::Serialization("non-canonical scalar".to_string()))
}
