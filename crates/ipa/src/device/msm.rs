//! Data-parallel multiexponentiation over device buffers

use ipa_core::{GroupElement, Scalar};
use rayon::prelude::*;

/// Compute `Σ scalars_i · points_i` across the accelerator's lanes
///
/// Inputs are chunked so every lane runs one windowed multiexponentiation;
/// partial sums reduce to a single point. Callers guarantee equal lengths.
pub(crate) fn multiexp(points: &[GroupElement], scalars: &[Scalar]) -> GroupElement {
    debug_assert_eq!(points.len(), scalars.len());
    if points.is_empty() {
        return GroupElement::identity();
    }

    let chunk = 1024usize.max(points.len() / rayon::current_num_threads().max(1));
    points
        .par_chunks(chunk)
        .zip(scalars.par_chunks(chunk))
        .map(|(point_chunk, scalar_chunk)| {
            GroupElement::multiscalar_mul(
                scalar_chunk.iter().cloned(),
                point_chunk.iter().cloned(),
            )
        })
        .reduce(GroupElement::identity, |a, b| a + b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipa_core::derive_g_vector;

    #[test]
    fn test_multiexp_matches_schoolbook() {
        let points = derive_g_vector(b"msm", 6);
        let scalars: Vec<Scalar> = (1..=6u64).map(Scalar::from).collect();

        let expected: GroupElement = points
            .iter()
            .zip(scalars.iter())
            .map(|(p, s)| *p * *s)
            .sum();
        assert_eq!(multiexp(&points, &scalars), expected);
    }

    #[test]
    fn test_multiexp_empty_is_identity() {
        assert_eq!(multiexp(&[], &[]), GroupElement::identity());
    }
}
