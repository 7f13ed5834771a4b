//! Host fold operators for the round reduction
//!
//! A fold reduces a length-`n` vector to length `mid` under two multipliers:
//!
//! ```text
//! v[i] ← m_low·v[i] + m_high·v[mid + i]    for i < n − mid
//! v[i] ← m_low·v[i]                        for n − mid ≤ i < mid
//! ```
//!
//! The second case only arises when the high half is shorter than `mid`
//! (`n < 2·mid`). The operator never shrinks its input; callers truncate to
//! `mid` afterwards.

use ipa_core::{GroupElement, IpaError, IpaResult, Scalar};

/// Validate the fold preconditions `0 < mid < n ≤ 2·mid`
pub(crate) fn check_fold_shape(n: usize, mid: usize) -> IpaResult<()> {
    if mid == 0 || mid >= n || n > 2 * mid {
        return Err(IpaError::InvalidShape { mid, n });
    }
    Ok(())
}

/// Fold a scalar vector in place under `(m_low, m_high)`
pub fn fold_scalars(
    scalars: &mut [Scalar],
    m_low: &Scalar,
    m_high: &Scalar,
    mid: usize,
) -> IpaResult<()> {
    check_fold_shape(scalars.len(), mid)?;
    let m = scalars.len() - mid;

    for i in 0..m {
        scalars[i] = m_low * scalars[i] + m_high * scalars[mid + i];
    }
    for s in &mut scalars[m..mid] {
        *s = m_low * *s;
    }
    Ok(())
}

/// Fold a generator vector in place under `(m_low, m_high)`
pub fn fold_generators(
    generators: &mut [GroupElement],
    m_low: &Scalar,
    m_high: &Scalar,
    mid: usize,
) -> IpaResult<()> {
    check_fold_shape(generators.len(), mid)?;
    let m = generators.len() - mid;

    for i in 0..m {
        generators[i] = generators[i] * *m_low + generators[mid + i] * *m_high;
    }
    for g in &mut generators[m..mid] {
        *g = *g * *m_low;
    }
    Ok(())
}

/// Fold a copy of the public `b` vector to its final opening under the
/// recorded challenge schedule
pub(crate) fn fold_b_final(b_vector: &[Scalar], x_vector: &[Scalar]) -> IpaResult<Scalar> {
    let mut b = b_vector.to_vec();
    for x in x_vector {
        let mid = b.len() / 2;
        fold_scalars(&mut b, &x.invert(), x, mid)?;
        b.truncate(mid);
    }
    b.first().copied().ok_or(IpaError::InvalidShape { mid: 0, n: 0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipa_core::derive_g_vector;
    use proptest::prelude::*;

    fn scalars(values: &[u64]) -> Vec<Scalar> {
        values.iter().map(|v| Scalar::from(*v)).collect()
    }

    #[test]
    fn test_fold_scalars_even() {
        let mut v = scalars(&[1, 2, 3, 4]);
        let m_low = Scalar::from(10u64);
        let m_high = Scalar::from(100u64);

        fold_scalars(&mut v, &m_low, &m_high, 2).unwrap();
        assert_eq!(v[0], Scalar::from(10 + 300u64));
        assert_eq!(v[1], Scalar::from(20 + 400u64));
    }

    #[test]
    fn test_fold_scalars_odd_tail() {
        // n = 3, mid = 2: the high half has a single entry
        let mut v = scalars(&[1, 2, 3]);
        let m_low = Scalar::from(10u64);
        let m_high = Scalar::from(100u64);

        fold_scalars(&mut v, &m_low, &m_high, 2).unwrap();
        assert_eq!(v[0], Scalar::from(10 + 300u64));
        assert_eq!(v[1], Scalar::from(20u64));
    }

    #[test]
    fn test_fold_scalars_rejects_bad_shapes() {
        let mut v = scalars(&[1, 2, 3, 4]);
        let one = Scalar::ONE;

        for mid in [0usize, 4, 5, 1] {
            // mid = 1 violates n ≤ 2·mid for n = 4
            assert_eq!(
                fold_scalars(&mut v, &one, &one, mid),
                Err(IpaError::InvalidShape { mid, n: 4 })
            );
        }
        // preconditions fail before any mutation
        assert_eq!(v, scalars(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_fold_generators_matches_scalar_definition() {
        let mut g = derive_g_vector(b"fold", 4);
        let original = g.clone();
        let x = Scalar::from(5u64);
        let x_inv = x.invert();

        fold_generators(&mut g, &x_inv, &x, 2).unwrap();
        assert_eq!(g[0], original[0] * x_inv + original[2] * x);
        assert_eq!(g[1], original[1] * x_inv + original[3] * x);
    }

    #[test]
    fn test_fold_generators_odd_tail() {
        let mut g = derive_g_vector(b"fold", 3);
        let original = g.clone();
        let x = Scalar::from(7u64);
        let x_inv = x.invert();

        fold_generators(&mut g, &x_inv, &x, 2).unwrap();
        assert_eq!(g[0], original[0] * x_inv + original[2] * x);
        assert_eq!(g[1], original[1] * x_inv);
    }

    #[test]
    fn test_fold_b_final_matches_one_round_by_hand() {
        let b = scalars(&[3, 4]);
        let x = Scalar::from(5u64);

        // b' = 5⁻¹·3 + 5·4
        let expected = x.invert() * Scalar::from(3u64) + x * Scalar::from(4u64);
        assert_eq!(fold_b_final(&b, &[x]).unwrap(), expected);
    }

    proptest! {
        /// Folding is linear in `(m_low, m_high)`
        #[test]
        fn test_fold_linearity(
            values in proptest::collection::vec(0u64..1 << 40, 2..=16),
            low in 1u64..1 << 40,
            high in 1u64..1 << 40,
        ) {
            let n = values.len();
            let mid = n.div_ceil(2);
            let m_low = Scalar::from(low);
            let m_high = Scalar::from(high);

            let mut folded = scalars(&values);
            fold_scalars(&mut folded, &m_low, &m_high, mid).unwrap();

            let mut low_part = scalars(&values);
            fold_scalars(&mut low_part, &Scalar::ONE, &Scalar::ZERO, mid).unwrap();
            let mut high_part = scalars(&values);
            fold_scalars(&mut high_part, &Scalar::ZERO, &Scalar::ONE, mid).unwrap();

            for i in 0..mid {
                prop_assert_eq!(folded[i], m_low * low_part[i] + m_high * high_part[i]);
            }
        }
    }
}
