//! Device fold kernels
//!
//! The scalar fold launches as two kernels over disjoint index ranges (the
//! paired fold and the odd tail). The generator fold first decomposes the
//! two multipliers into a joint per-bit schedule on the host, then each
//! work-item replays the schedule with a shared double-and-add walk, reading
//! its two generator slots exactly once.

use super::memory::DeviceVector;
use crate::fold::check_fold_shape;
use ipa_core::{GroupElement, IpaResult, Scalar};
use rayon::prelude::*;
use tokio::task::JoinHandle;

/// Upper bound on the bit length of a canonical scalar
pub(crate) const MAX_SCALAR_BITS: usize = 253;

/// Joint bit decomposition of a fold's two multipliers
///
/// Entry `j` packs bit `j` of `m_low` in bit 0 and bit `j` of `m_high` in
/// bit 1; trailing all-zero entries are dropped. An empty schedule encodes
/// the all-zero multiplier pair.
pub(crate) fn decompose_fold_multipliers(m_low: &Scalar, m_high: &Scalar) -> Vec<u8> {
    let low_bytes = m_low.to_bytes();
    let high_bytes = m_high.to_bytes();

    let mut decomposition = vec![0u8; MAX_SCALAR_BITS];
    for (j, entry) in decomposition.iter_mut().enumerate() {
        let low_bit = (low_bytes[j / 8] >> (j % 8)) & 1;
        let high_bit = (high_bytes[j / 8] >> (j % 8)) & 1;
        *entry = low_bit | (high_bit << 1);
    }
    while decomposition.last() == Some(&0) {
        decomposition.pop();
    }
    decomposition
}

/// One work-item of the paired generator fold: `m_low·lo + m_high·hi`
fn fold_generator_pair(decomposition: &[u8], lo: &GroupElement, hi: &GroupElement) -> GroupElement {
    let table = [*lo, *hi, *lo + *hi];
    let mut acc = GroupElement::identity();
    for &bits in decomposition.iter().rev() {
        acc = acc + acc;
        if bits != 0 {
            acc += table[bits as usize - 1];
        }
    }
    acc
}

/// One work-item of the odd tail: `m_low·lo`
fn fold_generator_tail(decomposition: &[u8], lo: &GroupElement) -> GroupElement {
    let mut acc = GroupElement::identity();
    for &bits in decomposition.iter().rev() {
        acc = acc + acc;
        if bits & 1 != 0 {
            acc += *lo;
        }
    }
    acc
}

/// Launch the scalar fold; the handle resolves once `scalars[..mid]` holds
/// the folded vector
pub(crate) fn launch_scalar_fold(
    mut scalars: DeviceVector<Scalar>,
    m_low: Scalar,
    m_high: Scalar,
    mid: usize,
) -> IpaResult<JoinHandle<DeviceVector<Scalar>>> {
    check_fold_shape(scalars.len(), mid)?;
    let m = scalars.len() - mid;

    Ok(tokio::task::spawn_blocking(move || {
        let (lo, hi) = scalars.as_mut_slice().split_at_mut(mid);
        let hi = &hi[..];
        let (paired, tail) = lo.split_at_mut(m);
        rayon::join(
            || {
                paired.par_iter_mut().enumerate().for_each(|(i, s)| {
                    *s = m_low * *s + m_high * hi[i];
                })
            },
            || {
                tail.par_iter_mut().for_each(|s| {
                    *s = m_low * *s;
                })
            },
        );
        scalars
    }))
}

/// Launch the generator fold; the handle resolves once `generators[..mid]`
/// holds the folded vector
pub(crate) fn launch_generator_fold(
    mut generators: DeviceVector<GroupElement>,
    m_low: Scalar,
    m_high: Scalar,
    mid: usize,
) -> IpaResult<JoinHandle<DeviceVector<GroupElement>>> {
    check_fold_shape(generators.len(), mid)?;
    let m = generators.len() - mid;
    let decomposition = decompose_fold_multipliers(&m_low, &m_high);

    Ok(tokio::task::spawn_blocking(move || {
        let (lo, hi) = generators.as_mut_slice().split_at_mut(mid);
        let hi = &hi[..];
        let (paired, tail) = lo.split_at_mut(m);
        rayon::join(
            || {
                paired.par_iter_mut().enumerate().for_each(|(i, g)| {
                    *g = fold_generator_pair(&decomposition, g, &hi[i]);
                })
            },
            || {
                tail.par_iter_mut().for_each(|g| {
                    *g = fold_generator_tail(&decomposition, g);
                })
            },
        );
        generators
    }))
}
