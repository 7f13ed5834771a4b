//! Verification side of the argument

use crate::descriptor::ProofDescriptor;
use crate::driver::IpaDriver;
use crate::fold::fold_b_final;
use crate::proof::InnerProductProof;
use ipa_core::{
    inner_product, CompressedRistretto, GroupElement, IpaError, IpaResult, Scalar, Transcript,
    TranscriptProtocol,
};

/// Per-round challenge squares, inverse squares, and the `s` vector
///
/// `s_i` is the product of one `x_j` or `x_j⁻¹` per round, where round `j`'s
/// challenge steers bit `k − 1 − j` of `i` (bit 0 least significant): the
/// coefficient the fold schedule leaves on `g_i` after every round. Built in
/// `O(n)` from `s_0 = Π x_j⁻¹` by reusing the prefix with the lowest set bit
/// cleared.
pub(crate) fn verification_scalars(
    x_vector: &[Scalar],
    n: usize,
) -> (Vec<Scalar>, Vec<Scalar>, Vec<Scalar>) {
    let k = x_vector.len();
    debug_assert_eq!(n, 1usize << k);

    let x_inv: Vec<Scalar> = x_vector.iter().map(|x| x.invert()).collect();
    let x_sq: Vec<Scalar> = x_vector.iter().map(|x| x * x).collect();
    let x_inv_sq: Vec<Scalar> = x_inv.iter().map(|x| x * x).collect();

    let mut s = Vec::with_capacity(n);
    s.push(x_inv.iter().copied().product());
    for i in 1..n {
        let bit = i.trailing_zeros() as usize;
        // flipping bit `bit` of the index from 0 to 1 trades x⁻¹ for x
        let prefix = s[i & (i - 1)];
        s.push(prefix * x_sq[k - 1 - bit]);
    }

    (x_sq, x_inv_sq, s)
}

/// Reconstruct the commitment a proof opens to:
///
/// ```text
/// expected = <a′·s, g> + (a′·<s, b>)·q − Σ_j (x_j²·L_j + x_j⁻²·R_j)
/// ```
///
/// evaluated as a single multiexponentiation and compressed.
pub(crate) fn expected_commitment(
    descriptor: &ProofDescriptor,
    l_vector: &[CompressedRistretto],
    r_vector: &[CompressedRistretto],
    x_vector: &[Scalar],
    a_value: &Scalar,
) -> IpaResult<CompressedRistretto> {
    let k = descriptor.num_rounds();
    for actual in [l_vector.len(), r_vector.len(), x_vector.len()] {
        if actual != k {
            return Err(IpaError::LengthMismatch { expected: k, actual });
        }
    }

    let n = descriptor.length();
    let (x_sq, x_inv_sq, s) = verification_scalars(x_vector, n);
    let product = inner_product(&s, descriptor.b_vector())?;

    let mut scalars = Vec::with_capacity(n + 1 + 2 * k);
    let mut points = Vec::with_capacity(n + 1 + 2 * k);

    scalars.extend(s.iter().map(|s_i| a_value * s_i));
    points.extend_from_slice(descriptor.g_vector());
    scalars.push(a_value * product);
    points.push(*descriptor.q_value());

    for (x_sq_j, l_value) in x_sq.iter().zip(l_vector) {
        scalars.push(-x_sq_j);
        points.push(GroupElement::from_compressed(l_value)?);
    }
    for (x_inv_sq_j, r_value) in x_inv_sq.iter().zip(r_vector) {
        scalars.push(-x_inv_sq_j);
        points.push(GroupElement::from_compressed(r_value)?);
    }

    Ok(GroupElement::multiscalar_mul(scalars, points).compress())
}

/// Verify a proof against the commitment `C`
///
/// Regenerates the challenges from the transcript, checks the proof's
/// `b_final` against the public `b` folded under those challenges, and
/// accepts iff the reconstructed commitment equals `C`.
pub async fn verify(
    driver: &IpaDriver,
    transcript: &mut Transcript,
    descriptor: &ProofDescriptor,
    proof: &InnerProductProof,
    commitment: &CompressedRistretto,
) -> IpaResult<bool> {
    let k = descriptor.num_rounds();
    for actual in [proof.l_vector.len(), proof.r_vector.len()] {
        if actual != k {
            return Err(IpaError::LengthMismatch { expected: k, actual });
        }
    }

    transcript.innerproduct_domain_sep(descriptor.length() as u64);
    let mut x_vector = Vec::with_capacity(k);
    for (l_value, r_value) in proof.l_vector.iter().zip(&proof.r_vector) {
        transcript.append_point(b"L", l_value);
        transcript.append_point(b"R", r_value);
        x_vector.push(transcript.challenge_scalar(b"x"));
    }

    if fold_b_final(descriptor.b_vector(), &x_vector)? != proof.b_final {
        return Ok(false);
    }

    let expected = driver
        .compute_expected_commitment(
            descriptor,
            &proof.l_vector,
            &proof.r_vector,
            &x_vector,
            &proof.a_final,
        )
        .await?;
    Ok(expected == *commitment)
}
