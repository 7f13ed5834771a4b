//! Proving side of the argument

use crate::descriptor::ProofDescriptor;
use crate::driver::IpaDriver;
use crate::fold::fold_b_final;
use crate::proof::InnerProductProof;
use ipa_core::{IpaResult, Scalar, Transcript, TranscriptProtocol};

/// Produce a proof that the commitment of `a_vector` under the descriptor
/// is well-formed
///
/// Runs the round protocol to completion: each round commits to `(L, R)`,
/// absorbs them into the transcript, folds under the returned challenge,
/// and halves the workspace. Terminates once the vectors have length 1.
pub async fn prove(
    driver: &IpaDriver,
    transcript: &mut Transcript,
    descriptor: &ProofDescriptor,
    a_vector: &[Scalar],
) -> IpaResult<InnerProductProof> {
    transcript.innerproduct_domain_sep(descriptor.length() as u64);
    let mut workspace = driver.make_workspace(descriptor, a_vector).await?;

    let k = descriptor.num_rounds();
    let mut l_vector = Vec::with_capacity(k);
    let mut r_vector = Vec::with_capacity(k);
    let mut x_vector = Vec::with_capacity(k);

    while workspace.length() > 1 {
        let (l_value, r_value) = driver.commit_to_fold(&mut workspace).await?;
        transcript.append_point(b"L", &l_value);
        transcript.append_point(b"R", &r_value);
        let x = transcript.challenge_scalar(b"x");
        driver.fold(&mut workspace, &x).await?;

        l_vector.push(l_value);
        r_vector.push(r_value);
        x_vector.push(x);
    }

    let a_final = workspace.final_scalar()?;
    // the final round never folds b on the workspace; replay the schedule
    // on the public vector instead
    let b_final = fold_b_final(descriptor.b_vector(), &x_vector)?;

    Ok(InnerProductProof {
        l_vector,
        r_vector,
        a_final,
        b_final,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Backend;
    use ipa_core::{derive_g_vector, derive_q_value, IpaError};

    fn scalars(values: &[u64]) -> Vec<Scalar> {
        values.iter().map(|v| Scalar::from(*v)).collect()
    }

    fn descriptor_with(label: &'static [u8], b_vector: Vec<Scalar>) -> ProofDescriptor {
        let n = b_vector.len();
        ProofDescriptor::new(b_vector, derive_g_vector(label, n), derive_q_value(label)).unwrap()
    }

    #[tokio::test]
    async fn test_prove_emits_one_round_pair_per_halving() {
        let descriptor = descriptor_with(b"prove", scalars(&[1, 2, 3, 4, 5, 6, 7, 8]));
        let a_vector = scalars(&[8, 7, 6, 5, 4, 3, 2, 1]);

        for backend in [Backend::Host, Backend::Device] {
            let driver = IpaDriver::new(backend);
            let mut transcript = Transcript::new(b"ipa-test");
            let proof = prove(&driver, &mut transcript, &descriptor, &a_vector)
                .await
                .unwrap();

            assert_eq!(proof.num_rounds(), 3);
            assert_eq!(proof.l_vector.len(), proof.r_vector.len());
        }
    }

    #[tokio::test]
    async fn test_prove_length_one_has_zero_rounds() {
        let descriptor = descriptor_with(b"prove-one", scalars(&[7]));
        let driver = IpaDriver::new(Backend::Host);

        let mut transcript = Transcript::new(b"ipa-test");
        let proof = prove(&driver, &mut transcript, &descriptor, &scalars(&[9]))
            .await
            .unwrap();

        assert_eq!(proof.num_rounds(), 0);
        assert_eq!(proof.a_final, Scalar::from(9u64));
        assert_eq!(proof.b_final, Scalar::from(7u64));
    }

    #[tokio::test]
    async fn test_prove_rejects_length_mismatch() {
        let descriptor = descriptor_with(b"prove-mismatch", scalars(&[3, 4]));
        let driver = IpaDriver::new(Backend::Host);

        let mut transcript = Transcript::new(b"ipa-test");
        let result = prove(&driver, &mut transcript, &descriptor, &scalars(&[1])).await;
        assert_eq!(
            result.unwrap_err(),
            IpaError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }
}
