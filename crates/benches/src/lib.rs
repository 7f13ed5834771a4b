//! Benchmarks for the inner-product argument engine
//!
//! Run with:
//! ```bash
//! cargo bench -p ipa-benches
//! ```

use ipa::ProofDescriptor;
use ipa_core::{derive_g_vector, derive_q_value, Scalar};
use rand::rngs::OsRng;
use rand::RngCore;

/// Uniform random scalars for benchmark inputs
pub fn random_scalars(n: usize) -> Vec<Scalar> {
    let mut rng = OsRng;
    (0..n)
        .map(|_| {
            let mut bytes = [0u8; 64];
            rng.fill_bytes(&mut bytes);
            Scalar::from_bytes_mod_order_wide(&bytes)
        })
        .collect()
}

/// A descriptor over random `b` and derived generators
pub fn bench_descriptor(n: usize) -> ProofDescriptor {
    ProofDescriptor::new(
        random_scalars(n),
        derive_g_vector(b"bench", n),
        derive_q_value(b"bench"),
    )
    .unwrap()
}
