//! Fiat–Shamir transcript protocol for the inner-product argument

use curve25519_dalek::{ristretto::CompressedRistretto, scalar::Scalar};
use merlin::Transcript;

/// Extension trait adding the engine's protocol messages to [`Transcript`]
pub trait TranscriptProtocol {
    /// Bind the transcript to the argument domain and the vector length `n`
    fn innerproduct_domain_sep(&mut self, n: u64);

    /// Append a compressed round message to the transcript
    fn append_point(&mut self, label: &'static [u8], point: &CompressedRistretto);

    /// Append a scalar to the transcript
    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar);

    /// Draw a uniform scalar challenge from the transcript
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar;
}

impl TranscriptProtocol for Transcript {
    fn innerproduct_domain_sep(&mut self, n: u64) {
        self.append_message(b"dom-sep", b"inner-product-argument");
        self.append_message(b"n", &n.to_le_bytes());
    }

    fn append_point(&mut self, label: &'static [u8], point: &CompressedRistretto) {
        self.append_message(label, point.as_bytes());
    }

    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar) {
        self.append_message(label, scalar.as_bytes());
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar {
        let mut buf = [0u8; 64];
        self.challenge_bytes(label, &mut buf);
        Scalar::from_bytes_mod_order_wide(&buf)
    }
}
