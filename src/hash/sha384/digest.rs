//! RustCrypto `digest` trait implementations.
//!
//! These let [`Sha384`] stand in wherever a `digest::Digest` is expected,
//! for example `hmac::SimpleHmac<Sha384>`.

use digest::core_api::BlockSizeUser;
use digest::typenum::{U48, U128};
use digest::{FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update};

use super::Sha384;

impl HashMarker for Sha384 {}

impl OutputSizeUser for Sha384 {
    type OutputSize = U48;
}

impl BlockSizeUser for Sha384 {
    type BlockSize = U128;
}

impl Update for Sha384 {
    /// # Panics
    /// Panics if the session would exceed the SHA-384 message length limit.
    /// The trait has no way to report the error, and hashing on with a
    /// wrapped length would yield a wrong digest.
    fn update(&mut self, data: &[u8]) {
        if let Err(err) = Sha384::update(self, data) {
            panic!("{err}");
        }
    }
}

impl FixedOutput for Sha384 {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(&Sha384::finalize(self));
    }
}

impl FixedOutputReset for Sha384 {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.sum());
    }
}

impl Reset for Sha384 {
    fn reset(&mut self) {
        Sha384::reset(self);
    }
}
