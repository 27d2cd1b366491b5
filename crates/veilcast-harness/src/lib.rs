//! Deterministic test harness for the veilcast encryption protocol.
//!
//! The protocol crate is generic over its sponge; production deployments
//! supply a Poseidon-style permutation. This crate supplies a
//! deterministic stand-in ([`TestSponge`]) plus seeded-RNG helpers so
//! protocol behavior can be tested reproducibly without a production
//! permutation. Nothing here is cryptographically secure and nothing
//! here belongs in a deployment.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod sponge;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use veilcast_crypto::{Keypair, PallasSuite};

pub use sponge::TestSponge;

/// The Pallas suite bound to the deterministic test sponge.
pub type TestSuite = PallasSuite<TestSponge>;

/// A seeded ChaCha RNG for reproducible scalar sampling in tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A reproducible key pair derived from a seed.
pub fn keypair(seed: u64) -> Keypair<TestSuite> {
    Keypair::generate(&mut seeded_rng(seed))
}

#[cfg(test)]
mod tests {
    use super::{keypair, seeded_rng};
    use rand::RngCore;

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut first = seeded_rng(42);
        let mut second = seeded_rng(42);
        assert_eq!(first.next_u64(), second.next_u64());
    }

    #[test]
    fn keypairs_are_reproducible_per_seed() {
        assert_eq!(keypair(7).public_key(), keypair(7).public_key());
        assert_ne!(keypair(7).public_key(), keypair(8).public_key());
    }
}
