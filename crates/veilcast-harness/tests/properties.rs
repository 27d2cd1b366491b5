//! Property-based protocol tests over the deterministic test suite.

use ff::Field;
use pasta_curves::pallas;
use proptest::prelude::*;
use veilcast_crypto::{EncryptionError, decrypt, decrypt_v2, encrypt, encrypt_v2};
use veilcast_harness::{TestSuite, keypair, seeded_rng};

type Base = pallas::Base;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every byte message survives an encrypt/decrypt roundtrip,
    /// whatever its length and whatever keys and ephemerals were drawn.
    #[test]
    fn prop_v2_roundtrip(
        message in prop::collection::vec(prop::num::u8::ANY, 0..100),
        key_seed in 0u64..1000,
        rng_seed in 0u64..1000,
    ) {
        let recipient = keypair(key_seed);
        let mut rng = seeded_rng(rng_seed);

        let ciphertext = encrypt_v2::<TestSuite, _>(&mut rng, &message, recipient.public_key());
        let recovered = decrypt_v2(&ciphertext, recipient.private_key());

        prop_assert_eq!(recovered, Ok(message));
    }

    /// The element count is fully determined by the message length:
    /// chunks of 31 bytes, always at least one pad byte, plus the tag.
    #[test]
    fn prop_v2_element_count(length in 0usize..200, rng_seed in 0u64..1000) {
        let recipient = keypair(9);
        let mut rng = seeded_rng(rng_seed);

        let ciphertext =
            encrypt_v2::<TestSuite, _>(&mut rng, &vec![0xA5; length], recipient.public_key());

        prop_assert_eq!(ciphertext.cipher_text.len(), length / 31 + 2);
        prop_assert_eq!(ciphertext.message_length, length);
    }

    /// Disturbing any single element always trips the tag check.
    #[test]
    fn prop_tampering_is_detected(
        message in prop::collection::vec(prop::num::u8::ANY, 1..100),
        position_seed in 0usize..1000,
        rng_seed in 0u64..1000,
    ) {
        let recipient = keypair(17);
        let mut rng = seeded_rng(rng_seed);

        let mut ciphertext =
            encrypt_v2::<TestSuite, _>(&mut rng, &message, recipient.public_key());
        let position = position_seed % ciphertext.cipher_text.len();
        ciphertext.cipher_text[position] += Base::ONE;

        prop_assert_eq!(
            decrypt_v2(&ciphertext, recipient.private_key()),
            Err(EncryptionError::AuthenticationFailed)
        );
    }

    /// A length claim beyond the chunks' capacity is rejected before
    /// any sponge work, whatever the rest of the ciphertext looks like.
    #[test]
    fn prop_overlong_length_claim_is_rejected(
        message in prop::collection::vec(prop::num::u8::ANY, 0..100),
        excess in 1usize..1000,
        rng_seed in 0u64..1000,
    ) {
        let recipient = keypair(23);
        let mut rng = seeded_rng(rng_seed);

        let mut ciphertext =
            encrypt_v2::<TestSuite, _>(&mut rng, &message, recipient.public_key());
        let capacity = 31 * (ciphertext.cipher_text.len() - 1);
        ciphertext.message_length = capacity + excess;

        prop_assert_eq!(
            decrypt_v2(&ciphertext, recipient.private_key()),
            Err(EncryptionError::LengthInconsistency {
                message_length: capacity + excess,
                capacity,
            })
        );
    }

    /// Legacy field-element roundtrip across both absorb parities.
    #[test]
    fn prop_legacy_roundtrip(
        values in prop::collection::vec(any::<u64>(), 0..8),
        key_seed in 0u64..1000,
        rng_seed in 0u64..1000,
    ) {
        let recipient = keypair(key_seed);
        let mut rng = seeded_rng(rng_seed);
        let message: Vec<Base> = values.into_iter().map(Base::from).collect();

        let ciphertext = encrypt::<TestSuite, _>(&mut rng, &message, recipient.public_key());
        let recovered = decrypt(&ciphertext, recipient.private_key());

        prop_assert_eq!(recovered, Ok(message));
    }
}
