//! Any single-element disturbance of a genuine ciphertext must fail
//! authentication rather than decrypt to something.

#![no_main]

use arbitrary::Arbitrary;
use ff::Field;
use libfuzzer_sys::fuzz_target;
use pasta_curves::pallas;
use veilcast_crypto::{EncryptionError, decrypt_v2, encrypt_v2};
use veilcast_harness::{TestSuite, keypair, seeded_rng};

#[derive(Arbitrary, Debug)]
struct Input {
    key_seed: u64,
    rng_seed: u64,
    message: Vec<u8>,
    position: usize,
    delta: u64,
}

fuzz_target!(|input: Input| {
    let recipient = keypair(input.key_seed);
    let mut rng = seeded_rng(input.rng_seed);

    let mut ciphertext =
        encrypt_v2::<TestSuite, _>(&mut rng, &input.message, recipient.public_key());

    let delta = pallas::Base::from(input.delta);
    if delta == pallas::Base::ZERO {
        return;
    }
    let position = input.position % ciphertext.cipher_text.len();
    ciphertext.cipher_text[position] += delta;

    assert_eq!(
        decrypt_v2(&ciphertext, recipient.private_key()),
        Err(EncryptionError::AuthenticationFailed)
    );
});
