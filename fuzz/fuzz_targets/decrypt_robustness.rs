//! Decryption of attacker-shaped ciphertexts must never panic: every
//! input either authenticates or returns a structured error.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use veilcast_crypto::{CipherTextV2, codec, decrypt_v2};
use veilcast_harness::{TestSuite, keypair};

#[derive(Arbitrary, Debug)]
struct Input {
    key_seed: u64,
    message_length: usize,
    /// Raw chunk material; 31-byte groups always decode to valid
    /// field elements
    elements: Vec<[u8; 31]>,
}

fuzz_target!(|input: Input| {
    let recipient = keypair(input.key_seed);

    let flat: Vec<u8> = input.elements.iter().flatten().copied().collect();
    let ciphertext: CipherTextV2<TestSuite> = CipherTextV2 {
        public_key: *recipient.public_key(),
        cipher_text: codec::bytes_to_fields(&flat),
        message_length: input.message_length,
    };

    // Forged ciphertexts must be rejected, never mishandled
    let _ = decrypt_v2(&ciphertext, recipient.private_key());
});
