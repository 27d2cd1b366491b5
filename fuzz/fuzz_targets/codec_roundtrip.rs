//! Pad/chunk/pack and the reverse path must be lossless for every byte
//! message.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pasta_curves::pallas;
use veilcast_crypto::codec;

fuzz_target!(|message: &[u8]| {
    let padded = codec::pad::<pallas::Base>(message);
    assert!(padded.len() % codec::chunk_size::<pallas::Base>() == 0);
    assert!(padded.len() > message.len());

    let elements = codec::bytes_to_fields::<pallas::Base>(&padded);
    let flat = codec::fields_to_bytes(&elements);
    assert_eq!(flat, padded);

    let recovered = codec::unpad(flat, message.len());
    assert_eq!(recovered, message);
});
