//! Byte-string framing: padding, chunking, and field-element packing.
//!
//! Byte messages are padded with zero bytes and split into fixed-size
//! chunks, each packed into one field element. The chunk size is derived
//! from the field so a full chunk always sits strictly below the
//! modulus: 31 bytes for Pallas-sized (~2^254) fields, leaving the top
//! byte of the canonical representation zero.
//!
//! Padding always rounds up to the *next* multiple of the chunk size,
//! even when the message length is already an exact multiple. That extra
//! full block is load-bearing: it fixes where the frame bit falls, and
//! changing it breaks compatibility with existing ciphertexts.

use ff::PrimeField;

/// Number of message bytes packed into one field element.
///
/// One byte less than the field's bit width allows, so a full chunk can
/// never reach the modulus. 31 for the Pallas base field.
pub const fn chunk_size<F: PrimeField>() -> usize {
    (F::NUM_BITS as usize - 1) / 8
}

/// Extend `message` with zero bytes to the next multiple of the chunk
/// size.
///
/// Always appends at least one byte: an exact multiple gains a full
/// extra block. The padded length is `(len / size + 1) * size`.
pub fn pad<F: PrimeField>(message: &[u8]) -> Vec<u8> {
    let size = chunk_size::<F>();
    let padded_length = (message.len() / size + 1) * size;

    let mut padded = vec![0u8; padded_length];
    padded[..message.len()].copy_from_slice(message);
    padded
}

/// Truncate decrypted bytes to the original message length, discarding
/// the padding (including the structurally mandatory full block when the
/// length was an exact multiple of the chunk size).
pub fn unpad(mut flat: Vec<u8>, message_length: usize) -> Vec<u8> {
    flat.truncate(message_length);
    flat
}

/// Pack padded bytes into field elements, one per chunk.
///
/// Callers normally pass the output of [`pad`]; a trailing partial chunk
/// is accepted and packed the same way (its missing bytes read as zero).
pub fn bytes_to_fields<F: PrimeField>(padded: &[u8]) -> Vec<F> {
    padded.chunks(chunk_size::<F>()).map(field_from_chunk).collect()
}

/// Unpack field elements back into bytes, taking the chunk-size prefix
/// of each element's canonical little-endian representation.
pub fn fields_to_bytes<F: PrimeField>(elements: &[F]) -> Vec<u8> {
    let size = chunk_size::<F>();
    let mut flat = Vec::with_capacity(elements.len() * size);
    for element in elements {
        flat.extend_from_slice(&element.to_repr().as_ref()[..size]);
    }
    flat
}

/// Pack one chunk into a field element via the canonical little-endian
/// representation. The chunk is strictly shorter than the representation,
/// so the value is always below the modulus.
fn field_from_chunk<F: PrimeField>(chunk: &[u8]) -> F {
    let mut repr = F::Repr::default();
    repr.as_mut()[..chunk.len()].copy_from_slice(chunk);

    let Some(element) = Option::<F>::from(F::from_repr(repr)) else {
        unreachable!("a chunk-size value is always below the field modulus");
    };

    element
}

#[cfg(test)]
mod tests {
    use ff::Field;
    use pasta_curves::pallas;

    use super::{bytes_to_fields, chunk_size, fields_to_bytes, pad, unpad};

    type Base = pallas::Base;

    #[test]
    fn pallas_chunk_size_is_31() {
        assert_eq!(chunk_size::<Base>(), 31);
    }

    #[test]
    fn padding_always_adds_at_least_one_byte() {
        // (input length, padded length); exact multiples gain a full block
        let cases =
            [(0, 31), (1, 31), (30, 31), (31, 62), (32, 62), (61, 62), (62, 93), (93, 124)];

        for (length, expected) in cases {
            let message = vec![0xAB; length];
            let padded = pad::<Base>(&message);
            assert_eq!(padded.len(), expected, "padded length for input of {length} bytes");
            assert_eq!(&padded[..length], &message[..]);
            assert!(padded[length..].iter().all(|&byte| byte == 0));
        }
    }

    #[test]
    fn pad_unpad_roundtrip() {
        for length in [0usize, 1, 30, 31, 32, 61, 62] {
            let message: Vec<u8> = (0..length).map(|i| i as u8).collect();
            let padded = pad::<Base>(&message);
            assert_eq!(unpad(padded, length), message);
        }
    }

    #[test]
    fn bytes_fields_roundtrip() {
        let message: Vec<u8> = (0..62u8).collect();
        let padded = pad::<Base>(&message);

        let elements = bytes_to_fields::<Base>(&padded);
        assert_eq!(elements.len(), 3);

        let flat = fields_to_bytes(&elements);
        assert_eq!(flat, padded);
    }

    #[test]
    fn full_chunk_of_max_bytes_packs() {
        // 31 bytes of 0xFF is the largest chunk value; it must stay
        // below the modulus and round-trip exactly
        let chunk = [0xFFu8; 31];
        let elements = bytes_to_fields::<Base>(&chunk);
        assert_eq!(elements.len(), 1);
        assert_ne!(elements[0], Base::ZERO);
        assert_eq!(fields_to_bytes(&elements), chunk);
    }

    #[test]
    fn zero_chunk_packs_to_zero() {
        let elements = bytes_to_fields::<Base>(&[0u8; 31]);
        assert_eq!(elements, vec![Base::ZERO]);
    }

    #[test]
    fn partial_trailing_chunk_is_accepted() {
        // 40 bytes: one full chunk and a 9-byte tail
        let bytes: Vec<u8> = (1..=40u8).collect();
        let elements = bytes_to_fields::<Base>(&bytes);
        assert_eq!(elements.len(), 2);

        let flat = fields_to_bytes(&elements);
        assert_eq!(&flat[..40], &bytes[..]);
        assert!(flat[40..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn unpad_beyond_length_is_a_noop() {
        let flat = vec![1u8, 2, 3];
        assert_eq!(unpad(flat, 10), vec![1, 2, 3]);
    }

    mod properties {
        use proptest::prelude::*;

        use super::{Base, bytes_to_fields, chunk_size, fields_to_bytes, pad, unpad};

        proptest! {
            /// The full pack path is lossless for any message.
            #[test]
            fn prop_pack_roundtrip(message in prop::collection::vec(any::<u8>(), 0..200)) {
                let padded = pad::<Base>(&message);
                prop_assert_eq!(padded.len() % chunk_size::<Base>(), 0);
                prop_assert!(padded.len() > message.len());

                let elements = bytes_to_fields::<Base>(&padded);
                let flat = fields_to_bytes(&elements);
                prop_assert_eq!(&flat, &padded);
                prop_assert_eq!(unpad(flat, message.len()), message);
            }
        }
    }
}
