//! Sponge-driven keystream with inline authentication.
//!
//! One [`Keystream`] exists per message and walks a fixed state machine:
//! construction absorbs the shared-secret x-coordinate, each chunk step
//! squeezes a keystream element and re-absorbs ciphertext on the parity
//! schedule, and [`Keystream::into_tag`] consumes the value to squeeze
//! the authentication tag. Ownership makes misuse unrepresentable: the
//! sponge is never aliased and no tag can be produced twice.
//!
//! The parity schedule absorbs ciphertext two elements at a time (one
//! permutation call per two elements), always including the final
//! element regardless of parity. Sender and receiver must follow it
//! bit-for-bit or their tags diverge; it is a protocol constant, not a
//! tunable.

use ff::Field;

use crate::suite::Sponge;

/// Per-chunk framing policy, the only difference between the two
/// protocol generations inside the streaming core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Framing {
    /// Legacy field-element protocol: no frame bit.
    None,
    /// Byte protocol: absorb `1` before the last chunk's squeeze, `0`
    /// before every other.
    FrameBit,
}

/// Streaming encryption state for a single message.
pub(crate) struct Keystream<S: Sponge> {
    sponge: S,
    framing: Framing,
    chunk_count: usize,
    index: usize,
    /// Ciphertext element from an even step, held until the following
    /// odd step absorbs the pair.
    held: Option<S::Field>,
}

impl<S: Sponge> Keystream<S> {
    /// Construct the sponge and absorb the shared secret. No squeeze
    /// happens before this absorb.
    pub(crate) fn new(shared_secret_x: S::Field, framing: Framing, chunk_count: usize) -> Self {
        let mut sponge = S::new();
        sponge.absorb(shared_secret_x);
        Self { sponge, framing, chunk_count, index: 0, held: None }
    }

    /// Encrypt the next plaintext chunk, returning the ciphertext
    /// element.
    pub(crate) fn encrypt_chunk(&mut self, plaintext: S::Field) -> S::Field {
        let keystream = self.next_keystream();
        let ciphertext = plaintext + keystream;
        self.bind(ciphertext);
        ciphertext
    }

    /// Decrypt the next ciphertext element, returning the plaintext
    /// chunk. Absorbs the same ciphertext element the sender absorbed,
    /// keeping both tag computations in lockstep.
    pub(crate) fn decrypt_chunk(&mut self, ciphertext: S::Field) -> S::Field {
        let keystream = self.next_keystream();
        let plaintext = ciphertext - keystream;
        self.bind(ciphertext);
        plaintext
    }

    /// Squeeze the authentication tag. Consumes the keystream; all
    /// chunks must have been processed first.
    pub(crate) fn into_tag(mut self) -> S::Field {
        debug_assert_eq!(self.index, self.chunk_count, "tag squeezed before all chunks streamed");
        self.sponge.squeeze()
    }

    /// Absorb the frame bit if the generation uses one, then squeeze
    /// the keystream element for the current chunk.
    fn next_keystream(&mut self) -> S::Field {
        if self.framing == Framing::FrameBit {
            let frame = if self.is_last() { S::Field::ONE } else { S::Field::ZERO };
            self.sponge.absorb(frame);
        }
        self.sponge.squeeze()
    }

    /// Apply the parity schedule to one ciphertext element: odd steps
    /// absorb the held element and the current one, the final even step
    /// absorbs the current one alone, other even steps hold it.
    fn bind(&mut self, ciphertext: S::Field) {
        if self.index % 2 == 1 {
            if let Some(held) = self.held.take() {
                self.sponge.absorb(held);
            }
            self.sponge.absorb(ciphertext);
        } else if self.is_last() {
            self.sponge.absorb(ciphertext);
        } else {
            self.held = Some(ciphertext);
        }
        self.index += 1;
    }

    fn is_last(&self) -> bool {
        self.index + 1 == self.chunk_count
    }
}
