//! The four protocol operations and the ciphertext shapes they produce.
//!
//! [`encrypt_v2`]/[`decrypt_v2`] are the byte-oriented generation:
//! messages are padded, chunked, and framed with a per-chunk frame bit.
//! [`encrypt`]/[`decrypt`] are the legacy field-element generation,
//! retained frozen for ciphertexts issued before the byte protocol
//! existed; new callers should never reach for them.
//!
//! Wire serialization is out of scope; these are the in-memory shapes
//! only.

use core::fmt;

use ff::Field;
use group::Group;
use rand_core::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::codec;
use crate::error::EncryptionError;
use crate::keys::shared_secret_x;
use crate::keystream::{Framing, Keystream};
use crate::suite::EncryptionSuite;

/// A legacy (field-element) ciphertext.
///
/// The last element of `cipher_text` is the authentication tag; every
/// preceding element is an encrypted message chunk, in order.
pub struct CipherText<S: EncryptionSuite> {
    /// The sender's ephemeral public key for the Diffie-Hellman
    /// exchange.
    pub public_key: S::Point,
    /// Encrypted chunks followed by the authentication tag.
    pub cipher_text: Vec<S::Base>,
}

/// A byte-protocol ciphertext: [`CipherText`] plus the unpadded message
/// length, needed at decryption time to strip the padding.
///
/// Invariant: `message_length <= chunk_size * (cipher_text.len() - 1)`.
pub struct CipherTextV2<S: EncryptionSuite> {
    /// The sender's ephemeral public key for the Diffie-Hellman
    /// exchange.
    pub public_key: S::Point,
    /// Encrypted chunks followed by the authentication tag.
    pub cipher_text: Vec<S::Base>,
    /// Byte length of the original message, before padding.
    pub message_length: usize,
}

impl<S: EncryptionSuite> Clone for CipherText<S> {
    fn clone(&self) -> Self {
        Self { public_key: self.public_key, cipher_text: self.cipher_text.clone() }
    }
}

impl<S: EncryptionSuite> fmt::Debug for CipherText<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherText")
            .field("public_key", &self.public_key)
            .field("cipher_text", &self.cipher_text)
            .finish()
    }
}

impl<S: EncryptionSuite> Clone for CipherTextV2<S> {
    fn clone(&self) -> Self {
        Self {
            public_key: self.public_key,
            cipher_text: self.cipher_text.clone(),
            message_length: self.message_length,
        }
    }
}

impl<S: EncryptionSuite> fmt::Debug for CipherTextV2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherTextV2")
            .field("public_key", &self.public_key)
            .field("cipher_text", &self.cipher_text)
            .field("message_length", &self.message_length)
            .finish()
    }
}

/// Encrypt a byte message to a recipient's public key.
///
/// Pads and chunks the message, samples an ephemeral scalar from `rng`,
/// runs the key exchange, and streams the chunks through the sponge
/// keystream. The returned ciphertext carries the ephemeral public key,
/// the encrypted chunks plus trailing tag, and the unpadded length.
///
/// `rng` must be cryptographically secure; the ephemeral scalar is the
/// only nondeterministic step, so two encryptions of the same message
/// never produce equal ciphertexts.
pub fn encrypt_v2<S, R>(
    rng: &mut R,
    message: &[u8],
    recipient_public_key: &S::Point,
) -> CipherTextV2<S>
where
    S: EncryptionSuite,
    R: RngCore + CryptoRng,
{
    let message_length = message.len();
    let mut padded = codec::pad::<S::Base>(message);
    let chunks = codec::bytes_to_fields::<S::Base>(&padded);
    // The padded buffer is a plaintext copy; wipe it once packed
    padded.zeroize();

    let (public_key, cipher_text) = seal::<S, R>(rng, &chunks, recipient_public_key, Framing::FrameBit);

    CipherTextV2 { public_key, cipher_text, message_length }
}

/// Decrypt a byte-protocol ciphertext with the recipient's private key.
///
/// # Errors
///
/// - [`EncryptionError::MalformedCiphertext`] if there is no room for a
///   tag
/// - [`EncryptionError::LengthInconsistency`] if `message_length`
///   exceeds what the chunks can hold
/// - [`EncryptionError::AuthenticationFailed`] if the recomputed tag
///   does not match; no plaintext is returned
pub fn decrypt_v2<S: EncryptionSuite>(
    ciphertext: &CipherTextV2<S>,
    private_key: &S::Scalar,
) -> Result<Vec<u8>, EncryptionError> {
    // Fail fast on an impossible length claim, before any sponge work.
    // An empty ciphertext falls through to the tag-split check in open.
    if let Some(chunk_count) = ciphertext.cipher_text.len().checked_sub(1) {
        let capacity = codec::chunk_size::<S::Base>() * chunk_count;
        if ciphertext.message_length > capacity {
            return Err(EncryptionError::LengthInconsistency {
                message_length: ciphertext.message_length,
                capacity,
            });
        }
    }

    let chunks = open::<S>(
        &ciphertext.public_key,
        &ciphertext.cipher_text,
        private_key,
        Framing::FrameBit,
    )?;

    let flat = codec::fields_to_bytes(&chunks);
    Ok(codec::unpad(flat, ciphertext.message_length))
}

/// Encrypt a sequence of native field elements (legacy generation).
///
/// No padding and no frame bit; the chunk sequence is the message as
/// given. Frozen for compatibility with previously issued ciphertexts.
pub fn encrypt<S, R>(
    rng: &mut R,
    message: &[S::Base],
    recipient_public_key: &S::Point,
) -> CipherText<S>
where
    S: EncryptionSuite,
    R: RngCore + CryptoRng,
{
    let (public_key, cipher_text) = seal::<S, R>(rng, message, recipient_public_key, Framing::None);
    CipherText { public_key, cipher_text }
}

/// Decrypt a legacy ciphertext with the recipient's private key.
///
/// # Errors
///
/// - [`EncryptionError::MalformedCiphertext`] if there is no room for a
///   tag
/// - [`EncryptionError::AuthenticationFailed`] if the recomputed tag
///   does not match
pub fn decrypt<S: EncryptionSuite>(
    ciphertext: &CipherText<S>,
    private_key: &S::Scalar,
) -> Result<Vec<S::Base>, EncryptionError> {
    open::<S>(&ciphertext.public_key, &ciphertext.cipher_text, private_key, Framing::None)
}

/// Shared encryption core: sample the ephemeral, exchange keys, stream
/// every chunk, append the tag.
fn seal<S, R>(
    rng: &mut R,
    chunks: &[S::Base],
    recipient_public_key: &S::Point,
    framing: Framing,
) -> (S::Point, Vec<S::Base>)
where
    S: EncryptionSuite,
    R: RngCore + CryptoRng,
{
    let ephemeral_private_key = S::Scalar::random(&mut *rng);
    let ephemeral_public_key = S::Point::generator() * ephemeral_private_key;
    let shared = shared_secret_x::<S>(recipient_public_key, &ephemeral_private_key);

    let mut stream = Keystream::<S::Sponge>::new(shared, framing, chunks.len());
    let mut cipher_text = Vec::with_capacity(chunks.len() + 1);
    for &chunk in chunks {
        cipher_text.push(stream.encrypt_chunk(chunk));
    }
    cipher_text.push(stream.into_tag());

    (ephemeral_public_key, cipher_text)
}

/// Shared decryption core: split off the tag, stream every element,
/// then compare tags in constant time. The comparison happens strictly
/// after all elements are consumed, so its timing carries no position
/// information.
fn open<S: EncryptionSuite>(
    sender_public_key: &S::Point,
    elements: &[S::Base],
    private_key: &S::Scalar,
    framing: Framing,
) -> Result<Vec<S::Base>, EncryptionError> {
    let Some((received_tag, body)) = elements.split_last() else {
        return Err(EncryptionError::MalformedCiphertext {
            reason: "no authentication tag",
        });
    };

    let shared = shared_secret_x::<S>(sender_public_key, private_key);

    let mut stream = Keystream::<S::Sponge>::new(shared, framing, body.len());
    let mut chunks = Vec::with_capacity(body.len());
    for &element in body {
        chunks.push(stream.decrypt_chunk(element));
    }
    let recomputed_tag = stream.into_tag();

    if !bool::from(recomputed_tag.ct_eq(received_tag)) {
        return Err(EncryptionError::AuthenticationFailed);
    }

    Ok(chunks)
}
