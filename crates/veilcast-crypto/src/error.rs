//! Error types for encryption and decryption.
//!
//! Every variant is unrecoverable at this layer: a tag mismatch signals
//! corruption or an active adversary, and the structural checks fire
//! before any decryption work happens. There is no retry semantics and
//! no partial result on any failure path.

use thiserror::Error;

/// Errors from decryption operations.
///
/// Encryption itself cannot fail: its only fallible step would be
/// drawing randomness, and the `rand` CSPRNGs abort the process on an
/// exhausted entropy source rather than returning an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncryptionError {
    /// The recomputed authentication tag does not equal the supplied
    /// tag. The ciphertext was tampered with, reordered, truncated, or
    /// decrypted with the wrong private key.
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,

    /// The ciphertext has too few elements to contain an authentication
    /// tag. Raised before the streaming loop runs.
    #[error("malformed ciphertext: {reason}")]
    MalformedCiphertext {
        /// What structural requirement the ciphertext violates.
        reason: &'static str,
    },

    /// The claimed message length exceeds what the ciphertext's chunks
    /// can hold. Raised before the streaming loop runs.
    #[error("length inconsistency: message length {message_length} exceeds chunk capacity {capacity}")]
    LengthInconsistency {
        /// The unpadded byte length the ciphertext claims.
        message_length: usize,
        /// Maximum bytes the ciphertext's chunks can carry.
        capacity: usize,
    },
}
