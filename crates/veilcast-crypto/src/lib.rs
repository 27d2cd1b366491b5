//! Veilcast public-key authenticated encryption
//!
//! An ECIES-style scheme built from two algebraic primitives instead of a
//! conventional cipher: a prime-order group (Diffie-Hellman key exchange)
//! and a duplex sponge over the group's base field (keystream and
//! authentication tag). Pure functions with deterministic outputs; callers
//! provide the randomness for the single ephemeral scalar sample.
//!
//! # Protocol Flow
//!
//! ```text
//! message bytes
//!        │
//!        ▼ pad + chunk (31-byte groups, one field element each)
//! field element chunks
//!        │
//!        ▼ Diffie-Hellman → shared point, x-coordinate absorbed
//! sponge keystream (frame bit, squeeze, add)
//!        │
//!        ▼ parity-scheduled ciphertext re-absorption
//! ciphertext elements + authentication tag
//! ```
//!
//! Decryption reverses the flow and ends with a mandatory constant-time
//! tag comparison before any plaintext is released.
//!
//! # Two Generations
//!
//! [`encrypt`]/[`decrypt`] operate on native field elements with no
//! padding or framing. They are frozen for compatibility with existing
//! ciphertexts. [`encrypt_v2`]/[`decrypt_v2`] operate on byte messages
//! with padding and a per-chunk frame bit, and are the variant new
//! callers should use. Both share one streaming core; they differ only in
//! framing policy and codec usage.
//!
//! # Security
//!
//! - Confidentiality: keystream elements are squeezed from a sponge
//!   keyed by the Diffie-Hellman shared secret
//! - Authenticity: ciphertext elements are re-absorbed into the sponge,
//!   binding the trailing tag to everything produced so far
//! - Failed tag comparison rejects the message; no partial plaintext is
//!   ever returned
//! - Each call owns a fresh sponge; concurrent calls share no state
//!
//! The group, field, and sponge permutation are external collaborators
//! supplied through the [`EncryptionSuite`] and [`Sponge`] traits. This
//! crate implements only the protocol layered on top of them.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod codec;
pub mod encryption;
pub mod error;
pub mod keys;
mod keystream;
pub mod pallas;
pub mod suite;

pub use encryption::{CipherText, CipherTextV2, decrypt, decrypt_v2, encrypt, encrypt_v2};
pub use error::EncryptionError;
pub use keys::Keypair;
pub use pallas::PallasSuite;
pub use suite::{EncryptionSuite, Sponge};
