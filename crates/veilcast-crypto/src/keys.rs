//! Key pairs and Diffie-Hellman key exchange.
//!
//! The exchange yields a shared group point; only its x-coordinate is
//! forwarded to the sponge. Both sides obtain the same point by
//! commutativity of scalar multiplication: `(G*a)*b == (G*b)*a`.

use core::fmt;

use ff::Field;
use group::Group;
use rand_core::{CryptoRng, RngCore};

use crate::suite::EncryptionSuite;

/// A private scalar with its derived public group element.
///
/// The public key is always `generator * private_key`; the pair cannot
/// get out of sync because both fields are set together at construction.
pub struct Keypair<S: EncryptionSuite> {
    private_key: S::Scalar,
    public_key: S::Point,
}

impl<S: EncryptionSuite> Keypair<S> {
    /// Sample a fresh key pair from a cryptographically secure source.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::from_private_key(S::Scalar::random(rng))
    }

    /// Derive the key pair for an existing private scalar.
    pub fn from_private_key(private_key: S::Scalar) -> Self {
        let public_key = S::Point::generator() * private_key;
        Self { private_key, public_key }
    }

    /// The private scalar.
    pub fn private_key(&self) -> &S::Scalar {
        &self.private_key
    }

    /// The public group element, `generator * private_key`.
    pub fn public_key(&self) -> &S::Point {
        &self.public_key
    }
}

impl<S: EncryptionSuite> Clone for Keypair<S> {
    fn clone(&self) -> Self {
        Self { private_key: self.private_key, public_key: self.public_key }
    }
}

// Manual Debug so the private scalar never reaches a log line.
impl<S: EncryptionSuite> fmt::Debug for Keypair<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Diffie-Hellman: scale the counterparty's public element by our
/// scalar and project to the x-coordinate.
///
/// The scalar is the sender's ephemeral during encryption and the
/// recipient's long-term private key during decryption. No validation
/// happens here; the group implementation owns element validity.
pub(crate) fn shared_secret_x<S: EncryptionSuite>(
    public_key: &S::Point,
    scalar: &S::Scalar,
) -> S::Base {
    S::x_coordinate(&(*public_key * *scalar))
}
