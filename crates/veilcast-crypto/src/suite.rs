//! Interfaces for the external algebraic collaborators.
//!
//! The protocol is generic over a prime-order group, its base and scalar
//! fields, and a duplex sponge over the base field. Field and group
//! arithmetic come from the `ff`/`group` ecosystem traits; the sponge has
//! no ecosystem trait, so it is declared here and implemented by the
//! caller (a production deployment supplies a Poseidon-style permutation,
//! the test harness supplies a deterministic stand-in).

use ff::PrimeField;
use group::Group;

/// A duplex sponge over a prime field.
///
/// Absorb and squeeze may be interleaved in any order; the protocol
/// relies on every absorb affecting every later squeeze. A sponge
/// instance is single-use: each encrypt or decrypt call constructs a
/// fresh one and never shares it.
pub trait Sponge: Sized {
    /// The field the sponge state is built from.
    type Field: PrimeField;

    /// Construct a sponge in its initial (all-zero) state.
    fn new() -> Self;

    /// Mix one field element into the sponge state.
    fn absorb(&mut self, input: Self::Field);

    /// Extract one pseudorandom field element from the sponge state.
    fn squeeze(&mut self) -> Self::Field;
}

/// Binding of the algebraic primitives the protocol runs over.
///
/// Implementations fix a curve, its two fields, and a sponge, and supply
/// the x-coordinate projection the key exchange needs. Group-element
/// validity is the group implementation's responsibility; the protocol
/// performs no point validation of its own.
///
/// The byte codec assumes the base field's canonical representation
/// ([`PrimeField::Repr`]) is little-endian, which holds for
/// `pasta_curves` and for fields generated by the `ff` derive macro.
pub trait EncryptionSuite {
    /// Base field of the curve; chunks, keystream, and tags live here.
    type Base: PrimeField;

    /// Scalar field of the curve; private keys and ephemerals live here.
    type Scalar: PrimeField;

    /// The prime-order group element type.
    type Point: Group<Scalar = Self::Scalar>;

    /// The duplex sponge driven by the streaming core.
    type Sponge: Sponge<Field = Self::Base>;

    /// Project a point to the x-coordinate of its affine form.
    ///
    /// The y-coordinate is deliberately discarded: it carries no entropy
    /// beyond a sign bit once x is fixed. The identity projects to zero.
    fn x_coordinate(point: &Self::Point) -> Self::Base;
}
