//! Pallas curve binding.
//!
//! Fixes the group and fields to `pasta_curves::pallas` while leaving
//! the sponge caller-chosen: the Poseidon permutation deployments pair
//! with this curve is an external collaborator, not something this
//! crate ships.

use core::marker::PhantomData;

use ff::Field;
use group::Curve;
use pasta_curves::arithmetic::{Coordinates, CurveAffine};
use pasta_curves::pallas;

use crate::suite::{EncryptionSuite, Sponge};

/// [`EncryptionSuite`] over the Pallas curve with a caller-supplied
/// sponge over `pallas::Base`.
///
/// Never instantiated; used only as a type-level binding:
///
/// ```ignore
/// type Suite = PallasSuite<MyPoseidonSponge>;
/// let ciphertext = encrypt_v2::<Suite, _>(&mut rng, message, &public_key);
/// ```
pub struct PallasSuite<S> {
    _sponge: PhantomData<S>,
}

impl<S: Sponge<Field = pallas::Base>> EncryptionSuite for PallasSuite<S> {
    type Base = pallas::Base;
    type Scalar = pallas::Scalar;
    type Point = pallas::Point;
    type Sponge = S;

    fn x_coordinate(point: &pallas::Point) -> pallas::Base {
        let affine = point.to_affine();
        // The identity has no affine coordinates and projects to zero;
        // it never occurs with valid keys and nonzero scalars
        let coordinates: Option<Coordinates<pallas::Affine>> = affine.coordinates().into();
        coordinates.map_or(pallas::Base::ZERO, |coordinates| *coordinates.x())
    }
}
