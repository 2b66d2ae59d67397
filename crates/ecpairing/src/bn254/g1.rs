//! G1, the curve `y^2 = x^3 + 3` over the base field.
//!
//! The curve has prime order, so every point on it lies in the pairing subgroup.
use super::{
    fields::Fp,
    group::{Affine, CurveParams, Jacobian},
};

/// Marker type carrying the G1 curve constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum G1Params {}

impl CurveParams for G1Params {
    type Base = Fp;

    const B: Fp = Fp::from_u64(3);

    const GENERATOR_X: Fp = Fp::ONE;

    const GENERATOR_Y: Fp = Fp::from_u64(2);
}

/// G1 point in affine coordinates.
pub type G1Affine = Affine<G1Params>;

/// G1 point in Jacobian coordinates.
pub type G1Jacobian = Jacobian<G1Params>;
