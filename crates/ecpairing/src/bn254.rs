//! alt_bn128 (BN254) arithmetic: the field tower, both pairing groups, the optimal ate pairing
//! and the EIP-197 point encoding.
pub mod fields;
mod g1;
mod g2;
mod group;
pub mod pairing;

mod codec;

pub use codec::{
    encode_g1_point, encode_g2_point, new_g1_point, new_g2_point, read_fq, read_fq2,
    read_g1_point, read_g2_point,
};
pub use g1::{G1Affine, G1Jacobian, G1Params};
pub use g2::{G2Affine, G2Jacobian, G2Params, GROUP_ORDER};
pub use group::{Affine, CurveParams, Jacobian};
pub use pairing::{miller_loop, pairing, G2Prepared, Gt, MillerLoopResult};

/// FQ_LEN specifies the number of bytes needed to represent an
/// Fq element. This is an element in the base field of BN254.
///
/// Note: The base field is used to define G1 and G2 elements.
pub const FQ_LEN: usize = 32;

/// FQ2_LEN specifies the number of bytes needed to represent an
/// Fq^2 element.
///
/// Note: This is the quadratic extension of Fq, and by definition
/// means we need 2 Fq elements.
pub const FQ2_LEN: usize = 2 * FQ_LEN;

/// G1_LEN specifies the number of bytes needed to represent a G1 element.
///
/// Note: A G1 element contains 2 Fq elements.
pub const G1_LEN: usize = 2 * FQ_LEN;

/// G2_LEN specifies the number of bytes needed to represent a G2 element.
///
/// Note: A G2 element contains 2 Fq^2 elements.
pub const G2_LEN: usize = 2 * FQ2_LEN;

/// Pair element length.
/// `PAIR` elements are composed of an uncompressed G1 point (64 bytes) and an uncompressed G2 point
/// (128 bytes).
pub const PAIR_ELEMENT_LEN: usize = G1_LEN + G2_LEN;
