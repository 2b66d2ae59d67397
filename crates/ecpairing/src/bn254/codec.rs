use super::{
    fields::{Fp, Fp2},
    G1Affine, G2Affine, FQ2_LEN, FQ_LEN, G1_LEN, G2_LEN,
};
use crate::PrecompileError;

/// Reads a single `Fp` field element from the input slice.
///
/// Takes a byte slice and interprets the first 32 bytes as a big-endian integer. Returns an
/// error if the integer is not below the field modulus. Values are never reduced.
///
/// # Panics
///
/// Panics if the input is not at least 32 bytes long.
#[inline]
pub fn read_fq(input: &[u8]) -> Result<Fp, PrecompileError> {
    let mut bytes = [0u8; FQ_LEN];
    bytes.copy_from_slice(&input[..FQ_LEN]);
    Fp::from_bytes_be(&bytes).ok_or(PrecompileError::Bn254FieldPointNotAMember)
}

/// Reads a `Fp2` (quadratic extension field element) from the input slice.
///
/// Parses two consecutive `Fp` field elements as the two coefficients of an `Fp2` element.
/// The coefficient of `u` comes first on the wire, ie an element `c0 + c1 * u` is encoded as
/// `c1 || c0`.
///
/// # Panics
///
/// Panics if the input is not at least 64 bytes long.
#[inline]
pub fn read_fq2(input: &[u8]) -> Result<Fp2, PrecompileError> {
    let c1 = read_fq(&input[..FQ_LEN])?;
    let c0 = read_fq(&input[FQ_LEN..2 * FQ_LEN])?;
    Ok(Fp2::new(c0, c1))
}

/// Creates a new `G1` point from the given `x` and `y` coordinates.
///
/// Note: `(0, 0)` is not on the curve and is reserved as the encoding of the point at
/// infinity.
#[inline]
pub fn new_g1_point(px: Fp, py: Fp) -> Result<G1Affine, PrecompileError> {
    if px.is_zero() && py.is_zero() {
        return Ok(G1Affine::identity());
    }

    let point = G1Affine::new_unchecked(px, py);
    if !point.is_on_curve() {
        return Err(PrecompileError::Bn254AffineGFailedToCreate);
    }
    // G1 has cofactor one, being on the curve implies subgroup membership.
    Ok(point)
}

/// Creates a new `G2` point from the given `Fp2` coordinates.
///
/// The point must be on the twist and in the order `r` subgroup. As for G1, `(0, 0)` encodes
/// the point at infinity.
#[inline]
pub fn new_g2_point(x: Fp2, y: Fp2) -> Result<G2Affine, PrecompileError> {
    if x.is_zero() && y.is_zero() {
        return Ok(G2Affine::identity());
    }

    let point = G2Affine::new_unchecked(x, y);
    if !point.is_on_curve() {
        return Err(PrecompileError::Bn254AffineGFailedToCreate);
    }
    if !point.is_torsion_free() {
        return Err(PrecompileError::Bn254G2NotInSubgroup);
    }
    Ok(point)
}

/// Reads a G1 point from the input slice.
///
/// Parses a G1 point from a byte slice by reading two consecutive field elements
/// representing the x and y coordinates.
///
/// # Panics
///
/// Panics if the input is not at least 64 bytes long.
#[inline]
pub fn read_g1_point(input: &[u8]) -> Result<G1Affine, PrecompileError> {
    let px = read_fq(&input[0..FQ_LEN])?;
    let py = read_fq(&input[FQ_LEN..2 * FQ_LEN])?;
    new_g1_point(px, py)
}

/// Reads a G2 point from the input slice.
///
/// Parses a G2 point from a byte slice by reading four consecutive `Fp` field elements
/// representing the two `Fp2` coordinates (x and y) of the G2 point.
///
/// # Panics
///
/// Panics if the input is not at least 128 bytes long.
#[inline]
pub fn read_g2_point(input: &[u8]) -> Result<G2Affine, PrecompileError> {
    let x = read_fq2(&input[0..FQ2_LEN])?;
    let y = read_fq2(&input[FQ2_LEN..2 * FQ2_LEN])?;
    new_g2_point(x, y)
}

/// Encodes a G1 point into a byte array.
///
/// Note: the point at infinity encodes as all zeroes.
#[inline]
pub fn encode_g1_point(point: &G1Affine) -> [u8; G1_LEN] {
    let mut output = [0u8; G1_LEN];
    if !point.is_identity() {
        output[..FQ_LEN].copy_from_slice(&point.x.to_bytes_be());
        output[FQ_LEN..].copy_from_slice(&point.y.to_bytes_be());
    }
    output
}

/// Encodes a G2 point into a byte array, in the layout read by [`read_g2_point`].
///
/// Note: the point at infinity encodes as all zeroes.
#[inline]
pub fn encode_g2_point(point: &G2Affine) -> [u8; G2_LEN] {
    let mut output = [0u8; G2_LEN];
    if !point.is_identity() {
        let limbs = [point.x.c1, point.x.c0, point.y.c1, point.y.c0];
        for (chunk, limb) in output.chunks_exact_mut(FQ_LEN).zip(limbs) {
            chunk.copy_from_slice(&limb.to_bytes_be());
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bn254::{G1Jacobian, G2Jacobian};
    use rstest::rstest;

    const P_HEX: &str = "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47";

    /// The G2 generator as it appears on the wire.
    const G2_GENERATOR_HEX: &str = "\
        198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2\
        1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed\
        090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b\
        12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa";

    #[test]
    fn g2_generator_wire_layout() {
        let bytes = hex::decode(G2_GENERATOR_HEX).unwrap();
        let point = read_g2_point(&bytes).unwrap();
        assert_eq!(point, G2Affine::generator());
        assert_eq!(encode_g2_point(&point)[..], bytes[..]);
    }

    #[test]
    fn zeroes_decode_to_infinity() {
        assert_eq!(read_g1_point(&[0u8; G1_LEN]), Ok(G1Affine::identity()));
        assert_eq!(read_g2_point(&[0u8; G2_LEN]), Ok(G2Affine::identity()));
        assert_eq!(encode_g1_point(&G1Affine::identity()), [0u8; G1_LEN]);
        assert_eq!(encode_g2_point(&G2Affine::identity()), [0u8; G2_LEN]);
    }

    #[rstest]
    #[case::generator(1)]
    #[case::small_multiple(2)]
    #[case::large_multiple(0x1234_5678_9abc_def0)]
    fn round_trip(#[case] k: u64) {
        let p = G1Jacobian::from(G1Affine::generator())
            .mul_by_limbs(&[k])
            .to_affine();
        assert_eq!(read_g1_point(&encode_g1_point(&p)), Ok(p));

        let q = G2Jacobian::from(G2Affine::generator())
            .mul_by_limbs(&[k])
            .to_affine();
        assert_eq!(read_g2_point(&encode_g2_point(&q)), Ok(q));
    }

    #[rstest]
    #[case::modulus(P_HEX)]
    #[case::all_ones("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")]
    #[case::modulus_plus_one("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd48")]
    fn out_of_range_limb(#[case] limb: &str) {
        let limb = hex::decode(limb).unwrap();
        assert_eq!(read_fq(&limb), Err(PrecompileError::Bn254FieldPointNotAMember));

        // Same limb as the y-coordinate of G1 and as each slot of G2.
        let mut g1 = encode_g1_point(&G1Affine::generator());
        g1[FQ_LEN..].copy_from_slice(&limb);
        assert_eq!(read_g1_point(&g1), Err(PrecompileError::Bn254FieldPointNotAMember));

        for slot in 0..4 {
            let mut g2 = encode_g2_point(&G2Affine::generator());
            g2[slot * FQ_LEN..(slot + 1) * FQ_LEN].copy_from_slice(&limb);
            assert_eq!(read_g2_point(&g2), Err(PrecompileError::Bn254FieldPointNotAMember));
        }
    }

    #[test]
    fn off_curve_points() {
        let mut g1 = [0u8; G1_LEN];
        g1[FQ_LEN - 1] = 1;
        g1[G1_LEN - 1] = 3;
        assert_eq!(read_g1_point(&g1), Err(PrecompileError::Bn254AffineGFailedToCreate));

        let mut g2 = encode_g2_point(&G2Affine::generator());
        g2[G2_LEN - 1] ^= 1;
        assert_eq!(read_g2_point(&g2), Err(PrecompileError::Bn254AffineGFailedToCreate));
    }

    #[test]
    fn g2_outside_subgroup() {
        let bytes = hex::decode(
            "\
            0000000000000000000000000000000000000000000000000000000000000000\
            0000000000000000000000000000000000000000000000000000000000000001\
            0d1271953ed9ea0836846e70a1934187998c7f790cb4d7511b7f8da82de048a4\
            2869111d5381f072f8e2728fdb825a51aadd70e52c9830e9ab4b871c0531f1bb",
        )
        .unwrap();
        assert_eq!(read_g2_point(&bytes), Err(PrecompileError::Bn254G2NotInSubgroup));
    }

    #[test]
    fn fq2_reads_imaginary_part_first() {
        let mut bytes = [0u8; FQ2_LEN];
        bytes[FQ_LEN - 1] = 1;
        bytes[FQ2_LEN - 1] = 2;
        assert_eq!(read_fq2(&bytes), Ok(Fp2::new(Fp::from_u64(2), Fp::ONE)));
    }
}
