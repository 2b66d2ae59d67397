//! G2, the sextic D-type twist `y^2 = x^3 + 3 / (9 + u)` over `Fp2`.
//!
//! Unlike G1 the twist has a large cofactor, so decoded points need an explicit subgroup check.
use super::{
    fields::{Fp, Fp2},
    group::{Affine, CurveParams, Jacobian},
};

/// Order `r` of the pairing groups, little-endian limbs.
pub const GROUP_ORDER: [u64; 4] = [
    0x43e1_f593_f000_0001,
    0x2833_e848_79b9_7091,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// Twist coefficient `b' = 3 / (9 + u)`.
pub(crate) const TWIST_B: Fp2 = Fp2::new(
    Fp::from_raw([
        0x3267_e6dc_24a1_38e5,
        0xb5b4_c5e5_59db_efa3,
        0x81be_1899_1be0_6ac3,
        0x2b14_9d40_ceb8_aaae,
    ]),
    Fp::from_raw([
        0xe4a2_bd06_85c3_15d2,
        0xa74f_a084_e52d_1852,
        0xcd2c_afad_eed8_fdf4,
        0x0097_13b0_3af0_fed4,
    ]),
);

/// Marker type carrying the G2 twist constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum G2Params {}

impl CurveParams for G2Params {
    type Base = Fp2;

    const B: Fp2 = TWIST_B;

    const GENERATOR_X: Fp2 = Fp2::new(
        Fp::from_raw([
            0x46de_bd5c_d992_f6ed,
            0x6743_22d4_f75e_dadd,
            0x426a_0066_5e5c_4479,
            0x1800_deef_121f_1e76,
        ]),
        Fp::from_raw([
            0x97e4_85b7_aef3_12c2,
            0xf1aa_4933_35a9_e712,
            0x7260_bfb7_31fb_5d25,
            0x198e_9393_920d_483a,
        ]),
    );

    const GENERATOR_Y: Fp2 = Fp2::new(
        Fp::from_raw([
            0x4ce6_cc01_66fa_7daa,
            0xe3d1_e769_0c43_d37b,
            0x4aab_7180_8dcb_408f,
            0x12c8_5ea5_db8c_6deb,
        ]),
        Fp::from_raw([
            0x55ac_dadc_d122_975b,
            0xbc4b_3133_70b3_8ef3,
            0xec9e_99ad_690c_3395,
            0x0906_89d0_585f_f075,
        ]),
    );
}

/// G2 point in affine coordinates.
pub type G2Affine = Affine<G2Params>;

/// G2 point in Jacobian coordinates.
pub type G2Jacobian = Jacobian<G2Params>;

impl Affine<G2Params> {
    /// Returns `true` if the point lies in the order `r` subgroup, checked as `[r]Q = O`.
    ///
    /// The point at infinity is in every subgroup.
    pub fn is_torsion_free(&self) -> bool {
        self.to_jacobian().mul_by_limbs(&GROUP_ORDER).is_identity()
    }
}
