//! Quadratic extension `Fp12 = Fp6[w] / (w^2 - v)`, home of the pairing target group.
use super::{impl_field_ops, Field, Fp, Fp2, Fp6};

/// Element `c0 + c1 * w` of the degree twelve extension.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp12 {
    /// Constant coefficient.
    pub c0: Fp6,
    /// Coefficient of `w`.
    pub c1: Fp6,
}

impl_field_ops!(Fp12);

impl Fp12 {
    /// Additive identity.
    pub const ZERO: Fp12 = Fp12::new(Fp6::ZERO, Fp6::ZERO);

    /// Multiplicative identity.
    pub const ONE: Fp12 = Fp12::new(Fp6::ONE, Fp6::ZERO);

    /// Creates `c0 + c1 * w`.
    #[inline]
    pub const fn new(c0: Fp6, c1: Fp6) -> Fp12 {
        Fp12 { c0, c1 }
    }

    /// Returns `true` if both coefficients are zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    /// Coefficient-wise addition.
    #[inline]
    pub fn add(&self, rhs: &Fp12) -> Fp12 {
        Fp12::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }

    /// Coefficient-wise subtraction.
    #[inline]
    pub fn sub(&self, rhs: &Fp12) -> Fp12 {
        Fp12::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }

    /// Coefficient-wise negation.
    #[inline]
    pub fn neg(&self) -> Fp12 {
        Fp12::new(-self.c0, -self.c1)
    }

    /// Returns `2 * self`.
    #[inline]
    pub fn double(&self) -> Fp12 {
        Fp12::new(self.c0.double(), self.c1.double())
    }

    /// Karatsuba multiplication.
    pub fn mul(&self, rhs: &Fp12) -> Fp12 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - aa - bb;

        Fp12::new(aa + bb.mul_by_nonresidue(), c1)
    }

    /// Complex squaring.
    pub fn square(&self) -> Fp12 {
        let ab = self.c0 * self.c1;
        let c0 = (self.c0 + self.c1) * (self.c0 + self.c1.mul_by_nonresidue())
            - ab
            - ab.mul_by_nonresidue();

        Fp12::new(c0, ab.double())
    }

    /// Returns `c0 - c1 * w`, which equals `self^(p^6)`.
    ///
    /// For elements of the cyclotomic subgroup this is also the inverse.
    #[inline]
    pub fn conjugate(&self) -> Fp12 {
        Fp12::new(self.c0, -self.c1)
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn invert(&self) -> Option<Fp12> {
        let t = (self.c0.square() - self.c1.square().mul_by_nonresidue()).invert()?;

        Some(Fp12::new(self.c0 * t, -(self.c1 * t)))
    }

    /// Raises to `p^power`.
    pub fn frobenius_map(&self, power: usize) -> Fp12 {
        let c0 = self.c0.frobenius_map(power);
        let c1 = self
            .c1
            .frobenius_map(power)
            .scale(&FROBENIUS_COEFF_FP12_C1[power % 12]);

        Fp12::new(c0, c1)
    }

    /// Multiplies by the sparse element `(c0, 0, 0) + (d0, d1, 0) * w`, the shape of a line
    /// evaluation on the D-type twist.
    pub fn mul_by_034(&self, c0: &Fp2, d0: &Fp2, d1: &Fp2) -> Fp12 {
        let a = Fp6::new(self.c0.c0 * c0, self.c0.c1 * c0, self.c0.c2 * c0);
        let b = self.c1.mul_by_01(d0, d1);
        let e = (self.c0 + self.c1).mul_by_01(&(*c0 + d0), d1);

        Fp12::new(a + b.mul_by_nonresidue(), e - (a + b))
    }

    /// Granger-Scott squaring, valid only for elements of the cyclotomic subgroup.
    pub fn cyclotomic_square(&self) -> Fp12 {
        fn fp4_square(a: Fp2, b: Fp2) -> (Fp2, Fp2) {
            let t0 = a.square();
            let t1 = b.square();
            let c0 = t1.mul_by_nonresidue() + t0;
            let c1 = (a + b).square() - t0 - t1;
            (c0, c1)
        }

        let mut z0 = self.c0.c0;
        let mut z4 = self.c0.c1;
        let mut z3 = self.c0.c2;
        let mut z2 = self.c1.c0;
        let mut z1 = self.c1.c1;
        let mut z5 = self.c1.c2;

        let (t0, t1) = fp4_square(z0, z1);
        z0 = t0 - z0;
        z0 = z0.double() + t0;
        z1 = t1 + z1;
        z1 = z1.double() + t1;

        let (t0, t1) = fp4_square(z2, z3);
        let (t2, t3) = fp4_square(z4, z5);

        z4 = t0 - z4;
        z4 = z4.double() + t0;
        z5 = t1 + z5;
        z5 = z5.double() + t1;

        let t0 = t3.mul_by_nonresidue();
        z2 = t0 + z2;
        z2 = z2.double() + t0;
        z3 = t2 - z3;
        z3 = z3.double() + t2;

        Fp12::new(Fp6::new(z0, z4, z3), Fp6::new(z2, z1, z5))
    }

    /// Exponentiation by a 64-bit exponent using cyclotomic squarings.
    ///
    /// Valid only for elements of the cyclotomic subgroup.
    pub fn cyclotomic_exp(&self, exp: u64) -> Fp12 {
        let mut res = Fp12::ONE;
        for i in (0..64 - exp.leading_zeros()).rev() {
            res = res.cyclotomic_square();
            if (exp >> i) & 1 == 1 {
                res *= *self;
            }
        }
        res
    }

    /// Exponentiation by an exponent given as little-endian limbs.
    pub fn pow_vartime(&self, by: &[u64]) -> Fp12 {
        let mut res = Fp12::ONE;
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= *self;
                }
            }
        }
        res
    }
}

impl Field for Fp12 {
    const ZERO: Self = Fp12::ZERO;
    const ONE: Self = Fp12::ONE;

    #[inline]
    fn is_zero(&self) -> bool {
        Fp12::is_zero(self)
    }

    #[inline]
    fn double(&self) -> Self {
        Fp12::double(self)
    }

    #[inline]
    fn square(&self) -> Self {
        Fp12::square(self)
    }

    #[inline]
    fn invert(&self) -> Option<Self> {
        Fp12::invert(self)
    }
}

/// `(9 + u)^((p^k - 1) / 6)` for `k` in `0..12`.
const FROBENIUS_COEFF_FP12_C1: [Fp2; 12] = [
    Fp2::new(
        Fp::from_raw([
            0x0000_0000_0000_0001,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
        Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
    ),
    Fp2::new(
        Fp::from_raw([
            0xd60b_35da_dcc9_e470,
            0x5c52_1e08_292f_2176,
            0xe8b9_9fdd_76e6_8b60,
            0x1284_b71c_2865_a7df,
        ]),
        Fp::from_raw([
            0xca5c_f05f_80f3_62ac,
            0x7479_9277_8eee_c7e5,
            0xa632_7cfe_1215_0b8e,
            0x2469_96f3_b4fa_e7e6,
        ]),
    ),
    Fp2::new(
        Fp::from_raw([
            0xe4bd_44e5_607c_fd49,
            0xc28f_069f_bb96_6e3d,
            0x5e6d_d9e7_e0ac_ccb0,
            0x3064_4e72_e131_a029,
        ]),
        Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
    ),
    Fp2::new(
        Fp::from_raw([
            0xe86f_7d39_1ed4_a67f,
            0x894c_b38d_be55_d24a,
            0xefe9_608c_d0ac_aa90,
            0x19dc_81cf_cc82_e4bb,
        ]),
        Fp::from_raw([
            0x7694_aa2b_f4c0_c101,
            0x7f03_a5e3_97d4_39ec,
            0x06cb_eee3_3576_139d,
            0x00ab_f8b6_0be7_7d73,
        ]),
    ),
    Fp2::new(
        Fp::from_raw([
            0xe4bd_44e5_607c_fd48,
            0xc28f_069f_bb96_6e3d,
            0x5e6d_d9e7_e0ac_ccb0,
            0x3064_4e72_e131_a029,
        ]),
        Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
    ),
    Fp2::new(
        Fp::from_raw([
            0x1264_475e_420a_c20f,
            0x2cfa_9585_9526_b0d4,
            0x072f_c0af_59c6_1f30,
            0x0757_cab3_a41d_3cdc,
        ]),
        Fp::from_raw([
            0xe858_45e3_4c4a_5b9c,
            0xa20b_7dfd_7157_3c93,
            0x18e9_b79b_a4e2_606c,
            0x0ca6_b035_381e_35b6,
        ]),
    ),
    Fp2::new(
        Fp::from_raw([
            0x3c20_8c16_d87c_fd46,
            0x9781_6a91_6871_ca8d,
            0xb850_45b6_8181_585d,
            0x3064_4e72_e131_a029,
        ]),
        Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
    ),
    Fp2::new(
        Fp::from_raw([
            0x6615_563b_fbb3_18d7,
            0x3b2f_4c89_3f42_a916,
            0xcf96_a5d9_0a9a_ccfd,
            0x1ddf_9756_b8cb_f849,
        ]),
        Fp::from_raw([
            0x71c3_9bb7_5789_9a9b,
            0x2307_d819_d983_02a7,
            0x121d_c8b8_6f6c_4ccf,
            0x0bfa_b77f_2c36_b843,
        ]),
    ),
    Fp2::new(
        Fp::from_raw([
            0x5763_4731_77ff_fffe,
            0xd4f2_63f1_acdb_5c4f,
            0x59e2_6bce_a0d4_8bac,
            0x0000_0000_0000_0000,
        ]),
        Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
    ),
    Fp2::new(
        Fp::from_raw([
            0x53b1_0edd_b9a8_56c8,
            0x0e34_b703_aa1b_f842,
            0xc866_e529_b0d4_adcd,
            0x1687_cca3_14ae_bb6d,
        ]),
        Fp::from_raw([
            0xc58b_e1ea_e3bc_3c46,
            0x187d_c4ad_d09d_90a0,
            0xb184_56d3_4c0b_44c0,
            0x2fb8_55bc_d54a_22b6,
        ]),
    ),
    Fp2::new(
        Fp::from_raw([
            0x5763_4731_77ff_ffff,
            0xd4f2_63f1_acdb_5c4f,
            0x59e2_6bce_a0d4_8bac,
            0x0000_0000_0000_0000,
        ]),
        Fp::from_raw([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
    ),
    Fp2::new(
        Fp::from_raw([
            0x29bc_44b8_9672_3b38,
            0x6a86_d50b_d34b_19b9,
            0xb120_8507_27bb_392d,
            0x290c_83bf_3d14_634d,
        ]),
        Fp::from_raw([
            0x53c8_4633_8c32_a1ab,
            0xf575_ec93_f71a_8df9,
            0x9f66_8e1a_dc9e_f7f0,
            0x23bd_9e3d_a913_6a73,
        ]),
    ),
];
