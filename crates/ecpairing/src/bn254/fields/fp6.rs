//! Cubic extension `Fp6 = Fp2[v] / (v^3 - (9 + u))`.
use super::{impl_field_ops, Field, Fp, Fp2};

/// Element `c0 + c1 * v + c2 * v^2` of the cubic extension.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp6 {
    /// Constant coefficient.
    pub c0: Fp2,
    /// Coefficient of `v`.
    pub c1: Fp2,
    /// Coefficient of `v^2`.
    pub c2: Fp2,
}

impl_field_ops!(Fp6);

impl Fp6 {
    /// Additive identity.
    pub const ZERO: Fp6 = Fp6::new(Fp2::ZERO, Fp2::ZERO, Fp2::ZERO);

    /// Multiplicative identity.
    pub const ONE: Fp6 = Fp6::new(Fp2::ONE, Fp2::ZERO, Fp2::ZERO);

    /// Creates `c0 + c1 * v + c2 * v^2`.
    #[inline]
    pub const fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Fp6 {
        Fp6 { c0, c1, c2 }
    }

    /// Returns `true` if every coefficient is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    /// Coefficient-wise addition.
    #[inline]
    pub fn add(&self, rhs: &Fp6) -> Fp6 {
        Fp6::new(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }

    /// Coefficient-wise subtraction.
    #[inline]
    pub fn sub(&self, rhs: &Fp6) -> Fp6 {
        Fp6::new(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }

    /// Coefficient-wise negation.
    #[inline]
    pub fn neg(&self) -> Fp6 {
        Fp6::new(-self.c0, -self.c1, -self.c2)
    }

    /// Returns `2 * self`.
    #[inline]
    pub fn double(&self) -> Fp6 {
        Fp6::new(self.c0.double(), self.c1.double(), self.c2.double())
    }

    /// Karatsuba style multiplication with six `Fp2` products.
    pub fn mul(&self, rhs: &Fp6) -> Fp6 {
        let a_a = self.c0 * rhs.c0;
        let b_b = self.c1 * rhs.c1;
        let c_c = self.c2 * rhs.c2;

        let t1 = ((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - b_b - c_c).mul_by_nonresidue() + a_a;
        let t2 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - a_a - b_b + c_c.mul_by_nonresidue();
        let t3 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - a_a + b_b - c_c;

        Fp6::new(t1, t2, t3)
    }

    /// Chung-Hasan SQR2 squaring.
    pub fn square(&self) -> Fp6 {
        let s0 = self.c0.square();
        let s1 = (self.c0 * self.c1).double();
        let s2 = (self.c0 - self.c1 + self.c2).square();
        let s3 = (self.c1 * self.c2).double();
        let s4 = self.c2.square();

        Fp6::new(
            s0 + s3.mul_by_nonresidue(),
            s1 + s4.mul_by_nonresidue(),
            s1 + s2 + s3 - s0 - s4,
        )
    }

    /// Multiplies every coefficient by an `Fp2` element.
    #[inline]
    pub fn scale(&self, by: &Fp2) -> Fp6 {
        Fp6::new(self.c0 * by, self.c1 * by, self.c2 * by)
    }

    /// Multiplies by `v`, the non-residue of the quadratic step above.
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Fp6 {
        Fp6::new(self.c2.mul_by_nonresidue(), self.c0, self.c1)
    }

    /// Multiplies by the sparse element `c1 * v`.
    pub fn mul_by_1(&self, c1: &Fp2) -> Fp6 {
        let b_b = self.c1 * c1;

        let t1 = ((self.c1 + self.c2) * c1 - b_b).mul_by_nonresidue();
        let t2 = (self.c0 + self.c1) * c1 - b_b;

        Fp6::new(t1, t2, b_b)
    }

    /// Multiplies by the sparse element `c0 + c1 * v`.
    pub fn mul_by_01(&self, c0: &Fp2, c1: &Fp2) -> Fp6 {
        let a_a = self.c0 * c0;
        let b_b = self.c1 * c1;

        let t1 = ((self.c1 + self.c2) * c1 - b_b).mul_by_nonresidue() + a_a;
        let t2 = (*c0 + c1) * (self.c0 + self.c1) - a_a - b_b;
        let t3 = (self.c0 + self.c2) * c0 - a_a + b_b;

        Fp6::new(t1, t2, t3)
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn invert(&self) -> Option<Fp6> {
        let c0 = self.c0.square() - (self.c1 * self.c2).mul_by_nonresidue();
        let c1 = self.c2.square().mul_by_nonresidue() - self.c0 * self.c1;
        let c2 = self.c1.square() - self.c0 * self.c2;

        let t = ((self.c2 * c1 + self.c1 * c2).mul_by_nonresidue() + self.c0 * c0).invert()?;

        Some(Fp6::new(c0 * t, c1 * t, c2 * t))
    }

    /// Raises to `p^power`.
    pub fn frobenius_map(&self, power: usize) -> Fp6 {
        Fp6::new(
            self.c0.frobenius_map(power),
            self.c1.frobenius_map(power) * FROBENIUS_COEFF_FP6_C1[power % 6],
            self.c2.frobenius_map(power) * FROBENIUS_COEFF_FP6_C2[power % 6],
        )
    }
}

impl Field for Fp6 {
    const ZERO: Self = Fp6::ZERO;
    const ONE: Self = Fp6::ONE;

    #[inline]
    fn is_zero(&self) -> bool {
        Fp6::is_zero(self)
    }

    #[inline]
    fn double(&self) -> Self {
        Fp6::double(self)
    }

    #[inline]
    fn square(&self) -> Self {
        Fp6::square(self)
    }

    #[inline]
    fn invert(&self) -> Option<Self> {
        Fp6::invert(self)
    }
}

/// `(9 + u)^((p^k - 1) / 3)` for `k` in `0..6`.
const FROBENIUS_COEFF_FP6_C1: [Fp2; 6] = [
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
            0x99e3_9557_176f_553d,
            0xb78c_c310_c2c3_330c,
            0x4c0b_ec3c_f559_b143,
            0x2fb3_4798_4f79_11f7,
        ]),
        Fp::from_raw([
            0x1665_d51c_640f_cba2,
            0x32ae_2a1d_0b7c_9dce,
            0x4ba4_cc8b_d75a_0794,
            0x16c9_e550_61eb_ae20,
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
            0x7b74_6ee8_7bdc_fb6d,
            0x805f_fd3d_5d69_42d3,
            0xbaff_1c77_959f_25ac,
            0x0856_e078_b755_ef0a,
        ]),
        Fp::from_raw([
            0x380c_ab2b_aaa5_86de,
            0x0fdf_31bf_98ff_2631,
            0xa9f3_0e6d_ec26_094f,
            0x04f1_de41_b3d1_766f,
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
            0x62e9_13ee_1dad_a9e4,
            0xf716_14d4_b0b7_1f3a,
            0x6995_82b8_7809_d9ca,
            0x28be_74d4_bb94_3f51,
        ]),
        Fp::from_raw([
            0xedae_0bce_c9c7_aac7,
            0x54f4_0eb4_c3f6_068d,
            0xc2b8_6abc_be01_477a,
            0x14a8_8ae0_cb74_7b99,
        ]),
    ),
];

/// `(9 + u)^((2p^k - 2) / 3)` for `k` in `0..6`.
const FROBENIUS_COEFF_FP6_C2: [Fp2; 6] = [
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
            0x848a_1f55_921e_a762,
            0xd333_65f7_be94_ec72,
            0x80f3_c0b7_5a18_1e84,
            0x05b5_4f5e_64ee_a801,
        ]),
        Fp::from_raw([
            0xc13b_4711_cd2b_8126,
            0x3685_d2ea_1bde_c763,
            0x9f3a_80b0_3b0b_1c92,
            0x2c14_5edb_e7fd_8aee,
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
            0x0e1a_92bc_3ccb_f066,
            0xe633_0945_75b0_6bcb,
            0x19be_e0f7_b5b2_444e,
            0x0bc5_8c66_11c0_8dab,
        ]),
        Fp::from_raw([
            0x5fe3_ed9d_730c_239f,
            0xa44a_9e08_737f_96e5,
            0xfeb0_f6ef_0cd2_1d04,
            0x23d5_e999_e191_0a12,
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
            0xa97b_da05_0992_657f,
            0xde1a_fb54_342c_724f,
            0x1d9d_a407_71b6_f589,
            0x1ee9_72ae_6a82_6a7d,
        ]),
        Fp::from_raw([
            0x5721_e37e_70c2_55c9,
            0x5432_6430_4185_36d1,
            0xd2b5_13cd_bb25_7724,
            0x10de_546f_f8d4_ab51,
        ]),
    ),
];
