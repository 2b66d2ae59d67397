//! Optimal ate pairing on alt_bn128.
//!
//! The Miller loop walks the signed binary expansion of `6u + 2` with line coefficients
//! precomputed from the G2 point in homogeneous projective coordinates. The final
//! exponentiation raises the loop output to exactly `(p^12 - 1) / r`.
use super::{
    fields::{Fp, Fp12, Fp2},
    g2::TWIST_B,
    G1Affine, G2Affine,
};
use core::ops::{Mul, MulAssign};
use std::vec::Vec;

/// The BN parameter `u`, positive for alt_bn128.
const BN_U: u64 = 4965661367192848881;

/// `6u + 2` in non-adjacent form, least significant digit first.
const ATE_LOOP_COUNT: [i8; 66] = [
    0, 0, 0, 1, 0, 1, 0, -1, 0, 0, -1, 0, 0, 0, 1, 0, 0, -1, 0, -1, 0, 0, 0, 1, 0, -1, 0, 0, 0,
    0, -1, 0, 0, 1, 0, -1, 0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, -1, 0, 1, 0, -1, 0, 0, 0, -1, 0,
    -1, 0, 0, 0, 1, 0, -1, 0, 1,
];

/// `1 / 2` in the base field.
const TWO_INV: Fp = Fp::from_raw([
    0x9e10_460b_6c3e_7ea4,
    0xcbc0_b548_b438_e546,
    0xdc28_22db_40c0_ac2e,
    0x1832_2739_7098_d014,
]);

/// `(9 + u)^((p - 1) / 3)`, scales x under the twisted Frobenius.
const TWIST_MUL_BY_Q_X: Fp2 = Fp2::new(
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
);

/// `(9 + u)^((p - 1) / 2)`, scales y under the twisted Frobenius.
const TWIST_MUL_BY_Q_Y: Fp2 = Fp2::new(
    Fp::from_raw([
        0xdc54_0146_71a0_135a,
        0xdbaa_e0ed_a9c9_5998,
        0xdc5e_c698_b6e2_f9b9,
        0x063c_f305_489a_f5dc,
    ]),
    Fp::from_raw([
        0x82d3_7f63_2623_b0e3,
        0x2180_7dc9_8fa2_5bd2,
        0x0704_b5a7_ec79_6f2b,
        0x07c0_3cbc_ac41_049a,
    ]),
);

/// Element of the pairing target group, written multiplicatively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gt(Fp12);

impl Default for Gt {
    fn default() -> Self {
        Self::identity()
    }
}

impl Gt {
    /// The multiplicative identity.
    pub const fn identity() -> Gt {
        Gt(Fp12::ONE)
    }

    /// Returns `true` if this is the identity, compared field-wise on reduced coefficients.
    pub fn is_identity(&self) -> bool {
        self.0 == Fp12::ONE
    }

    /// Raises to an exponent given as little-endian limbs.
    pub fn pow(&self, by: &[u64]) -> Gt {
        Gt(self.0.pow_vartime(by))
    }

    /// Returns the underlying `Fp12` element.
    pub const fn as_fp12(&self) -> &Fp12 {
        &self.0
    }
}

impl Mul for Gt {
    type Output = Gt;

    fn mul(self, rhs: Gt) -> Gt {
        Gt(self.0 * rhs.0)
    }
}

impl MulAssign for Gt {
    fn mul_assign(&mut self, rhs: Gt) {
        self.0 *= rhs.0;
    }
}

/// Unreduced output of the Miller loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MillerLoopResult(Fp12);

impl MillerLoopResult {
    /// Projects the Miller loop output into the order `r` subgroup of `Fp12*`.
    pub fn final_exponentiation(&self) -> Gt {
        let f = self.0;

        // A zero loop output cannot come from valid points. It maps to zero, which is never the
        // identity, so a pairing check over it fails.
        let Some(f_inv) = f.invert() else {
            return Gt(Fp12::ZERO);
        };

        // Easy part: f^((p^6 - 1)(p^2 + 1)), lands in the cyclotomic subgroup.
        let mut t1 = f.conjugate() * f_inv;
        t1 = t1.frobenius_map(2) * t1;

        Gt(hard_part(t1))
    }
}

/// Raises a cyclotomic element to `(p^4 - p^2 + 1) / r` with the addition chain of
/// Scott et al., "On the final exponentiation for calculating pairings on ordinary elliptic
/// curves".
fn hard_part(f: Fp12) -> Fp12 {
    let fp = f.frobenius_map(1);
    let fp2 = f.frobenius_map(2);
    let fp3 = fp2.frobenius_map(1);

    let fu = f.cyclotomic_exp(BN_U);
    let fu2 = fu.cyclotomic_exp(BN_U);
    let fu3 = fu2.cyclotomic_exp(BN_U);

    let fu_p = fu.frobenius_map(1);
    let fu2_p = fu2.frobenius_map(1);
    let fu3_p = fu3.frobenius_map(1);
    let fu2_p2 = fu2.frobenius_map(2);

    let y0 = fp * fp2 * fp3;
    let y1 = f.conjugate();
    let y2 = fu2_p2;
    let y3 = fu_p.conjugate();
    let y4 = (fu * fu2_p).conjugate();
    let y5 = fu2.conjugate();
    let y6 = (fu3 * fu3_p).conjugate();

    let mut t0 = y6.cyclotomic_square() * y4 * y5;
    let mut t1 = y3 * y5 * t0;
    t0 *= y2;
    t1 = (t1.cyclotomic_square() * t0).cyclotomic_square();
    t0 = t1 * y1;
    t1 *= y0;

    t0.cyclotomic_square() * t1
}

/// Line coefficients `(c0, c1, c2)`. The line evaluated at `P` is
/// `c0 * P.y + (c1 * P.x) * w + c2 * w * v`.
type EllCoeff = (Fp2, Fp2, Fp2);

/// G2 point with its Miller loop line coefficients precomputed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct G2Prepared {
    ell_coeffs: Vec<EllCoeff>,
    infinity: bool,
}

impl From<G2Affine> for G2Prepared {
    fn from(q: G2Affine) -> Self {
        if q.is_identity() {
            return Self {
                ell_coeffs: Vec::new(),
                infinity: true,
            };
        }

        let mut ell_coeffs = Vec::with_capacity(ATE_LOOP_COUNT.len() + 24);
        let mut r = G2HomProjective {
            x: q.x,
            y: q.y,
            z: Fp2::ONE,
        };
        let neg_q = q.neg();

        for bit in ATE_LOOP_COUNT.iter().rev().skip(1) {
            ell_coeffs.push(r.doubling_step());
            match bit {
                1 => ell_coeffs.push(r.addition_step(&q)),
                -1 => ell_coeffs.push(r.addition_step(&neg_q)),
                _ => {}
            }
        }

        let q1 = mul_by_char(&q);
        let mut q2 = mul_by_char(&q1);
        q2.y = -q2.y;

        ell_coeffs.push(r.addition_step(&q1));
        ell_coeffs.push(r.addition_step(&q2));

        Self {
            ell_coeffs,
            infinity: false,
        }
    }
}

/// Running point of the line coefficient precomputation, homogeneous projective.
struct G2HomProjective {
    x: Fp2,
    y: Fp2,
    z: Fp2,
}

impl G2HomProjective {
    /// Doubles in place and returns the tangent line.
    fn doubling_step(&mut self) -> EllCoeff {
        let a = (self.x * self.y).scale(&TWO_INV);
        let b = self.y.square();
        let c = self.z.square();
        let e = TWIST_B * (c.double() + c);
        let f = e.double() + e;
        let g = (b + f).scale(&TWO_INV);
        let h = (self.y + self.z).square() - (b + c);
        let i = e - b;
        let j = self.x.square();
        let e_square = e.square();

        self.x = a * (b - f);
        self.y = g.square() - (e_square.double() + e_square);
        self.z = b * h;

        (-h, j.double() + j, i)
    }

    /// Adds an affine point in place and returns the chord line.
    fn addition_step(&mut self, q: &G2Affine) -> EllCoeff {
        let theta = self.y - q.y * self.z;
        let lambda = self.x - q.x * self.z;
        let c = theta.square();
        let d = lambda.square();
        let e = lambda * d;
        let f = self.z * c;
        let g = self.x * d;
        let h = e + f - g.double();

        self.x = lambda * h;
        self.y = theta * (g - h) - e * self.y;
        self.z = self.z * e;

        let j = theta * q.x - lambda * q.y;

        (lambda, -theta, j)
    }
}

/// The p-power Frobenius endomorphism carried through the twist.
fn mul_by_char(q: &G2Affine) -> G2Affine {
    G2Affine::new_unchecked(
        q.x.frobenius_map(1) * TWIST_MUL_BY_Q_X,
        q.y.frobenius_map(1) * TWIST_MUL_BY_Q_Y,
    )
}

#[inline]
fn ell(f: &mut Fp12, coeffs: &EllCoeff, p: &G1Affine) {
    let c0 = coeffs.0.scale(&p.y);
    let c1 = coeffs.1.scale(&p.x);
    *f = f.mul_by_034(&c0, &c1, &coeffs.2);
}

/// Evaluates the Miller loop of `e(P, Q)`.
///
/// Returns one if either input is the point at infinity.
pub fn miller_loop(p: &G1Affine, q: &G2Prepared) -> MillerLoopResult {
    if p.is_identity() || q.infinity {
        return MillerLoopResult(Fp12::ONE);
    }

    let mut coeffs = q.ell_coeffs.iter();
    let mut step = |f: &mut Fp12| {
        if let Some(c) = coeffs.next() {
            ell(f, c, p);
        }
    };

    let mut f = Fp12::ONE;
    for (i, bit) in ATE_LOOP_COUNT.iter().rev().skip(1).enumerate() {
        if i != 0 {
            f = f.square();
        }
        step(&mut f);
        if *bit != 0 {
            step(&mut f);
        }
    }

    // Frobenius correction lines for Q1 and -Q2.
    step(&mut f);
    step(&mut f);

    MillerLoopResult(f)
}

/// Computes the optimal ate pairing `e(P, Q)`.
///
/// Both points must already be validated: on their curves, and `Q` in the order `r` subgroup.
/// Pairing with the point at infinity on either side gives the identity.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
    if p.is_identity() || q.is_identity() {
        return Gt::identity();
    }
    miller_loop(p, &G2Prepared::from(*q)).final_exponentiation()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bn254::{g2::GROUP_ORDER, G1Jacobian, G2Jacobian};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn g1_mul(k: u64) -> G1Affine {
        G1Jacobian::from(G1Affine::generator()).mul_by_limbs(&[k]).to_affine()
    }

    fn g2_mul(k: u64) -> G2Affine {
        G2Jacobian::from(G2Affine::generator()).mul_by_limbs(&[k]).to_affine()
    }

    #[test]
    fn loop_count_is_six_u_plus_two() {
        let value = ATE_LOOP_COUNT
            .iter()
            .rev()
            .fold(0i128, |acc, digit| 2 * acc + *digit as i128);
        assert_eq!(value, 6 * BN_U as i128 + 2);
    }

    #[test]
    fn non_degenerate() {
        let e = pairing(&G1Affine::generator(), &G2Affine::generator());
        assert!(!e.is_identity());
        assert_ne!(*e.as_fp12(), Fp12::ZERO);
        // The result lies in the order r subgroup.
        assert!(e.pow(&GROUP_ORDER).is_identity());
    }

    #[test]
    fn identity_absorption() {
        let p = g1_mul(7);
        let q = g2_mul(11);
        assert!(pairing(&G1Affine::identity(), &q).is_identity());
        assert!(pairing(&p, &G2Affine::identity()).is_identity());
        assert!(miller_loop(&p, &G2Prepared::from(G2Affine::identity()))
            .final_exponentiation()
            .is_identity());
    }

    #[test]
    fn bilinearity() {
        let mut rng = StdRng::seed_from_u64(197);
        let p = G1Affine::generator();
        let q = G2Affine::generator();
        let base = pairing(&p, &q);

        for _ in 0..3 {
            let a: u64 = rng.gen();
            let b: u64 = rng.gen();
            let ab = a as u128 * b as u128;

            let lhs = pairing(&g1_mul(a), &g2_mul(b));
            let rhs = base.pow(&[ab as u64, (ab >> 64) as u64]);
            assert_eq!(lhs, rhs);
        }
    }

    #[test]
    fn linear_in_each_argument() {
        let p = g1_mul(3);
        let q = g2_mul(5);
        let e = pairing(&p, &q);

        assert_eq!(pairing(&g1_mul(6), &q), e * e);
        assert_eq!(pairing(&p, &g2_mul(10)), e * e);
        assert!((pairing(&p.neg(), &q) * e).is_identity());
        assert!((pairing(&p, &q.neg()) * e).is_identity());
    }

    #[test]
    fn zero_miller_output_never_passes() {
        let gt = MillerLoopResult(Fp12::ZERO).final_exponentiation();
        assert!(!gt.is_identity());
    }
}
