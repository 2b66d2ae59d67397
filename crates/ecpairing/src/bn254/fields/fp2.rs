//! Quadratic extension `Fp2 = Fp[u] / (u^2 + 1)`.
use super::{impl_field_ops, Field, Fp};

/// Element `c0 + c1 * u` of the quadratic extension.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp2 {
    /// Constant coefficient.
    pub c0: Fp,
    /// Coefficient of `u`.
    pub c1: Fp,
}

impl_field_ops!(Fp2);

impl Fp2 {
    /// Additive identity.
    pub const ZERO: Fp2 = Fp2::new(Fp::ZERO, Fp::ZERO);

    /// Multiplicative identity.
    pub const ONE: Fp2 = Fp2::new(Fp::ONE, Fp::ZERO);

    /// Creates `c0 + c1 * u`.
    #[inline]
    pub const fn new(c0: Fp, c1: Fp) -> Fp2 {
        Fp2 { c0, c1 }
    }

    /// Returns `true` if both coefficients are zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    /// Coefficient-wise addition.
    #[inline]
    pub fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2::new(self.c0.add(&rhs.c0), self.c1.add(&rhs.c1))
    }

    /// Coefficient-wise subtraction.
    #[inline]
    pub fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2::new(self.c0.sub(&rhs.c0), self.c1.sub(&rhs.c1))
    }

    /// Coefficient-wise negation.
    #[inline]
    pub fn neg(&self) -> Fp2 {
        Fp2::new(self.c0.neg(), self.c1.neg())
    }

    /// Returns `2 * self`.
    #[inline]
    pub fn double(&self) -> Fp2 {
        Fp2::new(self.c0.double(), self.c1.double())
    }

    /// Karatsuba multiplication.
    #[inline]
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        let aa = self.c0.mul(&rhs.c0);
        let bb = self.c1.mul(&rhs.c1);
        let sum = self.c0.add(&self.c1).mul(&rhs.c0.add(&rhs.c1));

        Fp2::new(aa.sub(&bb), sum.sub(&aa).sub(&bb))
    }

    /// Complex squaring: `(a + b)(a - b) + 2ab * u`.
    #[inline]
    pub fn square(&self) -> Fp2 {
        let a = self.c0.add(&self.c1).mul(&self.c0.sub(&self.c1));
        let b = self.c0.mul(&self.c1).double();

        Fp2::new(a, b)
    }

    /// Multiplies both coefficients by a base field element.
    #[inline]
    pub fn scale(&self, by: &Fp) -> Fp2 {
        Fp2::new(self.c0.mul(by), self.c1.mul(by))
    }

    /// Returns `c0 - c1 * u`.
    #[inline]
    pub fn conjugate(&self) -> Fp2 {
        Fp2::new(self.c0, self.c1.neg())
    }

    /// Multiplies by the sextic non-residue `9 + u`.
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        // (a + bu)(9 + u) = (9a - b) + (a + 9b)u
        let a8 = self.c0.double().double().double();
        let b8 = self.c1.double().double().double();

        Fp2::new(
            a8.add(&self.c0).sub(&self.c1),
            b8.add(&self.c1).add(&self.c0),
        )
    }

    /// Inverse through the norm `c0^2 + c1^2`, `None` for zero.
    pub fn invert(&self) -> Option<Fp2> {
        let norm = self.c0.square().add(&self.c1.square());
        let t = norm.invert()?;

        Some(Fp2::new(self.c0.mul(&t), self.c1.mul(&t).neg()))
    }

    /// Raises to `p^power`. The p-power Frobenius is conjugation.
    #[inline]
    pub fn frobenius_map(&self, power: usize) -> Fp2 {
        if power % 2 == 1 {
            self.conjugate()
        } else {
            *self
        }
    }

    /// Exponentiation by an exponent given as little-endian limbs.
    pub fn pow_vartime(&self, by: &[u64]) -> Fp2 {
        let mut res = Fp2::ONE;
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res = res.mul(self);
                }
            }
        }
        res
    }
}

impl Field for Fp2 {
    const ZERO: Self = Fp2::ZERO;
    const ONE: Self = Fp2::ONE;

    #[inline]
    fn is_zero(&self) -> bool {
        Fp2::is_zero(self)
    }

    #[inline]
    fn double(&self) -> Self {
        Fp2::double(self)
    }

    #[inline]
    fn square(&self) -> Self {
        Fp2::square(self)
    }

    #[inline]
    fn invert(&self) -> Option<Self> {
        Fp2::invert(self)
    }
}
