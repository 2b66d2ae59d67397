//! Short Weierstrass group law `y^2 = x^3 + b`, shared by G1 and the G2 twist.
use super::fields::Field;
use core::fmt::Debug;

/// Parameters of a short Weierstrass curve with `a = 0`.
pub trait CurveParams: Copy + Clone + Debug + PartialEq + Eq + Send + Sync + 'static {
    /// Coordinate field.
    type Base: Field;

    /// Constant term of the curve equation.
    const B: Self::Base;

    /// Affine x-coordinate of the fixed generator.
    const GENERATOR_X: Self::Base;

    /// Affine y-coordinate of the fixed generator.
    const GENERATOR_Y: Self::Base;
}

/// Point in affine coordinates. The point at infinity carries the `infinity` flag and zero
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affine<C: CurveParams> {
    /// x-coordinate.
    pub x: C::Base,
    /// y-coordinate.
    pub y: C::Base,
    /// Whether this is the point at infinity.
    pub infinity: bool,
}

impl<C: CurveParams> Default for Affine<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: CurveParams> Affine<C> {
    /// The point at infinity.
    pub const fn identity() -> Self {
        Self {
            x: <C::Base as Field>::ZERO,
            y: <C::Base as Field>::ZERO,
            infinity: true,
        }
    }

    /// Fixed generator of the group.
    pub const fn generator() -> Self {
        Self::new_unchecked(C::GENERATOR_X, C::GENERATOR_Y)
    }

    /// Creates a finite point without checking the curve equation.
    pub const fn new_unchecked(x: C::Base, y: C::Base) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// Returns `true` if this is the point at infinity.
    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Returns `true` if the point satisfies `y^2 = x^3 + b` or is the point at infinity.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        self.y.square() == self.x.square() * self.x + C::B
    }

    /// Reflects the point across the x-axis.
    pub fn neg(&self) -> Self {
        if self.infinity {
            return *self;
        }
        Self::new_unchecked(self.x, -self.y)
    }

    /// Lifts into Jacobian coordinates.
    pub fn to_jacobian(&self) -> Jacobian<C> {
        if self.infinity {
            return Jacobian::identity();
        }
        Jacobian {
            x: self.x,
            y: self.y,
            z: <C::Base as Field>::ONE,
        }
    }
}

/// Point in Jacobian coordinates, `(X, Y, Z)` stands for `(X / Z^2, Y / Z^3)`.
///
/// Any point with `Z = 0` is the point at infinity.
#[derive(Clone, Copy, Debug)]
pub struct Jacobian<C: CurveParams> {
    x: C::Base,
    y: C::Base,
    z: C::Base,
}

impl<C: CurveParams> PartialEq for Jacobian<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        self.x * z2z2 == other.x * z1z1
            && self.y * z2z2 * other.z == other.y * z1z1 * self.z
    }
}

impl<C: CurveParams> Eq for Jacobian<C> {}

impl<C: CurveParams> Jacobian<C> {
    /// The point at infinity.
    pub fn identity() -> Self {
        Self {
            x: <C::Base as Field>::ZERO,
            y: <C::Base as Field>::ONE,
            z: <C::Base as Field>::ZERO,
        }
    }

    /// Returns `true` if this is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Point doubling, `dbl-2009-l`.
    pub fn double(&self) -> Self {
        if self.is_identity() {
            return *self;
        }

        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let y3 = e * (d - x3) - c.double().double().double();
        let z3 = (self.y * self.z).double();

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Point addition, `add-2007-bl`, falling back to doubling for equal inputs.
    pub fn add(&self, rhs: &Self) -> Self {
        if self.is_identity() {
            return *rhs;
        }
        if rhs.is_identity() {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = self.x * z2z2;
        let u2 = rhs.x * z1z1;
        let s1 = self.y * rhs.z * z2z2;
        let s2 = rhs.y * self.z * z1z1;

        if u1 == u2 {
            // Same x-coordinate: either the same point or its negation.
            return if s1 == s2 {
                self.double()
            } else {
                Self::identity()
            };
        }

        let h = u2 - u1;
        let i = h.double().square();
        let j = h * i;
        let r = (s2 - s1).double();
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + rhs.z).square() - z1z1 - z2z2) * h;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Reflects the point across the x-axis.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Scalar multiplication by an integer given as little-endian limbs.
    ///
    /// **This operation is variable time with respect to the scalar.**
    pub fn mul_by_limbs(&self, by: &[u64]) -> Self {
        let mut acc = Self::identity();
        for limb in by.iter().rev() {
            for i in (0..64).rev() {
                acc = acc.double();
                if (limb >> i) & 1 == 1 {
                    acc = acc.add(self);
                }
            }
        }
        acc
    }

    /// Normalizes to affine coordinates.
    pub fn to_affine(&self) -> Affine<C> {
        let Some(z_inv) = self.z.invert() else {
            return Affine::identity();
        };
        let z_inv2 = z_inv.square();

        Affine::new_unchecked(self.x * z_inv2, self.y * z_inv2 * z_inv)
    }
}

impl<C: CurveParams> From<Affine<C>> for Jacobian<C> {
    fn from(p: Affine<C>) -> Self {
        p.to_jacobian()
    }
}

impl<C: CurveParams> From<Jacobian<C>> for Affine<C> {
    fn from(p: Jacobian<C>) -> Self {
        p.to_affine()
    }
}
