//! alt_bn128 base field `GF(p)` where
//! p = 0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47
use super::{adc, impl_field_ops, mac, sbb, Field};
use core::fmt;

/// Field modulus p, little-endian limbs.
const MODULUS: [u64; 4] = [
    0x3c20_8c16_d87c_fd47,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// p - 2, the inversion exponent.
const MODULUS_MINUS_TWO: [u64; 4] = [
    0x3c20_8c16_d87c_fd45,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x87d2_0782_e486_6389;

/// R = 2^256 mod p
const R: Fp = Fp([
    0xd35d_438d_c58f_0d9d,
    0x0a78_eb28_f5c7_0b3d,
    0x666e_a36f_7879_462c,
    0x0e0a_77c1_9a07_df2f,
]);

/// R^2 = 2^512 mod p
const R2: Fp = Fp([
    0xf32c_fc5b_538a_fa89,
    0xb5e7_1911_d445_01fb,
    0x47ab_1eff_0a41_7ff6,
    0x06d8_9f71_cab8_351f,
]);

/// Element of the base field in Montgomery form: `Fp(a) = aR mod p`, with `R = 2^256`.
///
/// The limbs are always fully reduced, so two elements are equal exactly when their limbs are.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fp(pub(crate) [u64; 4]);

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in self.to_bytes_be() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl_field_ops!(Fp);

impl Fp {
    /// Additive identity.
    pub const ZERO: Fp = Fp([0, 0, 0, 0]);

    /// Multiplicative identity.
    pub const ONE: Fp = R;

    /// Converts a canonical integer, given as little-endian limbs, into Montgomery form.
    ///
    /// The caller must pass a value below the modulus.
    pub const fn from_raw(limbs: [u64; 4]) -> Fp {
        Fp::mul(&Fp(limbs), &R2)
    }

    /// Converts a small integer into a field element.
    pub const fn from_u64(value: u64) -> Fp {
        Fp::from_raw([value, 0, 0, 0])
    }

    /// Parses a 32-byte big-endian integer.
    ///
    /// Returns `None` if the integer is not below the modulus. Values are never reduced.
    pub fn from_bytes_be(bytes: &[u8; 32]) -> Option<Fp> {
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().rev().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }

        // A borrow means `limbs < MODULUS`.
        let (_, borrow) = sbb(limbs[0], MODULUS[0], 0);
        let (_, borrow) = sbb(limbs[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(limbs[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(limbs[3], MODULUS[3], borrow);
        if borrow == 0 {
            return None;
        }

        Some(Fp::mul(&Fp(limbs), &R2))
    }

    /// Serializes the canonical integer as 32 big-endian bytes.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        let canonical = Fp::montgomery_reduce(&[
            self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0,
        ]);

        let mut out = [0u8; 32];
        for (chunk, limb) in out.chunks_exact_mut(8).zip(canonical.0.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Returns `true` if the element is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        (self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0
    }

    /// Subtracts the modulus once if the value is not below it.
    #[inline]
    const fn subtract_p(&self) -> Fp {
        let (r0, borrow) = sbb(self.0[0], MODULUS[0], 0);
        let (r1, borrow) = sbb(self.0[1], MODULUS[1], borrow);
        let (r2, borrow) = sbb(self.0[2], MODULUS[2], borrow);
        let (r3, borrow) = sbb(self.0[3], MODULUS[3], borrow);

        // Keep the original value if the subtraction underflowed.
        let r0 = (self.0[0] & borrow) | (r0 & !borrow);
        let r1 = (self.0[1] & borrow) | (r1 & !borrow);
        let r2 = (self.0[2] & borrow) | (r2 & !borrow);
        let r3 = (self.0[3] & borrow) | (r3 & !borrow);

        Fp([r0, r1, r2, r3])
    }

    /// Field addition.
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        // p < 2^254, so the sum of two reduced values never carries out of the top limb.
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, _) = adc(self.0[3], rhs.0[3], carry);

        Fp([d0, d1, d2, d3]).subtract_p()
    }

    /// Field subtraction.
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        let (d0, borrow) = sbb(self.0[0], rhs.0[0], 0);
        let (d1, borrow) = sbb(self.0[1], rhs.0[1], borrow);
        let (d2, borrow) = sbb(self.0[2], rhs.0[2], borrow);
        let (d3, borrow) = sbb(self.0[3], rhs.0[3], borrow);

        // On underflow `borrow` is all ones and the modulus is added back.
        let (d0, carry) = adc(d0, MODULUS[0] & borrow, 0);
        let (d1, carry) = adc(d1, MODULUS[1] & borrow, carry);
        let (d2, carry) = adc(d2, MODULUS[2] & borrow, carry);
        let (d3, _) = adc(d3, MODULUS[3] & borrow, carry);

        Fp([d0, d1, d2, d3])
    }

    /// Field negation.
    #[inline]
    pub const fn neg(&self) -> Fp {
        let (d0, borrow) = sbb(MODULUS[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], self.0[2], borrow);
        let (d3, _) = sbb(MODULUS[3], self.0[3], borrow);

        // -0 must stay 0 rather than become p.
        let mask = (self.is_zero() as u64).wrapping_sub(1);

        Fp([d0 & mask, d1 & mask, d2 & mask, d3 & mask])
    }

    /// Returns `2 * self`.
    #[inline]
    pub const fn double(&self) -> Fp {
        self.add(self)
    }

    /// Montgomery multiplication.
    #[inline]
    pub const fn mul(&self, rhs: &Fp) -> Fp {
        let mut t = [0u64; 8];
        let mut i = 0;
        while i < 4 {
            let mut carry = 0;
            let mut j = 0;
            while j < 4 {
                let (lo, hi) = mac(t[i + j], self.0[i], rhs.0[j], carry);
                t[i + j] = lo;
                carry = hi;
                j += 1;
            }
            t[i + 4] = carry;
            i += 1;
        }

        Fp::montgomery_reduce(&t)
    }

    /// Returns `self * self`.
    #[inline]
    pub const fn square(&self) -> Fp {
        self.mul(self)
    }

    /// Montgomery reduction of a 512-bit product, returning `t * R^-1 mod p`.
    #[inline]
    const fn montgomery_reduce(t: &[u64; 8]) -> Fp {
        let mut r = *t;
        let mut carry2 = 0;
        let mut i = 0;
        while i < 4 {
            let k = r[i].wrapping_mul(INV);
            let (_, mut carry) = mac(r[i], k, MODULUS[0], 0);
            let mut j = 1;
            while j < 4 {
                let (lo, hi) = mac(r[i + j], k, MODULUS[j], carry);
                r[i + j] = lo;
                carry = hi;
                j += 1;
            }
            let (lo, hi) = adc(r[i + 4], carry2, carry);
            r[i + 4] = lo;
            carry2 = hi;
            i += 1;
        }

        // The result is below 2p, one conditional subtraction fully reduces it.
        Fp([r[4], r[5], r[6], r[7]]).subtract_p()
    }

    /// Exponentiation by an exponent given as little-endian limbs.
    ///
    /// **This operation is variable time with respect to the exponent.** The exponents used in
    /// this crate are public constants.
    pub fn pow_vartime(&self, by: &[u64]) -> Fp {
        let mut res = Fp::ONE;
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

    /// Multiplicative inverse via Fermat's little theorem, `None` for zero.
    pub fn invert(&self) -> Option<Fp> {
        if self.is_zero() {
            return None;
        }
        Some(self.pow_vartime(&MODULUS_MINUS_TWO))
    }
}

impl Field for Fp {
    const ZERO: Self = Fp::ZERO;
    const ONE: Self = Fp::ONE;

    #[inline]
    fn is_zero(&self) -> bool {
        Fp::is_zero(self)
    }

    #[inline]
    fn double(&self) -> Self {
        Fp::double(self)
    }

    #[inline]
    fn square(&self) -> Self {
        Fp::square(self)
    }

    #[inline]
    fn invert(&self) -> Option<Self> {
        Fp::invert(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp_from_hex(s: &str) -> Option<Fp> {
        let bytes: [u8; 32] = hex::decode(s).unwrap().try_into().unwrap();
        Fp::from_bytes_be(&bytes)
    }

    #[test]
    fn montgomery_constants() {
        assert_eq!(Fp::from_raw([1, 0, 0, 0]), Fp::ONE);
        assert_eq!(Fp::ONE.to_bytes_be()[31], 1);
        assert_eq!(Fp::ONE.to_bytes_be()[..31], [0u8; 31]);
        assert_eq!(MODULUS[0].wrapping_mul(INV), u64::MAX);
    }

    #[test]
    fn modulus_is_rejected() {
        assert!(fp_from_hex("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47").is_none());
        assert!(fp_from_hex("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff").is_none());
        let max = fp_from_hex("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd46")
            .unwrap();
        assert_eq!(max + Fp::ONE, Fp::ZERO);
        assert_eq!(max, -Fp::ONE);
    }

    #[test]
    fn bytes_round_trip() {
        let s = "2cf44499d5d27bb186308b7af7af02ac5bc9eeb6a3d147c186b21fb1b76e18da";
        let a = fp_from_hex(s).unwrap();
        assert_eq!(hex::encode(a.to_bytes_be()), s);
        assert_eq!(Fp::ZERO.to_bytes_be(), [0u8; 32]);
    }

    #[test]
    fn arithmetic() {
        let two = Fp::from_u64(2);
        let three = Fp::from_u64(3);
        assert_eq!(two + three, Fp::from_u64(5));
        assert_eq!(two * three, Fp::from_u64(6));
        assert_eq!(two - three, -Fp::ONE);
        assert_eq!(three.square(), Fp::from_u64(9));
        assert_eq!(two.double(), Fp::from_u64(4));
        assert_eq!(-Fp::ZERO, Fp::ZERO);
    }

    #[test]
    fn inversion() {
        assert_eq!(Fp::ZERO.invert(), None);
        let a = fp_from_hex("1971ff0471b09fa93caaf13cbf443c1aede09cc4328f5a62aad45f40ec133eb4")
            .unwrap();
        assert_eq!(a * a.invert().unwrap(), Fp::ONE);
        let two_inv = Fp::from_u64(2).invert().unwrap();
        assert_eq!(two_inv.double(), Fp::ONE);
    }
}
