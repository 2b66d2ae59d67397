//! Field tower used by the alt_bn128 pairing.
//!
//! ```text
//! Fp2  = Fp[u]  / (u^2 + 1)
//! Fp6  = Fp2[v] / (v^3 - (9 + u))
//! Fp12 = Fp6[w] / (w^2 - v)
//! ```
//!
//! Every level exposes the same operation set through [`Field`]. Higher levels only touch the
//! level below through its public operations.
use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

mod fp;
mod fp12;
mod fp2;
mod fp6;

pub use fp::Fp;
pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp6::Fp6;

/// Common operation set of every field in the tower.
pub trait Field:
    Copy
    + Clone
    + Debug
    + Default
    + PartialEq
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Returns `true` if the element is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns `self + self`.
    fn double(&self) -> Self;

    /// Returns `self * self`.
    fn square(&self) -> Self;

    /// Returns the multiplicative inverse, or `None` for zero.
    fn invert(&self) -> Option<Self>;
}

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
///
/// The returned borrow is either `0` or `u64::MAX`, so it can be used as a mask.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Implements the `core::ops` arithmetic traits for a field type in terms of its inherent
/// `add`, `sub`, `mul` and `neg` methods.
macro_rules! impl_field_ops {
    ($t:ident) => {
        impl core::ops::Add for $t {
            type Output = $t;

            #[inline]
            fn add(self, rhs: $t) -> $t {
                $t::add(&self, &rhs)
            }
        }

        impl<'a> core::ops::Add<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn add(self, rhs: &'a $t) -> $t {
                $t::add(&self, rhs)
            }
        }

        impl core::ops::Sub for $t {
            type Output = $t;

            #[inline]
            fn sub(self, rhs: $t) -> $t {
                $t::sub(&self, &rhs)
            }
        }

        impl<'a> core::ops::Sub<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn sub(self, rhs: &'a $t) -> $t {
                $t::sub(&self, rhs)
            }
        }

        impl core::ops::Mul for $t {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: $t) -> $t {
                $t::mul(&self, &rhs)
            }
        }

        impl<'a> core::ops::Mul<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: &'a $t) -> $t {
                $t::mul(&self, rhs)
            }
        }

        impl core::ops::Neg for $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                $t::neg(&self)
            }
        }

        impl core::ops::AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                *self = $t::add(self, &rhs);
            }
        }

        impl core::ops::SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                *self = $t::sub(self, &rhs);
            }
        }

        impl core::ops::MulAssign for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                *self = $t::mul(self, &rhs);
            }
        }
    };
}

pub(crate) use impl_field_ops;
