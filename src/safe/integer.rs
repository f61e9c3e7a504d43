// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The native integers a [`SafeIntegral`](super::SafeIntegral) can wrap.
//!
//! [`Integer`] is sealed: it is implemented for the twelve primitive integer
//! types and nothing else. Every fallible operation goes through the
//! primitive's own `checked_*` method, so overflow is detected by the
//! compiler's intrinsics rather than by hand-written range tests.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not};

mod private {
    pub trait Sealed {}
}

/// A fixed-width primitive integer.
pub trait Integer:
    Copy + Eq + Ord + Hash + Debug + Display + Default + Send + Sync + private::Sealed + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const MIN: Self;
    const MAX: Self;
    /// Width in bits.
    const BITS: u32;
    const SIGNED: bool;
    /// Primitive type name, for diagnostics.
    const NAME: &'static str;

    /// `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;
    /// `None` on overflow.
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    /// `None` on overflow.
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    /// `None` when `rhs == 0` or for `MIN / -1`.
    fn checked_div(self, rhs: Self) -> Option<Self>;
    /// `None` when `rhs == 0` or for `MIN % -1`.
    fn checked_rem(self, rhs: Self) -> Option<Self>;
    /// `None` for `-MIN`, and for any non-zero unsigned value.
    fn checked_neg(self) -> Option<Self>;
    /// `None` when `amount >= BITS`. Bits shifted out are discarded.
    fn checked_shl(self, amount: u32) -> Option<Self>;
    /// `None` when `amount >= BITS`. Arithmetic for signed types.
    fn checked_shr(self, amount: u32) -> Option<Self>;

    /// This value read as a shift count: `None` when negative or wider than `u32`.
    fn shift_amount(self) -> Option<u32>;

    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

/// Integers with a sign bit.
pub trait SignedInteger: Integer {}

/// Integers without a sign bit. Only these get bitwise operators.
pub trait UnsignedInteger:
    Integer
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
}

macro_rules! integer_impl {
    ($marker:ident, $signed:literal, $($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Integer for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = $signed;
                const NAME: &'static str = stringify!($t);

                #[inline(always)]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline(always)]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                #[inline(always)]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                #[inline(always)]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_div(self, rhs)
                }

                #[inline(always)]
                fn checked_rem(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_rem(self, rhs)
                }

                #[inline(always)]
                fn checked_neg(self) -> Option<Self> {
                    <$t>::checked_neg(self)
                }

                #[inline(always)]
                fn checked_shl(self, amount: u32) -> Option<Self> {
                    <$t>::checked_shl(self, amount)
                }

                #[inline(always)]
                fn checked_shr(self, amount: u32) -> Option<Self> {
                    <$t>::checked_shr(self, amount)
                }

                #[inline(always)]
                fn shift_amount(self) -> Option<u32> {
                    u32::try_from(self).ok()
                }
            }

            impl $marker for $t {}
        )*
    };
}

integer_impl!(UnsignedInteger, false, u8, u16, u32, u64, u128, usize);
integer_impl!(SignedInteger, true, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn limits<T: Integer>() -> (T, T, u32, bool) {
        (T::MIN, T::MAX, T::BITS, T::SIGNED)
    }

    #[test]
    fn constants_match_primitives() {
        assert_eq!(limits::<u8>(), (0, 255, 8, false));
        assert_eq!(limits::<i16>(), (i16::MIN, i16::MAX, 16, true));
        assert_eq!(limits::<u128>(), (0, u128::MAX, 128, false));
        assert_eq!(<i64 as Integer>::NAME, "i64");
    }

    #[test]
    fn shift_amount_rejects_negative_and_wide() {
        assert_eq!((-1i32).shift_amount(), None);
        assert_eq!(7i8.shift_amount(), Some(7));
        assert_eq!(u64::MAX.shift_amount(), None);
        assert_eq!((u64::from(u32::MAX)).shift_amount(), Some(u32::MAX));
    }

    #[test]
    fn is_negative_only_for_signed_below_zero() {
        assert!(Integer::is_negative(-3i16));
        assert!(!Integer::is_negative(0i16));
        assert!(!Integer::is_negative(u8::MAX));
    }

    #[test]
    fn checked_division_edges() {
        assert_eq!(Integer::checked_div(i8::MIN, -1), None);
        assert_eq!(Integer::checked_rem(i8::MIN, -1), None);
        assert_eq!(Integer::checked_div(10u8, 0), None);
        assert_eq!(Integer::checked_div(-7i32, 2), Some(-3));
    }
}
