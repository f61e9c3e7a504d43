// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Operator implementations for [`SafeIntegral`].
//!
//! Every binary operator is written once, as its compound-assignment form, and
//! the value-returning forms delegate to it. Each compound assignment follows
//! the same two steps:
//!
//! 1. If either operand is poisoned, the result is poisoned. Nothing else runs.
//! 2. Otherwise the primitive's `checked_*` decides; `None` poisons.
//!
//! A raw primitive works on either side: `x + 1` and `1 + x` both yield a
//! `SafeIntegral`.
//!
//! # Shifts
//!
//! The shift amount is itself a `SafeIntegral` of any width. A poisoned,
//! negative, or too-wide amount (`>= T::BITS`) poisons the result. Within
//! range the shift is the native one:
//!
//! - `<<` discards the bits shifted out; it does not poison on lost bits.
//! - `>>` is logical for unsigned types and **arithmetic (sign-extending) for
//!   signed types**: `-8 >> 1 == -4`, `-1 >> 7 == -1`.
//!
//! # Bitwise
//!
//! `&`, `|`, `^` and `!` exist for unsigned types only. They cannot overflow,
//! so the only way to get a poisoned result is a poisoned operand.

use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use super::integer::{Integer, SignedInteger, UnsignedInteger};
use super::integral::SafeIntegral;

/// Generate the value, raw-operand and reference forms of a binary operator
/// from one compound-assignment body.
macro_rules! binary_op {
    ($bound:ident; $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl<T: $bound> $OpAssign<SafeIntegral<T>> for SafeIntegral<T> {
            #[inline]
            fn $op_assign(&mut self, rhs: SafeIntegral<T>) {
                // INVARIANT: poison on either side wins over any fresh result
                if self.is_invalid() || rhs.is_invalid() {
                    *self = SafeIntegral::failure();
                    return;
                }
                let ($lhs, $rhs) = (self.raw(), rhs.raw());
                *self = $body;
            }
        }

        impl<T: $bound> $OpAssign<T> for SafeIntegral<T> {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                <Self as $OpAssign<SafeIntegral<T>>>::$op_assign(self, SafeIntegral::new(rhs));
            }
        }

        impl<'a, T: $bound> $OpAssign<&'a SafeIntegral<T>> for SafeIntegral<T> {
            #[inline]
            fn $op_assign(&mut self, rhs: &'a SafeIntegral<T>) {
                <Self as $OpAssign<SafeIntegral<T>>>::$op_assign(self, *rhs);
            }
        }

        impl<T: $bound> $Op<SafeIntegral<T>> for SafeIntegral<T> {
            type Output = SafeIntegral<T>;

            #[inline]
            fn $op(mut self, rhs: SafeIntegral<T>) -> SafeIntegral<T> {
                <Self as $OpAssign<SafeIntegral<T>>>::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<T: $bound> $Op<T> for SafeIntegral<T> {
            type Output = SafeIntegral<T>;

            #[inline]
            fn $op(self, rhs: T) -> SafeIntegral<T> {
                <Self as $Op<SafeIntegral<T>>>::$op(self, SafeIntegral::new(rhs))
            }
        }

        impl<'a, T: $bound> $Op<&'a SafeIntegral<T>> for SafeIntegral<T> {
            type Output = SafeIntegral<T>;

            #[inline]
            fn $op(self, rhs: &'a SafeIntegral<T>) -> SafeIntegral<T> {
                <Self as $Op<SafeIntegral<T>>>::$op(self, *rhs)
            }
        }

        impl<'a, T: $bound> $Op<SafeIntegral<T>> for &'a SafeIntegral<T> {
            type Output = SafeIntegral<T>;

            #[inline]
            fn $op(self, rhs: SafeIntegral<T>) -> SafeIntegral<T> {
                <SafeIntegral<T> as $Op<SafeIntegral<T>>>::$op(*self, rhs)
            }
        }

        impl<'a, 'b, T: $bound> $Op<&'b SafeIntegral<T>> for &'a SafeIntegral<T> {
            type Output = SafeIntegral<T>;

            #[inline]
            fn $op(self, rhs: &'b SafeIntegral<T>) -> SafeIntegral<T> {
                <SafeIntegral<T> as $Op<SafeIntegral<T>>>::$op(*self, *rhs)
            }
        }
    };
}

binary_op!(Integer; Add, add, AddAssign, add_assign, |a, b| SafeIntegral::from_checked(a.checked_add(b)));
binary_op!(Integer; Sub, sub, SubAssign, sub_assign, |a, b| SafeIntegral::from_checked(a.checked_sub(b)));
binary_op!(Integer; Mul, mul, MulAssign, mul_assign, |a, b| SafeIntegral::from_checked(a.checked_mul(b)));
// checked_div / checked_rem cover both `b == 0` and `MIN / -1`
binary_op!(Integer; Div, div, DivAssign, div_assign, |a, b| SafeIntegral::from_checked(a.checked_div(b)));
binary_op!(Integer; Rem, rem, RemAssign, rem_assign, |a, b| SafeIntegral::from_checked(a.checked_rem(b)));

binary_op!(UnsignedInteger; BitAnd, bitand, BitAndAssign, bitand_assign, |a, b| SafeIntegral::new(a & b));
binary_op!(UnsignedInteger; BitOr, bitor, BitOrAssign, bitor_assign, |a, b| SafeIntegral::new(a | b));
binary_op!(UnsignedInteger; BitXor, bitxor, BitXorAssign, bitxor_assign, |a, b| SafeIntegral::new(a ^ b));

/// Raw value on the left: `1 - x` is `SafeIntegral::new(1) - x`.
///
/// Generic `impl<T> Add<SafeIntegral<T>> for T` is ruled out by coherence, so
/// each primitive gets its own impls.
macro_rules! raw_lhs_op {
    ($Op:ident, $op:ident, [$($t:ty),*]) => {
        $(
            impl $Op<SafeIntegral<$t>> for $t {
                type Output = SafeIntegral<$t>;

                #[inline]
                fn $op(self, rhs: SafeIntegral<$t>) -> SafeIntegral<$t> {
                    <SafeIntegral<$t> as $Op>::$op(SafeIntegral::new(self), rhs)
                }
            }
        )*
    };
}

macro_rules! raw_lhs_ops {
    ($types:tt; $($Op:ident $op:ident),*) => {
        $(raw_lhs_op!($Op, $op, $types);)*
    };
}

raw_lhs_ops!(
    [u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize];
    Add add, Sub sub, Mul mul, Div div, Rem rem
);
raw_lhs_ops!([u8, u16, u32, u64, u128, usize]; BitAnd bitand, BitOr bitor, BitXor bitxor);

macro_rules! shift_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $checked:ident) => {
        impl<T: Integer, U: Integer> $OpAssign<SafeIntegral<U>> for SafeIntegral<T> {
            #[inline]
            fn $op_assign(&mut self, amount: SafeIntegral<U>) {
                if self.is_invalid() || amount.is_invalid() {
                    *self = SafeIntegral::failure();
                    return;
                }
                // Negative or wider-than-u32 amounts fail here, `>= BITS` in the shift
                let shifted = amount
                    .raw()
                    .shift_amount()
                    .and_then(|n| self.raw().$checked(n));
                *self = SafeIntegral::from_checked(shifted);
            }
        }

        impl<T: Integer, U: Integer> $Op<SafeIntegral<U>> for SafeIntegral<T> {
            type Output = SafeIntegral<T>;

            #[inline]
            fn $op(mut self, amount: SafeIntegral<U>) -> SafeIntegral<T> {
                <Self as $OpAssign<SafeIntegral<U>>>::$op_assign(&mut self, amount);
                self
            }
        }
    };
}

shift_op!(Shl, shl, ShlAssign, shl_assign, checked_shl);
shift_op!(Shr, shr, ShrAssign, shr_assign, checked_shr);

impl<T: SignedInteger> Neg for SafeIntegral<T> {
    type Output = SafeIntegral<T>;

    /// Poisons for `-T::MIN`.
    #[inline]
    fn neg(self) -> SafeIntegral<T> {
        if self.is_invalid() {
            return SafeIntegral::failure();
        }
        SafeIntegral::from_checked(self.raw().checked_neg())
    }
}

impl<T: UnsignedInteger> Not for SafeIntegral<T> {
    type Output = SafeIntegral<T>;

    #[inline]
    fn not(self) -> SafeIntegral<T> {
        if self.is_invalid() {
            return SafeIntegral::failure();
        }
        SafeIntegral::new(!self.raw())
    }
}

impl<T: Integer> Sum for SafeIntegral<T> {
    fn sum<I: Iterator<Item = SafeIntegral<T>>>(iter: I) -> SafeIntegral<T> {
        iter.fold(SafeIntegral::zero(), |acc, x| acc + x)
    }
}

impl<'a, T: Integer> Sum<&'a SafeIntegral<T>> for SafeIntegral<T> {
    fn sum<I: Iterator<Item = &'a SafeIntegral<T>>>(iter: I) -> SafeIntegral<T> {
        iter.copied().sum()
    }
}

impl<T: Integer> Product for SafeIntegral<T> {
    fn product<I: Iterator<Item = SafeIntegral<T>>>(iter: I) -> SafeIntegral<T> {
        iter.fold(SafeIntegral::one(), |acc, x| acc * x)
    }
}

impl<'a, T: Integer> Product<&'a SafeIntegral<T>> for SafeIntegral<T> {
    fn product<I: Iterator<Item = &'a SafeIntegral<T>>>(iter: I) -> SafeIntegral<T> {
        iter.copied().product()
    }
}
