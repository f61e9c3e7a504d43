// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Comparisons.
//!
//! Comparing never poisons anything: the result is a plain `bool`. Only the
//! stored values are compared, and a poisoned value stores zero, so a poisoned
//! operand yields an answer that is well defined but meaningless. Check
//! `is_invalid()` before trusting it.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use super::integer::Integer;
use super::integral::SafeIntegral;

impl<T: Integer> PartialEq for SafeIntegral<T> {
    #[inline]
    fn eq(&self, other: &SafeIntegral<T>) -> bool {
        self.raw() == other.raw()
    }
}

impl<T: Integer> Eq for SafeIntegral<T> {}

impl<T: Integer> PartialEq<T> for SafeIntegral<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.raw() == *other
    }
}

impl<T: Integer> PartialOrd for SafeIntegral<T> {
    #[inline]
    fn partial_cmp(&self, other: &SafeIntegral<T>) -> Option<Ordering> {
        Some(self.raw().cmp(&other.raw()))
    }
}

impl<T: Integer> PartialOrd<T> for SafeIntegral<T> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(self.raw().cmp(other))
    }
}

/// Raw value on the left of a comparison, one impl per primitive.
macro_rules! raw_lhs_cmp {
    ($($t:ty),*) => {
        $(
            impl PartialEq<SafeIntegral<$t>> for $t {
                #[inline]
                fn eq(&self, other: &SafeIntegral<$t>) -> bool {
                    *self == other.raw()
                }
            }

            impl PartialOrd<SafeIntegral<$t>> for $t {
                #[inline]
                fn partial_cmp(&self, other: &SafeIntegral<$t>) -> Option<Ordering> {
                    Some(self.cmp(&other.raw()))
                }
            }
        )*
    };
}

raw_lhs_cmp!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<T: Integer> Hash for SafeIntegral<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw().hash(state);
    }
}
