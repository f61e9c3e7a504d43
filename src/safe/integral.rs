// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The poison-carrying integer wrapper.
//!
//! A `SafeIntegral<T>` is a `T` plus one bit saying "this value cannot be
//! trusted". The bit is set by overflow, division by zero, a bad shift amount,
//! or by touching an operand that already had it set. Nothing clears it except
//! building a fresh value.
//!
//! # Invariants (DO NOT WEAKEN)
//!
//! - INVARIANT: once poisoned, every value derived from this one is poisoned.
//! - INVARIANT: a poisoned value stores zero, so `get()` has nothing stale to leak.
//! - INVARIANT: no operation panics, wraps silently, or hits undefined behaviour.

use std::fmt;

use super::integer::{Integer, SignedInteger};

/// A fixed-width integer that tracks whether it is still meaningful.
///
/// ```
/// use guardrail::safe::SafeI32;
///
/// let total = SafeI32::new(i32::MAX) + 1;
/// assert!(total.is_invalid());
/// assert_eq!(total.get(), 0);
///
/// let ok = SafeI32::new(40) + SafeI32::new(2);
/// assert_eq!(ok.checked(), Some(42));
/// ```
#[derive(Clone, Copy)]
pub struct SafeIntegral<T: Integer> {
    val: T,
    poisoned: bool,
}

impl<T: Integer> SafeIntegral<T> {
    /// Largest representable value (valid).
    pub const MAX: SafeIntegral<T> = SafeIntegral::new(T::MAX);

    /// Smallest representable value (valid).
    pub const MIN: SafeIntegral<T> = SafeIntegral::new(T::MIN);

    /// A valid value.
    #[inline]
    pub const fn new(val: T) -> SafeIntegral<T> {
        SafeIntegral {
            val,
            poisoned: false,
        }
    }

    /// A value whose poison bit is given explicitly.
    ///
    /// When `invalid` is true the stored value is discarded.
    #[inline]
    pub fn with_poison(val: T, invalid: bool) -> SafeIntegral<T> {
        if invalid {
            SafeIntegral::failure()
        } else {
            SafeIntegral::new(val)
        }
    }

    /// A poisoned value.
    #[inline]
    pub const fn failure() -> SafeIntegral<T> {
        SafeIntegral {
            val: T::ZERO,
            poisoned: true,
        }
    }

    /// Result of a checked primitive: `None` poisons.
    #[inline]
    pub(crate) fn from_checked(result: Option<T>) -> SafeIntegral<T> {
        match result {
            Some(val) => SafeIntegral::new(val),
            None => SafeIntegral::failure(),
        }
    }

    pub const fn zero() -> SafeIntegral<T> {
        SafeIntegral::new(T::ZERO)
    }

    pub const fn one() -> SafeIntegral<T> {
        SafeIntegral::new(T::ONE)
    }

    /// Same as [`SafeIntegral::MAX`].
    pub const fn max_value() -> SafeIntegral<T> {
        SafeIntegral::MAX
    }

    /// Same as [`SafeIntegral::MIN`].
    pub const fn min_value() -> SafeIntegral<T> {
        SafeIntegral::MIN
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// True once any overflow or domain error reached this value.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        self.poisoned
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        !self.poisoned
    }

    /// Alias of [`is_invalid`](Self::is_invalid).
    #[inline]
    pub const fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Strictly greater than zero and valid.
    pub fn is_pos(&self) -> bool {
        self.is_valid() && self.val > T::ZERO
    }

    /// Strictly less than zero and valid. Always false for unsigned types.
    pub fn is_neg(&self) -> bool {
        T::SIGNED && self.is_valid() && self.val.is_negative()
    }

    /// Exactly zero and valid.
    pub fn is_zero(&self) -> bool {
        self.is_valid() && self.val == T::ZERO
    }

    /// For guard clauses: "nothing usable here".
    pub fn is_zero_or_invalid(&self) -> bool {
        self.is_invalid() || self.val == T::ZERO
    }

    /// Equal to `T::MAX` and valid.
    pub fn is_max(&self) -> bool {
        self.is_valid() && self.val == T::MAX
    }

    /// Equal to `T::MIN` and valid.
    pub fn is_min(&self) -> bool {
        self.is_valid() && self.val == T::MIN
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The wrapped value, or zero if poisoned.
    ///
    /// Reading a poisoned value is not an error, but it is recorded as a
    /// `tracing` warning. Check [`is_invalid`](Self::is_invalid) first, or use
    /// [`checked`](Self::checked), when the difference matters.
    #[inline]
    #[track_caller]
    pub fn get(&self) -> T {
        if self.poisoned {
            let caller = std::panic::Location::caller();
            tracing::warn!(
                ty = T::NAME,
                file = caller.file(),
                line = caller.line(),
                "read of invalid safe integral"
            );
            return T::ZERO;
        }
        self.val
    }

    /// `Some(value)` if valid.
    #[inline]
    pub fn checked(&self) -> Option<T> {
        if self.poisoned {
            None
        } else {
            Some(self.val)
        }
    }

    /// The wrapped value, or `default` if poisoned. No warning is recorded.
    #[inline]
    pub fn get_or(&self, default: T) -> T {
        self.checked().unwrap_or(default)
    }

    // ------------------------------------------------------------------
    // Combinators
    // ------------------------------------------------------------------

    /// Smaller of the two. Poisoned if either is.
    pub fn min(self, other: SafeIntegral<T>) -> SafeIntegral<T> {
        if self.poisoned || other.poisoned {
            return SafeIntegral::failure();
        }
        SafeIntegral::new(core::cmp::min(self.val, other.val))
    }

    /// Larger of the two. Poisoned if either is.
    pub fn max(self, other: SafeIntegral<T>) -> SafeIntegral<T> {
        if self.poisoned || other.poisoned {
            return SafeIntegral::failure();
        }
        SafeIntegral::new(core::cmp::max(self.val, other.val))
    }

    /// Add one in place. Poisons at `T::MAX`.
    pub fn inc(&mut self) -> &mut Self {
        *self += T::ONE;
        self
    }

    /// Subtract one in place. Poisons at `T::MIN`.
    pub fn dec(&mut self) -> &mut Self {
        *self -= T::ONE;
        self
    }

    /// Same value in another width. Poisoned if it does not fit.
    ///
    /// ```
    /// use guardrail::safe::{to_i32, SafeU8};
    ///
    /// assert_eq!(to_i32(200).convert::<u8>().checked(), Some(200));
    /// assert!(to_i32(-1).convert::<u8>().is_invalid());
    /// assert!(SafeU8::failure().convert::<u64>().is_invalid());
    /// ```
    pub fn convert<U>(self) -> SafeIntegral<U>
    where
        U: Integer + TryFrom<T>,
    {
        if self.poisoned {
            return SafeIntegral::failure();
        }
        SafeIntegral::from_checked(U::try_from(self.val).ok())
    }

    /// Raw stored value, without the poison check. Zero when poisoned.
    #[inline]
    pub(crate) const fn raw(&self) -> T {
        self.val
    }
}

impl<T: SignedInteger> SafeIntegral<T> {
    /// Absolute value. Poisons for `T::MIN`.
    pub fn abs(self) -> SafeIntegral<T> {
        if self.is_neg() {
            -self
        } else {
            self
        }
    }
}

impl<T: Integer> Default for SafeIntegral<T> {
    /// Valid zero.
    fn default() -> Self {
        SafeIntegral::zero()
    }
}

impl<T: Integer> From<T> for SafeIntegral<T> {
    fn from(val: T) -> Self {
        SafeIntegral::new(val)
    }
}

impl<T: Integer> fmt::Display for SafeIntegral<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poisoned {
            f.write_str("[error]")
        } else {
            fmt::Display::fmt(&self.val, f)
        }
    }
}

impl<T: Integer> fmt::Debug for SafeIntegral<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeIntegral")
            .field("ty", &T::NAME)
            .field("val", &self.val)
            .field("poisoned", &self.poisoned)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_reads_as_zero() {
        let bad = SafeIntegral::<u16>::failure();
        assert!(bad.is_invalid());
        assert!(bad.is_poisoned());
        assert_eq!(bad.get(), 0);
        assert_eq!(bad.checked(), None);
        assert_eq!(bad.get_or(9), 9);
    }

    #[test]
    fn with_poison_discards_value() {
        let bad = SafeIntegral::with_poison(77i8, true);
        assert!(bad.is_invalid());
        assert_eq!(bad.raw(), 0);

        let good = SafeIntegral::with_poison(77i8, false);
        assert_eq!(good.checked(), Some(77));
    }

    #[test]
    fn limits_are_valid() {
        assert_eq!(SafeIntegral::<i8>::max_value().checked(), Some(i8::MAX));
        assert_eq!(SafeIntegral::<i8>::min_value().checked(), Some(i8::MIN));
        assert!(SafeIntegral::<u32>::MAX.is_max());
        assert!(SafeIntegral::<u32>::MIN.is_min());
        assert!(SafeIntegral::<u32>::MIN.is_zero());
    }

    #[test]
    fn sign_queries() {
        assert!(SafeIntegral::new(-4i32).is_neg());
        assert!(!SafeIntegral::new(-4i32).is_pos());
        assert!(SafeIntegral::new(4i32).is_pos());
        assert!(!SafeIntegral::new(u64::MAX).is_neg());
        assert!(!SafeIntegral::<i32>::failure().is_neg());
        assert!(!SafeIntegral::<i32>::failure().is_pos());
        assert!(!SafeIntegral::<i32>::failure().is_zero());
    }

    #[test]
    fn zero_or_invalid_merges_both() {
        assert!(SafeIntegral::new(0u8).is_zero_or_invalid());
        assert!(SafeIntegral::<u8>::failure().is_zero_or_invalid());
        assert!(!SafeIntegral::new(1u8).is_zero_or_invalid());
    }

    #[test]
    fn min_max_propagate_poison() {
        let a = SafeIntegral::new(3i64);
        let b = SafeIntegral::new(-8i64);
        assert_eq!(a.min(b).checked(), Some(-8));
        assert_eq!(a.max(b).checked(), Some(3));
        assert!(a.min(SafeIntegral::failure()).is_invalid());
        assert!(SafeIntegral::<i64>::failure().max(b).is_invalid());
    }

    #[test]
    fn inc_dec_poison_at_bounds() {
        let mut n = SafeIntegral::new(254u8);
        n.inc();
        assert_eq!(n.checked(), Some(255));
        n.inc();
        assert!(n.is_invalid());

        let mut m = SafeIntegral::new(i8::MIN + 1);
        m.dec();
        assert!(m.is_min());
        m.dec().inc();
        assert!(m.is_invalid());
    }

    #[test]
    fn abs_poisons_min() {
        assert_eq!(SafeIntegral::new(-5i16).abs().checked(), Some(5));
        assert!(SafeIntegral::new(i16::MIN).abs().is_invalid());
    }

    #[test]
    fn convert_checks_range() {
        assert_eq!(SafeIntegral::new(300u16).convert::<u32>().checked(), Some(300));
        assert!(SafeIntegral::new(300u16).convert::<u8>().is_invalid());
        assert!(SafeIntegral::new(-1i64).convert::<u128>().is_invalid());
        assert_eq!(SafeIntegral::new(-1i64).convert::<i8>().checked(), Some(-1));
    }

    #[test]
    fn display_marks_errors() {
        assert_eq!(SafeIntegral::new(-12i32).to_string(), "-12");
        assert_eq!(SafeIntegral::<i32>::failure().to_string(), "[error]");
        assert!(format!("{:?}", SafeIntegral::new(1u8)).contains("u8"));
    }
}
