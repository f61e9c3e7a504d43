// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for guardrail's safe integers.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Overflow detection**: an `i32` sum is poisoned exactly when the
//!    mathematical result does not fit
//! 2. **Division**: dividing by zero, and `MIN / -1`, always poisons
//! 3. **No panics**: no operator panics for any pair of `u8` or `i16` operands
//! 4. **Stickiness**: a poisoned operand poisons every result
//! 5. **Shifts**: amounts at or beyond the width poison

/// `a + b` in a width that cannot overflow, for comparison.
pub fn wide_sum(a: i32, b: i32) -> i64 {
    i64::from(a) + i64::from(b)
}

/// Whether `v` fits in an `i32`.
pub fn fits_i32(v: i64) -> bool {
    v >= i64::from(i32::MIN) && v <= i64::from(i32::MAX)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;
    use guardrail::safe::{SafeI16, SafeI32, SafeU8};

    /// Poisoned iff the exact sum is out of range; otherwise exact.
    #[kani::proof]
    fn verify_add_poisons_iff_overflow() {
        let a: i32 = kani::any();
        let b: i32 = kani::any();

        let sum = SafeI32::new(a) + SafeI32::new(b);
        let exact = wide_sum(a, b);

        kani::assert(
            sum.is_invalid() == !fits_i32(exact),
            "add must poison exactly on overflow",
        );
        if let Some(v) = sum.checked() {
            kani::assert(i64::from(v) == exact, "valid sum must be exact");
        }
    }

    /// Division by zero poisons and stores zero.
    #[kani::proof]
    fn verify_div_by_zero_poisons() {
        let a: i32 = kani::any();

        let q = SafeI32::new(a) / 0;
        let r = SafeI32::new(a) % 0;

        kani::assert(q.is_invalid(), "x / 0 must poison");
        kani::assert(r.is_invalid(), "x % 0 must poison");
        kani::assert(q.checked().is_none(), "poisoned quotient has no value");
    }

    #[kani::proof]
    fn verify_min_div_neg_one_poisons() {
        kani::assert(
            (SafeI32::new(i32::MIN) / -1).is_invalid(),
            "MIN / -1 must poison",
        );
        kani::assert(
            (SafeI32::new(i32::MIN) % -1).is_invalid(),
            "MIN % -1 must poison",
        );
    }

    /// Every operator terminates normally for every pair of u8 operands.
    #[kani::proof]
    fn verify_u8_ops_no_panic() {
        let a = SafeU8::new(kani::any());
        let b = SafeU8::new(kani::any());

        let _ = a + b;
        let _ = a - b;
        let _ = a * b;
        let _ = a / b;
        let _ = a % b;
        let _ = a << b;
        let _ = a >> b;
        let _ = a & b;
        let _ = a | b;
        let _ = a ^ b;
        let _ = !a;
    }

    #[kani::proof]
    fn verify_i16_ops_no_panic() {
        let a = SafeI16::new(kani::any());
        let b = SafeI16::new(kani::any());

        let _ = a + b;
        let _ = a - b;
        let _ = a * b;
        let _ = a / b;
        let _ = a % b;
        let _ = a << b;
        let _ = a >> b;
        let _ = -a;
    }

    /// A poisoned operand on either side poisons the result.
    #[kani::proof]
    fn verify_poison_is_sticky() {
        let a = SafeI32::new(kani::any());
        let bad = SafeI32::failure();

        kani::assert((a + bad).is_invalid(), "valid + poisoned");
        kani::assert((bad - a).is_invalid(), "poisoned - valid");
        kani::assert((a * bad).is_invalid(), "valid * poisoned");
        kani::assert((bad / a).is_invalid(), "poisoned / valid");
    }

    /// Shift amounts at or past the bit width poison; smaller ones do not.
    #[kani::proof]
    fn verify_shift_amount_bounds() {
        let v = SafeU8::new(kani::any());
        let amount: u8 = kani::any();

        let shifted = v << SafeU8::new(amount);
        kani::assert(
            shifted.is_invalid() == (amount >= 8),
            "shl poisons iff amount >= BITS",
        );
    }
}
