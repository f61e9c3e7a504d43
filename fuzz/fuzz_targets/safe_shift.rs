// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for shifts with arbitrary signed amounts.
//!
//! A shift is poisoned exactly when the amount is negative or not below the
//! bit width. Otherwise it matches the native operator: bits shifted out on
//! the left are discarded, and right shifts of signed values sign-extend.

#![no_main]

use arbitrary::Arbitrary;
use guardrail::safe::{SafeI32, SafeI64, SafeU16};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ShiftInput {
    signed: i32,
    unsigned: u16,
    amount: i64,
}

fuzz_target!(|input: ShiftInput| {
    let amount = SafeI64::new(input.amount);
    let in_range_32 = (0..32).contains(&input.amount);
    let in_range_16 = (0..16).contains(&input.amount);

    let shl = SafeI32::new(input.signed) << amount;
    let shr = SafeI32::new(input.signed) >> amount;
    let ushr = SafeU16::new(input.unsigned) >> amount;

    assert_eq!(shl.is_invalid(), !in_range_32);
    assert_eq!(shr.is_invalid(), !in_range_32);
    assert_eq!(ushr.is_invalid(), !in_range_16);

    if in_range_32 {
        let n = input.amount as u32;
        assert_eq!(shl.checked(), Some(input.signed << n));
        assert_eq!(shr.checked(), Some(input.signed >> n));
    }
    if in_range_16 {
        assert_eq!(ushr.checked(), Some(input.unsigned >> input.amount as u32));
    }
});
