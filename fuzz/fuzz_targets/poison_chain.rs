// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for poison propagation through long operation chains.
//!
//! Folds a sequence of arbitrary steps over a u8 accumulator. Once any step
//! poisons it, no later step may clear it, and a poisoned value always reads
//! as zero.

#![no_main]

use arbitrary::Arbitrary;
use guardrail::safe::SafeU8;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Step {
    Add(u8),
    Sub(u8),
    Mul(u8),
    Div(u8),
    And(u8),
    Xor(u8),
    Shl(u8),
    Not,
    Inc,
    Dec,
}

fuzz_target!(|steps: Vec<Step>| {
    let mut acc = SafeU8::new(1);
    let mut was_poisoned = false;

    for step in steps.iter().take(256) {
        acc = match *step {
            Step::Add(v) => acc + v,
            Step::Sub(v) => acc - v,
            Step::Mul(v) => acc * v,
            Step::Div(v) => acc / v,
            Step::And(v) => acc & v,
            Step::Xor(v) => acc ^ v,
            Step::Shl(v) => acc << SafeU8::new(v),
            Step::Not => !acc,
            Step::Inc => *acc.inc(),
            Step::Dec => *acc.dec(),
        };

        if was_poisoned {
            assert!(acc.is_invalid(), "poison cleared by {:?}", step);
        }
        if acc.is_invalid() {
            assert_eq!(acc.checked(), None);
            assert!(acc.is_zero_or_invalid());
            was_poisoned = true;
        }
    }
});
