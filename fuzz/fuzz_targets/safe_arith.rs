// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for SafeIntegral arithmetic against an i128 oracle.
//!
//! Every i64 result is computed again in i128, where it cannot overflow. The
//! safe value must be poisoned exactly when the oracle falls outside i64, and
//! must equal the oracle otherwise.

#![no_main]

use arbitrary::Arbitrary;
use guardrail::safe::SafeI64;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

#[derive(Debug, Arbitrary)]
struct ArithInput {
    a: i64,
    b: i64,
    op: Op,
}

fuzz_target!(|input: ArithInput| {
    let (a, b) = (SafeI64::new(input.a), SafeI64::new(input.b));
    let (wa, wb) = (i128::from(input.a), i128::from(input.b));

    let (result, oracle) = match input.op {
        Op::Add => (a + b, Some(wa + wb)),
        Op::Sub => (a - b, Some(wa - wb)),
        Op::Mul => (a * b, Some(wa * wb)),
        Op::Div => (a / b, (wb != 0).then(|| wa / wb)),
        Op::Rem => (a % b, (wb != 0).then(|| wa % wb)),
    };

    // i64::MIN % -1 is 0 mathematically, but the primitive rejects it
    let rem_min_edge = matches!(input.op, Op::Rem) && input.a == i64::MIN && input.b == -1;
    let expected = oracle.and_then(|v| i64::try_from(v).ok()).filter(|_| !rem_min_edge);

    assert_eq!(
        result.checked(),
        expected,
        "{:?}: {} op {} gave {:?}",
        input.op,
        input.a,
        input.b,
        result
    );
});
