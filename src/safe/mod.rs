// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Overflow-safe integers.
//!
//! [`SafeIntegral<T>`] wraps a primitive and carries a poison bit instead of
//! panicking or wrapping. Arithmetic never fails loudly: the caller checks
//! [`is_invalid`](SafeIntegral::is_invalid) once, at the end of a computation,
//! and everything in between propagates the poison.
//!
//! | Operation              | Poisons when                                        |
//! |------------------------|-----------------------------------------------------|
//! | `+ - *`                | the checked primitive overflows                     |
//! | `/ %`                  | divisor is zero, or signed `MIN / -1`, `MIN % -1`   |
//! | `<< >>`                | amount negative or `>= BITS`                        |
//! | unary `-`              | `-MIN`                                              |
//! | `& \| ^ !`             | never (unsigned only, poison still propagates)      |
//! | comparisons            | never (result is a plain `bool`)                    |
//!
//! Raw primitives of the same width may appear on either side of an operator
//! or comparison: `x + 1`, `1 + x` and `5 < x` all work.
//!
//! ```
//! use guardrail::safe::{to_u8, SafeU8};
//!
//! let mut n: SafeU8 = to_u8(250);
//! n += 5;
//! assert_eq!(n.checked(), Some(255));
//! n.inc();
//! assert!(n.is_invalid());
//! ```

mod cmp;
mod integer;
mod integral;
mod ops;
#[cfg(feature = "serde")]
mod serde;

pub use integer::{Integer, SignedInteger, UnsignedInteger};
pub use integral::SafeIntegral;

pub type SafeU8 = SafeIntegral<u8>;
pub type SafeU16 = SafeIntegral<u16>;
pub type SafeU32 = SafeIntegral<u32>;
pub type SafeU64 = SafeIntegral<u64>;
/// Widest unsigned integer.
pub type SafeUmx = SafeIntegral<u128>;
pub type SafeUsize = SafeIntegral<usize>;

pub type SafeI8 = SafeIntegral<i8>;
pub type SafeI16 = SafeIntegral<i16>;
pub type SafeI32 = SafeIntegral<i32>;
pub type SafeI64 = SafeIntegral<i64>;
/// Widest signed integer.
pub type SafeImx = SafeIntegral<i128>;
pub type SafeIsize = SafeIntegral<isize>;

macro_rules! literal_fns {
    ($($name:ident => $t:ty),* $(,)?) => {
        $(
            #[doc = concat!("A valid `SafeIntegral<", stringify!($t), ">` holding `v`.")]
            #[inline]
            pub const fn $name(v: $t) -> SafeIntegral<$t> {
                SafeIntegral::new(v)
            }
        )*
    };
}

literal_fns! {
    to_u8 => u8,
    to_u16 => u16,
    to_u32 => u32,
    to_u64 => u64,
    to_umx => u128,
    to_usize => usize,
    to_i8 => i8,
    to_i16 => i16,
    to_i32 => i32,
    to_i64 => i64,
    to_imx => i128,
    to_isize => isize,
}
