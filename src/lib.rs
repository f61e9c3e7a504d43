// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Design-by-contract checks and overflow-safe integers.
//!
//! Two independent halves:
//!
//! - [`contract`]: precondition, postcondition and assertion checks in three
//!   tiers, routed through a replaceable process-wide violation handler.
//! - [`safe`]: [`SafeIntegral<T>`](safe::SafeIntegral), a fixed-width integer
//!   that carries a poison bit instead of overflowing, wrapping or panicking.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │  config.rs  │────▶│  contract/mod.rs │────▶│ contract/handler │
//! │ (BuildLevel,│     │ (check, expects, │     │ (dispatch, fatal,│
//! │  features)  │     │  ensures, macros)│     │  default_handler)│
//! └─────────────┘     └──────────────────┘     └──────────────────┘
//!                              │                        │
//!                              ▼                        ▼
//!                     ┌─────────────────┐     ┌──────────────────┐
//!                     │ location.rs     │     │ display.rs       │
//!                     │ violation.rs    │     │ (stderr format,  │
//!                     │ (ViolationInfo) │     │  colour policy)  │
//!                     └─────────────────┘     └──────────────────┘
//!
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ integer.rs  │────▶│  integral.rs     │────▶│ ops.rs / cmp.rs  │
//! │ (sealed     │     │ (SafeIntegral,   │     │ (operators,      │
//! │  Integer)   │     │  poison bit)     │     │  comparisons)    │
//! └─────────────┘     └──────────────────┘     └──────────────────┘
//! ```
//!
//! # Build configuration
//!
//! | Switch                         | Effect                                             |
//! |--------------------------------|----------------------------------------------------|
//! | `GUARDRAIL_BUILD_LEVEL=0\|1\|2`| Overrides the level chosen by features             |
//! | feature `contracts` (default)  | Level 1: default-tier checks active                |
//! | feature `audit`                | Level 2: audit-tier checks active as well          |
//! | feature `continue-on-violation`| Execution resumes after the handler returns        |
//! | feature `autosar-compliant`    | Terminate by unwinding with a [`ContractViolation`]|
//! | feature `macros` (default)     | `#[expects]` / `#[ensures]` attributes in [`attr`] |
//! | feature `serde` (default)      | `Serialize`/`Deserialize` for `SafeIntegral`       |
//!
//! Without `autosar-compliant`, a fatal violation aborts the process.
//!
//! # Usage
//!
//! ```
//! use guardrail::safe::SafeU32;
//!
//! fn area(w: u32, h: u32) -> Option<u32> {
//!     guardrail::expects!(w > 0 && h > 0);
//!     let a = SafeU32::new(w) * h;
//!     a.checked()
//! }
//!
//! assert_eq!(area(3, 4), Some(12));
//! assert_eq!(area(u32::MAX, 2), None);
//! ```

pub mod config;
pub mod contract;
pub mod safe;
pub mod testing;

pub use config::{BuildLevel, ContractConfig};
pub use contract::{
    set_violation_handler, ContractViolation, Family, SourceLocation, Tier, ViolationInfo,
};
pub use safe::SafeIntegral;

/// Attribute forms of the contract checks.
///
/// They live in their own module because `expects!` and `ensures!` already
/// occupy the crate root's macro namespace.
///
/// ```
/// use guardrail::attr::{ensures, expects};
///
/// #[expects(divisor != 0)]
/// #[ensures(ret <= dividend)]
/// fn quotient(dividend: u32, divisor: u32) -> u32 {
///     dividend / divisor
/// }
///
/// assert_eq!(quotient(9, 3), 3);
/// ```
#[cfg(feature = "macros")]
pub mod attr {
    pub use guardrail_macros::{ensures, expects};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safe::{SafeI64, SafeU8};
    use proptest::prelude::*;

    #[test]
    fn root_reexports_are_usable() {
        let x: SafeIntegral<u8> = SafeU8::new(1);
        assert!(x.is_valid());
        assert_eq!(ContractConfig::default(), ContractConfig::BUILD);
        assert_eq!(BuildLevel::BUILD, ContractConfig::BUILD.build_level);
    }

    proptest! {
        #[test]
        fn prop_add_matches_wide_oracle(a: i64, b: i64) {
            let sum = SafeI64::new(a) + b;
            let wide = i128::from(a) + i128::from(b);
            prop_assert_eq!(sum.is_invalid(), i64::try_from(wide).is_err());
            if let Some(v) = sum.checked() {
                prop_assert_eq!(i128::from(v), wide);
            }
        }

        #[test]
        fn prop_poison_is_sticky(a: i64, b: i64) {
            let poisoned = SafeI64::failure();
            prop_assert!((poisoned + a).is_invalid());
            prop_assert!((poisoned * b - a).is_invalid());
            prop_assert!((SafeI64::new(a) / poisoned).is_invalid());
        }
    }
}
