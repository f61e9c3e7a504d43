// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Design-by-contract checks with a replaceable violation handler.
//!
//! Three families, three tiers:
//!
//! | Tier    | Functions                                        | Checked at        |
//! |---------|--------------------------------------------------|-------------------|
//! | default | `expects`, `ensures`, `assert`                   | build level >= 1  |
//! | audit   | `expects_audit`, `ensures_audit`, `assert_audit` | build level == 2  |
//! | axiom   | `expects_axiom`, `ensures_axiom`, `assert_axiom` | never             |
//!
//! A failed, active check builds a [`ViolationInfo`] and hands it to the
//! installed handler. If the handler returns and the crate was not built with
//! `continue-on-violation`, the default handler runs again with the info
//! tagged `[unhandled]`, and that one does not return. A careless handler
//! therefore cannot turn a violation into a silent no-op.
//!
//! # Usage
//!
//! ```
//! use guardrail::contract::{ensures, expects};
//!
//! fn halve(n: u32) -> u32 {
//!     expects(n % 2 == 0);
//!     let ret = n / 2;
//!     ensures(ret * 2 == n);
//!     ret
//! }
//!
//! assert_eq!(halve(10), 5);
//! ```
//!
//! The macro forms (`expects!`, `ensures!`, `contract_assert!`) also record the
//! enclosing function's name in the diagnostic.

mod display;
mod handler;
mod location;
mod violation;

pub use display::{color_mode, format_violation, ColorMode, PREFIX};
pub use handler::{
    default_handler, fatal, replace_violation_handler, report, reset_violation_handler,
    set_violation_handler, violation_handler, HandlerGuard, ViolationHandler,
};
pub use location::{SourceLocation, UNKNOWN_FUNCTION};
pub use violation::{comment, ContractViolation, Family, Tier, ViolationInfo};

use crate::config::ContractConfig;

impl ContractConfig {
    /// Run one check under this configuration.
    ///
    /// `cond` has already been evaluated by the caller; when the tier is
    /// inactive it is simply discarded.
    #[inline]
    pub fn check(&self, tier: Tier, family: Family, cond: bool, location: SourceLocation) {
        if !tier.is_active(self.build_level) || cond {
            return;
        }
        self.violated(ViolationInfo::new(location, tier, family));
    }

    #[cold]
    #[inline(never)]
    fn violated(&self, info: ViolationInfo) {
        let location = info.location();
        if self.continue_on_violation {
            tracing::warn!(
                comment = info.comment(),
                file = location.file(),
                line = location.line(),
                function = location.function(),
                "contract violation"
            );
        } else {
            tracing::error!(
                comment = info.comment(),
                file = location.file(),
                line = location.line(),
                function = location.function(),
                "contract violation"
            );
        }

        handler::dispatch(info);

        // INVARIANT: a returning handler is fatal unless continuing was opted into
        if !self.continue_on_violation {
            fatal(self, &info.unhandled());
        }
    }
}

macro_rules! checks {
    ($($(#[$doc:meta])* $name:ident, $at:ident => $tier:ident, $family:ident;)*) => {
        $(
            $(#[$doc])*
            #[track_caller]
            #[inline]
            pub fn $name(cond: bool) {
                ContractConfig::BUILD.check(
                    Tier::$tier,
                    Family::$family,
                    cond,
                    SourceLocation::caller(),
                );
            }

            #[doc = concat!("[`", stringify!($name), "`] with an explicit location.")]
            #[inline]
            pub fn $at(cond: bool, location: SourceLocation) {
                ContractConfig::BUILD.check(Tier::$tier, Family::$family, cond, location);
            }
        )*
    };
}

checks! {
    /// Precondition, checked at build level 1 and above.
    expects, expects_at => Default, Precondition;
    /// Postcondition, checked at build level 1 and above.
    ensures, ensures_at => Default, Postcondition;
    /// Assertion, checked at build level 1 and above.
    assert, assert_at => Default, Assertion;
    /// Expensive precondition, checked only at build level 2.
    expects_audit, expects_audit_at => Audit, Precondition;
    /// Expensive postcondition, checked only at build level 2.
    ensures_audit, ensures_audit_at => Audit, Postcondition;
    /// Expensive assertion, checked only at build level 2.
    assert_audit, assert_audit_at => Audit, Assertion;
    /// Documented precondition. Never checked.
    expects_axiom, expects_axiom_at => Axiom, Precondition;
    /// Documented postcondition. Never checked.
    ensures_axiom, ensures_axiom_at => Axiom, Postcondition;
    /// Documented assertion. Never checked.
    assert_axiom, assert_axiom_at => Axiom, Assertion;
}

/// Precondition check that also records the enclosing function.
///
/// ```
/// fn take(n: usize, len: usize) {
///     guardrail::expects!(n <= len);
/// }
/// take(1, 2);
/// ```
#[macro_export]
macro_rules! expects {
    ($cond:expr $(,)?) => {
        $crate::contract::expects_at($cond, $crate::here!())
    };
}

/// Postcondition check that also records the enclosing function.
#[macro_export]
macro_rules! ensures {
    ($cond:expr $(,)?) => {
        $crate::contract::ensures_at($cond, $crate::here!())
    };
}

/// Assertion check that also records the enclosing function.
///
/// Named to stay clear of `std::assert!`.
#[macro_export]
macro_rules! contract_assert {
    ($cond:expr $(,)?) => {
        $crate::contract::assert_at($cond, $crate::here!())
    };
}

#[macro_export]
macro_rules! expects_audit {
    ($cond:expr $(,)?) => {
        $crate::contract::expects_audit_at($cond, $crate::here!())
    };
}

#[macro_export]
macro_rules! ensures_audit {
    ($cond:expr $(,)?) => {
        $crate::contract::ensures_audit_at($cond, $crate::here!())
    };
}

#[macro_export]
macro_rules! contract_assert_audit {
    ($cond:expr $(,)?) => {
        $crate::contract::assert_audit_at($cond, $crate::here!())
    };
}

/// Axiom forms type-check and evaluate the condition, then drop it.
#[macro_export]
macro_rules! expects_axiom {
    ($cond:expr $(,)?) => {
        $crate::contract::expects_axiom_at($cond, $crate::here!())
    };
}

#[macro_export]
macro_rules! ensures_axiom {
    ($cond:expr $(,)?) => {
        $crate::contract::ensures_axiom_at($cond, $crate::here!())
    };
}

#[macro_export]
macro_rules! contract_assert_axiom {
    ($cond:expr $(,)?) => {
        $crate::contract::assert_axiom_at($cond, $crate::here!())
    };
}
