// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Attribute forms of guardrail's contract checks.
//!
//! `#[expects(cond)]` checks a precondition on entry. `#[ensures(cond)]` runs
//! the body, binds its result to `ret`, and checks a postcondition that may
//! name `ret`. Both take an optional leading tier keyword:
//!
//! ```ignore
//! use guardrail::attr::{ensures, expects};
//!
//! #[expects(!items.is_empty())]
//! #[ensures(audit, items.iter().all(|x| *x <= ret))]
//! fn largest(items: &[u32]) -> u32 {
//!     items.iter().copied().max().unwrap_or(0)
//! }
//! ```
//!
//! Expansions call into `::guardrail::contract`, so the `guardrail` crate must
//! be a dependency under that name.

use proc_macro::TokenStream;

mod contract;

/// Precondition checked at function entry.
///
/// `#[expects(cond)]`, `#[expects(audit, cond)]` or `#[expects(axiom, cond)]`.
#[proc_macro_attribute]
pub fn expects(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract::process(contract::Family::Precondition, attr.into(), item.into()).into()
}

/// Postcondition checked on the function's result, bound as `ret`.
///
/// `#[ensures(cond)]`, `#[ensures(audit, cond)]` or `#[ensures(axiom, cond)]`.
#[proc_macro_attribute]
pub fn ensures(attr: TokenStream, item: TokenStream) -> TokenStream {
    contract::process(contract::Family::Postcondition, attr.into(), item.into()).into()
}
