//! Integration tests for the `#[expects]` / `#[ensures]` attributes.

#![cfg(feature = "macros")]

mod common;

use common::catch_violation;
use guardrail::attr::{ensures, expects};
use guardrail::config::ContractConfig;
use guardrail::contract::Family;
use guardrail::safe::SafeU32;

fn default_active() -> bool {
    ContractConfig::BUILD.build_level.checks_default()
}

fn audit_active() -> bool {
    ContractConfig::BUILD.build_level.checks_audit()
}

// ============================================================================
// FIXTURES
// ============================================================================

#[expects(divisor != 0)]
#[ensures(ret <= dividend)]
fn quotient(dividend: u32, divisor: u32) -> u32 {
    dividend / divisor.max(1)
}

#[ensures(ret % 2 == 0)]
fn wrong_double(n: u32) -> u32 {
    if n == 3 {
        return 7;
    }
    n * 2
}

#[expects(audit, items.windows(2).all(|w| w[0] <= w[1]))]
fn first_sorted(items: &[u32]) -> Option<u32> {
    items.first().copied()
}

#[expects(axiom, false)]
fn axiom_only() -> u8 {
    1
}

#[ensures(ret.is_ok())]
fn parse_len(text: &str) -> Result<usize, std::num::ParseIntError> {
    let n: usize = text.parse()?;
    Ok(n)
}

#[ensures(ret.is_valid())]
fn area(w: u32, h: u32) -> SafeU32 {
    SafeU32::new(w) * h
}

struct Counter {
    value: u32,
}

impl Counter {
    #[expects(self.value < 10)]
    #[ensures(self.value == ret)]
    fn bump(&mut self) -> u32 {
        self.value += 1;
        self.value
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
fn test_passing_contracts_are_transparent() {
    assert!(catch_violation(|| assert_eq!(quotient(9, 3), 3)).is_none());
    assert!(catch_violation(|| assert_eq!(wrong_double(4), 8)).is_none());
    assert!(catch_violation(|| assert_eq!(area(3, 4).checked(), Some(12))).is_none());
}

#[test]
fn test_expects_fires_on_entry() {
    let caught = catch_violation(|| {
        quotient(1, 0);
    });
    assert_eq!(caught.is_some(), default_active());

    if let Some(info) = caught {
        assert_eq!(info.family(), Family::Precondition);
        assert_eq!(info.comment(), "default precondition");
        assert!(info.location().function().ends_with("quotient"));
        assert!(info.location().file().ends_with("macros.rs"));
    }
}

#[test]
fn test_ensures_sees_early_return() {
    let caught = catch_violation(|| {
        wrong_double(3);
    });
    assert_eq!(caught.is_some(), default_active());

    if let Some(info) = caught {
        assert_eq!(info.family(), Family::Postcondition);
        assert!(info.location().function().ends_with("wrong_double"));
    }
}

#[test]
fn test_ensures_with_question_mark_body() {
    assert!(catch_violation(|| assert_eq!(parse_len("12"), Ok(12))).is_none());

    let caught = catch_violation(|| {
        let _ = parse_len("twelve");
    });
    assert_eq!(caught.is_some(), default_active());
}

#[test]
fn test_ensures_on_safe_integral_result() {
    let caught = catch_violation(|| {
        area(u32::MAX, 2);
    });
    assert_eq!(caught.is_some(), default_active());
}

#[test]
fn test_audit_attribute_follows_level() {
    assert!(catch_violation(|| assert_eq!(first_sorted(&[1, 2, 3]), Some(1))).is_none());

    let caught = catch_violation(|| {
        first_sorted(&[3, 1]);
    });
    assert_eq!(caught.is_some(), audit_active());
    if let Some(info) = caught {
        assert_eq!(info.comment(), "audit precondition");
    }
}

#[test]
fn test_axiom_attribute_never_fires() {
    assert!(catch_violation(|| assert_eq!(axiom_only(), 1)).is_none());
}

#[test]
fn test_method_contracts_see_self() {
    let mut counter = Counter { value: 0 };
    assert!(catch_violation(|| assert_eq!(counter.bump(), 1)).is_none());

    let mut full = Counter { value: 10 };
    let caught = catch_violation(|| {
        full.bump();
    });
    assert_eq!(caught.is_some(), default_active());
}
