// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What went wrong, and where.
//!
//! A [`ViolationInfo`] is built at the moment a check fails, handed to the
//! installed handler by value, and dropped when the handler returns. It is
//! `Copy` and has no setters: the only derived value is the `[unhandled]`
//! tag, which produces a new info rather than editing the old one.

use std::fmt;

use thiserror::Error;

use super::location::SourceLocation;
use crate::config::BuildLevel;

/// Which kind of contract failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Checked on entry (`expects`).
    Precondition,
    /// Checked on exit (`ensures`).
    Postcondition,
    /// Checked anywhere (`assert`).
    Assertion,
}

/// How expensive a check is, and therefore when it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Default,
    Audit,
    /// Documentation only. Never checked.
    Axiom,
}

impl Tier {
    /// INVARIANT: default tier at level >= 1, audit only at level 2, axiom never.
    pub const fn is_active(self, level: BuildLevel) -> bool {
        match self {
            Tier::Default => level.checks_default(),
            Tier::Audit => level.checks_audit(),
            Tier::Axiom => false,
        }
    }
}

/// Classification comment for a failed check.
///
/// These strings are part of the diagnostic format; log scanners match on them.
pub const fn comment(tier: Tier, family: Family) -> &'static str {
    match (tier, family) {
        (Tier::Default, Family::Precondition) => "default precondition",
        (Tier::Default, Family::Postcondition) => "default postcondition",
        (Tier::Default, Family::Assertion) => "default assertion",
        (Tier::Audit, Family::Precondition) => "audit precondition",
        (Tier::Audit, Family::Postcondition) => "audit postcondition",
        (Tier::Audit, Family::Assertion) => "audit assertion",
        (Tier::Axiom, Family::Precondition) => "axiom precondition",
        (Tier::Axiom, Family::Postcondition) => "axiom postcondition",
        (Tier::Axiom, Family::Assertion) => "axiom assertion",
    }
}

/// Record of a single contract failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViolationInfo {
    location: SourceLocation,
    tier: Tier,
    family: Family,
    unhandled: bool,
}

impl ViolationInfo {
    pub const fn new(location: SourceLocation, tier: Tier, family: Family) -> ViolationInfo {
        ViolationInfo {
            location,
            tier,
            family,
            unhandled: false,
        }
    }

    pub const fn location(&self) -> SourceLocation {
        self.location
    }

    pub const fn tier(&self) -> Tier {
        self.tier
    }

    pub const fn family(&self) -> Family {
        self.family
    }

    /// The bare classification, e.g. `"audit postcondition"`.
    pub const fn comment(&self) -> &'static str {
        comment(self.tier, self.family)
    }

    /// True when a user handler returned without terminating.
    pub const fn is_unhandled(&self) -> bool {
        self.unhandled
    }

    /// Copy of this info tagged `[unhandled]`.
    pub const fn unhandled(self) -> ViolationInfo {
        ViolationInfo {
            unhandled: true,
            ..self
        }
    }
}

impl fmt::Display for ViolationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unhandled {
            write!(f, "[unhandled] {}", self.comment())
        } else {
            f.write_str(self.comment())
        }
    }
}

/// Propagating failure raised by the default handler in AUTOSAR-compliant mode.
///
/// It travels as a panic payload (`std::panic::panic_any`), so a boundary can
/// stop it with `catch_unwind` and `downcast_ref::<ContractViolation>()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ContractViolation {
    message: String,
    comment: String,
    file: &'static str,
    line: u32,
}

impl ContractViolation {
    pub fn new(info: &ViolationInfo, message: String) -> ContractViolation {
        ContractViolation {
            message,
            comment: info.to_string(),
            file: info.location().file(),
            line: info.location().line(),
        }
    }

    /// Full diagnostic line, same text the default handler prints.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Classification, including an `[unhandled]` tag if present.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(tier: Tier, family: Family) -> ViolationInfo {
        ViolationInfo::new(SourceLocation::new("src/demo.rs", "demo", 10, 1), tier, family)
    }

    #[test]
    fn comments_name_tier_and_family() {
        assert_eq!(
            info(Tier::Default, Family::Precondition).comment(),
            "default precondition"
        );
        assert_eq!(
            info(Tier::Default, Family::Postcondition).comment(),
            "default postcondition"
        );
        assert_eq!(info(Tier::Default, Family::Assertion).comment(), "default assertion");
        assert_eq!(info(Tier::Audit, Family::Precondition).comment(), "audit precondition");
        assert_eq!(
            info(Tier::Audit, Family::Postcondition).comment(),
            "audit postcondition"
        );
        assert_eq!(info(Tier::Audit, Family::Assertion).comment(), "audit assertion");
    }

    #[test]
    fn unhandled_tag_is_a_copy() {
        let original = info(Tier::Default, Family::Assertion);
        let tagged = original.unhandled();

        assert!(!original.is_unhandled());
        assert!(tagged.is_unhandled());
        assert_eq!(original.to_string(), "default assertion");
        assert_eq!(tagged.to_string(), "[unhandled] default assertion");
        assert_eq!(tagged.location(), original.location());
    }

    #[test]
    fn tier_activation_by_level() {
        for level in BuildLevel::ALL {
            assert_eq!(Tier::Default.is_active(level), level >= BuildLevel::Default);
            assert_eq!(Tier::Audit.is_active(level), level == BuildLevel::Audit);
            assert!(!Tier::Axiom.is_active(level));
        }
    }

    #[test]
    fn contract_violation_carries_location() {
        let info = info(Tier::Audit, Family::Precondition);
        let error = ContractViolation::new(&info, "boom".to_string());
        assert_eq!(error.to_string(), "boom");
        assert_eq!(error.comment(), "audit precondition");
        assert_eq!(error.file(), "src/demo.rs");
        assert_eq!(error.line(), 10);
    }
}
