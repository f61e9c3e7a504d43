// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compile-time contract configuration.
//!
//! Three switches decide what a failed check does, and all three are fixed when
//! the crate is compiled:
//!
//! | Switch                  | Source                                        |
//! |-------------------------|-----------------------------------------------|
//! | build level (0, 1, 2)   | `GUARDRAIL_BUILD_LEVEL` env, else `audit` / `contracts` features |
//! | continue on violation   | `continue-on-violation` feature               |
//! | AUTOSAR-compliant       | `autosar-compliant` feature                   |
//!
//! [`ContractConfig::BUILD`] is the resolved configuration. The checks read it
//! through ordinary `if` branches, so inactive tiers fold away in optimised
//! builds. Tests construct their own `ContractConfig` values to exercise every
//! level from a single binary.

use std::fmt;

/// Which contract tiers are checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuildLevel {
    /// No runtime checks. Conditions are evaluated and discarded.
    Disabled = 0,
    /// `expects`, `ensures` and `assert` are checked.
    Default = 1,
    /// Default checks plus their `_audit` counterparts.
    Audit = 2,
}

impl BuildLevel {
    /// Level selected for this build by `build.rs`.
    pub const BUILD: BuildLevel = BuildLevel::parse(env!("GUARDRAIL_EFFECTIVE_BUILD_LEVEL"));

    /// Every level, lowest first.
    pub const ALL: [BuildLevel; 3] = [BuildLevel::Disabled, BuildLevel::Default, BuildLevel::Audit];

    /// Convert a raw level. Anything above 2 is treated as `Audit`.
    pub const fn from_u8(raw: u8) -> BuildLevel {
        match raw {
            0 => BuildLevel::Disabled,
            1 => BuildLevel::Default,
            _ => BuildLevel::Audit,
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// True when default-tier checks run (level >= 1).
    pub const fn checks_default(self) -> bool {
        self.as_u8() >= 1
    }

    /// True when audit-tier checks run (level == 2).
    pub const fn checks_audit(self) -> bool {
        self.as_u8() == 2
    }

    // build.rs only ever emits a single digit
    const fn parse(raw: &str) -> BuildLevel {
        let bytes = raw.as_bytes();
        if bytes.len() != 1 {
            return BuildLevel::Default;
        }
        match bytes[0] {
            b'0' => BuildLevel::Disabled,
            b'2' => BuildLevel::Audit,
            _ => BuildLevel::Default,
        }
    }
}

impl fmt::Display for BuildLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildLevel::Disabled => "disabled",
            BuildLevel::Default => "default",
            BuildLevel::Audit => "audit",
        };
        write!(f, "{} ({})", name, self.as_u8())
    }
}

/// The full set of switches a contract check consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractConfig {
    pub build_level: BuildLevel,
    pub continue_on_violation: bool,
    pub autosar_compliant: bool,
}

impl ContractConfig {
    /// Configuration this crate was compiled with.
    pub const BUILD: ContractConfig = ContractConfig {
        build_level: BuildLevel::BUILD,
        continue_on_violation: cfg!(feature = "continue-on-violation"),
        autosar_compliant: cfg!(feature = "autosar-compliant"),
    };

    pub const fn new(build_level: BuildLevel) -> ContractConfig {
        ContractConfig {
            build_level,
            continue_on_violation: false,
            autosar_compliant: false,
        }
    }

    pub const fn with_build_level(mut self, build_level: BuildLevel) -> ContractConfig {
        self.build_level = build_level;
        self
    }

    pub const fn with_continue_on_violation(mut self, enabled: bool) -> ContractConfig {
        self.continue_on_violation = enabled;
        self
    }

    pub const fn with_autosar_compliant(mut self, enabled: bool) -> ContractConfig {
        self.autosar_compliant = enabled;
        self
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        ContractConfig::BUILD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds() {
        assert!(!BuildLevel::Disabled.checks_default());
        assert!(!BuildLevel::Disabled.checks_audit());
        assert!(BuildLevel::Default.checks_default());
        assert!(!BuildLevel::Default.checks_audit());
        assert!(BuildLevel::Audit.checks_default());
        assert!(BuildLevel::Audit.checks_audit());
    }

    #[test]
    fn from_u8_clamps_high_values() {
        assert_eq!(BuildLevel::from_u8(0), BuildLevel::Disabled);
        assert_eq!(BuildLevel::from_u8(1), BuildLevel::Default);
        assert_eq!(BuildLevel::from_u8(2), BuildLevel::Audit);
        assert_eq!(BuildLevel::from_u8(200), BuildLevel::Audit);
    }

    #[test]
    fn build_config_tracks_features() {
        let config = ContractConfig::BUILD;
        assert_eq!(config.continue_on_violation, cfg!(feature = "continue-on-violation"));
        assert_eq!(config.autosar_compliant, cfg!(feature = "autosar-compliant"));
        assert_eq!(ContractConfig::default(), config);
    }

    #[test]
    fn builders_override_single_switch() {
        let config = ContractConfig::new(BuildLevel::Disabled)
            .with_build_level(BuildLevel::Audit)
            .with_autosar_compliant(true);
        assert_eq!(config.build_level, BuildLevel::Audit);
        assert!(config.autosar_compliant);
        assert!(!config.continue_on_violation);
    }

    #[test]
    fn display_names_level() {
        assert_eq!(BuildLevel::Audit.to_string(), "audit (2)");
    }
}
