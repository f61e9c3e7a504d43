//! Build script for guardrail crate.
//!
//! Resolves the contract build level once, at compile time, and hands it to
//! the crate as `GUARDRAIL_EFFECTIVE_BUILD_LEVEL`:
//! 1. `GUARDRAIL_BUILD_LEVEL` env var (`0`, `1` or `2`) wins when set
//! 2. otherwise the `audit` feature means 2, `contracts` means 1
//! 3. with neither feature, checks are compiled out (0)

use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=GUARDRAIL_BUILD_LEVEL");
    println!("cargo:rerun-if-changed=build.rs");

    let level = match env::var("GUARDRAIL_BUILD_LEVEL") {
        Ok(raw) => parse_level(raw.trim()),
        Err(_) => level_from_features(),
    };

    // Tell rustc which level the crate was built with
    println!("cargo:rustc-env=GUARDRAIL_EFFECTIVE_BUILD_LEVEL={level}");
}

fn parse_level(raw: &str) -> u8 {
    match raw {
        "0" => 0,
        "1" => 1,
        "2" => 2,
        other => panic!(
            "GUARDRAIL_BUILD_LEVEL must be 0 (disabled), 1 (default) or 2 (audit), got {other:?}"
        ),
    }
}

fn level_from_features() -> u8 {
    if env::var("CARGO_FEATURE_AUDIT").is_ok() {
        2
    } else if env::var("CARGO_FEATURE_CONTRACTS").is_ok() {
        1
    } else {
        0
    }
}
