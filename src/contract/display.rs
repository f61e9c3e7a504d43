// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic text for contract violations.
//!
//! The line always reads comment, then file, then line, so certification
//! tooling can grep for it:
//!
//! ```text
//! contract violation: default precondition [src/parser.rs:88] in parser::read
//! ```
//!
//! Colour is decoration only. The escape codes wrap the same text, so the
//! order never changes.
//!
//! # Colour detection order
//!
//! 1. `GUARDRAIL_COLOR` env var ("always" or "never")
//! 2. `NO_COLOR` set to anything non-empty disables colour
//! 3. colour iff stderr is a TTY

use std::sync::OnceLock;

use super::violation::ViolationInfo;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
}

use colors::{BOLD, DIM, RED, RESET, YELLOW};

/// Fixed prefix of every violation line.
pub const PREFIX: &str = "contract violation";

/// Whether ANSI escapes are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Plain,
    Ansi,
}

/// Cached colour detection result
static COLOR_MODE: OnceLock<ColorMode> = OnceLock::new();

fn detect_color_mode() -> ColorMode {
    // 1. Explicit override
    if let Ok(value) = std::env::var("GUARDRAIL_COLOR") {
        match value.to_lowercase().as_str() {
            "always" | "ansi" | "1" => return ColorMode::Ansi,
            "never" | "plain" | "0" => return ColorMode::Plain,
            _ => {}
        }
    }

    // 2. https://no-color.org
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return ColorMode::Plain;
    }

    // 3. Only colour a terminal
    if atty::is(atty::Stream::Stderr) {
        ColorMode::Ansi
    } else {
        ColorMode::Plain
    }
}

/// Colour mode for stderr diagnostics (cached)
pub fn color_mode() -> ColorMode {
    *COLOR_MODE.get_or_init(detect_color_mode)
}

/// Render the diagnostic for `info`.
pub fn format_violation(info: &ViolationInfo, mode: ColorMode) -> String {
    let location = info.location();
    let function = if location.has_function() {
        format!(" in {}", location.function())
    } else {
        String::new()
    };

    match mode {
        ColorMode::Plain => format!(
            "{}: {} [{}:{}]{}",
            PREFIX,
            info,
            location.file(),
            location.line(),
            function
        ),
        ColorMode::Ansi => {
            // Unhandled violations stand out from ones a handler already saw
            let accent = if info.is_unhandled() { YELLOW } else { RED };
            format!(
                "{BOLD}{accent}{}{RESET}: {BOLD}{}{RESET} {DIM}[{}:{}]{}{RESET}",
                PREFIX,
                info,
                location.file(),
                location.line(),
                function
            )
        }
    }
}
