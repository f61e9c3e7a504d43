// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where a contract was checked.
//!
//! Two ways to capture a location. The function-style checks are
//! `#[track_caller]`, so [`SourceLocation::caller`] picks up the file and line
//! of whoever called `expects(..)` without any help. That path cannot see the
//! enclosing function's name. The [`here!`](crate::here) macro can, so the
//! macro-style checks (`expects!`, `ensures!`, ...) report it as well.

use std::fmt;

/// Placeholder used when the enclosing function could not be captured.
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// File, function and line of a contract check. All fields point at static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    function: &'static str,
    line: u32,
    column: u32,
}

impl SourceLocation {
    pub const fn new(
        file: &'static str,
        function: &'static str,
        line: u32,
        column: u32,
    ) -> SourceLocation {
        SourceLocation {
            file,
            function,
            line,
            column,
        }
    }

    /// Location of the caller, as seen through `#[track_caller]` frames.
    #[track_caller]
    #[inline]
    pub fn caller() -> SourceLocation {
        let location = std::panic::Location::caller();
        SourceLocation {
            file: location.file(),
            function: UNKNOWN_FUNCTION,
            line: location.line(),
            column: location.column(),
        }
    }

    pub const fn file(&self) -> &'static str {
        self.file
    }

    pub const fn function(&self) -> &'static str {
        self.function
    }

    pub const fn line(&self) -> u32 {
        self.line
    }

    pub const fn column(&self) -> u32 {
        self.column
    }

    /// False for locations captured through `#[track_caller]`.
    pub fn has_function(&self) -> bool {
        !self.function.is_empty() && self.function != UNKNOWN_FUNCTION
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if self.has_function() {
            write!(f, " in {}", self.function)?;
        }
        Ok(())
    }
}

/// Path of the enclosing function, e.g. `my_crate::parser::read_header`.
///
/// Works by naming a nested item and trimming its suffix off the type name.
#[doc(hidden)]
#[macro_export]
macro_rules! function_path {
    () => {{
        fn __guardrail_marker() {}
        fn __guardrail_type_name<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __guardrail_type_name(__guardrail_marker);
        let name = name.strip_suffix("::__guardrail_marker").unwrap_or(name);
        // Closures add `::{{closure}}` segments that carry no information
        let mut name = name;
        while let Some(stripped) = name.strip_suffix("::{{closure}}") {
            name = stripped;
        }
        name
    }};
}

/// Capture the current [`SourceLocation`], including the enclosing function.
///
/// ```
/// let here = guardrail::here!();
/// assert_eq!(here.line(), line!() - 1);
/// assert!(here.file().ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! here {
    () => {
        $crate::contract::SourceLocation::new(
            ::core::file!(),
            $crate::function_path!(),
            ::core::line!(),
            ::core::column!(),
        )
    };
}
