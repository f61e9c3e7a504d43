// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The process-wide violation handler.
//!
//! Exactly one handler is active at a time. It starts out as
//! [`default_handler`] and can be overwritten at any point with
//! [`set_violation_handler`]. There is no stack and no composition: a new
//! handler simply replaces the old one.
//!
//! # Threads
//!
//! Install the handler once, before spawning threads that run checks. The slot
//! sits behind a lock only so the global is sound without `unsafe`; swapping
//! handlers while other threads are failing checks is still unsupported, and
//! which handler such a thread sees is unspecified.

use parking_lot::RwLock;

use super::display::{color_mode, format_violation, ColorMode};
use super::violation::{ContractViolation, ViolationInfo};
use crate::config::ContractConfig;

/// Signature of a violation handler.
///
/// A handler may return, panic, or abort. If it returns and the crate was not
/// built with `continue-on-violation`, the default handler runs again with the
/// info tagged `[unhandled]` and terminates.
pub type ViolationHandler = fn(ViolationInfo);

static HANDLER: RwLock<ViolationHandler> =
    parking_lot::const_rwlock(default_handler as ViolationHandler);

/// Install `handler` for every subsequent violation. No validation is done.
pub fn set_violation_handler(handler: ViolationHandler) {
    *HANDLER.write() = handler;
}

/// The currently installed handler.
pub fn violation_handler() -> ViolationHandler {
    *HANDLER.read()
}

/// Put [`default_handler`] back.
pub fn reset_violation_handler() {
    set_violation_handler(default_handler);
}

/// Install `handler` until the returned guard is dropped.
///
/// The previous handler comes back on drop, including when the scope is left
/// by unwinding. Handy in tests that expect a violation to panic.
pub fn replace_violation_handler(handler: ViolationHandler) -> HandlerGuard {
    let previous = {
        let mut slot = HANDLER.write();
        std::mem::replace(&mut *slot, handler)
    };
    HandlerGuard { previous }
}

/// Restores the previously installed handler when dropped.
#[must_use = "the previous handler is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct HandlerGuard {
    previous: ViolationHandler,
}

impl HandlerGuard {
    /// Handler that will be reinstalled.
    pub fn previous(&self) -> ViolationHandler {
        self.previous
    }
}

impl Drop for HandlerGuard {
    fn drop(&mut self) {
        set_violation_handler(self.previous);
    }
}

/// Call the installed handler. The lock is released before the call, so the
/// handler is free to install another one.
pub(crate) fn dispatch(info: ViolationInfo) {
    let handler = violation_handler();
    handler(info);
}

/// Handler installed at startup.
///
/// Prints the diagnostic to stderr. Unless the crate was built with
/// `continue-on-violation` it then terminates: `abort()` by default, or a
/// [`ContractViolation`] panic in AUTOSAR-compliant builds.
pub fn default_handler(info: ViolationInfo) {
    report(&info);
    if !ContractConfig::BUILD.continue_on_violation {
        terminate(&ContractConfig::BUILD, &info);
    }
}

/// Print the diagnostic for `info` to stderr.
pub fn report(info: &ViolationInfo) {
    eprintln!("{}", format_violation(info, color_mode()));
}

/// Print and terminate. Never returns.
pub fn fatal(config: &ContractConfig, info: &ViolationInfo) -> ! {
    report(info);
    terminate(config, info)
}

/// The only place this crate ends the process or raises a failure.
fn terminate(config: &ContractConfig, info: &ViolationInfo) -> ! {
    if config.autosar_compliant {
        let message = format_violation(info, ColorMode::Plain);
        std::panic::panic_any(ContractViolation::new(info, message));
    }
    std::process::abort()
}
