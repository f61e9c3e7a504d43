//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! The violation handler is process-wide, and the test harness runs tests on
//! several threads, so anything that swaps handlers goes through [`lock`].

#![doc(hidden)]

use std::panic::{self, AssertUnwindSafe};

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

use crate::contract::{replace_violation_handler, ViolationInfo};

static HANDLER_LOCK: ReentrantMutex<()> = parking_lot::const_reentrant_mutex(());

/// Serialise access to the global violation handler.
///
/// Re-entrant, so helpers below can take it again while a test holds it.
pub fn lock() -> ReentrantMutexGuard<'static, ()> {
    HANDLER_LOCK.lock()
}

/// Handler that unwinds with the [`ViolationInfo`] as payload.
pub fn panicking_handler(info: ViolationInfo) {
    panic::panic_any(info);
}

/// Run `f` with [`panicking_handler`] installed and return the violation it
/// raised, if any.
///
/// Panics that are not violations are resumed.
pub fn catch_violation<F: FnOnce()>(f: F) -> Option<ViolationInfo> {
    let _lock = lock();
    let _guard = replace_violation_handler(panicking_handler);
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => None,
        Err(payload) => match payload.downcast::<ViolationInfo>() {
            Ok(info) => Some(*info),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{Family, SourceLocation, Tier};

    #[test]
    fn catch_violation_returns_none_without_panic() {
        assert!(catch_violation(|| {}).is_none());
    }

    #[test]
    fn catch_violation_returns_payload() {
        let info = ViolationInfo::new(SourceLocation::caller(), Tier::Default, Family::Assertion);
        let caught = catch_violation(|| panicking_handler(info));
        assert_eq!(caught, Some(info));
    }

    #[test]
    #[should_panic(expected = "not a violation")]
    fn foreign_panics_are_resumed() {
        catch_violation(|| panic!("not a violation"));
    }
}
