//! Fail-fast reporting for programmer errors.
//!
//! Every non-recoverable path in the crate funnels through [`fail`], so
//! the diagnostic format and the panic/exit decision live in one place.

use std::alloc::Layout;

use crate::config::FatalMode;
use crate::error::DynArrayError;

/// Prefix of every fail-fast diagnostic line.
pub const DIAGNOSTIC_PREFIX: &str = "[dyn_array error]: ";

/// Render the one-line diagnostic for `err`.
pub fn diagnostic(err: &DynArrayError) -> String {
    format!("{DIAGNOSTIC_PREFIX}{err}")
}

/// Report `err` and stop.
///
/// With [`FatalMode::Panic`] this panics with the diagnostic as the
/// payload. With [`FatalMode::Exit`] the diagnostic goes to stderr and the
/// process exits with status 1 without unwinding.
#[cold]
#[track_caller]
pub fn fail(err: DynArrayError, mode: FatalMode) -> ! {
    let message = diagnostic(&err);
    match mode {
        FatalMode::Panic => panic!("{message}"),
        FatalMode::Exit => {
            tracing::error!(error = %err, "fail-fast exit");
            eprintln!("{message}");
            std::process::exit(1)
        }
    }
}

/// Like [`fail`], but a null return from the allocator aborts through
/// [`std::alloc::handle_alloc_error`] regardless of `mode`.
#[cold]
#[track_caller]
pub fn fail_alloc(err: DynArrayError, mode: FatalMode) -> ! {
    if let DynArrayError::AllocationFailed { bytes, align } = err {
        if let Ok(layout) = Layout::from_size_align(bytes, align) {
            std::alloc::handle_alloc_error(layout)
        }
    }
    fail(err, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_has_prefix_and_bounds() {
        let msg = diagnostic(&DynArrayError::IndexOutOfBounds { index: 5, len: 2 });
        assert_eq!(msg, "[dyn_array error]: index 5 is out of bounds (len = 2)");
    }

    #[test]
    #[should_panic(expected = "[dyn_array error]: index 1 is out of bounds (len = 0)")]
    fn panic_mode_panics_with_diagnostic() {
        fail(
            DynArrayError::IndexOutOfBounds { index: 1, len: 0 },
            FatalMode::Panic,
        );
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn fail_alloc_routes_overflow_through_fail() {
        fail_alloc(
            DynArrayError::CapacityOverflow { requested: 3 },
            FatalMode::Panic,
        );
    }
}
