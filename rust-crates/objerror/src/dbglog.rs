// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Debug logging of error recovery decisions.
//!
//! Off by default. When enabled, every error link that gets resolved by
//! filtering and every probe that rejects an input is reported on stderr.

use std::sync::atomic::{AtomicBool, Ordering};

// Re-export to make the macro show up in this module in rustdoc.
pub use crate::debug;

/// Determines whether [`debug`] messages are actually printed or not.
pub static ENABLED: AtomicBool = AtomicBool::new(false);

/// Turn debug logging on or off for the whole process.
pub fn enable(on: bool) {
    ENABLED.store(on, Ordering::Relaxed);
}

/// Print to stderr if debug printing is enabled.
///
/// See [`eprintln`] documentation for usage.
#[macro_export]
macro_rules! debug {
    ( $($args:tt)* ) => {
        if $crate::dbglog::ENABLED.load(::std::sync::atomic::Ordering::Relaxed) {
            ::std::eprintln!("[{}] {}", $crate::CATEGORY, ::std::format_args!($($args)*));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle() {
        enable(true);
        assert!(ENABLED.load(Ordering::Relaxed));
        debug!("visible {}", 1);
        enable(false);
        assert!(!ENABLED.load(Ordering::Relaxed));
    }
}
