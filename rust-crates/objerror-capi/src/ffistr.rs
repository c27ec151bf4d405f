// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

use std::ffi::{c_char, CString};
use std::{mem, ptr};

/// Read-only, nullable, owned FFI-safe string type.
///
/// Strings handed out by the library must be released with
/// [`objerror_string_free`].
#[derive(Debug)]
#[repr(transparent)]
pub struct ObjerrorString(*mut c_char);

impl ObjerrorString {
    /// The NULL string.
    pub const fn null() -> Self {
        Self(ptr::null_mut())
    }

    /// Checks whether this is the NULL string.
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

/// Strings with interior NUL bytes can't be represented and become NULL.
impl From<&str> for ObjerrorString {
    fn from(s: &str) -> Self {
        match CString::new(s) {
            Ok(cstr) => Self(cstr.into_raw()),
            Err(_) => Self::null(),
        }
    }
}

impl From<ObjerrorString> for Option<String> {
    fn from(s: ObjerrorString) -> Self {
        if s.0.is_null() {
            return None;
        }

        let cstr = unsafe { CString::from_raw(s.0) };
        mem::forget(s);
        cstr.into_string().ok()
    }
}

impl Drop for ObjerrorString {
    fn drop(&mut self) {
        if !self.0.is_null() {
            drop(unsafe { CString::from_raw(self.0) });
            self.0 = ptr::null_mut();
        }
    }
}

unsafe impl Send for ObjerrorString {}

/// Release a string previously returned by the library.
///
/// Passing the NULL string is allowed and does nothing.
#[no_mangle]
pub extern "C" fn objerror_string_free(s: ObjerrorString) {
    drop(s);
}
