// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

use super::{FfiResult, ObjerrorStatus, ObjerrorString};
use objerror::ErrorKind;
use std::ffi::{c_char, CStr};

/// NUL-terminated copy of [`objerror::CATEGORY`].
const CATEGORY: &CStr = c"objerror";

/// Name of the error category the kind codes belong to.
///
/// The returned string is static and must not be freed.
#[no_mangle]
pub extern "C" fn objerror_category_name() -> *const c_char {
    CATEGORY.as_ptr()
}

/// Look up the message of the error kind with the given code.
///
/// `out` is treated as uninitialized: whatever it holds is overwritten
/// without being released, so callers must free a previously returned string
/// before passing the same location again.
///
/// On success, `out` receives an owned string that must be released with
/// [`crate::objerror_string_free`]. On failure, `out` is left untouched.
#[no_mangle]
pub unsafe extern "C" fn objerror_kind_message(
    code: u32,
    out: *mut ObjerrorString,
) -> ObjerrorStatus {
    kind_message_impl(code, out).into()
}

unsafe fn kind_message_impl(code: u32, out: *mut ObjerrorString) -> FfiResult {
    if out.is_null() {
        return Err(ObjerrorStatus::NullPointer);
    }

    let kind = ErrorKind::from_code(code).ok_or(ObjerrorStatus::UnknownKind)?;
    out.write(kind.message().into());
    Ok(())
}
