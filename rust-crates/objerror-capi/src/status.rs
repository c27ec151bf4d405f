// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Status codes returned by the C API.

pub type FfiResult<T = ()> = Result<T, ObjerrorStatus>;

/// Status codes exposed to the C API.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ObjerrorStatus {
    #[error("OK: not actually an error")]
    Ok = 0,

    #[error("Code doesn't name an error kind")]
    UnknownKind = 1,

    #[error("Output pointer is NULL")]
    NullPointer = 2,
}

impl From<ObjerrorStatus> for FfiResult {
    fn from(code: ObjerrorStatus) -> Self {
        if code == ObjerrorStatus::Ok {
            Ok(())
        } else {
            Err(code)
        }
    }
}

impl From<FfiResult> for ObjerrorStatus {
    fn from(result: FfiResult) -> Self {
        match result {
            Ok(()) => ObjerrorStatus::Ok,
            Err(e) => e,
        }
    }
}
