// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Object file format detection on top of the [`object`] library.
//!
//! Callers that support several formats try them in order through
//! [`probe`]: a probe that doesn't recognize the input fails with
//! [`ErrorKind::InvalidFileType`], which is filtered out before moving on to
//! the next probe. Any other failure aborts probing.

use crate::chain::{filter_invalid_file_type, ErrorChain};
use crate::dbglog::debug;
use crate::error::{Error, Result};
use crate::kind::ErrorKind;

pub use object::FileKind;

/// Number of header bytes [`object`] needs to tell formats apart.
const MAGIC_LEN: usize = 16;

/// Detect the object file format of `data`.
///
/// Inputs too short to hold a file magic fail with
/// [`ErrorKind::UnexpectedEOF`]. Unknown magics fail with [`object`]'s own
/// message, classified as [`ErrorKind::InvalidFileType`].
///
/// # Examples
///
/// ```
/// # use objerror::{objfile, ErrorKind};
/// let err = objfile::identify(b"").unwrap_err();
/// assert_eq!(err.classify(), Some(ErrorKind::UnexpectedEOF));
/// ```
pub fn identify(data: &[u8]) -> Result<FileKind> {
    if data.len() < MAGIC_LEN {
        return Err(Error::classified(ErrorKind::UnexpectedEOF));
    }

    FileKind::parse(data)
        .map_err(|e| Error::generic_with_kind(e.to_string(), ErrorKind::InvalidFileType))
}

/// A single attempt at interpreting an input as some file format.
pub trait Probe {
    /// Value produced when the input is accepted.
    type Output;

    /// Short name used in debug logs.
    fn name(&self) -> &str;

    /// Try to interpret `data`.
    ///
    /// Implementations must fail with a link classified as
    /// [`ErrorKind::InvalidFileType`] if the input simply isn't in their
    /// format, so that the next probe gets a chance.
    fn probe(&self, data: &[u8]) -> Result<Self::Output, ErrorChain>;
}

/// Accepts only inputs of one particular [`FileKind`].
#[derive(Debug, Clone, Copy)]
pub struct ExpectKind(pub FileKind);

impl Probe for ExpectKind {
    type Output = FileKind;

    fn name(&self) -> &str {
        "expect-kind"
    }

    fn probe(&self, data: &[u8]) -> Result<FileKind, ErrorChain> {
        let kind = identify(data)?;
        if kind != self.0 {
            return Err(Error::generic_with_kind(
                format!("expected {:?} file, found {kind:?}", self.0),
                ErrorKind::InvalidFileType,
            )
            .into());
        }
        Ok(kind)
    }
}

/// Run `probes` in order and return the output of the first one that
/// accepts `data`.
///
/// Rejections ([`ErrorKind::InvalidFileType`]) are resolved and the next
/// probe is tried. Any other error is returned right away, minus the
/// rejection links. If no probe accepts the input, the result is a single
/// [`ErrorKind::InvalidFileType`] error.
pub fn probe<T>(data: &[u8], probes: &[&dyn Probe<Output = T>]) -> Result<T, ErrorChain> {
    for p in probes {
        let chain = match p.probe(data) {
            Ok(output) => return Ok(output),
            Err(chain) => chain,
        };

        filter_invalid_file_type(chain).into_result()?;
        debug!("probe `{}` rejected the input", p.name());
    }

    Err(ErrorKind::InvalidFileType.into())
}
