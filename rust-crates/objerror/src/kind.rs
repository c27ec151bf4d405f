// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Closed set of object file parsing failure kinds.
//!
//! Every kind maps to exactly one fixed message. The mapping is an exhaustive
//! `match`, so adding a kind without a message is rejected by the compiler.

/// Name of the error category that the numeric [`ErrorKind`] codes live in.
pub const CATEGORY: &str = "objerror";

/// Classification of an object file parsing failure.
///
/// The discriminants are the stable numeric codes of each kind. Code `0` is
/// reserved for "no error" and never names a kind.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, thiserror::Error)]
#[error("{}", self.message())]
pub enum ErrorKind {
    /// A universal binary doesn't contain the requested architecture.
    ArchNotFound = 1,

    /// The input isn't an object file of any known format.
    InvalidFileType = 2,

    /// Structurally invalid data.
    ParseFailed = 3,

    /// The input was truncated.
    UnexpectedEOF = 4,

    /// The last byte of a string table isn't NUL.
    StringTableNonNullEnd = 5,

    /// A section index points outside of the section table.
    InvalidSectionIndex = 6,

    /// No embedded bitcode section.
    BitcodeSectionNotFound = 7,
}

impl ErrorKind {
    /// All kinds, ordered by code.
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::ArchNotFound,
        ErrorKind::InvalidFileType,
        ErrorKind::ParseFailed,
        ErrorKind::UnexpectedEOF,
        ErrorKind::StringTableNonNullEnd,
        ErrorKind::InvalidSectionIndex,
        ErrorKind::BitcodeSectionNotFound,
    ];

    /// Human-readable description of this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use objerror::ErrorKind;
    /// assert_eq!(ErrorKind::InvalidSectionIndex.message(), "Invalid section index");
    /// ```
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::ArchNotFound => "No object file for requested architecture",
            ErrorKind::InvalidFileType => "The file was not recognized as a valid object file",
            ErrorKind::ParseFailed => "Invalid data was encountered while parsing the file",
            ErrorKind::UnexpectedEOF => "The end of the file was unexpectedly encountered",
            ErrorKind::StringTableNonNullEnd => "String table must end with a null terminator",
            ErrorKind::InvalidSectionIndex => "Invalid section index",
            ErrorKind::BitcodeSectionNotFound => "Bitcode section not found in object file",
        }
    }

    /// Numeric code of this kind within [`CATEGORY`].
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Look up the kind for a numeric code.
    ///
    /// Returns [`None`] for `0` and for any code that doesn't name a kind.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}
