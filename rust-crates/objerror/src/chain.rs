// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Ordered collections of errors and selective recovery.
//!
//! An [`ErrorChain`] accumulates the failures seen while processing a file.
//! The empty chain means success. Callers that consider one particular
//! [`ErrorKind`] harmless strip it with [`ErrorChain::filter_out_kind`] and
//! keep propagating whatever remains.

use crate::dbglog::debug;
use crate::error::Error;
use crate::kind::ErrorKind;
use smallvec::SmallVec;
use std::fmt;

/// Chains rarely hold more than a couple of links.
type Links = SmallVec<[Error; 2]>;

/// Ordered, possibly empty, sequence of errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorChain(Links);

impl ErrorChain {
    /// The empty chain.
    pub const fn success() -> Self {
        Self(SmallVec::new_const())
    }

    /// Checks whether the chain holds no errors.
    pub fn is_success(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Same as [`Self::is_success`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append an error at the end of the chain.
    pub fn push(&mut self, err: impl Into<Error>) {
        self.0.push(err.into());
    }

    /// Concatenate two chains, links of `self` first.
    pub fn join(mut self, other: ErrorChain) -> ErrorChain {
        self.0.extend(other.0);
        self
    }

    /// Iterate over the links in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.0.iter()
    }

    /// Checks whether any link classifies as `kind`.
    pub fn contains_kind(&self, kind: ErrorKind) -> bool {
        self.0.iter().any(|link| link.classify() == Some(kind))
    }

    /// `Ok(())` for the empty chain, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), ErrorChain> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Remove all links classified as `kind`, keeping the rest in order.
    ///
    /// Links are compared by [`Error::classify`] only, never by their text.
    /// The result is empty if and only if every link matched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use objerror::{Error, ErrorChain, ErrorKind};
    /// let chain = ErrorChain::from(Error::classified(ErrorKind::ArchNotFound));
    /// assert!(chain.filter_out_kind(ErrorKind::ArchNotFound).is_success());
    /// ```
    pub fn filter_out_kind(self, kind: ErrorKind) -> ErrorChain {
        self.0
            .into_iter()
            .filter(|link| {
                let resolved = link.classify() == Some(kind);
                if resolved {
                    debug!("resolved {kind:?} error: {link}");
                }
                !resolved
            })
            .collect()
    }
}

/// Remove all links of the given kind from `chain`.
///
/// Free function version of [`ErrorChain::filter_out_kind`].
pub fn filter_out_kind(chain: impl Into<ErrorChain>, kind: ErrorKind) -> ErrorChain {
    chain.into().filter_out_kind(kind)
}

/// Treat "not an object file" as resolved, keep everything else.
///
/// Intended for loops that try multiple file formats in turn: an
/// [`ErrorKind::InvalidFileType`] just means "try the next one".
pub fn filter_invalid_file_type(chain: impl Into<ErrorChain>) -> ErrorChain {
    filter_out_kind(chain, ErrorKind::InvalidFileType)
}

impl From<Error> for ErrorChain {
    fn from(err: Error) -> Self {
        let mut links = Links::new();
        links.push(err);
        Self(links)
    }
}

impl From<ErrorKind> for ErrorChain {
    fn from(kind: ErrorKind) -> Self {
        Error::classified(kind).into()
    }
}

impl FromIterator<Error> for ErrorChain {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Error> for ErrorChain {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ErrorChain {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorChain {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One link per line, oldest first.
impl fmt::Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, link) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            write!(f, "{link}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorChain {}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(links: impl IntoIterator<Item = Error>) -> ErrorChain {
        links.into_iter().collect()
    }

    #[test]
    fn empty() {
        for kind in ErrorKind::ALL {
            assert!(ErrorChain::success().filter_out_kind(kind).is_success());
        }
        assert_eq!(ErrorChain::success(), ErrorChain::default());
        assert_eq!(ErrorChain::success().into_result(), Ok(()));
        assert_eq!(ErrorChain::success().to_string(), "");
    }

    #[test]
    fn two_kinds() {
        let k = Error::classified(ErrorKind::ArchNotFound);
        let j = Error::generic_with_kind("no .llvmbc", ErrorKind::BitcodeSectionNotFound);
        let both = chain([k.clone(), j.clone()]);

        let only_j = both.clone().filter_out_kind(ErrorKind::ArchNotFound);
        assert_eq!(only_j, ErrorChain::from(j.clone()));

        let only_k = both.clone().filter_out_kind(ErrorKind::BitcodeSectionNotFound);
        assert_eq!(only_k, ErrorChain::from(k));

        let none = filter_out_kind(only_j, ErrorKind::BitcodeSectionNotFound);
        assert!(none.is_success());
        assert_eq!(none.into_result(), Ok(()));
    }

    #[test]
    fn only_target_kind() {
        let all_k = chain([
            Error::classified(ErrorKind::InvalidSectionIndex),
            Error::generic_with_kind("section 99", ErrorKind::InvalidSectionIndex),
            Error::classified(ErrorKind::InvalidSectionIndex),
        ]);
        assert_eq!(all_k.len(), 3);
        assert!(all_k
            .filter_out_kind(ErrorKind::InvalidSectionIndex)
            .is_success());
    }

    #[test]
    fn absent_kind_keeps_chain() {
        let links = chain([
            Error::classified(ErrorKind::ParseFailed),
            Error::generic("oops"),
            Error::generic_with_kind("short read", ErrorKind::UnexpectedEOF),
        ]);
        let filtered = links.clone().filter_out_kind(ErrorKind::ArchNotFound);
        assert_eq!(filtered, links);
    }

    #[test]
    fn preserves_order() {
        let links = chain([
            Error::generic("first"),
            Error::classified(ErrorKind::InvalidFileType),
            Error::generic_with_kind("second", ErrorKind::ParseFailed),
            Error::generic_with_kind("not ELF", ErrorKind::InvalidFileType),
            Error::generic("third"),
        ]);
        let filtered = filter_invalid_file_type(links);
        let texts: Vec<_> = filtered.iter().map(Error::message).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn matches_by_kind_not_text() {
        // Unclassified error that happens to share the registry text.
        let lookalike = Error::generic(ErrorKind::InvalidFileType.message());
        let links = chain([Error::classified(ErrorKind::InvalidFileType), lookalike.clone()]);
        assert_eq!(filter_invalid_file_type(links), ErrorChain::from(lookalike));

        // Classified error with unrelated text.
        let links = ErrorChain::from(Error::generic_with_kind(
            "unsupported magic 0xdeadbeef",
            ErrorKind::InvalidFileType,
        ));
        assert!(filter_invalid_file_type(links).is_success());
    }

    #[test]
    fn unclassified_links_survive_any_filter() {
        let links = ErrorChain::from(Error::generic("opaque"));
        for kind in ErrorKind::ALL {
            assert_eq!(links.clone().filter_out_kind(kind), links);
        }
    }

    #[test]
    fn join_and_display() {
        let mut a = ErrorChain::from(ErrorKind::UnexpectedEOF);
        a.push(Error::generic("while reading .dynstr"));
        let b = ErrorChain::from(ErrorKind::StringTableNonNullEnd);

        let joined = a.join(b);
        assert_eq!(joined.len(), 3);
        assert!(joined.contains_kind(ErrorKind::StringTableNonNullEnd));
        assert!(!joined.contains_kind(ErrorKind::ArchNotFound));
        assert_eq!(
            joined.to_string(),
            "The end of the file was unexpectedly encountered\n\
             while reading .dynstr\n\
             String table must end with a null terminator",
        );

        let err = joined.into_result().unwrap_err();
        let kinds: Vec<_> = err.into_iter().map(|x| x.classify()).collect();
        assert_eq!(
            kinds,
            [
                Some(ErrorKind::UnexpectedEOF),
                None,
                Some(ErrorKind::StringTableNonNullEnd)
            ]
        );
    }

    #[test]
    fn question_mark_into_chain() {
        fn inner() -> crate::Result<()> {
            Err(ErrorKind::ArchNotFound.into())
        }

        fn outer() -> Result<(), ErrorChain> {
            inner()?;
            Ok(())
        }

        let err = outer().unwrap_err();
        assert!(err.filter_out_kind(ErrorKind::ArchNotFound).is_success());
    }
}
