// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod chain;
pub mod dbglog;
pub mod error;
pub mod kind;
pub mod objfile;

pub use chain::{filter_invalid_file_type, filter_out_kind, ErrorChain};
pub use error::{Error, GenericError, Result};
pub use kind::{ErrorKind, CATEGORY};
