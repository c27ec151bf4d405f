// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]

mod ffistr;
mod kind;
mod status;

pub use ffistr::*;
pub use kind::*;
pub use status::*;
