// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Rewrite: lossless source trees for refactoring recipes.
//!
//! The workspace is split along the seams of the data model:
//!
//! - [`core`]: identity, trivia envelopes, markers, type attribution
//! - [`tree`]: the Java and Python node variants, cursor, visitors, printer
//! - [`remote`]: the CBOR diff codec that moves trees between processes
//!
//! This facade re-exports them and adds the host-side pieces: a unified
//! error type with stable codes, and tracing subscriber installation.

pub use rewrite_core as core;
pub use rewrite_remote as remote;
pub use rewrite_tree as tree;

pub mod error;
pub mod logging;

pub use error::{ErrorCode, RewriteError};
pub use logging::{init_tracing, LogFormat, LogLevel};
