// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Errors raised while encoding or decoding a remoting stream.

use rewrite_core::LstError;
use thiserror::Error;

pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("cbor encode: {0}")]
    Encode(#[from] minicbor::encode::Error<std::convert::Infallible>),

    #[error("cbor decode: {0}")]
    Decode(#[from] minicbor::decode::Error),

    /// The receiver factory has no constructor for a wire type name.
    #[error("unknown value type: {0}")]
    UnknownValueType(String),

    /// A bare type handle that no earlier `@ref` introduced.
    #[error("unknown reference: {0}")]
    UnknownReference(u32),

    #[error("unexpected state tag: {0}")]
    UnexpectedState(u8),

    #[error("malformed stream: expected {expected}, found {found}")]
    Malformed { expected: &'static str, found: String },

    #[error("decode limit exceeded: {0}")]
    DecodeLimit(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Lst(#[from] LstError),
}

impl RemoteError {
    pub fn malformed(expected: &'static str, found: impl ToString) -> Self {
        RemoteError::Malformed {
            expected,
            found: found.to_string(),
        }
    }
}
