// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Unified error type and stable error codes.
//!
//! Each member crate has its own error enum. Hosts that embed the whole
//! stack convert them into [`RewriteError`], which maps every failure to a
//! stable [`ErrorCode`]:
//!
//! - `3`: Structural errors (a tree invariant was violated)
//! - `4`: Protocol errors (a malformed or unresolvable remoting stream)
//! - `5`: Transport errors (the byte stream itself failed)
//! - `10`: Internal errors (bugs, unexpected state)

use std::fmt;

use rewrite_core::LstError;
use rewrite_remote::RemoteError;
use thiserror::Error;

// ============================================================================
// Error Codes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    /// A tree invariant was violated.
    Structural = 3,
    /// The remoting stream is malformed or refers to unknown names.
    Protocol = 4,
    /// Reading or writing the stream failed.
    Transport = 5,
    /// Bugs and unexpected state.
    Internal = 10,
}

impl ErrorCode {
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error(transparent)]
    Structural(LstError),

    #[error("protocol error: {0}")]
    Protocol(RemoteError),

    #[error("transport error: {0}")]
    Transport(RemoteError),

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl RewriteError {
    pub fn internal(message: impl Into<String>) -> Self {
        RewriteError::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        ErrorCode::from(self)
    }
}

impl From<&RewriteError> for ErrorCode {
    fn from(err: &RewriteError) -> Self {
        match err {
            RewriteError::Structural(_) => ErrorCode::Structural,
            RewriteError::Protocol(_) => ErrorCode::Protocol,
            RewriteError::Transport(_) => ErrorCode::Transport,
            RewriteError::Internal { .. } => ErrorCode::Internal,
        }
    }
}

// ============================================================================
// Bridges
// ============================================================================

impl From<LstError> for RewriteError {
    fn from(err: LstError) -> Self {
        RewriteError::Structural(err)
    }
}

impl From<RemoteError> for RewriteError {
    fn from(err: RemoteError) -> Self {
        match err {
            // A structural failure surfaced while applying a diff.
            RemoteError::Lst(inner) => RewriteError::Structural(inner),
            RemoteError::Io(_) | RemoteError::Encode(_) => RewriteError::Transport(err),
            RemoteError::Decode(_)
            | RemoteError::UnknownValueType(_)
            | RemoteError::UnknownReference(_)
            | RemoteError::UnexpectedState(_)
            | RemoteError::Malformed { .. }
            | RemoteError::DecodeLimit(_) => RewriteError::Protocol(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_errors_map_to_3() {
        let err = RewriteError::from(LstError::RequiredSlotRemoved {
            node: "MethodInvocation",
            slot: "name",
        });
        assert_eq!(err.error_code(), ErrorCode::Structural);
        assert_eq!(err.error_code().code(), 3);
    }

    #[test]
    fn protocol_errors_map_to_4() {
        let err = RewriteError::from(RemoteError::UnknownReference(7));
        assert_eq!(err.error_code().code(), 4);
        assert_eq!(err.to_string(), "protocol error: unknown reference: 7");
    }

    #[test]
    fn structural_errors_inside_remote_errors_are_unwrapped() {
        let err = RewriteError::from(RemoteError::Lst(LstError::wrong_variant(
            "name",
            "Identifier",
            "Literal",
        )));
        assert_eq!(err.error_code(), ErrorCode::Structural);
    }

    #[test]
    fn io_errors_map_to_transport() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err = RewriteError::from(RemoteError::Io(io));
        assert_eq!(err.error_code(), ErrorCode::Transport);
    }

    #[test]
    fn internal_errors_map_to_10() {
        assert_eq!(RewriteError::internal("oops").error_code().code(), 10);
    }
}
