// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Moves trees between processes as CBOR diffs.
//!
//! A [`RemotingContext`] holds one session. [`RemotingContext::send`] encodes
//! a tree against the version the peer already has, and
//! [`RemotingContext::receive`] applies such a message to the local copy.
//! Type attributions cross the wire once per session and are referenced by
//! handle afterwards, so cyclic type graphs decode to cyclic arena entries.

pub mod codec;
pub mod config;
pub mod context;
pub mod error;
pub mod factory;
pub mod java_types;
pub mod receiver;
pub mod registry;
pub mod sender;

pub use codec::State;
pub use config::RemotingConfig;
pub use context::RemotingContext;
pub use error::{RemoteError, RemoteResult};
pub use factory::ReceiverFactory;
pub use java_types::TypeFieldVisitor;
pub use receiver::ReceiverContext;
pub use registry::{CodecRegistry, ValueDeserializer, ValueSerializer};
pub use sender::SenderContext;
