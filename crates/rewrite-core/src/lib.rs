// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Core infrastructure for lossless source trees.
//!
//! This crate provides the dialect-agnostic building blocks:
//! - Stable identity ([`Id`]) and copy-on-write identity comparison ([`Same`])
//! - Trivia envelopes: [`Space`], [`Comment`], [`RightPadded`], [`LeftPadded`], [`Container`]
//! - Opaque per-node metadata ([`Markers`])
//! - Type attribution in an arena ([`TypeTable`], [`JavaType`], [`TypeId`])
//! - Structural error types ([`LstError`])

pub mod error;
pub mod id;
pub mod java_type;
pub mod markers;
pub mod padding;
pub mod space;

pub use error::{LstError, LstResult};
pub use id::{HasId, Id, Same};
pub use java_type::{
    ArrayType, ClassKind, ClassType, GenericTypeVariable, JavaType, MethodType,
    ParameterizedType, PrimitiveKind, TypeId, TypeTable, VariableType, Variance,
};
pub use markers::{Marker, Markers};
pub use padding::{Container, LeftPadded, RightPadded};
pub use space::{Comment, HasPrefix, Space};
