// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Node types for both dialects.
//!
//! Every node is an immutable struct shared through `Arc`. Each carries an
//! [`Id`](rewrite_core::Id), a prefix [`Space`](rewrite_core::Space) and a
//! [`Markers`](rewrite_core::Markers) bag, followed by its own fields in
//! source order. Python-only nodes whose names collide with shared ones take
//! a `Py` prefix.

use std::sync::Arc;

pub(crate) mod macros;

pub mod declaration;
pub mod expression;
pub mod kinds;
pub mod python;
pub mod statement;

pub use declaration::*;
pub use expression::*;
pub use kinds::*;
pub use python::*;
pub use statement::*;

/// Envelope-level view of a node's padded fields.
///
/// Plain getters strip envelopes; this facet returns them as stored, with
/// `with_*` methods that replace an envelope wholesale.
#[derive(Debug)]
pub struct Padding<'a, N>(pub(crate) &'a Arc<N>);

impl<'a, N> Padding<'a, N> {
    /// The node this facet views.
    pub fn node(&self) -> &'a Arc<N> {
        self.0
    }
}
