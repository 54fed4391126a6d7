// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for tree traversal and transformation.
//!
//! A [`TreeVisitor`] is both a reader and a rewriter: every `visit_*` method
//! returns the node to keep in its place. Returning the argument unchanged
//! keeps the tree as is; returning a different node replaces it; returning
//! `None` deletes it from its slot (an error for slots that cannot be empty).
//!
//! # Traversal Order
//!
//! - Depth-first, pre-order
//! - Fields are visited in declared (source) order
//! - Each node's prefix is visited before its fields
//!
//! # Example
//!
//! ```ignore
//! use rewrite_tree::visitor::{HasCursor, TreeVisitor, Visited};
//!
//! struct DropPass {
//!     cursor: Cursor,
//! }
//!
//! impl TreeVisitor<()> for DropPass {
//!     fn visit_pass(&mut self, _node: &Arc<Pass>, _p: &mut ()) -> Visited {
//!         Ok(None)
//!     }
//! }
//! ```

mod dispatch;
mod fields;
mod traits;

pub use dispatch::{visit_tree, walk_node, with_cursor};
pub use fields::VisitFields;
pub use traits::{HasCursor, TreeVisitor, Visited};
