// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Lossless source trees for Java and Python.
//!
//! Every byte of the original source lives somewhere in the tree: in a node's
//! prefix, in an envelope around a child, or in a node's own text. Printing
//! an unmodified tree reproduces its input exactly.
//!
//! - [`Tree`]: the closed set of node variants of both dialects
//! - [`TreeVisitor`]: identity-preserving traversal and rewriting
//! - [`Cursor`]: the ancestor path during a visit
//! - [`PythonPrinter`]: rendering back to source
//! - [`Coordinates`]: insertion points for template engines

pub mod coordinates;
pub mod cursor;
pub mod field;
pub mod location;
pub mod nodes;
pub mod printer;
pub mod tree;
pub mod visitor;

pub use coordinates::{Coordinate, Coordinates, Mode};
pub use cursor::Cursor;
pub use field::{FieldMapper, FieldZipper, SlotInfo, Value, WireValue};
pub use location::Location;
pub use printer::{PrintOutputCapture, PythonPrinter};
pub use tree::{Capabilities, Dialect, Tree, TreeVariant, VariantInfo};
pub use visitor::{HasCursor, TreeVisitor, Visited};
