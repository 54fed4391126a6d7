// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions for tree traversal.
//!
//! Traversal order for one node:
//!
//! 1. push the cursor and call `pre_visit`
//! 2. dispatch to the variant's `visit_*` method, which by default calls
//!    [`walk_node`]:
//!    - visit the prefix space at the variant's prefix location
//!    - call `visit_statement` and then `visit_expression` for variants with
//!      those capabilities; a result of another variant replaces the node
//!      and stops the walk
//!    - visit the markers
//!    - visit each field in declared order
//! 3. call `post_visit` and pop the cursor
//!
//! A node is rebuilt only when some field comes back as a different value,
//! so an identity visit returns the input allocation.

use std::sync::Arc;

use tracing::trace;

use super::fields::VisitFields;
use super::traits::{HasCursor, TreeVisitor, Visited};
use crate::tree::{Capabilities, Tree, TreeVariant};

/// Visit any tree through the visitor's pre/post hooks and variant dispatch.
pub fn visit_tree<V: TreeVisitor<P>, P>(v: &mut V, tree: &Tree, p: &mut P) -> Visited {
    if !v.is_acceptable(tree, p) {
        return v.default_value(tree, p);
    }
    with_cursor(v, tree.clone(), |v| {
        let Some(pre) = v.pre_visit(tree.clone(), p)? else {
            return Ok(None);
        };
        let Some(visited) = pre.accept(v, p)? else {
            trace!(kind = tree.kind(), id = %tree.id(), "visit deleted node");
            return Ok(None);
        };
        v.post_visit(visited, p)
    })
}

/// Run `f` with the cursor pushed to `tree`, restoring the previous cursor after.
pub fn with_cursor<V: HasCursor + ?Sized, R>(v: &mut V, tree: Tree, f: impl FnOnce(&mut V) -> R) -> R {
    let parent = v.cursor().clone();
    *v.cursor_mut() = parent.push(tree);
    let result = f(v);
    *v.cursor_mut() = parent;
    result
}

/// Outcome of a capability intercept.
enum Intercept<N> {
    /// Same variant; keep walking this node.
    Continue(Arc<N>),
    /// Deleted or replaced by another variant; the walk ends here.
    Done(Option<Tree>),
}

fn intercept<N: TreeVariant>(result: Option<Tree>) -> Intercept<N> {
    match result {
        None => Intercept::Done(None),
        Some(tree) => match N::try_from_tree(tree) {
            Ok(node) => Intercept::Continue(node),
            Err(other) => Intercept::Done(Some(other)),
        },
    }
}

/// Default walk of one node: prefix, intercepts, markers, then fields.
pub fn walk_node<V: TreeVisitor<P>, P, N: TreeVariant>(v: &mut V, node: &Arc<N>, p: &mut P) -> Visited {
    let prefix = v.visit_space(node.node_prefix(), Some(N::PREFIX_LOCATION), p)?;
    let mut node = node.rebuild_prefix(prefix);

    if N::CAPABILITIES.contains(Capabilities::STATEMENT) {
        match intercept::<N>(v.visit_statement(N::into_tree(Arc::clone(&node)), p)?) {
            Intercept::Continue(n) => node = n,
            Intercept::Done(result) => return Ok(result),
        }
    }
    if N::CAPABILITIES.contains(Capabilities::EXPRESSION) {
        match intercept::<N>(v.visit_expression(N::into_tree(Arc::clone(&node)), p)?) {
            Intercept::Continue(n) => node = n,
            Intercept::Done(result) => return Ok(result),
        }
    }

    let markers = v.visit_markers(node.node_markers(), p)?;
    let node = node.rebuild_markers(markers);
    let node = node.map_fields(&mut VisitFields::new(v, p))?;
    Ok(Some(N::into_tree(node)))
}
