// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The visitor trait.
//!
//! [`TreeVisitor`] has one `visit_*` method per variant, each defaulting to
//! [`walk_node`](super::dispatch::walk_node): visit the prefix, run the
//! capability intercepts, visit the markers, then visit every field in
//! declared order. Overriders replace the methods they care about and call
//! the walk function to keep descending.
//!
//! Every method returns [`Visited`]: `Ok(Some(tree))` to keep or replace,
//! `Ok(None)` to delete. Returning the input unchanged (by identity) keeps
//! every ancestor unchanged too.

use std::sync::Arc;

use rewrite_core::{Container, LeftPadded, LstError, LstResult, Markers, RightPadded, Space, TypeId};

use super::dispatch::{visit_tree, walk_node};
use super::fields::VisitFields;
use crate::cursor::Cursor;
use crate::field::{walk_container, walk_left_padded, walk_right_padded, Field, SlotInfo};
use crate::location::Location;
use crate::nodes::*;
use crate::tree::{for_each_variant, Dialect, Tree, TreeVariant};

/// Result of a visit: the kept or replaced tree, or `None` for deletion.
pub type Visited = LstResult<Option<Tree>>;

/// Owner of the cursor a visitor maintains.
pub trait HasCursor {
    fn cursor(&self) -> &Cursor;
    fn cursor_mut(&mut self) -> &mut Cursor;
}

macro_rules! define_visitor {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            /// A tree visitor over both dialects, parameterized by a context `P`.
            pub trait TreeVisitor<P>: HasCursor {
                /// Whether this visitor handles `tree` at all. Unaccepted trees
                /// are returned as-is without descending.
                #[allow(unused_variables)]
                fn is_acceptable(&self, tree: &Tree, p: &P) -> bool {
                    self.accepts_dialect(tree.dialect())
                }

                /// Dialect filter consulted by the default [`TreeVisitor::is_acceptable`].
                #[allow(unused_variables)]
                fn accepts_dialect(&self, dialect: Dialect) -> bool {
                    true
                }

                /// Visit any tree: push the cursor, pre-visit, dispatch to the
                /// variant method, post-visit, pop the cursor.
                fn visit(&mut self, tree: &Tree, p: &mut P) -> Visited
                where
                    Self: Sized,
                {
                    visit_tree(self, tree, p)
                }

                /// Visit an optional tree; absent stays absent.
                fn visit_optional(&mut self, tree: Option<&Tree>, p: &mut P) -> Visited
                where
                    Self: Sized,
                {
                    match tree {
                        Some(tree) => self.visit(tree, p),
                        None => Ok(None),
                    }
                }

                /// Visit `tree` as a child of `parent`, restoring the cursor afterwards.
                fn visit_from(&mut self, tree: &Tree, p: &mut P, parent: Cursor) -> Visited
                where
                    Self: Sized,
                {
                    let saved = std::mem::replace(self.cursor_mut(), parent);
                    let result = self.visit(tree, p);
                    *self.cursor_mut() = saved;
                    result
                }

                /// Visit a node and require the result to be the same variant.
                fn visit_and_cast<N: TreeVariant>(
                    &mut self,
                    node: &Arc<N>,
                    p: &mut P,
                ) -> LstResult<Option<Arc<N>>>
                where
                    Self: Sized,
                {
                    match self.visit(&N::into_tree(Arc::clone(node)), p)? {
                        None => Ok(None),
                        Some(tree) => N::try_from_tree(tree)
                            .map(Some)
                            .map_err(|other| LstError::wrong_variant(N::KIND, N::KIND, other.kind())),
                    }
                }

                /// The value a visit yields when it has nothing to say about `tree`.
                #[allow(unused_variables)]
                fn default_value(&mut self, tree: &Tree, p: &mut P) -> Visited {
                    Ok(Some(tree.clone()))
                }

                #[allow(unused_variables)]
                fn pre_visit(&mut self, tree: Tree, p: &mut P) -> Visited {
                    Ok(Some(tree))
                }

                #[allow(unused_variables)]
                fn post_visit(&mut self, tree: Tree, p: &mut P) -> Visited {
                    Ok(Some(tree))
                }

                /// Intercept for every expression, called after its prefix is visited.
                /// Returning another variant replaces the node without descending.
                #[allow(unused_variables)]
                fn visit_expression(&mut self, tree: Tree, p: &mut P) -> Visited {
                    Ok(Some(tree))
                }

                /// Intercept for every statement; see [`TreeVisitor::visit_expression`].
                #[allow(unused_variables)]
                fn visit_statement(&mut self, tree: Tree, p: &mut P) -> Visited {
                    Ok(Some(tree))
                }

                #[allow(unused_variables)]
                fn visit_space(&mut self, space: &Space, location: Option<Location>, p: &mut P) -> LstResult<Space> {
                    Ok(space.clone())
                }

                #[allow(unused_variables)]
                fn visit_markers(&mut self, markers: &Markers, p: &mut P) -> LstResult<Markers> {
                    Ok(markers.clone())
                }

                #[allow(unused_variables)]
                fn visit_type(&mut self, ty: Option<TypeId>, p: &mut P) -> LstResult<Option<TypeId>> {
                    Ok(ty)
                }

                /// Visit the element, the trailing space and the markers.
                /// `None` when the element was deleted.
                fn visit_right_padded<T: Field>(
                    &mut self,
                    right: &RightPadded<T>,
                    slot: SlotInfo,
                    p: &mut P,
                ) -> LstResult<Option<RightPadded<T>>>
                where
                    Self: Sized,
                {
                    walk_right_padded(&mut VisitFields::new(self, p), Some(right), slot)
                }

                fn visit_left_padded<T: Field>(
                    &mut self,
                    left: &LeftPadded<T>,
                    slot: SlotInfo,
                    p: &mut P,
                ) -> LstResult<Option<LeftPadded<T>>>
                where
                    Self: Sized,
                {
                    walk_left_padded(&mut VisitFields::new(self, p), Some(left), slot)
                }

                /// Visit the leading space and each element; deleted elements
                /// drop out of the container.
                fn visit_container<T: Field>(
                    &mut self,
                    container: &Container<T>,
                    slot: SlotInfo,
                    p: &mut P,
                ) -> LstResult<Option<Container<T>>>
                where
                    Self: Sized,
                {
                    walk_container(&mut VisitFields::new(self, p), Some(container), slot)
                }

                $(
                    #[doc = concat!("Visit a [`", stringify!($variant), "`] node.")]
                    fn [<visit_ $variant:snake>](&mut self, node: &Arc<$variant>, p: &mut P) -> Visited
                    where
                        Self: Sized,
                    {
                        walk_node(self, node, p)
                    }
                )*
            }

            impl Tree {
                /// Dispatch to the visitor method for this variant.
                pub fn accept<V: TreeVisitor<P>, P>(&self, v: &mut V, p: &mut P) -> Visited {
                    match self {
                        $(Tree::$variant(node) => v.[<visit_ $variant:snake>](node, p),)*
                    }
                }
            }
        }
    };
}

for_each_variant!(define_visitor);

