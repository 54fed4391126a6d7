// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Identity invariants checked over every node variant.

mod support;

use std::collections::BTreeSet;
use std::sync::Arc;

use rewrite_core::{Container, LstError, Markers, Same, Space, TypeId};
use rewrite_tree::field::{FieldMapper, SlotInfo, Value};
use rewrite_tree::{Cursor, HasCursor, Tree, TreeVisitor, Visited};
use support::*;

/// Hands every slot back as it found it.
struct Unchanged;

impl FieldMapper for Unchanged {
    type Error = LstError;

    fn map_tree(&mut self, before: Option<&Tree>, _slot: SlotInfo) -> Result<Option<Tree>, LstError> {
        Ok(before.cloned())
    }

    fn map_space(&mut self, before: Option<&Space>, _slot: SlotInfo) -> Result<Option<Space>, LstError> {
        Ok(before.cloned())
    }

    fn map_markers(&mut self, before: &Markers, _slot: SlotInfo) -> Result<Markers, LstError> {
        Ok(before.clone())
    }

    fn map_value<V: Value>(&mut self, before: Option<&V>, _slot: SlotInfo) -> Result<Option<V>, LstError> {
        Ok(before.cloned())
    }

    fn map_type(&mut self, before: Option<&TypeId>, _slot: SlotInfo) -> Result<Option<TypeId>, LstError> {
        Ok(before.copied())
    }
}

fn placeholders() -> Vec<Tree> {
    Tree::VARIANTS
        .iter()
        .map(|info| Tree::placeholder_of(info.kind).unwrap_or_else(|| panic!("no placeholder for {}", info.kind)))
        .collect()
}

/// A module whose statements are one node of every variant.
fn every_variant() -> Tree {
    module(placeholders().into_iter().map(padded).collect(), "\n")
}

#[test]
fn every_variant_rebuilds_to_itself() {
    for tree in placeholders() {
        let rebuilt = tree.map_fields(&mut Unchanged).unwrap();
        assert!(rebuilt.same(&tree), "{} was reallocated", tree.kind());

        assert!(tree.with_id(tree.id()).same(&tree), "{} id", tree.kind());
        assert!(tree.with_prefix(tree.prefix().clone()).same(&tree), "{} prefix", tree.kind());
        assert!(tree.with_markers(tree.markers().clone()).same(&tree), "{} markers", tree.kind());
    }
}

#[test]
fn populated_module_rebuilds_to_itself() {
    let tree = every_variant();
    assert!(tree.map_fields(&mut Unchanged).unwrap().same(&tree));
}

#[test]
fn padded_setters_keep_present_envelopes() {
    let Tree::Try(node) = Tree::placeholder_of("Try").unwrap() else {
        unreachable!();
    };
    let node = node.padding().with_resources(Some(Container::empty()));
    assert!(node.with_resources(node.resources()).unwrap().same(&node));
    assert!(node.with_finally(node.finally()).unwrap().same(&node));
    assert!(node.with_catches(node.catches().clone()).same(&node));

    let Tree::MethodInvocation(call) = call("", "f", vec![ident("", "a")]) else {
        unreachable!();
    };
    assert!(call.with_arguments(call.arguments()).unwrap().same(&call));
}

/// Records the kind of every node it passes through.
#[derive(Default)]
struct Census {
    cursor: Cursor,
    kinds: BTreeSet<&'static str>,
}

impl HasCursor for Census {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }
}

impl TreeVisitor<()> for Census {
    fn pre_visit(&mut self, tree: Tree, _p: &mut ()) -> Visited {
        self.kinds.insert(tree.kind());
        Ok(Some(tree))
    }
}

#[test]
fn identity_visit_of_every_variant() {
    let tree = every_variant();
    let mut census = Census::default();
    let visited = census.visit(&tree, &mut ()).unwrap().unwrap();
    assert!(visited.same(&tree));

    let all: BTreeSet<_> = Tree::VARIANTS.iter().map(|info| info.kind).collect();
    let missed: Vec<_> = all.difference(&census.kinds).collect();
    assert!(missed.is_empty(), "never visited: {missed:?}");
}

#[test]
fn visit_helpers_keep_the_node() {
    let mut census = Census::default();
    assert_eq!(census.visit_optional(None, &mut ()).unwrap(), None);

    let Tree::Identifier(name) = ident("", "x") else {
        unreachable!();
    };
    let kept = census.visit_and_cast(&name, &mut ()).unwrap().unwrap();
    assert!(Arc::ptr_eq(&kept, &name));

    let parent = Cursor::root().push(pass(""));
    let tree = ident(" ", "y");
    let visited = census.visit_from(&tree, &mut (), parent).unwrap().unwrap();
    assert!(visited.same(&tree));
    assert!(census.cursor().is_root());
}
