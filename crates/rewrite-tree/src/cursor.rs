// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The ancestor path of the node being visited.
//!
//! A [`Cursor`] is a persistent linked list: pushing returns a new cursor
//! that shares its parent, so saving and restoring the position around a
//! recursive visit is a clone.

use std::collections::HashMap;
use std::sync::Arc;

use crate::tree::{Tree, TreeVariant};

#[derive(Debug)]
struct Frame {
    value: Tree,
    parent: Cursor,
    messages: HashMap<String, String>,
}

/// Path from the current node up to the root.
#[derive(Debug, Clone, Default)]
pub struct Cursor(Option<Arc<Frame>>);

impl Cursor {
    /// The cursor above every root.
    pub fn root() -> Self {
        Cursor(None)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_none()
    }

    /// A child cursor positioned at `value`.
    pub fn push(&self, value: Tree) -> Cursor {
        Cursor(Some(Arc::new(Frame {
            value,
            parent: self.clone(),
            messages: HashMap::new(),
        })))
    }

    /// The node at this position; `None` at the root.
    pub fn value(&self) -> Option<&Tree> {
        self.0.as_ref().map(|frame| &frame.value)
    }

    pub fn parent(&self) -> Option<&Cursor> {
        self.0.as_ref().map(|frame| &frame.parent)
    }

    /// The nearest ancestor node, excluding the current one.
    pub fn parent_tree(&self) -> Option<&Tree> {
        self.parent().and_then(Cursor::value)
    }

    /// Nodes from the current one up to the root.
    pub fn path(&self) -> impl Iterator<Item = &Tree> {
        let mut next = self;
        std::iter::from_fn(move || {
            let frame = next.0.as_ref()?;
            next = &frame.parent;
            Some(&frame.value)
        })
    }

    pub fn depth(&self) -> usize {
        self.path().count()
    }

    /// The nearest node of variant `N`, starting with the current one.
    pub fn first_enclosing<N: TreeVariant>(&self) -> Option<&Arc<N>> {
        self.path().find_map(N::as_variant)
    }

    /// The nearest node that satisfies `predicate`.
    pub fn first_enclosing_matching(&self, predicate: impl Fn(&Tree) -> bool) -> Option<&Tree> {
        self.path().find(|tree| predicate(tree))
    }

    /// The enclosing source file, if any.
    pub fn source_file(&self) -> Option<&Tree> {
        self.first_enclosing_matching(Tree::is_source_file)
    }

    /// Attach a message to the current frame, returning the updated cursor.
    ///
    /// Messages are visible through [`Cursor::nearest_message`] from this
    /// frame and its descendants.
    pub fn with_message(&self, key: &str, value: &str) -> Cursor {
        let Some(frame) = &self.0 else {
            return self.clone();
        };
        let mut messages = frame.messages.clone();
        messages.insert(key.to_owned(), value.to_owned());
        Cursor(Some(Arc::new(Frame {
            value: frame.value.clone(),
            parent: frame.parent.clone(),
            messages,
        })))
    }

    /// The message under `key` in the nearest frame that has one.
    pub fn nearest_message(&self, key: &str) -> Option<&str> {
        let mut next = self;
        while let Some(frame) = &next.0 {
            if let Some(value) = frame.messages.get(key) {
                return Some(value);
            }
            next = &frame.parent;
        }
        None
    }
}
