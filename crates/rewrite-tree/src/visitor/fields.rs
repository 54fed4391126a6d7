// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Adapter from a [`TreeVisitor`] to a [`FieldMapper`].

use rewrite_core::{Container, LeftPadded, LstError, Markers, RightPadded, Space, TypeId};

use super::traits::TreeVisitor;
use crate::field::{Field, FieldMapper, SlotInfo, Value};
use crate::tree::Tree;

/// Maps each field of a node by visiting it.
pub struct VisitFields<'a, V, P> {
    visitor: &'a mut V,
    p: &'a mut P,
}

impl<'a, V, P> VisitFields<'a, V, P> {
    pub fn new(visitor: &'a mut V, p: &'a mut P) -> Self {
        Self { visitor, p }
    }
}

impl<V: TreeVisitor<P>, P> FieldMapper for VisitFields<'_, V, P> {
    type Error = LstError;

    fn map_tree(&mut self, before: Option<&Tree>, _slot: SlotInfo) -> Result<Option<Tree>, LstError> {
        match before {
            Some(tree) => self.visitor.visit(tree, self.p),
            None => Ok(None),
        }
    }

    fn map_space(&mut self, before: Option<&Space>, slot: SlotInfo) -> Result<Option<Space>, LstError> {
        before
            .map(|space| self.visitor.visit_space(space, slot.location, self.p))
            .transpose()
    }

    fn map_markers(&mut self, before: &Markers, _slot: SlotInfo) -> Result<Markers, LstError> {
        self.visitor.visit_markers(before, self.p)
    }

    fn map_value<T: Value>(&mut self, before: Option<&T>, _slot: SlotInfo) -> Result<Option<T>, LstError> {
        Ok(before.cloned())
    }

    fn map_type(&mut self, before: Option<&TypeId>, _slot: SlotInfo) -> Result<Option<TypeId>, LstError> {
        match before {
            Some(ty) => self.visitor.visit_type(Some(*ty), self.p),
            None => Ok(None),
        }
    }

    fn map_right_padded<T: Field>(
        &mut self,
        before: Option<&RightPadded<T>>,
        slot: SlotInfo,
    ) -> Result<Option<RightPadded<T>>, LstError> {
        match before {
            Some(right) => self.visitor.visit_right_padded(right, slot, self.p),
            None => Ok(None),
        }
    }

    fn map_left_padded<T: Field>(
        &mut self,
        before: Option<&LeftPadded<T>>,
        slot: SlotInfo,
    ) -> Result<Option<LeftPadded<T>>, LstError> {
        match before {
            Some(left) => self.visitor.visit_left_padded(left, slot, self.p),
            None => Ok(None),
        }
    }

    fn map_container<T: Field>(
        &mut self,
        before: Option<&Container<T>>,
        slot: SlotInfo,
    ) -> Result<Option<Container<T>>, LstError> {
        match before {
            Some(container) => self.visitor.visit_container(container, slot, self.p),
            None => Ok(None),
        }
    }
}
