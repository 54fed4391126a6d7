// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Encodes a tree as a diff against the receiver's previous copy.
//!
//! The sender walks `after` and `before` side by side through
//! [`FieldZipper`]. Each field is framed by a [`State`] tag:
//!
//! - `NO_CHANGE` when the value is the same allocation (or an equal scalar)
//! - `DELETE` when a value present before is now absent
//! - `CHANGE` followed by field deltas when a node or envelope kept its identity
//! - `ADD` followed by the full value otherwise
//!
//! Lists send their new length, then for each element the index of its
//! previous version (or `-1`) and the element framed against it.

use std::collections::HashMap;
use std::sync::Arc;

use rewrite_core::{Container, Id, LeftPadded, LstError, Markers, RightPadded, Same, Space, TypeId};
use rewrite_tree::field::{Field, FieldZipper, SlotInfo, Value};
use rewrite_tree::Tree;
use tracing::trace;

use crate::codec::{write_id, write_markers, write_space, write_state, write_value, State, WireEncoder};
use crate::context::RemotingContext;
use crate::error::{RemoteError, RemoteResult};
use crate::java_types::TypeFieldVisitor;

/// One encoding pass over a tree.
pub struct SenderContext<'a, 'e> {
    ctx: &'a mut RemotingContext,
    enc: WireEncoder<'e>,
}

impl<'a, 'e> SenderContext<'a, 'e> {
    pub fn new(ctx: &'a mut RemotingContext, enc: WireEncoder<'e>) -> Self {
        Self { ctx, enc }
    }

    fn state(&mut self, state: State) -> RemoteResult<()> {
        write_state(&mut self.enc, state)
    }

    /// `DELETE` if there was a previous value, else `NO_CHANGE`.
    fn absent(&mut self, had_before: bool) -> RemoteResult<()> {
        self.state(if had_before { State::Delete } else { State::NoChange })
    }

    pub fn send_node(&mut self, after: Option<&Tree>, before: Option<&Tree>) -> RemoteResult<()> {
        let Some(after) = after else {
            return self.absent(before.is_some());
        };
        match before {
            Some(before) if after.same(before) => self.state(State::NoChange),
            Some(before) if after.is_same_node(before) && after.kind() == before.kind() => {
                trace!(node = %after, "change");
                self.state(State::Change)?;
                self.enc.str(&after.variant_info().type_name())?;
                self.send_body(after, Some(before))
            }
            _ => {
                trace!(node = %after, "add");
                self.state(State::Add)?;
                self.enc.str(&after.variant_info().type_name())?;
                write_id(&mut self.enc, after.id())?;
                self.send_body(after, None)
            }
        }
    }

    fn send_body(&mut self, after: &Tree, before: Option<&Tree>) -> RemoteResult<()> {
        self.send_space(Some(after.prefix()), before.map(Tree::prefix))?;
        self.send_markers(after.markers(), before.map(Tree::markers))?;
        after.zip_fields(before, self)
    }

    pub fn send_space(&mut self, after: Option<&Space>, before: Option<&Space>) -> RemoteResult<()> {
        match (after, before) {
            (None, before) => self.absent(before.is_some()),
            (Some(a), Some(b)) if a.same(b) || a == b => self.state(State::NoChange),
            (Some(a), _) => {
                self.state(State::Add)?;
                write_space(&mut self.enc, a)
            }
        }
    }

    pub fn send_markers(&mut self, after: &Markers, before: Option<&Markers>) -> RemoteResult<()> {
        match before {
            Some(b) if after.same(b) || after == b => self.state(State::NoChange),
            _ => {
                self.state(State::Add)?;
                write_markers(&mut self.enc, after)
            }
        }
    }

    pub fn send_value<V: Value>(&mut self, after: Option<&V>, before: Option<&V>) -> RemoteResult<()> {
        match (after, before) {
            (None, before) => self.absent(before.is_some()),
            (Some(a), Some(b)) if a.same(b) || a == b => self.state(State::NoChange),
            (Some(a), _) => {
                self.state(State::Add)?;
                write_value(&mut self.enc, &a.to_wire())
            }
        }
    }

    /// A type attribution, framed like a value.
    pub fn send_typed_value(&mut self, after: Option<&TypeId>, before: Option<&TypeId>) -> RemoteResult<()> {
        match (after, before) {
            (None, before) => self.absent(before.is_some()),
            (Some(a), Some(b)) if a == b => self.state(State::NoChange),
            (Some(a), _) => {
                self.state(State::Add)?;
                self.send_type(*a)
            }
        }
    }

    /// The full type on first use in this session, the bare handle after.
    fn send_type(&mut self, id: TypeId) -> RemoteResult<()> {
        if let Some(handle) = self.ctx.sent_ref(id) {
            self.enc.u32(handle)?;
            return Ok(());
        }
        let ty = self.ctx.types().get(id)?.clone();
        let registry = Arc::clone(self.ctx.registry());
        let (type_name, serializer) = registry.serializer(ty.kind_name())?;
        let handle = self.ctx.allocate_ref(id);
        self.enc.begin_map()?;
        self.enc.str("@c")?.str(type_name)?;
        self.enc.str("@ref")?.u32(handle)?;
        serializer(&ty, self)?;
        self.enc.end()?;
        Ok(())
    }

    pub fn send_right_padded<T: Field>(
        &mut self,
        after: Option<&RightPadded<T>>,
        before: Option<&RightPadded<T>>,
        slot: SlotInfo,
    ) -> RemoteResult<()> {
        let Some(after) = after else {
            return self.absent(before.is_some());
        };
        if before.is_some_and(|b| after.same(b)) {
            return self.state(State::NoChange);
        }
        self.state(if before.is_some() { State::Change } else { State::Add })?;
        T::zip_field(Some(after.element()), before.map(RightPadded::element), self, slot)?;
        self.send_space(Some(after.after()), before.map(RightPadded::after))?;
        self.send_markers(after.markers(), before.map(RightPadded::markers))
    }

    pub fn send_left_padded<T: Field>(
        &mut self,
        after: Option<&LeftPadded<T>>,
        before: Option<&LeftPadded<T>>,
        slot: SlotInfo,
    ) -> RemoteResult<()> {
        let Some(after) = after else {
            return self.absent(before.is_some());
        };
        if before.is_some_and(|b| after.same(b)) {
            return self.state(State::NoChange);
        }
        self.state(if before.is_some() { State::Change } else { State::Add })?;
        self.send_space(Some(after.before()), before.map(LeftPadded::before))?;
        T::zip_field(Some(after.element()), before.map(LeftPadded::element), self, slot)?;
        self.send_markers(after.markers(), before.map(LeftPadded::markers))
    }

    pub fn send_container<T: Field>(
        &mut self,
        after: Option<&Container<T>>,
        before: Option<&Container<T>>,
        slot: SlotInfo,
    ) -> RemoteResult<()> {
        let Some(after) = after else {
            return self.absent(before.is_some());
        };
        if before.is_some_and(|b| after.same(b)) {
            return self.state(State::NoChange);
        }
        self.state(if before.is_some() { State::Change } else { State::Add })?;
        self.send_space(Some(after.before()), before.map(Container::before))?;
        self.send_nodes(
            after.padded_elements(),
            before.map(Container::padded_elements),
            slot.element(),
        )?;
        self.send_markers(after.markers(), before.map(Container::markers))
    }

    /// A list, each element matched to its previous version by id.
    ///
    /// Elements without an id (scalars, spaces) match by position.
    pub fn send_nodes<T: Field>(&mut self, after: &[T], before: Option<&[T]>, slot: SlotInfo) -> RemoteResult<()> {
        if let Some(before) = before {
            if after.len() == before.len() && after.iter().zip(before).all(|(a, b)| a.same(b)) {
                return self.state(State::NoChange);
            }
        }
        self.state(if before.is_some() { State::Change } else { State::Add })?;
        let before = before.unwrap_or(&[]);
        let positions = index_by_id(before)?;
        self.enc.u64(after.len() as u64)?;
        for (i, element) in after.iter().enumerate() {
            let previous = match element.element_id() {
                Some(id) => positions.get(&id).copied(),
                None => (i < before.len()).then_some(i),
            };
            match previous {
                Some(j) => self.enc.i64(j as i64)?,
                None => self.enc.i64(-1)?,
            };
            T::zip_field(Some(element), previous.map(|j| &before[j]), self, slot)?;
        }
        trace!(%slot, len = after.len(), "list");
        Ok(())
    }
}

fn index_by_id<T: Field>(elements: &[T]) -> RemoteResult<HashMap<Id, usize>> {
    let mut positions = HashMap::with_capacity(elements.len());
    for (i, element) in elements.iter().enumerate() {
        if let Some(id) = element.element_id() {
            if positions.insert(id, i).is_some() {
                return Err(LstError::DuplicateId { id }.into());
            }
        }
    }
    Ok(positions)
}

impl FieldZipper for SenderContext<'_, '_> {
    type Error = RemoteError;

    fn zip_tree(&mut self, after: Option<&Tree>, before: Option<&Tree>, _slot: SlotInfo) -> RemoteResult<()> {
        self.send_node(after, before)
    }

    fn zip_space(&mut self, after: Option<&Space>, before: Option<&Space>, _slot: SlotInfo) -> RemoteResult<()> {
        self.send_space(after, before)
    }

    fn zip_markers(&mut self, after: &Markers, before: Option<&Markers>, _slot: SlotInfo) -> RemoteResult<()> {
        self.send_markers(after, before)
    }

    fn zip_value<V: Value>(&mut self, after: Option<&V>, before: Option<&V>, _slot: SlotInfo) -> RemoteResult<()> {
        self.send_value(after, before)
    }

    fn zip_type(&mut self, after: Option<&TypeId>, before: Option<&TypeId>, _slot: SlotInfo) -> RemoteResult<()> {
        self.send_typed_value(after, before)
    }

    fn zip_right_padded<T: Field>(
        &mut self,
        after: Option<&RightPadded<T>>,
        before: Option<&RightPadded<T>>,
        slot: SlotInfo,
    ) -> RemoteResult<()> {
        self.send_right_padded(after, before, slot)
    }

    fn zip_left_padded<T: Field>(
        &mut self,
        after: Option<&LeftPadded<T>>,
        before: Option<&LeftPadded<T>>,
        slot: SlotInfo,
    ) -> RemoteResult<()> {
        self.send_left_padded(after, before, slot)
    }

    fn zip_container<T: Field>(
        &mut self,
        after: Option<&Container<T>>,
        before: Option<&Container<T>>,
        slot: SlotInfo,
    ) -> RemoteResult<()> {
        self.send_container(after, before, slot)
    }

    fn zip_list<T: Field>(&mut self, after: &[T], before: Option<&[T]>, slot: SlotInfo) -> RemoteResult<()> {
        self.send_nodes(after, before, slot)
    }
}

impl TypeFieldVisitor for SenderContext<'_, '_> {
    fn flags(&mut self, name: &'static str, value: &mut u64) -> RemoteResult<()> {
        self.enc.str(name)?.u64(*value)?;
        Ok(())
    }

    fn string(&mut self, name: &'static str, value: &mut String) -> RemoteResult<()> {
        self.enc.str(name)?.str(value)?;
        Ok(())
    }

    fn strings(&mut self, name: &'static str, value: &mut Vec<String>) -> RemoteResult<()> {
        self.enc.str(name)?.array(value.len() as u64)?;
        for s in value.iter() {
            self.enc.str(s)?;
        }
        Ok(())
    }

    fn type_ref(&mut self, name: &'static str, value: &mut Option<TypeId>) -> RemoteResult<()> {
        self.enc.str(name)?;
        match value {
            Some(id) => self.send_type(*id),
            None => {
                self.enc.null()?;
                Ok(())
            }
        }
    }

    fn type_refs(&mut self, name: &'static str, value: &mut Vec<TypeId>) -> RemoteResult<()> {
        self.enc.str(name)?.array(value.len() as u64)?;
        for id in value.iter() {
            self.send_type(*id)?;
        }
        Ok(())
    }
}
