// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Applies an encoded diff to the receiver's copy of a tree.
//!
//! The receiver mirrors the sender field for field through [`FieldMapper`].
//! New nodes start from the variant's placeholder and have every field
//! overwritten. Changed nodes start from the previous version, so fields
//! framed `NO_CHANGE` keep their previous allocation.

use minicbor::data::Type;
use minicbor::Decoder;
use rewrite_core::{Container, LeftPadded, Markers, RightPadded, Space, TypeId};
use rewrite_tree::field::{Field, FieldMapper, SlotInfo, Value};
use rewrite_tree::Tree;
use tracing::trace;

use crate::codec::{read_array_len, read_id, read_len, read_markers, read_space, read_state, read_str, read_value, State};
use crate::context::RemotingContext;
use crate::error::{RemoteError, RemoteResult};
use crate::java_types::TypeFieldVisitor;

/// One decoding pass over a message.
pub struct ReceiverContext<'a, 'b> {
    ctx: &'a mut RemotingContext,
    dec: Decoder<'b>,
    depth: usize,
}

fn required<T>(value: Option<T>, slot: SlotInfo) -> RemoteResult<T> {
    value.ok_or_else(|| RemoteError::malformed("element", format!("nothing in {slot}")))
}

fn previous<T>(before: Option<T>, what: &'static str) -> RemoteResult<T> {
    before.ok_or_else(|| RemoteError::malformed("previous value for CHANGE", what))
}

impl<'a, 'b> ReceiverContext<'a, 'b> {
    pub fn new(ctx: &'a mut RemotingContext, dec: Decoder<'b>) -> Self {
        Self { ctx, dec, depth: 0 }
    }

    /// Fail if the message has bytes past the root.
    pub fn finish(&self) -> RemoteResult<()> {
        let rest = self.dec.input().len().saturating_sub(self.dec.position());
        if rest > 0 {
            return Err(RemoteError::malformed("end of message", format!("{rest} trailing bytes")));
        }
        Ok(())
    }

    fn enter(&mut self) -> RemoteResult<()> {
        self.depth += 1;
        if self.depth > self.ctx.config().max_depth {
            return Err(RemoteError::DecodeLimit("max_depth"));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expect_key(&mut self, name: &'static str) -> RemoteResult<()> {
        let key = read_str(&mut self.dec, self.ctx.config())?;
        if key != name {
            return Err(RemoteError::malformed(name, key));
        }
        Ok(())
    }

    pub fn receive_node(&mut self, before: Option<&Tree>) -> RemoteResult<Option<Tree>> {
        match read_state(&mut self.dec)? {
            State::NoChange => Ok(before.cloned()),
            State::Delete => Ok(None),
            State::Add => {
                let type_name = read_str(&mut self.dec, self.ctx.config())?;
                let placeholder = self.ctx.factory().create(type_name)?;
                let id = read_id(&mut self.dec)?;
                trace!(kind = placeholder.kind(), %id, "add");
                self.receive_body(placeholder.with_id(id)).map(Some)
            }
            State::Change => {
                let type_name = read_str(&mut self.dec, self.ctx.config())?;
                let info = self.ctx.factory().resolve(type_name)?;
                let before = previous(before, "node")?;
                if info.kind != before.kind() {
                    return Err(RemoteError::malformed("node of the previous kind", info.kind));
                }
                trace!(node = %before, "change");
                self.receive_body(before.clone()).map(Some)
            }
        }
    }

    fn receive_body(&mut self, tree: Tree) -> RemoteResult<Tree> {
        self.enter()?;
        let prefix = self.receive_space(Some(tree.prefix()))?.unwrap_or_else(Space::empty);
        let markers = self.receive_markers(tree.markers())?;
        let tree = tree.with_prefix(prefix).with_markers(markers).map_fields(self)?;
        self.leave();
        Ok(tree)
    }

    pub fn receive_space(&mut self, before: Option<&Space>) -> RemoteResult<Option<Space>> {
        match read_state(&mut self.dec)? {
            State::NoChange => Ok(before.cloned()),
            State::Delete => Ok(None),
            State::Add | State::Change => Ok(Some(read_space(&mut self.dec, self.ctx.config())?)),
        }
    }

    pub fn receive_markers(&mut self, before: &Markers) -> RemoteResult<Markers> {
        match read_state(&mut self.dec)? {
            State::NoChange => Ok(before.clone()),
            State::Delete => Ok(Markers::empty()),
            State::Add | State::Change => read_markers(&mut self.dec, self.ctx.config()),
        }
    }

    pub fn receive_value<V: Value>(&mut self, before: Option<&V>, slot: SlotInfo) -> RemoteResult<Option<V>> {
        match read_state(&mut self.dec)? {
            State::NoChange => Ok(before.cloned()),
            State::Delete => Ok(None),
            State::Add | State::Change => {
                let wire = read_value(&mut self.dec, self.ctx.config())?;
                V::from_wire(&wire)
                    .map(Some)
                    .ok_or_else(|| RemoteError::malformed("value of the slot's type", format!("{wire:?} in {slot}")))
            }
        }
    }

    pub fn receive_typed_value(&mut self, before: Option<&TypeId>) -> RemoteResult<Option<TypeId>> {
        match read_state(&mut self.dec)? {
            State::NoChange => Ok(before.copied()),
            State::Delete => Ok(None),
            State::Add | State::Change => self.receive_type().map(Some),
        }
    }

    /// A bare handle seen earlier in the session, or a full definition.
    fn receive_type(&mut self) -> RemoteResult<TypeId> {
        self.enter()?;
        let id = match self.dec.datatype()? {
            Type::U8 | Type::U16 | Type::U32 | Type::U64 => {
                let handle = self.dec.u32()?;
                self.ctx.resolve_ref(handle)?
            }
            Type::Map | Type::MapIndef => self.receive_type_definition()?,
            other => return Err(RemoteError::malformed("type reference", format!("{other:?}"))),
        };
        self.leave();
        Ok(id)
    }

    fn receive_type_definition(&mut self) -> RemoteResult<TypeId> {
        let len = self.dec.map()?;
        self.expect_key("@c")?;
        let type_name = read_str(&mut self.dec, self.ctx.config())?;
        let deserializer = self.ctx.registry().deserializer(type_name)?;
        self.expect_key("@ref")?;
        let handle = self.dec.u32()?;
        // Bound before the fields so that cycles back to this type resolve.
        let id = self.ctx.bind_ref(handle)?;
        let ty = deserializer(self)?;
        if len.is_none() {
            if self.dec.datatype()? != Type::Break {
                return Err(RemoteError::malformed("end of type definition", format!("{:?}", self.dec.datatype()?)));
            }
            self.dec.set_position(self.dec.position() + 1);
        }
        self.ctx.types_mut().fill(id, ty)?;
        Ok(id)
    }

    pub fn receive_right_padded<T: Field>(
        &mut self,
        before: Option<&RightPadded<T>>,
        slot: SlotInfo,
    ) -> RemoteResult<Option<RightPadded<T>>> {
        match read_state(&mut self.dec)? {
            State::NoChange => Ok(before.cloned()),
            State::Delete => Ok(None),
            State::Add => {
                let element = required(T::map_field(None, self, slot)?, slot)?;
                let after = self.receive_space(None)?.unwrap_or_else(Space::empty);
                let markers = self.receive_markers(&Markers::empty())?;
                Ok(Some(RightPadded::new(element, after, markers)))
            }
            State::Change => {
                let before = previous(before, "right-padded")?;
                let element = required(T::map_field(Some(before.element()), self, slot)?, slot)?;
                let after = self.receive_space(Some(before.after()))?.unwrap_or_else(Space::empty);
                let markers = self.receive_markers(before.markers())?;
                Ok(Some(before.with_element(element).with_after(after).with_markers(markers)))
            }
        }
    }

    pub fn receive_left_padded<T: Field>(
        &mut self,
        before: Option<&LeftPadded<T>>,
        slot: SlotInfo,
    ) -> RemoteResult<Option<LeftPadded<T>>> {
        match read_state(&mut self.dec)? {
            State::NoChange => Ok(before.cloned()),
            State::Delete => Ok(None),
            State::Add => {
                let space = self.receive_space(None)?.unwrap_or_else(Space::empty);
                let element = required(T::map_field(None, self, slot)?, slot)?;
                let markers = self.receive_markers(&Markers::empty())?;
                Ok(Some(LeftPadded::new(space, element, markers)))
            }
            State::Change => {
                let before = previous(before, "left-padded")?;
                let space = self.receive_space(Some(before.before()))?.unwrap_or_else(Space::empty);
                let element = required(T::map_field(Some(before.element()), self, slot)?, slot)?;
                let markers = self.receive_markers(before.markers())?;
                Ok(Some(before.with_before(space).with_element(element).with_markers(markers)))
            }
        }
    }

    pub fn receive_container<T: Field>(
        &mut self,
        before: Option<&Container<T>>,
        slot: SlotInfo,
    ) -> RemoteResult<Option<Container<T>>> {
        match read_state(&mut self.dec)? {
            State::NoChange => Ok(before.cloned()),
            State::Delete => Ok(None),
            State::Add => {
                let space = self.receive_space(None)?.unwrap_or_else(Space::empty);
                let elements = self.receive_nodes(&[], slot.element())?;
                let markers = self.receive_markers(&Markers::empty())?;
                Ok(Some(Container::new(space, elements, markers)))
            }
            State::Change => {
                let before = previous(before, "container")?;
                let space = self.receive_space(Some(before.before()))?.unwrap_or_else(Space::empty);
                let elements = self.receive_nodes(before.padded_elements(), slot.element())?;
                let markers = self.receive_markers(before.markers())?;
                Ok(Some(
                    before
                        .with_before(space)
                        .with_padded_elements(elements)
                        .with_markers(markers),
                ))
            }
        }
    }

    /// A list: the new length, then each element framed against the
    /// previous element at the index the sender matched it to.
    pub fn receive_nodes<T: Field>(&mut self, before: &[T], slot: SlotInfo) -> RemoteResult<Vec<T>> {
        match read_state(&mut self.dec)? {
            State::NoChange => Ok(before.to_vec()),
            State::Delete => Ok(Vec::new()),
            State::Add | State::Change => {
                let len = read_len(&mut self.dec, self.ctx.config())?;
                let mut elements = Vec::with_capacity(len);
                for _ in 0..len {
                    let index = self.dec.i64()?;
                    let previous = if index < 0 {
                        None
                    } else {
                        let element = usize::try_from(index).ok().and_then(|i| before.get(i));
                        Some(element.ok_or_else(|| RemoteError::malformed("index into the previous list", index))?)
                    };
                    elements.push(required(T::map_field(previous, self, slot)?, slot)?);
                }
                trace!(%slot, len, "list");
                Ok(elements)
            }
        }
    }
}

impl FieldMapper for ReceiverContext<'_, '_> {
    type Error = RemoteError;

    fn map_tree(&mut self, before: Option<&Tree>, _slot: SlotInfo) -> RemoteResult<Option<Tree>> {
        self.receive_node(before)
    }

    fn map_space(&mut self, before: Option<&Space>, _slot: SlotInfo) -> RemoteResult<Option<Space>> {
        self.receive_space(before)
    }

    fn map_markers(&mut self, before: &Markers, _slot: SlotInfo) -> RemoteResult<Markers> {
        self.receive_markers(before)
    }

    fn map_value<V: Value>(&mut self, before: Option<&V>, slot: SlotInfo) -> RemoteResult<Option<V>> {
        self.receive_value(before, slot)
    }

    fn map_type(&mut self, before: Option<&TypeId>, _slot: SlotInfo) -> RemoteResult<Option<TypeId>> {
        self.receive_typed_value(before)
    }

    fn map_right_padded<T: Field>(
        &mut self,
        before: Option<&RightPadded<T>>,
        slot: SlotInfo,
    ) -> RemoteResult<Option<RightPadded<T>>> {
        self.receive_right_padded(before, slot)
    }

    fn map_left_padded<T: Field>(
        &mut self,
        before: Option<&LeftPadded<T>>,
        slot: SlotInfo,
    ) -> RemoteResult<Option<LeftPadded<T>>> {
        self.receive_left_padded(before, slot)
    }

    fn map_container<T: Field>(
        &mut self,
        before: Option<&Container<T>>,
        slot: SlotInfo,
    ) -> RemoteResult<Option<Container<T>>> {
        self.receive_container(before, slot)
    }

    fn map_list<T: Field>(&mut self, before: &[T], slot: SlotInfo) -> RemoteResult<Vec<T>> {
        self.receive_nodes(before, slot)
    }
}

impl TypeFieldVisitor for ReceiverContext<'_, '_> {
    fn flags(&mut self, name: &'static str, value: &mut u64) -> RemoteResult<()> {
        self.expect_key(name)?;
        *value = self.dec.u64()?;
        Ok(())
    }

    fn string(&mut self, name: &'static str, value: &mut String) -> RemoteResult<()> {
        self.expect_key(name)?;
        *value = read_str(&mut self.dec, self.ctx.config())?.to_string();
        Ok(())
    }

    fn strings(&mut self, name: &'static str, value: &mut Vec<String>) -> RemoteResult<()> {
        self.expect_key(name)?;
        let len = read_array_len(&mut self.dec, self.ctx.config())?;
        value.clear();
        for _ in 0..len {
            value.push(read_str(&mut self.dec, self.ctx.config())?.to_string());
        }
        Ok(())
    }

    fn type_ref(&mut self, name: &'static str, value: &mut Option<TypeId>) -> RemoteResult<()> {
        self.expect_key(name)?;
        *value = if self.dec.datatype()? == Type::Null {
            self.dec.null()?;
            None
        } else {
            Some(self.receive_type()?)
        };
        Ok(())
    }

    fn type_refs(&mut self, name: &'static str, value: &mut Vec<TypeId>) -> RemoteResult<()> {
        self.expect_key(name)?;
        let len = read_array_len(&mut self.dec, self.ctx.config())?;
        value.clear();
        for _ in 0..len {
            value.push(self.receive_type()?);
        }
        Ok(())
    }
}
