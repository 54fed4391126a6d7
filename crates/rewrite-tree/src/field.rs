// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Field-level traversal shared by the visitor and the remoting codec.
//!
//! Every node declares its fields once, in source order. From that single
//! declaration the node macro derives two traversals:
//!
//! - `map_fields` rebuilds a node from a [`FieldMapper`], one slot at a time.
//!   The visitor maps by visiting; the receiver maps by decoding.
//! - `zip_fields` walks a node alongside its previous version and hands each
//!   pair of slots to a [`FieldZipper`]. The sender zips by encoding.
//!
//! Slots come in a small number of kinds: a subtree, a [`Space`], a scalar
//! [`Value`], a type reference, the three envelopes, and lists. [`Field`]
//! dispatches a slot value to the mapper method for its kind; [`Slot`] adds
//! the required/optional distinction on top.

use std::fmt;
use std::sync::Arc;

use rewrite_core::{
    Container, HasId, Id, LeftPadded, LstError, LstResult, Markers, PrimitiveKind, RightPadded,
    Same, Space, TypeId,
};

use crate::location::Location;
use crate::tree::Tree;

/// Where a slot lives: owning node kind, field name, and trivia location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotInfo {
    pub node: &'static str,
    pub name: &'static str,
    pub location: Option<Location>,
}

impl SlotInfo {
    pub const fn new(node: &'static str, name: &'static str, location: Option<Location>) -> Self {
        Self {
            node,
            name,
            location,
        }
    }

    /// The slot of an element inside a container at this slot.
    pub fn element(self) -> Self {
        Self {
            location: self.location.and_then(|loc| loc.element_suffix()).or(self.location),
            ..self
        }
    }

    fn removed(self) -> LstError {
        LstError::RequiredSlotRemoved {
            node: self.node,
            slot: self.name,
        }
    }
}

impl fmt::Display for SlotInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.node, self.name)
    }
}

// ============================================================================
// Scalar values
// ============================================================================

/// The wire shape of a scalar field.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
}

impl WireValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            WireValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// A scalar field: a flag, a name, a keyword, an operator.
pub trait Value: Clone + Same + PartialEq + fmt::Debug {
    fn to_wire(&self) -> WireValue;
    fn from_wire(value: &WireValue) -> Option<Self>;
    fn placeholder() -> Self;
}

impl Value for bool {
    fn to_wire(&self) -> WireValue {
        WireValue::Bool(*self)
    }

    fn from_wire(value: &WireValue) -> Option<Self> {
        match value {
            WireValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn placeholder() -> Self {
        false
    }
}

impl Value for Arc<str> {
    fn to_wire(&self) -> WireValue {
        WireValue::Str(Arc::clone(self))
    }

    fn from_wire(value: &WireValue) -> Option<Self> {
        match value {
            WireValue::Str(s) => Some(Arc::clone(s)),
            _ => None,
        }
    }

    fn placeholder() -> Self {
        Arc::from("")
    }
}

impl Value for PrimitiveKind {
    fn to_wire(&self) -> WireValue {
        WireValue::Str(Arc::from(self.keyword()))
    }

    fn from_wire(value: &WireValue) -> Option<Self> {
        value.as_str().and_then(PrimitiveKind::from_keyword)
    }

    fn placeholder() -> Self {
        PrimitiveKind::None
    }
}

// ============================================================================
// Mapper and zipper
// ============================================================================

/// Rebuilds slots one at a time.
///
/// `before` is the current slot value, or `None` for an absent optional slot.
/// Returning `None` removes the value. The envelope and list methods default
/// to a structural walk that maps each part through the other methods.
pub trait FieldMapper {
    type Error: From<LstError>;

    fn map_tree(&mut self, before: Option<&Tree>, slot: SlotInfo) -> Result<Option<Tree>, Self::Error>;

    fn map_space(&mut self, before: Option<&Space>, slot: SlotInfo) -> Result<Option<Space>, Self::Error>;

    fn map_markers(&mut self, before: &Markers, slot: SlotInfo) -> Result<Markers, Self::Error>;

    fn map_value<V: Value>(&mut self, before: Option<&V>, slot: SlotInfo) -> Result<Option<V>, Self::Error>;

    fn map_type(&mut self, before: Option<&TypeId>, slot: SlotInfo) -> Result<Option<TypeId>, Self::Error>;

    fn map_right_padded<T: Field>(
        &mut self,
        before: Option<&RightPadded<T>>,
        slot: SlotInfo,
    ) -> Result<Option<RightPadded<T>>, Self::Error> {
        walk_right_padded(self, before, slot)
    }

    fn map_left_padded<T: Field>(
        &mut self,
        before: Option<&LeftPadded<T>>,
        slot: SlotInfo,
    ) -> Result<Option<LeftPadded<T>>, Self::Error> {
        walk_left_padded(self, before, slot)
    }

    fn map_container<T: Field>(
        &mut self,
        before: Option<&Container<T>>,
        slot: SlotInfo,
    ) -> Result<Option<Container<T>>, Self::Error> {
        walk_container(self, before, slot)
    }

    fn map_list<T: Field>(&mut self, before: &[T], slot: SlotInfo) -> Result<Vec<T>, Self::Error> {
        walk_list(self, before, slot)
    }
}

pub fn walk_right_padded<M: FieldMapper + ?Sized, T: Field>(
    m: &mut M,
    before: Option<&RightPadded<T>>,
    slot: SlotInfo,
) -> Result<Option<RightPadded<T>>, M::Error> {
    let Some(rp) = before else {
        return Ok(None);
    };
    let Some(element) = T::map_field(Some(rp.element()), m, slot)? else {
        return Ok(None);
    };
    let after = m.map_space(Some(rp.after()), slot)?.unwrap_or_else(Space::empty);
    let markers = m.map_markers(rp.markers(), slot)?;
    Ok(Some(
        rp.with_element(element).with_after(after).with_markers(markers),
    ))
}

pub fn walk_left_padded<M: FieldMapper + ?Sized, T: Field>(
    m: &mut M,
    before: Option<&LeftPadded<T>>,
    slot: SlotInfo,
) -> Result<Option<LeftPadded<T>>, M::Error> {
    let Some(lp) = before else {
        return Ok(None);
    };
    let space = m.map_space(Some(lp.before()), slot)?.unwrap_or_else(Space::empty);
    let Some(element) = T::map_field(Some(lp.element()), m, slot)? else {
        return Ok(None);
    };
    let markers = m.map_markers(lp.markers(), slot)?;
    Ok(Some(
        lp.with_before(space).with_element(element).with_markers(markers),
    ))
}

pub fn walk_container<M: FieldMapper + ?Sized, T: Field>(
    m: &mut M,
    before: Option<&Container<T>>,
    slot: SlotInfo,
) -> Result<Option<Container<T>>, M::Error> {
    let Some(container) = before else {
        return Ok(None);
    };
    let space = m.map_space(Some(container.before()), slot)?.unwrap_or_else(Space::empty);
    let elements = m.map_list(container.padded_elements(), slot.element())?;
    let markers = m.map_markers(container.markers(), slot)?;
    Ok(Some(
        container
            .with_before(space)
            .with_padded_elements(elements)
            .with_markers(markers),
    ))
}

pub fn walk_list<M: FieldMapper + ?Sized, T: Field>(
    m: &mut M,
    before: &[T],
    slot: SlotInfo,
) -> Result<Vec<T>, M::Error> {
    let mut changed = false;
    let mut out = Vec::with_capacity(before.len());
    for item in before {
        match T::map_field(Some(item), m, slot)? {
            Some(mapped) => {
                changed |= !mapped.same(item);
                out.push(mapped);
            }
            None => changed = true,
        }
    }
    Ok(if changed { out } else { before.to_vec() })
}

/// Walks a slot alongside its previous version.
///
/// `before` is `None` when the enclosing node is new or the optional slot
/// was absent.
pub trait FieldZipper {
    type Error: From<LstError>;

    fn zip_tree(&mut self, after: Option<&Tree>, before: Option<&Tree>, slot: SlotInfo) -> Result<(), Self::Error>;

    fn zip_space(&mut self, after: Option<&Space>, before: Option<&Space>, slot: SlotInfo) -> Result<(), Self::Error>;

    fn zip_markers(&mut self, after: &Markers, before: Option<&Markers>, slot: SlotInfo) -> Result<(), Self::Error>;

    fn zip_value<V: Value>(&mut self, after: Option<&V>, before: Option<&V>, slot: SlotInfo) -> Result<(), Self::Error>;

    fn zip_type(&mut self, after: Option<&TypeId>, before: Option<&TypeId>, slot: SlotInfo) -> Result<(), Self::Error>;

    fn zip_right_padded<T: Field>(
        &mut self,
        after: Option<&RightPadded<T>>,
        before: Option<&RightPadded<T>>,
        slot: SlotInfo,
    ) -> Result<(), Self::Error>;

    fn zip_left_padded<T: Field>(
        &mut self,
        after: Option<&LeftPadded<T>>,
        before: Option<&LeftPadded<T>>,
        slot: SlotInfo,
    ) -> Result<(), Self::Error>;

    fn zip_container<T: Field>(
        &mut self,
        after: Option<&Container<T>>,
        before: Option<&Container<T>>,
        slot: SlotInfo,
    ) -> Result<(), Self::Error>;

    fn zip_list<T: Field>(&mut self, after: &[T], before: Option<&[T]>, slot: SlotInfo) -> Result<(), Self::Error>;
}

// ============================================================================
// Field and Slot
// ============================================================================

/// A value that can sit in a slot, dispatched to the mapper method of its kind.
pub trait Field: Clone + Same + Sized {
    fn map_field<M: FieldMapper + ?Sized>(
        before: Option<&Self>,
        m: &mut M,
        slot: SlotInfo,
    ) -> Result<Option<Self>, M::Error>;

    fn zip_field<Z: FieldZipper + ?Sized>(
        after: Option<&Self>,
        before: Option<&Self>,
        z: &mut Z,
        slot: SlotInfo,
    ) -> Result<(), Z::Error>;

    /// Identity used to match list elements across versions.
    fn element_id(&self) -> Option<Id> {
        None
    }
}

/// A value that can stand in for a field of a node under construction.
pub trait Placeholder {
    fn placeholder() -> Self;
}

/// A declared node field: required (`T`), optional (`Option<T>`) or a list.
pub trait Slot: Clone + Same + Sized {
    fn map_slot<M: FieldMapper + ?Sized>(&self, m: &mut M, slot: SlotInfo) -> Result<Self, M::Error>;

    fn zip_slot<Z: FieldZipper + ?Sized>(
        &self,
        before: Option<&Self>,
        z: &mut Z,
        slot: SlotInfo,
    ) -> Result<(), Z::Error>;

    fn placeholder() -> Self;
}

/// Map a required slot; removing it is an error.
pub fn map_required<T: Field, M: FieldMapper + ?Sized>(
    value: &T,
    m: &mut M,
    slot: SlotInfo,
) -> Result<T, M::Error> {
    T::map_field(Some(value), m, slot)?.ok_or_else(|| slot.removed().into())
}

impl<T: Field> Slot for Option<T> {
    fn map_slot<M: FieldMapper + ?Sized>(&self, m: &mut M, slot: SlotInfo) -> Result<Self, M::Error> {
        T::map_field(self.as_ref(), m, slot)
    }

    fn zip_slot<Z: FieldZipper + ?Sized>(
        &self,
        before: Option<&Self>,
        z: &mut Z,
        slot: SlotInfo,
    ) -> Result<(), Z::Error> {
        T::zip_field(self.as_ref(), before.and_then(Option::as_ref), z, slot)
    }

    fn placeholder() -> Self {
        None
    }
}

impl<T: Field> Slot for Vec<T> {
    fn map_slot<M: FieldMapper + ?Sized>(&self, m: &mut M, slot: SlotInfo) -> Result<Self, M::Error> {
        m.map_list(self, slot)
    }

    fn zip_slot<Z: FieldZipper + ?Sized>(
        &self,
        before: Option<&Self>,
        z: &mut Z,
        slot: SlotInfo,
    ) -> Result<(), Z::Error> {
        z.zip_list(self, before.map(Vec::as_slice), slot)
    }

    fn placeholder() -> Self {
        Vec::new()
    }
}

/// `Slot` for a required field whose type implements [`Field`] and [`Placeholder`].
macro_rules! required_slot {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::field::Slot for $ty {
                fn map_slot<M: $crate::field::FieldMapper + ?Sized>(
                    &self,
                    m: &mut M,
                    slot: $crate::field::SlotInfo,
                ) -> Result<Self, M::Error> {
                    $crate::field::map_required(self, m, slot)
                }

                fn zip_slot<Z: $crate::field::FieldZipper + ?Sized>(
                    &self,
                    before: Option<&Self>,
                    z: &mut Z,
                    slot: $crate::field::SlotInfo,
                ) -> Result<(), Z::Error> {
                    <$ty as $crate::field::Field>::zip_field(Some(self), before, z, slot)
                }

                fn placeholder() -> Self {
                    <$ty as $crate::field::Placeholder>::placeholder()
                }
            }
        )*
    };
}
pub(crate) use required_slot;

/// `Field`, `Placeholder` and required `Slot` for scalar [`Value`] types.
macro_rules! value_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::field::Field for $ty {
                fn map_field<M: $crate::field::FieldMapper + ?Sized>(
                    before: Option<&Self>,
                    m: &mut M,
                    slot: $crate::field::SlotInfo,
                ) -> Result<Option<Self>, M::Error> {
                    m.map_value(before, slot)
                }

                fn zip_field<Z: $crate::field::FieldZipper + ?Sized>(
                    after: Option<&Self>,
                    before: Option<&Self>,
                    z: &mut Z,
                    slot: $crate::field::SlotInfo,
                ) -> Result<(), Z::Error> {
                    z.zip_value(after, before, slot)
                }
            }

            impl $crate::field::Placeholder for $ty {
                fn placeholder() -> Self {
                    <$ty as $crate::field::Value>::placeholder()
                }
            }

            $crate::field::required_slot!($ty);
        )*
    };
}
pub(crate) use value_field;

value_field!(bool, Arc<str>, PrimitiveKind);

impl Field for Space {
    fn map_field<M: FieldMapper + ?Sized>(
        before: Option<&Self>,
        m: &mut M,
        slot: SlotInfo,
    ) -> Result<Option<Self>, M::Error> {
        m.map_space(before, slot)
    }

    fn zip_field<Z: FieldZipper + ?Sized>(
        after: Option<&Self>,
        before: Option<&Self>,
        z: &mut Z,
        slot: SlotInfo,
    ) -> Result<(), Z::Error> {
        z.zip_space(after, before, slot)
    }
}

impl Placeholder for Space {
    fn placeholder() -> Self {
        Space::empty()
    }
}

required_slot!(Space);

impl Field for TypeId {
    fn map_field<M: FieldMapper + ?Sized>(
        before: Option<&Self>,
        m: &mut M,
        slot: SlotInfo,
    ) -> Result<Option<Self>, M::Error> {
        m.map_type(before, slot)
    }

    fn zip_field<Z: FieldZipper + ?Sized>(
        after: Option<&Self>,
        before: Option<&Self>,
        z: &mut Z,
        slot: SlotInfo,
    ) -> Result<(), Z::Error> {
        z.zip_type(after, before, slot)
    }
}

impl<T: Field> Field for RightPadded<T> {
    fn map_field<M: FieldMapper + ?Sized>(
        before: Option<&Self>,
        m: &mut M,
        slot: SlotInfo,
    ) -> Result<Option<Self>, M::Error> {
        m.map_right_padded(before, slot)
    }

    fn zip_field<Z: FieldZipper + ?Sized>(
        after: Option<&Self>,
        before: Option<&Self>,
        z: &mut Z,
        slot: SlotInfo,
    ) -> Result<(), Z::Error> {
        z.zip_right_padded(after, before, slot)
    }

    fn element_id(&self) -> Option<Id> {
        self.element().element_id()
    }
}

impl<T: Field> Field for LeftPadded<T> {
    fn map_field<M: FieldMapper + ?Sized>(
        before: Option<&Self>,
        m: &mut M,
        slot: SlotInfo,
    ) -> Result<Option<Self>, M::Error> {
        m.map_left_padded(before, slot)
    }

    fn zip_field<Z: FieldZipper + ?Sized>(
        after: Option<&Self>,
        before: Option<&Self>,
        z: &mut Z,
        slot: SlotInfo,
    ) -> Result<(), Z::Error> {
        z.zip_left_padded(after, before, slot)
    }

    fn element_id(&self) -> Option<Id> {
        self.element().element_id()
    }
}

impl<T: Field> Field for Container<T> {
    fn map_field<M: FieldMapper + ?Sized>(
        before: Option<&Self>,
        m: &mut M,
        slot: SlotInfo,
    ) -> Result<Option<Self>, M::Error> {
        m.map_container(before, slot)
    }

    fn zip_field<Z: FieldZipper + ?Sized>(
        after: Option<&Self>,
        before: Option<&Self>,
        z: &mut Z,
        slot: SlotInfo,
    ) -> Result<(), Z::Error> {
        z.zip_container(after, before, slot)
    }
}

impl<T: Placeholder> Placeholder for RightPadded<T> {
    fn placeholder() -> Self {
        RightPadded::build(T::placeholder())
    }
}

impl<T: Placeholder> Placeholder for LeftPadded<T> {
    fn placeholder() -> Self {
        LeftPadded::build(T::placeholder())
    }
}

impl<T> Placeholder for Container<T> {
    fn placeholder() -> Self {
        Container::empty()
    }
}

impl<T: Field + Placeholder> Slot for RightPadded<T> {
    fn map_slot<M: FieldMapper + ?Sized>(&self, m: &mut M, slot: SlotInfo) -> Result<Self, M::Error> {
        map_required(self, m, slot)
    }

    fn zip_slot<Z: FieldZipper + ?Sized>(
        &self,
        before: Option<&Self>,
        z: &mut Z,
        slot: SlotInfo,
    ) -> Result<(), Z::Error> {
        Self::zip_field(Some(self), before, z, slot)
    }

    fn placeholder() -> Self {
        <Self as Placeholder>::placeholder()
    }
}

impl<T: Field + Placeholder> Slot for LeftPadded<T> {
    fn map_slot<M: FieldMapper + ?Sized>(&self, m: &mut M, slot: SlotInfo) -> Result<Self, M::Error> {
        map_required(self, m, slot)
    }

    fn zip_slot<Z: FieldZipper + ?Sized>(
        &self,
        before: Option<&Self>,
        z: &mut Z,
        slot: SlotInfo,
    ) -> Result<(), Z::Error> {
        Self::zip_field(Some(self), before, z, slot)
    }

    fn placeholder() -> Self {
        <Self as Placeholder>::placeholder()
    }
}

impl<T: Field> Slot for Container<T> {
    fn map_slot<M: FieldMapper + ?Sized>(&self, m: &mut M, slot: SlotInfo) -> Result<Self, M::Error> {
        map_required(self, m, slot)
    }

    fn zip_slot<Z: FieldZipper + ?Sized>(
        &self,
        before: Option<&Self>,
        z: &mut Z,
        slot: SlotInfo,
    ) -> Result<(), Z::Error> {
        Self::zip_field(Some(self), before, z, slot)
    }

    fn placeholder() -> Self {
        Container::empty()
    }
}

// ============================================================================
// Unpadded access
// ============================================================================

/// The bare view of an envelope-typed field.
///
/// Node getters for padded fields return [`Unpadded::bare`]; the matching
/// `with_*` rewraps a bare value into the existing envelope so its trivia
/// survives.
pub trait Unpadded: Sized {
    type Bare;

    fn bare(&self) -> Self::Bare;

    fn rewrap(&self, bare: Self::Bare) -> LstResult<Self>;

    /// Wrap a bare value with empty trivia.
    fn wrap(bare: Self::Bare) -> LstResult<Self>;

    /// Whether an optional field should collapse to `None` for this value.
    fn is_vacant(_bare: &Self::Bare) -> bool {
        false
    }
}

impl<T: Clone + Same> Unpadded for RightPadded<T> {
    type Bare = T;

    fn bare(&self) -> T {
        self.element().clone()
    }

    fn rewrap(&self, bare: T) -> LstResult<Self> {
        Ok(self.with_element(bare))
    }

    fn wrap(bare: T) -> LstResult<Self> {
        Ok(RightPadded::build(bare))
    }
}

impl<T: Clone + Same> Unpadded for LeftPadded<T> {
    type Bare = T;

    fn bare(&self) -> T {
        self.element().clone()
    }

    fn rewrap(&self, bare: T) -> LstResult<Self> {
        Ok(self.with_element(bare))
    }

    fn wrap(bare: T) -> LstResult<Self> {
        Ok(LeftPadded::build(bare))
    }
}

impl<T: Clone + Same + HasId> Unpadded for Container<T> {
    type Bare = Vec<T>;

    fn bare(&self) -> Vec<T> {
        self.elements()
    }

    fn rewrap(&self, bare: Vec<T>) -> LstResult<Self> {
        self.with_elements(bare)
    }

    fn wrap(bare: Vec<T>) -> LstResult<Self> {
        Container::empty().with_elements(bare)
    }

    fn is_vacant(bare: &Vec<T>) -> bool {
        bare.is_empty()
    }
}

impl<T: Clone + Same + HasId> Unpadded for Vec<RightPadded<T>> {
    type Bare = Vec<T>;

    fn bare(&self) -> Vec<T> {
        RightPadded::get_elements(self)
    }

    fn rewrap(&self, bare: Vec<T>) -> LstResult<Self> {
        RightPadded::with_elements(self, bare)
    }

    fn wrap(bare: Vec<T>) -> LstResult<Self> {
        RightPadded::with_elements(&[], bare)
    }
}

impl<X: Unpadded> Unpadded for Option<X> {
    type Bare = Option<X::Bare>;

    fn bare(&self) -> Self::Bare {
        self.as_ref().map(X::bare)
    }

    fn rewrap(&self, bare: Self::Bare) -> LstResult<Self> {
        match (self, bare) {
            (_, None) => Ok(None),
            // An envelope that is already empty stays put.
            (Some(current), Some(b)) if X::is_vacant(&b) && !X::is_vacant(&current.bare()) => Ok(None),
            (Some(current), Some(b)) => current.rewrap(b).map(Some),
            (None, bare) => Self::wrap(bare),
        }
    }

    fn wrap(bare: Self::Bare) -> LstResult<Self> {
        match bare {
            Some(b) if !X::is_vacant(&b) => X::wrap(b).map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_slot_uses_the_suffix_location() {
        let slot = SlotInfo::new(
            "MethodInvocation",
            "arguments",
            Some(Location::MethodInvocationArguments),
        );
        assert_eq!(
            slot.element().location,
            Some(Location::MethodInvocationArgumentSuffix)
        );
        assert_eq!(slot.to_string(), "MethodInvocation.arguments");

        let plain = SlotInfo::new("Block", "statements", Some(Location::BlockStatementSuffix));
        assert_eq!(plain.element(), plain);
    }

    #[test]
    fn scalar_values_round_trip_through_wire_shape() {
        assert_eq!(bool::from_wire(&true.to_wire()), Some(true));
        let name: Arc<str> = Arc::from("x");
        assert_eq!(<Arc<str>>::from_wire(&name.to_wire()).as_deref(), Some("x"));
        assert_eq!(
            PrimitiveKind::from_wire(&PrimitiveKind::Int.to_wire()),
            Some(PrimitiveKind::Int)
        );
        assert_eq!(bool::from_wire(&WireValue::Int(1)), None);
    }

    #[test]
    fn optional_unpadded_collapses_empty_containers() {
        let none: Option<Container<crate::tree::Tree>> = None;
        assert!(none.rewrap(Some(Vec::new())).unwrap().is_none());
        assert!(<Option<Container<crate::tree::Tree>>>::wrap(None).unwrap().is_none());

        let pass = crate::tree::Tree::placeholder_of("Pass").unwrap();
        let full = Some(Container::empty().with_elements(vec![pass]).unwrap());
        assert!(full.rewrap(Some(Vec::new())).unwrap().is_none());
    }

    #[test]
    fn rewrapping_the_bare_value_keeps_the_envelope() {
        let pass = crate::tree::Tree::placeholder_of("Pass").unwrap();

        let empty: Option<Container<crate::tree::Tree>> = Some(Container::empty());
        assert!(empty.rewrap(empty.bare()).unwrap().same(&empty));

        let full = Some(Container::empty().with_elements(vec![pass.clone()]).unwrap());
        assert!(full.rewrap(full.bare()).unwrap().same(&full));

        let absent: Option<Container<crate::tree::Tree>> = None;
        assert!(absent.rewrap(absent.bare()).unwrap().is_none());

        let list = vec![RightPadded::build(pass.clone())];
        assert!(list.rewrap(list.bare()).unwrap().same(&list));

        let left = LeftPadded::build(pass.clone());
        assert!(left.rewrap(left.bare()).unwrap().same(&left));

        let right = RightPadded::build(pass);
        assert!(right.rewrap(right.bare()).unwrap().same(&right));
    }
}
