// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The node declaration macro.
//!
//! `lst_node!` turns a field list into an immutable node struct plus
//! everything derived from that list: constructor, getters, identity
//! preserving `with_*` methods, the padding facet, and the field traversal
//! used by visitors and the codec.
//!
//! ```text
//! lst_node! {
//!     /// Doc comment.
//!     Binary: Java "J$Binary" [EXPRESSION] {
//!         left: Tree,
//!         operator: #padded LeftPadded<BinaryOperator> => BinaryOperator,
//!         right: Tree,
//!         ty: Option<TypeId>,
//!     }
//! }
//! ```
//!
//! Fields marked `#padded` hold an envelope; their plain getter returns the
//! bare value and the envelope is reached through `node.padding()`. The
//! optional `=> Location` names where the field's own trivia sits.

/// Getter and wither for one field.
macro_rules! node_accessor {
    ($node:ident, $fname:ident, $fty:ty, padded) => {
        ::paste::paste! {
            pub fn $fname(&self) -> <$fty as $crate::field::Unpadded>::Bare {
                $crate::field::Unpadded::bare(&self.$fname)
            }

            pub fn [<with_ $fname>](
                self: &::std::sync::Arc<Self>,
                value: <$fty as $crate::field::Unpadded>::Bare,
            ) -> ::rewrite_core::LstResult<::std::sync::Arc<Self>> {
                let wrapped = $crate::field::Unpadded::rewrap(&self.$fname, value)?;
                Ok(self.[<put_ $fname>](wrapped))
            }
        }
    };
    ($node:ident, $fname:ident, $fty:ty, ) => {
        ::paste::paste! {
            pub fn $fname(&self) -> &$fty {
                &self.$fname
            }

            pub fn [<with_ $fname>](self: &::std::sync::Arc<Self>, value: $fty) -> ::std::sync::Arc<Self> {
                self.[<put_ $fname>](value)
            }
        }
    };
}
pub(crate) use node_accessor;

/// Padding-facet getter and wither for one `#padded` field.
macro_rules! padding_accessor {
    ($lt:lifetime, $node:ident, $fname:ident, $fty:ty, padded) => {
        ::paste::paste! {
            pub fn $fname(&self) -> &$lt $fty {
                &self.0.$fname
            }

            pub fn [<with_ $fname>](&self, value: $fty) -> ::std::sync::Arc<$node> {
                self.0.[<put_ $fname>](value)
            }
        }
    };
    ($lt:lifetime, $node:ident, $fname:ident, $fty:ty, ) => {};
}
pub(crate) use padding_accessor;

macro_rules! lst_node {
    (
        $(#[$meta:meta])*
        $node:ident : $dialect:ident $wire:literal [$($cap:ident),* $(,)?] {
            $(
                $(#[$fmeta:meta])*
                $fname:ident : $(# $pad:ident)? $fty:ty $(=> $loc:ident)?
            ),* $(,)?
        }
    ) => {
        ::paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq)]
            pub struct $node {
                id: ::rewrite_core::Id,
                prefix: ::rewrite_core::Space,
                markers: ::rewrite_core::Markers,
                $($(#[$fmeta])* $fname: $fty,)*
            }

            impl $node {
                #[allow(clippy::too_many_arguments)]
                pub fn new(
                    id: ::rewrite_core::Id,
                    prefix: ::rewrite_core::Space,
                    markers: ::rewrite_core::Markers,
                    $($fname: $fty,)*
                ) -> ::std::sync::Arc<Self> {
                    ::std::sync::Arc::new(Self {
                        id,
                        prefix,
                        markers,
                        $($fname,)*
                    })
                }

                pub fn id(&self) -> ::rewrite_core::Id {
                    self.id
                }

                pub fn prefix(&self) -> &::rewrite_core::Space {
                    &self.prefix
                }

                pub fn markers(&self) -> &::rewrite_core::Markers {
                    &self.markers
                }

                pub fn with_id(self: &::std::sync::Arc<Self>, id: ::rewrite_core::Id) -> ::std::sync::Arc<Self> {
                    if id == self.id {
                        return ::std::sync::Arc::clone(self);
                    }
                    ::std::sync::Arc::new(Self { id, ..(**self).clone() })
                }

                pub fn with_prefix(
                    self: &::std::sync::Arc<Self>,
                    prefix: ::rewrite_core::Space,
                ) -> ::std::sync::Arc<Self> {
                    if ::rewrite_core::Same::same(&prefix, &self.prefix) {
                        return ::std::sync::Arc::clone(self);
                    }
                    ::std::sync::Arc::new(Self { prefix, ..(**self).clone() })
                }

                pub fn with_markers(
                    self: &::std::sync::Arc<Self>,
                    markers: ::rewrite_core::Markers,
                ) -> ::std::sync::Arc<Self> {
                    if ::rewrite_core::Same::same(&markers, &self.markers) {
                        return ::std::sync::Arc::clone(self);
                    }
                    ::std::sync::Arc::new(Self { markers, ..(**self).clone() })
                }

                /// Envelope-level access to padded fields.
                pub fn padding(self: &::std::sync::Arc<Self>) -> $crate::nodes::Padding<'_, Self> {
                    $crate::nodes::Padding(self)
                }

                $(
                    $crate::nodes::macros::node_accessor!($node, $fname, $fty, $($pad)?);

                    fn [<put_ $fname>](self: &::std::sync::Arc<Self>, value: $fty) -> ::std::sync::Arc<Self> {
                        if ::rewrite_core::Same::same(&value, &self.$fname) {
                            return ::std::sync::Arc::clone(self);
                        }
                        ::std::sync::Arc::new(Self { $fname: value, ..(**self).clone() })
                    }
                )*
            }

            impl<'a> $crate::nodes::Padding<'a, $node> {
                $(
                    $crate::nodes::macros::padding_accessor!('a, $node, $fname, $fty, $($pad)?);
                )*
            }

            impl ::rewrite_core::HasId for $node {
                fn id(&self) -> ::rewrite_core::Id {
                    self.id
                }
            }

            impl $crate::tree::TreeVariant for $node {
                const KIND: &'static str = stringify!($node);
                const WIRE_NAME: &'static str = $wire;
                const DIALECT: $crate::tree::Dialect = $crate::tree::Dialect::$dialect;
                const CAPABILITIES: $crate::tree::Capabilities =
                    $crate::tree::Capabilities::NONE $(.union($crate::tree::Capabilities::$cap))*;
                const PREFIX_LOCATION: $crate::location::Location =
                    $crate::location::Location::[<$node Prefix>];

                fn into_tree(node: ::std::sync::Arc<Self>) -> $crate::tree::Tree {
                    $crate::tree::Tree::$node(node)
                }

                fn as_variant(tree: &$crate::tree::Tree) -> Option<&::std::sync::Arc<Self>> {
                    match tree {
                        $crate::tree::Tree::$node(node) => Some(node),
                        _ => None,
                    }
                }

                fn try_from_tree(tree: $crate::tree::Tree) -> Result<::std::sync::Arc<Self>, $crate::tree::Tree> {
                    match tree {
                        $crate::tree::Tree::$node(node) => Ok(node),
                        other => Err(other),
                    }
                }

                fn node_id(&self) -> ::rewrite_core::Id {
                    self.id
                }

                fn node_prefix(&self) -> &::rewrite_core::Space {
                    &self.prefix
                }

                fn node_markers(&self) -> &::rewrite_core::Markers {
                    &self.markers
                }

                fn rebuild_prefix(self: &::std::sync::Arc<Self>, prefix: ::rewrite_core::Space) -> ::std::sync::Arc<Self> {
                    self.with_prefix(prefix)
                }

                fn rebuild_markers(self: &::std::sync::Arc<Self>, markers: ::rewrite_core::Markers) -> ::std::sync::Arc<Self> {
                    self.with_markers(markers)
                }

                fn rebuild_id(self: &::std::sync::Arc<Self>, id: ::rewrite_core::Id) -> ::std::sync::Arc<Self> {
                    self.with_id(id)
                }

                #[allow(unused_mut, unused_variables)]
                fn map_fields<M: $crate::field::FieldMapper + ?Sized>(
                    self: &::std::sync::Arc<Self>,
                    m: &mut M,
                ) -> Result<::std::sync::Arc<Self>, M::Error> {
                    let mut node = ::std::sync::Arc::clone(self);
                    $(
                        let slot = $crate::field::SlotInfo::new(
                            stringify!($node),
                            stringify!($fname),
                            None $(.or(Some($crate::location::Location::$loc)))?,
                        );
                        let mapped = $crate::field::Slot::map_slot(&node.$fname, m, slot)?;
                        node = node.[<put_ $fname>](mapped);
                    )*
                    Ok(node)
                }

                #[allow(unused_variables)]
                fn zip_fields<Z: $crate::field::FieldZipper + ?Sized>(
                    &self,
                    before: Option<&Self>,
                    z: &mut Z,
                ) -> Result<(), Z::Error> {
                    $(
                        let slot = $crate::field::SlotInfo::new(
                            stringify!($node),
                            stringify!($fname),
                            None $(.or(Some($crate::location::Location::$loc)))?,
                        );
                        $crate::field::Slot::zip_slot(&self.$fname, before.map(|b| &b.$fname), z, slot)?;
                    )*
                    Ok(())
                }

                fn placeholder() -> ::std::sync::Arc<Self> {
                    ::std::sync::Arc::new(Self {
                        id: ::rewrite_core::Id::random(),
                        prefix: ::rewrite_core::Space::empty(),
                        markers: ::rewrite_core::Markers::empty(),
                        $($fname: <$fty as $crate::field::Slot>::placeholder(),)*
                    })
                }
            }

            impl $crate::field::Field for ::std::sync::Arc<$node> {
                fn map_field<M: $crate::field::FieldMapper + ?Sized>(
                    before: Option<&Self>,
                    m: &mut M,
                    slot: $crate::field::SlotInfo,
                ) -> Result<Option<Self>, M::Error> {
                    $crate::tree::map_node_field(before, m, slot)
                }

                fn zip_field<Z: $crate::field::FieldZipper + ?Sized>(
                    after: Option<&Self>,
                    before: Option<&Self>,
                    z: &mut Z,
                    slot: $crate::field::SlotInfo,
                ) -> Result<(), Z::Error> {
                    $crate::tree::zip_node_field(after, before, z, slot)
                }

                fn element_id(&self) -> Option<::rewrite_core::Id> {
                    Some(self.id)
                }
            }

            impl $crate::field::Placeholder for ::std::sync::Arc<$node> {
                fn placeholder() -> Self {
                    <$node as $crate::tree::TreeVariant>::placeholder()
                }
            }

            $crate::field::required_slot!(::std::sync::Arc<$node>);

            impl From<::std::sync::Arc<$node>> for $crate::tree::Tree {
                fn from(node: ::std::sync::Arc<$node>) -> Self {
                    $crate::tree::Tree::$node(node)
                }
            }
        }
    };
}
pub(crate) use lst_node;
