// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The closed set of node variants.
//!
//! [`Tree`] is the sum of every node type in both dialects. Slots that accept
//! "any expression" or "any statement" hold a `Tree`; slots that accept one
//! specific node hold `Arc<Node>` directly. Capability queries
//! ([`Tree::is_expression`] and friends) answer which roles a variant plays.

use std::fmt;
use std::sync::Arc;

use rewrite_core::{HasId, HasPrefix, Id, LstError, Markers, Same, Space};

use crate::field::{Field, FieldMapper, FieldZipper, Placeholder, SlotInfo};
use crate::location::Location;
use crate::nodes::*;

/// The language a variant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Java,
    Python,
}

impl Dialect {
    /// Package of the canonical type names on the wire.
    pub fn package(&self) -> &'static str {
        match self {
            Dialect::Java => "org.openrewrite.java.tree",
            Dialect::Python => "org.openrewrite.python.tree",
        }
    }

    /// Package of the short type-name aliases.
    pub fn short_package(&self) -> &'static str {
        match self {
            Dialect::Java => "rewrite.java.tree",
            Dialect::Python => "rewrite.python.tree",
        }
    }
}

/// Roles a variant can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities(u8);

impl Capabilities {
    pub const NONE: Capabilities = Capabilities(0);
    pub const EXPRESSION: Capabilities = Capabilities(1);
    pub const STATEMENT: Capabilities = Capabilities(1 << 1);
    pub const TYPE_TREE: Capabilities = Capabilities(1 << 2);
    pub const LOOP: Capabilities = Capabilities(1 << 3);
    pub const METHOD_CALL: Capabilities = Capabilities(1 << 4);
    pub const SOURCE_FILE: Capabilities = Capabilities(1 << 5);

    pub const fn union(self, other: Capabilities) -> Capabilities {
        Capabilities(self.0 | other.0)
    }

    pub const fn contains(self, other: Capabilities) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Static facts about a variant, as listed by [`Tree::VARIANTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantInfo {
    pub kind: &'static str,
    pub wire_name: &'static str,
    pub dialect: Dialect,
}

impl VariantInfo {
    /// The canonical type name, e.g. `org.openrewrite.java.tree.J$If$Else`.
    pub fn type_name(&self) -> String {
        format!("{}.{}", self.dialect.package(), self.wire_name)
    }

    /// The short alias, e.g. `rewrite.java.tree.If.Else`.
    pub fn short_name(&self) -> String {
        let local = self
            .wire_name
            .split_once('$')
            .map(|(_, rest)| rest)
            .unwrap_or(self.wire_name)
            .replace('$', ".");
        format!("{}.{}", self.dialect.short_package(), local)
    }
}

/// Implemented by every node struct.
pub trait TreeVariant: Sized + fmt::Debug + PartialEq + 'static {
    const KIND: &'static str;
    const WIRE_NAME: &'static str;
    const DIALECT: Dialect;
    const CAPABILITIES: Capabilities;
    const PREFIX_LOCATION: Location;

    fn into_tree(node: Arc<Self>) -> Tree;
    fn as_variant(tree: &Tree) -> Option<&Arc<Self>>;
    fn try_from_tree(tree: Tree) -> Result<Arc<Self>, Tree>;

    fn node_id(&self) -> Id;
    fn node_prefix(&self) -> &Space;
    fn node_markers(&self) -> &Markers;
    fn rebuild_prefix(self: &Arc<Self>, prefix: Space) -> Arc<Self>;
    fn rebuild_markers(self: &Arc<Self>, markers: Markers) -> Arc<Self>;
    fn rebuild_id(self: &Arc<Self>, id: Id) -> Arc<Self>;

    /// Rebuild this node by mapping each declared field in order.
    fn map_fields<M: FieldMapper + ?Sized>(self: &Arc<Self>, m: &mut M) -> Result<Arc<Self>, M::Error>;

    /// Walk each declared field alongside the same field of `before`.
    fn zip_fields<Z: FieldZipper + ?Sized>(&self, before: Option<&Self>, z: &mut Z) -> Result<(), Z::Error>;

    /// A node with a nil id, empty trivia, and default field values.
    fn placeholder() -> Arc<Self>;
}

/// Map a slot typed to one node variant through the tree-level mapper.
pub fn map_node_field<N: TreeVariant, M: FieldMapper + ?Sized>(
    before: Option<&Arc<N>>,
    m: &mut M,
    slot: SlotInfo,
) -> Result<Option<Arc<N>>, M::Error> {
    let tree = before.map(|node| N::into_tree(Arc::clone(node)));
    match m.map_tree(tree.as_ref(), slot)? {
        None => Ok(None),
        Some(mapped) => N::try_from_tree(mapped)
            .map(Some)
            .map_err(|other| LstError::wrong_variant(slot.name, N::KIND, other.kind()).into()),
    }
}

pub fn zip_node_field<N: TreeVariant, Z: FieldZipper + ?Sized>(
    after: Option<&Arc<N>>,
    before: Option<&Arc<N>>,
    z: &mut Z,
    slot: SlotInfo,
) -> Result<(), Z::Error> {
    let after = after.map(|node| N::into_tree(Arc::clone(node)));
    let before = before.map(|node| N::into_tree(Arc::clone(node)));
    z.zip_tree(after.as_ref(), before.as_ref(), slot)
}

/// Invoke `$mac! { ... }` with every variant name.
macro_rules! for_each_variant {
    ($mac:ident) => {
        $mac! {
            AnnotatedType, Annotation, ArrayAccess, ArrayDimension, ArrayType, Assert,
            Assignment, AssignmentOperation, Binary, Block, Break, Case, ClassDeclaration,
            ClassDeclarationKind, CompilationUnit, Continue, DoWhileLoop, Empty, EnumValue,
            EnumValueSet, FieldAccess, ForEachLoop, ForEachControl, ForLoop, ForControl,
            ParenthesizedTypeTree, Identifier, If, Else, Import, InstanceOf, IntersectionType,
            Label, Lambda, LambdaParameters, Literal, MemberReference, MethodDeclaration,
            IdentifierWithAnnotations, MethodInvocation, Modifier, MultiCatch, NewArray,
            NewClass, NullableType, Package, ParameterizedType, Parentheses, ControlParentheses,
            Primitive, Return, Switch, SwitchExpression, Synchronized, Ternary, Throw, Try,
            TryResource, Catch, TypeCast, TypeParameter, TypeParameters, Unary,
            VariableDeclarations, NamedVariable, WhileLoop, Wildcard, Yield, Unknown,
            UnknownSource, Erroneous, DeconstructionPattern,
            PyCompilationUnit, Async, Await, PyBinary, ChainedAssignment, ExceptionType,
            PyForLoop, LiteralType, TypeHint, ExpressionStatement, ExpressionTypeTree,
            StatementExpression, MultiImport, KeyValue, DictLiteral, CollectionLiteral,
            FormattedString, FormattedStringValue, Pass, TrailingElseWrapper,
            ComprehensionExpression, ComprehensionClause, ComprehensionCondition, TypeAlias,
            YieldFrom, UnionType, VariableScope, Del, SpecialParameter, Star, NamedArgument,
            TypeHintedExpression, ErrorFrom, MatchCase, MatchCasePattern, Slice,
        }
    };
}
pub(crate) use for_each_variant;

macro_rules! define_tree {
    ($($variant:ident),* $(,)?) => {
        /// Any node of either dialect.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Tree {
            $($variant(Arc<$variant>),)*
        }

        impl Tree {
            /// Every variant, in declaration order.
            pub const VARIANTS: &'static [VariantInfo] = &[
                $(VariantInfo {
                    kind: <$variant as TreeVariant>::KIND,
                    wire_name: <$variant as TreeVariant>::WIRE_NAME,
                    dialect: <$variant as TreeVariant>::DIALECT,
                },)*
            ];

            /// The variant name, e.g. `MethodInvocation`.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Tree::$variant(_) => <$variant as TreeVariant>::KIND,)*
                }
            }

            pub fn dialect(&self) -> Dialect {
                match self {
                    $(Tree::$variant(_) => <$variant as TreeVariant>::DIALECT,)*
                }
            }

            pub fn capabilities(&self) -> Capabilities {
                match self {
                    $(Tree::$variant(_) => <$variant as TreeVariant>::CAPABILITIES,)*
                }
            }

            /// Where this node's prefix sits.
            pub fn prefix_location(&self) -> Location {
                match self {
                    $(Tree::$variant(_) => <$variant as TreeVariant>::PREFIX_LOCATION,)*
                }
            }

            pub fn variant_info(&self) -> VariantInfo {
                match self {
                    $(Tree::$variant(_) => VariantInfo {
                        kind: <$variant as TreeVariant>::KIND,
                        wire_name: <$variant as TreeVariant>::WIRE_NAME,
                        dialect: <$variant as TreeVariant>::DIALECT,
                    },)*
                }
            }

            pub fn id(&self) -> Id {
                match self {
                    $(Tree::$variant(node) => node.node_id(),)*
                }
            }

            pub fn prefix(&self) -> &Space {
                match self {
                    $(Tree::$variant(node) => node.node_prefix(),)*
                }
            }

            pub fn markers(&self) -> &Markers {
                match self {
                    $(Tree::$variant(node) => node.node_markers(),)*
                }
            }

            pub fn with_id(&self, id: Id) -> Tree {
                match self {
                    $(Tree::$variant(node) => Tree::$variant(node.rebuild_id(id)),)*
                }
            }

            pub fn with_prefix(&self, prefix: Space) -> Tree {
                match self {
                    $(Tree::$variant(node) => Tree::$variant(node.rebuild_prefix(prefix)),)*
                }
            }

            pub fn with_markers(&self, markers: Markers) -> Tree {
                match self {
                    $(Tree::$variant(node) => Tree::$variant(node.rebuild_markers(markers)),)*
                }
            }

            /// Rebuild by mapping each field of the underlying node.
            pub fn map_fields<M: FieldMapper + ?Sized>(&self, m: &mut M) -> Result<Tree, M::Error> {
                Ok(match self {
                    $(Tree::$variant(node) => Tree::$variant(node.map_fields(m)?),)*
                })
            }

            /// Zip the fields of the underlying node against `before`.
            ///
            /// A `before` of another variant counts as absent.
            pub fn zip_fields<Z: FieldZipper + ?Sized>(
                &self,
                before: Option<&Tree>,
                z: &mut Z,
            ) -> Result<(), Z::Error> {
                match self {
                    $(Tree::$variant(node) => {
                        let before = before.and_then(<$variant as TreeVariant>::as_variant);
                        node.zip_fields(before.map(|b| &**b), z)
                    })*
                }
            }

            /// A placeholder of the named variant, used to decode a new node.
            pub fn placeholder_of(kind: &str) -> Option<Tree> {
                match kind {
                    $(stringify!($variant) => Some(Tree::$variant(<$variant as TreeVariant>::placeholder())),)*
                    _ => None,
                }
            }
        }

        impl Same for Tree {
            fn same(&self, other: &Self) -> bool {
                match (self, other) {
                    $((Tree::$variant(a), Tree::$variant(b)) => Arc::ptr_eq(a, b),)*
                    _ => false,
                }
            }
        }
    };
}

for_each_variant!(define_tree);

impl Tree {
    pub fn is_expression(&self) -> bool {
        self.capabilities().contains(Capabilities::EXPRESSION)
    }

    pub fn is_statement(&self) -> bool {
        self.capabilities().contains(Capabilities::STATEMENT)
    }

    pub fn is_type_tree(&self) -> bool {
        self.capabilities().contains(Capabilities::TYPE_TREE)
    }

    pub fn is_loop(&self) -> bool {
        self.capabilities().contains(Capabilities::LOOP)
    }

    pub fn is_method_call(&self) -> bool {
        self.capabilities().contains(Capabilities::METHOD_CALL)
    }

    pub fn is_source_file(&self) -> bool {
        self.capabilities().contains(Capabilities::SOURCE_FILE)
    }

    /// The node if it is of variant `N`.
    pub fn cast<N: TreeVariant>(&self) -> Option<&Arc<N>> {
        N::as_variant(self)
    }

    /// Whether `self` and `other` denote the same node, possibly at different versions.
    pub fn is_same_node(&self, other: &Tree) -> bool {
        self.id() == other.id()
    }

    /// Look a variant up by its canonical type name or short alias.
    pub fn variant_by_type_name(name: &str) -> Option<VariantInfo> {
        Tree::VARIANTS
            .iter()
            .copied()
            .find(|info| info.type_name() == name || info.short_name() == name)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind(), self.id())
    }
}

impl HasId for Tree {
    fn id(&self) -> Id {
        Tree::id(self)
    }
}

impl HasPrefix for Tree {
    fn prefix(&self) -> &Space {
        Tree::prefix(self)
    }

    fn with_prefix(&self, prefix: Space) -> Self {
        Tree::with_prefix(self, prefix)
    }
}

impl Field for Tree {
    fn map_field<M: FieldMapper + ?Sized>(
        before: Option<&Self>,
        m: &mut M,
        slot: SlotInfo,
    ) -> Result<Option<Self>, M::Error> {
        m.map_tree(before, slot)
    }

    fn zip_field<Z: FieldZipper + ?Sized>(
        after: Option<&Self>,
        before: Option<&Self>,
        z: &mut Z,
        slot: SlotInfo,
    ) -> Result<(), Z::Error> {
        z.zip_tree(after, before, slot)
    }

    fn element_id(&self) -> Option<Id> {
        Some(self.id())
    }
}

impl Placeholder for Tree {
    fn placeholder() -> Self {
        Tree::Empty(<Empty as TreeVariant>::placeholder())
    }
}

crate::field::required_slot!(Tree);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names_are_unique_and_resolvable() {
        let mut kinds: Vec<_> = Tree::VARIANTS.iter().map(|v| v.kind).collect();
        kinds.sort();
        let total = kinds.len();
        kinds.dedup();
        assert_eq!(kinds.len(), total);
        assert!(total > 100);

        for info in Tree::VARIANTS {
            let placeholder = Tree::placeholder_of(info.kind).unwrap();
            assert_eq!(placeholder.kind(), info.kind);
            assert_eq!(Tree::variant_by_type_name(&info.type_name()), Some(*info));
        }
    }

    #[test]
    fn type_names_and_aliases() {
        let info = Else::placeholder();
        let tree = Tree::Else(info);
        let variant = tree.variant_info();
        assert_eq!(variant.type_name(), "org.openrewrite.java.tree.J$If$Else");
        assert_eq!(variant.short_name(), "rewrite.java.tree.If.Else");

        let py = Tree::Async(Async::placeholder()).variant_info();
        assert_eq!(py.type_name(), "org.openrewrite.python.tree.Py$Async");
        assert_eq!(py.short_name(), "rewrite.python.tree.Async");
    }

    #[test]
    fn capabilities_by_variant() {
        let call = Tree::MethodInvocation(MethodInvocation::placeholder());
        assert!(call.is_expression());
        assert!(call.is_statement());
        assert!(call.is_method_call());
        assert!(!call.is_loop());

        let pass = Tree::Pass(Pass::placeholder());
        assert!(pass.is_statement());
        assert!(!pass.is_expression());

        assert!(Tree::PyForLoop(PyForLoop::placeholder()).is_loop());
        assert!(Tree::PyCompilationUnit(PyCompilationUnit::placeholder()).is_source_file());
        assert!(Tree::Identifier(Identifier::placeholder()).is_type_tree());
    }

    #[test]
    fn identity_is_by_allocation() {
        let empty = Empty::build(Space::format(" "));
        let a = Tree::Empty(Arc::clone(&empty));
        let b = Tree::Empty(empty);
        assert!(a.same(&b));

        let moved = a.with_prefix(Space::format("  "));
        assert!(!moved.same(&a));
        assert!(moved.is_same_node(&a));
        assert!(a.with_prefix(a.prefix().clone()).same(&a));
    }
}
