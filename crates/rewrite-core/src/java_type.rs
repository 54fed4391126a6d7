// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Type attribution attached to typed nodes.
//!
//! Types are opaque labels produced by upstream analysis. They form a graph
//! that may contain cycles (a class lists its methods, each method names the
//! class as its declaring type), so they live in an arena: a [`TypeTable`]
//! owns every [`JavaType`] and references between types and from nodes to
//! types are [`TypeId`] indices. Two nodes attributed with the same `TypeId`
//! share one type instance.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LstError, LstResult};
use crate::id::Same;

/// Index of a type within its [`TypeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(u32);

impl TypeId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

impl Same for TypeId {
    fn same(&self, other: &Self) -> bool {
        self == other
    }
}

impl Same for PrimitiveKind {
    fn same(&self, other: &Self) -> bool {
        self == other
    }
}

/// Primitive type keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Void,
    String,
    None,
    Null,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 12] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Double,
        PrimitiveKind::Float,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Short,
        PrimitiveKind::Void,
        PrimitiveKind::String,
        PrimitiveKind::None,
        PrimitiveKind::Null,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Void => "void",
            PrimitiveKind::String => "String",
            PrimitiveKind::None => "",
            PrimitiveKind::Null => "null",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.keyword() == keyword)
    }
}

/// What a class type declares itself as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClassKind {
    #[default]
    Class,
    Enum,
    Interface,
    Annotation,
    Record,
    Value,
}

impl ClassKind {
    pub const ALL: [ClassKind; 6] = [
        ClassKind::Class,
        ClassKind::Enum,
        ClassKind::Interface,
        ClassKind::Annotation,
        ClassKind::Record,
        ClassKind::Value,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ClassKind::Class => "Class",
            ClassKind::Enum => "Enum",
            ClassKind::Interface => "Interface",
            ClassKind::Annotation => "Annotation",
            ClassKind::Record => "Record",
            ClassKind::Value => "Value",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// Variance of a generic type variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Variance {
    #[default]
    Invariant,
    Covariant,
    Contravariant,
}

impl Variance {
    pub fn name(&self) -> &'static str {
        match self {
            Variance::Invariant => "INVARIANT",
            Variance::Covariant => "COVARIANT",
            Variance::Contravariant => "CONTRAVARIANT",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "INVARIANT" => Some(Variance::Invariant),
            "COVARIANT" => Some(Variance::Covariant),
            "CONTRAVARIANT" => Some(Variance::Contravariant),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassType {
    pub flags_bit_map: u64,
    pub kind: ClassKind,
    pub fully_qualified_name: String,
    pub type_parameters: Vec<TypeId>,
    pub supertype: Option<TypeId>,
    pub owning_class: Option<TypeId>,
    pub annotations: Vec<TypeId>,
    pub interfaces: Vec<TypeId>,
    pub members: Vec<TypeId>,
    pub methods: Vec<TypeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MethodType {
    pub flags_bit_map: u64,
    pub declaring_type: Option<TypeId>,
    pub name: String,
    pub return_type: Option<TypeId>,
    pub parameter_names: Vec<String>,
    pub parameter_types: Vec<TypeId>,
    pub thrown_exceptions: Vec<TypeId>,
    pub annotations: Vec<TypeId>,
    pub default_value: Vec<String>,
    pub declared_formal_type_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariableType {
    pub name: String,
    pub owner: Option<TypeId>,
    pub ty: Option<TypeId>,
    pub annotations: Vec<TypeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArrayType {
    pub elem_type: Option<TypeId>,
    pub annotations: Vec<TypeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParameterizedType {
    pub ty: Option<TypeId>,
    pub type_parameters: Vec<TypeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenericTypeVariable {
    pub name: String,
    pub variance: Variance,
    pub bounds: Vec<TypeId>,
}

/// A type attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JavaType {
    Primitive(PrimitiveKind),
    Class(ClassType),
    Method(MethodType),
    Variable(VariableType),
    Array(ArrayType),
    Parameterized(ParameterizedType),
    GenericTypeVariable(GenericTypeVariable),
    Unknown,
}

impl JavaType {
    /// Short variant name, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            JavaType::Primitive(_) => "Primitive",
            JavaType::Class(_) => "Class",
            JavaType::Method(_) => "Method",
            JavaType::Variable(_) => "Variable",
            JavaType::Array(_) => "Array",
            JavaType::Parameterized(_) => "Parameterized",
            JavaType::GenericTypeVariable(_) => "GenericTypeVariable",
            JavaType::Unknown => "Unknown",
        }
    }

    /// The type ids this type points at, in field order.
    pub fn references(&self) -> Vec<TypeId> {
        fn opt(out: &mut Vec<TypeId>, id: &Option<TypeId>) {
            out.extend(id.iter().copied());
        }
        let mut out = Vec::new();
        match self {
            JavaType::Primitive(_) | JavaType::Unknown => {}
            JavaType::Class(c) => {
                out.extend(&c.type_parameters);
                opt(&mut out, &c.supertype);
                opt(&mut out, &c.owning_class);
                out.extend(&c.annotations);
                out.extend(&c.interfaces);
                out.extend(&c.members);
                out.extend(&c.methods);
            }
            JavaType::Method(m) => {
                opt(&mut out, &m.declaring_type);
                opt(&mut out, &m.return_type);
                out.extend(&m.parameter_types);
                out.extend(&m.thrown_exceptions);
                out.extend(&m.annotations);
            }
            JavaType::Variable(v) => {
                opt(&mut out, &v.owner);
                opt(&mut out, &v.ty);
                out.extend(&v.annotations);
            }
            JavaType::Array(a) => {
                opt(&mut out, &a.elem_type);
                out.extend(&a.annotations);
            }
            JavaType::Parameterized(p) => {
                opt(&mut out, &p.ty);
                out.extend(&p.type_parameters);
            }
            JavaType::GenericTypeVariable(g) => out.extend(&g.bounds),
        }
        out
    }
}

/// Arena of types referenced by one or more trees.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    types: Vec<JavaType>,
    primitives: HashMap<PrimitiveKind, TypeId>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a type and return its id.
    pub fn add(&mut self, ty: JavaType) -> TypeId {
        if let JavaType::Primitive(kind) = ty {
            return self.primitive(kind);
        }
        self.push(ty)
    }

    /// The shared id of a primitive type.
    pub fn primitive(&mut self, kind: PrimitiveKind) -> TypeId {
        if let Some(id) = self.primitives.get(&kind) {
            return *id;
        }
        let id = self.push(JavaType::Primitive(kind));
        self.primitives.insert(kind, id);
        id
    }

    /// Allocate a slot whose contents are filled in later.
    ///
    /// Decoding a cyclic graph reserves the slot first so that references
    /// back to the type being decoded resolve to this id.
    pub fn reserve(&mut self) -> TypeId {
        self.push(JavaType::Unknown)
    }

    /// Fill a slot allocated by [`TypeTable::reserve`].
    pub fn fill(&mut self, id: TypeId, ty: JavaType) -> LstResult<()> {
        let slot = self
            .types
            .get_mut(id.index())
            .ok_or(LstError::UnknownType(id))?;
        *slot = ty;
        Ok(())
    }

    pub fn get(&self, id: TypeId) -> LstResult<&JavaType> {
        self.types.get(id.index()).ok_or(LstError::UnknownType(id))
    }

    pub fn contains(&self, id: TypeId) -> bool {
        id.index() < self.types.len()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &JavaType)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, t)| (TypeId(i as u32), t))
    }

    /// Fully qualified name of a class or parameterized type.
    ///
    /// A chain of parameterized types that loops back on itself has no name.
    pub fn fully_qualified_name(&self, id: TypeId) -> LstResult<Option<&str>> {
        let mut current = id;
        // A chain longer than the table must revisit a slot.
        for _ in 0..=self.types.len() {
            match self.get(current)? {
                JavaType::Class(c) => return Ok(Some(c.fully_qualified_name.as_str())),
                JavaType::Parameterized(ParameterizedType { ty: Some(inner), .. }) => current = *inner,
                _ => return Ok(None),
            }
        }
        Ok(None)
    }

    fn push(&mut self, ty: JavaType) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(ty);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_are_shared() {
        let mut table = TypeTable::new();
        let a = table.primitive(PrimitiveKind::Int);
        let b = table.add(JavaType::Primitive(PrimitiveKind::Int));
        assert_eq!(a, b);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn reserve_then_fill_builds_a_cycle() {
        let mut table = TypeTable::new();
        let class = table.reserve();
        let method = table.add(JavaType::Method(MethodType {
            name: "run".into(),
            declaring_type: Some(class),
            ..Default::default()
        }));
        table
            .fill(
                class,
                JavaType::Class(ClassType {
                    fully_qualified_name: "a.B".into(),
                    methods: vec![method],
                    ..Default::default()
                }),
            )
            .unwrap();

        assert_eq!(table.fully_qualified_name(class).unwrap(), Some("a.B"));
        match table.get(method).unwrap() {
            JavaType::Method(m) => assert_eq!(m.declaring_type, Some(class)),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(table.get(class).unwrap().references(), vec![method]);
    }

    #[test]
    fn parameterized_names_follow_the_raw_type() {
        let mut table = TypeTable::new();
        let list = table.add(JavaType::Class(ClassType {
            fully_qualified_name: "java.util.List".into(),
            ..Default::default()
        }));
        let parameterized = table.add(JavaType::Parameterized(ParameterizedType {
            ty: Some(list),
            ..Default::default()
        }));
        assert_eq!(table.fully_qualified_name(parameterized).unwrap(), Some("java.util.List"));

        let looped = table.reserve();
        let outer = table.add(JavaType::Parameterized(ParameterizedType {
            ty: Some(looped),
            ..Default::default()
        }));
        table
            .fill(
                looped,
                JavaType::Parameterized(ParameterizedType {
                    ty: Some(outer),
                    ..Default::default()
                }),
            )
            .unwrap();
        assert_eq!(table.fully_qualified_name(outer).unwrap(), None);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let table = TypeTable::new();
        let missing = TypeId(3);
        assert_eq!(table.get(missing).unwrap_err(), LstError::UnknownType(missing));
    }

    #[test]
    fn keywords_round_trip() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(PrimitiveKind::from_keyword(kind.keyword()), Some(kind));
        }
        assert_eq!(Variance::from_name("COVARIANT"), Some(Variance::Covariant));
        assert_eq!(ClassKind::from_name("Record"), Some(ClassKind::Record));
    }
}
