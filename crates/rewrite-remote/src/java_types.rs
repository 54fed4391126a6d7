// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Wire schema for type attributions.
//!
//! Each `JavaType` variant's field list is written once, in [`visit_fields`],
//! and walked by both the encoder and the decoder. Field names are the
//! camel-case keys other implementations of the protocol use.

use rewrite_core::{
    ArrayType as ArrayTypeInfo, ClassKind, ClassType, GenericTypeVariable, JavaType, MethodType,
    ParameterizedType as ParameterizedTypeInfo, PrimitiveKind, TypeId, VariableType, Variance,
};

use crate::error::{RemoteError, RemoteResult};
use crate::registry::{CodecRegistry, ValueDeserializer};

/// One side of the type schema walk: writes fields out or reads them in.
///
/// Each method receives the field's wire key and the value to write from
/// or read into.
pub trait TypeFieldVisitor {
    fn flags(&mut self, name: &'static str, value: &mut u64) -> RemoteResult<()>;

    fn string(&mut self, name: &'static str, value: &mut String) -> RemoteResult<()>;

    fn strings(&mut self, name: &'static str, value: &mut Vec<String>) -> RemoteResult<()>;

    fn type_ref(&mut self, name: &'static str, value: &mut Option<TypeId>) -> RemoteResult<()>;

    fn type_refs(&mut self, name: &'static str, value: &mut Vec<TypeId>) -> RemoteResult<()>;
}

/// `(kind, canonical type name, deserializer)` for every variant.
///
/// A deserializer seeds an empty value of its variant and fills it in.
pub const JAVA_TYPES: &[(&str, &str, ValueDeserializer)] = &[
    ("Primitive", "org.openrewrite.java.tree.JavaType$Primitive", |f| {
        seeded(JavaType::Primitive(PrimitiveKind::None), f)
    }),
    ("Class", "org.openrewrite.java.tree.JavaType$Class", |f| {
        seeded(JavaType::Class(ClassType::default()), f)
    }),
    ("Method", "org.openrewrite.java.tree.JavaType$Method", |f| {
        seeded(JavaType::Method(MethodType::default()), f)
    }),
    ("Variable", "org.openrewrite.java.tree.JavaType$Variable", |f| {
        seeded(JavaType::Variable(VariableType::default()), f)
    }),
    ("Array", "org.openrewrite.java.tree.JavaType$Array", |f| {
        seeded(JavaType::Array(ArrayTypeInfo::default()), f)
    }),
    ("Parameterized", "org.openrewrite.java.tree.JavaType$Parameterized", |f| {
        seeded(JavaType::Parameterized(ParameterizedTypeInfo::default()), f)
    }),
    ("GenericTypeVariable", "org.openrewrite.java.tree.JavaType$GenericTypeVariable", |f| {
        seeded(JavaType::GenericTypeVariable(GenericTypeVariable::default()), f)
    }),
    ("Unknown", "org.openrewrite.java.tree.JavaType$Unknown", |f| seeded(JavaType::Unknown, f)),
];

/// Walk the fields of `ty` in wire order.
pub fn visit_fields<F: TypeFieldVisitor + ?Sized>(ty: &mut JavaType, f: &mut F) -> RemoteResult<()> {
    match ty {
        JavaType::Primitive(kind) => {
            let mut keyword = kind.keyword().to_string();
            f.string("keyword", &mut keyword)?;
            *kind = PrimitiveKind::from_keyword(&keyword)
                .ok_or_else(|| RemoteError::malformed("primitive keyword", &keyword))?;
        }
        JavaType::Class(class) => {
            f.flags("flagsBitMap", &mut class.flags_bit_map)?;
            let mut kind = class.kind.name().to_string();
            f.string("kind", &mut kind)?;
            class.kind = ClassKind::from_name(&kind).ok_or_else(|| RemoteError::malformed("class kind", &kind))?;
            f.string("fullyQualifiedName", &mut class.fully_qualified_name)?;
            f.type_refs("typeParameters", &mut class.type_parameters)?;
            f.type_ref("supertype", &mut class.supertype)?;
            f.type_ref("owningClass", &mut class.owning_class)?;
            f.type_refs("annotations", &mut class.annotations)?;
            f.type_refs("interfaces", &mut class.interfaces)?;
            f.type_refs("members", &mut class.members)?;
            f.type_refs("methods", &mut class.methods)?;
        }
        JavaType::Method(method) => {
            f.flags("flagsBitMap", &mut method.flags_bit_map)?;
            f.type_ref("declaringType", &mut method.declaring_type)?;
            f.string("name", &mut method.name)?;
            f.type_ref("returnType", &mut method.return_type)?;
            f.strings("parameterNames", &mut method.parameter_names)?;
            f.type_refs("parameterTypes", &mut method.parameter_types)?;
            f.type_refs("thrownExceptions", &mut method.thrown_exceptions)?;
            f.type_refs("annotations", &mut method.annotations)?;
            f.strings("defaultValue", &mut method.default_value)?;
            f.strings("declaredFormalTypeNames", &mut method.declared_formal_type_names)?;
        }
        JavaType::Variable(variable) => {
            f.string("name", &mut variable.name)?;
            f.type_ref("owner", &mut variable.owner)?;
            f.type_ref("type", &mut variable.ty)?;
            f.type_refs("annotations", &mut variable.annotations)?;
        }
        JavaType::Array(array) => {
            f.type_ref("elemType", &mut array.elem_type)?;
            f.type_refs("annotations", &mut array.annotations)?;
        }
        JavaType::Parameterized(parameterized) => {
            f.type_ref("type", &mut parameterized.ty)?;
            f.type_refs("typeParameters", &mut parameterized.type_parameters)?;
        }
        JavaType::GenericTypeVariable(generic) => {
            f.string("name", &mut generic.name)?;
            let mut variance = generic.variance.name().to_string();
            f.string("variance", &mut variance)?;
            generic.variance =
                Variance::from_name(&variance).ok_or_else(|| RemoteError::malformed("variance", &variance))?;
            f.type_refs("bounds", &mut generic.bounds)?;
        }
        JavaType::Unknown => {}
    }
    Ok(())
}

fn serialize(ty: &JavaType, fields: &mut dyn TypeFieldVisitor) -> RemoteResult<()> {
    let mut ty = ty.clone();
    visit_fields(&mut ty, fields)
}

fn seeded(mut ty: JavaType, fields: &mut dyn TypeFieldVisitor) -> RemoteResult<JavaType> {
    visit_fields(&mut ty, fields)?;
    Ok(ty)
}

/// Register codecs for every `JavaType` variant.
pub fn register(registry: &mut CodecRegistry) {
    for &(kind, type_name, deserializer) in JAVA_TYPES {
        registry.register_value_serializer(kind, type_name, serialize);
        registry.register_value_deserializer(type_name, deserializer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the keys walked, in order.
    #[derive(Default)]
    struct Keys(Vec<&'static str>);

    impl TypeFieldVisitor for Keys {
        fn flags(&mut self, name: &'static str, _value: &mut u64) -> RemoteResult<()> {
            self.0.push(name);
            Ok(())
        }

        fn string(&mut self, name: &'static str, _value: &mut String) -> RemoteResult<()> {
            self.0.push(name);
            Ok(())
        }

        fn strings(&mut self, name: &'static str, _value: &mut Vec<String>) -> RemoteResult<()> {
            self.0.push(name);
            Ok(())
        }

        fn type_ref(&mut self, name: &'static str, _value: &mut Option<TypeId>) -> RemoteResult<()> {
            self.0.push(name);
            Ok(())
        }

        fn type_refs(&mut self, name: &'static str, _value: &mut Vec<TypeId>) -> RemoteResult<()> {
            self.0.push(name);
            Ok(())
        }
    }

    #[test]
    fn method_fields_in_wire_order() {
        let mut keys = Keys::default();
        visit_fields(&mut JavaType::Method(MethodType::default()), &mut keys).unwrap();
        assert_eq!(
            keys.0,
            vec![
                "flagsBitMap",
                "declaringType",
                "name",
                "returnType",
                "parameterNames",
                "parameterTypes",
                "thrownExceptions",
                "annotations",
                "defaultValue",
                "declaredFormalTypeNames",
            ]
        );
    }

    #[test]
    fn every_variant_has_both_codecs() {
        let registry = CodecRegistry::with_java_types();
        for (kind, name, _) in JAVA_TYPES {
            let (serialized_as, _) = registry.serializer(kind).unwrap();
            assert_eq!(serialized_as, *name);
            assert!(registry.deserializer(name).is_ok());
        }
    }

    #[test]
    fn every_type_kind_is_in_the_table() {
        let samples = [
            JavaType::Primitive(PrimitiveKind::None),
            JavaType::Class(ClassType::default()),
            JavaType::Method(MethodType::default()),
            JavaType::Variable(VariableType::default()),
            JavaType::Array(ArrayTypeInfo::default()),
            JavaType::Parameterized(ParameterizedTypeInfo::default()),
            JavaType::GenericTypeVariable(GenericTypeVariable::default()),
            JavaType::Unknown,
        ];
        assert_eq!(samples.len(), JAVA_TYPES.len());
        for ty in &samples {
            let entry = JAVA_TYPES.iter().find(|(kind, _, _)| *kind == ty.kind_name());
            let (_, name, _) = entry.unwrap();
            assert!(name.ends_with(&format!("${}", ty.kind_name())));
        }
    }
}
