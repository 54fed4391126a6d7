// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Codecs for non-tree values, keyed by kind on the way out and by wire
//! type name on the way in.
//!
//! A registry is built once, then shared read-only between sessions
//! behind an `Arc`.

use std::collections::HashMap;

use rewrite_core::JavaType;

use crate::error::{RemoteError, RemoteResult};
use crate::java_types::{self, TypeFieldVisitor};

/// Writes the fields of a value. The `@c`/`@ref` header is written by the caller.
pub type ValueSerializer = fn(&JavaType, &mut dyn TypeFieldVisitor) -> RemoteResult<()>;

/// Reads the fields of a value whose header has been consumed.
pub type ValueDeserializer = fn(&mut dyn TypeFieldVisitor) -> RemoteResult<JavaType>;

#[derive(Debug, Default, Clone)]
pub struct CodecRegistry {
    serializers: HashMap<&'static str, (&'static str, ValueSerializer)>,
    deserializers: HashMap<&'static str, ValueDeserializer>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with codecs for every `JavaType` variant.
    pub fn with_java_types() -> Self {
        let mut registry = Self::new();
        java_types::register(&mut registry);
        registry
    }

    /// Serialize values of `kind` under the wire name `type_name`.
    pub fn register_value_serializer(
        &mut self,
        kind: &'static str,
        type_name: &'static str,
        serializer: ValueSerializer,
    ) {
        self.serializers.insert(kind, (type_name, serializer));
    }

    pub fn register_value_deserializer(&mut self, type_name: &'static str, deserializer: ValueDeserializer) {
        self.deserializers.insert(type_name, deserializer);
    }

    pub fn serializer(&self, kind: &str) -> RemoteResult<(&'static str, ValueSerializer)> {
        self.serializers
            .get(kind)
            .copied()
            .ok_or_else(|| RemoteError::UnknownValueType(kind.to_string()))
    }

    pub fn deserializer(&self, type_name: &str) -> RemoteResult<ValueDeserializer> {
        self.deserializers
            .get(type_name)
            .copied()
            .ok_or_else(|| RemoteError::UnknownValueType(type_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_rejects_everything() {
        let registry = CodecRegistry::new();
        assert!(matches!(
            registry.serializer("Class"),
            Err(RemoteError::UnknownValueType(kind)) if kind == "Class"
        ));
        assert!(registry
            .deserializer("org.openrewrite.java.tree.JavaType$Class")
            .is_err());
    }
}
