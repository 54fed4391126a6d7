// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Resolves wire type names to node constructors.

use std::collections::HashMap;

use rewrite_tree::{Tree, VariantInfo};
use tracing::warn;

use crate::error::{RemoteError, RemoteResult};

/// Maps wire type names to node variants.
///
/// Canonical names such as `org.openrewrite.java.tree.J$If$Else` always
/// resolve. Short aliases such as `rewrite.java.tree.If.Else` resolve only
/// when the factory was built to accept them.
#[derive(Debug, Clone)]
pub struct ReceiverFactory {
    canonical: HashMap<String, VariantInfo>,
    aliases: HashMap<String, VariantInfo>,
    accept_short_type_names: bool,
}

impl ReceiverFactory {
    pub fn new(accept_short_type_names: bool) -> Self {
        let canonical = Tree::VARIANTS
            .iter()
            .map(|info| (info.type_name(), *info))
            .collect();
        let aliases = Tree::VARIANTS
            .iter()
            .map(|info| (info.short_name(), *info))
            .collect();
        Self {
            canonical,
            aliases,
            accept_short_type_names,
        }
    }

    pub fn resolve(&self, type_name: &str) -> RemoteResult<VariantInfo> {
        if let Some(info) = self.canonical.get(type_name) {
            return Ok(*info);
        }
        match self.aliases.get(type_name) {
            Some(info) if self.accept_short_type_names => {
                warn!(type_name, kind = info.kind, "resolved short type name alias");
                Ok(*info)
            }
            _ => Err(RemoteError::UnknownValueType(type_name.to_string())),
        }
    }

    /// A placeholder of the named variant, ready to have its fields decoded.
    pub fn create(&self, type_name: &str) -> RemoteResult<Tree> {
        let info = self.resolve(type_name)?;
        Tree::placeholder_of(info.kind).ok_or_else(|| RemoteError::UnknownValueType(type_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_resolve() {
        let factory = ReceiverFactory::new(false);
        let tree = factory.create("org.openrewrite.java.tree.J$If$Else").unwrap();
        assert_eq!(tree.kind(), "Else");
        assert_eq!(factory.resolve("org.openrewrite.python.tree.Py$Pass").unwrap().kind, "Pass");
    }

    #[test]
    fn short_aliases_follow_the_setting() {
        let strict = ReceiverFactory::new(false);
        assert!(matches!(
            strict.resolve("rewrite.java.tree.If.Else"),
            Err(RemoteError::UnknownValueType(_))
        ));
        let lenient = ReceiverFactory::new(true);
        assert_eq!(lenient.resolve("rewrite.java.tree.If.Else").unwrap().kind, "Else");
    }

    #[test]
    fn unknown_names_fail() {
        let factory = ReceiverFactory::new(true);
        assert!(matches!(
            factory.create("org.openrewrite.java.tree.J$Nope"),
            Err(RemoteError::UnknownValueType(name)) if name == "org.openrewrite.java.tree.J$Nope"
        ));
    }
}
