// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Small hand-built trees and type graphs for remoting tests.

#![allow(dead_code)]

use std::sync::Arc;

use rewrite_core::{
    ClassType, Comment, Container, Id, JavaType, LeftPadded, Markers, MethodType, RightPadded, Space, TypeId,
    TypeTable,
};
use rewrite_remote::{CodecRegistry, RemotingConfig, RemotingContext};
use rewrite_tree::nodes::*;
use rewrite_tree::Tree;

pub fn session() -> RemotingContext {
    RemotingContext::default()
}

pub fn session_with(config: RemotingConfig) -> RemotingContext {
    RemotingContext::new(config, Arc::new(CodecRegistry::with_java_types()))
}

pub fn printed(tree: &Tree) -> String {
    tree.print().unwrap_or_else(|e| panic!("print failed: {e}"))
}

pub fn ident(prefix: &str, name: &str) -> Tree {
    Tree::Identifier(Identifier::build(Space::format(prefix), name))
}

pub fn typed_ident(prefix: &str, name: &str, ty: TypeId) -> Tree {
    Tree::Identifier(Identifier::build(Space::format(prefix), name).with_ty(Some(ty)))
}

pub fn pass(prefix: &str) -> Tree {
    Tree::Pass(Pass::new(Id::random(), Space::format(prefix), Markers::empty()))
}

pub fn int_literal(prefix: &str, value: i64) -> Tree {
    Tree::Literal(Literal::new(
        Id::random(),
        Space::format(prefix),
        Markers::empty(),
        Some(LiteralValue::Int(value)),
        Some(Arc::from(value.to_string())),
        None,
    ))
}

pub fn call(prefix: &str, name: &str, args: Vec<Tree>) -> Tree {
    Tree::MethodInvocation(MethodInvocation::new(
        Id::random(),
        Space::format(prefix),
        Markers::empty(),
        None,
        None,
        Identifier::build(Space::empty(), name),
        Container::new(
            Space::empty(),
            args.into_iter().map(RightPadded::build).collect(),
            Markers::empty(),
        ),
        None,
    ))
}

pub fn assign(prefix: &str, target: Tree, value: Tree) -> Tree {
    Tree::Assignment(Assignment::new(
        Id::random(),
        Space::format(prefix),
        Markers::empty(),
        target,
        LeftPadded::new(Space::format(" "), value, Markers::empty()),
        None,
    ))
}

/// A module of `statements`, each ending the line, the first with a trailing comment.
pub fn module(statements: Vec<Tree>) -> Tree {
    let statements = statements
        .into_iter()
        .enumerate()
        .map(|(i, statement)| {
            let after = if i == 0 {
                Space::build(Some("  "), vec![Comment::new(" first", "\n", false)])
            } else {
                Space::format("\n")
            };
            RightPadded::new(statement, after, Markers::empty())
        })
        .collect();
    Tree::PyCompilationUnit(PyCompilationUnit::new(
        Id::random(),
        Space::empty(),
        Markers::empty(),
        Arc::from("test.py"),
        None,
        Vec::new(),
        statements,
        Space::empty(),
    ))
}

/// `class C` with one method `m` whose declaring type is `C`.
pub fn class_with_method(types: &mut TypeTable) -> (TypeId, TypeId) {
    let class = types.reserve();
    let method = types.add(JavaType::Method(MethodType {
        declaring_type: Some(class),
        name: "m".to_string(),
        parameter_names: vec!["self".to_string()],
        ..MethodType::default()
    }));
    types
        .fill(
            class,
            JavaType::Class(ClassType {
                fully_qualified_name: "pkg.C".to_string(),
                methods: vec![method],
                ..ClassType::default()
            }),
        )
        .unwrap();
    (class, method)
}

/// Occurrences of `needle` in `haystack`.
pub fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}
