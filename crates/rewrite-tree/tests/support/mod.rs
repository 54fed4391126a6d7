// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Hand-built Python trees for integration tests.
//!
//! There is no parser in this workspace, so fixtures are assembled node by
//! node with the trivia a parser would have produced.

#![allow(dead_code)]

use std::sync::Arc;

use difference::assert_diff;
use itertools::Itertools;
use rewrite_core::{Comment, Container, Id, LeftPadded, Markers, RightPadded, Space};
use rewrite_tree::nodes::*;
use rewrite_tree::Tree;

/// Helper to visualize whitespace differences in test output
pub fn visualize(s: &str) -> String {
    s.replace(' ', "▩").lines().join("↩\n")
}

/// Print `tree` and compare against `expected`, showing whitespace on failure.
pub fn assert_prints(tree: &Tree, expected: &str) {
    let printed = tree.print().unwrap_or_else(|e| panic!("print failed: {e}"));
    if printed != expected {
        let got = visualize(&printed);
        let want = visualize(expected);
        assert_diff!(want.as_ref(), got.as_ref(), "", 0);
    }
}

pub fn ws(s: &str) -> Space {
    Space::format(s)
}

pub fn ident(prefix: &str, name: &str) -> Tree {
    Tree::Identifier(Identifier::build(ws(prefix), name))
}

pub fn padded(tree: Tree) -> RightPadded<Tree> {
    RightPadded::build(tree)
}

pub fn pass(prefix: &str) -> Tree {
    Tree::Pass(Pass::new(Id::random(), ws(prefix), Markers::empty()))
}

pub fn int_literal(prefix: &str, value: i64) -> Tree {
    Tree::Literal(Literal::new(
        Id::random(),
        ws(prefix),
        Markers::empty(),
        Some(LiteralValue::Int(value)),
        Some(Arc::from(value.to_string())),
        None,
    ))
}

/// `name(args...)`; each argument carries its own prefix.
pub fn call(prefix: &str, name: &str, args: Vec<Tree>) -> Tree {
    let args = if args.is_empty() {
        vec![padded(Tree::Empty(Empty::build(Space::empty())))]
    } else {
        args.into_iter().map(padded).collect()
    };
    Tree::MethodInvocation(MethodInvocation::new(
        Id::random(),
        ws(prefix),
        Markers::empty(),
        None,
        None,
        Identifier::build(Space::empty(), name),
        Container::new(Space::empty(), args, Markers::empty()),
        None,
    ))
}

/// `:` followed by statements; each statement carries its own newline and indent.
pub fn block(statements: Vec<Tree>) -> Arc<Block> {
    Block::new(
        Id::random(),
        Space::empty(),
        Markers::empty(),
        RightPadded::build(false),
        statements.into_iter().map(padded).collect(),
        Space::empty(),
    )
}

/// `def name():` with `body`.
pub fn def(prefix: &str, name: &str, body: Vec<Tree>) -> Tree {
    let keyword = Modifier::new(
        Id::random(),
        Space::empty(),
        Markers::empty(),
        Some(Arc::from("def")),
        ModifierType::Default,
        Vec::new(),
    );
    let name = IdentifierWithAnnotations::new(
        Id::random(),
        Space::empty(),
        Markers::empty(),
        Identifier::build(ws(" "), name),
        Vec::new(),
    );
    let parameters = Container::new(
        Space::empty(),
        vec![padded(Tree::Empty(Empty::build(Space::empty())))],
        Markers::empty(),
    );
    Tree::MethodDeclaration(MethodDeclaration::new(
        Id::random(),
        ws(prefix),
        Markers::empty(),
        Vec::new(),
        vec![keyword],
        None,
        None,
        name,
        parameters,
        None,
        Some(block(body)),
        None,
        None,
    ))
}

/// `except name:` with `body`.
pub fn except(prefix: &str, exception: &str, body: Vec<Tree>) -> Arc<Catch> {
    let exception_type = Tree::ExceptionType(ExceptionType::new(
        Id::random(),
        Space::empty(),
        Markers::empty(),
        None,
        false,
        ident("", exception),
    ));
    let unnamed = NamedVariable::new(
        Id::random(),
        Space::empty(),
        Markers::empty(),
        Tree::Empty(Empty::build(Space::empty())),
        Vec::new(),
        None,
        None,
    );
    let declarations = Tree::VariableDeclarations(VariableDeclarations::new(
        Id::random(),
        Space::empty(),
        Markers::empty(),
        Vec::new(),
        Vec::new(),
        Some(exception_type),
        None,
        vec![RightPadded::build(unnamed)],
    ));
    let parameter = ControlParentheses::new(Id::random(), ws(" "), Markers::empty(), padded(declarations));
    Catch::new(Id::random(), ws(prefix), Markers::empty(), parameter, block(body))
}

/// `try:` with `body` and the given `except` clauses.
pub fn try_except(prefix: &str, body: Vec<Tree>, catches: Vec<Arc<Catch>>) -> Tree {
    Tree::Try(Try::new(
        Id::random(),
        ws(prefix),
        Markers::empty(),
        None,
        block(body),
        catches,
        None,
    ))
}

/// `target = value` with explicit spacing before `=`.
pub fn assign(prefix: &str, target: Tree, before_eq: &str, value: Tree) -> Tree {
    Tree::Assignment(Assignment::new(
        Id::random(),
        ws(prefix),
        Markers::empty(),
        target,
        LeftPadded::new(ws(before_eq), value, Markers::empty()),
        None,
    ))
}

/// A statement followed by whitespace and a `#` comment ending the line.
pub fn with_trailing_comment(statement: Tree, whitespace: &str, comment: &str) -> RightPadded<Tree> {
    let after = Space::build(Some(whitespace), vec![Comment::new(comment, "\n", false)]);
    RightPadded::new(statement, after, Markers::empty())
}

pub fn module(statements: Vec<RightPadded<Tree>>, eof: &str) -> Tree {
    Tree::PyCompilationUnit(PyCompilationUnit::new(
        Id::random(),
        Space::empty(),
        Markers::empty(),
        Arc::from("test.py"),
        None,
        Vec::new(),
        statements,
        ws(eof),
    ))
}

/// `def f():\n    pass\n`
pub fn def_pass() -> Tree {
    module(vec![padded(def("", "f", vec![pass("\n    ")]))], "\n")
}

/// `def g():` wrapping `try: do() / except KeyError: pass`.
pub fn def_try_except_pass() -> Tree {
    let handler = except("\n    ", "KeyError", vec![pass("\n        ")]);
    let statement = try_except("\n    ", vec![call("\n        ", "do", Vec::new())], vec![handler]);
    module(vec![padded(def("", "g", vec![statement]))], "\n")
}
