// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Printer tests over hand-built trees.
//!
//! Each fixture is built with the trivia a parser would attach, so printing
//! it back must reproduce the source byte for byte.

mod support;

use std::sync::Arc;

use rewrite_core::{Marker, Markers, RightPadded, Space};
use rewrite_tree::nodes::*;
use rewrite_tree::{PrintOutputCapture, PythonPrinter, Tree, TreeVisitor};
use support::*;

#[test]
fn function_with_pass() {
    assert_prints(&def_pass(), "def f():\n    pass\n");
}

#[test]
fn try_except_inside_function() {
    assert_prints(
        &def_try_except_pass(),
        "def g():\n    try:\n        do()\n    except KeyError:\n        pass\n",
    );
}

#[test]
fn assignment_with_trailing_comment() {
    let statement = assign("", ident("", "x"), "   ", int_literal("  ", 1));
    let tree = module(vec![with_trailing_comment(statement, "  ", " keep")], "");
    assert_prints(&tree, "x   =  1  # keep\n");
}

#[test]
fn call_arguments_keep_their_prefixes() {
    let tree = call("", "f", vec![ident("", "a"), ident(" ", "b"), ident(" ", "c")]);
    assert_prints(&tree, "f(a, b, c)");
}

#[test]
fn call_without_arguments() {
    assert_prints(&call("", "do", Vec::new()), "do()");
}

#[test]
fn with_statement_from_try_resources() {
    let resource = TryResource::new(
        rewrite_core::Id::random(),
        Space::empty(),
        Markers::empty(),
        call("", "open", vec![ident("", "path")]),
        false,
    );
    let Tree::Try(statement) = try_except("", vec![pass("\n    ")], Vec::new()) else {
        unreachable!()
    };
    let resources = rewrite_core::Container::new(
        Space::format(" "),
        vec![RightPadded::build(resource)],
        Markers::empty(),
    );
    let statement = statement.padding().with_resources(Some(resources));
    assert_prints(&Tree::Try(statement), "with open(path):\n    pass");
}

#[test]
fn search_result_marker_prints_before_node() {
    let found = ident(" ", "b").with_markers(Markers::empty().add(Marker::search_result(None)));
    let described =
        ident(" ", "c").with_markers(Markers::empty().add(Marker::search_result(Some("here"))));
    let tree = call("", "f", vec![ident("", "a"), found, described]);
    assert_prints(&tree, "f(a, ~~>b, ~~(here)~~>c)");
}

#[test]
fn trailing_comma_marker_on_last_argument() {
    let Tree::MethodInvocation(invocation) = call("", "f", vec![ident("", "a"), ident(" ", "b")]) else {
        unreachable!()
    };
    let arguments = invocation.padding().arguments();
    let mut elements = arguments.padded_elements().to_vec();
    if let Some(last) = elements.pop() {
        let marked = last.markers().add(Marker::trailing_comma(" "));
        elements.push(last.with_markers(marked));
    }
    let invocation = invocation
        .padding()
        .with_arguments(arguments.with_padded_elements(elements));
    assert_prints(&Tree::MethodInvocation(invocation), "f(a, b, )");
}

#[test]
fn printing_is_identity_on_the_tree() {
    let tree = def_pass();
    let mut capture = PrintOutputCapture::new();
    let printed = PythonPrinter::new().visit(&tree, &mut capture).unwrap().unwrap();
    assert!(rewrite_core::Same::same(&printed, &tree));
    assert_eq!(capture.out(), "def f():\n    pass\n");
}

#[test]
fn multiline_comment_in_prefix() {
    let prefix = Space::build(
        Some(""),
        vec![rewrite_core::Comment::new(" note ", " ", true)],
    );
    let name = Identifier::build(prefix, "x");
    assert_prints(&Tree::Identifier(Arc::clone(&name)), "/* note */ x");
}
