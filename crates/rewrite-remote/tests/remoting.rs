// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Sender and receiver sessions exchanging whole trees and diffs.

mod support;

use std::sync::Arc;

use minicbor::Encoder;
use rewrite_core::{ClassType, Id, JavaType, Same, TypeTable};
use rewrite_remote::{RemoteError, RemotingConfig, RemotingContext};
use rewrite_tree::nodes::*;
use rewrite_tree::Tree;
use support::*;

fn assignment_and_call() -> Tree {
    module(vec![
        assign("", ident("", "x"), int_literal(" ", 1)),
        call("", "f", vec![ident("", "a"), ident(" ", "b")]),
    ])
}

fn statements(tree: &Tree) -> Vec<Tree> {
    let Tree::PyCompilationUnit(unit) = tree else {
        panic!("expected a module, got {}", tree.kind());
    };
    unit.statements()
}

#[test]
fn whole_tree_round_trips() {
    let tree = assignment_and_call();
    let bytes = session().send(&tree, None).unwrap();
    let received = session().receive(&bytes, None).unwrap().unwrap();

    assert_eq!(printed(&received), "x = 1  # first\nf(a, b)\n");
    assert_eq!(printed(&received), printed(&tree));
    assert_eq!(received.id(), tree.id());
    let ids = |t: &Tree| statements(t).iter().map(Tree::id).collect::<Vec<_>>();
    assert_eq!(ids(&received), ids(&tree));
}

#[test]
fn unchanged_tree_is_a_single_no_change() {
    let tree = assignment_and_call();
    let mut sender = session();
    let mut receiver = session();
    let bytes = sender.send(&tree, None).unwrap();
    let copy = receiver.receive(&bytes, None).unwrap().unwrap();

    let diff = sender.send(&tree, Some(&tree)).unwrap();
    assert_eq!(diff, vec![0]);
    let again = receiver.receive(&diff, Some(&copy)).unwrap().unwrap();
    assert!(again.same(&copy));
}

#[test]
fn rename_sends_only_the_changed_path() {
    let before = assignment_and_call();
    let mut sender = session();
    let mut receiver = session();
    let full = sender.send(&before, None).unwrap();
    let copy = receiver.receive(&full, None).unwrap().unwrap();

    let Tree::PyCompilationUnit(unit) = &before else {
        unreachable!();
    };
    let mut renamed = unit.statements();
    let Tree::MethodInvocation(invocation) = &renamed[1] else {
        panic!("expected a call");
    };
    let name = invocation.name().with_simple_name(Arc::from("g"));
    renamed[1] = Tree::MethodInvocation(invocation.with_name(name));
    let after = Tree::PyCompilationUnit(unit.with_statements(renamed).unwrap());

    let diff = sender.send(&after, Some(&before)).unwrap();
    assert!(diff.len() < full.len());

    let updated = receiver.receive(&diff, Some(&copy)).unwrap().unwrap();
    assert_eq!(printed(&updated), "x = 1  # first\ng(a, b)\n");
    // The untouched assignment keeps the receiver's allocation.
    assert!(statements(&updated)[0].same(&statements(&copy)[0]));
}

#[test]
fn deleting_the_root() {
    let tree = assignment_and_call();
    assert_eq!(session().receive(&[3], Some(&tree)).unwrap(), None);
}

#[test]
fn shared_type_is_sent_once() {
    let mut types = TypeTable::new();
    let string = types.add(JavaType::Class(ClassType {
        fully_qualified_name: "builtins.str".to_string(),
        ..ClassType::default()
    }));
    let tree = module(vec![assign(
        "",
        typed_ident("", "s", string),
        typed_ident(" ", "t", string),
    )]);

    let mut sender = session().with_types(types);
    let mut receiver = session();
    let bytes = sender.send(&tree, None).unwrap();
    assert_eq!(count(&bytes, b"@ref"), 1);

    let received = receiver.receive(&bytes, None).unwrap().unwrap();
    let Tree::Assignment(assignment) = &statements(&received)[0] else {
        panic!("expected an assignment");
    };
    let value = assignment.assignment();
    let (Tree::Identifier(s), Tree::Identifier(t)) = (assignment.variable(), &value) else {
        panic!("expected identifiers on both sides");
    };
    let id = s.ty().unwrap();
    assert_eq!(*t.ty(), Some(id));
    let JavaType::Class(class) = receiver.types().get(id).unwrap() else {
        panic!("expected a class type");
    };
    assert_eq!(class.fully_qualified_name, "builtins.str");

    // Later messages in the session refer to it by handle.
    let next = module(vec![typed_ident("", "u", string)]);
    let bytes = sender.send(&next, None).unwrap();
    assert_eq!(count(&bytes, b"@ref"), 0);
    let received = receiver.receive(&bytes, None).unwrap().unwrap();
    let Tree::Identifier(u) = &statements(&received)[0] else {
        panic!("expected an identifier");
    };
    assert_eq!(*u.ty(), Some(id));

    // A session that never saw the definition cannot resolve the handle.
    let err = session().receive(&bytes, None).unwrap_err();
    assert!(matches!(err, RemoteError::UnknownReference(0)));
}

#[test]
fn cyclic_types_decode_to_a_cycle() {
    let mut types = TypeTable::new();
    let (class, _method) = class_with_method(&mut types);
    let tree = module(vec![typed_ident("", "c", class)]);

    let bytes = session().with_types(types).send(&tree, None).unwrap();
    assert_eq!(count(&bytes, b"@ref"), 2);

    let mut receiver = session();
    let received = receiver.receive(&bytes, None).unwrap().unwrap();
    let Tree::Identifier(c) = &statements(&received)[0] else {
        panic!("expected an identifier");
    };
    let class_id = c.ty().unwrap();
    let JavaType::Class(class) = receiver.types().get(class_id).unwrap() else {
        panic!("expected a class type");
    };
    assert_eq!(class.fully_qualified_name, "pkg.C");
    let JavaType::Method(method) = receiver.types().get(class.methods[0]).unwrap() else {
        panic!("expected a method type");
    };
    assert_eq!(method.name, "m");
    assert_eq!(method.parameter_names, vec!["self".to_string()]);
    assert_eq!(method.declaring_type, Some(class_id));
}

fn class_named(name: &str) -> JavaType {
    JavaType::Class(ClassType {
        fully_qualified_name: name.to_string(),
        ..ClassType::default()
    })
}

fn type_name_of(session: &RemotingContext, tree: &Tree) -> String {
    let Tree::Identifier(ident) = &statements(tree)[0] else {
        panic!("expected an identifier");
    };
    let ty = ident.ty().unwrap();
    match session.types().get(ty).unwrap() {
        JavaType::Class(class) => class.fully_qualified_name.clone(),
        other => panic!("expected a class type, got {}", other.kind_name()),
    }
}

#[test]
fn types_added_mid_session_get_their_own_handle() {
    let mut sender = session();
    let mut receiver = session();
    let a = sender.types_mut().add(class_named("pkg.A"));
    let first = module(vec![typed_ident("", "x", a)]);
    let received = receiver.receive(&sender.send(&first, None).unwrap(), None).unwrap().unwrap();
    assert_eq!(type_name_of(&receiver, &received), "pkg.A");

    let b = sender.types_mut().add(class_named("pkg.B"));
    let second = module(vec![typed_ident("", "y", b)]);
    let bytes = sender.send(&second, None).unwrap();
    assert_eq!(count(&bytes, b"@ref"), 1);
    let received = receiver.receive(&bytes, None).unwrap().unwrap();
    assert_eq!(type_name_of(&receiver, &received), "pkg.B");
}

#[test]
fn received_types_can_be_sent_on() {
    let mut types = TypeTable::new();
    let (class, _method) = class_with_method(&mut types);
    let tree = module(vec![typed_ident("", "c", class)]);

    let mut middle = session();
    let bytes = session().with_types(types).send(&tree, None).unwrap();
    let relayed = middle.receive(&bytes, None).unwrap().unwrap();

    let mut last = session();
    let bytes = middle.send(&relayed, None).unwrap();
    let received = last.receive(&bytes, None).unwrap().unwrap();
    assert_eq!(type_name_of(&last, &received), "pkg.C");
}

#[test]
fn reset_keeps_the_arena_and_resends_definitions() {
    let mut sender = session();
    let string = sender.types_mut().add(class_named("builtins.str"));
    let tree = module(vec![typed_ident("", "s", string)]);
    sender.send(&tree, None).unwrap();

    sender.reset();
    let bytes = sender.send(&tree, None).unwrap();
    assert_eq!(count(&bytes, b"@ref"), 1);
    let mut receiver = session();
    let received = receiver.receive(&bytes, None).unwrap().unwrap();
    assert_eq!(type_name_of(&receiver, &received), "builtins.str");
}

#[test]
fn redefining_a_type_reference_is_rejected() {
    let mut sender = session();
    let a = sender.types_mut().add(class_named("pkg.A"));
    let tree = module(vec![typed_ident("", "x", a)]);
    let bytes = sender.send(&tree, None).unwrap();

    let mut receiver = session();
    receiver.receive(&bytes, None).unwrap().unwrap();
    // The same full definition again reuses handle 0.
    let err = receiver.receive(&bytes, None).unwrap_err();
    assert!(matches!(err, RemoteError::Malformed { .. }));
}

#[test]
fn fresh_placeholders_can_share_a_list() {
    let first = Tree::placeholder_of("Pass").unwrap();
    let second = Tree::placeholder_of("Pass").unwrap();
    assert_ne!(first.id(), second.id());

    let tree = module(vec![first, second]);
    let bytes = session().send(&tree, None).unwrap();
    let received = session().receive(&bytes, None).unwrap().unwrap();
    let ids = |t: &Tree| statements(t).iter().map(Tree::id).collect::<Vec<_>>();
    assert_eq!(ids(&received), ids(&tree));
}

#[test]
fn every_variant_crosses_the_wire() {
    let placeholders = Tree::VARIANTS
        .iter()
        .map(|info| Tree::placeholder_of(info.kind).unwrap())
        .collect();
    let tree = module(placeholders);
    let mut sender = session();
    let mut receiver = session();
    let bytes = sender.send(&tree, None).unwrap();
    let received = receiver.receive(&bytes, None).unwrap().unwrap();

    let shape = |t: &Tree| statements(t).iter().map(|s| (s.kind(), s.id())).collect::<Vec<_>>();
    assert_eq!(shape(&received), shape(&tree));
    assert_eq!(received, tree);
    assert_eq!(sender.send(&tree, Some(&tree)).unwrap(), vec![0]);
}

/// `ADD <type_name> <id>` for a `Pass`, with prefix and markers unchanged.
fn pass_message(type_name: &str, id: Id) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut enc = Encoder::new(&mut buf);
    enc.u8(1)
        .unwrap()
        .str(type_name)
        .unwrap()
        .bytes(id.as_bytes())
        .unwrap()
        .u8(0)
        .unwrap()
        .u8(0)
        .unwrap();
    buf
}

#[test]
fn canonical_type_names_decode() {
    let id = Id::random();
    let tree = session()
        .receive(&pass_message("org.openrewrite.python.tree.Py$Pass", id), None)
        .unwrap()
        .unwrap();
    assert_eq!(tree.kind(), "Pass");
    assert_eq!(tree.id(), id);
}

#[test]
fn short_type_names_follow_the_config() {
    let message = pass_message("rewrite.python.tree.Pass", Id::random());
    let tree = session().receive(&message, None).unwrap().unwrap();
    assert!(tree.cast::<Pass>().is_some());

    let strict = RemotingConfig {
        accept_short_type_names: false,
        ..RemotingConfig::default()
    };
    let err = session_with(strict).receive(&message, None).unwrap_err();
    assert!(matches!(err, RemoteError::UnknownValueType(name) if name == "rewrite.python.tree.Pass"));
}

#[test]
fn unknown_type_name_is_rejected() {
    let message = pass_message("org.openrewrite.java.tree.J$Nope", Id::random());
    let err = session().receive(&message, None).unwrap_err();
    assert!(matches!(err, RemoteError::UnknownValueType(_)));
}

#[test]
fn nesting_beyond_the_limit_is_rejected() {
    let tree = assignment_and_call();
    let bytes = session().send(&tree, None).unwrap();
    let shallow = RemotingConfig {
        max_depth: 2,
        ..RemotingConfig::default()
    };
    let err = session_with(shallow).receive(&bytes, None).unwrap_err();
    assert!(matches!(err, RemoteError::DecodeLimit("max_depth")));
}

#[test]
fn trailing_bytes_are_rejected() {
    let tree = assignment_and_call();
    let err = session().receive(&[0, 0], Some(&tree)).unwrap_err();
    assert!(matches!(err, RemoteError::Malformed { .. }));
}
