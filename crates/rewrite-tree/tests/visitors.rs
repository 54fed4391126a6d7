// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor tests: identity, replacement, deletion and cursor context.

mod support;

use std::sync::Arc;

use rewrite_core::{Container, Id, LstError, Markers, RightPadded, Same, Space};
use rewrite_tree::nodes::*;
use rewrite_tree::visitor::walk_node;
use rewrite_tree::{Cursor, Dialect, HasCursor, Tree, TreeVisitor, Visited};
use support::*;

/// Visits everything and changes nothing.
#[derive(Default)]
struct Identity {
    cursor: Cursor,
}

impl HasCursor for Identity {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }
}

impl TreeVisitor<()> for Identity {}

#[test]
fn identity_visit_returns_the_same_allocation() {
    let tree = def_pass();
    let visited = Identity::default().visit(&tree, &mut ()).unwrap().unwrap();
    assert!(visited.same(&tree));
    assert_prints(&visited, "def f():\n    pass\n");
}

#[test]
fn identity_visit_of_try_except() {
    let tree = def_try_except_pass();
    let visited = Identity::default().visit(&tree, &mut ()).unwrap().unwrap();
    assert!(visited.same(&tree));
}

/// Renames one identifier, keeping its prefix.
#[derive(Default)]
struct Rename {
    cursor: Cursor,
}

impl HasCursor for Rename {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }
}

impl TreeVisitor<usize> for Rename {
    fn visit_identifier(&mut self, node: &Arc<Identifier>, renamed: &mut usize) -> Visited {
        if &**node.simple_name() != "x" {
            return Ok(Some(Tree::Identifier(Arc::clone(node))));
        }
        *renamed += 1;
        Ok(Some(Tree::Identifier(node.with_simple_name(Arc::from("renamed")))))
    }
}

#[test]
fn rename_preserves_surrounding_trivia() {
    let statement = assign("", ident("", "x"), "   ", int_literal("  ", 1));
    let tree = module(vec![with_trailing_comment(statement, "  ", " keep")], "");

    let mut renamed = 0;
    let visited = Rename::default().visit(&tree, &mut renamed).unwrap().unwrap();
    assert_eq!(renamed, 1);
    assert!(!visited.same(&tree));
    assert!(visited.is_same_node(&tree));
    assert_prints(&visited, "renamed   =  1  # keep\n");
    assert_prints(&tree, "x   =  1  # keep\n");
}

/// Deletes every identifier named `target`.
struct DeleteNamed {
    cursor: Cursor,
    target: &'static str,
}

impl HasCursor for DeleteNamed {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }
}

impl TreeVisitor<()> for DeleteNamed {
    fn visit_identifier(&mut self, node: &Arc<Identifier>, _p: &mut ()) -> Visited {
        if &**node.simple_name() == self.target {
            return Ok(None);
        }
        Ok(Some(Tree::Identifier(Arc::clone(node))))
    }
}

#[test]
fn deleting_an_argument_drops_its_envelope() {
    let tree = call("", "f", vec![ident("", "a"), ident(" ", "b"), ident(" ", "c")]);
    let mut visitor = DeleteNamed {
        cursor: Cursor::root(),
        target: "b",
    };
    let visited = visitor.visit(&tree, &mut ()).unwrap().unwrap();
    assert_prints(&visited, "f(a, c)");

    let Tree::MethodInvocation(invocation) = &visited else {
        panic!("expected a call, got {}", visited.kind());
    };
    assert_eq!(invocation.arguments().len(), 2);
}

#[test]
fn deleting_a_required_slot_is_an_error() {
    // The call's name is a required `Identifier` slot.
    let tree = call("", "f", vec![ident("", "a")]);
    let mut visitor = DeleteNamed {
        cursor: Cursor::root(),
        target: "f",
    };
    let err = visitor.visit(&tree, &mut ()).unwrap_err();
    assert_eq!(
        err,
        LstError::RequiredSlotRemoved {
            node: "MethodInvocation",
            slot: "name",
        }
    );
}

/// Replaces `try: ... except E: pass` with `with suppress(E): ...`.
#[derive(Default)]
struct TryExceptPassToSuppress {
    cursor: Cursor,
}

impl HasCursor for TryExceptPassToSuppress {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }
}

impl TryExceptPassToSuppress {
    /// The exception name of a lone `except E: pass` clause.
    fn suppressed(node: &Try) -> Option<Tree> {
        let [catch] = node.catches().as_slice() else {
            return None;
        };
        let body = catch.body().statements();
        if !matches!(body.as_slice(), [Tree::Pass(_)]) {
            return None;
        }
        let declarations = catch.parameter().tree();
        let exception_type = declarations.cast::<VariableDeclarations>()?.type_expression().clone()?;
        let exception = exception_type.cast::<ExceptionType>()?.expression().clone();
        Some(exception.with_prefix(Space::empty()))
    }
}

impl TreeVisitor<()> for TryExceptPassToSuppress {
    fn visit_try(&mut self, node: &Arc<Try>, p: &mut ()) -> Visited {
        let Some(exception) = Self::suppressed(node) else {
            return walk_node(self, node, p);
        };
        let suppress = call("", "suppress", vec![exception]);
        let resource = TryResource::new(Id::random(), Space::empty(), Markers::empty(), suppress, false);
        let resources = Container::new(Space::format(" "), vec![RightPadded::build(resource)], Markers::empty());
        let replaced = node.padding().with_resources(Some(resources)).with_catches(Vec::new());
        Ok(Some(Tree::Try(replaced)))
    }
}

#[test]
fn try_except_pass_becomes_with_suppress() {
    let tree = def_try_except_pass();
    let visited = TryExceptPassToSuppress::default()
        .visit(&tree, &mut ())
        .unwrap()
        .unwrap();
    assert_prints(&visited, "def g():\n    with suppress(KeyError):\n        do()\n");
}

/// Records the cursor path at each identifier.
#[derive(Default)]
struct PathRecorder {
    cursor: Cursor,
    seen: Vec<(String, usize, Option<String>)>,
}

impl HasCursor for PathRecorder {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }
}

impl TreeVisitor<()> for PathRecorder {
    fn visit_identifier(&mut self, node: &Arc<Identifier>, _p: &mut ()) -> Visited {
        let method = self
            .cursor()
            .first_enclosing::<MethodDeclaration>()
            .map(|m| m.simple_name().to_string());
        self.seen.push((node.simple_name().to_string(), self.cursor().depth(), method));
        Ok(Some(Tree::Identifier(Arc::clone(node))))
    }
}

#[test]
fn cursor_tracks_ancestors() {
    let tree = def_pass();
    let mut recorder = PathRecorder::default();
    recorder.visit(&tree, &mut ()).unwrap();

    // PyCompilationUnit > MethodDeclaration > IdentifierWithAnnotations > Identifier
    assert_eq!(recorder.seen, vec![("f".to_string(), 4, Some("f".to_string()))]);
    assert!(recorder.cursor().is_root());
}

#[test]
fn cursor_is_restored_after_a_failed_visit() {
    let tree = call("", "f", vec![ident("", "a")]);
    let mut visitor = DeleteNamed {
        cursor: Cursor::root(),
        target: "f",
    };
    assert!(visitor.visit(&tree, &mut ()).is_err());
    assert!(visitor.cursor().is_root());
}

/// Only visits Java nodes.
#[derive(Default)]
struct JavaOnly {
    cursor: Cursor,
    visited: usize,
}

impl HasCursor for JavaOnly {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }
}

impl TreeVisitor<()> for JavaOnly {
    fn accepts_dialect(&self, dialect: Dialect) -> bool {
        dialect == Dialect::Java
    }

    fn pre_visit(&mut self, tree: Tree, _p: &mut ()) -> Visited {
        self.visited += 1;
        Ok(Some(tree))
    }
}

#[test]
fn visitors_skip_unacceptable_dialects() {
    let tree = def_pass();
    let mut visitor = JavaOnly::default();
    let visited = visitor.visit(&tree, &mut ()).unwrap().unwrap();
    assert!(visited.same(&tree));
    assert_eq!(visitor.visited, 0);

    let java = call("", "f", vec![ident("", "a")]);
    visitor.visit(&java, &mut ()).unwrap();
    assert_eq!(visitor.visited, 3);
}

#[test]
fn empty_slot_placeholder_prints_nothing() {
    let empty = Tree::Empty(Empty::build(Space::format("  ")));
    assert_prints(&empty, "  ");
}
