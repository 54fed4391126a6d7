// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Statements and control flow.

use std::sync::Arc;

use rewrite_core::{Container, Id, LeftPadded, Markers, RightPadded, Space};

use super::declaration::VariableDeclarations;
use super::expression::{ControlParentheses, Identifier};
use super::kinds::CaseType;
use super::macros::lst_node;
use crate::tree::Tree;

lst_node! {
    /// A sequence of statements; `end` is the trivia before the closing delimiter.
    Block: Java "J$Block" [STATEMENT] {
        is_static: #padded RightPadded<bool> => StaticInitSuffix,
        statements: #padded Vec<RightPadded<Tree>> => BlockStatementSuffix,
        end: Space => BlockEnd,
    }
}

lst_node! {
    If: Java "J$If" [STATEMENT] {
        if_condition: Arc<ControlParentheses>,
        then_part: #padded RightPadded<Tree> => IfThenSuffix,
        else_part: Option<Arc<Else>>,
    }
}

lst_node! {
    /// The `else` branch; an `elif` is an `Else` whose body is an `If`.
    Else: Java "J$If$Else" [] {
        body: #padded RightPadded<Tree> => IfElseSuffix,
    }
}

lst_node! {
    WhileLoop: Java "J$WhileLoop" [STATEMENT, LOOP] {
        condition: Arc<ControlParentheses>,
        body: #padded RightPadded<Tree> => WhileBodySuffix,
    }
}

lst_node! {
    DoWhileLoop: Java "J$DoWhileLoop" [STATEMENT, LOOP] {
        body: #padded RightPadded<Tree> => WhileBodySuffix,
        while_condition: #padded LeftPadded<Arc<ControlParentheses>> => WhileCondition,
    }
}

lst_node! {
    ForLoop: Java "J$ForLoop" [STATEMENT, LOOP] {
        control: Arc<ForControl>,
        body: #padded RightPadded<Tree> => ForBodySuffix,
    }
}

lst_node! {
    ForControl: Java "J$ForLoop$Control" [] {
        init: #padded Vec<RightPadded<Tree>> => ForInitSuffix,
        condition: #padded RightPadded<Tree> => ForConditionSuffix,
        update: #padded Vec<RightPadded<Tree>> => ForUpdateSuffix,
    }
}

lst_node! {
    ForEachLoop: Java "J$ForEachLoop" [STATEMENT, LOOP] {
        control: Arc<ForEachControl>,
        body: #padded RightPadded<Tree> => ForBodySuffix,
    }
}

lst_node! {
    ForEachControl: Java "J$ForEachLoop$Control" [] {
        variable: #padded RightPadded<Arc<VariableDeclarations>> => ForeachVariableSuffix,
        iterable: #padded RightPadded<Tree> => ForeachIterableSuffix,
    }
}

lst_node! {
    /// `try`, or in Python a `with` statement when resources are present.
    Try: Java "J$Try" [STATEMENT] {
        resources: #padded Option<Container<Arc<TryResource>>> => TryResources,
        body: Arc<Block>,
        catches: Vec<Arc<Catch>>,
        finally: #padded Option<LeftPadded<Arc<Block>>> => TryFinally,
    }
}

lst_node! {
    TryResource: Java "J$Try$Resource" [] {
        variable_declarations: Tree,
        terminated_with_semicolon: bool,
    }
}

lst_node! {
    /// `catch (...)` or a Python `except` clause.
    Catch: Java "J$Try$Catch" [] {
        parameter: Arc<ControlParentheses>,
        body: Arc<Block>,
    }
}

lst_node! {
    Switch: Java "J$Switch" [STATEMENT] {
        selector: Arc<ControlParentheses>,
        cases: Arc<Block>,
    }
}

lst_node! {
    Case: Java "J$Case" [STATEMENT] {
        case_type: CaseType,
        case_labels: #padded Container<Tree> => CaseCaseLabels,
        statements: #padded Container<Tree> => CaseStatements,
        body: #padded Option<RightPadded<Tree>> => CaseBodySuffix,
        guard: Option<Tree>,
    }
}

lst_node! {
    Return: Java "J$Return" [STATEMENT] {
        expression: Option<Tree>,
    }
}

lst_node! {
    /// `throw`, or Python `raise`.
    Throw: Java "J$Throw" [STATEMENT] {
        exception: Tree,
    }
}

lst_node! {
    Break: Java "J$Break" [STATEMENT] {
        label: Option<Arc<Identifier>>,
    }
}

lst_node! {
    Continue: Java "J$Continue" [STATEMENT] {
        label: Option<Arc<Identifier>>,
    }
}

lst_node! {
    Label: Java "J$Label" [STATEMENT] {
        label: #padded RightPadded<Arc<Identifier>> => LabelSuffix,
        statement: Tree,
    }
}

lst_node! {
    Assert: Java "J$Assert" [STATEMENT] {
        condition: Tree,
        detail: Option<LeftPadded<Tree>> => AssertDetailPrefix,
    }
}

lst_node! {
    Synchronized: Java "J$Synchronized" [STATEMENT] {
        lock: Arc<ControlParentheses>,
        body: Arc<Block>,
    }
}

lst_node! {
    Yield: Java "J$Yield" [STATEMENT] {
        implicit: bool,
        value: Tree,
    }
}

lst_node! {
    /// Nothing. Fills slots that must hold a tree but have no source.
    Empty: Java "J$Empty" [STATEMENT, EXPRESSION, TYPE_TREE] {}
}

impl Empty {
    /// An empty node with a fresh id.
    pub fn build(prefix: Space) -> Arc<Self> {
        Empty::new(Id::random(), prefix, Markers::empty())
    }
}
