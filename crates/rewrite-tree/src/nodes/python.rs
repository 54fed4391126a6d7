// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Nodes that exist only in the Python dialect.
//!
//! Python reuses the shared nodes wherever the syntax lines up (`def` is a
//! `MethodDeclaration`, `with` is a `Try` with resources, `raise` is a
//! `Throw`); the variants here cover what has no shared counterpart.

use std::sync::Arc;

use rewrite_core::{Container, LeftPadded, RightPadded, Space, TypeId};

use super::declaration::{Import, TypeParameters};
use super::expression::Identifier;
use super::kinds::{
    CollectionKind, ComprehensionKind, ConversionKind, PatternKind, PyBinaryOperator,
    SpecialParameterKind, StarKind, TypeHintKind, VariableScopeKind,
};
use super::macros::lst_node;
use super::statement::Block;
use crate::tree::Tree;

lst_node! {
    /// A Python module.
    PyCompilationUnit: Python "Py$CompilationUnit" [SOURCE_FILE] {
        source_path: Arc<str>,
        charset: Option<Arc<str>>,
        imports: #padded Vec<RightPadded<Tree>> => ImportSuffix,
        statements: #padded Vec<RightPadded<Tree>> => PyCompilationUnitStatementSuffix,
        eof: Space => CompilationUnitEof,
    }
}

lst_node! {
    /// `async` before a `def`, `for` or `with`.
    Async: Python "Py$Async" [STATEMENT] {
        statement: Tree,
    }
}

lst_node! {
    Await: Python "Py$Await" [EXPRESSION] {
        expression: Tree,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// Operators without a shared counterpart: `in`, `is not`, `**`, ...
    PyBinary: Python "Py$Binary" [EXPRESSION] {
        left: Tree,
        operator: #padded LeftPadded<PyBinaryOperator> => PyBinaryOperator,
        negation: Option<Space> => PyBinaryNegation,
        right: Tree,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// `a = b = value`.
    ChainedAssignment: Python "Py$ChainedAssignment" [STATEMENT, EXPRESSION] {
        variables: #padded Vec<RightPadded<Tree>> => ChainedAssignmentVariableSuffix,
        assignment: Tree,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// The type in an `except` clause; `except*` sets `exception_group`.
    ExceptionType: Python "Py$ExceptionType" [EXPRESSION, TYPE_TREE] {
        ty: Option<TypeId>,
        exception_group: bool,
        expression: Tree,
    }
}

lst_node! {
    /// `for target in iterable:`.
    PyForLoop: Python "Py$ForLoop" [STATEMENT, LOOP] {
        target: Tree,
        iterable: #padded LeftPadded<Tree> => ForIterablePrefix,
        body: #padded RightPadded<Tree> => ForBodySuffix,
    }
}

lst_node! {
    LiteralType: Python "Py$LiteralType" [EXPRESSION, TYPE_TREE] {
        literal: Tree,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// `: T` after a variable or `-> T` after a parameter list.
    TypeHint: Python "Py$TypeHint" [TYPE_TREE] {
        kind: TypeHintKind,
        type_tree: Tree,
        ty: Option<TypeId>,
    }
}

lst_node! {
    ExpressionStatement: Python "Py$ExpressionStatement" [STATEMENT, EXPRESSION] {
        expression: Tree,
    }
}

lst_node! {
    ExpressionTypeTree: Python "Py$ExpressionTypeTree" [EXPRESSION, TYPE_TREE] {
        reference: Tree,
    }
}

lst_node! {
    StatementExpression: Python "Py$StatementExpression" [STATEMENT, EXPRESSION] {
        statement: Tree,
    }
}

lst_node! {
    /// `from x import a, b` or `import a, b`.
    MultiImport: Python "Py$MultiImport" [STATEMENT] {
        from: #padded Option<RightPadded<Tree>> => MultiImportFromSuffix,
        parenthesized: bool,
        names: #padded Container<Arc<Import>> => MultiImportNames,
    }
}

lst_node! {
    KeyValue: Python "Py$KeyValue" [EXPRESSION] {
        key: #padded RightPadded<Tree> => KeyValueSuffix,
        value: Tree,
        ty: Option<TypeId>,
    }
}

lst_node! {
    DictLiteral: Python "Py$DictLiteral" [EXPRESSION] {
        elements: #padded Container<Tree> => DictLiteralElements,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// A list, set or tuple display.
    CollectionLiteral: Python "Py$CollectionLiteral" [EXPRESSION] {
        kind: CollectionKind,
        elements: #padded Container<Tree> => CollectionLiteralElements,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// An f-string; `delimiter` is the opening quote including the prefix.
    FormattedString: Python "Py$FormattedString" [EXPRESSION] {
        delimiter: Arc<str>,
        parts: Vec<Tree>,
    }
}

lst_node! {
    /// A `{...}` replacement field inside an f-string.
    FormattedStringValue: Python "Py$FormattedString$Value" [EXPRESSION] {
        expression: #padded RightPadded<Tree> => FormattedStringValueExpressionSuffix,
        debug: #padded Option<RightPadded<bool>> => FormattedStringValueDebugSuffix,
        conversion: Option<ConversionKind>,
        format: Option<Tree>,
    }
}

lst_node! {
    Pass: Python "Py$Pass" [STATEMENT] {}
}

lst_node! {
    /// A loop or `try` followed by an `else:` block.
    TrailingElseWrapper: Python "Py$TrailingElseWrapper" [STATEMENT] {
        statement: Tree,
        else_block: #padded LeftPadded<Arc<Block>> => TrailingElseWrapperElseBlock,
    }
}

lst_node! {
    ComprehensionExpression: Python "Py$ComprehensionExpression" [EXPRESSION] {
        kind: ComprehensionKind,
        result: Tree,
        clauses: Vec<Arc<ComprehensionClause>>,
        suffix: Space => ComprehensionExpressionSuffix,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// `[async] for x in xs [if cond ...]`.
    ComprehensionClause: Python "Py$ComprehensionExpression$Clause" [] {
        is_async: #padded Option<RightPadded<bool>> => ComprehensionClauseAsyncSuffix,
        iterator_variable: Tree,
        iterated_list: #padded LeftPadded<Tree> => ComprehensionIn,
        conditions: Vec<Arc<ComprehensionCondition>>,
    }
}

lst_node! {
    ComprehensionCondition: Python "Py$ComprehensionExpression$Condition" [] {
        expression: Tree,
    }
}

lst_node! {
    TypeAlias: Python "Py$TypeAlias" [STATEMENT] {
        name: Arc<Identifier>,
        type_parameters: Option<Arc<TypeParameters>>,
        value: #padded LeftPadded<Tree> => TypeAliasValue,
        ty: Option<TypeId>,
    }
}

lst_node! {
    YieldFrom: Python "Py$YieldFrom" [EXPRESSION] {
        expression: Tree,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// `A | B` in a type position.
    UnionType: Python "Py$UnionType" [EXPRESSION, TYPE_TREE] {
        types: #padded Vec<RightPadded<Tree>> => UnionTypeSuffix,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// `global a, b` or `nonlocal a, b`.
    VariableScope: Python "Py$VariableScope" [STATEMENT] {
        kind: VariableScopeKind,
        names: #padded Vec<RightPadded<Arc<Identifier>>> => VariableScopeNameSuffix,
    }
}

lst_node! {
    Del: Python "Py$Del" [STATEMENT] {
        targets: #padded Vec<RightPadded<Tree>> => DelTargetSuffix,
    }
}

lst_node! {
    /// The bare `/` or `*` marker in a parameter list.
    SpecialParameter: Python "Py$SpecialParameter" [TYPE_TREE] {
        kind: SpecialParameterKind,
        type_hint: Option<Arc<TypeHint>>,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// `*args` or `**kwargs` in a call or a display.
    Star: Python "Py$Star" [EXPRESSION] {
        kind: StarKind,
        expression: Tree,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// `name=value` in a call.
    NamedArgument: Python "Py$NamedArgument" [EXPRESSION] {
        name: Arc<Identifier>,
        value: #padded LeftPadded<Tree> => NamedArgumentValue,
        ty: Option<TypeId>,
    }
}

lst_node! {
    TypeHintedExpression: Python "Py$TypeHintedExpression" [EXPRESSION] {
        expression: Tree,
        type_hint: Arc<TypeHint>,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// `raise error from cause`.
    ErrorFrom: Python "Py$ErrorFrom" [EXPRESSION] {
        error: Tree,
        from: #padded LeftPadded<Tree> => ErrorFromSource,
        ty: Option<TypeId>,
    }
}

lst_node! {
    MatchCase: Python "Py$MatchCase" [EXPRESSION] {
        pattern: Arc<MatchCasePattern>,
        guard: #padded Option<LeftPadded<Tree>> => MatchCaseGuard,
        ty: Option<TypeId>,
    }
}

lst_node! {
    MatchCasePattern: Python "Py$MatchCase$Pattern" [EXPRESSION] {
        kind: PatternKind,
        children: #padded Container<Tree> => MatchPatternElements,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// `start:stop:step` inside a subscript.
    Slice: Python "Py$Slice" [EXPRESSION] {
        start: #padded Option<RightPadded<Tree>> => SliceStartSuffix,
        stop: #padded Option<RightPadded<Tree>> => SliceStopSuffix,
        step: #padded Option<RightPadded<Tree>> => SliceStepSuffix,
    }
}
