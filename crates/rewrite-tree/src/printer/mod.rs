// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Rendering trees back to source text.
//!
//! [`PythonPrinter`] is a [`TreeVisitor`] that appends to a
//! [`PrintOutputCapture`] instead of rebuilding. Every node prints as its
//! prefix, then its keywords and children in declared order with their
//! envelopes. The printer never invents whitespace: two trees that differ
//! only in trivia print differently, and an untouched tree prints back to
//! the bytes it was parsed from.
//!
//! Nodes the Python dialect shares with Java print in Python syntax
//! (`Block` opens with `:`, `Try` with resources is a `with` statement);
//! Java-only nodes print in Java syntax.

mod java;
mod python;

use std::fmt;
use std::sync::Arc;

use rewrite_core::{Container, LeftPadded, LstResult, Marker, Markers, RightPadded, Space};

use crate::cursor::Cursor;
use crate::location::Location;
use crate::tree::{Tree, TreeVariant};
use crate::visitor::{with_cursor, HasCursor, TreeVisitor, Visited};

/// Accumulated output of a print.
#[derive(Debug, Default, Clone)]
pub struct PrintOutputCapture {
    out: String,
}

impl PrintOutputCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self
    }

    pub fn out(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl fmt::Display for PrintOutputCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.out)
    }
}

/// Prints Python source, and Java-only nodes in Java syntax.
#[derive(Debug, Default)]
pub struct PythonPrinter {
    cursor: Cursor,
}

impl PythonPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A printer positioned below `cursor`, for printing a subtree in context.
    pub fn with_parent(cursor: Cursor) -> Self {
        Self { cursor }
    }

    /// Print a whole tree to a string.
    pub fn print(tree: &Tree) -> LstResult<String> {
        let mut capture = PrintOutputCapture::new();
        PythonPrinter::new().visit(tree, &mut capture)?;
        Ok(capture.into_string())
    }

    fn print_tree(&mut self, tree: &Tree, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.space(tree.prefix(), p);
        self.search_result(tree.markers(), p);
        match tree {
            Tree::AnnotatedType(n) => self.annotated_type(n, p),
            Tree::Annotation(n) => self.annotation(n, p),
            Tree::ArrayAccess(n) => self.array_access(n, p),
            Tree::ArrayDimension(n) => self.array_dimension(n, p),
            Tree::ArrayType(n) => self.array_type(n, p),
            Tree::Assert(n) => self.assert(n, p),
            Tree::Assignment(n) => self.assignment(n, p),
            Tree::AssignmentOperation(n) => self.assignment_operation(n, p),
            Tree::Binary(n) => self.binary(n, p),
            Tree::Block(n) => self.block(n, p),
            Tree::Break(n) => self.keyword_with_label("break", n.label(), p),
            Tree::Case(n) => self.case(n, p),
            Tree::ClassDeclaration(n) => self.class_declaration(n, p),
            Tree::ClassDeclarationKind(n) => self.class_declaration_kind(n, p),
            Tree::CompilationUnit(n) => self.compilation_unit(n, p),
            Tree::Continue(n) => self.keyword_with_label("continue", n.label(), p),
            Tree::DoWhileLoop(n) => self.do_while_loop(n, p),
            Tree::Empty(_) => Ok(()),
            Tree::EnumValue(n) => self.enum_value(n, p),
            Tree::EnumValueSet(n) => self.enum_value_set(n, p),
            Tree::FieldAccess(n) => self.field_access(n, p),
            Tree::ForEachLoop(n) => self.for_each_loop(n, p),
            Tree::ForEachControl(n) => self.for_each_control(n, p),
            Tree::ForLoop(n) => self.for_loop(n, p),
            Tree::ForControl(n) => self.for_control(n, p),
            Tree::ParenthesizedTypeTree(n) => self.parenthesized_type_tree(n, p),
            Tree::Identifier(n) => self.identifier(n, p),
            Tree::If(n) => self.if_statement(n, p),
            Tree::Else(n) => self.else_part(n, p),
            Tree::Import(n) => self.import(n, p),
            Tree::InstanceOf(n) => self.instance_of(n, p),
            Tree::IntersectionType(n) => self.container(n.padding().bounds(), "", "&", "", p),
            Tree::Label(n) => self.label(n, p),
            Tree::Lambda(n) => self.lambda(n, p),
            Tree::LambdaParameters(n) => self.lambda_parameters(n, p),
            Tree::Literal(n) => self.literal(n, p),
            Tree::MemberReference(n) => self.member_reference(n, p),
            Tree::MethodDeclaration(n) => self.method_declaration(n, p),
            Tree::IdentifierWithAnnotations(n) => self.identifier_with_annotations(n, p),
            Tree::MethodInvocation(n) => self.method_invocation(n, p),
            Tree::Modifier(n) => self.modifier(n, p),
            Tree::MultiCatch(n) => self.padded_list(n.padding().alternatives(), "|", p),
            Tree::NewArray(n) => self.new_array(n, p),
            Tree::NewClass(n) => self.new_class(n, p),
            Tree::NullableType(n) => self.nullable_type(n, p),
            Tree::Package(n) => self.package(n, p),
            Tree::ParameterizedType(n) => self.parameterized_type(n, p),
            Tree::Parentheses(n) => self.parentheses(n.padding().tree(), p),
            Tree::ControlParentheses(n) => self.right_padded(n.padding().tree(), "", p),
            Tree::Primitive(n) => {
                p.append(n.primitive().keyword());
                Ok(())
            }
            Tree::Return(n) => self.keyword_with("return", n.expression().as_ref(), p),
            Tree::Switch(n) => self.switch(n, p),
            Tree::SwitchExpression(n) => self.switch_expression(n, p),
            Tree::Synchronized(n) => self.synchronized(n, p),
            Tree::Ternary(n) => self.ternary(n, p),
            Tree::Throw(n) => self.keyword_with("raise", Some(n.exception()), p),
            Tree::Try(n) => self.try_statement(n, p),
            Tree::TryResource(n) => self.try_resource(n, p),
            Tree::Catch(n) => self.catch(n, p),
            Tree::TypeCast(n) => self.type_cast(n, p),
            Tree::TypeParameter(n) => self.type_parameter(n, p),
            Tree::TypeParameters(n) => self.type_parameters(n, p),
            Tree::Unary(n) => self.unary(n, p),
            Tree::VariableDeclarations(n) => self.variable_declarations(n, p),
            Tree::NamedVariable(n) => self.named_variable(n, None, p),
            Tree::WhileLoop(n) => self.while_loop(n, p),
            Tree::Wildcard(n) => self.wildcard(n, p),
            Tree::Yield(n) => self.keyword_with("yield", Some(n.value()), p),
            Tree::Unknown(n) => self.node(n.source(), p),
            Tree::UnknownSource(n) => {
                p.append(n.text());
                Ok(())
            }
            Tree::Erroneous(n) => {
                p.append(n.text());
                Ok(())
            }
            Tree::DeconstructionPattern(n) => self.deconstruction_pattern(n, p),
            Tree::PyCompilationUnit(n) => self.py_compilation_unit(n, p),
            Tree::Async(n) => self.keyword_with("async", Some(n.statement()), p),
            Tree::Await(n) => self.keyword_with("await", Some(n.expression()), p),
            Tree::PyBinary(n) => self.py_binary(n, p),
            Tree::ChainedAssignment(n) => self.chained_assignment(n, p),
            Tree::ExceptionType(n) => self.exception_type(n, p),
            Tree::PyForLoop(n) => self.py_for_loop(n, p),
            Tree::LiteralType(n) => self.tree(n.literal(), p),
            Tree::TypeHint(n) => self.type_hint(n, p),
            Tree::ExpressionStatement(n) => self.tree(n.expression(), p),
            Tree::ExpressionTypeTree(n) => self.tree(n.reference(), p),
            Tree::StatementExpression(n) => self.tree(n.statement(), p),
            Tree::MultiImport(n) => self.multi_import(n, p),
            Tree::KeyValue(n) => self.key_value(n, p),
            Tree::DictLiteral(n) => self.container(n.padding().elements(), "{", ",", "}", p),
            Tree::CollectionLiteral(n) => self.collection_literal(n, p),
            Tree::FormattedString(n) => self.formatted_string(n, p),
            Tree::FormattedStringValue(n) => self.formatted_string_value(n, p),
            Tree::Pass(_) => {
                p.append("pass");
                Ok(())
            }
            Tree::TrailingElseWrapper(n) => self.trailing_else_wrapper(n, p),
            Tree::ComprehensionExpression(n) => self.comprehension_expression(n, p),
            Tree::ComprehensionClause(n) => self.comprehension_clause(n, p),
            Tree::ComprehensionCondition(n) => self.keyword_with("if", Some(n.expression()), p),
            Tree::TypeAlias(n) => self.type_alias(n, p),
            Tree::YieldFrom(n) => self.keyword_with("from", Some(n.expression()), p),
            Tree::UnionType(n) => self.padded_list(n.padding().types(), "|", p),
            Tree::VariableScope(n) => self.variable_scope(n, p),
            Tree::Del(n) => {
                p.append("del");
                self.padded_list(n.padding().targets(), ",", p)
            }
            Tree::SpecialParameter(n) => self.special_parameter(n, p),
            Tree::Star(n) => {
                p.append(n.kind().symbol());
                self.tree(n.expression(), p)
            }
            Tree::NamedArgument(n) => {
                self.node(n.name(), p)?;
                self.left_padded("=", n.padding().value(), p)
            }
            Tree::TypeHintedExpression(n) => {
                self.tree(n.expression(), p)?;
                self.node(n.type_hint(), p)
            }
            Tree::ErrorFrom(n) => {
                self.tree(n.error(), p)?;
                self.left_padded("from", n.padding().from(), p)
            }
            Tree::MatchCase(n) => self.match_case(n, p),
            Tree::MatchCasePattern(n) => self.match_case_pattern(n, p),
            Tree::Slice(n) => self.slice(n, p),
        }
    }

    // ------------------------------------------------------------------------
    // Shared helpers
    // ------------------------------------------------------------------------

    fn space(&mut self, space: &Space, p: &mut PrintOutputCapture) {
        p.append(space.whitespace());
        for comment in space.comments() {
            if comment.is_multiline() {
                p.append("/*").append(comment.text()).append("*/");
            } else {
                p.append("#").append(comment.text());
            }
            p.append(comment.suffix());
        }
    }

    fn search_result(&mut self, markers: &Markers, p: &mut PrintOutputCapture) {
        if let Some(marker) = markers.find(Marker::SEARCH_RESULT) {
            match marker.detail() {
                Some(description) => p.append("~~(").append(description).append(")~~>"),
                None => p.append("~~>"),
            };
        }
    }

    fn tree(&mut self, tree: &Tree, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.visit(tree, p).map(drop)
    }

    fn optional(&mut self, tree: Option<&Tree>, p: &mut PrintOutputCapture) -> LstResult<()> {
        match tree {
            Some(tree) => self.tree(tree, p),
            None => Ok(()),
        }
    }

    fn node<N: TreeVariant>(&mut self, node: &Arc<N>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.tree(&N::into_tree(Arc::clone(node)), p)
    }

    fn nodes<N: TreeVariant>(&mut self, nodes: &[Arc<N>], p: &mut PrintOutputCapture) -> LstResult<()> {
        nodes.iter().try_for_each(|node| self.node(node, p))
    }

    /// `keyword` followed by an optional operand, e.g. `return x`.
    fn keyword_with(&mut self, keyword: &str, operand: Option<&Tree>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append(keyword);
        self.optional(operand, p)
    }

    fn right_padded<T: PrintElement>(
        &mut self,
        right: &RightPadded<T>,
        suffix: &str,
        p: &mut PrintOutputCapture,
    ) -> LstResult<()> {
        right.element().print_element(self, p)?;
        self.space(right.after(), p);
        p.append(suffix);
        Ok(())
    }

    fn left_padded<T: PrintElement>(
        &mut self,
        keyword: &str,
        left: &LeftPadded<T>,
        p: &mut PrintOutputCapture,
    ) -> LstResult<()> {
        self.space(left.before(), p);
        p.append(keyword);
        left.element().print_element(self, p)
    }

    /// Elements joined by `separator`, honoring a trailing-comma marker on the last.
    fn padded_list<T: PrintElement>(
        &mut self,
        list: &[RightPadded<T>],
        separator: &str,
        p: &mut PrintOutputCapture,
    ) -> LstResult<()> {
        for (i, right) in list.iter().enumerate() {
            let last = i + 1 == list.len();
            self.right_padded(right, if last { "" } else { separator }, p)?;
            if last {
                if let Some(marker) = right.markers().find(Marker::TRAILING_COMMA) {
                    p.append(",").append(marker.detail().unwrap_or(""));
                }
            }
        }
        Ok(())
    }

    fn container<T: PrintElement>(
        &mut self,
        container: &Container<T>,
        open: &str,
        separator: &str,
        close: &str,
        p: &mut PrintOutputCapture,
    ) -> LstResult<()> {
        self.space(container.before(), p);
        p.append(open);
        self.padded_list(container.padded_elements(), separator, p)?;
        p.append(close);
        Ok(())
    }

    fn optional_container<T: PrintElement>(
        &mut self,
        container: Option<&Container<T>>,
        open: &str,
        separator: &str,
        close: &str,
        p: &mut PrintOutputCapture,
    ) -> LstResult<()> {
        match container {
            Some(container) => self.container(container, open, separator, close, p),
            None => Ok(()),
        }
    }
}

impl HasCursor for PythonPrinter {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }
}

impl TreeVisitor<PrintOutputCapture> for PythonPrinter {
    fn visit(&mut self, tree: &Tree, p: &mut PrintOutputCapture) -> Visited {
        with_cursor(self, tree.clone(), |printer| printer.print_tree(tree, p))?;
        Ok(Some(tree.clone()))
    }

    fn visit_space(&mut self, space: &Space, _location: Option<Location>, p: &mut PrintOutputCapture) -> LstResult<Space> {
        self.space(space, p);
        Ok(space.clone())
    }
}

/// An envelope element the printer knows how to render.
trait PrintElement {
    fn print_element(&self, printer: &mut PythonPrinter, p: &mut PrintOutputCapture) -> LstResult<()>;
}

impl PrintElement for Tree {
    fn print_element(&self, printer: &mut PythonPrinter, p: &mut PrintOutputCapture) -> LstResult<()> {
        printer.tree(self, p)
    }
}

impl<N: TreeVariant> PrintElement for Arc<N> {
    fn print_element(&self, printer: &mut PythonPrinter, p: &mut PrintOutputCapture) -> LstResult<()> {
        printer.node(self, p)
    }
}

/// A bare space element, as in `[]` dimension markers.
impl PrintElement for Space {
    fn print_element(&self, printer: &mut PythonPrinter, p: &mut PrintOutputCapture) -> LstResult<()> {
        printer.space(self, p);
        Ok(())
    }
}
