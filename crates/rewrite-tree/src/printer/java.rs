// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Printing of the shared node set.

use std::sync::Arc;

use rewrite_core::{LstResult, RightPadded};

use super::{PrintOutputCapture, PythonPrinter};
use crate::nodes::*;
use crate::tree::Tree;
use crate::visitor::{with_cursor, HasCursor};

impl PythonPrinter {
    /// A control expression with its Java parentheses, as in `switch (x)`.
    fn control_parens(&mut self, control: &Arc<ControlParentheses>, p: &mut PrintOutputCapture) -> LstResult<()> {
        with_cursor(self, Tree::ControlParentheses(Arc::clone(control)), |printer| {
            printer.space(control.prefix(), p);
            p.append("(");
            printer.right_padded(control.padding().tree(), ")", p)
        })
    }

    pub(super) fn keyword_with_label(&mut self, keyword: &str, label: &Option<Arc<Identifier>>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append(keyword);
        match label {
            Some(label) => self.node(label, p),
            None => Ok(()),
        }
    }

    pub(super) fn annotated_type(&mut self, n: &Arc<AnnotatedType>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.annotations(), p)?;
        self.tree(n.type_expression(), p)
    }

    pub(super) fn annotation(&mut self, n: &Arc<Annotation>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("@");
        self.tree(n.annotation_type(), p)?;
        self.optional_container(n.padding().arguments().as_ref(), "(", ",", ")", p)
    }

    pub(super) fn array_access(&mut self, n: &Arc<ArrayAccess>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.tree(n.indexed(), p)?;
        self.node(n.dimension(), p)
    }

    pub(super) fn array_dimension(&mut self, n: &Arc<ArrayDimension>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("[");
        self.right_padded(n.padding().index(), "]", p)
    }

    pub(super) fn array_type(&mut self, n: &Arc<ArrayType>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.tree(n.element_type(), p)?;
        self.nodes(n.annotations(), p)?;
        if let Some(dimension) = n.dimension() {
            self.left_padded("[", dimension, p)?;
            p.append("]");
        }
        Ok(())
    }

    pub(super) fn assert(&mut self, n: &Arc<Assert>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("assert");
        self.tree(n.condition(), p)?;
        match n.detail() {
            Some(detail) => self.left_padded(",", detail, p),
            None => Ok(()),
        }
    }

    pub(super) fn assignment(&mut self, n: &Arc<Assignment>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.tree(n.variable(), p)?;
        self.left_padded("=", n.padding().assignment(), p)
    }

    pub(super) fn assignment_operation(&mut self, n: &Arc<AssignmentOperation>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.tree(n.variable(), p)?;
        let operator = n.padding().operator();
        self.space(operator.before(), p);
        p.append(operator.element().symbol()).append("=");
        self.tree(n.assignment(), p)
    }

    pub(super) fn binary(&mut self, n: &Arc<Binary>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.tree(n.left(), p)?;
        let operator = n.padding().operator();
        self.space(operator.before(), p);
        p.append(operator.element().symbol());
        self.tree(n.right(), p)
    }

    pub(super) fn block(&mut self, n: &Arc<Block>, p: &mut PrintOutputCapture) -> LstResult<()> {
        let is_static = n.padding().is_static();
        if *is_static.element() {
            p.append("static");
            self.space(is_static.after(), p);
        }
        p.append(":");
        self.padded_list(n.padding().statements(), "", p)?;
        self.space(n.end(), p);
        Ok(())
    }

    pub(super) fn case(&mut self, n: &Arc<Case>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("case");
        self.container(n.padding().case_labels(), "", ",", "", p)?;
        self.optional(n.guard().as_ref(), p)?;
        let statements = n.padding().statements();
        self.space(statements.before(), p);
        match (n.case_type(), n.padding().body()) {
            (CaseType::Statement, Some(_)) => {}
            (CaseType::Statement, None) => {
                p.append(":");
            }
            (CaseType::Rule, _) => {
                p.append("->");
            }
        }
        self.padded_list(statements.padded_elements(), "", p)?;
        match n.padding().body() {
            Some(body) => self.right_padded(body, "", p),
            None => Ok(()),
        }
    }

    pub(super) fn class_declaration(&mut self, n: &Arc<ClassDeclaration>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.leading_annotations(), p)?;
        self.nodes(n.modifiers(), p)?;
        self.node(n.kind(), p)?;
        self.node(n.name(), p)?;
        let padding = n.padding();
        self.optional_container(padding.type_parameters().as_ref(), "[", ",", "]", p)?;
        self.optional_container(padding.primary_constructor().as_ref(), "(", ",", ")", p)?;
        if let Some(extends) = padding.extends() {
            self.left_padded("extends", extends, p)?;
        }
        self.optional_container(padding.implements().as_ref(), "(", ",", ")", p)?;
        self.optional_container(padding.permits().as_ref(), "permits", ",", "", p)?;
        self.node(n.body(), p)
    }

    pub(super) fn class_declaration_kind(&mut self, n: &Arc<ClassDeclarationKind>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.annotations(), p)?;
        p.append(n.kind().symbol());
        Ok(())
    }

    pub(super) fn compilation_unit(&mut self, n: &Arc<CompilationUnit>, p: &mut PrintOutputCapture) -> LstResult<()> {
        if let Some(package) = n.padding().package_declaration() {
            self.right_padded(package, ";", p)?;
        }
        for import in n.padding().imports() {
            self.right_padded(import, ";", p)?;
        }
        self.nodes(n.classes(), p)?;
        self.space(n.eof(), p);
        Ok(())
    }

    pub(super) fn do_while_loop(&mut self, n: &Arc<DoWhileLoop>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("do");
        self.right_padded(n.padding().body(), "", p)?;
        let condition = n.padding().while_condition();
        self.space(condition.before(), p);
        p.append("while");
        self.control_parens(condition.element(), p)
    }

    pub(super) fn enum_value(&mut self, n: &Arc<EnumValue>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.annotations(), p)?;
        self.node(n.name(), p)?;
        match n.initializer() {
            Some(initializer) => self.node(initializer, p),
            None => Ok(()),
        }
    }

    pub(super) fn enum_value_set(&mut self, n: &Arc<EnumValueSet>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.padded_list(n.padding().enums(), ",", p)?;
        if *n.terminated_with_semicolon() {
            p.append(";");
        }
        Ok(())
    }

    pub(super) fn field_access(&mut self, n: &Arc<FieldAccess>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.tree(n.target(), p)?;
        let name = n.padding().name();
        // A bare module name in an import has no target to qualify.
        let dot = if matches!(n.target(), Tree::Empty(_)) { "" } else { "." };
        self.left_padded(dot, name, p)
    }

    pub(super) fn for_each_loop(&mut self, n: &Arc<ForEachLoop>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("for");
        self.node(n.control(), p)?;
        self.right_padded(n.padding().body(), "", p)
    }

    pub(super) fn for_each_control(&mut self, n: &Arc<ForEachControl>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("(");
        self.right_padded(n.padding().variable(), ":", p)?;
        self.right_padded(n.padding().iterable(), ")", p)
    }

    pub(super) fn for_loop(&mut self, n: &Arc<ForLoop>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("for");
        self.node(n.control(), p)?;
        self.right_padded(n.padding().body(), "", p)
    }

    pub(super) fn for_control(&mut self, n: &Arc<ForControl>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("(");
        self.padded_list(n.padding().init(), ",", p)?;
        p.append(";");
        self.right_padded(n.padding().condition(), ";", p)?;
        self.padded_list(n.padding().update(), ",", p)?;
        p.append(")");
        Ok(())
    }

    pub(super) fn parenthesized_type_tree(&mut self, n: &Arc<ParenthesizedTypeTree>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.annotations(), p)?;
        self.node(n.parenthesized_type(), p)
    }

    pub(super) fn identifier(&mut self, n: &Arc<Identifier>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.annotations(), p)?;
        p.append(n.simple_name());
        Ok(())
    }

    pub(super) fn if_statement(&mut self, n: &Arc<If>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("if");
        self.node(n.if_condition(), p)?;
        self.right_padded(n.padding().then_part(), "", p)?;
        match n.else_part() {
            Some(else_part) => self.node(else_part, p),
            None => Ok(()),
        }
    }

    pub(super) fn else_part(&mut self, n: &Arc<Else>, p: &mut PrintOutputCapture) -> LstResult<()> {
        let body = n.padding().body();
        // `elif` is an `else` whose body is an `if`.
        p.append(if matches!(body.element(), Tree::If(_)) { "el" } else { "else" });
        self.right_padded(body, "", p)
    }

    pub(super) fn import(&mut self, n: &Arc<Import>, p: &mut PrintOutputCapture) -> LstResult<()> {
        let in_multi_import = matches!(self.cursor().parent_tree(), Some(Tree::MultiImport(_)));
        if !in_multi_import {
            p.append("import");
            let is_static = n.padding().is_static();
            if *is_static.element() {
                self.space(is_static.before(), p);
                p.append("static");
            }
        }
        self.node(n.qualid(), p)?;
        match n.padding().alias() {
            Some(alias) => self.left_padded("as", alias, p),
            None => Ok(()),
        }
    }

    pub(super) fn instance_of(&mut self, n: &Arc<InstanceOf>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.right_padded(n.padding().expression(), "instanceof", p)?;
        self.tree(n.clazz(), p)?;
        self.optional(n.pattern().as_ref(), p)
    }

    pub(super) fn label(&mut self, n: &Arc<Label>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.right_padded(n.padding().label(), ":", p)?;
        self.tree(n.statement(), p)
    }

    pub(super) fn lambda(&mut self, n: &Arc<Lambda>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("lambda");
        self.node(n.parameters(), p)?;
        self.space(n.arrow(), p);
        p.append(":");
        self.tree(n.body(), p)
    }

    pub(super) fn lambda_parameters(&mut self, n: &Arc<LambdaParameters>, p: &mut PrintOutputCapture) -> LstResult<()> {
        let parenthesized = *n.parenthesized();
        if parenthesized {
            p.append("(");
        }
        self.padded_list(n.padding().parameters(), ",", p)?;
        if parenthesized {
            p.append(")");
        }
        Ok(())
    }

    pub(super) fn literal(&mut self, n: &Arc<Literal>, p: &mut PrintOutputCapture) -> LstResult<()> {
        if let Some(source) = n.value_source() {
            p.append(source);
            return Ok(());
        }
        match n.value() {
            None | Some(LiteralValue::None) => p.append("None"),
            Some(LiteralValue::Bool(true)) => p.append("True"),
            Some(LiteralValue::Bool(false)) => p.append("False"),
            Some(LiteralValue::Int(value)) => p.append(&value.to_string()),
            Some(LiteralValue::Float(value)) => p.append(&value.to_string()),
            Some(LiteralValue::Str(value)) => p.append("'").append(value).append("'"),
        };
        Ok(())
    }

    pub(super) fn member_reference(&mut self, n: &Arc<MemberReference>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.right_padded(n.padding().containing(), "::", p)?;
        self.optional_container(n.padding().type_parameters().as_ref(), "<", ",", ">", p)?;
        self.left_padded("", n.padding().reference(), p)
    }

    pub(super) fn method_declaration(&mut self, n: &Arc<MethodDeclaration>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.leading_annotations(), p)?;
        self.nodes(n.modifiers(), p)?;
        if let Some(type_parameters) = n.type_parameters() {
            self.node(type_parameters, p)?;
        }
        self.node(n.name(), p)?;
        self.container(n.padding().parameters(), "(", ",", ")", p)?;
        self.optional(n.return_type_expression().as_ref(), p)?;
        self.optional_container(n.padding().throws().as_ref(), "throws", ",", "", p)?;
        if let Some(body) = n.body() {
            self.node(body, p)?;
        }
        match n.padding().default_value() {
            Some(default_value) => self.left_padded("default", default_value, p),
            None => Ok(()),
        }
    }

    pub(super) fn identifier_with_annotations(&mut self, n: &Arc<IdentifierWithAnnotations>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.annotations(), p)?;
        self.node(n.identifier(), p)
    }

    pub(super) fn method_invocation(&mut self, n: &Arc<MethodInvocation>, p: &mut PrintOutputCapture) -> LstResult<()> {
        if let Some(select) = n.padding().select() {
            self.right_padded(select, ".", p)?;
        }
        self.optional_container(n.padding().type_parameters().as_ref(), "<", ",", ">", p)?;
        self.node(n.name(), p)?;
        self.container(n.padding().arguments(), "(", ",", ")", p)
    }

    pub(super) fn modifier(&mut self, n: &Arc<Modifier>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.annotations(), p)?;
        p.append(n.keyword_text());
        Ok(())
    }

    pub(super) fn new_array(&mut self, n: &Arc<NewArray>, p: &mut PrintOutputCapture) -> LstResult<()> {
        if n.type_expression().is_some() {
            p.append("new");
        }
        self.optional(n.type_expression().as_ref(), p)?;
        self.nodes(n.dimensions(), p)?;
        self.optional_container(n.padding().initializer().as_ref(), "{", ",", "}", p)
    }

    pub(super) fn new_class(&mut self, n: &Arc<NewClass>, p: &mut PrintOutputCapture) -> LstResult<()> {
        if let Some(enclosing) = n.padding().enclosing() {
            self.right_padded(enclosing, ".", p)?;
        }
        self.space(n.new_space(), p);
        p.append("new");
        self.optional(n.clazz().as_ref(), p)?;
        self.container(n.padding().arguments(), "(", ",", ")", p)?;
        match n.body() {
            Some(body) => self.node(body, p),
            None => Ok(()),
        }
    }

    pub(super) fn nullable_type(&mut self, n: &Arc<NullableType>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.annotations(), p)?;
        self.right_padded(n.padding().type_tree(), "?", p)
    }

    pub(super) fn package(&mut self, n: &Arc<Package>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.annotations(), p)?;
        p.append("package");
        self.tree(n.expression(), p)
    }

    pub(super) fn parameterized_type(&mut self, n: &Arc<ParameterizedType>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.tree(n.clazz(), p)?;
        self.optional_container(n.padding().type_parameters().as_ref(), "[", ",", "]", p)
    }

    pub(super) fn parentheses(&mut self, tree: &RightPadded<Tree>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("(");
        self.right_padded(tree, ")", p)
    }

    /// Python's `match` statement.
    pub(super) fn switch(&mut self, n: &Arc<Switch>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("match");
        self.node(n.selector(), p)?;
        self.node(n.cases(), p)
    }

    pub(super) fn switch_expression(&mut self, n: &Arc<SwitchExpression>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("switch");
        self.control_parens(n.selector(), p)?;
        self.node(n.cases(), p)
    }

    pub(super) fn synchronized(&mut self, n: &Arc<Synchronized>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("synchronized");
        self.control_parens(n.lock(), p)?;
        self.node(n.body(), p)
    }

    /// `true_part if condition else false_part`.
    pub(super) fn ternary(&mut self, n: &Arc<Ternary>, p: &mut PrintOutputCapture) -> LstResult<()> {
        let true_part = n.padding().true_part();
        self.tree(true_part.element(), p)?;
        self.space(true_part.before(), p);
        p.append("if");
        self.tree(n.condition(), p)?;
        self.left_padded("else", n.padding().false_part(), p)
    }

    /// `try` or, with resources, `with`.
    pub(super) fn try_statement(&mut self, n: &Arc<Try>, p: &mut PrintOutputCapture) -> LstResult<()> {
        match n.padding().resources() {
            Some(resources) => {
                p.append("with");
                self.container(resources, "", ",", "", p)?;
            }
            None => {
                p.append("try");
            }
        }
        self.node(n.body(), p)?;
        self.nodes(n.catches(), p)?;
        match n.padding().finally() {
            Some(finally) => self.left_padded("finally", finally, p),
            None => Ok(()),
        }
    }

    /// A `with` item; `expr as name` is stored as an assignment to `name`.
    pub(super) fn try_resource(&mut self, n: &Arc<TryResource>, p: &mut PrintOutputCapture) -> LstResult<()> {
        match n.variable_declarations() {
            Tree::Assignment(assignment) => {
                self.space(assignment.prefix(), p);
                let value = assignment.padding().assignment();
                self.tree(value.element(), p)?;
                self.space(value.before(), p);
                p.append("as");
                self.tree(assignment.variable(), p)?;
            }
            other => self.tree(other, p)?,
        }
        if *n.terminated_with_semicolon() {
            p.append(";");
        }
        Ok(())
    }

    pub(super) fn catch(&mut self, n: &Arc<Catch>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("except");
        self.node(n.parameter(), p)?;
        self.node(n.body(), p)
    }

    pub(super) fn type_cast(&mut self, n: &Arc<TypeCast>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.control_parens(n.clazz(), p)?;
        self.tree(n.expression(), p)
    }

    pub(super) fn type_parameter(&mut self, n: &Arc<TypeParameter>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.annotations(), p)?;
        self.nodes(n.modifiers(), p)?;
        self.tree(n.name(), p)?;
        self.optional_container(n.padding().bounds().as_ref(), ":", ",", "", p)
    }

    pub(super) fn type_parameters(&mut self, n: &Arc<TypeParameters>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.annotations(), p)?;
        p.append("[");
        self.padded_list(n.padding().type_parameters(), ",", p)?;
        p.append("]");
        Ok(())
    }

    pub(super) fn unary(&mut self, n: &Arc<Unary>, p: &mut PrintOutputCapture) -> LstResult<()> {
        let operator = n.padding().operator();
        if operator.element().is_postfix() {
            self.tree(n.expression(), p)?;
            self.space(operator.before(), p);
            p.append(operator.element().symbol());
            return Ok(());
        }
        self.space(operator.before(), p);
        p.append(operator.element().symbol());
        self.tree(n.expression(), p)
    }

    pub(super) fn variable_declarations(&mut self, n: &Arc<VariableDeclarations>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.nodes(n.leading_annotations(), p)?;
        self.nodes(n.modifiers(), p)?;
        let variables = n.padding().variables();
        match n.type_expression() {
            // `except E as name`: the name follows the type, introduced by `as`.
            Some(exception @ Tree::ExceptionType(_)) => {
                self.tree(exception, p)?;
                for right in variables {
                    let variable = right.element();
                    if !matches!(variable.name(), Tree::Empty(_)) {
                        self.space(variable.prefix(), p);
                        p.append("as");
                        self.tree(variable.name(), p)?;
                    }
                    self.space(right.after(), p);
                }
                return Ok(());
            }
            // Python hints follow the name: `x: int = 1`.
            Some(hint @ Tree::TypeHint(_)) => {
                return self.named_variables(variables, Some(hint), p);
            }
            Some(type_expression) => self.tree(type_expression, p)?,
            None => {}
        }
        if let Some(varargs) = n.varargs() {
            self.space(varargs, p);
            p.append("...");
        }
        self.named_variables(variables, None, p)
    }

    fn named_variables(
        &mut self,
        variables: &[RightPadded<Arc<NamedVariable>>],
        hint: Option<&Tree>,
        p: &mut PrintOutputCapture,
    ) -> LstResult<()> {
        for (i, right) in variables.iter().enumerate() {
            let variable = right.element();
            with_cursor(self, Tree::NamedVariable(Arc::clone(variable)), |printer| {
                printer.space(variable.prefix(), p);
                printer.named_variable(variable, hint, p)
            })?;
            self.space(right.after(), p);
            if i + 1 < variables.len() {
                p.append(",");
            }
        }
        Ok(())
    }

    pub(super) fn named_variable(&mut self, n: &Arc<NamedVariable>, hint: Option<&Tree>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.tree(n.name(), p)?;
        for dimension in n.dimensions_after_name() {
            self.left_padded("[", dimension, p)?;
            p.append("]");
        }
        self.optional(hint, p)?;
        match n.padding().initializer() {
            Some(initializer) => self.left_padded("=", initializer, p),
            None => Ok(()),
        }
    }

    pub(super) fn while_loop(&mut self, n: &Arc<WhileLoop>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("while");
        self.node(n.condition(), p)?;
        self.right_padded(n.padding().body(), "", p)
    }

    pub(super) fn wildcard(&mut self, n: &Arc<Wildcard>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("?");
        if let Some(bound) = n.padding().bound() {
            self.space(bound.before(), p);
            p.append(bound.element().symbol());
        }
        self.optional(n.bounded_type().as_ref(), p)
    }

    pub(super) fn deconstruction_pattern(&mut self, n: &Arc<DeconstructionPattern>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.tree(n.deconstructor(), p)?;
        self.container(n.padding().nested(), "(", ",", ")", p)
    }
}
