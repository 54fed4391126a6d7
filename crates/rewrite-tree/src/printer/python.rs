// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Printing of Python-only nodes.

use std::sync::Arc;

use rewrite_core::LstResult;

use super::{PrintOutputCapture, PythonPrinter};
use crate::nodes::*;
use crate::tree::Tree;

impl PythonPrinter {
    pub(super) fn py_compilation_unit(&mut self, n: &Arc<PyCompilationUnit>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.padded_list(n.padding().imports(), "", p)?;
        self.padded_list(n.padding().statements(), "", p)?;
        self.space(n.eof(), p);
        Ok(())
    }

    pub(super) fn py_binary(&mut self, n: &Arc<PyBinary>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.tree(n.left(), p)?;
        let operator = n.padding().operator();
        self.space(operator.before(), p);
        // The space inside `is not` and `not in` is kept as `negation`.
        match (operator.element(), n.negation()) {
            (PyBinaryOperator::IsNot, Some(negation)) => {
                p.append("is");
                self.space(negation, p);
                p.append("not");
            }
            (PyBinaryOperator::NotIn, Some(negation)) => {
                p.append("not");
                self.space(negation, p);
                p.append("in");
            }
            (operator, _) => {
                p.append(operator.symbol());
            }
        }
        self.tree(n.right(), p)
    }

    pub(super) fn chained_assignment(&mut self, n: &Arc<ChainedAssignment>, p: &mut PrintOutputCapture) -> LstResult<()> {
        for variable in n.padding().variables() {
            self.right_padded(variable, "=", p)?;
        }
        self.tree(n.assignment(), p)
    }

    pub(super) fn exception_type(&mut self, n: &Arc<ExceptionType>, p: &mut PrintOutputCapture) -> LstResult<()> {
        if *n.exception_group() {
            p.append("*");
        }
        self.tree(n.expression(), p)
    }

    pub(super) fn py_for_loop(&mut self, n: &Arc<PyForLoop>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("for");
        self.tree(n.target(), p)?;
        self.left_padded("in", n.padding().iterable(), p)?;
        self.right_padded(n.padding().body(), "", p)
    }

    pub(super) fn type_hint(&mut self, n: &Arc<TypeHint>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append(n.kind().symbol());
        self.tree(n.type_tree(), p)
    }

    pub(super) fn multi_import(&mut self, n: &Arc<MultiImport>, p: &mut PrintOutputCapture) -> LstResult<()> {
        if let Some(from) = n.padding().from() {
            p.append("from");
            self.right_padded(from, "", p)?;
        }
        let names = n.padding().names();
        self.space(names.before(), p);
        p.append("import");
        if *n.parenthesized() {
            p.append("(");
        }
        self.padded_list(names.padded_elements(), ",", p)?;
        if *n.parenthesized() {
            p.append(")");
        }
        Ok(())
    }

    pub(super) fn key_value(&mut self, n: &Arc<KeyValue>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.right_padded(n.padding().key(), ":", p)?;
        self.tree(n.value(), p)
    }

    pub(super) fn collection_literal(&mut self, n: &Arc<CollectionLiteral>, p: &mut PrintOutputCapture) -> LstResult<()> {
        let kind = n.kind();
        self.container(n.padding().elements(), kind.symbol(), ",", kind.close(), p)
    }

    pub(super) fn formatted_string(&mut self, n: &Arc<FormattedString>, p: &mut PrintOutputCapture) -> LstResult<()> {
        let delimiter = n.delimiter();
        p.append(delimiter);
        for part in n.parts() {
            self.tree(part, p)?;
        }
        // The closing quote is the opening one without its `f`/`r` prefix.
        let close = delimiter.trim_start_matches(|c: char| c.is_ascii_alphabetic());
        p.append(close);
        Ok(())
    }

    pub(super) fn formatted_string_value(&mut self, n: &Arc<FormattedStringValue>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("{");
        self.right_padded(n.padding().expression(), "", p)?;
        if let Some(debug) = n.padding().debug() {
            if *debug.element() {
                p.append("=");
            }
            self.space(debug.after(), p);
        }
        if let Some(conversion) = n.conversion() {
            p.append("!").append(conversion.symbol());
        }
        if let Some(format) = n.format() {
            p.append(":");
            self.tree(format, p)?;
        }
        p.append("}");
        Ok(())
    }

    pub(super) fn trailing_else_wrapper(&mut self, n: &Arc<TrailingElseWrapper>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.tree(n.statement(), p)?;
        self.left_padded("else", n.padding().else_block(), p)
    }

    pub(super) fn comprehension_expression(
        &mut self,
        n: &Arc<ComprehensionExpression>,
        p: &mut PrintOutputCapture,
    ) -> LstResult<()> {
        let kind = n.kind();
        p.append(kind.symbol());
        self.tree(n.result(), p)?;
        self.nodes(n.clauses(), p)?;
        self.space(n.suffix(), p);
        p.append(kind.close());
        Ok(())
    }

    pub(super) fn comprehension_clause(&mut self, n: &Arc<ComprehensionClause>, p: &mut PrintOutputCapture) -> LstResult<()> {
        if let Some(is_async) = n.padding().is_async() {
            if *is_async.element() {
                p.append("async");
                self.space(is_async.after(), p);
            }
        }
        p.append("for");
        self.tree(n.iterator_variable(), p)?;
        self.left_padded("in", n.padding().iterated_list(), p)?;
        self.nodes(n.conditions(), p)
    }

    pub(super) fn type_alias(&mut self, n: &Arc<TypeAlias>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append("type");
        self.node(n.name(), p)?;
        if let Some(type_parameters) = n.type_parameters() {
            self.node(type_parameters, p)?;
        }
        self.left_padded("=", n.padding().value(), p)
    }

    pub(super) fn variable_scope(&mut self, n: &Arc<VariableScope>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append(n.kind().symbol());
        self.padded_list(n.padding().names(), ",", p)
    }

    pub(super) fn special_parameter(&mut self, n: &Arc<SpecialParameter>, p: &mut PrintOutputCapture) -> LstResult<()> {
        p.append(n.kind().symbol());
        match n.type_hint() {
            Some(hint) => self.node(hint, p),
            None => Ok(()),
        }
    }

    pub(super) fn match_case(&mut self, n: &Arc<MatchCase>, p: &mut PrintOutputCapture) -> LstResult<()> {
        self.node(n.pattern(), p)?;
        match n.padding().guard() {
            Some(guard) => self.left_padded("if", guard, p),
            None => Ok(()),
        }
    }

    pub(super) fn match_case_pattern(&mut self, n: &Arc<MatchCasePattern>, p: &mut PrintOutputCapture) -> LstResult<()> {
        let children = n.padding().children();
        let elements = children.padded_elements();
        match n.kind() {
            PatternKind::As => self.container(children, "", "as", "", p),
            PatternKind::Or => self.container(children, "", "|", "", p),
            PatternKind::Keyword => self.container(children, "", "=", "", p),
            PatternKind::KeyValue => self.container(children, "", ":", "", p),
            PatternKind::Star | PatternKind::DoubleStar => {
                p.append(n.kind().symbol());
                self.container(children, "", ",", "", p)
            }
            PatternKind::Group | PatternKind::SequenceTuple => self.container(children, "(", ",", ")", p),
            PatternKind::SequenceList => self.container(children, "[", ",", "]", p),
            PatternKind::Mapping => self.container(children, "{", ",", "}", p),
            // `Point(x=0)`: the class name, then its arguments in parentheses.
            PatternKind::ClassName => match elements.split_first() {
                Some((name, arguments)) => {
                    self.space(children.before(), p);
                    self.right_padded(name, "(", p)?;
                    self.padded_list(arguments, ",", p)?;
                    p.append(")");
                    Ok(())
                }
                None => self.container(children, "", ",", "", p),
            },
            PatternKind::Wildcard if elements.is_empty() => {
                self.space(children.before(), p);
                p.append("_");
                Ok(())
            }
            _ => self.container(children, "", ",", "", p),
        }
    }

    /// `start:stop:step`; any part may be absent.
    pub(super) fn slice(&mut self, n: &Arc<Slice>, p: &mut PrintOutputCapture) -> LstResult<()> {
        if let Some(start) = n.padding().start() {
            self.right_padded(start, "", p)?;
        }
        p.append(":");
        if let Some(stop) = n.padding().stop() {
            self.right_padded(stop, "", p)?;
        }
        if let Some(step) = n.padding().step() {
            p.append(":");
            self.right_padded(step, "", p)?;
        }
        Ok(())
    }
}

impl Tree {
    /// Print this tree as Python source.
    pub fn print(&self) -> LstResult<String> {
        PythonPrinter::print(self)
    }
}
