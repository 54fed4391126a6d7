// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Expressions and type trees shared by both dialects.

use std::sync::Arc;

use rewrite_core::{Container, Id, LeftPadded, Markers, PrimitiveKind, RightPadded, Space, TypeId};

use super::declaration::Annotation;
use super::kinds::{AssignmentOperator, BinaryOperator, LiteralValue, UnaryOperator, WildcardBound};
use super::macros::lst_node;
use super::statement::Block;
use crate::tree::Tree;

lst_node! {
    /// A name. Carries the type of the expression and, for field references,
    /// the variable it resolves to.
    Identifier: Java "J$Identifier" [EXPRESSION, TYPE_TREE] {
        annotations: Vec<Arc<Annotation>>,
        simple_name: Arc<str>,
        ty: Option<TypeId>,
        field_type: Option<TypeId>,
    }
}

lst_node! {
    /// A literal; `value_source` is the exact source spelling.
    Literal: Java "J$Literal" [EXPRESSION, TYPE_TREE] {
        value: Option<LiteralValue>,
        value_source: Option<Arc<str>>,
        ty: Option<TypeId>,
    }
}

lst_node! {
    Binary: Java "J$Binary" [EXPRESSION] {
        left: Tree,
        operator: #padded LeftPadded<BinaryOperator> => BinaryOperator,
        right: Tree,
        ty: Option<TypeId>,
    }
}

lst_node! {
    Unary: Java "J$Unary" [STATEMENT, EXPRESSION] {
        operator: #padded LeftPadded<UnaryOperator> => UnaryOperator,
        expression: Tree,
        ty: Option<TypeId>,
    }
}

lst_node! {
    Assignment: Java "J$Assignment" [STATEMENT, EXPRESSION] {
        variable: Tree,
        assignment: #padded LeftPadded<Tree> => AssignmentOperatorPrefix,
        ty: Option<TypeId>,
    }
}

lst_node! {
    AssignmentOperation: Java "J$AssignmentOperation" [STATEMENT, EXPRESSION] {
        variable: Tree,
        operator: #padded LeftPadded<AssignmentOperator> => AssignmentOperationOperator,
        assignment: Tree,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// `true_part if condition else false_part` in Python, `c ? t : f` in Java.
    Ternary: Java "J$Ternary" [STATEMENT, EXPRESSION] {
        condition: Tree,
        true_part: #padded LeftPadded<Tree> => TernaryTrue,
        false_part: #padded LeftPadded<Tree> => TernaryFalse,
        ty: Option<TypeId>,
    }
}

lst_node! {
    FieldAccess: Java "J$FieldAccess" [STATEMENT, EXPRESSION, TYPE_TREE] {
        target: Tree,
        name: #padded LeftPadded<Arc<Identifier>> => FieldAccessName,
        ty: Option<TypeId>,
    }
}

lst_node! {
    MethodInvocation: Java "J$MethodInvocation" [STATEMENT, EXPRESSION, METHOD_CALL] {
        select: #padded Option<RightPadded<Tree>> => MethodSelectSuffix,
        type_parameters: #padded Option<Container<Tree>> => TypeParameterList,
        name: Arc<Identifier>,
        arguments: #padded Container<Tree> => MethodInvocationArguments,
        method_type: Option<TypeId>,
    }
}

lst_node! {
    NewClass: Java "J$NewClass" [STATEMENT, EXPRESSION, METHOD_CALL] {
        enclosing: #padded Option<RightPadded<Tree>> => NewClassEnclosingSuffix,
        new_space: Space => New,
        clazz: Option<Tree>,
        arguments: #padded Container<Tree> => NewClassArguments,
        body: Option<Arc<Block>>,
        constructor_type: Option<TypeId>,
    }
}

lst_node! {
    NewArray: Java "J$NewArray" [EXPRESSION] {
        type_expression: Option<Tree>,
        dimensions: Vec<Arc<ArrayDimension>>,
        initializer: #padded Option<Container<Tree>> => NewArrayInitializer,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// `a[i]`; in Python also the subscript form `a[i:j]`.
    ArrayAccess: Java "J$ArrayAccess" [EXPRESSION] {
        indexed: Tree,
        dimension: Arc<ArrayDimension>,
        ty: Option<TypeId>,
    }
}

lst_node! {
    ArrayDimension: Java "J$ArrayDimension" [] {
        index: #padded RightPadded<Tree> => ArrayIndexSuffix,
    }
}

lst_node! {
    ArrayType: Java "J$ArrayType" [EXPRESSION, TYPE_TREE] {
        element_type: Tree,
        annotations: Vec<Arc<Annotation>>,
        dimension: Option<LeftPadded<Space>> => DimensionPrefix,
        ty: Option<TypeId>,
    }
}

lst_node! {
    AnnotatedType: Java "J$AnnotatedType" [EXPRESSION, TYPE_TREE] {
        annotations: Vec<Arc<Annotation>>,
        type_expression: Tree,
    }
}

lst_node! {
    Parentheses: Java "J$Parentheses" [EXPRESSION] {
        tree: #padded RightPadded<Tree> => ParenthesesSuffix,
    }
}

lst_node! {
    /// The parenthesized condition of a control statement. Python omits the
    /// parentheses but keeps the node.
    ControlParentheses: Java "J$ControlParentheses" [EXPRESSION] {
        tree: #padded RightPadded<Tree> => ControlParenthesesSuffix,
    }
}

lst_node! {
    ParenthesizedTypeTree: Java "J$ParenthesizedTypeTree" [EXPRESSION, TYPE_TREE] {
        annotations: Vec<Arc<Annotation>>,
        parenthesized_type: Arc<Parentheses>,
    }
}

lst_node! {
    TypeCast: Java "J$TypeCast" [EXPRESSION] {
        clazz: Arc<ControlParentheses>,
        expression: Tree,
    }
}

lst_node! {
    InstanceOf: Java "J$InstanceOf" [EXPRESSION] {
        expression: #padded RightPadded<Tree> => InstanceofSuffix,
        clazz: Tree,
        pattern: Option<Tree>,
        ty: Option<TypeId>,
    }
}

lst_node! {
    IntersectionType: Java "J$IntersectionType" [EXPRESSION, TYPE_TREE] {
        bounds: #padded Container<Tree> => TypeBounds,
    }
}

lst_node! {
    /// `params -> body`, or Python `lambda params: body`.
    Lambda: Java "J$Lambda" [STATEMENT, EXPRESSION] {
        parameters: Arc<LambdaParameters>,
        arrow: Space => LambdaArrowPrefix,
        body: Tree,
        ty: Option<TypeId>,
    }
}

lst_node! {
    LambdaParameters: Java "J$Lambda$Parameters" [] {
        parenthesized: bool,
        parameters: #padded Vec<RightPadded<Tree>> => LambdaParameter,
    }
}

lst_node! {
    MemberReference: Java "J$MemberReference" [EXPRESSION] {
        containing: #padded RightPadded<Tree> => MemberReferenceContaining,
        type_parameters: #padded Option<Container<Tree>> => TypeParameterList,
        reference: #padded LeftPadded<Arc<Identifier>> => MemberReferenceName,
        ty: Option<TypeId>,
        method_type: Option<TypeId>,
        variable_type: Option<TypeId>,
    }
}

lst_node! {
    MultiCatch: Java "J$MultiCatch" [EXPRESSION, TYPE_TREE] {
        alternatives: #padded Vec<RightPadded<Tree>> => CatchAlternativeSuffix,
    }
}

lst_node! {
    NullableType: Java "J$NullableType" [EXPRESSION, TYPE_TREE] {
        annotations: Vec<Arc<Annotation>>,
        type_tree: #padded RightPadded<Tree> => NullableTypeSuffix,
    }
}

lst_node! {
    ParameterizedType: Java "J$ParameterizedType" [EXPRESSION, TYPE_TREE] {
        clazz: Tree,
        type_parameters: #padded Option<Container<Tree>> => TypeParameterList,
        ty: Option<TypeId>,
    }
}

lst_node! {
    Primitive: Java "J$Primitive" [EXPRESSION, TYPE_TREE] {
        primitive: PrimitiveKind,
    }
}

lst_node! {
    SwitchExpression: Java "J$SwitchExpression" [EXPRESSION] {
        selector: Arc<ControlParentheses>,
        cases: Arc<Block>,
        ty: Option<TypeId>,
    }
}

lst_node! {
    Wildcard: Java "J$Wildcard" [EXPRESSION, TYPE_TREE] {
        bound: #padded Option<LeftPadded<WildcardBound>> => WildcardBound,
        bounded_type: Option<Tree>,
    }
}

lst_node! {
    DeconstructionPattern: Java "J$DeconstructionPattern" [EXPRESSION] {
        deconstructor: Tree,
        nested: #padded Container<Tree> => DeconstructionPatternNested,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// Source the parser could not model; printed verbatim.
    Unknown: Java "J$Unknown" [STATEMENT, EXPRESSION, TYPE_TREE] {
        source: Arc<UnknownSource>,
    }
}

lst_node! {
    UnknownSource: Java "J$Unknown$Source" [] {
        text: Arc<str>,
    }
}

lst_node! {
    /// Source that failed to parse; printed verbatim.
    Erroneous: Java "J$Erroneous" [STATEMENT, EXPRESSION] {
        text: Arc<str>,
    }
}

impl Identifier {
    /// A bare, untyped identifier with a fresh id.
    pub fn build(prefix: Space, name: &str) -> Arc<Self> {
        Identifier::new(Id::random(), prefix, Markers::empty(), Vec::new(), Arc::from(name), None, None)
    }
}

impl MethodInvocation {
    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }
}
