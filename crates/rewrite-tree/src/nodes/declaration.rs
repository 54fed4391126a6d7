// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Declarations: compilation units, imports, classes, methods, variables.

use std::sync::Arc;

use rewrite_core::{Container, LeftPadded, RightPadded, Space, TypeId};

use super::expression::{FieldAccess, Identifier, NewClass};
use super::kinds::{ClassDeclarationKindType, ModifierType};
use super::macros::lst_node;
use super::statement::Block;
use crate::tree::Tree;

lst_node! {
    /// A Java source file.
    CompilationUnit: Java "J$CompilationUnit" [SOURCE_FILE] {
        source_path: Arc<str>,
        charset: Option<Arc<str>>,
        package_declaration: #padded Option<RightPadded<Arc<Package>>> => PackageSuffix,
        imports: #padded Vec<RightPadded<Arc<Import>>> => ImportSuffix,
        classes: Vec<Arc<ClassDeclaration>>,
        eof: Space => CompilationUnitEof,
    }
}

lst_node! {
    Package: Java "J$Package" [STATEMENT] {
        expression: Tree,
        annotations: Vec<Arc<Annotation>>,
    }
}

lst_node! {
    /// `import a.b.C` or, with an alias, `import a.b as c`.
    Import: Java "J$Import" [STATEMENT] {
        is_static: #padded LeftPadded<bool> => StaticImport,
        qualid: Arc<FieldAccess>,
        alias: #padded Option<LeftPadded<Arc<Identifier>>> => ImportAliasPrefix,
    }
}

lst_node! {
    ClassDeclaration: Java "J$ClassDeclaration" [STATEMENT] {
        leading_annotations: Vec<Arc<Annotation>>,
        modifiers: Vec<Arc<Modifier>>,
        kind: Arc<ClassDeclarationKind>,
        name: Arc<Identifier>,
        type_parameters: #padded Option<Container<Arc<TypeParameter>>> => TypeParameterList,
        primary_constructor: #padded Option<Container<Tree>> => RecordStateVector,
        extends: #padded Option<LeftPadded<Tree>> => ExtendsPrefix,
        implements: #padded Option<Container<Tree>> => Implements,
        permits: #padded Option<Container<Tree>> => Permits,
        body: Arc<Block>,
        ty: Option<TypeId>,
    }
}

lst_node! {
    /// The keyword of a class declaration with the annotations before it.
    ClassDeclarationKind: Java "J$ClassDeclaration$Kind" [] {
        annotations: Vec<Arc<Annotation>>,
        kind: ClassDeclarationKindType,
    }
}

lst_node! {
    /// Functions in both dialects; in Python the `def` keyword is a modifier.
    MethodDeclaration: Java "J$MethodDeclaration" [STATEMENT] {
        leading_annotations: Vec<Arc<Annotation>>,
        modifiers: Vec<Arc<Modifier>>,
        type_parameters: Option<Arc<TypeParameters>>,
        return_type_expression: Option<Tree>,
        name: Arc<IdentifierWithAnnotations>,
        parameters: #padded Container<Tree> => MethodDeclarationParameters,
        throws: #padded Option<Container<Tree>> => Throws,
        body: Option<Arc<Block>>,
        default_value: #padded Option<LeftPadded<Tree>> => MethodDeclarationDefaultValue,
        method_type: Option<TypeId>,
    }
}

lst_node! {
    /// A method name with annotations that sit between the return type and the name.
    IdentifierWithAnnotations: Java "J$MethodDeclaration$IdentifierWithAnnotations" [] {
        identifier: Arc<Identifier>,
        annotations: Vec<Arc<Annotation>>,
    }
}

lst_node! {
    /// Fields, locals and parameters; one declaration may name several variables.
    VariableDeclarations: Java "J$VariableDeclarations" [STATEMENT] {
        leading_annotations: Vec<Arc<Annotation>>,
        modifiers: Vec<Arc<Modifier>>,
        type_expression: Option<Tree>,
        varargs: Option<Space> => Varargs,
        variables: #padded Vec<RightPadded<Arc<NamedVariable>>> => NamedVariableSuffix,
    }
}

lst_node! {
    NamedVariable: Java "J$VariableDeclarations$NamedVariable" [] {
        name: Tree,
        dimensions_after_name: Vec<LeftPadded<Space>> => DimensionPrefix,
        initializer: #padded Option<LeftPadded<Tree>> => VariableInitializer,
        variable_type: Option<TypeId>,
    }
}

lst_node! {
    /// A modifier keyword. Python spells `def`, `async` and `class` this way.
    Modifier: Java "J$Modifier" [] {
        keyword: Option<Arc<str>>,
        modifier_type: ModifierType,
        annotations: Vec<Arc<Annotation>>,
    }
}

lst_node! {
    /// A Java annotation or a Python decorator.
    Annotation: Java "J$Annotation" [EXPRESSION] {
        annotation_type: Tree,
        arguments: #padded Option<Container<Tree>> => AnnotationArguments,
    }
}

lst_node! {
    TypeParameter: Java "J$TypeParameter" [] {
        annotations: Vec<Arc<Annotation>>,
        modifiers: Vec<Arc<Modifier>>,
        name: Tree,
        bounds: #padded Option<Container<Tree>> => TypeBounds,
    }
}

lst_node! {
    TypeParameters: Java "J$TypeParameters" [] {
        annotations: Vec<Arc<Annotation>>,
        type_parameters: #padded Vec<RightPadded<Arc<TypeParameter>>> => TypeParameterSuffix,
    }
}

lst_node! {
    EnumValue: Java "J$EnumValue" [] {
        annotations: Vec<Arc<Annotation>>,
        name: Arc<Identifier>,
        initializer: Option<Arc<NewClass>>,
    }
}

lst_node! {
    EnumValueSet: Java "J$EnumValueSet" [STATEMENT] {
        enums: #padded Vec<RightPadded<Arc<EnumValue>>> => EnumValueSuffix,
        terminated_with_semicolon: bool,
    }
}

impl MethodDeclaration {
    /// The bare method name.
    pub fn simple_name(&self) -> &str {
        self.name.identifier().simple_name()
    }
}

impl ClassDeclaration {
    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }
}

impl Modifier {
    /// The source keyword: the explicit keyword if present, else the type's spelling.
    pub fn keyword_text(&self) -> &str {
        match &self.keyword {
            Some(keyword) => keyword,
            None => self.modifier_type.symbol(),
        }
    }
}
