// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Syntactic positions where trivia attaches.
//!
//! Every [`Space`](rewrite_core::Space) in a tree sits at exactly one
//! [`Location`]. Visitors receive the location alongside the space, printers
//! and template engines address slots by it, and [`Coordinates`] pair it with
//! a tree and an insertion mode.
//!
//! Locations of right-padded slots name the trailing space (`*Suffix`);
//! left-padded slots name the leading space; container locations name the
//! space before the opening delimiter and map to the suffix location of
//! their elements through [`Location::element_suffix`].
//!
//! [`Coordinates`]: crate::coordinates::Coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! locations {
    ($($name:ident),* $(,)?) => {
        /// A trivia slot, named after the syntactic position it addresses.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum Location {
            $($name,)*
        }

        impl Location {
            /// Every location, in declaration order.
            pub const ALL: &'static [Location] = &[$(Location::$name,)*];

            /// The CamelCase variant name.
            pub fn variant_name(&self) -> &'static str {
                match self {
                    $(Location::$name => stringify!($name),)*
                }
            }
        }
    };
}

locations! {
    // Node prefixes, Java dialect
    AnnotatedTypePrefix,
    AnnotationPrefix,
    ArrayAccessPrefix,
    ArrayDimensionPrefix,
    ArrayTypePrefix,
    AssertPrefix,
    AssignmentPrefix,
    AssignmentOperationPrefix,
    BinaryPrefix,
    BlockPrefix,
    BreakPrefix,
    CasePrefix,
    ClassDeclarationPrefix,
    ClassDeclarationKindPrefix,
    CompilationUnitPrefix,
    ContinuePrefix,
    DoWhileLoopPrefix,
    EmptyPrefix,
    EnumValuePrefix,
    EnumValueSetPrefix,
    FieldAccessPrefix,
    ForEachLoopPrefix,
    ForEachControlPrefix,
    ForLoopPrefix,
    ForControlPrefix,
    ParenthesizedTypeTreePrefix,
    IdentifierPrefix,
    IfPrefix,
    ElsePrefix,
    ImportPrefix,
    InstanceOfPrefix,
    IntersectionTypePrefix,
    LabelPrefix,
    LambdaPrefix,
    LambdaParametersPrefix,
    LiteralPrefix,
    MemberReferencePrefix,
    MethodDeclarationPrefix,
    IdentifierWithAnnotationsPrefix,
    MethodInvocationPrefix,
    ModifierPrefix,
    MultiCatchPrefix,
    NewArrayPrefix,
    NewClassPrefix,
    NullableTypePrefix,
    PackagePrefix,
    ParameterizedTypePrefix,
    ParenthesesPrefix,
    ControlParenthesesPrefix,
    PrimitivePrefix,
    ReturnPrefix,
    SwitchPrefix,
    SwitchExpressionPrefix,
    SynchronizedPrefix,
    TernaryPrefix,
    ThrowPrefix,
    TryPrefix,
    TryResourcePrefix,
    CatchPrefix,
    TypeCastPrefix,
    TypeParameterPrefix,
    TypeParametersPrefix,
    UnaryPrefix,
    VariableDeclarationsPrefix,
    NamedVariablePrefix,
    WhileLoopPrefix,
    WildcardPrefix,
    YieldPrefix,
    UnknownPrefix,
    UnknownSourcePrefix,
    ErroneousPrefix,
    DeconstructionPatternPrefix,

    // Node prefixes, Python dialect
    AsyncPrefix,
    AwaitPrefix,
    PyBinaryPrefix,
    ChainedAssignmentPrefix,
    ExceptionTypePrefix,
    PyForLoopPrefix,
    LiteralTypePrefix,
    TypeHintPrefix,
    PyCompilationUnitPrefix,
    ExpressionStatementPrefix,
    ExpressionTypeTreePrefix,
    StatementExpressionPrefix,
    MultiImportPrefix,
    KeyValuePrefix,
    DictLiteralPrefix,
    CollectionLiteralPrefix,
    FormattedStringPrefix,
    FormattedStringValuePrefix,
    PassPrefix,
    TrailingElseWrapperPrefix,
    ComprehensionExpressionPrefix,
    ComprehensionClausePrefix,
    ComprehensionConditionPrefix,
    TypeAliasPrefix,
    YieldFromPrefix,
    UnionTypePrefix,
    VariableScopePrefix,
    DelPrefix,
    SpecialParameterPrefix,
    StarPrefix,
    NamedArgumentPrefix,
    TypeHintedExpressionPrefix,
    ErrorFromPrefix,
    MatchCasePrefix,
    MatchCasePatternPrefix,
    SlicePrefix,

    // Slots, Java dialect
    AnnotationArguments,
    AnnotationArgumentSuffix,
    ArrayIndexSuffix,
    DimensionPrefix,
    AssertDetailPrefix,
    AssignmentOperatorPrefix,
    AssignmentOperationOperator,
    BinaryOperator,
    StaticInitSuffix,
    BlockStatementSuffix,
    BlockEnd,
    CaseCaseLabels,
    CaseCaseLabelSuffix,
    CaseStatements,
    CaseStatementSuffix,
    CaseBodySuffix,
    TypeParameterList,
    TypeParameterSuffix,
    RecordStateVector,
    RecordStateVectorSuffix,
    ExtendsPrefix,
    Implements,
    ImplementsSuffix,
    Permits,
    PermitsSuffix,
    PackageSuffix,
    ImportSuffix,
    CompilationUnitEof,
    WhileBodySuffix,
    WhileCondition,
    EnumValueSuffix,
    FieldAccessName,
    ForBodySuffix,
    ForeachVariableSuffix,
    ForeachIterableSuffix,
    ForInitSuffix,
    ForConditionSuffix,
    ForUpdateSuffix,
    IfThenSuffix,
    IfElseSuffix,
    StaticImport,
    ImportAliasPrefix,
    InstanceofSuffix,
    TypeBounds,
    TypeBoundSuffix,
    LabelSuffix,
    LambdaArrowPrefix,
    LambdaParameter,
    MemberReferenceContaining,
    MemberReferenceName,
    MethodDeclarationParameters,
    MethodDeclarationParameterSuffix,
    Throws,
    ThrowsSuffix,
    MethodDeclarationDefaultValue,
    MethodSelectSuffix,
    MethodInvocationArguments,
    MethodInvocationArgumentSuffix,
    CatchAlternativeSuffix,
    NewArrayInitializer,
    NewArrayInitializerSuffix,
    NewClassEnclosingSuffix,
    New,
    NewClassArguments,
    NewClassArgumentsSuffix,
    NullableTypeSuffix,
    ParenthesesSuffix,
    ControlParenthesesSuffix,
    TernaryTrue,
    TernaryFalse,
    TryResources,
    TryResourceSuffix,
    TryFinally,
    UnaryOperator,
    Varargs,
    NamedVariableSuffix,
    VariableInitializer,
    WildcardBound,
    DeconstructionPatternNested,
    DeconstructionPatternNestedSuffix,

    // Slots, Python dialect
    PyBinaryOperator,
    PyBinaryNegation,
    ChainedAssignmentVariableSuffix,
    ForIterablePrefix,
    PyCompilationUnitStatementSuffix,
    MultiImportFromSuffix,
    MultiImportNames,
    MultiImportNameSuffix,
    KeyValueSuffix,
    DictLiteralElements,
    DictLiteralElementSuffix,
    CollectionLiteralElements,
    CollectionLiteralElementSuffix,
    FormattedStringValueExpressionSuffix,
    FormattedStringValueDebugSuffix,
    TrailingElseWrapperElseBlock,
    ComprehensionExpressionSuffix,
    ComprehensionClauseAsyncSuffix,
    ComprehensionIn,
    TypeAliasValue,
    UnionTypeSuffix,
    VariableScopeNameSuffix,
    DelTargetSuffix,
    NamedArgumentValue,
    ErrorFromSource,
    MatchCaseGuard,
    MatchPatternElements,
    MatchPatternElementSuffix,
    SliceStartSuffix,
    SliceStopSuffix,
    SliceStepSuffix,
}

impl Location {
    /// The SCREAMING_SNAKE_CASE name shared across dialects, e.g. `BLOCK_END`.
    pub fn name(&self) -> String {
        let camel = self.variant_name();
        let mut out = String::with_capacity(camel.len() + 8);
        for (i, ch) in camel.char_indices() {
            if ch.is_ascii_uppercase() && i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_uppercase());
        }
        out
    }

    /// Look a location up by its SCREAMING_SNAKE_CASE name.
    pub fn from_name(name: &str) -> Option<Location> {
        Location::ALL.iter().copied().find(|loc| loc.name() == name)
    }

    /// For a container location, the suffix location of its elements.
    pub fn element_suffix(&self) -> Option<Location> {
        use Location::*;
        Some(match self {
            AnnotationArguments => AnnotationArgumentSuffix,
            CaseCaseLabels => CaseCaseLabelSuffix,
            CaseStatements => CaseStatementSuffix,
            TypeParameterList => TypeParameterSuffix,
            RecordStateVector => RecordStateVectorSuffix,
            Implements => ImplementsSuffix,
            Permits => PermitsSuffix,
            TypeBounds => TypeBoundSuffix,
            MethodDeclarationParameters => MethodDeclarationParameterSuffix,
            Throws => ThrowsSuffix,
            MethodInvocationArguments => MethodInvocationArgumentSuffix,
            NewArrayInitializer => NewArrayInitializerSuffix,
            NewClassArguments => NewClassArgumentsSuffix,
            TryResources => TryResourceSuffix,
            DeconstructionPatternNested => DeconstructionPatternNestedSuffix,
            MultiImportNames => MultiImportNameSuffix,
            DictLiteralElements => DictLiteralElementSuffix,
            CollectionLiteralElements => CollectionLiteralElementSuffix,
            MatchPatternElements => MatchPatternElementSuffix,
            _ => return None,
        })
    }

    pub fn is_container(&self) -> bool {
        self.element_suffix().is_some()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_screaming_snake_case() {
        assert_eq!(Location::CompilationUnitPrefix.name(), "COMPILATION_UNIT_PREFIX");
        assert_eq!(Location::BlockEnd.name(), "BLOCK_END");
        assert_eq!(Location::IfThenSuffix.name(), "IF_THEN_SUFFIX");
        assert_eq!(
            Location::from_name("METHOD_INVOCATION_ARGUMENTS"),
            Some(Location::MethodInvocationArguments)
        );
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Location::ALL.iter().map(Location::name).collect();
        names.sort();
        let total = names.len();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn containers_map_to_element_suffixes() {
        assert_eq!(
            Location::MethodInvocationArguments.element_suffix(),
            Some(Location::MethodInvocationArgumentSuffix)
        );
        assert!(Location::AnnotationArguments.is_container());
        assert!(!Location::BlockEnd.is_container());
    }
}
