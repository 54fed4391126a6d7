// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Keyword and operator enums carried as scalar fields.

use std::sync::Arc;

use rewrite_core::Same;

use crate::field::{value_field, Value, WireValue};

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $first:ident => $first_symbol:literal
            $(, $variant:ident => $symbol:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $first,
            $($variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$name::$first, $($name::$variant,)*];

            /// The name used on the wire.
            pub fn name(&self) -> &'static str {
                match self {
                    $name::$first => stringify!($first),
                    $($name::$variant => stringify!($variant),)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.name() == name)
            }

            /// The source spelling.
            pub fn symbol(&self) -> &'static str {
                match self {
                    $name::$first => $first_symbol,
                    $($name::$variant => $symbol,)*
                }
            }
        }

        impl Same for $name {
            fn same(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl Value for $name {
            fn to_wire(&self) -> WireValue {
                WireValue::Str(Arc::from(self.name()))
            }

            fn from_wire(value: &WireValue) -> Option<Self> {
                value.as_str().and_then(Self::from_name)
            }

            fn placeholder() -> Self {
                $name::$first
            }
        }

        value_field!($name);
    };
}

keyword_enum! {
    /// Binary operators shared by both dialects.
    BinaryOperator {
        Addition => "+",
        Subtraction => "-",
        Multiplication => "*",
        Division => "/",
        Modulo => "%",
        LessThan => "<",
        GreaterThan => ">",
        LessThanOrEqual => "<=",
        GreaterThanOrEqual => ">=",
        Equal => "==",
        NotEqual => "!=",
        BitAnd => "&",
        BitOr => "|",
        BitXor => "^",
        LeftShift => "<<",
        RightShift => ">>",
        UnsignedRightShift => ">>>",
        Or => "or",
        And => "and",
    }
}

keyword_enum! {
    UnaryOperator {
        PreIncrement => "++",
        PreDecrement => "--",
        PostIncrement => "++",
        PostDecrement => "--",
        Positive => "+",
        Negative => "-",
        Complement => "~",
        Not => "not",
    }
}

impl UnaryOperator {
    pub fn is_postfix(&self) -> bool {
        matches!(self, UnaryOperator::PostIncrement | UnaryOperator::PostDecrement)
    }
}

keyword_enum! {
    /// Compound assignment operators; the symbol excludes the trailing `=`.
    AssignmentOperator {
        Addition => "+",
        Subtraction => "-",
        Multiplication => "*",
        Division => "/",
        Modulo => "%",
        BitAnd => "&",
        BitOr => "|",
        BitXor => "^",
        LeftShift => "<<",
        RightShift => ">>",
        UnsignedRightShift => ">>>",
        Exponentiation => "**",
        FloorDivision => "//",
        MatrixMultiplication => "@",
        Coalesce => "??",
    }
}

keyword_enum! {
    ModifierType {
        Default => "",
        Public => "public",
        Protected => "protected",
        Private => "private",
        Abstract => "abstract",
        Static => "static",
        Final => "final",
        Sealed => "sealed",
        NonSealed => "non-sealed",
        Transient => "transient",
        Volatile => "volatile",
        Synchronized => "synchronized",
        Native => "native",
        Strictfp => "strictfp",
        Async => "async",
        Reified => "reified",
        Inline => "inline",
        LanguageExtension => "",
    }
}

keyword_enum! {
    ClassDeclarationKindType {
        Class => "class",
        Enum => "enum",
        Interface => "interface",
        Annotation => "@interface",
        Record => "record",
        Value => "value",
    }
}

keyword_enum! {
    CaseType {
        Statement => ":",
        Rule => "->",
    }
}

keyword_enum! {
    WildcardBound {
        Extends => "extends",
        Super => "super",
    }
}

keyword_enum! {
    /// Operators that exist only in the Python dialect.
    PyBinaryOperator {
        In => "in",
        Is => "is",
        IsNot => "is not",
        NotIn => "not in",
        FloorDivision => "//",
        MatrixMultiplication => "@",
        Power => "**",
        StringConcatenation => "",
    }
}

keyword_enum! {
    /// Whether a type hint annotates a variable (`:`) or a return (`->`).
    TypeHintKind {
        VariableType => ":",
        ReturnType => "->",
    }
}

keyword_enum! {
    CollectionKind {
        List => "[",
        Set => "{",
        Tuple => "(",
    }
}

impl CollectionKind {
    pub fn close(&self) -> &'static str {
        match self {
            CollectionKind::List => "]",
            CollectionKind::Set => "}",
            CollectionKind::Tuple => ")",
        }
    }
}

keyword_enum! {
    ComprehensionKind {
        List => "[",
        Set => "{",
        Dict => "{",
        Generator => "(",
    }
}

impl ComprehensionKind {
    pub fn close(&self) -> &'static str {
        match self {
            ComprehensionKind::List => "]",
            ComprehensionKind::Set | ComprehensionKind::Dict => "}",
            ComprehensionKind::Generator => ")",
        }
    }
}

keyword_enum! {
    /// f-string conversion flag.
    ConversionKind {
        Str => "s",
        Repr => "r",
        Ascii => "a",
    }
}

keyword_enum! {
    VariableScopeKind {
        Global => "global",
        Nonlocal => "nonlocal",
    }
}

keyword_enum! {
    SpecialParameterKind {
        PositionalOnly => "/",
        KeywordOnly => "*",
    }
}

keyword_enum! {
    StarKind {
        List => "*",
        Dict => "**",
    }
}

keyword_enum! {
    PatternKind {
        As => "as",
        Capture => "",
        ClassName => "",
        DoubleStar => "**",
        Group => "(",
        Keyword => "=",
        KeyValue => ":",
        Literal => "",
        Mapping => "{",
        Or => "|",
        Sequence => "",
        SequenceList => "[",
        SequenceTuple => "(",
        Star => "*",
        Value => "",
        Wildcard => "_",
    }
}

/// The parsed value of a literal; the source text lives beside it.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    None,
}

impl Same for LiteralValue {
    /// Floats compare by bit pattern, so a `NaN` is the same as itself.
    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (LiteralValue::Float(a), LiteralValue::Float(b)) => a.to_bits() == b.to_bits(),
            (LiteralValue::Str(a), LiteralValue::Str(b)) => a == b,
            _ => self == other,
        }
    }
}

impl Value for LiteralValue {
    fn to_wire(&self) -> WireValue {
        match self {
            LiteralValue::Bool(b) => WireValue::Bool(*b),
            LiteralValue::Int(i) => WireValue::Int(*i),
            LiteralValue::Float(f) => WireValue::Float(*f),
            LiteralValue::Str(s) => WireValue::Str(Arc::clone(s)),
            LiteralValue::None => WireValue::Null,
        }
    }

    fn from_wire(value: &WireValue) -> Option<Self> {
        Some(match value {
            WireValue::Null => LiteralValue::None,
            WireValue::Bool(b) => LiteralValue::Bool(*b),
            WireValue::Int(i) => LiteralValue::Int(*i),
            WireValue::Float(f) => LiteralValue::Float(*f),
            WireValue::Str(s) => LiteralValue::Str(Arc::clone(s)),
        })
    }

    fn placeholder() -> Self {
        LiteralValue::None
    }
}

value_field!(LiteralValue);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_enums_round_trip_by_name() {
        for op in BinaryOperator::ALL {
            assert_eq!(BinaryOperator::from_name(op.name()), Some(*op));
        }
        assert_eq!(PyBinaryOperator::IsNot.symbol(), "is not");
        assert_eq!(ModifierType::from_name("Async"), Some(ModifierType::Async));
        assert_eq!(StarKind::from_wire(&WireValue::Str(Arc::from("Dict"))), Some(StarKind::Dict));
        assert_eq!(CaseType::placeholder(), CaseType::Statement);
    }

    #[test]
    fn literal_values_map_to_wire_shapes() {
        assert_eq!(LiteralValue::Int(3).to_wire(), WireValue::Int(3));
        assert_eq!(LiteralValue::from_wire(&WireValue::Null), Some(LiteralValue::None));
    }

    #[test]
    fn float_literals_are_the_same_by_bits() {
        let nan = LiteralValue::Float(f64::NAN);
        assert!(nan.same(&nan.clone()));
        assert!(!LiteralValue::Float(0.0).same(&LiteralValue::Float(-0.0)));
        assert!(LiteralValue::Str(Arc::from("a")).same(&LiteralValue::Str(Arc::from("a"))));
    }
}
