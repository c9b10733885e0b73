use std::fmt;

use crate::parser::{Literal, TypeSpecifier};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    Bool,
    String,
    Void,
}

impl Type {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    pub fn of_literal(literal: &Literal) -> Self {
        match literal {
            Literal::Int(_) => Type::Int,
            Literal::Float(_) => Type::Float,
            Literal::Bool(_) => Type::Bool,
            Literal::Str(_) => Type::String,
        }
    }
}

impl From<TypeSpecifier> for Type {
    /// `var` declarations are checked as `int`.
    fn from(spec: TypeSpecifier) -> Self {
        match spec {
            TypeSpecifier::Var | TypeSpecifier::Int => Type::Int,
            TypeSpecifier::Float => Type::Float,
            TypeSpecifier::Bool => Type::Bool,
            TypeSpecifier::String => Type::String,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Int => "int",
            Type::Float => "float",
            Type::Bool => "bool",
            Type::String => "string",
            Type::Void => "void",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeClass {
    Local,
    Global,
}

impl fmt::Display for ScopeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeClass::Local => f.write_str("local"),
            ScopeClass::Global => f.write_str("global"),
        }
    }
}

/// Written onto every statement and expression node by the analyzer.
/// `ty` is `None` when the type could not be resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub ty: Option<Type>,
    pub scope: ScopeClass,
}
