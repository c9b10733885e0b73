use crate::analyzer::Annotation;

use super::Expr;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program(pub Vec<Stmt>);

/// Declared type as written in the source. `var` is resolved by the analyzer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeSpecifier {
    Var,
    Int,
    Float,
    Bool,
    String,
}

impl TypeSpecifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeSpecifier::Var => "var",
            TypeSpecifier::Int => "int",
            TypeSpecifier::Float => "float",
            TypeSpecifier::Bool => "bool",
            TypeSpecifier::String => "string",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: usize,
    pub annotation: Option<Annotation>,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: usize) -> Self {
        Self {
            kind,
            line,
            annotation: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    VarDecl {
        spec: TypeSpecifier,
        name: String,
        init: Option<Expr>,
    },
    Assign {
        name: String,
        expr: Expr,
    },
    If {
        cond: Expr,
        then_block: Vec<Stmt>,
        else_block: Option<Vec<Stmt>>,
    },
    While {
        cond: Expr,
        body: Vec<Stmt>,
    },
    Print(Expr),
    Input(String),
}
