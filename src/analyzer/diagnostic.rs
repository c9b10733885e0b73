use crate::parser::BinOpKind;

use super::Type;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A declaration, scoping or typing violation. Every variant blocks code
/// generation, warnings included.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum SemanticError {
    #[error("Error on line {line}: redeclaration of '{name}' in this scope")]
    Redeclaration { line: usize, name: String },
    #[error("Type error on line {line}: '{name}' is {declared} but was assigned a {found} value")]
    DeclarationMismatch {
        line: usize,
        name: String,
        declared: Type,
        found: Type,
    },
    #[error("Error on line {line}: undeclared variable '{name}'")]
    Undeclared { line: usize, name: String },
    #[error("Type error on line {line}: assigning {found} to {expected} in '{name}'")]
    AssignmentMismatch {
        line: usize,
        name: String,
        expected: Type,
        found: Type,
    },
    #[error("Error on line {line}: invalid operation {left} {} {right}", .op.symbol())]
    InvalidOperation {
        line: usize,
        left: Type,
        op: BinOpKind,
        right: Type,
    },
    #[error("Error on line {line}: '{keyword}' condition must be boolean")]
    NonBooleanCondition { line: usize, keyword: &'static str },
    #[error("Warning on line {line}: '{name}' is not declared before input()")]
    InputUndeclared { line: usize, name: String },
}

impl SemanticError {
    pub fn line(&self) -> usize {
        match self {
            SemanticError::Redeclaration { line, .. }
            | SemanticError::DeclarationMismatch { line, .. }
            | SemanticError::Undeclared { line, .. }
            | SemanticError::AssignmentMismatch { line, .. }
            | SemanticError::InvalidOperation { line, .. }
            | SemanticError::NonBooleanCondition { line, .. }
            | SemanticError::InputUndeclared { line, .. } => *line,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            SemanticError::InputUndeclared { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}
