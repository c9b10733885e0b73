use crate::{analyzer::SemanticError, parser::SyntaxError};

/// Why a source program was not turned into TAC.
#[derive(thiserror::Error, Debug)]
pub enum CompileError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("{} semantic error(s):\n{}", .0.len(), display_semantic_errors(.0))]
    Semantic(Vec<SemanticError>),
}

impl From<Vec<SemanticError>> for CompileError {
    fn from(errors: Vec<SemanticError>) -> Self {
        CompileError::Semantic(errors)
    }
}

fn display_semantic_errors(errors: &[SemanticError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<String>>()
        .join("\n")
}
