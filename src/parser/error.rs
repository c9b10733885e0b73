/// The first grammar violation found; parsing stops there.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("Syntax error on line {line}: expected {expected} but found '{found}'")]
pub struct SyntaxError {
    pub line: usize,
    pub expected: String,
    pub found: String,
}

impl SyntaxError {
    pub fn new(line: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            line,
            expected: expected.into(),
            found: found.into(),
        }
    }
}
