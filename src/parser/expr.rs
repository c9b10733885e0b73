use crate::analyzer::Annotation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    LessThan,
    GreaterThan,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
}

impl BinOpKind {
    pub const ALL: [BinOpKind; 10] = [
        BinOpKind::Add,
        BinOpKind::Sub,
        BinOpKind::Mul,
        BinOpKind::Div,
        BinOpKind::LessThan,
        BinOpKind::GreaterThan,
        BinOpKind::LessEqual,
        BinOpKind::GreaterEqual,
        BinOpKind::Equal,
        BinOpKind::NotEqual,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::LessThan => "<",
            BinOpKind::GreaterThan => ">",
            BinOpKind::LessEqual => "<=",
            BinOpKind::GreaterEqual => ">=",
            BinOpKind::Equal => "==",
            BinOpKind::NotEqual => "!=",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == s)
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinOpKind::Add | BinOpKind::Sub | BinOpKind::Mul | BinOpKind::Div
        )
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            BinOpKind::LessThan
                | BinOpKind::GreaterThan
                | BinOpKind::LessEqual
                | BinOpKind::GreaterEqual
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Contents without the surrounding quotes.
    Str(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: usize,
    pub annotation: Option<Annotation>,
}

impl Expr {
    pub fn new(kind: ExprKind, line: usize) -> Self {
        Self {
            kind,
            line,
            annotation: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Binary(BinOpKind, Box<Expr>, Box<Expr>),
    Literal(Literal),
    VarRef(String),
}
