use tracing::{debug, warn};

use crate::lexer::{Token, TokenKind};

use super::{
    BinOpKind, Expr, ExprKind, Literal, Program, Stmt, StmtKind, SyntaxError, TypeSpecifier,
};

type ParseResult<T> = Result<T, SyntaxError>;

#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn parse(&mut self) -> ParseResult<Program> {
        let program = self.parse_program()?;
        debug!(statements = program.0.len(), "parsed program");
        Ok(program)
    }

    fn is_eof(&self) -> bool {
        self.index >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek().is_some_and(|t| &t.kind == kind)
    }

    /// Line used for diagnostics: the current token, or the last one at EOF.
    fn current_line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }

    fn error(&self, expected: &str) -> SyntaxError {
        let found = match self.peek() {
            Some(t) => t.lexeme.clone(),
            None => "end of input".to_string(),
        };
        SyntaxError::new(self.current_line(), expected, found)
    }

    fn advance(&mut self) -> Option<Token> {
        let t = self.tokens.get(self.index).cloned();
        if t.is_some() {
            self.index += 1;
        }
        t
    }

    fn consume(&mut self, kind: &TokenKind) -> bool {
        if !self.check(kind) {
            return false;
        }
        self.index += 1;
        true
    }

    fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if !self.check(kind) {
            return Err(self.error(kind.describe()));
        }
        self.advance().ok_or_else(|| self.error(kind.describe()))
    }

    fn expect_ident(&mut self) -> ParseResult<String> {
        Ok(self.expect(&TokenKind::Ident)?.lexeme)
    }

    /// program = "program"? stmt* ("end" any*)?
    fn parse_program(&mut self) -> ParseResult<Program> {
        self.consume(&TokenKind::Program);

        let mut stmts = vec![];
        while !self.is_eof() && !self.check(&TokenKind::End) {
            stmts.push(self.parse_stmt()?);
        }
        if self.consume(&TokenKind::End) && !self.is_eof() {
            warn!(
                line = self.current_line(),
                ignored = self.tokens.len() - self.index,
                "ignoring tokens after 'end'"
            );
        }

        Ok(Program(stmts))
    }

    /// stmt = vardecl
    ///      | assign
    ///      | "if" "(" expr ")" block ("else" block)?
    ///      | "while" "(" expr ")" block
    ///      | "print" "(" expr ")" ";"
    ///      | "input" "(" ident ")" ";"
    fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        let Some(t) = self.peek() else {
            return Err(self.error("statement"));
        };
        let (kind, line) = (t.kind, t.line);

        match kind {
            TokenKind::Var | TokenKind::Int | TokenKind::Float | TokenKind::Bool
            | TokenKind::String => self.parse_vardecl(),
            TokenKind::Ident => self.parse_assign(),
            TokenKind::If => {
                self.index += 1;
                let cond = self.parse_paren_expr()?;
                let then_block = self.parse_block()?;
                let else_block = if self.consume(&TokenKind::Else) {
                    Some(self.parse_block()?)
                } else {
                    None
                };
                Ok(Stmt::new(
                    StmtKind::If {
                        cond,
                        then_block,
                        else_block,
                    },
                    line,
                ))
            }
            TokenKind::While => {
                self.index += 1;
                let cond = self.parse_paren_expr()?;
                let body = self.parse_block()?;
                Ok(Stmt::new(StmtKind::While { cond, body }, line))
            }
            TokenKind::Print => {
                self.index += 1;
                let expr = self.parse_paren_expr()?;
                self.expect(&TokenKind::SemiColon)?;
                Ok(Stmt::new(StmtKind::Print(expr), line))
            }
            TokenKind::Input => {
                self.index += 1;
                self.expect(&TokenKind::OpenParen)?;
                let name = self.expect_ident()?;
                self.expect(&TokenKind::CloseParen)?;
                self.expect(&TokenKind::SemiColon)?;
                Ok(Stmt::new(StmtKind::Input(name), line))
            }
            _ => Err(self.error("statement")),
        }
    }

    /// vardecl = ("var" | "int" | "float" | "bool" | "string") ident ("=" expr)? ";"
    fn parse_vardecl(&mut self) -> ParseResult<Stmt> {
        let line = self.current_line();
        let spec = self.parse_type_specifier()?;
        let name = self.expect_ident()?;
        let init = if self.consume(&TokenKind::Equal) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(&TokenKind::SemiColon)?;

        Ok(Stmt::new(StmtKind::VarDecl { spec, name, init }, line))
    }

    fn parse_type_specifier(&mut self) -> ParseResult<TypeSpecifier> {
        if self.consume(&TokenKind::Var) {
            Ok(TypeSpecifier::Var)
        } else if self.consume(&TokenKind::Int) {
            Ok(TypeSpecifier::Int)
        } else if self.consume(&TokenKind::Float) {
            Ok(TypeSpecifier::Float)
        } else if self.consume(&TokenKind::Bool) {
            Ok(TypeSpecifier::Bool)
        } else if self.consume(&TokenKind::String) {
            Ok(TypeSpecifier::String)
        } else {
            Err(self.error("type"))
        }
    }

    /// assign = ident "=" expr ";"
    fn parse_assign(&mut self) -> ParseResult<Stmt> {
        let token = self.expect(&TokenKind::Ident)?;
        self.expect(&TokenKind::Equal)?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::SemiColon)?;

        Ok(Stmt::new(
            StmtKind::Assign {
                name: token.lexeme,
                expr,
            },
            token.line,
        ))
    }

    /// block = "{" stmt* "}"
    fn parse_block(&mut self) -> ParseResult<Vec<Stmt>> {
        self.expect(&TokenKind::OpenCurlyBrace)?;
        let mut stmts = vec![];
        while !self.is_eof() && !self.check(&TokenKind::CloseCurlyBrace) {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(&TokenKind::CloseCurlyBrace)?;
        Ok(stmts)
    }

    fn parse_paren_expr(&mut self) -> ParseResult<Expr> {
        self.expect(&TokenKind::OpenParen)?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::CloseParen)?;
        Ok(expr)
    }

    /// expr = comparison
    fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_comparison()
    }

    fn binary_op(&self, ops: &[(TokenKind, BinOpKind)]) -> Option<BinOpKind> {
        let t = self.peek()?;
        ops.iter().find(|(k, _)| *k == t.kind).map(|(_, op)| *op)
    }

    /// Left-associative `operand (op operand)*`.
    fn parse_binary(
        &mut self,
        ops: &[(TokenKind, BinOpKind)],
        operand: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut left = operand(self)?;
        while let Some(op) = self.binary_op(ops) {
            let line = self.current_line();
            self.index += 1;
            let right = operand(self)?;
            left = Expr::new(ExprKind::Binary(op, Box::new(left), Box::new(right)), line);
        }
        Ok(left)
    }

    /// comparison = addition (("<" | ">" | "<=" | ">=" | "==" | "!=") addition)*
    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_binary(
            &[
                (TokenKind::LessThan, BinOpKind::LessThan),
                (TokenKind::GreaterThan, BinOpKind::GreaterThan),
                (TokenKind::LessEqual, BinOpKind::LessEqual),
                (TokenKind::GreaterEqual, BinOpKind::GreaterEqual),
                (TokenKind::DoubleEqual, BinOpKind::Equal),
                (TokenKind::NotEqual, BinOpKind::NotEqual),
            ],
            Self::parse_addition,
        )
    }

    /// addition = multiplication (("+" | "-") multiplication)*
    fn parse_addition(&mut self) -> ParseResult<Expr> {
        self.parse_binary(
            &[
                (TokenKind::Plus, BinOpKind::Add),
                (TokenKind::Minus, BinOpKind::Sub),
            ],
            Self::parse_multiplication,
        )
    }

    /// multiplication = term (("*" | "/") term)*
    fn parse_multiplication(&mut self) -> ParseResult<Expr> {
        self.parse_binary(
            &[
                (TokenKind::Star, BinOpKind::Mul),
                (TokenKind::Slash, BinOpKind::Div),
            ],
            Self::parse_term,
        )
    }

    /// term = num | "true" | "false" | string | ident | "(" expr ")"
    fn parse_term(&mut self) -> ParseResult<Expr> {
        let Some(t) = self.peek() else {
            return Err(self.error("expression"));
        };
        let (kind, line) = (t.kind, t.line);

        let literal = match kind {
            TokenKind::Num => self.parse_number()?,
            TokenKind::True => {
                self.index += 1;
                Literal::Bool(true)
            }
            TokenKind::False => {
                self.index += 1;
                Literal::Bool(false)
            }
            TokenKind::Str => {
                let lexeme = self.expect(&TokenKind::Str)?.lexeme;
                Literal::Str(unquote(&lexeme).to_string())
            }
            TokenKind::Ident => {
                let name = self.expect_ident()?;
                return Ok(Expr::new(ExprKind::VarRef(name), line));
            }
            TokenKind::OpenParen => return self.parse_paren_expr(),
            _ => return Err(self.error("expression")),
        };

        Ok(Expr::new(ExprKind::Literal(literal), line))
    }

    fn parse_number(&mut self) -> ParseResult<Literal> {
        let token = self.expect(&TokenKind::Num)?;
        let literal = if token.lexeme.contains('.') {
            token.lexeme.parse().ok().map(Literal::Float)
        } else {
            token.lexeme.parse().ok().map(Literal::Int)
        };

        literal.ok_or_else(|| SyntaxError::new(token.line, "integer literal", token.lexeme))
    }
}

fn unquote(lexeme: &str) -> &str {
    let mut chars = lexeme.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open @ ('"' | '\'')), Some(close)) if open == close => chars.as_str(),
        _ => lexeme,
    }
}
