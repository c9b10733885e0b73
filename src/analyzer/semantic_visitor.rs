use tracing::debug;

use crate::parser::{BinOpKind, Expr, ExprKind, Program, Stmt, StmtKind};

use super::{Annotation, ScopeClass, SemanticError, SymbolTable, Type};

/// A program that passed semantic analysis with no diagnostics. Only
/// [`SemanticVisitor::check`] can build one, so code generation can never
/// run on a rejected program.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyzedProgram(Program);

impl AnalyzedProgram {
    pub fn program(&self) -> &Program {
        &self.0
    }

    pub fn into_inner(self) -> Program {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct SemanticVisitor {
    symbol_table: SymbolTable,
    errors: Vec<SemanticError>,
}

impl SemanticVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzes `program` and only hands it back if it is accepted.
    pub fn check(mut program: Program) -> Result<AnalyzedProgram, Vec<SemanticError>> {
        let errors = SemanticVisitor::new().visit_program(&mut program);
        if errors.is_empty() {
            Ok(AnalyzedProgram(program))
        } else {
            Err(errors)
        }
    }

    /// Annotates every node and returns all diagnostics in source order.
    /// State from a previous call is discarded.
    pub fn visit_program(&mut self, program: &mut Program) -> Vec<SemanticError> {
        self.symbol_table = SymbolTable::new();
        self.errors.clear();

        self.visit_stmts(&mut program.0);

        debug_assert_eq!(self.symbol_table.depth(), 0);
        debug!(diagnostics = self.errors.len(), "analyzed program");
        self.errors.clone()
    }

    fn scope_class(&self) -> ScopeClass {
        if self.symbol_table.is_global() {
            ScopeClass::Global
        } else {
            ScopeClass::Local
        }
    }

    fn annotation(&self, ty: Option<Type>) -> Option<Annotation> {
        Some(Annotation {
            ty,
            scope: self.scope_class(),
        })
    }

    fn visit_stmts(&mut self, stmts: &mut [Stmt]) {
        for stmt in stmts {
            self.visit_stmt(stmt);
        }
    }

    fn visit_block(&mut self, stmts: &mut [Stmt]) {
        self.symbol_table.push_scope();
        self.visit_stmts(stmts);
        self.symbol_table.pop_scope();
    }

    fn visit_stmt(&mut self, stmt: &mut Stmt) {
        let line = stmt.line;
        let annotation = match &mut stmt.kind {
            StmtKind::VarDecl { spec, name, init } => {
                let declared = Type::from(*spec);
                let annotation = self.annotation(Some(declared));
                self.visit_var_decl(line, name, declared, init.as_mut());
                annotation
            }
            StmtKind::Assign { name, expr } => {
                let target = self.symbol_table.lookup(name);
                let annotation = self.annotation(target);
                self.visit_assign(line, name, target, expr);
                annotation
            }
            StmtKind::If {
                cond,
                then_block,
                else_block,
            } => {
                let annotation = self.annotation(Some(Type::Bool));
                self.visit_condition("if", line, cond);
                self.visit_block(then_block);
                if let Some(else_block) = else_block {
                    self.visit_block(else_block);
                }
                annotation
            }
            StmtKind::While { cond, body } => {
                let annotation = self.annotation(Some(Type::Bool));
                self.visit_condition("while", line, cond);
                self.visit_block(body);
                annotation
            }
            StmtKind::Print(expr) => {
                self.visit_expr(expr);
                self.annotation(Some(Type::Void))
            }
            StmtKind::Input(name) => {
                if self.symbol_table.lookup(name).is_none() {
                    self.errors.push(SemanticError::InputUndeclared {
                        line,
                        name: name.clone(),
                    });
                }
                self.annotation(Some(Type::String))
            }
        };
        stmt.annotation = annotation;
    }

    fn visit_var_decl(&mut self, line: usize, name: &str, declared: Type, init: Option<&mut Expr>) {
        if !self.symbol_table.declare(name, declared) {
            self.errors.push(SemanticError::Redeclaration {
                line,
                name: name.to_string(),
            });
        }

        let Some(init) = init else {
            return;
        };
        if let Some(found) = self.visit_expr(init) {
            if found != declared {
                self.errors.push(SemanticError::DeclarationMismatch {
                    line,
                    name: name.to_string(),
                    declared,
                    found,
                });
            }
        }
    }

    fn visit_assign(&mut self, line: usize, name: &str, target: Option<Type>, expr: &mut Expr) {
        if target.is_none() {
            self.errors.push(SemanticError::Undeclared {
                line,
                name: name.to_string(),
            });
        }

        let found = self.visit_expr(expr);
        if let (Some(expected), Some(found)) = (target, found) {
            if expected != found {
                self.errors.push(SemanticError::AssignmentMismatch {
                    line,
                    name: name.to_string(),
                    expected,
                    found,
                });
            }
        }
    }

    /// An unresolved condition type is reported too.
    fn visit_condition(&mut self, keyword: &'static str, line: usize, cond: &mut Expr) {
        if self.visit_expr(cond) != Some(Type::Bool) {
            self.errors
                .push(SemanticError::NonBooleanCondition { line, keyword });
        }
    }

    fn visit_expr(&mut self, expr: &mut Expr) -> Option<Type> {
        let ty = match &mut expr.kind {
            ExprKind::Literal(literal) => Some(Type::of_literal(literal)),
            ExprKind::VarRef(name) => {
                let ty = self.symbol_table.lookup(name);
                if ty.is_none() {
                    self.errors.push(SemanticError::Undeclared {
                        line: expr.line,
                        name: name.clone(),
                    });
                }
                ty
            }
            ExprKind::Binary(op, left, right) => {
                let left = self.visit_expr(left);
                let right = self.visit_expr(right);
                match (left, right) {
                    (Some(left), Some(right)) => self.visit_binary(expr.line, *op, left, right),
                    _ => None,
                }
            }
        };
        expr.annotation = self.annotation(ty);
        ty
    }

    fn visit_binary(&mut self, line: usize, op: BinOpKind, left: Type, right: Type) -> Option<Type> {
        let ty = if op.is_arithmetic() {
            (left == right && left.is_numeric()).then_some(left)
        } else if op.is_relational() {
            (left.is_numeric() && right.is_numeric()).then_some(Type::Bool)
        } else {
            (left == right || (left.is_numeric() && right.is_numeric())).then_some(Type::Bool)
        };

        if ty.is_none() {
            self.errors.push(SemanticError::InvalidOperation {
                line,
                left,
                op,
                right,
            });
        }
        ty
    }
}
