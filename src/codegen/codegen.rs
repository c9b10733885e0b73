use tracing::debug;

use crate::{
    analyzer::AnalyzedProgram,
    parser::{Expr, ExprKind, Literal, Stmt, StmtKind},
};

use super::{Instr, Operand};

/// Lowers an analyzed program to three-address code. Temporaries (`t0`,
/// `t1`, …) and labels (`L0`, `L1`, …) are numbered per `Codegen` instance.
#[derive(Debug, Default)]
pub struct Codegen {
    temp_index: usize,
    label_index: usize,
    instrs: Vec<Instr>,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&mut self, program: &AnalyzedProgram) -> Vec<Instr> {
        self.instrs.clear();
        self.gen_stmts(&program.program().0);
        debug!(instructions = self.instrs.len(), "generated TAC");

        std::mem::take(&mut self.instrs)
    }

    fn new_temp(&mut self) -> String {
        let s = format!("t{}", self.temp_index);
        self.temp_index += 1;
        s
    }

    fn new_label(&mut self) -> String {
        let s = format!("L{}", self.label_index);
        self.label_index += 1;
        s
    }

    fn emit(&mut self, instr: Instr) {
        self.instrs.push(instr);
    }

    fn gen_stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.gen_stmt(stmt);
        }
    }

    fn gen_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::VarDecl {
                name,
                init: Some(init),
                ..
            } => self.gen_copy(name, init),
            StmtKind::VarDecl { init: None, .. } => (),
            StmtKind::Assign { name, expr } => self.gen_copy(name, expr),
            StmtKind::If {
                cond,
                then_block,
                else_block,
            } => self.gen_if(cond, then_block, else_block.as_deref()),
            StmtKind::While { cond, body } => self.gen_while(cond, body),
            StmtKind::Print(expr) => {
                let operand = match &expr.kind {
                    ExprKind::Literal(Literal::Str(s)) => Operand::Str(s.clone()),
                    _ => self.gen_expr(expr),
                };
                self.emit(Instr::Print(operand));
            }
            StmtKind::Input(name) => self.emit(Instr::Input(name.clone())),
        }
    }

    fn gen_copy(&mut self, name: &str, expr: &Expr) {
        let src = self.gen_expr(expr);
        self.emit(Instr::Copy {
            dst: name.to_string(),
            src,
        });
    }

    fn gen_if(&mut self, cond: &Expr, then_block: &[Stmt], else_block: Option<&[Stmt]>) {
        let cond = self.gen_expr(cond);
        let else_label = self.new_label();
        let end_label = self.new_label();

        self.emit(Instr::IfEqGoto {
            cond,
            value: 0,
            label: else_label.clone(),
        });
        self.gen_stmts(then_block);
        self.emit(Instr::Goto(end_label.clone()));
        self.emit(Instr::Label(else_label));
        if let Some(else_block) = else_block {
            self.gen_stmts(else_block);
        }
        self.emit(Instr::Label(end_label));
    }

    fn gen_while(&mut self, cond: &Expr, body: &[Stmt]) {
        let begin_label = self.new_label();
        let end_label = self.new_label();

        self.emit(Instr::Label(begin_label.clone()));
        let cond = self.gen_expr(cond);
        self.emit(Instr::IfEqGoto {
            cond,
            value: 0,
            label: end_label.clone(),
        });
        self.gen_stmts(body);
        self.emit(Instr::Goto(begin_label));
        self.emit(Instr::Label(end_label));
    }

    /// Emits the code computing `expr` and returns the operand holding its value.
    /// Literals and variables are used in place.
    fn gen_expr(&mut self, expr: &Expr) -> Operand {
        match &expr.kind {
            ExprKind::Literal(literal) => gen_literal(literal),
            ExprKind::VarRef(name) => Operand::Name(name.clone()),
            ExprKind::Binary(op, left, right) => {
                let lhs = self.gen_expr(left);
                let rhs = self.gen_expr(right);
                let dst = self.new_temp();
                self.emit(Instr::BinOp {
                    dst: dst.clone(),
                    op: *op,
                    lhs,
                    rhs,
                });
                Operand::Name(dst)
            }
        }
    }
}

/// String values keep their quotes; only a literal printed directly goes out
/// bare.
fn gen_literal(literal: &Literal) -> Operand {
    match literal {
        Literal::Int(value) => Operand::Int(*value),
        Literal::Float(value) => Operand::Float(*value),
        Literal::Bool(value) => Operand::Int(i64::from(*value)),
        Literal::Str(s) => Operand::Str(format!("\"{s}\"")),
    }
}
