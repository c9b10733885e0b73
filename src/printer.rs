//! Text renderings of a parsed program: a plain indented tree, the same tree
//! with analyzer annotations, and a Graphviz graph.

use std::fmt;

use crate::{
    analyzer::Annotation,
    interpreter::format_float,
    parser::{Expr, ExprKind, Literal, Program, Stmt, StmtKind},
};

pub fn ast_tree(program: &Program) -> String {
    AstTree(program).to_string()
}

pub fn annotated_tree(program: &Program) -> String {
    AnnotatedTree(program).to_string()
}

pub fn to_dot(program: &Program) -> String {
    Dot(program).to_string()
}

fn literal_text(literal: &Literal) -> String {
    match literal {
        Literal::Int(value) => format!("{value} (int)"),
        Literal::Float(value) => format!("{} (float)", format_float(*value)),
        Literal::Bool(value) => format!("{value} (bool)"),
        Literal::Str(s) => format!("\"{s}\" (string)"),
    }
}

fn indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    write!(f, "{:width$}", "", width = depth * 2)
}

pub struct AstTree<'a>(pub &'a Program);

impl fmt::Display for AstTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program")?;
        for stmt in &self.0 .0 {
            tree_stmt(f, stmt, 1)?;
        }
        Ok(())
    }
}

fn tree_block(f: &mut fmt::Formatter<'_>, title: &str, stmts: &[Stmt], depth: usize) -> fmt::Result {
    indent(f, depth)?;
    writeln!(f, "{title}:")?;
    for stmt in stmts {
        tree_stmt(f, stmt, depth + 1)?;
    }
    Ok(())
}

fn tree_stmt(f: &mut fmt::Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    match &stmt.kind {
        StmtKind::VarDecl { spec, name, init } => {
            writeln!(f, "VarDecl")?;
            indent(f, depth + 1)?;
            writeln!(f, "Type: {}", spec.keyword())?;
            indent(f, depth + 1)?;
            writeln!(f, "Name: {name}")?;
            if let Some(init) = init {
                indent(f, depth + 1)?;
                writeln!(f, "Value:")?;
                tree_expr(f, init, depth + 2)?;
            }
        }
        StmtKind::Assign { name, expr } => {
            writeln!(f, "Assign")?;
            indent(f, depth + 1)?;
            writeln!(f, "Name: {name}")?;
            indent(f, depth + 1)?;
            writeln!(f, "Value:")?;
            tree_expr(f, expr, depth + 2)?;
        }
        StmtKind::If {
            cond,
            then_block,
            else_block,
        } => {
            writeln!(f, "If")?;
            indent(f, depth + 1)?;
            writeln!(f, "Condition:")?;
            tree_expr(f, cond, depth + 2)?;
            tree_block(f, "Then", then_block, depth + 1)?;
            if let Some(else_block) = else_block {
                tree_block(f, "Else", else_block, depth + 1)?;
            }
        }
        StmtKind::While { cond, body } => {
            writeln!(f, "While")?;
            indent(f, depth + 1)?;
            writeln!(f, "Condition:")?;
            tree_expr(f, cond, depth + 2)?;
            tree_block(f, "Body", body, depth + 1)?;
        }
        StmtKind::Print(expr) => {
            writeln!(f, "Print")?;
            tree_expr(f, expr, depth + 1)?;
        }
        StmtKind::Input(name) => writeln!(f, "Input: {name}")?,
    }
    Ok(())
}

fn tree_expr(f: &mut fmt::Formatter<'_>, expr: &Expr, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    match &expr.kind {
        ExprKind::Literal(literal) => writeln!(f, "Literal: {}", literal_text(literal)),
        ExprKind::VarRef(name) => writeln!(f, "VarRef: {name}"),
        ExprKind::Binary(op, left, right) => {
            writeln!(f, "BinaryOp: {}", op.symbol())?;
            indent(f, depth + 1)?;
            writeln!(f, "Left:")?;
            tree_expr(f, left, depth + 2)?;
            indent(f, depth + 1)?;
            writeln!(f, "Right:")?;
            tree_expr(f, right, depth + 2)
        }
    }
}

pub struct AnnotatedTree<'a>(pub &'a Program);

impl fmt::Display for AnnotatedTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program")?;
        for stmt in &self.0 .0 {
            annotated_stmt(f, stmt, 1)?;
        }
        Ok(())
    }
}

fn annotated_line(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    annotation: &Option<Annotation>,
    depth: usize,
) -> fmt::Result {
    indent(f, depth)?;
    write!(f, "{name}")?;
    if let Some(Annotation { ty, scope }) = annotation {
        match ty {
            Some(ty) => write!(f, " [type={ty}]")?,
            None => write!(f, " [type=unknown]")?,
        }
        write!(f, " [scope={scope}]")?;
    }
    writeln!(f)
}

fn annotated_stmt(f: &mut fmt::Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    let child = depth + 1;
    match &stmt.kind {
        StmtKind::VarDecl { init, .. } => {
            annotated_line(f, "VarDecl", &stmt.annotation, depth)?;
            if let Some(init) = init {
                annotated_expr(f, init, child)?;
            }
        }
        StmtKind::Assign { expr, .. } => {
            annotated_line(f, "Assign", &stmt.annotation, depth)?;
            annotated_expr(f, expr, child)?;
        }
        StmtKind::If {
            cond,
            then_block,
            else_block,
        } => {
            annotated_line(f, "IfStmt", &stmt.annotation, depth)?;
            annotated_expr(f, cond, child)?;
            for s in then_block.iter().chain(else_block.iter().flatten()) {
                annotated_stmt(f, s, child)?;
            }
        }
        StmtKind::While { cond, body } => {
            annotated_line(f, "WhileStmt", &stmt.annotation, depth)?;
            annotated_expr(f, cond, child)?;
            for s in body {
                annotated_stmt(f, s, child)?;
            }
        }
        StmtKind::Print(expr) => {
            annotated_line(f, "PrintStmt", &stmt.annotation, depth)?;
            annotated_expr(f, expr, child)?;
        }
        StmtKind::Input(_) => annotated_line(f, "InputStmt", &stmt.annotation, depth)?,
    }
    Ok(())
}

fn annotated_expr(f: &mut fmt::Formatter<'_>, expr: &Expr, depth: usize) -> fmt::Result {
    match &expr.kind {
        ExprKind::Literal(_) => annotated_line(f, "Literal", &expr.annotation, depth),
        ExprKind::VarRef(_) => annotated_line(f, "VarRef", &expr.annotation, depth),
        ExprKind::Binary(_, left, right) => {
            annotated_line(f, "BinaryOp", &expr.annotation, depth)?;
            annotated_expr(f, left, depth + 1)?;
            annotated_expr(f, right, depth + 1)
        }
    }
}

pub struct Dot<'a>(pub &'a Program);

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph AST {{")?;
        writeln!(f, "    rankdir=LR;")?;
        writeln!(f, "    node [shape=box, fontname=\"Consolas\"];")?;
        let mut graph = DotGraph { f, next: 0 };
        let root = graph.node("Program", None, None)?;
        for stmt in &self.0 .0 {
            graph.stmt(stmt, root)?;
        }
        writeln!(graph.f, "}}")
    }
}

struct DotGraph<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    next: usize,
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl DotGraph<'_, '_> {
    /// `detail` goes on a second line of the label.
    fn node(
        &mut self,
        kind: &str,
        detail: Option<&str>,
        parent: Option<usize>,
    ) -> Result<usize, fmt::Error> {
        let id = self.next;
        self.next += 1;
        match detail {
            Some(detail) => writeln!(self.f, "    n{id} [label=\"{kind}\\n{}\"];", escape(detail))?,
            None => writeln!(self.f, "    n{id} [label=\"{kind}\"];")?,
        }
        if let Some(parent) = parent {
            writeln!(self.f, "    n{parent} -> n{id};")?;
        }
        Ok(id)
    }

    fn stmt(&mut self, stmt: &Stmt, parent: usize) -> fmt::Result {
        match &stmt.kind {
            StmtKind::VarDecl { spec, name, init } => {
                let detail = format!("{} {name}", spec.keyword());
                let id = self.node("VarDecl", Some(detail.as_str()), Some(parent))?;
                if let Some(init) = init {
                    self.expr(init, id)?;
                }
            }
            StmtKind::Assign { name, expr } => {
                let id = self.node("Assign", Some(name.as_str()), Some(parent))?;
                self.expr(expr, id)?;
            }
            StmtKind::If {
                cond,
                then_block,
                else_block,
            } => {
                let id = self.node("If", None, Some(parent))?;
                self.expr(cond, id)?;
                for s in then_block.iter().chain(else_block.iter().flatten()) {
                    self.stmt(s, id)?;
                }
            }
            StmtKind::While { cond, body } => {
                let id = self.node("While", None, Some(parent))?;
                self.expr(cond, id)?;
                for s in body {
                    self.stmt(s, id)?;
                }
            }
            StmtKind::Print(expr) => {
                let id = self.node("Print", None, Some(parent))?;
                self.expr(expr, id)?;
            }
            StmtKind::Input(name) => {
                self.node("Input", Some(name.as_str()), Some(parent))?;
            }
        }
        Ok(())
    }

    fn expr(&mut self, expr: &Expr, parent: usize) -> fmt::Result {
        match &expr.kind {
            ExprKind::Literal(literal) => {
                self.node("Literal", Some(literal_text(literal).as_str()), Some(parent))?;
            }
            ExprKind::VarRef(name) => {
                self.node("VarRef", Some(name.as_str()), Some(parent))?;
            }
            ExprKind::Binary(op, left, right) => {
                let id = self.node("BinaryOp", Some(op.symbol()), Some(parent))?;
                self.expr(left, id)?;
                self.expr(right, id)?;
            }
        }
        Ok(())
    }
}
