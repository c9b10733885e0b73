use minilang::lexer::Lexer;
use minilang::parser::*;

fn parse(input: &str) -> Result<Program, SyntaxError> {
    Parser::new(Lexer::tokenize(input)).parse()
}

fn literal(expr: &Expr) -> &Literal {
    let ExprKind::Literal(literal) = &expr.kind else {
        panic!("not a literal: {:?}", expr);
    };
    literal
}

#[test]
fn program_and_end_are_optional() {
    let with = parse("program int x = 1; end").unwrap();
    let without = parse("int x = 1;").unwrap();
    assert_eq!(with, without);
    assert_eq!(parse("").unwrap(), Program(vec![]));
}

#[test]
fn var_declaration() {
    let program = parse("var x;\nstring s = 'hi';").unwrap();
    let StmtKind::VarDecl { spec, name, init } = &program.0[0].kind else {
        panic!();
    };
    assert_eq!((*spec, name.as_str(), init), (TypeSpecifier::Var, "x", &None));

    let stmt = &program.0[1];
    assert_eq!(stmt.line, 2);
    let StmtKind::VarDecl { spec, init: Some(init), .. } = &stmt.kind else {
        panic!();
    };
    assert_eq!(*spec, TypeSpecifier::String);
    assert_eq!(literal(init), &Literal::Str("hi".to_string()));
}

#[test]
fn literals() {
    let program = parse("x = 3; x = 2.5; x = true; x = false; x = \"s\";").unwrap();
    let values: Vec<_> = program
        .0
        .iter()
        .map(|stmt| {
            let StmtKind::Assign { expr, .. } = &stmt.kind else {
                panic!();
            };
            literal(expr).clone()
        })
        .collect();
    assert_eq!(
        values,
        vec![
            Literal::Int(3),
            Literal::Float(2.5),
            Literal::Bool(true),
            Literal::Bool(false),
            Literal::Str("s".to_string()),
        ]
    );
}

#[test]
fn precedence_and_left_associativity() {
    let program = parse("x = 1 - 2 - 3 * 4 < 5;").unwrap();
    let StmtKind::Assign { expr, .. } = &program.0[0].kind else {
        panic!();
    };

    // ((1 - 2) - (3 * 4)) < 5
    let ExprKind::Binary(BinOpKind::LessThan, lhs, rhs) = &expr.kind else {
        panic!("{:?}", expr);
    };
    assert_eq!(literal(rhs), &Literal::Int(5));
    let ExprKind::Binary(BinOpKind::Sub, sub_lhs, sub_rhs) = &lhs.kind else {
        panic!("{:?}", lhs);
    };
    assert!(matches!(
        sub_lhs.kind,
        ExprKind::Binary(BinOpKind::Sub, _, _)
    ));
    assert!(matches!(
        sub_rhs.kind,
        ExprKind::Binary(BinOpKind::Mul, _, _)
    ));
}

#[test]
fn parentheses_group() {
    let program = parse("x = (1 + 2) * 3;").unwrap();
    let StmtKind::Assign { expr, .. } = &program.0[0].kind else {
        panic!();
    };
    let ExprKind::Binary(BinOpKind::Mul, lhs, _) = &expr.kind else {
        panic!();
    };
    assert!(matches!(lhs.kind, ExprKind::Binary(BinOpKind::Add, _, _)));
}

#[test]
fn if_else_and_while() {
    let program = parse(
        "if (x > 1) { print(x); } else { input(x); }\nwhile (x < 3) { x = x + 1; }\nif (true) {}",
    )
    .unwrap();

    let StmtKind::If {
        then_block,
        else_block: Some(else_block),
        ..
    } = &program.0[0].kind
    else {
        panic!();
    };
    assert!(matches!(then_block[0].kind, StmtKind::Print(_)));
    assert_eq!(else_block[0].kind, StmtKind::Input("x".to_string()));

    assert_eq!(program.0[1].line, 2);
    let StmtKind::While { body, .. } = &program.0[1].kind else {
        panic!();
    };
    assert_eq!(body.len(), 1);

    let StmtKind::If {
        then_block,
        else_block: None,
        ..
    } = &program.0[2].kind
    else {
        panic!();
    };
    assert!(then_block.is_empty());
}

#[test]
fn missing_semicolon() {
    let err = parse("int x = 1\nprint(x);").unwrap_err();
    assert_eq!(err, SyntaxError::new(2, "';'", "print"));
    assert_eq!(
        err.to_string(),
        "Syntax error on line 2: expected ';' but found 'print'"
    );
}

#[test]
fn bad_expression() {
    let err = parse("x = ;").unwrap_err();
    assert_eq!((err.line, err.expected.as_str(), err.found.as_str()), (1, "expression", ";"));
}

#[test]
fn unexpected_statement() {
    let err = parse("int x;\n{ }").unwrap_err();
    assert_eq!((err.line, err.expected.as_str(), err.found.as_str()), (2, "statement", "{"));
}

#[test]
fn error_tokens_are_rejected() {
    let err = parse("x = 1 @ 2;").unwrap_err();
    assert_eq!(err.found, "@");
}

#[test]
fn unexpected_end_of_input() {
    let err = parse("while (x < 1) {\n x = 1;").unwrap_err();
    assert_eq!((err.line, err.found.as_str()), (2, "end of input"));
}

#[test]
fn tokens_after_end_are_ignored() {
    assert_eq!(parse("program end x = 1;").unwrap(), Program(vec![]));
    let program = parse("print(1);\nend\n@ ] print(").unwrap();
    assert_eq!(program.0.len(), 1);
}

#[test]
fn integer_overflow() {
    let err = parse("x = 99999999999999999999;").unwrap_err();
    assert_eq!(err.expected, "integer literal");
}
