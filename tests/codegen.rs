use minilang::codegen::*;
use minilang::parser::BinOpKind;

fn listing(source: &str) -> Vec<String> {
    minilang::compile(source)
        .unwrap()
        .instructions
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn declaration_and_print() {
    assert_eq!(listing("int x = 10;\nprint(x);"), vec!["x := 10", "print x"]);
}

#[test]
fn declaration_without_initializer_emits_nothing() {
    assert!(listing("int x;\nfloat y;").is_empty());
}

#[test]
fn literals_in_place() {
    assert_eq!(
        listing("float f = 2.0;\nbool b = true;\nbool c = false;\nstring s = \"hi there\";\nprint(\"done\");"),
        vec![
            "f := 2.0",
            "b := 1",
            "c := 0",
            r#"s := "\"hi there\"""#,
            "print \"done\"",
        ]
    );
}

#[test]
fn nested_expression_uses_fresh_temporaries() {
    assert_eq!(
        listing("int x = 1;\nint y = (x + 2) * (x - 3) / 4;"),
        vec![
            "x := 1",
            "t0 := x + 2",
            "t1 := x - 3",
            "t2 := t0 * t1",
            "t3 := t2 / 4",
            "y := t3",
        ]
    );
}

#[test]
fn if_without_else_still_emits_both_labels() {
    assert_eq!(
        listing("int x = 1;\nif (x > 0) { print(x); }"),
        vec![
            "x := 1",
            "t0 := x > 0",
            "if t0 == 0 goto L0",
            "print x",
            "goto L1",
            "L0:",
            "L1:",
        ]
    );
}

#[test]
fn if_else() {
    assert_eq!(
        listing("int x = 1;\nif (x == 1) { x = 2; } else { x = 3; }"),
        vec![
            "x := 1",
            "t0 := x == 1",
            "if t0 == 0 goto L0",
            "x := 2",
            "goto L1",
            "L0:",
            "x := 3",
            "L1:",
        ]
    );
}

#[test]
fn while_loop() {
    assert_eq!(
        listing("int i = 0;\nwhile (i < 3) { i = i + 1; }"),
        vec![
            "i := 0",
            "L0:",
            "t0 := i < 3",
            "if t0 == 0 goto L1",
            "t1 := i + 1",
            "i := t1",
            "goto L0",
            "L1:",
        ]
    );
}

#[test]
fn nested_control_flow_labels_are_unique() {
    let lines = listing(
        "int i = 0;
while (i < 3) {
    if (i == 1) { print(i); } else { print(0); }
    i = i + 1;
}
if (i != 3) { print(i); }",
    );
    let labels: Vec<&String> = lines.iter().filter(|l| l.ends_with(':')).collect();
    assert_eq!(labels, vec!["L0:", "L2:", "L3:", "L1:", "L4:", "L5:"]);
}

#[test]
fn input_statement() {
    assert_eq!(listing("string s;\ninput(s);"), vec!["input s"]);
}

#[test]
fn one_codegen_numbers_across_calls() {
    let program = minilang::compile("int x = 1 + 2;").unwrap().program;
    let mut codegen = Codegen::new();
    let first = codegen.generate(&program);
    let second = codegen.generate(&program);
    assert_eq!(first[0].to_string(), "t0 := 1 + 2");
    assert_eq!(second[0].to_string(), "t1 := 1 + 2");
}

#[test]
fn only_directly_printed_strings_lose_their_quotes() {
    assert_eq!(
        listing("string s = \"hi\";\nprint(s);\nprint(\"hi\");\nbool b = s == \"hi\";"),
        vec![
            r#"s := "\"hi\"""#,
            "print s",
            "print \"hi\"",
            r#"t0 := s == "\"hi\"""#,
            "b := t0",
        ]
    );
}

#[test]
fn quotes_inside_strings_survive_the_text_form() {
    let instructions = minilang::compile("string s = 'a \"b c\" d';\nprint('x \"y\"');")
        .unwrap()
        .instructions;
    assert_eq!(
        instructions,
        vec![
            Instr::Copy {
                dst: "s".to_string(),
                src: Operand::Str(r#""a "b c" d""#.to_string()),
            },
            Instr::Print(Operand::Str(r#"x "y""#.to_string())),
        ]
    );
    let text = instructions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(parse_tac(&text).unwrap(), instructions);
}

#[test]
fn listing_parses_back() {
    let instructions = minilang::compile(
        "string s = \"a b\";
float f = 1.5;
while (f < 10.0) { f = f * 2.0; }
if (s == \"a b\") { print(s); }
input(s);",
    )
    .unwrap()
    .instructions;
    let text = instructions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(parse_tac(&text).unwrap(), instructions);
}

#[test]
fn parse_hand_written_tac() {
    let text = "
x := 'single'
t0 := x + 2.5
if t0 == 1 goto done

done:
print  t0
";
    assert_eq!(
        parse_tac(text).unwrap(),
        vec![
            Instr::Copy {
                dst: "x".to_string(),
                src: Operand::Str("single".to_string()),
            },
            Instr::BinOp {
                dst: "t0".to_string(),
                op: BinOpKind::Add,
                lhs: Operand::Name("x".to_string()),
                rhs: Operand::Float(2.5),
            },
            Instr::IfEqGoto {
                cond: Operand::Name("t0".to_string()),
                value: 1,
                label: "done".to_string(),
            },
            Instr::Label("done".to_string()),
            Instr::Print(Operand::Name("t0".to_string())),
        ]
    );
}

#[test]
fn malformed_tac_reports_its_line() {
    let err = parse_tac("x := 1\nx := 1 % 2").unwrap_err();
    assert_eq!(
        err,
        TacParseError {
            line: 2,
            text: "x := 1 % 2".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Malformed TAC on line 2: 'x := 1 % 2'");
    assert!("goto".parse::<Instr>().is_err());
}
