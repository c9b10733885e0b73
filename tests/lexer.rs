use minilang::lexer::{Lexer, TokenKind};

fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::tokenize(input).into_iter().map(|t| t.kind).collect()
}

#[test]
fn keywords_are_reclassified() {
    assert_eq!(
        kinds("program var int float bool string if else while print input end true false"),
        vec![
            TokenKind::Program,
            TokenKind::Var,
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::Bool,
            TokenKind::String,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Print,
            TokenKind::Input,
            TokenKind::End,
            TokenKind::True,
            TokenKind::False,
        ]
    );
    assert_eq!(kinds("printer _x1"), vec![TokenKind::Ident, TokenKind::Ident]);
}

#[test]
fn two_symbol_operators_win_over_one_symbol() {
    assert_eq!(
        kinds("a<=b == c != d >= e = f < g"),
        vec![
            TokenKind::Ident,
            TokenKind::LessEqual,
            TokenKind::Ident,
            TokenKind::DoubleEqual,
            TokenKind::Ident,
            TokenKind::NotEqual,
            TokenKind::Ident,
            TokenKind::GreaterEqual,
            TokenKind::Ident,
            TokenKind::Equal,
            TokenKind::Ident,
            TokenKind::LessThan,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn numbers() {
    let tokens = Lexer::tokenize("12 3.25 7.");
    let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["12", "3.25", "7", "."]);
    assert_eq!(tokens[2].kind, TokenKind::Num);
    assert_eq!(tokens[3].kind, TokenKind::Error);
}

#[test]
fn strings_keep_their_quotes() {
    let tokens = Lexer::tokenize(r#"print("a b"); print('c');"#);
    let strings: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Str)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(strings, vec![r#""a b""#, "'c'"]);
}

#[test]
fn unterminated_string_degrades_to_error_tokens() {
    let tokens = Lexer::tokenize("x = \"abc\ny");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::Equal,
            TokenKind::Error,
            TokenKind::Ident,
            TokenKind::Ident,
        ]
    );
    assert_eq!(tokens[2].lexeme, "\"");
    assert_eq!(tokens[3].lexeme, "abc");
    assert_eq!(tokens[4].line, 2);
}

#[test]
fn unknown_characters_become_error_tokens() {
    let tokens = Lexer::tokenize("a @ # [b]");
    let errors: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Error)
        .map(|t| (t.lexeme.as_str(), t.column))
        .collect();
    assert_eq!(errors, vec![("@", 3), ("#", 5), ("[", 7), ("]", 9)]);
}

#[test]
fn positions_are_one_based_and_ordered() {
    let source = "\nint x = 1;\n  while (x < 3) {\n    x = x + 1;\n  }\n";
    let tokens = Lexer::tokenize(source);

    assert_eq!((tokens[0].line, tokens[0].column), (2, 1));
    let while_token = tokens.iter().find(|t| t.kind == TokenKind::While).unwrap();
    assert_eq!((while_token.line, while_token.column), (3, 3));

    for pair in tokens.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.line <= b.line);
        if a.line == b.line {
            assert!(a.column < b.column);
        }
    }
    for t in &tokens {
        let line = source.lines().nth(t.line - 1).unwrap();
        let at: String = line.chars().skip(t.column - 1).take(t.lexeme.chars().count()).collect();
        assert_eq!(at, t.lexeme);
    }
}
