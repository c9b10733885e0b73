use tracing::debug;

use super::{
    token::{KEYWORDS, ONE_SYMBOL_TOKENS, TWO_SYMBOLS_TOKENS},
    Token, TokenKind,
};

#[derive(Debug)]
pub struct Lexer {
    tokens: Vec<Token>,
    line: usize,
    index: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl Lexer {
    fn new() -> Self {
        Self {
            tokens: vec![],
            line: 0,
            index: 0,
        }
    }

    fn new_token(&mut self, kind: TokenKind, s: &str) {
        self.tokens.push(Token {
            kind,
            lexeme: s.to_string(),
            line: self.line,
            column: self.index + 1,
        });
        self.index += s.chars().count();
    }

    /// Quoted literal closed on the same line, quotes included.
    fn match_string(chars: &[char], quote: char) -> Option<String> {
        if chars.first() != Some(&quote) {
            return None;
        }
        let close = chars[1..].iter().position(|&c| c == quote)?;
        Some(chars[..close + 2].iter().collect())
    }

    fn match_number(chars: &[char]) -> Option<(TokenKind, String)> {
        let int_len = chars.iter().take_while(|c| c.is_ascii_digit()).count();
        if int_len == 0 {
            return None;
        }
        if chars.get(int_len) == Some(&'.') {
            let frac_len = chars[int_len + 1..]
                .iter()
                .take_while(|c| c.is_ascii_digit())
                .count();
            if frac_len > 0 {
                let s = chars[..int_len + 1 + frac_len].iter().collect();
                return Some((TokenKind::Num, s));
            }
        }
        Some((TokenKind::Num, chars[..int_len].iter().collect()))
    }

    fn parse_word(&mut self, chars: &[char]) {
        let s: String = chars.iter().take_while(|&&c| is_word_char(c)).collect();

        if let Some(kind) = KEYWORDS.get(s.as_str()) {
            self.new_token(*kind, &s);
        } else if is_identifier(&s) {
            self.new_token(TokenKind::Ident, &s);
        } else {
            self.new_token(TokenKind::Error, &s);
        }
    }

    fn tokenize_line(&mut self, line: &str) {
        let chars: Vec<_> = line.chars().collect();
        self.index = 0;

        while self.index < chars.len() {
            let rest = &chars[self.index..];
            let c = rest[0];
            let c2 = rest.iter().take(2).collect::<String>();

            if c.is_whitespace() {
                self.index += 1;
            } else if let Some(s) = Self::match_string(rest, '"') {
                self.new_token(TokenKind::Str, &s);
            } else if let Some(s) = Self::match_string(rest, '\'') {
                self.new_token(TokenKind::Str, &s);
            } else if let Some(kind) = TWO_SYMBOLS_TOKENS.get(c2.as_str()) {
                self.new_token(*kind, &c2);
            } else if let Some(kind) = ONE_SYMBOL_TOKENS.get(&c) {
                self.new_token(*kind, &c.to_string());
            } else if let Some((kind, s)) = Self::match_number(rest) {
                self.new_token(kind, &s);
            } else if is_word_char(c) {
                self.parse_word(rest);
            } else {
                self.new_token(TokenKind::Error, &c.to_string());
            }
        }
    }

    fn _tokenize(&mut self, s: &str) {
        for (i, line) in s.lines().enumerate() {
            self.line = i + 1;
            self.tokenize_line(line);
        }
    }

    /// Never fails: unrecognised input becomes `TokenKind::Error` tokens.
    pub fn tokenize(s: &str) -> Vec<Token> {
        let mut lexer = Lexer::new();
        lexer._tokenize(s);
        debug!(tokens = lexer.tokens.len(), "tokenized source");

        lexer.tokens
    }
}
