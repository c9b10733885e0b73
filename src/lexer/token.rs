use phf::phf_map;

pub static KEYWORDS: phf::Map<&str, TokenKind> = phf_map! {
    "program" => TokenKind::Program,
    "var" => TokenKind::Var,
    "int" => TokenKind::Int,
    "float" => TokenKind::Float,
    "bool" => TokenKind::Bool,
    "string" => TokenKind::String,
    "if" => TokenKind::If,
    "else" => TokenKind::Else,
    "while" => TokenKind::While,
    "print" => TokenKind::Print,
    "input" => TokenKind::Input,
    "end" => TokenKind::End,
    "true" => TokenKind::True,
    "false" => TokenKind::False,
};

pub static TWO_SYMBOLS_TOKENS: phf::Map<&str, TokenKind> = phf_map! {
    "==" => TokenKind::DoubleEqual,
    "!=" => TokenKind::NotEqual,
    "<=" => TokenKind::LessEqual,
    ">=" => TokenKind::GreaterEqual,
};

pub static ONE_SYMBOL_TOKENS: phf::Map<char, TokenKind> = phf_map! {
    '=' => TokenKind::Equal,
    '+' => TokenKind::Plus,
    '-' => TokenKind::Minus,
    '*' => TokenKind::Star,
    '/' => TokenKind::Slash,
    '<' => TokenKind::LessThan,
    '>' => TokenKind::GreaterThan,
    '(' => TokenKind::OpenParen,
    ')' => TokenKind::CloseParen,
    '{' => TokenKind::OpenCurlyBrace,
    '}' => TokenKind::CloseCurlyBrace,
    ';' => TokenKind::SemiColon,
    ':' => TokenKind::Colon,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Program,
    Var,
    Int,
    Float,
    Bool,
    String,
    If,
    Else,
    While,
    Print,
    Input,
    End,
    True,
    False,

    Equal,
    Plus,
    Minus,
    Star,
    Slash,
    LessThan,
    GreaterThan,
    LessEqual,
    GreaterEqual,
    DoubleEqual,
    NotEqual,

    OpenParen,
    CloseParen,
    OpenCurlyBrace,
    CloseCurlyBrace,
    SemiColon,
    Colon,

    Num,
    Str,
    Ident,
    Error,
}

impl TokenKind {
    /// How the token kind is named in syntax errors.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Program => "'program'",
            TokenKind::Var => "'var'",
            TokenKind::Int => "'int'",
            TokenKind::Float => "'float'",
            TokenKind::Bool => "'bool'",
            TokenKind::String => "'string'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::While => "'while'",
            TokenKind::Print => "'print'",
            TokenKind::Input => "'input'",
            TokenKind::End => "'end'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Equal => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::LessThan => "'<'",
            TokenKind::GreaterThan => "'>'",
            TokenKind::LessEqual => "'<='",
            TokenKind::GreaterEqual => "'>='",
            TokenKind::DoubleEqual => "'=='",
            TokenKind::NotEqual => "'!='",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::OpenCurlyBrace => "'{'",
            TokenKind::CloseCurlyBrace => "'}'",
            TokenKind::SemiColon => "';'",
            TokenKind::Colon => "':'",
            TokenKind::Num => "number",
            TokenKind::Str => "string literal",
            TokenKind::Ident => "identifier",
            TokenKind::Error => "invalid character",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based source line.
    pub line: usize,
    /// 1-based character column within the line.
    pub column: usize,
}
