use std::{fmt, str::FromStr};

use crate::{interpreter::format_float, parser::BinOpKind};

#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// A variable or a temporary.
    Name(String),
    Int(i64),
    Float(f64),
    /// The string value itself. Rendered double-quoted with `\` and `"`
    /// escaped.
    Str(String),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Name(name) => f.write_str(name),
            Operand::Int(value) => write!(f, "{value}"),
            Operand::Float(value) => f.write_str(&format_float(*value)),
            Operand::Str(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    if c == '"' || c == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("\"")
            }
        }
    }
}

impl FromStr for Operand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(());
        }
        if let Some(value) = parse_string(s) {
            return Ok(Operand::Str(value));
        }
        if s.contains('.') {
            if let Ok(value) = s.parse::<f64>() {
                return Ok(Operand::Float(value));
            }
        } else if let Ok(value) = s.parse::<i64>() {
            return Ok(Operand::Int(value));
        }
        Ok(Operand::Name(s.to_string()))
    }
}

/// `"..."` with backslash escapes, or `'...'` taken verbatim.
fn parse_string(s: &str) -> Option<String> {
    if let Some(inner) = s.strip_prefix('\'').and_then(|rest| rest.strip_suffix('\'')) {
        return Some(inner.to_string());
    }

    let mut chars = s.strip_prefix('"')?.chars();
    let mut value = String::new();
    while let Some(c) = chars.next() {
        match c {
            '\\' => value.push(chars.next()?),
            '"' => return chars.as_str().is_empty().then_some(value),
            c => value.push(c),
        }
    }
    None
}

/// One three-address instruction. `Display` gives the textual line form.
#[derive(Clone, Debug, PartialEq)]
pub enum Instr {
    /// `dst := src`
    Copy { dst: String, src: Operand },
    /// `dst := lhs op rhs`
    BinOp {
        dst: String,
        op: BinOpKind,
        lhs: Operand,
        rhs: Operand,
    },
    /// `name:`
    Label(String),
    /// `goto label`
    Goto(String),
    /// `if cond == value goto label`
    IfEqGoto {
        cond: Operand,
        value: i64,
        label: String,
    },
    /// `print operand`
    Print(Operand),
    /// `input name`
    Input(String),
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::Copy { dst, src } => write!(f, "{dst} := {src}"),
            Instr::BinOp { dst, op, lhs, rhs } => {
                write!(f, "{dst} := {lhs} {} {rhs}", op.symbol())
            }
            Instr::Label(name) => write!(f, "{name}:"),
            Instr::Goto(label) => write!(f, "goto {label}"),
            Instr::IfEqGoto { cond, value, label } => {
                write!(f, "if {cond} == {value} goto {label}")
            }
            Instr::Print(operand) => write!(f, "print {operand}"),
            Instr::Input(name) => write!(f, "input {name}"),
        }
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("Malformed TAC on line {line}: '{text}'")]
pub struct TacParseError {
    pub line: usize,
    pub text: String,
}

/// Splits on whitespace, keeping quoted runs whole.
fn split_words(s: &str) -> Vec<&str> {
    let mut words = vec![];
    let mut start = None;
    let mut quote = None;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some('"') if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => (),
            None if c.is_whitespace() => {
                if let Some(s0) = start.take() {
                    words.push(&s[s0..i]);
                }
            }
            None => {
                if start.is_none() {
                    start = Some(i);
                }
                if c == '"' || c == '\'' {
                    quote = Some(c);
                }
            }
        }
    }
    if let Some(s0) = start {
        words.push(&s[s0..]);
    }
    words
}

fn operand(s: &str) -> Option<Operand> {
    s.parse().ok()
}

fn parse_line(line: &str) -> Option<Instr> {
    if let Some(rest) = line.strip_prefix("print ") {
        return operand(rest.trim()).map(Instr::Print);
    }

    let words = split_words(line);
    match words.as_slice() {
        ["input", name] => Some(Instr::Input(name.to_string())),
        ["goto", label] => Some(Instr::Goto(label.to_string())),
        ["if", cond, "==", value, "goto", label] => Some(Instr::IfEqGoto {
            cond: operand(cond)?,
            value: value.parse::<i64>().ok()?,
            label: label.to_string(),
        }),
        [dst, ":=", src] => Some(Instr::Copy {
            dst: dst.to_string(),
            src: operand(src)?,
        }),
        [dst, ":=", lhs, op, rhs] => Some(Instr::BinOp {
            dst: dst.to_string(),
            op: BinOpKind::from_symbol(op)?,
            lhs: operand(lhs)?,
            rhs: operand(rhs)?,
        }),
        [label] => label
            .strip_suffix(':')
            .filter(|name| !name.is_empty())
            .map(|name| Instr::Label(name.to_string())),
        _ => None,
    }
}

impl FromStr for Instr {
    type Err = TacParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s.trim()).ok_or_else(|| TacParseError {
            line: 1,
            text: s.to_string(),
        })
    }
}

/// Parses a TAC listing, one instruction per line. Blank lines are skipped.
pub fn parse_tac(text: &str) -> Result<Vec<Instr>, TacParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            parse_line(line.trim()).ok_or_else(|| TacParseError {
                line: i + 1,
                text: line.to_string(),
            })
        })
        .collect()
}
