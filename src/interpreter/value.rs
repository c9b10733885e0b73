use std::{cmp::Ordering, fmt};

use crate::parser::BinOpKind;

/// Floats always print with a fractional part (`2.0`, `2.5`).
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Default for Value {
    fn default() -> Self {
        Value::Int(0)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Int(i64::from(b))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => f.write_str(&format_float(*value)),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl Value {
    /// Reads a line of program input: integer, then float, then raw string.
    pub fn from_input(s: &str) -> Self {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            Value::Int(value)
        } else if let Ok(value) = s.parse::<f64>() {
            Value::Float(value)
        } else {
            Value::Str(s.to_string())
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            Value::Str(_) => None,
        }
    }

    /// Numbers compare numerically (ints promote to float against a float),
    /// strings lexicographically. A string and a number are unordered.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (a, b) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        }
    }

    pub fn binary(op: BinOpKind, lhs: &Value, rhs: &Value) -> Value {
        let ordering = || lhs.compare(rhs);
        match op {
            BinOpKind::Add => lhs.add(rhs),
            BinOpKind::Sub => lhs.arithmetic(rhs, i64::wrapping_sub, |a, b| a - b),
            BinOpKind::Mul => lhs.arithmetic(rhs, i64::wrapping_mul, |a, b| a * b),
            BinOpKind::Div => lhs.div(rhs),
            BinOpKind::LessThan => Value::from(ordering() == Some(Ordering::Less)),
            BinOpKind::GreaterThan => Value::from(ordering() == Some(Ordering::Greater)),
            BinOpKind::LessEqual => Value::from(matches!(
                ordering(),
                Some(Ordering::Less | Ordering::Equal)
            )),
            BinOpKind::GreaterEqual => Value::from(matches!(
                ordering(),
                Some(Ordering::Greater | Ordering::Equal)
            )),
            BinOpKind::Equal => Value::from(ordering() == Some(Ordering::Equal)),
            BinOpKind::NotEqual => Value::from(ordering() != Some(Ordering::Equal)),
        }
    }

    fn arithmetic(
        &self,
        other: &Value,
        int_op: fn(i64, i64) -> i64,
        float_op: fn(f64, f64) -> f64,
    ) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Value::Int(int_op(*a, *b)),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => Value::Float(float_op(a, b)),
                _ => Value::default(),
            },
        }
    }

    /// `+` concatenates as soon as one side is a string.
    fn add(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Str(_), _) | (_, Value::Str(_)) => Value::Str(format!("{self}{other}")),
            _ => self.arithmetic(other, i64::wrapping_add, |a, b| a + b),
        }
    }

    /// Always a float, `7 / 2` is `3.5`. Division by zero yields 0.
    fn div(&self, other: &Value) -> Value {
        match (self.as_f64(), other.as_f64()) {
            (Some(_), Some(b)) if b == 0.0 => Value::default(),
            (Some(a), Some(b)) => Value::Float(a / b),
            _ => Value::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_formatting() {
        assert_eq!(format_float(2.0), "2.0");
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(Value::Float(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn mixed_numeric_equality() {
        let one = Value::Int(1);
        let one_f = Value::Float(1.0);
        assert_eq!(Value::binary(BinOpKind::Equal, &one, &one_f), Value::Int(1));
        assert_eq!(Value::binary(BinOpKind::Add, &one, &one_f), Value::Float(2.0));
    }

    #[test]
    fn string_against_number_is_unordered() {
        let s = Value::Str("1".to_string());
        let n = Value::Int(1);
        assert_eq!(Value::binary(BinOpKind::Equal, &s, &n), Value::Int(0));
        assert_eq!(Value::binary(BinOpKind::NotEqual, &s, &n), Value::Int(1));
        assert_eq!(Value::binary(BinOpKind::LessEqual, &s, &n), Value::Int(0));
    }

    #[test]
    fn division() {
        let ten = Value::Int(10);
        assert_eq!(Value::binary(BinOpKind::Div, &ten, &Value::Int(4)), Value::Float(2.5));
        assert_eq!(Value::binary(BinOpKind::Div, &ten, &Value::Int(2)), Value::Float(5.0));
        assert_eq!(Value::binary(BinOpKind::Div, &ten, &Value::Int(0)), Value::Int(0));
        assert_eq!(
            Value::binary(BinOpKind::Div, &ten, &Value::Float(0.0)),
            Value::Int(0)
        );
        assert_eq!(
            Value::binary(BinOpKind::Div, &Value::Float(5.0), &Value::Int(2)),
            Value::Float(2.5)
        );
        assert_eq!(
            Value::binary(BinOpKind::Div, &Value::Str("a".to_string()), &Value::Int(2)),
            Value::Int(0)
        );
    }

    #[test]
    fn input_parsing() {
        assert_eq!(Value::from_input("42\n"), Value::Int(42));
        assert_eq!(Value::from_input("4.5"), Value::Float(4.5));
        assert_eq!(Value::from_input("hello"), Value::Str("hello".to_string()));
    }
}
