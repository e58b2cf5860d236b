//! Runtime value representation
//!
//! This module defines the [`Value`] enum, which represents all possible runtime
//! values in the tour. Values are dynamically typed: a name can be rebound to a
//! value of a different variant at any time.
//!
//! # Value Types
//!
//! - [`Value::Int`]: 64-bit signed integer
//! - [`Value::Float`]: 64-bit IEEE float
//! - [`Value::Bool`]: boolean, usable as the integers 0 and 1 in arithmetic
//! - [`Value::Str`]: text; single characters are one-character strings
//!
//! # Rendering
//!
//! [`Value`]'s `Display` impl is the default string conversion used by print
//! statements: `True`/`False`, plain decimal integers and shortest
//! round-trip floats (see [`format_float`]).

use crate::interpreter::constants::{REPR_EXP_MAX, REPR_EXP_MIN};
use std::fmt;

/// Runtime values in the interpreter
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

/// A value viewed as a number, after bool-to-int coercion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    pub fn to_f64(self) -> f64 {
        match self {
            Numeric::Int(n) => n as f64,
            Numeric::Float(x) => x,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Numeric::Int(n) => n == 0,
            Numeric::Float(x) => x == 0.0,
        }
    }
}

impl Value {
    /// Type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
        }
    }

    /// Truthiness: zero numbers, `False` and the empty string are false
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Float(x) => *x != 0.0,
            Value::Bool(b) => *b,
            Value::Str(s) => !s.is_empty(),
        }
    }

    /// Get the integer value, treating booleans as 0/1
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Get the value as a number, returns None for strings
    pub fn as_numeric(&self) -> Option<Numeric> {
        match self {
            Value::Float(x) => Some(Numeric::Float(*x)),
            other => other.as_int().map(Numeric::Int),
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

/// Render a float as the shortest decimal that round-trips.
///
/// Integral values keep a trailing `.0`. Decimal exponents below
/// [`REPR_EXP_MIN`] or at least [`REPR_EXP_MAX`] switch to scientific
/// notation with a sign and at least two exponent digits (`1e+16`, `1.5e-05`).
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "3.3333333333333335e0"
    let sci = format!("{:e}", x);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < REPR_EXP_MIN || exponent >= REPR_EXP_MAX {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs());
    }

    let mut fixed = format!("{}", x);
    if !fixed.contains('.') {
        fixed.push_str(".0");
    }
    fixed
}
