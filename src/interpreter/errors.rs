//! Runtime error types for the operator interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can
//! occur while evaluating a program. None of them is reachable from the
//! built-in tour; they guard programs assembled with other operands.
//!
//! All runtime errors are fatal - they halt execution at the faulting statement.

use crate::program::ast::SourceLocation;
use std::fmt;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Operand types not supported by an operator
    TypeError {
        expected: String,
        got: String,
        location: SourceLocation,
    },

    /// Division, floor division or modulo by zero
    DivisionError {
        operation: String,
        location: SourceLocation,
    },

    /// Integer result does not fit in 64 bits
    IntegerOverflow {
        operation: String,
        location: SourceLocation,
    },

    /// Negative shift count
    InvalidShift {
        count: i64,
        location: SourceLocation,
    },

    /// Result is not a real number (negative base, fractional exponent)
    MathDomain {
        operation: String,
        location: SourceLocation,
    },

    /// Undefined variable reference
    UndefinedVariable {
        name: String,
        location: SourceLocation,
    },
}

impl RuntimeError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            RuntimeError::TypeError { location, .. } => location,
            RuntimeError::DivisionError { location, .. } => location,
            RuntimeError::IntegerOverflow { location, .. } => location,
            RuntimeError::InvalidShift { location, .. } => location,
            RuntimeError::MathDomain { location, .. } => location,
            RuntimeError::UndefinedVariable { location, .. } => location,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::TypeError {
                expected,
                got,
                location,
            } => {
                write!(
                    f,
                    "Type error at line {}: expected {}, got {}",
                    location.line, expected, got
                )
            }
            RuntimeError::DivisionError {
                operation,
                location,
            } => {
                write!(f, "{} at line {}", operation, location.line)
            }
            RuntimeError::IntegerOverflow {
                operation,
                location,
            } => {
                write!(
                    f,
                    "Integer overflow in operation: {} at line {}",
                    operation, location.line
                )
            }
            RuntimeError::InvalidShift { count, location } => {
                write!(
                    f,
                    "Negative shift count {} at line {}",
                    count, location.line
                )
            }
            RuntimeError::MathDomain {
                operation,
                location,
            } => {
                write!(
                    f,
                    "Math domain error in operation: {} at line {}",
                    operation, location.line
                )
            }
            RuntimeError::UndefinedVariable { name, location } => {
                write!(f, "Undefined variable '{}' at line {}", name, location.line)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
