//! Unary operator evaluation

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use crate::program::ast::{SourceLocation, UnOp};

impl Interpreter {
    pub(crate) fn apply_unary_op(
        &self,
        op: &UnOp,
        val: &Value,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        match op {
            UnOp::Neg => Self::evaluate_neg_op(val, location),
            UnOp::Not => Ok(Value::Bool(!val.is_truthy())),
            UnOp::BitNot => Self::evaluate_bitnot_op(val, location),
        }
    }

    fn evaluate_neg_op(val: &Value, location: SourceLocation) -> Result<Value, RuntimeError> {
        if let Value::Float(x) = val {
            return Ok(Value::Float(-x));
        }
        match val.as_int() {
            Some(n) => n
                .checked_neg()
                .ok_or(RuntimeError::IntegerOverflow {
                    operation: format!("-{}", n),
                    location,
                })
                .map(Value::Int),
            None => Err(Self::bad_operand(&UnOp::Neg, val, location)),
        }
    }

    /// Two's-complement inversion: `~x == -(x + 1)`
    fn evaluate_bitnot_op(val: &Value, location: SourceLocation) -> Result<Value, RuntimeError> {
        val.as_int()
            .map(|n| Value::Int(!n))
            .ok_or_else(|| Self::bad_operand(&UnOp::BitNot, val, location))
    }

    fn bad_operand(op: &UnOp, val: &Value, location: SourceLocation) -> RuntimeError {
        RuntimeError::TypeError {
            expected: format!("operand supporting unary '{}'", op.symbol()),
            got: format!("'{}'", val.type_name()),
            location,
        }
    }
}
