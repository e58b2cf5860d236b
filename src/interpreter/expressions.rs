//! Expression evaluation implementation
//!
//! Literals and variables evaluate directly. Binary and unary operators are
//! dispatched to [`super::ops`], except `and`/`or`, which short-circuit here:
//! the right operand is only evaluated when the left one does not decide the
//! result, and the deciding operand itself is returned.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use crate::program::ast::{BinOp, Expr};

impl Interpreter {
    /// Evaluate an expression and return its value
    pub(crate) fn evaluate_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        let location = self.current_location;

        match expr {
            Expr::IntLiteral(n) => Ok(Value::Int(*n)),

            Expr::FloatLiteral(x) => Ok(Value::Float(*x)),

            Expr::BoolLiteral(b) => Ok(Value::Bool(*b)),

            Expr::StringLiteral(s) => Ok(Value::Str(s.clone())),

            Expr::Variable(name) => self.lookup_variable(name, location),

            Expr::BinaryOp {
                op: BinOp::And,
                left,
                right,
            } => {
                let left_val = self.evaluate_expr(left)?;
                if !left_val.is_truthy() {
                    return Ok(left_val);
                }
                self.evaluate_expr(right)
            }

            Expr::BinaryOp {
                op: BinOp::Or,
                left,
                right,
            } => {
                let left_val = self.evaluate_expr(left)?;
                if left_val.is_truthy() {
                    return Ok(left_val);
                }
                self.evaluate_expr(right)
            }

            Expr::BinaryOp { op, left, right } => {
                let left_val = self.evaluate_expr(left)?;
                let right_val = self.evaluate_expr(right)?;
                self.apply_binary_op(op, &left_val, &right_val, location)
            }

            Expr::UnaryOp { op, operand } => {
                let val = self.evaluate_expr(operand)?;
                self.apply_unary_op(op, &val, location)
            }
        }
    }
}
