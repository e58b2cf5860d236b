//! Loop statement execution (`for var in range(start, end)`).
//!
//! Both bounds are evaluated once, before the first iteration, and must be
//! integers (booleans count as 0/1). The loop variable is bound in the shared
//! scope and keeps its last value after the loop; an empty range leaves it
//! untouched.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use crate::program::ast::{Expr, SourceLocation, Stmt};

impl Interpreter {
    pub(crate) fn execute_for_range(
        &mut self,
        var: &str,
        start: &Expr,
        end: &Expr,
        body: &[Stmt],
        location: SourceLocation,
    ) -> Result<(), RuntimeError> {
        let start = self.evaluate_range_bound(start, location)?;
        let end = self.evaluate_range_bound(end, location)?;

        for i in start..end {
            self.scope.set(var, Value::Int(i));
            self.execute_block(body)?;
            self.current_location = location;
        }

        Ok(())
    }

    fn evaluate_range_bound(
        &mut self,
        bound: &Expr,
        location: SourceLocation,
    ) -> Result<i64, RuntimeError> {
        let val = self.evaluate_expr(bound)?;
        val.as_int().ok_or_else(|| RuntimeError::TypeError {
            expected: "int range bound".to_string(),
            got: format!("'{}'", val.type_name()),
            location,
        })
    }
}
