//! Assignment and compound assignment
//!
//! `name op= value` reads the current binding, applies the binary operator
//! and rebinds the result. The result's type replaces the old one, so once
//! `/=` turns an integer accumulator into a float every later compound
//! assignment keeps working on a float.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use crate::program::ast::{BinOp, Expr, SourceLocation};

impl Interpreter {
    pub(crate) fn execute_assignment(
        &mut self,
        name: &str,
        value: &Expr,
    ) -> Result<(), RuntimeError> {
        let val = self.evaluate_expr(value)?;
        self.assign_to_variable(name, val);
        Ok(())
    }

    pub(crate) fn execute_compound_assignment(
        &mut self,
        name: &str,
        op: &BinOp,
        value: &Expr,
        location: SourceLocation,
    ) -> Result<(), RuntimeError> {
        let current = self.lookup_variable(name, location)?;
        let rhs = self.evaluate_expr(value)?;
        let result = self.apply_binary_op(op, &current, &rhs, location)?;
        self.assign_to_variable(name, result);
        Ok(())
    }

    fn assign_to_variable(&mut self, name: &str, value: Value) {
        self.scope.set(name, value);
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::engine::Interpreter;
    use crate::interpreter::errors::RuntimeError;
    use crate::memory::value::Value;
    use crate::program::ast::BinOp;
    use crate::program::builder::*;

    #[test]
    fn test_accumulator_turns_float_after_division() {
        let program = ProgramBuilder::new()
            .section("acc", |b| {
                b.assign("num", int(10));
                b.compound_assign("num", BinOp::Add, int(5));
                b.compound_assign("num", BinOp::Sub, int(3));
                b.compound_assign("num", BinOp::Mul, int(2));
            })
            .section("float", |b| {
                b.compound_assign("num", BinOp::Div, int(4));
                b.compound_assign("num", BinOp::Mod, int(4));
                b.compound_assign("num", BinOp::Pow, int(3));
                b.compound_assign("num", BinOp::FloorDiv, int(3));
            })
            .build();

        let mut interpreter = Interpreter::new(program.clone());
        interpreter.run_section(&program.sections[0]).unwrap();
        assert_eq!(interpreter.variable("num"), Some(&Value::Int(24)));

        interpreter.run_section(&program.sections[1]).unwrap();
        assert_eq!(interpreter.variable("num"), Some(&Value::Float(2.0)));
    }

    #[test]
    fn test_compound_assign_on_unbound_name() {
        let program = ProgramBuilder::new()
            .section("s", |b| {
                b.compound_assign("missing", BinOp::Add, int(1));
            })
            .build();

        let mut interpreter = Interpreter::new(program);
        match interpreter.run() {
            Err(RuntimeError::UndefinedVariable { name, location }) => {
                assert_eq!(name, "missing");
                assert_eq!(location.line, 1);
            }
            other => panic!("Expected undefined variable, got {:?}", other),
        }
    }
}
