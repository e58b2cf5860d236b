//! Binary operator evaluation
//!
//! Integers use checked `i64` arithmetic; any float operand promotes the
//! operation to float. Booleans behave as the integers 0 and 1. `/` always
//! yields a float, while `//` and `%` round toward negative infinity so that
//! `a == (a // b) * b + a % b` holds for every sign combination.

use crate::interpreter::constants::INT_BITS;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::{Numeric, Value};
use crate::program::ast::{BinOp, SourceLocation};
use std::cmp::Ordering;

fn unsupported(
    op: &BinOp,
    left: &Value,
    right: &Value,
    location: SourceLocation,
) -> RuntimeError {
    RuntimeError::TypeError {
        expected: format!("operands supporting '{}'", op.symbol()),
        got: format!("'{}' and '{}'", left.type_name(), right.type_name()),
        location,
    }
}

/// Floor division and modulo on floats, remainder signed like the divisor
fn float_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 {
        if (b < 0.0) != (rem < 0.0) {
            rem += b;
            div -= 1.0;
        }
    } else {
        rem = 0.0_f64.copysign(b);
    }

    let floor_div = if div != 0.0 {
        let mut floored = div.floor();
        if div - floored > 0.5 {
            floored += 1.0;
        }
        floored
    } else {
        0.0_f64.copysign(a / b)
    };

    (floor_div, rem)
}

impl Interpreter {
    #[inline]
    pub(crate) fn checked_add_values(
        &self,
        left: &Value,
        right: &Value,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        // 1. String concatenation
        if let (Value::Str(a), Value::Str(b)) = (left, right) {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            return Ok(Value::Str(joined));
        }

        // 2. Numeric addition
        match (left.as_numeric(), right.as_numeric()) {
            (Some(Numeric::Int(a)), Some(Numeric::Int(b))) => a
                .checked_add(b)
                .ok_or(RuntimeError::IntegerOverflow {
                    operation: format!("{} + {}", a, b),
                    location,
                })
                .map(Value::Int),
            (Some(a), Some(b)) => Ok(Value::Float(a.to_f64() + b.to_f64())),
            _ => Err(unsupported(&BinOp::Add, left, right, location)),
        }
    }

    #[inline]
    pub(crate) fn checked_sub_values(
        &self,
        left: &Value,
        right: &Value,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        match (left.as_numeric(), right.as_numeric()) {
            (Some(Numeric::Int(a)), Some(Numeric::Int(b))) => a
                .checked_sub(b)
                .ok_or(RuntimeError::IntegerOverflow {
                    operation: format!("{} - {}", a, b),
                    location,
                })
                .map(Value::Int),
            (Some(a), Some(b)) => Ok(Value::Float(a.to_f64() - b.to_f64())),
            _ => Err(unsupported(&BinOp::Sub, left, right, location)),
        }
    }

    #[inline]
    pub(crate) fn checked_mul_values(
        &self,
        left: &Value,
        right: &Value,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        // String repetition in either order
        match (left, right) {
            (Value::Str(s), count) | (count, Value::Str(s)) if !count.is_float() => {
                if let Some(n) = count.as_int() {
                    let times = usize::try_from(n.max(0)).unwrap_or(0);
                    return Ok(Value::Str(s.repeat(times)));
                }
            }
            _ => {}
        }

        match (left.as_numeric(), right.as_numeric()) {
            (Some(Numeric::Int(a)), Some(Numeric::Int(b))) => a
                .checked_mul(b)
                .ok_or(RuntimeError::IntegerOverflow {
                    operation: format!("{} * {}", a, b),
                    location,
                })
                .map(Value::Int),
            (Some(a), Some(b)) => Ok(Value::Float(a.to_f64() * b.to_f64())),
            _ => Err(unsupported(&BinOp::Mul, left, right, location)),
        }
    }

    /// True division: always a float
    #[inline]
    pub(crate) fn checked_div_values(
        &self,
        left: &Value,
        right: &Value,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        match (left.as_numeric(), right.as_numeric()) {
            (Some(a), Some(b)) => {
                if b.is_zero() {
                    return Err(RuntimeError::DivisionError {
                        operation: "Division by zero".to_string(),
                        location,
                    });
                }
                Ok(Value::Float(a.to_f64() / b.to_f64()))
            }
            _ => Err(unsupported(&BinOp::Div, left, right, location)),
        }
    }

    #[inline]
    pub(crate) fn checked_floor_div_values(
        &self,
        left: &Value,
        right: &Value,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        match (left.as_numeric(), right.as_numeric()) {
            (Some(_), Some(b)) if b.is_zero() => Err(RuntimeError::DivisionError {
                operation: "Floor division by zero".to_string(),
                location,
            }),
            (Some(Numeric::Int(a)), Some(Numeric::Int(b))) => {
                let quotient = a.checked_div(b).ok_or(RuntimeError::IntegerOverflow {
                    operation: format!("{} // {}", a, b),
                    location,
                })?;
                if a % b != 0 && ((a < 0) != (b < 0)) {
                    Ok(Value::Int(quotient - 1))
                } else {
                    Ok(Value::Int(quotient))
                }
            }
            (Some(a), Some(b)) => Ok(Value::Float(float_divmod(a.to_f64(), b.to_f64()).0)),
            _ => Err(unsupported(&BinOp::FloorDiv, left, right, location)),
        }
    }

    #[inline]
    pub(crate) fn checked_mod_values(
        &self,
        left: &Value,
        right: &Value,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        match (left.as_numeric(), right.as_numeric()) {
            (Some(_), Some(b)) if b.is_zero() => Err(RuntimeError::DivisionError {
                operation: "Modulo by zero".to_string(),
                location,
            }),
            (Some(Numeric::Int(a)), Some(Numeric::Int(b))) => {
                // i64::MIN % -1 overflows in Rust but the remainder is 0
                let rem = a.checked_rem(b).unwrap_or(0);
                if rem != 0 && ((rem < 0) != (b < 0)) {
                    Ok(Value::Int(rem + b))
                } else {
                    Ok(Value::Int(rem))
                }
            }
            (Some(a), Some(b)) => Ok(Value::Float(float_divmod(a.to_f64(), b.to_f64()).1)),
            _ => Err(unsupported(&BinOp::Mod, left, right, location)),
        }
    }

    #[inline]
    pub(crate) fn checked_pow_values(
        &self,
        left: &Value,
        right: &Value,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        let (base, exponent) = match (left.as_numeric(), right.as_numeric()) {
            (Some(base), Some(exponent)) => (base, exponent),
            _ => return Err(unsupported(&BinOp::Pow, left, right, location)),
        };

        if base.is_zero() && exponent.to_f64() < 0.0 {
            return Err(RuntimeError::DivisionError {
                operation: "Zero raised to a negative power".to_string(),
                location,
            });
        }

        match (base, exponent) {
            (Numeric::Int(b), Numeric::Int(e)) if e >= 0 => u32::try_from(e)
                .ok()
                .and_then(|e| b.checked_pow(e))
                .ok_or(RuntimeError::IntegerOverflow {
                    operation: format!("{} ** {}", b, e),
                    location,
                })
                .map(Value::Int),
            (Numeric::Int(b), Numeric::Int(e)) => Ok(Value::Float((b as f64).powf(e as f64))),
            (b, e) => {
                let (b, e) = (b.to_f64(), e.to_f64());
                if b < 0.0 && e.fract() != 0.0 {
                    return Err(RuntimeError::MathDomain {
                        operation: format!("{} ** {}", Value::Float(b), Value::Float(e)),
                        location,
                    });
                }
                Ok(Value::Float(b.powf(e)))
            }
        }
    }

    fn values_equal(left: &Value, right: &Value) -> bool {
        match (left, right) {
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => match (left.as_numeric(), right.as_numeric()) {
                (Some(Numeric::Int(a)), Some(Numeric::Int(b))) => a == b,
                (Some(a), Some(b)) => a.to_f64() == b.to_f64(),
                _ => false,
            },
        }
    }

    /// Order two values; `None` when unordered (NaN involved)
    fn order_values(
        op: &BinOp,
        left: &Value,
        right: &Value,
        location: SourceLocation,
    ) -> Result<Option<Ordering>, RuntimeError> {
        match (left, right) {
            // Code point order: UTF-8 byte order agrees with it
            (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
            _ => match (left.as_numeric(), right.as_numeric()) {
                (Some(Numeric::Int(a)), Some(Numeric::Int(b))) => Ok(Some(a.cmp(&b))),
                (Some(a), Some(b)) => Ok(a.to_f64().partial_cmp(&b.to_f64())),
                _ => Err(RuntimeError::TypeError {
                    expected: format!("operands comparable with '{}'", op.symbol()),
                    got: format!("'{}' and '{}'", left.type_name(), right.type_name()),
                    location,
                }),
            },
        }
    }

    #[inline]
    pub(crate) fn compare_values(
        &self,
        op: &BinOp,
        left: &Value,
        right: &Value,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        let result = match op {
            BinOp::Eq => Self::values_equal(left, right),
            BinOp::Ne => !Self::values_equal(left, right),
            _ => {
                let ordering = Self::order_values(op, left, right, location)?;
                ordering.is_some_and(|ord| match op {
                    BinOp::Lt => ord.is_lt(),
                    BinOp::Le => ord.is_le(),
                    BinOp::Gt => ord.is_gt(),
                    BinOp::Ge => ord.is_ge(),
                    _ => false,
                })
            }
        };
        Ok(Value::Bool(result))
    }

    #[inline]
    pub(crate) fn bitwise_op(
        &self,
        left: &Value,
        right: &Value,
        op: &BinOp,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        if let (Value::Bool(a), Value::Bool(b)) = (left, right) {
            match op {
                BinOp::BitAnd => return Ok(Value::Bool(a & b)),
                BinOp::BitOr => return Ok(Value::Bool(a | b)),
                BinOp::BitXor => return Ok(Value::Bool(a ^ b)),
                _ => {}
            }
        }

        let (a, b) = match (left.as_int(), right.as_int()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(unsupported(op, left, right, location)),
        };

        let result = match op {
            BinOp::BitAnd => a & b,
            BinOp::BitOr => a | b,
            BinOp::BitXor => a ^ b,
            BinOp::BitShl => Self::shift_left(a, b, location)?,
            BinOp::BitShr => Self::shift_right(a, b, location)?,
            _ => return Err(unsupported(op, left, right, location)),
        };
        Ok(Value::Int(result))
    }

    fn shift_left(value: i64, count: i64, location: SourceLocation) -> Result<i64, RuntimeError> {
        if count < 0 {
            return Err(RuntimeError::InvalidShift { count, location });
        }
        if value == 0 {
            return Ok(0);
        }
        let overflow = || RuntimeError::IntegerOverflow {
            operation: format!("{} << {}", value, count),
            location,
        };
        if count >= INT_BITS {
            return Err(overflow());
        }
        let shifted = value << count;
        if shifted >> count != value {
            return Err(overflow());
        }
        Ok(shifted)
    }

    fn shift_right(value: i64, count: i64, location: SourceLocation) -> Result<i64, RuntimeError> {
        if count < 0 {
            return Err(RuntimeError::InvalidShift { count, location });
        }
        // Arithmetic shift floors; saturates once every bit is shifted out
        Ok(value >> count.min(INT_BITS - 1))
    }

    /// Apply a binary operator to two evaluated operands.
    ///
    /// `and`/`or` reaching this point have both operands evaluated already
    /// (compound assignment); they still return the deciding operand.
    pub(crate) fn apply_binary_op(
        &self,
        op: &BinOp,
        left: &Value,
        right: &Value,
        location: SourceLocation,
    ) -> Result<Value, RuntimeError> {
        use BinOp::*;

        match op {
            Add => self.checked_add_values(left, right, location),
            Sub => self.checked_sub_values(left, right, location),
            Mul => self.checked_mul_values(left, right, location),
            Div => self.checked_div_values(left, right, location),
            Mod => self.checked_mod_values(left, right, location),
            Pow => self.checked_pow_values(left, right, location),
            FloorDiv => self.checked_floor_div_values(left, right, location),

            Eq | Ne | Lt | Le | Gt | Ge => self.compare_values(op, left, right, location),

            And => Ok(if left.is_truthy() { right } else { left }.clone()),
            Or => Ok(if left.is_truthy() { left } else { right }.clone()),

            BitAnd | BitOr | BitXor | BitShl | BitShr => {
                self.bitwise_op(left, right, op, location)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::ast::Program;

    fn interp() -> Interpreter {
        Interpreter::new(Program::default())
    }

    fn loc() -> SourceLocation {
        SourceLocation::new(1, 1)
    }

    fn i(n: i64) -> Value {
        Value::Int(n)
    }

    fn f(x: f64) -> Value {
        Value::Float(x)
    }

    fn b(x: bool) -> Value {
        Value::Bool(x)
    }

    fn s(x: &str) -> Value {
        Value::from(x)
    }

    fn apply(op: BinOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
        interp().apply_binary_op(&op, &left, &right, loc())
    }

    #[test]
    fn test_arithmetic_on_ints() {
        assert_eq!(apply(BinOp::Add, i(10), i(3)), Ok(Value::Int(13)));
        assert_eq!(apply(BinOp::Sub, i(10), i(3)), Ok(Value::Int(7)));
        assert_eq!(apply(BinOp::Mul, i(10), i(3)), Ok(Value::Int(30)));
        assert_eq!(
            apply(BinOp::Div, i(10), i(3)),
            Ok(Value::Float(3.3333333333333335))
        );
        assert_eq!(apply(BinOp::Mod, i(10), i(3)), Ok(Value::Int(1)));
        assert_eq!(apply(BinOp::Pow, i(10), i(3)), Ok(Value::Int(1000)));
        assert_eq!(apply(BinOp::FloorDiv, i(10), i(3)), Ok(Value::Int(3)));
    }

    #[test]
    fn test_floor_division_rounds_down() {
        assert_eq!(apply(BinOp::FloorDiv, i(-7), i(2)), Ok(Value::Int(-4)));
        assert_eq!(apply(BinOp::FloorDiv, i(7), i(-2)), Ok(Value::Int(-4)));
        assert_eq!(apply(BinOp::FloorDiv, i(-7), i(-2)), Ok(Value::Int(3)));
        assert_eq!(apply(BinOp::FloorDiv, i(-6), i(2)), Ok(Value::Int(-3)));
        assert_eq!(apply(BinOp::FloorDiv, f(7.5), i(2)), Ok(Value::Float(3.0)));
        assert_eq!(apply(BinOp::FloorDiv, f(-7.5), i(2)), Ok(Value::Float(-4.0)));
    }

    #[test]
    fn test_modulo_takes_divisor_sign() {
        assert_eq!(apply(BinOp::Mod, i(-7), i(3)), Ok(Value::Int(2)));
        assert_eq!(apply(BinOp::Mod, i(7), i(-3)), Ok(Value::Int(-2)));
        assert_eq!(apply(BinOp::Mod, f(6.0), i(4)), Ok(Value::Float(2.0)));
        assert_eq!(apply(BinOp::Mod, f(-1.0), i(3)), Ok(Value::Float(2.0)));
        assert_eq!(apply(BinOp::Mod, i(i64::MIN), i(-1)), Ok(Value::Int(0)));
    }

    #[test]
    fn test_division_by_zero() {
        for op in [BinOp::Div, BinOp::FloorDiv, BinOp::Mod] {
            assert!(matches!(
                apply(op, i(1), i(0)),
                Err(RuntimeError::DivisionError { .. })
            ));
            assert!(matches!(
                apply(op, f(1.0), f(0.0)),
                Err(RuntimeError::DivisionError { .. })
            ));
        }
        assert!(matches!(
            apply(BinOp::Pow, i(0), i(-1)),
            Err(RuntimeError::DivisionError { .. })
        ));
    }

    #[test]
    fn test_power() {
        assert_eq!(apply(BinOp::Pow, i(10), i(-1)), Ok(Value::Float(0.1)));
        assert_eq!(apply(BinOp::Pow, f(2.0), i(3)), Ok(Value::Float(8.0)));
        assert!(matches!(
            apply(BinOp::Pow, i(10), i(100)),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
        assert!(matches!(
            apply(BinOp::Pow, f(-8.0), f(0.5)),
            Err(RuntimeError::MathDomain { .. })
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            apply(BinOp::Add, i(i64::MAX), i(1)),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
        assert!(matches!(
            apply(BinOp::FloorDiv, i(i64::MIN), i(-1)),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            apply(BinOp::Add, s("Hello"), s(", World!")),
            Ok(Value::from("Hello, World!"))
        );
        assert_eq!(apply(BinOp::Mul, s("ab"), i(3)), Ok(Value::from("ababab")));
        assert_eq!(apply(BinOp::Mul, i(2), s("x")), Ok(Value::from("xx")));
        assert_eq!(apply(BinOp::Mul, s("ab"), i(-1)), Ok(Value::from("")));
        assert!(matches!(
            apply(BinOp::Add, s("a"), i(1)),
            Err(RuntimeError::TypeError { .. })
        ));
        assert!(matches!(
            apply(BinOp::Mul, s("a"), f(1.5)),
            Err(RuntimeError::TypeError { .. })
        ));
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(apply(BinOp::Lt, i(5), i(8)), Ok(Value::Bool(true)));
        assert_eq!(apply(BinOp::Ge, i(5), i(8)), Ok(Value::Bool(false)));
        assert_eq!(apply(BinOp::Eq, i(1), f(1.0)), Ok(Value::Bool(true)));
        assert_eq!(apply(BinOp::Eq, b(true), i(1)), Ok(Value::Bool(true)));
        assert_eq!(apply(BinOp::Lt, s("apple"), s("banana")), Ok(Value::Bool(true)));
        assert_eq!(apply(BinOp::Lt, s("Zebra"), s("apple")), Ok(Value::Bool(true)));
        assert_eq!(apply(BinOp::Lt, s("app"), s("apple")), Ok(Value::Bool(true)));
        assert_eq!(apply(BinOp::Le, s("Alice"), s("Alice")), Ok(Value::Bool(true)));
        assert_eq!(apply(BinOp::Lt, f(f64::NAN), i(1)), Ok(Value::Bool(false)));
    }

    #[test]
    fn test_cross_type_comparisons() {
        assert_eq!(apply(BinOp::Eq, i(1), s("1")), Ok(Value::Bool(false)));
        assert_eq!(apply(BinOp::Ne, i(1), s("1")), Ok(Value::Bool(true)));
        assert!(matches!(
            apply(BinOp::Lt, i(1), s("1")),
            Err(RuntimeError::TypeError { .. })
        ));
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(apply(BinOp::BitAnd, i(12), i(5)), Ok(Value::Int(4)));
        assert_eq!(apply(BinOp::BitOr, i(12), i(5)), Ok(Value::Int(13)));
        assert_eq!(apply(BinOp::BitXor, i(12), i(5)), Ok(Value::Int(9)));
        assert_eq!(apply(BinOp::BitShl, i(12), i(2)), Ok(Value::Int(48)));
        assert_eq!(apply(BinOp::BitShr, i(12), i(2)), Ok(Value::Int(3)));
        assert_eq!(apply(BinOp::BitShr, i(-9), i(1)), Ok(Value::Int(-5)));
        assert_eq!(apply(BinOp::BitShr, i(-1), i(200)), Ok(Value::Int(-1)));
        assert_eq!(apply(BinOp::BitShr, i(5), i(200)), Ok(Value::Int(0)));
        assert_eq!(apply(BinOp::BitAnd, b(true), b(false)), Ok(Value::Bool(false)));
        assert_eq!(apply(BinOp::BitShl, b(true), i(3)), Ok(Value::Int(8)));
    }

    #[test]
    fn test_shift_errors() {
        assert!(matches!(
            apply(BinOp::BitShl, i(1), i(-1)),
            Err(RuntimeError::InvalidShift { count: -1, .. })
        ));
        assert!(matches!(
            apply(BinOp::BitShl, i(1), i(63)),
            Err(RuntimeError::IntegerOverflow { .. })
        ));
        assert_eq!(apply(BinOp::BitShl, i(0), i(500)), Ok(Value::Int(0)));
        assert!(matches!(
            apply(BinOp::BitAnd, f(1.5), i(1)),
            Err(RuntimeError::TypeError { .. })
        ));
    }
}
