//! Operator semantics, as `impl Interpreter` blocks
//!
//! - [`binary`]: arithmetic, comparison, bitwise
//! - [`unary`]: negation, `not`, bit inversion
//! - [`assign`]: plain and compound assignment

pub mod assign;
pub mod binary;
pub mod unary;
