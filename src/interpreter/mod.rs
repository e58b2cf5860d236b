//! Operator interpreter
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`engine::Interpreter`] and statement dispatch
//! - [`errors`]: runtime error types
//! - [`ops`]: binary, unary and assignment operator semantics
//!
//! # Execution Model
//!
//! The interpreter walks each section's statements in order against a single
//! shared scope. Print statements render their arguments and append one line
//! to the captured [`crate::terminal::Terminal`].

pub mod constants;
pub mod engine;
pub mod errors;
mod expressions;
mod loops;
pub mod ops;
