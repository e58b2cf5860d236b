//! # Introduction
//!
//! optour evaluates a fixed tour of operator expressions over literal
//! operands and prints one `<label> <value>` line per expression: arithmetic,
//! comparison, assignment, logical and bitwise operators, in that order.
//!
//! ## Execution pipeline
//!
//! ```text
//! Tour → AST → Interpreter → Terminal → stdout
//! ```
//!
//! 1. [`program`] — the AST, a builder that stamps source locations, and the
//!    fixed [`program::tour::tour`].
//! 2. [`interpreter`] — walks the AST, evaluating expressions with
//!    short-circuit `and`/`or`, floor division and checked integer math.
//! 3. [`memory`] — tagged [`memory::value::Value`]s and the variable
//!    [`memory::scope::Scope`].
//! 4. [`terminal`] — captured output lines, flushed to stdout by the binary.
//!
//! ```
//! use optour::interpreter::engine::Interpreter;
//! use optour::program::tour::tour;
//!
//! let mut interpreter = Interpreter::new(tour());
//! interpreter.run().unwrap();
//! assert_eq!(interpreter.terminal().get_output()[0], "Addition: 13");
//! ```

pub mod interpreter;
pub mod memory;
pub mod program;
pub mod terminal;
