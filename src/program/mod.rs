//! Program representation
//!
//! - [`ast`]: expression and statement nodes, [`ast::Program`] and its sections
//! - [`builder`]: builds programs and assigns source locations
//! - [`tour`]: the fixed operator tour run by the binary

pub mod ast;
pub mod builder;
pub mod tour;
