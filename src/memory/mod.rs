//! Runtime memory model
//!
//! - [`value`]: runtime value representation (Int, Float, Bool, Str)
//! - [`scope`]: the namespace holding variable bindings

pub mod scope;
pub mod value;
