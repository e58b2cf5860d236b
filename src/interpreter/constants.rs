// Constants for the operator interpreter

/// Floats whose decimal exponent is below this render in scientific notation
pub const REPR_EXP_MIN: i32 = -4;

/// Floats whose decimal exponent is at least this render in scientific notation
pub const REPR_EXP_MAX: i32 = 16;

/// Width of the integer type in bits; shifts at or past it saturate
pub const INT_BITS: i64 = 64;
