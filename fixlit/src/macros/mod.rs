//! Construction macros that size literals from their inputs at compile time.

pub mod literal;
