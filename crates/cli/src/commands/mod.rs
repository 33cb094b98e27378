//! Command handlers. Each returns the text shown to the operator.

pub mod operations;
pub mod statement;
