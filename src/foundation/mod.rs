//! Crate-wide foundation: core value types and the error type.

pub(crate) mod core;
pub(crate) mod error;
