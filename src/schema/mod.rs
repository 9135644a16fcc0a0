//! Boundary schema validation.
//!
//! Validates invariants on the boundary JSON model before rendering.

pub(crate) mod validate;
