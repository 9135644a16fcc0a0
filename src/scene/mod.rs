//! Boundary scene document model.
//!
//! The JSON-facing, human-edited representation of an ambient scene. It is
//! validated before rendering; see [`document::Scene`].

pub(crate) mod dawn;
/// Public scene document wrapper.
pub mod document;
pub(crate) mod model;
