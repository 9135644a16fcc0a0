//! Scene asset value types (paints and colors).

pub(crate) mod color;
