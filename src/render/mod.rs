//! Scene rendering.
//!
//! [`svg`] projects a validated scene document into an SVG markup tree;
//! [`markup`] is the tree itself plus its escaping writer; [`raster`] turns
//! the SVG into RGBA pixels (and PNG files) via `usvg`/`resvg`.

/// Markup element tree and writer.
pub mod markup;
/// PNG/RGBA rasterization of rendered scenes.
pub mod raster;
/// Scene-to-SVG projection.
pub mod svg;
