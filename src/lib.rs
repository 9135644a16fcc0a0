//! Vistula renders declarative ambient scenes.
//!
//! A scene is a JSON-facing document: a canvas, a looping background audio
//! track, a parallax panorama (sky paint plus skyline bands), an ordered row
//! of decoration ornaments, an optional foreground figure, overlay effects
//! (vignette, grain) and title copy. The public API is document-oriented:
//!
//! - Load and validate a [`Scene`] (or start from the built-in dawn scene)
//! - Project it into SVG markup with [`render_scene`]
//! - Mount a [`SceneView`] to drive the audio toggle and the HTML shell
//!
//! Rendering is a pure projection: the same scene document always produces
//! byte-equal markup, with decoration nodes emitted once per descriptor in
//! document order.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

/// Audio toggle controller and the media-control capability seam.
pub mod audio;
/// Scene rendering: markup tree, SVG projection, PNG rasterization.
pub mod render;
/// Boundary scene document model.
pub mod scene;
pub(crate) mod schema;
/// Session-oriented view API (scene + audio toggle).
pub mod session;

pub use crate::foundation::core::{BezPath, Canvas, Percent};
pub use crate::foundation::error::{VistulaError, VistulaResult};

pub use crate::audio::control::MediaControl;
pub use crate::audio::toggle::{AudioToggle, LABEL_MUTE, LABEL_UNMUTE};
pub use crate::render::markup::{Element, Node};
pub use crate::render::raster::FrameRgba;
pub use crate::render::svg::render_scene;
pub use crate::scene::document::Scene;
pub use crate::session::view::SceneView;
