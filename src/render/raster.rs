use crate::foundation::error::{VistulaError, VistulaResult};
use crate::scene::document::Scene;
use std::path::Path;

/// Rasterized frame: premultiplied RGBA8 pixels, row-major, tightly packed.
#[derive(Debug, Clone)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

// Avoid pathological allocations; larger outputs need an explicit tiling
// strategy rather than one pixmap.
const MAX_DIM: u32 = 16_384;

/// Rasterize an SVG string at a uniform scale factor.
pub fn rasterize_svg(svg: &str, scale: f64) -> VistulaResult<FrameRgba> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(VistulaError::validation("raster scale must be > 0"));
    }

    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let opt = usvg::Options {
        fontdb: std::sync::Arc::new(db),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| VistulaError::render(format!("parse svg: {e}")))?;

    let size = tree.size();
    if !size.width().is_finite() || size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(VistulaError::render("svg has invalid width/height"));
    }

    let w = ((f64::from(size.width())) * scale).ceil().max(1.0) as u32;
    let h = ((f64::from(size.height())) * scale).ceil().max(1.0) as u32;
    if w > MAX_DIM || h > MAX_DIM {
        return Err(VistulaError::render(format!(
            "raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| VistulaError::render("failed to allocate pixmap"))?;

    let sx = (w as f32) / size.width();
    let sy = (h as f32) / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    Ok(FrameRgba {
        width: w,
        height: h,
        data: pixmap.data().to_vec(),
    })
}

/// Validate, project and rasterize a scene document in one step.
pub fn rasterize_scene(scene: &Scene, scale: f64) -> VistulaResult<FrameRgba> {
    let svg = crate::render::svg::scene_to_svg_string(scene)?;
    rasterize_svg(&svg, scale)
}

/// Encode a frame as a PNG file (straight alpha).
pub fn write_png(frame: &FrameRgba, path: impl AsRef<Path>) -> VistulaResult<()> {
    let path = path.as_ref();
    let mut data = frame.data.clone();
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a > 0 && a < 255 {
            for c in &mut px[0..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
    }

    let img = image::RgbaImage::from_raw(frame.width, frame.height, data)
        .ok_or_else(|| VistulaError::render("frame byte length mismatch"))?;
    img.save(path)
        .map_err(|e| VistulaError::render(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterizes_a_small_document() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 8 8" width="8" height="8"><rect x="0" y="0" width="8" height="8" fill="#ff0000"/></svg>"##;
        let frame = rasterize_svg(svg, 1.0).unwrap();
        assert_eq!((frame.width, frame.height), (8, 8));
        assert_eq!(frame.data.len(), 8 * 8 * 4);
        // Opaque red everywhere.
        assert_eq!(&frame.data[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn scale_factor_grows_the_pixmap() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10" width="10" height="10"><circle cx="5" cy="5" r="4" fill="#00ff00"/></svg>"##;
        let frame = rasterize_svg(svg, 2.0).unwrap();
        assert_eq!((frame.width, frame.height), (20, 20));
    }

    #[test]
    fn rejects_non_positive_scale() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"/>"##;
        assert!(rasterize_svg(svg, 0.0).is_err());
        assert!(rasterize_svg(svg, f64::NAN).is_err());
    }

    #[test]
    fn rejects_oversized_rasters() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20000" height="4"/>"##;
        let err = rasterize_svg(svg, 1.0).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
