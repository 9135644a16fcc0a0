use crate::assets::color::ColorDef;
use crate::foundation::error::VistulaResult;
use crate::render::markup::{Element, fmt_num};
use crate::scene::document::Scene;
use crate::scene::model::{
    DecorationDef, DecorationStyleDef, GradientDef, MarkDef, OverlayDef, PaintDef, SceneDef,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Cloth height relative to pole height, as in the source ornament design.
const CLOTH_RATIO: f64 = 0.35;

const SUBTITLE_FILL: &str = "#f7e6c5";
const HEADING_FILL: &str = "#fff3d9";
const BODY_FILL: &str = "#e8d7b8";

/// Project a scene document into an SVG element tree.
///
/// The projection is deterministic and order-preserving: decoration nodes are
/// emitted once per descriptor, in document order, with attributes bound
/// straight from descriptor fields. The document is validated first; after
/// that the projection itself cannot fail.
pub fn render_scene(scene: &Scene) -> VistulaResult<Element> {
    scene.validate()?;
    Ok(render_def(scene.def()))
}

/// Convenience wrapper: validated scene straight to an SVG string.
pub fn scene_to_svg_string(scene: &Scene) -> VistulaResult<String> {
    Ok(render_scene(scene)?.to_markup())
}

pub(crate) fn render_def(def: &SceneDef) -> Element {
    let w = f64::from(def.canvas.width);
    let h = f64::from(def.canvas.height);

    let mut root = Element::new("svg")
        .attr("xmlns", SVG_NS)
        .attr(
            "viewBox",
            format!("0 0 {} {}", def.canvas.width, def.canvas.height),
        )
        .attr("width", fmt_num(w))
        .attr("height", fmt_num(h));

    root = root.child(render_defs(def));
    root = root.child(render_panorama(def, w, h));

    let mut decorations = Element::new("g").attr("class", "decorations");
    for d in &def.decorations {
        decorations = decorations.child(decoration_element(d, &def.decoration_style, w, h));
    }
    root = root.child(decorations);

    if let Some(figure) = &def.figure {
        let mut g = Element::new("g")
            .attr("class", "figure")
            .attr("transform", format!("translate(0 {})", fmt_num(figure.offset_y)))
            .attr("aria-hidden", "true");
        for p in &figure.paths {
            let mut el = Element::new("path").attr("d", p.path.0.clone());
            el = apply_paint(el, def, &p.fill);
            g = g.child(el);
        }
        for mark in &figure.marks {
            let MarkDef::Circle { cx, cy, r, fill } = mark;
            let mut el = Element::new("circle")
                .attr("cx", fmt_num(*cx))
                .attr("cy", fmt_num(*cy))
                .attr("r", fmt_num(*r));
            el = apply_paint(el, def, fill);
            g = g.child(el);
        }
        root = root.child(g);
    }

    for overlay in &def.overlays {
        root = root.child(overlay_element(overlay, w, h));
    }

    if let Some(titles) = &def.titles {
        let mid = fmt_num(w / 2.0);
        let g = Element::new("g")
            .attr("class", "titles")
            .attr("text-anchor", "middle")
            .child(
                Element::new("text")
                    .attr("class", "subtitle")
                    .attr("x", mid.clone())
                    .attr("y", fmt_num(h - 170.0))
                    .attr("fill", SUBTITLE_FILL)
                    .attr("font-size", "22")
                    .text(titles.subtitle.clone()),
            )
            .child(
                Element::new("text")
                    .attr("class", "heading")
                    .attr("x", mid.clone())
                    .attr("y", fmt_num(h - 118.0))
                    .attr("fill", HEADING_FILL)
                    .attr("font-size", "52")
                    .text(titles.heading.clone()),
            )
            .child(
                Element::new("text")
                    .attr("class", "body")
                    .attr("x", mid)
                    .attr("y", fmt_num(h - 76.0))
                    .attr("fill", BODY_FILL)
                    .attr("font-size", "18")
                    .text(titles.body.clone()),
            );
        root = root.child(g);
    }

    root
}

/// One ornament node. Every descriptor field lands in an attribute: offset in
/// the placement translate (and `data-offset` identity key), delay in the
/// animation-delay style, scale and rotation in the transform, size in the
/// pole height, layer in `data-layer`.
pub(crate) fn decoration_element(
    d: &DecorationDef,
    style: &DecorationStyleDef,
    canvas_w: f64,
    canvas_h: f64,
) -> Element {
    let x = d.offset.resolve(canvas_w);
    let pole_h = d.size * style.unit;
    let pole_w = style.unit * 0.2;
    let cloth_h = pole_h * CLOTH_RATIO;
    let cloth_w = cloth_h * 1.5;
    let band_h = cloth_h / style.bands.len() as f64;

    let mut g = Element::new("g")
        .attr("class", "flag")
        .attr("data-offset", d.offset.to_string())
        .attr("data-layer", d.layer.to_string())
        .attr("aria-hidden", "true")
        .attr("style", format!("animation-delay:{}s", fmt_num(d.delay_sec)))
        .attr(
            "transform",
            format!(
                "translate({} {}) rotate({}) scale({})",
                fmt_num(x),
                fmt_num(canvas_h),
                fmt_num(d.rotation_deg),
                fmt_num(d.scale)
            ),
        );

    g = g.child(
        Element::new("rect")
            .attr("class", "pole")
            .attr("x", fmt_num(-pole_w / 2.0))
            .attr("y", fmt_num(-pole_h))
            .attr("width", fmt_num(pole_w))
            .attr("height", fmt_num(pole_h))
            .attr("fill", style.pole.to_hex_rgb()),
    );

    for (i, band) in style.bands.iter().enumerate() {
        g = g.child(
            Element::new("rect")
                .attr("class", "band")
                .attr("x", fmt_num(pole_w / 2.0))
                .attr("y", fmt_num(-pole_h + band_h * i as f64))
                .attr("width", fmt_num(cloth_w))
                .attr("height", fmt_num(band_h))
                .attr("fill", band.to_hex_rgb()),
        );
    }

    g
}

fn render_panorama(def: &SceneDef, w: f64, h: f64) -> Element {
    let mut g = Element::new("g")
        .attr("class", "panorama")
        .attr("aria-hidden", "true");

    let mut sky = Element::new("rect")
        .attr("class", "sky")
        .attr("x", "0")
        .attr("y", "0")
        .attr("width", fmt_num(w))
        .attr("height", fmt_num(h));
    sky = apply_paint(sky, def, &def.panorama.sky);
    g = g.child(sky);

    if let Some(flare) = &def.panorama.flare {
        g = g.child(
            Element::new("circle")
                .attr("class", "flare")
                .attr("cx", fmt_num(flare.cx * w))
                .attr("cy", fmt_num(flare.cy * h))
                .attr("r", fmt_num(flare.radius))
                .attr("fill", "url(#overlay-flare)"),
        );
    }

    let mut skyline = Element::new("g").attr("class", "skyline").attr(
        "transform",
        format!("translate(0 {})", fmt_num(def.panorama.horizon)),
    );
    for band in &def.panorama.bands {
        let mut el = Element::new("path")
            .attr("d", band.path.0.clone())
            .attr("opacity", fmt_num(band.opacity));
        el = apply_paint(el, def, &band.fill);
        skyline = skyline.child(el);
    }
    g.child(skyline)
}

fn render_defs(def: &SceneDef) -> Element {
    let mut defs = Element::new("defs");

    for (name, gradient) in &def.gradients {
        defs = defs.child(gradient_element(name, gradient));
    }

    if let Some(flare) = &def.panorama.flare {
        let mut el = Element::new("radialGradient").attr("id", "overlay-flare");
        let mut transparent = flare.color;
        transparent.a = 0.0;
        el = el
            .child(stop_element(0.0, flare.color))
            .child(stop_element(1.0, transparent));
        defs = defs.child(el);
    }

    for overlay in &def.overlays {
        match overlay {
            OverlayDef::Vignette { strength } => {
                let el = Element::new("radialGradient")
                    .attr("id", "overlay-vignette")
                    .child(stop_element(0.0, ColorDef::rgba(0.0, 0.0, 0.0, 0.0)))
                    .child(stop_element(0.72, ColorDef::rgba(0.0, 0.0, 0.0, 0.0)))
                    .child(stop_element(1.0, ColorDef::rgba(0.0, 0.0, 0.0, *strength)));
                defs = defs.child(el);
            }
            OverlayDef::Grain { seed, .. } => {
                let el = Element::new("filter").attr("id", "overlay-grain").child(
                    Element::new("feTurbulence")
                        .attr("type", "fractalNoise")
                        .attr("baseFrequency", "0.9")
                        .attr("numOctaves", "2")
                        .attr("seed", seed.to_string())
                        .attr("stitchTiles", "stitch"),
                );
                defs = defs.child(el);
            }
        }
    }

    defs
}

fn overlay_element(overlay: &OverlayDef, w: f64, h: f64) -> Element {
    let base = Element::new("rect")
        .attr("x", "0")
        .attr("y", "0")
        .attr("width", fmt_num(w))
        .attr("height", fmt_num(h))
        .attr("aria-hidden", "true");
    match overlay {
        OverlayDef::Vignette { .. } => base
            .attr("class", "vignette")
            .attr("fill", "url(#overlay-vignette)"),
        OverlayDef::Grain { opacity, .. } => base
            .attr("class", "grain")
            .attr("fill", "#000000")
            .attr("filter", "url(#overlay-grain)")
            .attr("opacity", fmt_num(*opacity)),
    }
}

fn gradient_element(name: &str, gradient: &GradientDef) -> Element {
    let mut el = match gradient {
        GradientDef::Linear { x1, y1, x2, y2, .. } => Element::new("linearGradient")
            .attr("id", format!("grad-{name}"))
            .attr("x1", pct(*x1))
            .attr("y1", pct(*y1))
            .attr("x2", pct(*x2))
            .attr("y2", pct(*y2)),
        GradientDef::Radial { cx, cy, r, .. } => Element::new("radialGradient")
            .attr("id", format!("grad-{name}"))
            .attr("cx", pct(*cx))
            .attr("cy", pct(*cy))
            .attr("r", pct(*r)),
    };
    for stop in gradient.stops() {
        el = el.child(stop_element(stop.offset, stop.color));
    }
    el
}

fn stop_element(offset: f64, color: ColorDef) -> Element {
    let mut el = Element::new("stop")
        .attr("offset", pct(offset))
        .attr("stop-color", color.to_hex_rgb());
    if color.alpha() < 1.0 {
        el = el.attr("stop-opacity", fmt_num(color.alpha()));
    }
    el
}

fn apply_paint(el: Element, def: &SceneDef, paint: &PaintDef) -> Element {
    match paint {
        PaintDef::Color(c) => {
            let el = el.attr("fill", c.to_hex_rgb());
            if c.alpha() < 1.0 {
                el.attr("fill-opacity", fmt_num(c.alpha()))
            } else {
                el
            }
        }
        PaintDef::Gradient(name) => el.attr("fill", format!("url(#grad-{name})")),
    }
}

fn pct(fraction: f64) -> String {
    format!("{}%", fmt_num(fraction * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::Percent;

    fn sample_decoration() -> DecorationDef {
        DecorationDef {
            offset: Percent(9.0),
            delay_sec: 0.6,
            scale: 0.9,
            size: 11.0,
            rotation_deg: -2.0,
            layer: 7,
        }
    }

    #[test]
    fn decoration_attributes_come_straight_from_descriptor_fields() {
        let style = DecorationStyleDef::default();
        let el = decoration_element(&sample_decoration(), &style, 1200.0, 800.0);

        assert_eq!(el.attr_value("data-offset"), Some("9%"));
        assert_eq!(el.attr_value("data-layer"), Some("7"));
        assert_eq!(el.attr_value("style"), Some("animation-delay:0.6s"));
        assert_eq!(
            el.attr_value("transform"),
            Some("translate(108 800) rotate(-2) scale(0.9)")
        );
        assert_eq!(el.attr_value("aria-hidden"), Some("true"));
    }

    #[test]
    fn decoration_pole_height_binds_size() {
        let style = DecorationStyleDef::default();
        let el = decoration_element(&sample_decoration(), &style, 1200.0, 800.0);
        let pole = el
            .child_elements()
            .find(|e| e.attr_value("class") == Some("pole"))
            .unwrap();
        // 11.0 * 16.0
        assert_eq!(pole.attr_value("height"), Some("176"));
    }

    #[test]
    fn decoration_emits_one_band_per_style_color() {
        let style = DecorationStyleDef::default();
        let el = decoration_element(&sample_decoration(), &style, 1200.0, 800.0);
        let bands = el
            .child_elements()
            .filter(|e| e.attr_value("class") == Some("band"))
            .count();
        assert_eq!(bands, style.bands.len());
    }

    #[test]
    fn projection_is_deterministic() {
        let scene = crate::scene::document::Scene::dawn();
        let a = scene_to_svg_string(&scene).unwrap();
        let b = scene_to_svg_string(&scene).unwrap();
        assert_eq!(a, b);
    }
}
