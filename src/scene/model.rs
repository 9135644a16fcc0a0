use crate::assets::color::ColorDef;
use crate::foundation::core::{Canvas, Percent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SceneDef {
    pub(crate) version: String,
    pub(crate) canvas: Canvas,
    pub(crate) audio: AudioDef,
    #[serde(default)]
    pub(crate) gradients: BTreeMap<String, GradientDef>,
    pub(crate) panorama: PanoramaDef,
    #[serde(default)]
    pub(crate) decorations: Vec<DecorationDef>,
    #[serde(default)]
    pub(crate) decoration_style: DecorationStyleDef,
    #[serde(default)]
    pub(crate) figure: Option<FigureDef>,
    #[serde(default)]
    pub(crate) overlays: Vec<OverlayDef>,
    #[serde(default)]
    pub(crate) titles: Option<TitlesDef>,
}

/// Background track configuration. Playback starts muted; the host view owns
/// the element lifecycle, the document only declares intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AudioDef {
    pub(crate) source: String,
    #[serde(rename = "loop", default = "default_true")]
    pub(crate) looped: bool,
    #[serde(default = "default_true")]
    pub(crate) autoplay: bool,
    #[serde(default = "default_true")]
    pub(crate) muted: bool,
}

fn default_true() -> bool {
    true
}

/// One ornament placement. The `offset` string form is the identity key; the
/// remaining fields are trusted verbatim and substituted into markup
/// attributes without validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DecorationDef {
    pub(crate) offset: Percent,
    #[serde(default)]
    pub(crate) delay_sec: f64,
    #[serde(default = "default_scale")]
    pub(crate) scale: f64,
    pub(crate) size: f64,
    #[serde(default)]
    pub(crate) rotation_deg: f64,
    #[serde(default)]
    pub(crate) layer: i32,
}

fn default_scale() -> f64 {
    1.0
}

/// Shared flag ornament styling: pole color plus cloth band colors, top to
/// bottom. `unit` converts a descriptor's `size` into canvas user units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DecorationStyleDef {
    pub(crate) pole: ColorDef,
    pub(crate) bands: Vec<ColorDef>,
    #[serde(default = "default_unit")]
    pub(crate) unit: f64,
}

impl Default for DecorationStyleDef {
    fn default() -> Self {
        Self {
            pole: ColorDef::opaque(0.23, 0.16, 0.11),
            bands: vec![
                ColorDef::opaque(1.0, 1.0, 1.0),
                ColorDef::rgba(0.86, 0.08, 0.24, 1.0),
            ],
            unit: default_unit(),
        }
    }
}

fn default_unit() -> f64 {
    16.0
}

/// Background layers. Band path data lives in its own coordinate space and is
/// shifted down by `horizon` user units when rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PanoramaDef {
    pub(crate) sky: PaintDef,
    #[serde(default)]
    pub(crate) flare: Option<FlareDef>,
    #[serde(default)]
    pub(crate) horizon: f64,
    pub(crate) bands: Vec<SkylineBandDef>,
}

/// Soft radial light spot layered over the sky.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FlareDef {
    pub(crate) cx: f64,
    pub(crate) cy: f64,
    pub(crate) radius: f64,
    pub(crate) color: ColorDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SkylineBandDef {
    pub(crate) path: PathDef,
    pub(crate) fill: PaintDef,
    #[serde(default = "default_opacity")]
    pub(crate) opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

/// SVG path data (`d` attribute). Parsed during validation, written verbatim
/// during rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct PathDef(pub(crate) String);

impl PathDef {
    pub(crate) fn parse(&self) -> Result<kurbo::BezPath, String> {
        kurbo::BezPath::from_svg(&self.0).map_err(|e| format!("invalid path data: {e}"))
    }
}

/// Paint reference: a literal color, or a gradient from the document's
/// gradient table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PaintDef {
    Color(ColorDef),
    Gradient(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum GradientDef {
    Linear {
        #[serde(default)]
        x1: f64,
        #[serde(default)]
        y1: f64,
        #[serde(default)]
        x2: f64,
        #[serde(default = "default_one")]
        y2: f64,
        stops: Vec<GradientStopDef>,
    },
    Radial {
        #[serde(default = "default_half")]
        cx: f64,
        #[serde(default = "default_half")]
        cy: f64,
        #[serde(default = "default_half")]
        r: f64,
        stops: Vec<GradientStopDef>,
    },
}

impl GradientDef {
    pub(crate) fn stops(&self) -> &[GradientStopDef] {
        match self {
            Self::Linear { stops, .. } | Self::Radial { stops, .. } => stops,
        }
    }
}

fn default_one() -> f64 {
    1.0
}

fn default_half() -> f64 {
    0.5
}

/// One gradient stop; `offset` is a 0..1 fraction, stop opacity comes from
/// the color's alpha channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct GradientStopDef {
    pub(crate) offset: f64,
    pub(crate) color: ColorDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FigureDef {
    #[serde(default)]
    pub(crate) offset_y: f64,
    pub(crate) paths: Vec<FigurePathDef>,
    #[serde(default)]
    pub(crate) marks: Vec<MarkDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FigurePathDef {
    pub(crate) path: PathDef,
    pub(crate) fill: PaintDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum MarkDef {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: PaintDef,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum OverlayDef {
    Vignette {
        #[serde(default = "default_vignette_strength")]
        strength: f64,
    },
    Grain {
        #[serde(default)]
        seed: u64,
        #[serde(default = "default_grain_opacity")]
        opacity: f64,
    },
}

fn default_vignette_strength() -> f64 {
    0.55
}

fn default_grain_opacity() -> f64 {
    0.08
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TitlesDef {
    pub(crate) subtitle: String,
    pub(crate) heading: String,
    pub(crate) body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_scene_parses_with_defaults() {
        let def: SceneDef = serde_json::from_value(json!({
            "version": "1",
            "canvas": { "width": 1200, "height": 800 },
            "audio": { "source": "https://example.com/score.mp3" },
            "panorama": {
                "sky": { "color": "#f2d9a1" },
                "bands": []
            }
        }))
        .unwrap();

        assert!(def.audio.looped);
        assert!(def.audio.autoplay);
        assert!(def.audio.muted);
        assert!(def.decorations.is_empty());
        assert!(def.figure.is_none());
        assert_eq!(def.decoration_style.bands.len(), 2);
    }

    #[test]
    fn decoration_defaults_fill_in() {
        let d: DecorationDef = serde_json::from_value(json!({
            "offset": "16%",
            "size": 12.0
        }))
        .unwrap();

        assert_eq!(d.offset, Percent(16.0));
        assert_eq!(d.delay_sec, 0.0);
        assert_eq!(d.scale, 1.0);
        assert_eq!(d.rotation_deg, 0.0);
        assert_eq!(d.layer, 0);
    }

    #[test]
    fn paint_accepts_color_and_gradient_ref() {
        let p: PaintDef = serde_json::from_value(json!({ "color": "#47301f" })).unwrap();
        assert!(matches!(p, PaintDef::Color(_)));

        let p: PaintDef = serde_json::from_value(json!({ "gradient": "skyline" })).unwrap();
        assert!(matches!(p, PaintDef::Gradient(name) if name == "skyline"));
    }

    #[test]
    fn path_def_parses_line_data() {
        let p = PathDef("M0 0 L10 0 L10 10 Z".to_owned());
        assert!(p.parse().is_ok());

        let bad = PathDef("Mx y".to_owned());
        assert!(bad.parse().is_err());
    }
}
