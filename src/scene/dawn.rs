//! The built-in dawn scene: a sunrise skyline over Warsaw, a row of
//! white-and-red flags, a mounted commander in silhouette, lens vignette and
//! film grain, and a looping orchestral score.

use crate::assets::color::ColorDef;
use crate::foundation::core::{Canvas, Percent};
use crate::scene::model::{
    AudioDef, DecorationDef, DecorationStyleDef, FigureDef, FigurePathDef, FlareDef, GradientDef,
    GradientStopDef, MarkDef, OverlayDef, PaintDef, PanoramaDef, PathDef, SceneDef,
    SkylineBandDef, TitlesDef,
};
use std::collections::BTreeMap;

const AUDIO_SOURCE: &str = "https://cdn.pixabay.com/download/audio/2022/03/15/audio_1c3fb932ed.mp3?filename=epic-inspiring-orchestra-113441.mp3";

/// Flag row placement: offset %, start delay s, scale, size, tilt deg, layer.
const FLAGS: [(f64, f64, f64, f64, f64, i32); 12] = [
    (2.0, 0.0, 0.85, 10.0, -4.0, 6),
    (9.0, 0.6, 0.9, 11.0, -2.0, 7),
    (16.0, 1.2, 1.0, 12.0, 0.0, 8),
    (23.0, 1.8, 1.05, 13.0, 2.0, 9),
    (30.0, 2.4, 1.1, 14.0, -1.0, 10),
    (37.0, 1.0, 0.95, 11.5, -3.0, 8),
    (44.0, 0.4, 0.88, 11.0, 1.0, 7),
    (51.0, 2.1, 1.08, 13.5, -2.0, 10),
    (58.0, 1.5, 1.02, 12.5, 1.0, 9),
    (65.0, 0.8, 0.94, 11.0, -1.0, 8),
    (72.0, 1.9, 0.9, 10.5, 3.0, 7),
    (79.0, 0.3, 0.88, 10.0, -2.0, 6),
];

const SKYLINE_FAR: &str = "M0 300 L40 290 L60 230 L90 235 L110 200 L180 210 L210 110 L240 115 \
L260 210 L310 200 L350 125 L380 130 L400 90 L430 95 L460 150 L490 145 L520 180 L560 178 \
L620 120 L640 125 L660 210 L690 215 L720 180 L760 188 L780 230 L820 200 L840 210 L850 160 \
L880 162 L910 140 L940 150 L970 120 L990 130 L1010 200 L1060 210 L1120 190 L1160 200 \
L1200 190 L1200 400 L0 400 Z";

const SKYLINE_NEAR: &str = "M0 320 L60 310 L120 320 L160 300 L210 310 L260 290 L320 300 \
L360 280 L420 300 L480 275 L540 290 L600 270 L660 290 L720 265 L780 285 L840 270 L900 280 \
L960 260 L1020 280 L1080 265 L1140 275 L1200 260 L1200 400 L0 400 Z";

const RIDER_PATHS: [(&str, &str); 8] = [
    (
        "M220 470 C300 360, 470 340, 600 410 C640 430, 670 470, 710 510 C730 530, 750 560, 700 580 \
         C650 600, 540 610, 480 600 C410 590, 360 560, 300 520 C260 495, 230 490, 220 470 Z",
        "rider",
    ),
    (
        "M480 360 C520 310, 580 300, 650 320 C720 340, 780 380, 810 420 C840 460, 800 520, 780 540 \
         C760 560, 720 520, 700 500 C680 480, 660 450, 640 430 C600 390, 540 380, 500 390 \
         C470 400, 460 380, 480 360 Z",
        "rider",
    ),
    (
        "M640 320 C670 270, 720 250, 770 250 C830 250, 900 290, 930 340 C960 390, 920 420, 880 430 \
         C840 440, 790 420, 770 400 C750 380, 730 350, 700 330 C680 320, 650 335, 640 320 Z",
        "mane",
    ),
    (
        "M370 420 C360 380, 360 330, 370 300 C380 270, 420 250, 460 250 C500 250, 520 270, 530 300 \
         C540 330, 540 380, 530 410 C520 440, 480 460, 440 460 C400 460, 380 440, 370 420 Z",
        "rider",
    ),
    (
        "M450 260 C445 220, 470 200, 500 190 C530 180, 580 190, 590 210 C600 230, 580 250, 565 260 \
         C550 270, 520 280, 500 280 C480 280, 455 290, 450 260 Z",
        "cap",
    ),
    (
        "M370 540 C340 500, 310 470, 280 460 C260 455, 240 470, 240 500 C240 530, 260 570, 280 580 \
         C300 590, 330 570, 350 560 C370 550, 380 565, 390 580 C400 595, 420 610, 430 600 \
         C440 590, 420 560, 410 540 C400 520, 390 520, 370 540 Z",
        "rider",
    ),
    (
        "M620 540 C640 500, 660 470, 690 450 C720 430, 760 410, 780 430 C800 450, 780 490, 760 520 \
         C740 550, 720 590, 690 610 C660 630, 630 620, 610 600 C590 580, 600 560, 620 540 Z",
        "rider",
    ),
    (
        "M520 420 C550 400, 600 410, 640 430 C680 450, 710 480, 720 510 C730 540, 710 560, 680 560 \
         C650 560, 600 540, 570 520 C540 500, 500 450, 520 420 Z",
        "rider",
    ),
];

fn stop(offset: f64, rgb: [u8; 3], alpha: f64) -> GradientStopDef {
    let mut color = ColorDef::from_rgb8(rgb[0], rgb[1], rgb[2]);
    color.a = alpha;
    GradientStopDef { offset, color }
}

pub(crate) fn scene_def() -> SceneDef {
    let mut gradients = BTreeMap::new();
    gradients.insert(
        "sky".to_owned(),
        GradientDef::Linear {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 1.0,
            stops: vec![
                stop(0.0, [0xfd, 0xf0, 0xc8], 1.0),
                stop(0.45, [0xe8, 0xb6, 0x6f], 1.0),
                stop(1.0, [0x8a, 0x4b, 0x24], 1.0),
            ],
        },
    );
    gradients.insert(
        "skyline".to_owned(),
        GradientDef::Linear {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 1.0,
            stops: vec![
                stop(0.0, [0xf2, 0xd9, 0xa1], 0.8),
                stop(0.4, [0xcb, 0x9a, 0x60], 0.9),
                stop(1.0, [0x7f, 0x4e, 0x26], 1.0),
            ],
        },
    );
    gradients.insert(
        "rider".to_owned(),
        GradientDef::Linear {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
            stops: vec![
                stop(0.0, [0x1c, 0x0f, 0x0b], 1.0),
                stop(0.35, [0x1f, 0x14, 0x10], 1.0),
                stop(0.75, [0x2f, 0x1d, 0x17], 1.0),
                stop(1.0, [0x42, 0x28, 0x20], 1.0),
            ],
        },
    );
    gradients.insert(
        "mane".to_owned(),
        GradientDef::Linear {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 0.0,
            stops: vec![stop(0.0, [0x3b, 0x25, 0x1c], 1.0), stop(1.0, [0x1f, 0x11, 0x0c], 1.0)],
        },
    );

    let bands = vec![
        SkylineBandDef {
            path: PathDef(SKYLINE_FAR.to_owned()),
            fill: PaintDef::Gradient("skyline".to_owned()),
            opacity: 0.9,
        },
        SkylineBandDef {
            path: PathDef(SKYLINE_NEAR.to_owned()),
            fill: PaintDef::Color(ColorDef::from_rgb8(0x47, 0x30, 0x1f)),
            opacity: 0.9,
        },
    ];

    let decorations = FLAGS
        .iter()
        .map(
            |&(offset, delay_sec, scale, size, rotation_deg, layer)| DecorationDef {
                offset: Percent(offset),
                delay_sec,
                scale,
                size,
                rotation_deg,
                layer,
            },
        )
        .collect();

    let figure = FigureDef {
        offset_y: 100.0,
        paths: RIDER_PATHS
            .iter()
            .map(|&(d, fill)| FigurePathDef {
                path: PathDef(d.to_owned()),
                fill: match fill {
                    "rider" => PaintDef::Gradient("rider".to_owned()),
                    "mane" => PaintDef::Gradient("mane".to_owned()),
                    _ => PaintDef::Color(ColorDef::from_rgb8(0x22, 0x14, 0x0f)),
                },
            })
            .collect(),
        marks: vec![MarkDef::Circle {
            cx: 490.0,
            cy: 215.0,
            r: 22.0,
            fill: PaintDef::Color(ColorDef::from_rgb8(0x05, 0x03, 0x02)),
        }],
    };

    SceneDef {
        version: "1".to_owned(),
        canvas: Canvas {
            width: 1200,
            height: 800,
        },
        audio: AudioDef {
            source: AUDIO_SOURCE.to_owned(),
            looped: true,
            autoplay: true,
            muted: true,
        },
        gradients,
        panorama: PanoramaDef {
            sky: PaintDef::Gradient("sky".to_owned()),
            flare: Some(FlareDef {
                cx: 0.5,
                cy: 0.42,
                radius: 420.0,
                color: ColorDef::rgba(1.0, 0.91, 0.75, 0.55),
            }),
            horizon: 400.0,
            bands,
        },
        decorations,
        decoration_style: DecorationStyleDef::default(),
        figure: Some(figure),
        overlays: vec![
            OverlayDef::Vignette { strength: 0.55 },
            OverlayDef::Grain {
                seed: 7,
                opacity: 0.08,
            },
        ],
        titles: Some(TitlesDef {
            subtitle: "Warsaw, 11 listopada 1918".to_owned(),
            heading: "Świt Odrodzenia".to_owned(),
            body: "A proud Polish commander rides through streets reborn, the dawn ablaze \
                   with golden hope as the nation breathes freedom once more."
                .to_owned(),
        }),
    }
}
