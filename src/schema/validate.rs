use crate::scene::model::{MarkDef, PaintDef, SceneDef};

/// Validate boundary invariants of a scene document.
///
/// Decoration descriptor values are trusted verbatim (they are build-time
/// configuration, not user input); only their identity invariant is checked:
/// the offset string form must be distinct per element.
pub(crate) fn validate_scene(def: &SceneDef) -> Result<(), String> {
    if def.version != "1" {
        return Err(format!("unsupported scene version \"{}\"", def.version));
    }
    if def.canvas.width == 0 || def.canvas.height == 0 {
        return Err("canvas dimensions must be > 0".to_owned());
    }
    if def.audio.source.trim().is_empty() {
        return Err("audio source must not be empty".to_owned());
    }

    for (name, gradient) in &def.gradients {
        if gradient.stops().is_empty() {
            return Err(format!("gradient \"{name}\" must have at least one stop"));
        }
        for stop in gradient.stops() {
            if !(0.0..=1.0).contains(&stop.offset) {
                return Err(format!(
                    "gradient \"{name}\" stop offset {} out of range 0..=1",
                    stop.offset
                ));
            }
        }
    }

    check_paint(def, &def.panorama.sky, "panorama.sky")?;
    for (i, band) in def.panorama.bands.iter().enumerate() {
        band.path
            .parse()
            .map_err(|e| format!("panorama.bands[{i}]: {e}"))?;
        check_paint(def, &band.fill, &format!("panorama.bands[{i}].fill"))?;
    }

    if let Some(figure) = &def.figure {
        for (i, p) in figure.paths.iter().enumerate() {
            p.path
                .parse()
                .map_err(|e| format!("figure.paths[{i}]: {e}"))?;
            check_paint(def, &p.fill, &format!("figure.paths[{i}].fill"))?;
        }
        for (i, mark) in figure.marks.iter().enumerate() {
            let MarkDef::Circle { fill, .. } = mark;
            check_paint(def, fill, &format!("figure.marks[{i}].fill"))?;
        }
    }

    if def.decoration_style.bands.is_empty() {
        return Err("decoration_style.bands must not be empty".to_owned());
    }

    let mut seen = std::collections::BTreeSet::new();
    for d in &def.decorations {
        if !seen.insert(d.offset.to_string()) {
            return Err(format!("duplicate decoration offset \"{}\"", d.offset));
        }
    }

    Ok(())
}

fn check_paint(def: &SceneDef, paint: &PaintDef, at: &str) -> Result<(), String> {
    match paint {
        PaintDef::Color(_) => Ok(()),
        PaintDef::Gradient(name) => {
            if def.gradients.contains_key(name) {
                Ok(())
            } else {
                Err(format!("{at}: unknown gradient \"{name}\""))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::dawn;
    use crate::scene::model::DecorationDef;
    use crate::foundation::core::Percent;

    #[test]
    fn duplicate_offsets_are_rejected() {
        let mut def = dawn::scene_def();
        let first = def.decorations[0].clone();
        def.decorations.push(DecorationDef {
            offset: first.offset,
            ..first
        });
        let err = validate_scene(&def).unwrap_err();
        assert!(err.contains("duplicate decoration offset"));
    }

    #[test]
    fn unknown_gradient_reference_is_rejected() {
        let mut def = dawn::scene_def();
        def.panorama.sky = crate::scene::model::PaintDef::Gradient("nope".to_owned());
        let err = validate_scene(&def).unwrap_err();
        assert!(err.contains("unknown gradient"));
    }

    #[test]
    fn broken_path_data_is_rejected() {
        let mut def = dawn::scene_def();
        def.panorama.bands[0].path = crate::scene::model::PathDef("M broken".to_owned());
        assert!(validate_scene(&def).is_err());
    }

    #[test]
    fn empty_audio_source_is_rejected() {
        let mut def = dawn::scene_def();
        def.audio.source = "  ".to_owned();
        let err = validate_scene(&def).unwrap_err();
        assert!(err.contains("audio source"));
    }

    #[test]
    fn equal_numeric_offsets_share_identity() {
        // "2%" written as 2.0 and "2%" are the same identity key.
        let p1 = Percent(2.0);
        let p2: Percent = serde_json::from_str("\"2%\"").unwrap();
        assert_eq!(p1.to_string(), p2.to_string());
    }
}
