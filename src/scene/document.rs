use crate::foundation::error::{VistulaError, VistulaResult};
use crate::scene::model::SceneDef;
use crate::schema::validate::validate_scene;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Scene document boundary object.
///
/// This is the JSON-facing, human-edited representation of an ambient scene.
/// It is validated before being projected into markup by
/// [`crate::render::svg::render_scene`] or mounted into a
/// [`crate::session::view::SceneView`].
#[derive(Debug, Clone)]
pub struct Scene {
    def: SceneDef,
}

impl Scene {
    /// Parse a scene document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> VistulaResult<Self> {
        let def: SceneDef = serde_json::from_reader(r)
            .map_err(|e| VistulaError::validation(format!("parse scene JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a scene document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> VistulaResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            VistulaError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        let r = BufReader::new(f);
        Self::from_reader(r)
    }

    /// The built-in dawn scene (Warsaw, 11 November 1918).
    pub fn dawn() -> Self {
        Self {
            def: crate::scene::dawn::scene_def(),
        }
    }

    /// Validate the document against the scene schema.
    pub fn validate(&self) -> VistulaResult<()> {
        validate_scene(&self.def)
            .map_err(|e| VistulaError::validation(format!("scene validation failed: {e}")))
    }

    /// Number of decoration descriptors in the document.
    pub fn decoration_count(&self) -> usize {
        self.def.decorations.len()
    }

    /// Locator of the background audio track.
    pub fn audio_source(&self) -> &str {
        &self.def.audio.source
    }

    /// Serialize the document back to pretty JSON.
    pub fn to_json_string(&self) -> VistulaResult<String> {
        serde_json::to_string_pretty(&self.def)
            .map_err(|e| VistulaError::serde(format!("serialize scene JSON: {e}")))
    }

    pub(crate) fn def(&self) -> &SceneDef {
        &self.def
    }
}
