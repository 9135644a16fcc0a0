use crate::audio::control::MediaControl;
use crate::audio::toggle::AudioToggle;
use crate::foundation::error::VistulaResult;
use crate::render::markup::Element;
use crate::render::svg::render_def;
use crate::scene::document::Scene;

/// A mounted scene: the validated document plus the audio toggle controller.
///
/// Mounting validates the document once; rendering afterwards is an
/// infallible projection. The scene graph itself is stateless; the only
/// state a view carries is the controller's logical mute flag, and a
/// re-render after [`SceneView::toggle_audio`] reflects it synchronously in
/// both the audio element's mute attribute and the button label.
pub struct SceneView {
    scene: Scene,
    audio: AudioToggle,
}

impl SceneView {
    /// Validate and mount a scene document. The initial mute state comes from
    /// the document's audio configuration (muted by default).
    pub fn mount(scene: Scene) -> VistulaResult<Self> {
        scene.validate()?;
        let audio = AudioToggle::with_muted(scene.def().audio.muted);
        Ok(Self { scene, audio })
    }

    /// Attach the host's media capability (e.g. once the audio element
    /// exists).
    pub fn attach_audio(&mut self, handle: Box<dyn MediaControl>) {
        self.audio.attach(handle);
    }

    /// Detach the media capability without tearing the view down.
    pub fn detach_audio(&mut self) -> Option<Box<dyn MediaControl>> {
        self.audio.detach()
    }

    /// The single user-facing action: flip the mute state.
    pub fn toggle_audio(&mut self) {
        self.audio.toggle();
    }

    /// Current logical mute state.
    pub fn muted(&self) -> bool {
        self.audio.muted()
    }

    /// Current toggle button label.
    pub fn audio_label(&self) -> &'static str {
        self.audio.label()
    }

    /// The mounted document.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Render the HTML shell: the audio element, the inline SVG scene and the
    /// toggle button.
    pub fn render(&self) -> Element {
        let def = self.scene.def();

        let mut audio = Element::new("audio")
            .attr("src", def.audio.source.clone())
            .attr("class", "hidden");
        if def.audio.autoplay {
            audio = audio.attr("autoplay", "");
        }
        if def.audio.looped {
            audio = audio.attr("loop", "");
        }
        if self.audio.muted() {
            audio = audio.attr("muted", "");
        }
        // Force an explicit closing tag; a void-style <audio/> confuses HTML
        // parsers.
        audio = audio.text("");

        Element::new("div")
            .attr("class", "scene")
            .child(audio)
            .child(render_def(def))
            .child(
                Element::new("button")
                    .attr("class", "scene__audio-toggle")
                    .attr("type", "button")
                    .text(self.audio.label()),
            )
    }

    /// Render the HTML shell to a string.
    pub fn render_html(&self) -> String {
        self.render().to_markup()
    }

    /// Unmount the view, handing any attached capability back to the host.
    pub fn unmount(mut self) -> Option<Box<dyn MediaControl>> {
        self.audio.detach()
    }
}
