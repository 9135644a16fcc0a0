use crate::audio::control::MediaControl;

/// Toggle button label while the track is muted.
pub const LABEL_UNMUTE: &str = "Unmute the orchestral score";
/// Toggle button label while the track is audible.
pub const LABEL_MUTE: &str = "Mute the orchestral score";

/// Mute/unmute toggle controller.
///
/// Owns the logical `muted` flag (initially `true`) and mediates between user
/// intent and a host-supplied [`MediaControl`] capability. The flag is
/// *logical* intent: after an unmute whose play request was rejected, the
/// track may stay inaudible while `muted()` reports `false`. The label tracks
/// intent, and pressing the button again retries playback. Calls are expected
/// from a single interaction thread; no internal synchronization.
pub struct AudioToggle {
    muted: bool,
    handle: Option<Box<dyn MediaControl>>,
}

impl AudioToggle {
    /// New controller in the initial muted state, with no handle attached.
    pub fn new() -> Self {
        Self {
            muted: true,
            handle: None,
        }
    }

    /// New controller with an explicit initial mute state.
    pub fn with_muted(muted: bool) -> Self {
        Self {
            muted,
            handle: None,
        }
    }

    /// Attach the host capability (view mounted). The handle's mute flag is
    /// synced to the current logical state.
    pub fn attach(&mut self, mut handle: Box<dyn MediaControl>) {
        handle.set_muted(self.muted);
        self.handle = Some(handle);
    }

    /// Detach the host capability (view unmounted). The logical flag is kept;
    /// subsequent `toggle` calls are inert until a new handle is attached.
    pub fn detach(&mut self) -> Option<Box<dyn MediaControl>> {
        self.handle.take()
    }

    /// Whether a capability is currently attached.
    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Current logical mute state.
    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Label for the single user-facing control, tracking logical state only.
    pub fn label(&self) -> &'static str {
        if self.muted { LABEL_UNMUTE } else { LABEL_MUTE }
    }

    /// Flip the mute state.
    ///
    /// Without an attached handle this is a no-op. When unmuting, exactly one
    /// play request is issued first; a rejection is swallowed (logged, never
    /// surfaced) and the state flips regardless, so the label updates
    /// synchronously and independently of the play outcome. When muting, no
    /// play or pause request is issued; the loop keeps running silently.
    pub fn toggle(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };

        if self.muted {
            if let Err(err) = handle.request_play() {
                // Autoplay policies reject play requests that lack a trusted
                // user gesture; the user can retry with the same button.
                tracing::debug!(error = %err, "play request rejected");
            }
        }

        self.muted = !self.muted;
        handle.set_muted(self.muted);
    }
}

impl Default for AudioToggle {
    fn default() -> Self {
        Self::new()
    }
}
