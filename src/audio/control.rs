use crate::foundation::error::VistulaResult;

/// Capability over a host-owned media playback resource.
///
/// The host view framework owns the underlying element's lifecycle; the
/// controller only borrows the capability between attach and detach. A play
/// request is fire-and-forget from the controller's point of view: `Err`
/// means the host rejected the request (typically an autoplay policy), and
/// the caller decides whether that matters. `set_muted` is infallible: a
/// mute flag write on a live handle cannot be refused.
pub trait MediaControl {
    /// Ask the host to start (or resume) playback.
    fn request_play(&mut self) -> VistulaResult<()>;

    /// Reflect the logical mute flag into the handle.
    fn set_muted(&mut self, muted: bool);
}
