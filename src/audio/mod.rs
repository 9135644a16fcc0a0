//! Background audio: the media-control capability seam and the toggle
//! controller that owns the logical mute state.

/// Host media-control capability.
pub mod control;
/// Mute/unmute toggle state machine.
pub mod toggle;
