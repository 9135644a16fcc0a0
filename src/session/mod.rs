//! Session-oriented view API.
//!
//! A [`view::SceneView`] pairs a validated scene document with the audio
//! toggle controller and produces the HTML shell the host embeds.

/// Mounted scene view.
pub mod view;
