/// Crate-wide result alias.
pub type VistulaResult<T> = Result<T, VistulaError>;

/// Crate-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum VistulaError {
    /// A scene document violated a boundary invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// A render step failed (rasterization, markup assembly).
    #[error("render error: {0}")]
    Render(String),

    /// An audio playback request was rejected by the host.
    #[error("audio error: {0}")]
    Audio(String),

    /// A serialization boundary failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, preserved with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VistulaError {
    /// Build a [`VistulaError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VistulaError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`VistulaError::Audio`].
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Build a [`VistulaError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
