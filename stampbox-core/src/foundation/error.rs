/// Convenience result type used across stampbox.
pub type StampResult<T> = Result<T, StampError>;

/// Top-level error taxonomy used by pipeline and driver APIs.
#[derive(thiserror::Error, Debug)]
pub enum StampError {
    /// Invalid caller-provided data: empty rasters, bad options, missing input roots.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A placement rectangle that would have a non-positive or out-of-canvas extent.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// The codec could not turn a file into a raster.
    #[error("decode error: {0}")]
    Decode(String),

    /// The codec could not write a raster to a file.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors while rasterizing the watermark text.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StampError {
    /// Build a [`StampError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`StampError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`StampError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`StampError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`StampError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Return `true` for errors raised at the codec boundary.
    pub fn is_codec(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Encode(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
