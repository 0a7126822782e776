/// Convenience result type used across Pincraft.
pub type PinResult<T> = Result<T, PinError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PinError {
    /// Invalid user-provided request or template data.
    #[error("validation error: {0}")]
    Validation(String),

    /// No template exists for the requested item count.
    #[error("no template for {0} items (supported: 4..=8)")]
    UnsupportedItemCount(usize),

    /// A required external resource (font, background) could not be loaded.
    #[error("resource load error: {0}")]
    ResourceLoad(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PinError {
    /// Build a [`PinError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PinError::ResourceLoad`] value.
    pub fn resource_load(msg: impl Into<String>) -> Self {
        Self::ResourceLoad(msg.into())
    }

    /// Build a [`PinError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
