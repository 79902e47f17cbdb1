/// Convenience result type used across the crate.
pub type LogoResult<T> = Result<T, LogoError>;

/// Top-level error taxonomy.
///
/// Every variant except [`LogoError::Raster`] and [`LogoError::Other`] is a configuration-time
/// error: it is raised while building a [`crate::Composition`] (or one of its parts), never while
/// producing a scene for a frame.
#[derive(thiserror::Error, Debug)]
pub enum LogoError {
    /// Invalid user-provided configuration (video config, colors, ranges, geometry).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid spring or interpolation setup.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors reported by a rasterizer backend.
    #[error("raster error: {0}")]
    Raster(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LogoError {
    /// Build a [`LogoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LogoError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`LogoError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`LogoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LogoError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
