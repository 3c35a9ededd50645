use std::path::PathBuf;

/// Convenience result type used across iconsmith.
pub type IconResult<T> = Result<T, IconError>;

/// Top-level error taxonomy used by raster, encoder and pipeline APIs.
///
/// Compositing and rasterization never produce errors; out-of-range pixels and degenerate shapes
/// simply receive zero coverage.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// A canvas was requested with a size that cannot be allocated (zero or overflowing).
    #[error("invalid size: {0}")]
    InvalidSize(String),

    /// The compressed-raster encoder failed (compressor error or out of memory).
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Reading or writing a single file failed.
    #[error("io error at '{}': {source}", .path.display())]
    Io {
        /// File the operation was acting on.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration or container input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    /// Build an [`IconError::InvalidSize`] value.
    pub fn invalid_size(msg: impl Into<String>) -> Self {
        Self::InvalidSize(msg.into())
    }

    /// Build an [`IconError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build an [`IconError::Io`] value for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build an [`IconError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`IconError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
