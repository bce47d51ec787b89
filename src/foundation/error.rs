use std::path::{Path, PathBuf};

/// Convenience result type used across the crate.
pub type ImageResult<T> = Result<T, ImageError>;

/// Top-level error taxonomy.
///
/// Only [`ImageError::Decoder`] is eligible for decoder-chain fallback. Every other kind
/// reaches the caller unchanged.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// The decoder does not recognize or cannot interpret the given input.
    #[error("decoder error: {0}")]
    Decoder(String),

    /// A file could not be probed or read.
    #[error("io error: {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Input was recognized as a format but its payload is structurally broken.
    #[error("malformed input: {0}")]
    Malformed(String),

    /// Invalid caller-provided arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImageError {
    /// Build an [`ImageError::Decoder`] value.
    pub fn decoder(msg: impl Into<String>) -> Self {
        Self::Decoder(msg.into())
    }

    /// Build an [`ImageError::Malformed`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Build an [`ImageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ImageError::Io`] value for `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this error allows the decoder chain to try the next decoder.
    pub fn is_decoder(&self) -> bool {
        matches!(self, Self::Decoder(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
