//! Error types for `CtmGlass`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `CtmGlass` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Source Tile Errors ====================
    /// One of the four fixed-name source tiles is absent.
    #[error("source tile not found: {}", path.display())]
    MissingSourceFile {
        /// The expected tile path.
        path: PathBuf,
    },

    /// A source tile exists but could not be decoded as a PNG raster.
    #[error("failed to decode source tile {}: {source}", path.display())]
    SourceDecode {
        /// The offending tile path.
        path: PathBuf,
        /// The underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    // ==================== Output Errors ====================
    /// An atlas or descriptor could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The destination that could not be written.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    // ==================== Configuration Errors ====================
    /// The variant set could not be parsed or failed validation.
    #[error("invalid variant configuration: {0}")]
    InvalidVariantConfig(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::InvalidVariantConfig(err.to_string())
    }
}

/// A specialized Result type for `CtmGlass` operations.
pub type Result<T> = std::result::Result<T, Error>;
