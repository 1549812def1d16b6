//! Error types for the icon generator

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating the icon set
#[derive(Error, Debug)]
pub enum Error {
    /// The source vector icon does not exist
    #[error("Source icon not found: {0}")]
    MissingSource(PathBuf),

    /// Failed to initialize the rasterizer
    #[error("Rasterizer initialization failed: {0}")]
    InitializationError(String),

    /// Failed to read or parse the source vector document
    #[error("Failed to load source icon: {0}")]
    LoadError(String),

    /// Failed to render a raster variant
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to package the favicon container
    #[cfg(feature = "ico")]
    #[error("Favicon packaging failed: {0}")]
    PackagingError(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
