//! Error types for the diagram paginator

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using PaginatorError
pub type Result<T> = std::result::Result<T, PaginatorError>;

/// Errors that can occur while paginating an image
#[derive(Debug, Error)]
pub enum PaginatorError {
    /// Source image is missing or cannot be decoded
    #[error("Failed to read image {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output file cannot be written
    #[error("Failed to write PDF {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    PdfError(#[from] lopdf::Error),

    /// Invalid page or image dimensions
    #[error("Invalid dimensions: {0}")]
    DimensionError(String),

    /// Page not found
    #[error("Page with ID {0:?} not found")]
    PageNotFound(lopdf::ObjectId),
}

impl PaginatorError {
    pub fn is_read_error(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    pub fn is_write_error(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}
