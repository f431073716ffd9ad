//! Error types for deck building and PPTX packaging.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or packaging a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create, write, or read a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A shape's geometry is negative or falls outside its slide.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A package part is missing or malformed.
    #[error("Invalid or corrupted file: {0}")]
    CorruptedFile(String),

    /// ZIP archive error (for PPTX).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML reading or writing error (for PPTX).
    #[error("XML error: {0}")]
    XmlError(String),
}
