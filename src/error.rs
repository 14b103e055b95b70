//! Error types for courtchart operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in courtchart operations.
///
/// Classification and aggregation never fail — degraded inputs (empty shot
/// collections, malformed region bounds, out-of-range coordinates) are
/// handled by falling through, not by returning an error. Errors only
/// arise from chart construction and image output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer or chart.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Rendering error.
    #[error("Rendering error: {0}")]
    Rendering(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 600,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
        assert!(err.to_string().contains("0x600"));
    }

    #[test]
    fn test_rendering_error_display() {
        let err = Error::Rendering("no region table".to_string());
        assert!(err.to_string().contains("no region table"));
    }
}
