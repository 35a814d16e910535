//! Error types for the paint_palette library

use thiserror::Error;

/// Result type alias for paint_palette operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum ColorError {
    /// Hex color string is not `#RRGGBB` / `RRGGBB`
    #[error("Invalid hex color '{value}': {reason}")]
    InvalidHex { value: String, reason: String },

    /// Image bytes or file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// A palette extraction tier failed
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Failure of a single extraction tier.
///
/// Only produced inside the extraction pipeline, where it triggers the next
/// tier. Kept narrow so unrelated bugs are not mistaken for a tier failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    #[error("pixel buffer is empty")]
    EmptyBuffer,

    #[error("invalid buffer dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("unsupported channel count {0} (need at least 3)")]
    UnsupportedChannels(u8),

    #[error("buffer holds {actual} bytes, expected {expected}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    #[error("numerical failure: {0}")]
    NumericalFailure(String),

    #[error("clustering produced no colors")]
    NoClusters,
}

impl ColorError {
    /// Create an invalid hex error
    pub fn invalid_hex(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Extraction tier failures are always absorbed by the next tier.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ColorError::Extraction(_) | ColorError::ImageLoadError { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidHex { value, .. } => {
                format!("'{}' is not a valid color. Use the #RRGGBB format.", value)
            }
            ColorError::ImageLoadError { .. } => {
                "Could not read the image. Please check the file format and try again.".to_string()
            }
            ColorError::ConfigError { .. } => {
                "The configuration file could not be used.".to_string()
            }
            ColorError::InvalidParameter { parameter, .. } => {
                format!("The value given for '{}' is out of range.", parameter)
            }
            ColorError::Extraction(_) => {
                "Color extraction failed. Please try with a different image.".to_string()
            }
        }
    }
}
