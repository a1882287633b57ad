//! Error types for share generation, reconstruction and image I/O

use crate::raster::Dimensions;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all operations
#[derive(Debug)]
pub enum ShareError {
    /// Raster is empty or not strictly two-level
    ///
    /// The caller has to fix the input; retrying cannot succeed.
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Two rasters that must be overlaid differ in size
    ///
    /// Usually means the shares come from different generations, or one of
    /// them was altered after it was written.
    DimensionMismatch {
        /// Dimensions of the first raster
        first: Dimensions,
        /// Dimensions of the second raster
        second: Dimensions,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "Invalid input: {reason}"),
            Self::DimensionMismatch { first, second } => {
                write!(f, "Shares have different sizes ({first} vs {second})")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for results
pub type Result<T> = std::result::Result<T, ShareError>;

impl From<image::ImageError> for ShareError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ShareError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ShareError {
    ShareError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> ShareError {
    ShareError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Attach a path to an image decoding failure
pub fn image_load(path: impl Into<PathBuf>) -> impl FnOnce(image::ImageError) -> ShareError {
    let path = path.into();
    move |source| ShareError::ImageLoad { path, source }
}

/// Attach a path to an image encoding failure
pub fn image_export(path: impl Into<PathBuf>) -> impl FnOnce(image::ImageError) -> ShareError {
    let path = path.into();
    move |source| ShareError::ImageExport { path, source }
}
