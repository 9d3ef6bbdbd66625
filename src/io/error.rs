//! Error types for grid loading, validation and buffer allocation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all codec operations
///
/// Every variant is raised before the encoder runs; the encoder itself
/// only ever sees grids that already satisfy their invariants.
#[derive(Debug)]
pub enum CodecError {
    /// Input is not in the expected shape (bad marker, unreadable dimensions)
    InvalidFormat {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Width or height is non-positive or exceeds the configured maxima
    DimensionsOutOfBounds {
        /// Declared width
        width: i64,
        /// Declared height
        height: i64,
        /// Configured maximum width
        max_width: usize,
        /// Configured maximum height
        max_height: usize,
    },

    /// A pixel token is not exactly `0` or `1`
    InvalidPixel {
        /// Zero-based position of the pixel in row-major order
        index: usize,
        /// The offending token
        token: String,
    },

    /// Fewer pixel values were available than the dimensions declare
    ///
    /// Covers both running out of input and hitting a non-numeric token
    /// in a bitmap file.
    Truncated {
        /// Pixels successfully read
        read: usize,
        /// Pixels declared by the header
        expected: usize,
    },

    /// Grid or code storage could not be allocated
    Allocation {
        /// What the storage was for
        purpose: &'static str,
        /// Number of elements requested
        requested: usize,
    },

    /// Pixel lookup outside the grid
    IndexOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// File system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Console stream failure while prompting or reading interactive input
    Stream {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { reason } => {
                write!(f, "Invalid input format: {reason}")
            }
            Self::DimensionsOutOfBounds {
                width,
                height,
                max_width,
                max_height,
            } => {
                write!(
                    f,
                    "Image dimensions {width}x{height} are outside the allowed range 1x1 to {max_width}x{max_height}"
                )
            }
            Self::InvalidPixel { index, token } => {
                write!(f, "Invalid pixel value '{token}' at position {index} (expected 0 or 1)")
            }
            Self::Truncated { read, expected } => {
                write!(f, "Incomplete image data ({read}/{expected} pixels read)")
            }
            Self::Allocation { purpose, requested } => {
                write!(f, "Failed to allocate {purpose} for {requested} elements")
            }
            Self::IndexOutOfBounds {
                row,
                col,
                width,
                height,
            } => {
                write!(
                    f,
                    "Pixel ({row}, {col}) is outside the {width}x{height} grid"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Stream { operation, source } => {
                write!(f, "Console error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Stream { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for codec results
pub type Result<T> = std::result::Result<T, CodecError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CodecError {
    CodecError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an input format error
pub fn invalid_format(reason: &impl ToString) -> CodecError {
    CodecError::InvalidFormat {
        reason: reason.to_string(),
    }
}

/// Wrap a console I/O failure with the operation that triggered it
pub const fn stream_error(operation: &'static str, source: std::io::Error) -> CodecError {
    CodecError::Stream { operation, source }
}
