//! Error types for wallpaper generation and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum WallpaperError {
    /// A categorical override names none of the available options
    ///
    /// Never falls back to a random draw: a misspelled override would
    /// otherwise silently produce a different wallpaper.
    InvalidOverride {
        /// Decision key the override was given for
        key: String,
        /// Raw override value as supplied
        value: String,
        /// Display names that would have been accepted
        options: Vec<&'static str>,
    },

    /// Request or draw parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to write generated output
    Output {
        /// Destination of the write, `-` for standard output
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for WallpaperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOverride {
                key,
                value,
                options,
            } => {
                write!(
                    f,
                    "Invalid override '{key}' = '{value}': expected one of {}",
                    options.join(", ")
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Output {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "Output error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WallpaperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, WallpaperError>;

impl From<std::io::Error> for WallpaperError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            path: PathBuf::from("-"),
            operation: "write",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WallpaperError {
    WallpaperError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid override error for a categorical decision
pub fn invalid_override(key: &str, value: &str, options: Vec<&'static str>) -> WallpaperError {
    WallpaperError::InvalidOverride {
        key: key.to_string(),
        value: value.to_string(),
        options,
    }
}
