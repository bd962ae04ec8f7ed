//! Error types for ambucheck.
//!
//! This module defines all error types used throughout the ambucheck crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for ambucheck operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Checklist Errors ===
    /// An answer sheet could not be read or parsed.
    #[error("failed to load answer sheet {path}: {message}")]
    SheetLoad {
        /// Path to the answer sheet.
        path: PathBuf,
        /// Description of what went wrong.
        message: String,
    },

    /// An answer sheet referenced a code that is not in the catalog.
    #[error("unknown checklist item '{code}'")]
    UnknownItem {
        /// The offending item code.
        code: String,
    },

    /// The requested ambulance unit is not one of the selectable units.
    #[error("invalid unit '{unit}': expected a two-digit unit between 01 and {max:02}")]
    InvalidUnit {
        /// The requested unit.
        unit: String,
        /// Highest selectable unit number.
        max: u8,
    },

    /// A date string was not in `YYYY-MM-DD` form.
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The string that failed to parse.
        value: String,
    },

    // === Signature Errors ===
    /// A signature image could not be decoded.
    #[error("failed to decode signature image: {0}")]
    SignatureDecode(#[from] image::ImageError),

    /// A signature image file could not be read.
    #[error("failed to read signature {path}: {source}")]
    SignatureRead {
        /// Path to the image file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization failed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for ambucheck operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create an unknown item error.
    #[must_use]
    pub fn unknown_item(code: impl Into<String>) -> Self {
        Self::UnknownItem { code: code.into() }
    }

    /// Create an invalid date error.
    #[must_use]
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    /// Create an answer sheet load error.
    #[must_use]
    pub fn sheet_load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SheetLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error was caused by user input rather than the environment.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::SheetLoad { .. }
                | Self::UnknownItem { .. }
                | Self::InvalidUnit { .. }
                | Self::InvalidDate { .. }
                | Self::SignatureDecode(_)
        )
    }

    /// Process exit status for this error: 2 for bad input, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.is_input_error() {
            2
        } else {
            1
        }
    }
}
