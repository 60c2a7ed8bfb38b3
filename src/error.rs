// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! Only the edges of the crate can fail: opening and decoding a file,
//! reading or writing the settings file, and exporting metadata as JSON.
//! Metadata extraction itself is total and never produces an [`Error`].

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// File missing, unreadable, or not writable.
    Io(String),
    /// The image codec refused the file.
    Decode(String),
    /// Settings file could not be parsed or serialized.
    Config(String),
    /// Metadata could not be exported.
    Serialize(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Serialize(e) => write!(f, "Serialize Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(e) => Error::Io(e.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
