//! Crate error type for the fallible boundaries: loading and exporting.
//!
//! Validation findings are never errors; they are `Issue`s.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse workspace JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("unsupported workspace version '{found}' (expected '{expected}')")]
    UnsupportedVersion { found: String, expected: &'static str },

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown export format '{0}'")]
    UnknownExportFormat(String),
}

impl Error {
    /// Stable short code, mirroring the issue taxonomy style.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Parse(_) => "PARSE",
            Error::UnsupportedVersion { .. } => "VERSION",
            Error::Serialize { .. } => "SERIALIZE",
            Error::UnknownExportFormat(_) => "EXPORT_FORMAT",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
