//! Style contract errors.

use thiserror::Error;

/// Convenience result type for style contract operations.
pub type StyleResult<T> = Result<T, StyleError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures raised while building a theme or validating caller-supplied names.
///
/// Class-name resolution itself never fails; these errors only surface at configuration time.
pub enum StyleError {
    /// A block identifier was empty.
    #[error("block identifier must not be empty")]
    EmptyIdentifier,
    /// A block identifier contained characters that cannot appear in a single class token.
    #[error("invalid block identifier `{0}`")]
    InvalidIdentifier(String),
    /// A prefix contained characters that cannot appear in a single class token.
    #[error("invalid design-system prefix `{0}`")]
    InvalidPrefix(String),
    /// A style-map artifact was not a flat JSON object of strings.
    #[error("failed to parse style map: {0}")]
    StyleMapParse(String),
    /// A theme configuration file could not be read.
    #[error("failed to read {path}: {message}")]
    ConfigRead {
        /// Path that failed to load.
        path: String,
        /// Underlying I/O message.
        message: String,
    },
    /// A theme configuration document could not be parsed.
    #[error("failed to parse {path}: {message}")]
    ConfigParse {
        /// Path or label of the document.
        path: String,
        /// Underlying parser message.
        message: String,
    },
    /// The configuration file extension is neither `toml` nor `json`.
    #[error("unsupported theme config format `{0}` (expected .toml or .json)")]
    UnsupportedConfigFormat(String),
}
