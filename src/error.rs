//! Error types for metadata mapping operations.
//!
//! This module provides the [`MapError`] type for all mapping operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all metadata mapping operations.
///
/// Absence of data is never an error: unmapped fields, unrecognized
/// relator codes, missing reference targets, and disabled elements all
/// simply produce no output. Errors represent contract violations by the
/// host repository, or failures while serializing a finished document.
#[derive(Error, Debug)]
pub enum MapError {
    /// A field value's shape contradicts its field's classification.
    ///
    /// Raised when the host hands the engine a value list that violates
    /// the field iteration contract, e.g. an embedded sub-record in a
    /// scalar-mapped field or a plain scalar in a sub-record field.
    #[error("malformed value in field '{field}': {reason}")]
    MalformedValue {
        /// Name of the field holding the offending value.
        field: String,
        /// Description of the violation.
        reason: String,
    },

    /// IO error from the underlying XML writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying XML writer.
    #[error("XML writer error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Error while writing a document as JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A rendered document was not valid UTF-8.
    #[error("rendered document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Convenience type alias for [`std::result::Result`] with [`MapError`].
pub type Result<T> = std::result::Result<T, MapError>;
