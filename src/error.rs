//! Error types for the form library.
//!
//! Lookups that simply find nothing are represented as `Option::None`
//! throughout the crate; `Error` is reserved for genuinely broken input
//! (missing objects, wrong types, undecodable streams).

/// Result type alias for form library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading or editing form fields.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Referenced object not found in the document's object store
    #[error("Object not found: {0} {1} R")]
    ObjectNotFound(u32, u16),

    /// Object has wrong type
    #[error("Invalid object type: expected {expected}, found {found}")]
    InvalidObjectType {
        /// Expected object type
        expected: String,
        /// Actual object type found
        found: String,
    },

    /// Invalid PDF structure (generic)
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    /// Stream decoding error
    #[error("Stream decoding error: {0}")]
    Decode(String),

    /// Unsupported stream filter
    #[error("Unsupported filter: {0}")]
    UnsupportedFilter(String),
}
