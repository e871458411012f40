//! Error types for the document model
//!
//! Every error here is local and recoverable: an interactive editor reports
//! them to the caller and keeps running.

use std::fmt;

/// Result type alias for document model operations.
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors that can occur while editing, encoding or generating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// An operation needed character storage but none is attached
    NoBuffer,
    /// An attribute record points outside the document text, or an embed
    /// record does not cover exactly one character
    MalformedRange {
        key: String,
        location: usize,
        length: usize,
        text_len: usize,
    },
    /// A role label outside `system`, `user` and `assistant`
    UnknownRole(String),
    /// The completion stream failed or was cancelled mid-way
    StreamFailure(String),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBuffer => write!(f, "no text storage attached"),
            Self::MalformedRange {
                key,
                location,
                length,
                text_len,
            } => {
                let in_bounds = location
                    .checked_add(*length)
                    .is_some_and(|end| end <= *text_len);
                if in_bounds {
                    write!(
                        f,
                        "attribute {key} at {location}+{length} must span exactly one character (text length {text_len})"
                    )
                } else {
                    write!(
                        f,
                        "attribute {key} at {location}+{length} is out of bounds for text of length {text_len}"
                    )
                }
            }
            Self::UnknownRole(role) => write!(f, "unknown role: {role}"),
            Self::StreamFailure(reason) => write!(f, "completion stream failed: {reason}"),
        }
    }
}

impl std::error::Error for EditorError {}
