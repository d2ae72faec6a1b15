//! Document parse errors. Always fatal: no partial extraction is returned.

use super::error_code::{self, ErrorCode};

/// The input is not a well-formed document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed document at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    #[error("Unexpected end of document: <{open_element}> is never closed")]
    UnexpectedEof { open_element: String },

    #[error("Document has no root element")]
    NoRootElement,

    #[error("Unexpected second root element <{name}>")]
    MultipleRoots { name: String },

    #[error("Document is not valid UTF-8")]
    InvalidUtf8,
}

impl ErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
