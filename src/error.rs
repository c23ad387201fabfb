// Error types shared by the tokenizer, row builder and batch parser

use thiserror::Error;

/// Why the tokenizer rejected a stretch of input in strict mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Malformed {
    /// A quoted field ran to end of input without a closing quote.
    #[error("unterminated quoted field")]
    UnterminatedQuote,
    /// Something other than a delimiter or newline followed a closing quote.
    #[error("unexpected text after closing quote")]
    TextAfterQuote,
}

/// A failed parse. Any error aborts the whole document; no partial table
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid delimiter {delimiter:?}: {reason}")]
    InvalidDelimiter {
        delimiter: char,
        reason: &'static str,
    },

    #[error("malformed input at byte {offset}: {kind}")]
    Malformed { kind: Malformed, offset: usize },

    #[error("failed to allocate {requested} bytes for field at byte {offset}")]
    Allocation { offset: usize, requested: usize },

    #[error("input is not valid UTF-8 at byte {offset}")]
    InvalidUtf8 { offset: usize },
}

impl ParseError {
    /// Byte offset into the input where the problem was detected, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::InvalidDelimiter { .. } => None,
            ParseError::Malformed { offset, .. }
            | ParseError::Allocation { offset, .. }
            | ParseError::InvalidUtf8 { offset } => Some(*offset),
        }
    }
}
