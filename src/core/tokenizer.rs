// Pull-based CSV tokenizer
//
// Produces one token per call from a byte cursor. Purely lexical: no notion
// of rows or columns, and no allocation. Every span boundary falls on an
// ASCII byte (delimiter, quote, CR, LF, blank) or end of input, so slicing
// the &str at span edges is always on a char boundary.

use super::dialect::{Dialect, QUOTE};
use super::scanner::{find_closing_quote, find_unquoted_end, skip_blanks};
use super::token::{Span, Token, TokenKind};
use crate::error::Malformed;

/// Scan one token from `input` at `*cursor`, advancing the cursor past it.
///
/// Once end of input is reached the cursor stops moving and every further
/// call returns `End`. The cursor never decreases: one already past end of
/// input is left where it is.
///
/// # Panics
///
/// In debug builds, panics if `*cursor` is not on a char boundary. Cursors produced by this
/// function always are.
pub fn next_token<'a>(input: &'a str, cursor: &mut usize, dialect: &Dialect) -> Token<'a> {
    let bytes = input.as_bytes();
    debug_assert!(
        *cursor >= bytes.len() || input.is_char_boundary(*cursor),
        "cursor {} is not on a char boundary",
        *cursor
    );
    let delimiter = dialect.delimiter();
    let pos = skip_blanks(bytes, (*cursor).min(bytes.len()), delimiter);

    if pos >= bytes.len() {
        *cursor = (*cursor).max(bytes.len());
        return Token::new(TokenKind::End, Span::empty(bytes.len()), input);
    }

    let byte = bytes[pos];
    let (kind, span, next) = if byte == delimiter {
        (TokenKind::FieldSeparator, Span::new(pos, pos + 1), pos + 1)
    } else if byte == b'\r' || byte == b'\n' {
        let width = if byte == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
            2
        } else {
            1
        };
        (TokenKind::RowSeparator, Span::new(pos, pos + width), pos + width)
    } else if byte == QUOTE {
        scan_quoted(bytes, pos, dialect)
    } else {
        let end = find_unquoted_end(bytes, pos, delimiter);
        (TokenKind::Value, Span::new(pos, end), end)
    };

    if let TokenKind::Error(kind) = kind {
        tracing::trace!(?kind, offset = span.start, "tokenizer rejected input");
    }

    *cursor = next;
    Token::new(kind, span, input)
}

/// Scan a quoted field whose opening quote sits at `open`.
/// Returns the token kind, its span, and the cursor position after it.
fn scan_quoted(bytes: &[u8], open: usize, dialect: &Dialect) -> (TokenKind, Span, usize) {
    let start = open + 1;
    let Some(close) = find_closing_quote(bytes, start) else {
        let len = bytes.len();
        if dialect.is_strict() {
            let kind = TokenKind::Error(Malformed::UnterminatedQuote);
            return (kind, Span::new(open, len), len);
        }
        return (TokenKind::Value, Span::new(start, len), len);
    };

    if dialect.is_strict() {
        let delimiter = dialect.delimiter();
        let after = skip_blanks(bytes, close + 1, delimiter);
        if after < bytes.len() {
            let b = bytes[after];
            if b != delimiter && b != b'\r' && b != b'\n' {
                let end = find_unquoted_end(bytes, after, delimiter);
                let kind = TokenKind::Error(Malformed::TextAfterQuote);
                return (kind, Span::new(after, end), end);
            }
        }
    }

    (TokenKind::Value, Span::new(start, close), close + 1)
}

/// Stateful wrapper around [`next_token`] that owns its cursor.
///
/// As an iterator it yields every token up to and including the first
/// `End` or `Error`, then `None`.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    cursor: usize,
    dialect: Dialect,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, dialect: Dialect) -> Self {
        Tokenizer {
            input,
            cursor: 0,
            dialect,
            done: false,
        }
    }

    #[inline]
    pub fn next_token(&mut self) -> Token<'a> {
        next_token(self.input, &mut self.cursor, &self.dialect)
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    #[inline]
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        self.done = token.is_terminal();
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}
