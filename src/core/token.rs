// Token types produced by the tokenizer

use std::ops::Range;

use crate::error::Malformed;

/// Half-open byte range `[start, end)` into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Span { start, end }
    }

    #[inline]
    pub fn empty(at: usize) -> Self {
        Span { start: at, end: at }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Field content. For quoted fields the span excludes the quotes and
    /// still contains doubled `""` escapes.
    Value,
    FieldSeparator,
    /// `\n`, `\r`, or `\r\n` outside quotes.
    RowSeparator,
    End,
    /// Only produced in strict quoting mode.
    Error(Malformed),
}

/// One lexical token. Borrows from the input, so it cannot outlive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub span: Span,
    pub raw: &'a str,
}

impl<'a> Token<'a> {
    #[inline]
    pub(crate) fn new(kind: TokenKind, span: Span, input: &'a str) -> Self {
        Token {
            kind,
            span,
            raw: &input[span.range()],
        }
    }

    /// True for `End` and `Error`, after which the tokenizer yields nothing new.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::End | TokenKind::Error(_))
    }
}
