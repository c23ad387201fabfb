// Direct parsing: one tokenizer feeding one row builder
//
// The builder interprets the token stream:
// - Value:          unescape, hold as the pending value of the current column
// - FieldSeparator: commit the pending value (or "") as a column
// - RowSeparator:   commit the pending column, close the row, open a new one
// - End:            commit the pending column, close the row, stop
// - Error:          abort with the token's offset
//
// A row is always closed on End, so empty input yields one row holding a
// single empty field, and a trailing newline yields a final [""] row.

use std::mem;

use crate::core::{unescape_field, Dialect, Token, TokenKind, Tokenizer};
use crate::error::ParseError;
use crate::table::{Row, Table};

/// Whether the builder wants more tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Done,
}

/// Assembles tokens into rows of unescaped fields.
#[derive(Debug, Default)]
pub struct RowBuilder {
    rows: Vec<Row>,
    current: Row,
    pending: Option<String>,
    done: bool,
}

impl RowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one token. Tokens pushed after `End` are ignored.
    pub fn push(&mut self, token: Token<'_>) -> Result<Flow, ParseError> {
        if self.done {
            return Ok(Flow::Done);
        }

        match token.kind {
            TokenKind::Value => {
                let value = unescape_field(token.raw, token.span.start)?;
                if self.pending.replace(value).is_some() {
                    tracing::trace!(
                        offset = token.span.start,
                        "value without separator replaced pending field"
                    );
                }
            }
            TokenKind::FieldSeparator => self.commit_field(),
            TokenKind::RowSeparator => self.close_row(),
            TokenKind::End => {
                self.close_row();
                self.done = true;
                return Ok(Flow::Done);
            }
            TokenKind::Error(kind) => {
                self.done = true;
                return Err(ParseError::Malformed {
                    kind,
                    offset: token.span.start,
                });
            }
        }

        Ok(Flow::Continue)
    }

    /// Rows closed so far (the open row is not included).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Hand over the table. If `End` was never pushed, the open row is
    /// closed first, exactly as `End` would have done.
    pub fn finish(mut self) -> Table {
        if !self.done {
            self.close_row();
        }
        Table::from_rows(self.rows)
    }

    #[inline]
    fn commit_field(&mut self) {
        let value = self.pending.take().unwrap_or_default();
        self.current.push(value);
    }

    #[inline]
    fn close_row(&mut self) {
        self.commit_field();
        let width = self.current.len();
        let row = mem::replace(&mut self.current, Vec::with_capacity(width));
        self.rows.push(row);
    }
}

/// Parse a whole document with the given delimiter and lenient quoting.
pub fn parse(input: &str, delimiter: u8) -> Result<Table, ParseError> {
    parse_with(input, &Dialect::new(delimiter)?)
}

/// Parse a whole document with an explicit dialect.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(bytes = input.len(), delimiter = %(dialect.delimiter() as char).escape_default())
)]
pub fn parse_with(input: &str, dialect: &Dialect) -> Result<Table, ParseError> {
    let mut tokenizer = Tokenizer::new(input, *dialect);
    let mut builder = RowBuilder::new();

    loop {
        let token = tokenizer.next_token();
        match builder.push(token) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Done) => break,
            Err(err) => {
                tracing::debug!(%err, "parse aborted");
                return Err(err);
            }
        }
    }

    let table = builder.finish();
    tracing::debug!(rows = table.len(), "parsed table");
    Ok(table)
}

/// Parse raw bytes, rejecting input that is not UTF-8 before tokenizing.
pub fn parse_bytes(input: &[u8], delimiter: u8) -> Result<Table, ParseError> {
    let dialect = Dialect::new(delimiter)?;
    let text = std::str::from_utf8(input).map_err(|e| ParseError::InvalidUtf8 {
        offset: e.valid_up_to(),
    })?;
    parse_with(text, &dialect)
}
