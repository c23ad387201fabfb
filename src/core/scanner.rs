// Byte-level helpers for the tokenizer.

use memchr::{memchr, memchr3};

use super::dialect::QUOTE;

/// Check if a byte is leading whitespace for the given delimiter.
/// A blank that doubles as the delimiter is structural, not whitespace.
#[inline]
pub fn is_blank(byte: u8, delimiter: u8) -> bool {
    (byte == b' ' || byte == b'\t') && byte != delimiter
}

/// Position of the first non-blank byte at or after `pos`.
#[inline]
pub fn skip_blanks(input: &[u8], mut pos: usize, delimiter: u8) -> usize {
    while pos < input.len() && is_blank(input[pos], delimiter) {
        pos += 1;
    }
    pos
}

/// End of an unquoted run starting at `pos`: the next delimiter, `\r` or
/// `\n`, or end of input.
#[inline]
pub fn find_unquoted_end(input: &[u8], pos: usize, delimiter: u8) -> usize {
    match memchr3(delimiter, b'\r', b'\n', &input[pos..]) {
        Some(offset) => pos + offset,
        None => input.len(),
    }
}

/// Position of the closing quote of a quoted field whose content starts at
/// `pos`. Doubled quotes are content and are stepped over. Returns `None`
/// when input ends first.
#[inline]
pub fn find_closing_quote(input: &[u8], mut pos: usize) -> Option<usize> {
    while let Some(offset) = memchr(QUOTE, &input[pos..]) {
        let quote = pos + offset;
        if input.get(quote + 1) == Some(&QUOTE) {
            pos = quote + 2;
        } else {
            return Some(quote);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_blanks_respects_delimiter() {
        assert_eq!(skip_blanks(b"  \tx", 0, b','), 3);
        // Tab-delimited: the tab is structural
        assert_eq!(skip_blanks(b" \tx", 0, b'\t'), 1);
        assert_eq!(skip_blanks(b"   ", 1, b','), 3);
    }

    #[test]
    fn test_find_unquoted_end() {
        assert_eq!(find_unquoted_end(b"abc,def", 0, b','), 3);
        assert_eq!(find_unquoted_end(b"abc\r\ndef", 0, b','), 3);
        assert_eq!(find_unquoted_end(b"abc;def", 0, b','), 7);
        assert_eq!(find_unquoted_end(b"abc;def", 1, b';'), 3);
    }

    #[test]
    fn test_find_closing_quote_skips_doubled() {
        // a""b"  -> closing quote at index 4
        assert_eq!(find_closing_quote(b"a\"\"b\",", 0), Some(4));
        assert_eq!(find_closing_quote(b"abc", 0), None);
        // Trailing doubled quote with nothing after it is still content
        assert_eq!(find_closing_quote(b"a\"\"", 0), None);
        assert_eq!(find_closing_quote(b"\"", 0), Some(0));
    }

    #[test]
    fn test_find_closing_quote_at_end_of_input() {
        assert_eq!(find_closing_quote(b"", 0), None);
        assert_eq!(find_closing_quote(b"x\"", 0), Some(1));
        assert_eq!(find_closing_quote(b"x\"", 2), None);
    }
}
