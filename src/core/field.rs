// Field unescaping

use memchr::memchr;

use super::dialect::QUOTE;
use crate::error::ParseError;

/// Copy a raw field into an owned string, collapsing every `""` to `"`.
///
/// Single left-to-right pass; a lone `"` is copied unchanged. The output
/// buffer is reserved once at the raw length (unescaping never grows the
/// text), and a failed reservation is reported instead of aborting.
/// `offset` is the field's position in the document, used for errors.
pub fn unescape_field(raw: &str, offset: usize) -> Result<String, ParseError> {
    let mut out = String::new();
    out.try_reserve_exact(raw.len())
        .map_err(|_| ParseError::Allocation {
            offset,
            requested: raw.len(),
        })?;

    let bytes = raw.as_bytes();
    let mut pos = 0;
    while let Some(found) = memchr(QUOTE, &bytes[pos..]) {
        let quote = pos + found;
        // Keep everything up to and including this quote
        out.push_str(&raw[pos..=quote]);
        pos = if bytes.get(quote + 1) == Some(&QUOTE) {
            quote + 2
        } else {
            quote + 1
        };
    }
    out.push_str(&raw[pos..]);

    Ok(out)
}
