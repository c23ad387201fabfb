// Delimiter and quoting configuration for a parse
//
// The quote character is always `"`. The delimiter is a single ASCII byte,
// validated on construction so the tokenizer can slice the input at any
// structural byte without landing inside a multi-byte UTF-8 sequence.

use crate::error::ParseError;

pub const DEFAULT_DELIMITER: u8 = b',';
pub const QUOTE: u8 = b'"';

/// How the tokenizer treats quoting mistakes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Quoting {
    /// Best effort: unterminated quotes run to end of input, stray text
    /// after a closing quote becomes the field value.
    #[default]
    Lenient,
    /// Quoting mistakes produce an error token and abort the parse.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DialectConfig", into = "DialectConfig"))]
pub struct Dialect {
    delimiter: u8,
    quoting: Quoting,
}

impl Dialect {
    /// Lenient dialect with the given delimiter.
    pub fn new(delimiter: u8) -> Result<Self, ParseError> {
        validate_delimiter(delimiter)?;
        Ok(Dialect {
            delimiter,
            quoting: Quoting::Lenient,
        })
    }

    /// Lenient dialect from a `char`; anything outside ASCII is rejected.
    pub fn from_char(delimiter: char) -> Result<Self, ParseError> {
        match u8::try_from(delimiter) {
            Ok(byte) if byte.is_ascii() => Self::new(byte),
            _ => Err(ParseError::InvalidDelimiter {
                delimiter,
                reason: "delimiter must be a single ASCII character",
            }),
        }
    }

    pub fn with_quoting(self, quoting: Quoting) -> Self {
        Dialect { quoting, ..self }
    }

    pub fn strict(self) -> Self {
        self.with_quoting(Quoting::Strict)
    }

    #[inline]
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    #[inline]
    pub fn quoting(&self) -> Quoting {
        self.quoting
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.quoting == Quoting::Strict
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect {
            delimiter: DEFAULT_DELIMITER,
            quoting: Quoting::Lenient,
        }
    }
}

fn validate_delimiter(delimiter: u8) -> Result<(), ParseError> {
    let reason = match delimiter {
        QUOTE => "the quote character cannot be a delimiter",
        b'\r' | b'\n' => "line endings cannot be delimiters",
        b if !b.is_ascii() => "delimiter must be a single ASCII character",
        _ => return Ok(()),
    };
    Err(ParseError::InvalidDelimiter {
        delimiter: delimiter as char,
        reason,
    })
}

/// On-disk shape of a dialect: `{ "delimiter": ";", "quoting": "strict" }`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct DialectConfig {
    #[serde(default = "default_delimiter_char")]
    delimiter: char,
    #[serde(default)]
    quoting: Quoting,
}

#[cfg(feature = "serde")]
fn default_delimiter_char() -> char {
    DEFAULT_DELIMITER as char
}

#[cfg(feature = "serde")]
impl TryFrom<DialectConfig> for Dialect {
    type Error = ParseError;

    fn try_from(config: DialectConfig) -> Result<Self, Self::Error> {
        Ok(Dialect::from_char(config.delimiter)?.with_quoting(config.quoting))
    }
}

#[cfg(feature = "serde")]
impl From<Dialect> for DialectConfig {
    fn from(dialect: Dialect) -> Self {
        DialectConfig {
            delimiter: dialect.delimiter as char,
            quoting: dialect.quoting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_comma_lenient() {
        let d = Dialect::default();
        assert_eq!(d.delimiter(), b',');
        assert_eq!(d.quoting(), Quoting::Lenient);
        assert!(!d.is_strict());
    }

    #[test]
    fn test_rejects_structural_bytes() {
        for bad in [b'"', b'\r', b'\n', 0xA7] {
            assert!(
                matches!(Dialect::new(bad), Err(ParseError::InvalidDelimiter { .. })),
                "accepted delimiter {:#04x}",
                bad
            );
        }
    }

    #[test]
    fn test_blank_delimiters_are_allowed() {
        // Tabs and spaces are valid; the tokenizer stops skipping them as
        // leading whitespace when they are the delimiter.
        assert_eq!(Dialect::new(b'\t').unwrap().delimiter(), b'\t');
        assert_eq!(Dialect::new(b' ').unwrap().delimiter(), b' ');
    }

    #[test]
    fn test_from_char_rejects_non_ascii() {
        assert!(Dialect::from_char('§').is_err());
        assert_eq!(Dialect::from_char(';').unwrap().delimiter(), b';');
    }

    #[test]
    fn test_strict_keeps_delimiter() {
        let d = Dialect::new(b'|').unwrap().strict();
        assert!(d.is_strict());
        assert_eq!(d.delimiter(), b'|');
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_delimiter() {
        let d: Dialect = serde_json::from_str(r#"{"delimiter": ";", "quoting": "strict"}"#).unwrap();
        assert_eq!(d, Dialect::new(b';').unwrap().strict());

        let d: Dialect = serde_json::from_str("{}").unwrap();
        assert_eq!(d, Dialect::default());

        assert!(serde_json::from_str::<Dialect>(r#"{"delimiter": "\""}"#).is_err());
    }
}
