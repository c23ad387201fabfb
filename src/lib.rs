// csvlex - Zero-copy CSV tokenizer and row builder
//
// Layers:
// core:     dialect, byte scanning, tokens, the pull tokenizer, unescaping
// strategy: direct (one tokenizer feeding one row builder)
//           parallel (independent documents across a rayon pool)
//
// Lenient quoting (the default) never fails on malformed text; strict
// quoting turns unterminated quotes and text after a closing quote into
// errors carrying the byte offset.

pub mod core;
mod error;
#[cfg(feature = "memory_tracking")]
pub mod memory;
pub mod strategy;
mod table;

pub use crate::core::{
    next_token, unescape_field, Dialect, Quoting, Span, Token, TokenKind, Tokenizer,
    DEFAULT_DELIMITER, QUOTE,
};
pub use error::{Malformed, ParseError};
pub use strategy::{parse, parse_bytes, parse_many, parse_with, Flow, RowBuilder};
pub use table::{Row, Table};

// ============================================================================
// Allocator Configuration
// ============================================================================

// When memory_tracking is enabled, wrap the allocator to track usage
#[cfg(feature = "memory_tracking")]
#[global_allocator]
static GLOBAL: memory::TrackingAllocator = memory::TrackingAllocator;

// When memory_tracking is disabled, use mimalloc directly (no overhead)
#[cfg(all(feature = "mimalloc", not(feature = "memory_tracking")))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;
