// Core primitives for CSV lexing

pub mod dialect;
pub mod field;
pub mod scanner;
pub mod token;
pub mod tokenizer;

pub use dialect::*;
pub use field::*;
pub use token::*;
pub use tokenizer::*;
