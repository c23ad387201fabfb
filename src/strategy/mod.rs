// Parsing strategies built on the tokenizer

pub mod direct;
pub mod parallel;

pub use direct::*;
pub use parallel::*;
