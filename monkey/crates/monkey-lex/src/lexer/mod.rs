//! Lexer implementation, split by token family.
//!
//! `core` holds the `Lexer` struct and the dispatch in `next_token`;
//! the sibling modules add the per-family lexing methods.

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
