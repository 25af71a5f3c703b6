//! vela_lexer: lexer crate.
//!
//! Tokenizes buffer text and collects diagnostics. Entry point:
//! `Lexer::new(input).lex()`. The result records where an open construct
//! was left unfinished at end of input, which the REPL uses to ask for more
//! input instead of reporting an error.
mod keywords;
mod lexer;

pub use lexer::{LexResult, Lexer};
