//! vela_parser: parser crate.
//!
//! Converts lexer tokens into AST items (declarations, statements,
//! expressions) and collects diagnostics. A recursive-descent statement
//! parser plus Pratt parsing for expressions, with recovery to statement
//! boundaries. `parse_incremental` is the REPL entry point: it consumes only
//! complete leading items and reports whether the tail needs more input.
mod expr;
mod item;
mod parser;
mod stmt;

pub use parser::{IncrementalParse, ParseResult, Parser, ReplState};
