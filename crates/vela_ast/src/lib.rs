//! vela_ast: AST node types and the session context.
//!
//! A `TranslationUnit` is the root of one compiled module; the `AstContext`
//! owns the interning tables and diagnostic sink that outlive it.
mod ast;
mod context;

pub use ast::*;
pub use context::AstContext;
