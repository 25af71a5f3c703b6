//! vela_syntax: shared syntax-level types.
//!
//! Spans, source buffers, tokens, diagnostics, and the interning tables that
//! back a compilation session.
mod builtins;
mod diagnostic;
mod interner;
mod kind;
mod render;
mod source;
mod span;
mod token;
mod types;
mod util;

pub use builtins::{BUILTIN_NAMES, builtin_arity};
pub use diagnostic::{Diagnostic, Severity, codes};
pub use interner::{Interner, Symbol};
pub use kind::{DiagnosticKind, DiagnosticsFormatter};
pub use render::{render_diagnostic, render_diagnostics};
pub use source::{BufferId, SourceBuffer, SourceManager, SourceText};
pub use span::{ByteIndex, Span};
pub use token::{Token, TokenKind};
pub use types::{Type, TypeId, TypeInterner};
pub use util::{find_best_match, is_ident_continue, is_ident_start, levenshtein_distance, unquote};
