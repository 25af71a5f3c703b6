//! vela_frontend: frontend driver.
//!
//! Two entry points over one shared session context:
//!
//! - [`Driver::build_translation_unit`] compiles a fixed, ordered list of
//!   registered buffers into one finished [`vela_ast::TranslationUnit`].
//! - [`Driver::append_to_repl_unit`] incrementally parses newly typed input
//!   from a growing buffer and merges it into a live unit, advancing the
//!   [`ReplContext`] cursor by exactly the amount consumed.
mod driver;
mod repl;
mod sema;

pub use driver::{BuildError, BuildOptions, Driver, Timings};
pub use repl::ReplContext;
