//! Frontend driver.
//!
//! Owns the source manager and the session context, and exposes the two
//! compilation entry points: whole-unit builds and incremental REPL appends.
use bumpalo::Bump;
use thiserror::Error;
use tracing::debug;

use vela_ast::{AstContext, TranslationUnit, UnitKind};
use vela_lexer::Lexer;
use vela_parser::{Parser, ReplState};
use vela_syntax::{BufferId, ByteIndex, SourceManager, Span};

use crate::repl::ReplContext;
use crate::sema;

/// Flags for a whole-unit build.
#[derive(Clone, Copy, Debug)]
pub struct BuildOptions {
    /// Build syntax only; semantic analysis is skipped entirely.
    pub parse_only: bool,
    /// Entry module semantics: top-level statements are allowed and form
    /// the implicit entry point. Otherwise library rules apply.
    pub main_module: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            parse_only: false,
            main_module: true,
        }
    }
}

/// Structural build failures. Everything recoverable is a diagnostic on the
/// context sink instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("no input buffers were provided")]
    NoBuffers,
    #[error("unknown buffer id: {0:?}")]
    UnknownBuffer(BufferId),
}

/// Phase timings for one build, in microseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timings {
    pub lex_us: u128,
    pub parse_us: u128,
    pub analyze_us: u128,
}

/// Frontend driver: one per compilation session.
pub struct Driver {
    pub sources: SourceManager,
    pub ctx: AstContext,
}

impl Driver {
    pub fn new() -> Self {
        Self {
            sources: SourceManager::new(),
            ctx: AstContext::new(),
        }
    }

    /// Register a source buffer with the session.
    pub fn add_buffer(&mut self, name: impl Into<String>, text: String) -> BufferId {
        self.sources.add_buffer(name, text)
    }

    /// Build one translation unit from an ordered, non-empty list of
    /// registered buffers.
    ///
    /// Declarations from earlier buffers are visible while analyzing later
    /// ones. Syntax and semantic problems are recorded on the context sink
    /// and never abort the build; a partial unit is still returned so
    /// tooling can inspect it.
    pub fn build_translation_unit(
        &mut self,
        output_name: &str,
        buffer_ids: &[BufferId],
        options: BuildOptions,
    ) -> Result<TranslationUnit, BuildError> {
        self.build_translation_unit_timed(output_name, buffer_ids, options)
            .map(|(unit, _)| unit)
    }

    /// Like [`Self::build_translation_unit`], also reporting phase timings.
    pub fn build_translation_unit_timed(
        &mut self,
        output_name: &str,
        buffer_ids: &[BufferId],
        options: BuildOptions,
    ) -> Result<(TranslationUnit, Timings), BuildError> {
        if buffer_ids.is_empty() {
            return Err(BuildError::NoBuffers);
        }
        for &id in buffer_ids {
            if self.sources.buffer(id).is_none() {
                return Err(BuildError::UnknownBuffer(id));
            }
        }

        let kind = if options.main_module {
            UnitKind::Main
        } else {
            UnitKind::Library
        };
        let mut unit = TranslationUnit::new(output_name, kind);
        let mut globals = sema::Globals::with_builtins(&mut self.ctx);
        let mut timings = Timings::default();

        for &id in buffer_ids {
            let Some(buf) = self.sources.buffer(id) else {
                return Err(BuildError::UnknownBuffer(id));
            };
            let text = buf.text.as_str();

            let t0 = std::time::Instant::now();
            let lex = Lexer::new(text).lex();
            let t1 = std::time::Instant::now();
            let bump = Bump::new();
            let parse = Parser::new(&mut self.ctx, text, &lex.tokens, &bump).parse();
            let t2 = std::time::Instant::now();
            timings.lex_us += (t1 - t0).as_micros();
            timings.parse_us += (t2 - t1).as_micros();

            debug!(
                buffer = id.0,
                tokens = lex.tokens.len(),
                items = parse.items.len(),
                "parsed buffer"
            );
            self.ctx
                .report_all(lex.diagnostics.into_iter().map(|d| d.with_buffer(id)));
            self.ctx
                .report_all(parse.diagnostics.into_iter().map(|d| d.with_buffer(id)));

            if !options.parse_only {
                let t3 = std::time::Instant::now();
                let diags =
                    sema::analyze_items(&mut self.ctx, &mut globals, &parse.items, kind, false);
                timings.analyze_us += t3.elapsed().as_micros();
                self.ctx
                    .report_all(diags.into_iter().map(|d| d.with_buffer(id)));
            }
            unit.items.extend(parse.items);
        }

        debug!(
            unit = %unit.name,
            items = unit.items.len(),
            errors = self.ctx.had_errors(),
            "built translation unit"
        );
        Ok((unit, timings))
    }

    /// Parse and integrate exactly `[repl.offset, buffer_end)` of the
    /// session buffer into `unit`, advancing the cursor past every complete
    /// top-level item that was consumed.
    ///
    /// Returns `true` iff at least one complete item was merged. `false`
    /// means nothing beyond the front-match could be consumed: either the
    /// tail is incomplete (open delimiter, unterminated string or block
    /// comment) and more
    /// input should be appended, or it failed to parse and diagnostics were
    /// recorded on the context sink.
    pub fn append_to_repl_unit(
        &mut self,
        unit: &mut TranslationUnit,
        repl: &mut ReplContext,
        buffer_end: ByteIndex,
    ) -> bool {
        repl.chunks += 1;
        let Some(buf) = self.sources.buffer(repl.buffer) else {
            return false;
        };
        let end = ByteIndex(buffer_end.0.min(buf.text.len()));
        if repl.offset.0 >= end.0 {
            return false;
        }

        let text = buf.text.as_str();
        let base = repl.offset.0;
        let slice = &text[base as usize..end.0 as usize];

        // Lex the new slice, then shift spans so they index the full buffer.
        let lex = Lexer::new(slice).lex();
        let mut tokens = lex.tokens;
        for t in &mut tokens {
            t.span = Span::new(t.span.start.0 + base, t.span.end.0 + base);
        }
        let mut lex_diags = lex.diagnostics;
        for d in &mut lex_diags {
            if let Some(s) = d.span {
                d.span = Some(Span::new(s.start.0 + base, s.end.0 + base));
            }
        }
        let open_at = lex.incomplete_at.map(|at| ByteIndex(at + base));

        let bump = Bump::new();
        let parse = Parser::new(&mut self.ctx, text, &tokens, &bump).parse_incremental(open_at);
        let consumed_any = !parse.items.is_empty();

        // Only report problems inside the region that was actually
        // consumed. The tail past it is still being typed whenever the
        // parser rolled back, and also when the lexer left a construct
        // open past the boundary: an unterminated block comment produces
        // no tokens at all, so the parser alone cannot see it.
        let boundary = parse.consumed.unwrap_or(repl.offset).0;
        let open_tail = open_at.is_some_and(|at| at.0 >= boundary);
        if parse.state == ReplState::NeedMore || open_tail {
            lex_diags.retain(|d| d.span.is_some_and(|s| s.end.0 <= boundary));
        }
        let id = repl.buffer;
        self.ctx
            .report_all(lex_diags.into_iter().map(|d| d.with_buffer(id)));
        self.ctx
            .report_all(parse.diagnostics.into_iter().map(|d| d.with_buffer(id)));

        if consumed_any {
            let mut globals = sema::Globals::with_builtins(&mut self.ctx);
            globals.absorb(&unit.items);
            let diags =
                sema::analyze_items(&mut self.ctx, &mut globals, &parse.items, unit.kind, true);
            self.ctx
                .report_all(diags.into_iter().map(|d| d.with_buffer(id)));
            unit.items.extend(parse.items);
        }

        if let Some(consumed) = parse.consumed {
            if consumed.0 > repl.offset.0 {
                repl.offset = ByteIndex(consumed.0.min(end.0));
            }
        }
        debug!(
            state = ?parse.state,
            offset = repl.offset.0,
            end = end.0,
            merged = consumed_any,
            "repl append"
        );
        consumed_any
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
