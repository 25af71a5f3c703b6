//! Session context.
use vela_syntax::{Diagnostic, Interner, Symbol, TypeInterner};

/// Owner of the interning tables and the diagnostic sink for one compilation
/// session. Created once and shared by every build and REPL append; outlives
/// every `TranslationUnit` it helps produce.
pub struct AstContext {
    pub symbols: Interner,
    pub types: TypeInterner,
    diagnostics: Vec<Diagnostic>,
}

impl AstContext {
    pub fn new() -> Self {
        Self {
            symbols: Interner::new(),
            types: TypeInterner::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn intern(&mut self, name: &str) -> Symbol {
        self.symbols.intern(name)
    }

    pub fn name(&self, sym: Symbol) -> &str {
        self.symbols.resolve(sym)
    }

    /// Record a diagnostic on the session sink. Recording never aborts a
    /// build; callers inspect the sink afterwards.
    pub fn report(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    pub fn report_all(&mut self, diags: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diags);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn had_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Drain the sink, e.g. after the driver has rendered one REPL step.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl Default for AstContext {
    fn default() -> Self {
        Self::new()
    }
}
