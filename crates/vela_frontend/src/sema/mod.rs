//! Semantic analysis.
//!
//! Two-phase, per buffer: collect the top-level declarations into the module
//! scope, then resolve names and check annotations against it. Earlier
//! buffers (and, in the REPL, earlier appends) stay visible because their
//! declarations are already in `Globals` when later input is analyzed.
use std::collections::{HashMap, HashSet};

use vela_ast::{AstContext, FuncDecl, Item, UnitKind};
use vela_syntax::{BUILTIN_NAMES, Diagnostic, DiagnosticKind, Symbol, builtin_arity, codes};

mod resolve;
mod types;

/// Module-level scope: everything addressable by a bare name at top level.
pub(crate) struct Globals {
    /// Callables with their accepted (min, max) argument counts.
    pub functions: HashMap<Symbol, (usize, usize)>,
    /// Struct name -> field names.
    pub structs: HashMap<Symbol, Vec<Symbol>>,
    /// Enum name -> variant names.
    pub enums: HashMap<Symbol, Vec<Symbol>>,
    /// Top-level bindings and import aliases.
    pub values: HashSet<Symbol>,
}

impl Globals {
    pub fn with_builtins(ctx: &mut AstContext) -> Self {
        let mut this = Self {
            functions: HashMap::new(),
            structs: HashMap::new(),
            enums: HashMap::new(),
            values: HashSet::new(),
        };
        for name in BUILTIN_NAMES {
            let sym = ctx.intern(name);
            let arity = builtin_arity(name).unwrap_or((0, 0));
            this.functions.insert(sym, arity);
        }
        this
    }

    pub fn is_defined(&self, sym: Symbol) -> bool {
        self.functions.contains_key(&sym)
            || self.structs.contains_key(&sym)
            || self.enums.contains_key(&sym)
            || self.values.contains(&sym)
    }

    pub fn names(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.functions
            .keys()
            .chain(self.structs.keys())
            .chain(self.enums.keys())
            .chain(self.values.iter())
            .copied()
    }

    /// Record the declarations of `items`, silently. Used to seed the scope
    /// from a unit's existing history before a REPL append.
    pub fn absorb(&mut self, items: &[Item]) {
        for item in items {
            self.define(item);
        }
    }

    /// Record the declarations of `items`, reporting duplicates unless
    /// redefinition is allowed (REPL semantics: the latest wins).
    pub fn collect(
        &mut self,
        ctx: &AstContext,
        items: &[Item],
        allow_redefinition: bool,
        diags: &mut Vec<Diagnostic>,
    ) {
        for item in items {
            if let Some((name, span)) = item.declared_name() {
                if !allow_redefinition && self.is_defined(name) {
                    diags.push(
                        Diagnostic::error_kind(
                            DiagnosticKind::DuplicateDefinition(ctx.name(name).to_string()),
                            Some(span),
                        )
                        .with_code(codes::DUPLICATE_DEFINITION),
                    );
                }
            }
            self.define(item);
        }
    }

    fn define(&mut self, item: &Item) {
        match item {
            Item::Func(f) => {
                self.functions.insert(f.name, func_arity(f));
            }
            Item::Struct(s) => {
                self.structs
                    .insert(s.name, s.fields.iter().map(|f| f.name).collect());
            }
            Item::Enum(e) => {
                self.enums
                    .insert(e.name, e.variants.iter().map(|v| v.name).collect());
            }
            Item::Binding(b) => {
                self.values.insert(b.name);
            }
            Item::Import(i) => {
                self.values.insert(i.module);
            }
            Item::Stmt(_) | Item::Error(_) => {}
        }
    }
}

pub(crate) fn func_arity(f: &FuncDecl) -> (usize, usize) {
    let max = f.params.len();
    let min = f.params.iter().filter(|p| p.default.is_none()).count();
    (min, max)
}

/// Analyze one batch of freshly parsed items against (and into) `globals`.
pub(crate) fn analyze_items(
    ctx: &mut AstContext,
    globals: &mut Globals,
    items: &[Item],
    kind: UnitKind,
    allow_redefinition: bool,
) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    globals.collect(ctx, items, allow_redefinition, &mut diags);
    resolve::resolve_items(ctx, globals, items, kind, &mut diags);
    types::check_types(ctx, globals, items, &mut diags);
    diags
}
