//! Name resolution and call checking.
use std::collections::HashSet;

use vela_ast::{AstContext, Expr, FuncDecl, Item, Stmt, UnitKind};
use vela_syntax::{
    Diagnostic, DiagnosticKind, DiagnosticsFormatter, Span, Symbol, codes, find_best_match,
};

use super::Globals;

pub(crate) fn resolve_items(
    ctx: &AstContext,
    globals: &Globals,
    items: &[Item],
    kind: UnitKind,
    diags: &mut Vec<Diagnostic>,
) {
    let mut r = Resolver {
        ctx,
        globals,
        scopes: vec![HashSet::new()],
        loop_depth: 0,
        in_func: false,
        diags,
    };
    for item in items {
        match item {
            Item::Func(f) => r.resolve_func(f),
            Item::Binding(b) => r.resolve_expr(&b.value),
            Item::Stmt(s) => {
                if kind == UnitKind::Library {
                    r.diags.push(
                        Diagnostic::error_kind(
                            DiagnosticKind::TopLevelCodeInLibrary,
                            stmt_span(s),
                        )
                        .with_code(codes::TOP_LEVEL_CODE_IN_LIBRARY),
                    );
                }
                r.resolve_stmt(s);
            }
            Item::Import(_) | Item::Struct(_) | Item::Enum(_) | Item::Error(_) => {}
        }
    }
}

struct Resolver<'a> {
    ctx: &'a AstContext,
    globals: &'a Globals,
    scopes: Vec<HashSet<Symbol>>,
    loop_depth: u32,
    in_func: bool,
    diags: &'a mut Vec<Diagnostic>,
}

impl Resolver<'_> {
    fn define(&mut self, sym: Symbol) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(sym);
        }
    }

    fn is_visible(&self, sym: Symbol) -> bool {
        self.scopes.iter().rev().any(|s| s.contains(&sym)) || self.globals.is_defined(sym)
    }

    fn resolve_func(&mut self, f: &FuncDecl) {
        self.scopes.push(HashSet::new());
        for p in &f.params {
            if let Some(default) = &p.default {
                self.resolve_expr(default);
            }
            self.define(p.name);
        }
        let was_in_func = self.in_func;
        self.in_func = true;
        for stmt in &f.body {
            self.resolve_stmt(stmt);
        }
        self.in_func = was_in_func;
        self.scopes.pop();
    }

    fn resolve_block(&mut self, stmts: &[Stmt]) {
        self.scopes.push(HashSet::new());
        for stmt in stmts {
            self.resolve_stmt(stmt);
        }
        self.scopes.pop();
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Binding(b) => {
                self.resolve_expr(&b.value);
                self.define(b.name);
            }
            Stmt::Assign(a) => {
                self.resolve_expr(&a.target);
                self.resolve_expr(&a.value);
            }
            Stmt::If(i) => {
                for (cond, body) in &i.branches {
                    self.resolve_expr(cond);
                    self.resolve_block(body);
                }
                if let Some(body) = &i.else_branch {
                    self.resolve_block(body);
                }
            }
            Stmt::While(w) => {
                self.resolve_expr(&w.cond);
                self.loop_depth += 1;
                self.resolve_block(&w.body);
                self.loop_depth -= 1;
            }
            Stmt::ForIn(f) => {
                self.resolve_expr(&f.iter);
                self.scopes.push(HashSet::new());
                self.define(f.var);
                self.loop_depth += 1;
                for stmt in &f.body {
                    self.resolve_stmt(stmt);
                }
                self.loop_depth -= 1;
                self.scopes.pop();
            }
            Stmt::Return(value, span) => {
                if !self.in_func {
                    self.diags.push(Diagnostic::error_kind(
                        DiagnosticKind::ReturnOutsideFunction,
                        Some(*span),
                    ));
                }
                if let Some(value) = value {
                    self.resolve_expr(value);
                }
            }
            Stmt::Break(span) => self.check_in_loop("break", *span),
            Stmt::Continue(span) => self.check_in_loop("continue", *span),
            Stmt::Block(stmts) => self.resolve_block(stmts),
            Stmt::Expr(e) => self.resolve_expr(e),
            Stmt::Error(_) => {}
        }
    }

    fn check_in_loop(&mut self, kw: &'static str, span: Span) {
        if self.loop_depth == 0 {
            self.diags.push(
                Diagnostic::error_kind(DiagnosticKind::StrayControlFlow(kw), Some(span))
                    .with_code(codes::STRAY_CONTROL_FLOW),
            );
        }
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(sym, span) => {
                if !self.is_visible(*sym) {
                    self.report_undefined(*sym, *span);
                }
            }
            Expr::Member(m) => {
                // `Enum.variant` is a member access on the type name itself.
                if let Expr::Ident(sym, _) = &m.object {
                    if let Some(variants) = self.globals.enums.get(sym) {
                        if !variants.contains(&m.field) {
                            self.diags.push(Diagnostic::error_kind(
                                DiagnosticKind::UnknownEnumVariant(
                                    self.ctx.name(*sym).to_string(),
                                    self.ctx.name(m.field).to_string(),
                                ),
                                Some(m.field_span),
                            ));
                        }
                        return;
                    }
                }
                self.resolve_expr(&m.object);
            }
            Expr::Call(c) => {
                self.resolve_expr(&c.callee);
                for arg in &c.args {
                    self.resolve_expr(arg);
                }
                if let Expr::Ident(sym, _) = &c.callee {
                    self.check_arity(*sym, c.args.len(), c.span);
                }
            }
            Expr::Index(i) => {
                self.resolve_expr(&i.object);
                self.resolve_expr(&i.index);
            }
            Expr::Array(items) => {
                for item in items {
                    self.resolve_expr(item);
                }
            }
            Expr::Range(start, end) => {
                self.resolve_expr(start);
                self.resolve_expr(end);
            }
            Expr::Unary { expr, .. } => self.resolve_expr(expr),
            Expr::Binary { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }
            Expr::Group(inner) => self.resolve_expr(inner),
            Expr::Int(_)
            | Expr::Float(_)
            | Expr::Str(_)
            | Expr::Bool(_)
            | Expr::Nil
            | Expr::Error(_) => {}
        }
    }

    fn report_undefined(&mut self, sym: Symbol, span: Span) {
        let name = self.ctx.name(sym);
        let mut diag = Diagnostic::error_kind(
            DiagnosticKind::UndefinedIdentifier(name.to_string()),
            Some(span),
        )
        .with_code(codes::UNDEFINED_IDENTIFIER);

        let candidates: Vec<&str> = self
            .scopes
            .iter()
            .flat_map(|s| s.iter().copied())
            .chain(self.globals.names())
            .map(|s| self.ctx.name(s))
            .collect();
        if let Some(suggested) = find_best_match(name, candidates.into_iter()) {
            diag = diag.with_suggestion(DiagnosticsFormatter::format(&DiagnosticKind::DidYouMean(
                suggested.to_string(),
            )));
        }
        self.diags.push(diag);
    }

    fn check_arity(&mut self, sym: Symbol, actual: usize, span: Span) {
        let expected = if let Some(&arity) = self.globals.functions.get(&sym) {
            Some(arity)
        } else {
            // Struct constructor: one positional argument per field.
            self.globals
                .structs
                .get(&sym)
                .map(|fields| (fields.len(), fields.len()))
        };
        let Some((min, max)) = expected else {
            return;
        };
        if actual < min || actual > max {
            self.diags.push(
                Diagnostic::error_kind(
                    DiagnosticKind::ArgumentCountMismatch {
                        name: self.ctx.name(sym).to_string(),
                        expected_min: min,
                        expected_max: max,
                        actual,
                    },
                    Some(span),
                )
                .with_code(codes::ARGUMENT_COUNT_MISMATCH),
            );
        }
    }
}

/// Best-effort span for a statement; not every node records one.
fn stmt_span(stmt: &Stmt) -> Option<Span> {
    match stmt {
        Stmt::Binding(b) => Some(b.name_span),
        Stmt::Assign(a) => Some(a.span),
        Stmt::If(i) => i.branches.first().and_then(|(cond, _)| expr_span(cond)),
        Stmt::While(w) => expr_span(&w.cond),
        Stmt::ForIn(f) => Some(f.var_span),
        Stmt::Return(_, span) | Stmt::Break(span) | Stmt::Continue(span) | Stmt::Error(span) => {
            Some(*span)
        }
        Stmt::Block(stmts) => stmts.first().and_then(stmt_span),
        Stmt::Expr(e) => expr_span(e),
    }
}

fn expr_span(expr: &Expr) -> Option<Span> {
    match expr {
        Expr::Ident(_, span) | Expr::Error(span) => Some(*span),
        Expr::Call(c) => Some(c.span),
        Expr::Member(m) => expr_span(&m.object).or(Some(m.field_span)),
        Expr::Index(i) => expr_span(&i.object),
        Expr::Range(start, _) => expr_span(start),
        Expr::Unary { expr, .. } | Expr::Group(expr) => expr_span(expr),
        Expr::Binary { left, right, .. } => expr_span(left).or_else(|| expr_span(right)),
        Expr::Array(items) => items.first().and_then(expr_span),
        _ => None,
    }
}
