//! Annotation checking: every written type must name something that exists.
use vela_ast::{AstContext, Item, Stmt, TypeRef};
use vela_syntax::{
    Diagnostic, DiagnosticKind, DiagnosticsFormatter, Type, TypeId, codes, find_best_match,
};

use super::Globals;

const BUILTIN_TYPE_NAMES: [&str; 6] = ["Any", "Unit", "Bool", "Int", "Float", "String"];

pub(crate) fn check_types(
    ctx: &mut AstContext,
    globals: &Globals,
    items: &[Item],
    diags: &mut Vec<Diagnostic>,
) {
    for item in items {
        match item {
            Item::Func(f) => {
                for p in &f.params {
                    if let Some(ty) = &p.ty {
                        resolve_type_ref(ctx, globals, ty, diags);
                    }
                }
                if let Some(ret) = &f.return_ty {
                    resolve_type_ref(ctx, globals, ret, diags);
                }
                check_stmts(ctx, globals, &f.body, diags);
            }
            Item::Struct(s) => {
                for field in &s.fields {
                    resolve_type_ref(ctx, globals, &field.ty, diags);
                }
            }
            Item::Binding(b) => {
                if let Some(ty) = &b.ty {
                    resolve_type_ref(ctx, globals, ty, diags);
                }
            }
            Item::Stmt(s) => check_stmt(ctx, globals, s, diags),
            Item::Import(_) | Item::Enum(_) | Item::Error(_) => {}
        }
    }
}

fn check_stmts(ctx: &mut AstContext, globals: &Globals, stmts: &[Stmt], diags: &mut Vec<Diagnostic>) {
    for stmt in stmts {
        check_stmt(ctx, globals, stmt, diags);
    }
}

fn check_stmt(ctx: &mut AstContext, globals: &Globals, stmt: &Stmt, diags: &mut Vec<Diagnostic>) {
    match stmt {
        Stmt::Binding(b) => {
            if let Some(ty) = &b.ty {
                resolve_type_ref(ctx, globals, ty, diags);
            }
        }
        Stmt::If(i) => {
            for (_, body) in &i.branches {
                check_stmts(ctx, globals, body, diags);
            }
            if let Some(body) = &i.else_branch {
                check_stmts(ctx, globals, body, diags);
            }
        }
        Stmt::While(w) => check_stmts(ctx, globals, &w.body, diags),
        Stmt::ForIn(f) => check_stmts(ctx, globals, &f.body, diags),
        Stmt::Block(stmts) => check_stmts(ctx, globals, stmts, diags),
        Stmt::Assign(_)
        | Stmt::Return(..)
        | Stmt::Break(_)
        | Stmt::Continue(_)
        | Stmt::Expr(_)
        | Stmt::Error(_) => {}
    }
}

/// Resolve one written annotation to an interned type. Unknown names report
/// a diagnostic and fall back to `Any` so one bad annotation does not
/// cascade.
pub(crate) fn resolve_type_ref(
    ctx: &mut AstContext,
    globals: &Globals,
    tr: &TypeRef,
    diags: &mut Vec<Diagnostic>,
) -> TypeId {
    let name = ctx.symbols.resolve(tr.name).to_string();
    if name == "Array" {
        let elem = match tr.params.first() {
            Some(p) => resolve_type_ref(ctx, globals, p, diags),
            None => ctx.types.intern(Type::Any),
        };
        return ctx.types.array(elem);
    }
    if let Some(id) = ctx.types.builtin_by_name(&name) {
        return id;
    }
    if globals.structs.contains_key(&tr.name) || globals.enums.contains_key(&tr.name) {
        return ctx.types.named(tr.name);
    }

    let mut diag = Diagnostic::error_kind(DiagnosticKind::UnknownType(name.clone()), Some(tr.span))
        .with_code(codes::UNKNOWN_TYPE);
    let named: Vec<String> = globals
        .structs
        .keys()
        .chain(globals.enums.keys())
        .map(|s| ctx.symbols.resolve(*s).to_string())
        .collect();
    let candidates = BUILTIN_TYPE_NAMES
        .into_iter()
        .chain(named.iter().map(String::as_str));
    if let Some(suggested) = find_best_match(&name, candidates) {
        diag = diag.with_suggestion(DiagnosticsFormatter::format(&DiagnosticKind::DidYouMean(
            suggested.to_string(),
        )));
    }
    diags.push(diag);
    ctx.types.intern(Type::Any)
}
