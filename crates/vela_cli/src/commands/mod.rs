use serde_json::json;
use vela_frontend::Driver;
use vela_syntax::{BufferId, Diagnostic, Severity, SourceManager, render_diagnostic};

pub(crate) mod ast;
pub(crate) mod check;
pub(crate) mod repl;
pub(crate) mod tokens;

/// Read each path into a registered buffer. Any unreadable file is fatal.
pub(crate) fn load_buffers(driver: &mut Driver, paths: &[String]) -> Vec<BufferId> {
    let mut ids = Vec::with_capacity(paths.len());
    for path in paths {
        match std::fs::read_to_string(path) {
            Ok(text) => ids.push(driver.add_buffer(path.clone(), text)),
            Err(e) => {
                eprintln!("{path}: {e}");
                std::process::exit(2);
            }
        }
    }
    ids
}

pub(crate) fn emit_diagnostics(
    sources: &SourceManager,
    fallback: BufferId,
    diagnostics: &[Diagnostic],
    json_out: bool,
) {
    for d in diagnostics {
        let Some(buf) = sources.buffer(d.buffer.unwrap_or(fallback)) else {
            continue;
        };
        if json_out {
            let span = d.span.map(|s| json!({ "start": s.start.0, "end": s.end.0 }));
            let obj = json!({
                "severity": match d.severity { Severity::Error => "error", Severity::Warning => "warning" },
                "code": d.code,
                "message": d.message,
                "suggestion": d.suggestion,
                "span": span,
                "file": buf.name,
            });
            println!("{}", obj);
        } else {
            eprintln!("{}", render_diagnostic(buf, d));
        }
    }
}

pub(crate) fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}
