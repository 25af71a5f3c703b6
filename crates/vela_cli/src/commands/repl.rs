use std::io::{BufRead, Write};

use vela_ast::{TranslationUnit, UnitKind};
use vela_frontend::{Driver, ReplContext};

use crate::args::CliArgs;
use crate::commands::emit_diagnostics;

pub(crate) fn run(args: &CliArgs) {
    let mut driver = Driver::new();
    let buffer = driver.add_buffer("<repl>", String::new());
    let mut repl = ReplContext::new(buffer);
    let mut unit = TranslationUnit::new("repl", UnitKind::Main);

    let stdin = std::io::stdin();
    let mut stdin = stdin.lock();
    let mut line = String::new();
    let mut pending = false;

    loop {
        {
            let mut out = std::io::stdout().lock();
            let prompt = if pending { "....> " } else { "vela> " };
            let _ = write!(out, "{prompt}");
            let _ = out.flush();
        }
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("stdin error: {e}");
                std::process::exit(2);
            }
        }

        let Some(end) = driver.sources.extend_buffer(buffer, &line) else {
            break;
        };
        let merged = driver.append_to_repl_unit(&mut unit, &mut repl, end);

        let diags = driver.ctx.take_diagnostics();
        emit_diagnostics(&driver.sources, buffer, &diags, args.json_out);
        // An error reported past the cursor means the tail was rejected,
        // even when a leading item merged first. It will never parse;
        // drop it rather than re-report it on every subsequent line.
        let tail_rejected = diags
            .iter()
            .any(|d| d.is_error() && d.span.is_some_and(|s| s.end.0 > repl.offset.0));
        if tail_rejected {
            repl.skip_to(end);
        }
        pending = !merged && repl.offset.0 < end.0;
    }
}
