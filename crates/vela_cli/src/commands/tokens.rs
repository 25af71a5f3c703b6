use std::io::Write;

use vela_frontend::Driver;
use vela_lexer::Lexer;
use vela_syntax::TokenKind;

use crate::args::CliArgs;
use crate::commands::emit_diagnostics;

pub(crate) fn run(args: &CliArgs) {
    if args.positional.len() != 1 {
        eprintln!("Missing <file>");
        std::process::exit(2);
    }
    let mut driver = Driver::new();
    let ids = crate::commands::load_buffers(&mut driver, &args.positional);
    let id = ids[0];
    let Some(buf) = driver.sources.buffer(id) else {
        return;
    };

    let lexed = Lexer::new(buf.text.as_str()).lex();
    emit_diagnostics(&driver.sources, id, &lexed.diagnostics, args.json_out);

    let mut out = std::io::stdout().lock();
    for t in &lexed.tokens {
        if matches!(t.kind, TokenKind::Newline) {
            continue;
        }
        let text = buf.text.slice(t.span);
        if let Err(e) = writeln!(out, "{:?}\t{:?}\t{}", t.kind, t.span, escape_visible(text)) {
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                return;
            }
            eprintln!("stdout error: {e}");
            std::process::exit(2);
        }
    }
}

fn escape_visible(s: &str) -> String {
    let mut out = String::new();
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
