use std::io::Write;

use vela_frontend::{BuildOptions, Driver};

use crate::args::CliArgs;
use crate::commands::{emit_diagnostics, has_errors, load_buffers};

pub(crate) fn run(args: &CliArgs) {
    if args.positional.is_empty() {
        eprintln!("Missing <files>");
        std::process::exit(2);
    }
    let mut driver = Driver::new();
    let ids = load_buffers(&mut driver, &args.positional);

    let options = BuildOptions {
        parse_only: args.parse_only,
        main_module: !args.lib,
    };
    let name = args.positional[0].as_str();
    let (unit, tm) = match driver.build_translation_unit_timed(name, &ids, options) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let diags = driver.ctx.take_diagnostics();
    emit_diagnostics(&driver.sources, ids[0], &diags, args.json_out);
    if has_errors(&diags) {
        std::process::exit(1);
    }

    let mut out = std::io::stdout().lock();
    if args.timing {
        let _ = writeln!(
            out,
            "TIMING lex={:.3}ms parse={:.3}ms analyze={:.3}ms",
            (tm.lex_us as f64) / 1000.0,
            (tm.parse_us as f64) / 1000.0,
            (tm.analyze_us as f64) / 1000.0,
        );
    }
    if let Err(e) = writeln!(out, "{:#?}", unit) {
        if e.kind() == std::io::ErrorKind::BrokenPipe {
            return;
        }
        eprintln!("stdout error: {e}");
        std::process::exit(2);
    }
}
