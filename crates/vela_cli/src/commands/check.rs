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
    if let Err(e) = driver.build_translation_unit(name, &ids, options) {
        eprintln!("{e}");
        std::process::exit(2);
    }

    let diags = driver.ctx.take_diagnostics();
    emit_diagnostics(&driver.sources, ids[0], &diags, args.json_out);
    if has_errors(&diags) {
        std::process::exit(1);
    }
}
