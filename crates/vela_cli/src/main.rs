#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod args;
mod commands;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match args::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{}", args::usage());
            std::process::exit(2);
        }
    };

    match args.cmd.as_str() {
        "tokens" => commands::tokens::run(&args),
        "ast" => commands::ast::run(&args),
        "check" => commands::check::run(&args),
        "repl" => commands::repl::run(&args),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!("{}", args::usage());
            std::process::exit(2);
        }
    }
}
