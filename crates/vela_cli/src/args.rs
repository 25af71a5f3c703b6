pub(crate) struct CliArgs {
    pub cmd: String,
    pub parse_only: bool,
    pub lib: bool,
    pub timing: bool,
    pub json_out: bool,
    pub positional: Vec<String>,
}

pub(crate) fn usage() -> &'static str {
    "Usage: vela <tokens|ast|check|repl> [--parse-only] [--lib] [--json] [--timing] <files>"
}

pub(crate) fn parse_args() -> Result<CliArgs, String> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();
    let cmd = argv.first().cloned().ok_or_else(|| usage().to_string())?;
    argv.remove(0);

    let mut parse_only = false;
    let mut lib = false;
    let mut timing = false;
    let mut json_out = false;
    let mut positional: Vec<String> = Vec::new();

    for a in argv {
        if a == "--parse-only" {
            parse_only = true;
        } else if a == "--lib" {
            lib = true;
        } else if a == "--timing" {
            timing = true;
        } else if a == "--json" {
            json_out = true;
        } else if a.starts_with("--") {
            return Err(format!("Unknown option: {a}"));
        } else {
            positional.push(a);
        }
    }

    Ok(CliArgs {
        cmd,
        parse_only,
        lib,
        timing,
        json_out,
        positional,
    })
}
