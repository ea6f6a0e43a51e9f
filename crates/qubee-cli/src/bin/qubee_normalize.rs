// qubee-normalize: Normalize Qubee text.
//
// Folds diacritics, standardizes quotes and dashes, replaces characters
// outside the lenient whitelist with spaces, collapses whitespace and
// uppercases (unless preserve_case is set in the config).
//
// Usage:
//   qubee-normalize [OPTIONS] [TEXT...]
//
// With --lines each input line is normalized separately.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use qubee_cli::{CommonArgs, fatal};

#[derive(Debug, Parser)]
#[command(name = "qubee-normalize", version, about = "Normalize Afaan Oromoo text")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Normalize each line separately instead of the whole input
    #[arg(short, long)]
    lines: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let handle = cli.common.load_handle()?;
    let input = cli.common.read_input()?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if cli.lines {
        for line in input.lines() {
            writeln!(out, "{}", handle.normalize(line))?;
        }
    } else {
        writeln!(out, "{}", handle.normalize(&input))?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    cli.common.init_logging();
    if let Err(e) = run(&cli) {
        fatal(&e);
    }
}
