// qubee-stem: Print the stem of every word.
//
// Output is one `WORD<TAB>STEM` line per word.
//
// Usage:
//   qubee-stem [--aggressive] [OPTIONS] [TEXT...]

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use qubee_cli::{CommonArgs, fatal};

#[derive(Debug, Parser)]
#[command(name = "qubee-stem", version, about = "Stem Afaan Oromoo words")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Also strip short, ambiguous suffixes
    #[arg(short, long)]
    aggressive: bool,

    /// Print only the distinct stems, one per line
    #[arg(short, long)]
    unique: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let mut handle = cli.common.load_handle()?;
    if cli.aggressive {
        handle.set_aggressive(true);
    }
    let input = cli.common.read_input()?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if cli.unique {
        let mut stems: Vec<String> = handle.words(&input).iter().map(|w| handle.stem(w)).collect();
        stems.sort_unstable();
        stems.dedup();
        for stem in stems {
            writeln!(out, "{stem}")?;
        }
    } else {
        for word in handle.words(&input) {
            writeln!(out, "{word}\t{}", handle.stem(&word))?;
        }
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
