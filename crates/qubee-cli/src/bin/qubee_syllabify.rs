// qubee-syllabify: Split words into syllables.
//
// Output is one line per word: the syllables joined by the separator, and
// with --pattern the syllable shapes (CV, CVC, ...) after a tab.
//
// Usage:
//   qubee-syllabify [--separator SEP] [--pattern] [OPTIONS] [TEXT...]

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use qubee_cli::{CommonArgs, fatal};
use qubee_om::syllabifier::Syllabifier;

#[derive(Debug, Parser)]
#[command(name = "qubee-syllabify", version, about = "Syllabify Afaan Oromoo words")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// String placed between syllables
    #[arg(short, long, default_value = "-")]
    separator: String,

    /// Also print the shape of each syllable
    #[arg(short, long)]
    pattern: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let handle = cli.common.load_handle()?;
    let syllabifier = Syllabifier::new(handle.alphabet().clone());
    let input = cli.common.read_input()?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for word in handle.words(&input) {
        let syllables = syllabifier.split_into_syllables(&word);
        if cli.pattern {
            let shapes: Vec<String> = syllabifier
                .syllable_pattern(&word)
                .iter()
                .map(|s| s.to_string())
                .collect();
            writeln!(out, "{}\t{}", syllables.join(cli.separator.as_str()), shapes.join(" "))?;
        } else {
            writeln!(out, "{}", syllables.join(cli.separator.as_str()))?;
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
