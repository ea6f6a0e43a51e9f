// qubee-analyze: Per-word analysis of Qubee text.
//
// For every word prints the stem, lemma, syllables, part-of-speech tag and
// whether it is a stopword. --json prints the same data as a JSON array.
//
// Usage:
//   qubee-analyze [--json] [OPTIONS] [TEXT...]

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use qubee_cli::{CommonArgs, fatal};

#[derive(Debug, Parser)]
#[command(name = "qubee-analyze", version, about = "Analyze Afaan Oromoo words")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Print the analysis as a JSON array
    #[arg(long)]
    json: bool,

    /// Leave stopwords out of the output
    #[arg(long)]
    skip_stopwords: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let handle = cli.common.load_handle()?;
    let input = cli.common.read_input()?;

    let analysis: Vec<_> = handle
        .analyze(&input)
        .into_iter()
        .filter(|a| !(cli.skip_stopwords && a.is_stopword))
        .collect();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &analysis)?;
        writeln!(out)?;
    } else {
        for a in &analysis {
            writeln!(out, "{}", a.word)?;
            writeln!(out, "  STEM={}", a.stem)?;
            writeln!(out, "  LEMMA={}", a.lemma)?;
            writeln!(out, "  SYLLABLES={}", a.syllables.join("-"))?;
            writeln!(out, "  POS={} ({})", a.pos, a.pos.description())?;
            if a.is_stopword {
                writeln!(out, "  STOPWORD")?;
            }
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
