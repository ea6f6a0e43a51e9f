// qubee-tokenize: Split text into word or sentence tokens.
//
// Prints one token per line with its character span in the input, or a
// JSON array with --json.
//
// Usage:
//   qubee-tokenize [OPTIONS] [TEXT...]
//
// Options:
//   --sentences   Sentence tokens instead of words
//   --json        JSON output

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use qubee_cli::{CommonArgs, escape, fatal};

#[derive(Debug, Parser)]
#[command(name = "qubee-tokenize", version, about = "Tokenize Afaan Oromoo text")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Print sentences instead of words
    #[arg(short, long)]
    sentences: bool,

    /// Print tokens as a JSON array
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let handle = cli.common.load_handle()?;
    let input = cli.common.read_input()?;

    let tokens = if cli.sentences {
        handle.sentence_tokens(&input)
    } else {
        handle.tokens(&input)
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &tokens)?;
        writeln!(out)?;
    } else {
        for token in &tokens {
            writeln!(
                out,
                "[{:>5}..{:>5}]: {}",
                token.start,
                token.end,
                escape(&token.text)
            )?;
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
