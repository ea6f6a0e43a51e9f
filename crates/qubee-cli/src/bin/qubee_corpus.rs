// qubee-corpus: Run the document pipeline over files.
//
// Every input file is one document (its path is the id). Output is JSON
// lines: id, invalid characters, sentences, tokens and stems.
//
// Usage:
//   qubee-corpus [OPTIONS] FILE...
//
// Options:
//   -o, --output FILE     Write to FILE instead of stdout
//   --vocabulary N        Print the words seen at least N times to stderr

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use qubee_cli::{fatal, init_logging, load_handle};
use qubee_om::corpus::{Document, vocabulary, write_jsonl};

#[derive(Debug, Parser)]
#[command(name = "qubee-corpus", version, about = "Process Afaan Oromoo documents into JSON lines")]
struct Cli {
    /// Input text files, one document each
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print words seen at least N times across the corpus to stderr
    #[arg(long, value_name = "N")]
    vocabulary: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<()> {
    let handle = load_handle(cli.config.as_deref())?;

    let docs = cli
        .files
        .iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(Document::new(path.display().to_string(), text))
        })
        .collect::<Result<Vec<_>>>()?;

    info!("processing {} documents", docs.len());
    let processed = handle.pipeline().process_batch(&docs);

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_jsonl(&processed, BufWriter::new(file))?;
        }
        None => write_jsonl(&processed, BufWriter::new(io::stdout().lock()))?,
    }

    if let Some(min_count) = cli.vocabulary {
        let stderr = io::stderr();
        let mut err = stderr.lock();
        for (word, count) in vocabulary(&processed, min_count) {
            writeln!(err, "{count:>7}  {word}")?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(&cli) {
        fatal(&e);
    }
}
