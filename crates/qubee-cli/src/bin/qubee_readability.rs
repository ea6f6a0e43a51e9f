// qubee-readability: Readability statistics for Qubee text.
//
// Reports sentence, word and syllable counts, Flesch reading ease with its
// level, and the descriptive text metrics (type-token ratio, average
// lengths, vowel/consonant counts, most frequent words).
//
// Usage:
//   qubee-readability [--json] [OPTIONS] [TEXT...]

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use qubee_cli::{CommonArgs, fatal};
use qubee_om::corpus::{Readability, TextMetrics};

#[derive(Debug, Parser)]
#[command(name = "qubee-readability", version, about = "Readability of Afaan Oromoo text")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Print the statistics as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Stats {
    readability: Readability,
    metrics: TextMetrics,
}

fn run(cli: &Cli) -> Result<()> {
    let handle = cli.common.load_handle()?;
    let input = cli.common.read_input()?;
    let stats = Stats {
        readability: handle.readability(&input),
        metrics: handle.metrics(&input),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &stats)?;
        writeln!(out)?;
    } else {
        let r = &stats.readability;
        let m = &stats.metrics;
        writeln!(out, "Sentences:                {}", r.sentences)?;
        writeln!(out, "Words:                    {}", r.words)?;
        writeln!(out, "Unique words:             {}", m.unique_words)?;
        writeln!(out, "Syllables:                {}", r.syllables)?;
        writeln!(out, "Characters:               {}", m.characters)?;
        writeln!(out)?;
        writeln!(out, "Words per sentence:       {:.2}", r.avg_words_per_sentence)?;
        writeln!(out, "Syllables per word:       {:.2}", r.avg_syllables_per_word)?;
        writeln!(out, "Average word length:      {:.2}", m.avg_word_length)?;
        writeln!(out, "Type-token ratio:         {:.3}", m.type_token_ratio)?;
        writeln!(out, "Vowel/consonant ratio:    {:.3}", m.vowel_consonant_ratio)?;
        writeln!(out)?;
        writeln!(out, "Flesch reading ease:      {:.1} ({})", r.flesch_score, r.level)?;
        if !m.top_words.is_empty() {
            writeln!(out)?;
            writeln!(out, "Most frequent words:")?;
            for (word, count) in &m.top_words {
                writeln!(out, "  {count:>5}  {word}")?;
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
