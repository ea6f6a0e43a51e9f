// qubee-validate: Check text against the Qubee character whitelist.
//
// Exit status:
//   0  every character is allowed
//   1  invalid characters were found
//   2  usage, configuration or I/O error
//
// Usage:
//   qubee-validate [OPTIONS] [TEXT...]

use std::io::{self, Write};
use std::process;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use qubee_cli::{CommonArgs, fatal};
use qubee_core::ValidationMode;

#[derive(Debug, Parser)]
#[command(name = "qubee-validate", version, about = "Validate Afaan Oromoo text")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Only letters, apostrophe, hyphen and whitespace are allowed
    #[arg(short, long)]
    strict: bool,

    /// Also report words with unusual vowel sequences or consonant clusters
    #[arg(short, long)]
    phonotactics: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    mode: ValidationMode,
    is_valid: bool,
    invalid_chars: Vec<char>,
    warnings: Vec<Warning>,
}

#[derive(Serialize)]
struct Warning {
    word: String,
    issue: String,
}

fn run(cli: &Cli) -> Result<bool> {
    let mut handle = cli.common.load_handle()?;
    if cli.strict {
        handle.set_mode(ValidationMode::Strict);
    }
    let input = cli.common.read_input()?;
    let result = handle.validate(&input);

    let warnings = if cli.phonotactics {
        handle
            .check_phonotactics(&input)
            .into_iter()
            .map(|(word, issue)| Warning {
                word,
                issue: issue.to_string(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let report = Report {
        mode: handle.config().mode,
        is_valid: result.is_valid,
        invalid_chars: result.invalid_chars,
        warnings,
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else if report.is_valid {
        writeln!(out, "valid ({} mode)", report.mode)?;
    } else {
        let chars: Vec<String> = report
            .invalid_chars
            .iter()
            .map(|c| format!("{c:?} U+{:04X}", *c as u32))
            .collect();
        writeln!(out, "invalid ({} mode): {}", report.mode, chars.join(", "))?;
    }
    if !cli.json {
        for w in &report.warnings {
            writeln!(out, "warning: {}: {}", w.word, w.issue)?;
        }
    }
    out.flush()?;
    Ok(report.is_valid)
}

fn main() {
    let cli = Cli::parse();
    cli.common.init_logging();
    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => fatal(&e),
    }
}
