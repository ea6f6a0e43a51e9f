// qubee-cli: shared utilities for the command-line tools.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Args;

use qubee_om::QubeeHandle;

/// Exit code for usage, configuration and I/O errors.
pub const EXIT_ERROR: i32 = 2;

/// Input, configuration and logging options shared by every tool.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Text to process. Read from --file or stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn init_logging(&self) {
        init_logging(self.verbose);
    }

    /// Text arguments joined by spaces, the file contents, or stdin.
    pub fn read_input(&self) -> Result<String> {
        if !self.text.is_empty() {
            return Ok(self.text.join(" "));
        }
        if let Some(path) = &self.file {
            return fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        Ok(input)
    }

    pub fn load_handle(&self) -> Result<QubeeHandle> {
        load_handle(self.config.as_deref())
    }
}

/// Initialize logging. `RUST_LOG` takes precedence over the verbosity
/// count.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Handle built from a TOML config file, or the defaults.
pub fn load_handle(config: Option<&Path>) -> Result<QubeeHandle> {
    match config {
        Some(path) => QubeeHandle::from_config_path(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(QubeeHandle::new()),
    }
}

/// Print an error with its causes and exit with [`EXIT_ERROR`].
pub fn fatal(err: &anyhow::Error) -> ! {
    eprintln!("error: {err:#}");
    process::exit(EXIT_ERROR);
}

/// Escape control characters for one-line display.
pub fn escape(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
