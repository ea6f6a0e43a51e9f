// Error type for the Afaan Oromoo language module.

use qubee_core::{AlphabetError, UnknownModeError};

/// Errors raised while constructing components, loading configuration or
/// persisting corpus output. Invalid characters in input text are never
/// errors; they are reported through `ValidationReport`.
#[derive(Debug, thiserror::Error)]
pub enum QubeeError {
    /// A custom alphabet violated one of its invariants.
    #[error("invalid alphabet: {0}")]
    Alphabet(#[from] AlphabetError),

    /// A validation mode string did not name a known mode.
    #[error(transparent)]
    UnknownMode(#[from] UnknownModeError),

    /// A stopword category name did not name a known category.
    #[error("unknown stopword category: {0:?}")]
    UnknownStopwordCategory(String),

    /// A configuration file could not be parsed.
    #[cfg(feature = "handle")]
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Corpus output could not be serialized.
    #[cfg(feature = "corpus")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
