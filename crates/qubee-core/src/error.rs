// Error types shared by every Qubee crate.

/// Raised when an alphabet definition violates one of its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    /// The alphabet defines no vowels, so no word could ever be stemmed or
    /// syllabified.
    #[error("alphabet has no vowels")]
    NoVowels,

    /// A letter appears in both the vowel and the consonant set.
    #[error("letter '{0}' is classified as both vowel and consonant")]
    OverlappingClasses(char),

    /// A decorated letter maps to something that is not a vowel.
    #[error("diacritic '{key}' maps to '{base}', which is not a vowel")]
    DiacriticNotVowel { key: char, base: char },

    /// A consonant digraph is not made of exactly two consonants.
    #[error("digraph {0:?} must consist of two consonants")]
    InvalidDigraph(String),

    /// A diphthong / long vowel is not made of exactly two vowels.
    #[error("diphthong {0:?} must consist of two vowels")]
    InvalidDiphthong(String),
}

/// Raised when a mode name given as a string (config file, command line)
/// does not name a known mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation mode {0:?} (expected \"lenient\" or \"strict\")")]
pub struct UnknownModeError(pub String);
