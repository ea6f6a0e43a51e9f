// Character and word validation against the Qubee alphabet.
//
// Invalid characters are data, not errors: every check returns a report.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use qubee_core::character::simple_upper;
use qubee_core::{Alphabet, CharClass, ValidationMode};

use crate::normalizer::compose;
use crate::oromo::constants::LICENSED_TRIPLE_CLUSTERS;
use crate::oromo::units::{Unit, scan_units};

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Result of character validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    /// Distinct offending characters in first-seen order.
    pub invalid_chars: Vec<char>,
}

impl ValidationReport {
    fn from_invalid(invalid_chars: Vec<char>) -> Self {
        Self {
            is_valid: invalid_chars.is_empty(),
            invalid_chars,
        }
    }
}

/// A problem found by [`Validator::validate_word`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WordIssue {
    /// Characters rejected by strict validation.
    InvalidChars(Vec<char>),
    Empty,
    NoVowel,
    /// Two adjacent vowels that are not a long vowel, e.g. `AO`.
    VowelSequence(String),
    /// Three consonant units in a row outside the licensed clusters.
    ConsonantCluster(String),
}

impl fmt::Display for WordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordIssue::InvalidChars(chars) => write!(f, "invalid characters: {chars:?}"),
            WordIssue::Empty => f.write_str("word is empty"),
            WordIssue::NoVowel => f.write_str("word contains no vowels"),
            WordIssue::VowelSequence(seq) => write!(f, "uncommon vowel sequence '{seq}'"),
            WordIssue::ConsonantCluster(seq) => {
                write!(f, "three-consonant cluster '{seq}' might be invalid")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Validator {
    alphabet: Arc<Alphabet>,
}

impl Validator {
    pub fn new(alphabet: Arc<Alphabet>) -> Self {
        Self { alphabet }
    }

    /// Whether `c` is accepted under `mode`. Whitespace is always accepted.
    pub fn is_allowed(&self, c: char, mode: ValidationMode) -> bool {
        if c.is_whitespace() || self.alphabet.is_qubee_letter(c) {
            return true;
        }
        match mode {
            ValidationMode::Lenient => self.alphabet.is_punctuation(c),
            ValidationMode::Strict => self.alphabet.is_connector(c),
        }
    }

    /// Check every character of `text` after canonical composition, so a
    /// decomposed accent is judged with its base letter. Empty input is
    /// valid.
    pub fn validate(&self, text: &str, mode: ValidationMode) -> ValidationReport {
        let mut invalid = Vec::new();
        for c in compose(text).chars() {
            if !self.is_allowed(c, mode) && !invalid.contains(&c) {
                invalid.push(c);
            }
        }
        ValidationReport::from_invalid(invalid)
    }

    // -- Word level --------------------------------------------------------

    /// Word-level plausibility check. Character problems and missing vowels
    /// stop the check early; sequence problems are all collected.
    pub fn validate_word(&self, word: &str) -> (bool, Vec<WordIssue>) {
        let word = compose(word);
        let word = word.as_ref();
        let report = self.validate(word, ValidationMode::Strict);
        if !report.is_valid {
            return (false, vec![WordIssue::InvalidChars(report.invalid_chars)]);
        }
        if word.is_empty() {
            return (false, vec![WordIssue::Empty]);
        }
        if !self.alphabet.has_vowel(word) {
            return (false, vec![WordIssue::NoVowel]);
        }

        let mut issues: Vec<WordIssue> = self
            .vowel_sequences(word)
            .into_iter()
            .map(WordIssue::VowelSequence)
            .collect();
        issues.extend(
            self.consonant_clusters(word)
                .into_iter()
                .map(WordIssue::ConsonantCluster),
        );

        (issues.is_empty(), issues)
    }

    /// Uncommon vowel sequences, per whitespace-separated word.
    pub fn check_phonotactics(&self, text: &str) -> Vec<(String, WordIssue)> {
        compose(text)
            .split_whitespace()
            .flat_map(|word| {
                self.vowel_sequences(word)
                    .into_iter()
                    .map(move |seq| (word.to_string(), WordIssue::VowelSequence(seq)))
            })
            .collect()
    }

    /// Whether `syllable` has one of the shapes V, VC, CV, CVC, counting
    /// digraphs and long vowels as one unit.
    pub fn is_valid_syllable(&self, syllable: &str) -> bool {
        let units = scan_units(&self.alphabet, syllable);
        let mut rest = units.as_slice();

        if let [first, tail @ ..] = rest {
            if first.is_consonant() {
                rest = tail;
            }
        }
        match rest {
            [v] => v.is_vowel(),
            [v, c] => v.is_vowel() && c.is_consonant(),
            _ => false,
        }
    }

    // -- Internals ---------------------------------------------------------

    fn vowel_sequences(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().map(|c| simple_upper(self.alphabet.fold(c))).collect();
        let mut found = Vec::new();
        for pair in chars.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if self.alphabet.is_vowel(a)
                && self.alphabet.is_vowel(b)
                && self.alphabet.pair_class(a, b) != Some(CharClass::Vowel)
            {
                found.push([a, b].iter().collect());
            }
        }
        found
    }

    /// Runs of three consonant units. A geminate (the same consonant
    /// twice) counts as one unit.
    fn consonant_clusters(&self, word: &str) -> Vec<String> {
        let units = scan_units(&self.alphabet, word);
        let mut merged: Vec<Unit> = Vec::with_capacity(units.len());
        for unit in units {
            if let Some(last) = merged.last_mut() {
                let geminate = last.is_consonant()
                    && unit.is_consonant()
                    && last.as_str(word).eq_ignore_ascii_case(unit.as_str(word));
                if geminate {
                    last.end = unit.end;
                    continue;
                }
            }
            merged.push(unit);
        }

        let mut found = Vec::new();
        for window in merged.windows(3) {
            if window.iter().all(Unit::is_consonant) {
                let cluster: String = word[window[0].start..window[2].end]
                    .chars()
                    .map(|c| simple_upper(self.alphabet.fold(c)))
                    .collect();
                if !LICENSED_TRIPLE_CLUSTERS.contains(&cluster.as_str()) {
                    found.push(cluster);
                }
            }
        }
        found
    }
}
