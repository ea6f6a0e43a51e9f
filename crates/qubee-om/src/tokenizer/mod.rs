// Word and sentence tokenization for Qubee text.
//
// Scanning works on `&[char]` of the canonically composed (NFC) text, so
// every offset is a character offset into that form. For text that is
// already composed this is the source text itself. Token surfaces are
// produced by the normalizer, so they are folded and cased the same way
// as normalized text.

use std::sync::Arc;

use hashbrown::HashSet;
use serde::Serialize;

use qubee_core::character::{
    is_closing_punctuation, is_sentence_terminal, is_word_char, is_word_connector, simple_upper,
};
use qubee_core::{Alphabet, Token, ValidationMode};

use crate::normalizer::{Normalizer, NormalizerOptions, compose};
use crate::oromo::constants::DEFAULT_ABBREVIATIONS;
use crate::validator::{ValidationReport, Validator};

/// Callback deciding whether the word just before a period is an
/// abbreviation (the period then does not end the sentence).
type AbbreviationFn<'a> = &'a dyn Fn(&[char]) -> bool;

// ============================================================================
// Scanning
// ============================================================================

/// Length of the word starting at the beginning of `text`, or 0 when
/// `text` does not start with a word character.
///
/// Letters and digits form words. An apostrophe or hyphen stays inside the
/// word when a word character follows it (`waa'ee`, `Afaan-Oromoo`).
fn word_length(text: &[char]) -> usize {
    let textlen = text.len();
    if textlen == 0 || !is_word_char(text[0]) {
        return 0;
    }

    let mut wlen = 1;
    while wlen < textlen {
        let c = text[wlen];
        if is_word_char(c) {
            wlen += 1;
        } else if is_word_connector(c) && wlen + 1 < textlen && is_word_char(text[wlen + 1]) {
            wlen += 2;
        } else {
            break;
        }
    }
    wlen
}

/// Character ranges of all words in `text`.
fn word_spans(text: &[char]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let wlen = word_length(&text[pos..]);
        if wlen == 0 {
            pos += 1;
        } else {
            spans.push((pos, pos + wlen));
            pos += wlen;
        }
    }
    spans
}

/// Find the end of the sentence starting at `pos`.
///
/// A sentence ends after a run of `.`, `!`, `?` or `…` and any closing
/// quotes or brackets, when whitespace or the end of text follows. A single
/// period after an abbreviation does not end the sentence. Returns the
/// offset one past the sentence's last character (the text length when no
/// boundary is found).
fn sentence_end(text: &[char], pos: usize, is_abbreviation: AbbreviationFn<'_>) -> usize {
    let textlen = text.len();
    let mut i = pos;

    while i < textlen {
        if !is_sentence_terminal(text[i]) {
            i += 1;
            continue;
        }

        let run_start = i;
        while i < textlen && is_sentence_terminal(text[i]) {
            i += 1;
        }
        let single_period = i - run_start == 1 && text[run_start] == '.';
        while i < textlen && is_closing_punctuation(text[i]) {
            i += 1;
        }

        // "3.14", "www.example": punctuation glued to the next word.
        if i < textlen && !text[i].is_whitespace() {
            continue;
        }
        if single_period {
            let word_start = preceding_word_start(text, pos, run_start);
            if word_start < run_start && is_abbreviation(&text[word_start..run_start]) {
                continue;
            }
        }
        return i;
    }

    textlen
}

/// Start of the run of word characters that ends at `end`, not going
/// further back than `floor`.
fn preceding_word_start(text: &[char], floor: usize, end: usize) -> usize {
    let mut start = end;
    while start > floor && is_word_char(text[start - 1]) {
        start -= 1;
    }
    start
}

/// Character ranges of all sentences in `text`, without surrounding
/// whitespace.
fn sentence_spans(text: &[char], is_abbreviation: AbbreviationFn<'_>) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let end = sentence_end(text, pos, is_abbreviation);
        let (start, stop) = trim_span(text, pos, end);
        if start < stop {
            spans.push((start, stop));
        }
        pos = end;
    }
    spans
}

fn trim_span(text: &[char], mut start: usize, mut end: usize) -> (usize, usize) {
    while start < end && text[start].is_whitespace() {
        start += 1;
    }
    while end > start && text[end - 1].is_whitespace() {
        end -= 1;
    }
    (start, end)
}

// ============================================================================
// Tokenizer
// ============================================================================

/// Configuration options for the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Keep the input's letter case in token surfaces.
    pub preserve_case: bool,

    /// Policy used by [`Tokenizer::validate`]. Tokenization itself never
    /// rejects input.
    pub mode: ValidationMode,

    /// Words (without the period) after which a period does not end a
    /// sentence. Matched case-insensitively.
    pub abbreviations: Vec<String>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            preserve_case: false,
            mode: ValidationMode::Lenient,
            abbreviations: DEFAULT_ABBREVIATIONS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// A word token with the raw source characters around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextToken {
    pub token: Token,
    pub left_context: String,
    pub right_context: String,
}

/// Word and sentence tokenizer.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    alphabet: Arc<Alphabet>,
    normalizer: Normalizer,
    validator: Validator,
    mode: ValidationMode,
    abbreviations: HashSet<String>,
}

impl Tokenizer {
    pub fn new(alphabet: Arc<Alphabet>, options: TokenizerOptions) -> Self {
        let normalizer = Normalizer::new(
            Arc::clone(&alphabet),
            NormalizerOptions {
                preserve_case: options.preserve_case,
                strip_invalid: false,
                ..NormalizerOptions::default()
            },
        );
        let abbreviations = options
            .abbreviations
            .iter()
            .map(|a| a.trim_end_matches('.').chars().map(simple_upper).collect())
            .collect();

        Self {
            validator: Validator::new(Arc::clone(&alphabet)),
            alphabet,
            normalizer,
            mode: options.mode,
            abbreviations,
        }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn preserve_case(&self) -> bool {
        self.normalizer.options().preserve_case
    }

    // -- Words --------------------------------------------------------------

    /// Word tokens with character offsets into `text`.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        let chars = scan_chars(text);
        word_spans(&chars)
            .into_iter()
            .map(|(start, end)| Token::word(self.surface(&chars[start..end]), start, end))
            .collect()
    }

    /// Word surfaces in order.
    ///
    /// `"Afaan Oromoo afaan guddaa dha."` gives
    /// `["AFAAN", "OROMOO", "AFAAN", "GUDDAA", "DHA"]`.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.tokens(text).into_iter().map(|t| t.text).collect()
    }

    /// Word tokens with up to `context_chars` raw source characters on each
    /// side.
    pub fn tokens_with_context(&self, text: &str, context_chars: usize) -> Vec<ContextToken> {
        let chars = scan_chars(text);
        word_spans(&chars)
            .into_iter()
            .map(|(start, end)| {
                let left_start = start.saturating_sub(context_chars);
                let right_end = (end + context_chars).min(chars.len());
                ContextToken {
                    token: Token::word(self.surface(&chars[start..end]), start, end),
                    left_context: chars[left_start..start].iter().collect(),
                    right_context: chars[end..right_end].iter().collect(),
                }
            })
            .collect()
    }

    // -- Sentences ----------------------------------------------------------

    /// Sentence tokens with character offsets into `text`.
    pub fn sentence_tokens(&self, text: &str) -> Vec<Token> {
        let chars = scan_chars(text);
        sentence_spans(&chars, &|word: &[char]| self.is_abbreviation(word))
            .into_iter()
            .map(|(start, end)| Token::sentence(self.surface(&chars[start..end]), start, end))
            .collect()
    }

    /// Normalized sentences in order.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        self.sentence_tokens(text)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    // -- Validation ---------------------------------------------------------

    /// Validate `text` with the configured mode.
    pub fn validate(&self, text: &str) -> ValidationReport {
        self.validator.validate(text, self.mode)
    }

    // -- Internals ----------------------------------------------------------

    fn surface(&self, chars: &[char]) -> String {
        let raw: String = chars.iter().collect();
        self.normalizer.normalize(&raw).into_string()
    }

    /// Configured abbreviations, or a single-letter initial ("A. Tolaa").
    fn is_abbreviation(&self, word: &[char]) -> bool {
        if let [c] = word {
            return c.is_alphabetic();
        }
        let key: String = word
            .iter()
            .map(|&c| simple_upper(self.alphabet.fold(c)))
            .collect();
        self.abbreviations.contains(&key)
    }
}

fn scan_chars(text: &str) -> Vec<char> {
    compose(text).chars().collect()
}

// ============================================================================
// Tests
// ============================================================================
