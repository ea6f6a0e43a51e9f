// QubeeHandle: one object owning every Afaan Oromoo component.
//
// Components share a single `Arc<Alphabet>`. Setters rebuild the
// components that depend on the changed option; everything else is kept.

use std::sync::Arc;

use log::debug;
use serde::Serialize;

use qubee_core::character::simple_upper;
use qubee_core::{Alphabet, PosTag, Token, ValidationMode};

use crate::config::QubeeConfig;
use crate::corpus::{
    CorpusPipeline, Readability, TextMetrics, moving_type_token_ratio, ngrams, repeated_phrases,
};
use crate::error::QubeeError;
use crate::normalizer::{NormalizedText, Normalizer, NormalizerOptions};
use crate::oromo::constants::DEFAULT_ABBREVIATIONS;
use crate::pos::{RuleTagger, TaggedWord, Tagger};
use crate::stemmer::{Stemmer, StemmerOptions};
use crate::stopwords::Stopwords;
use crate::syllabifier::Syllabifier;
use crate::tokenizer::{Tokenizer, TokenizerOptions};
use crate::validator::{ValidationReport, Validator, WordIssue};

/// Everything the handle knows about one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordAnalysis {
    pub word: String,
    pub stem: String,
    pub lemma: String,
    pub syllables: Vec<String>,
    pub pos: PosTag,
    pub is_stopword: bool,
}

/// Top-level handle over the normalizer, validator, tokenizer, stemmer,
/// syllabifier, tagger and stopword list.
#[derive(Debug, Clone)]
pub struct QubeeHandle {
    alphabet: Arc<Alphabet>,
    config: QubeeConfig,

    normalizer: Normalizer,
    validator: Validator,
    tokenizer: Tokenizer,
    stemmer: Stemmer,
    syllabifier: Syllabifier,
    tagger: RuleTagger,
    stopwords: Stopwords,
}

impl Default for QubeeHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl QubeeHandle {
    /// Handle with the standard Qubee alphabet and default options.
    pub fn new() -> Self {
        Self::with_alphabet(Arc::new(Alphabet::qubee()), QubeeConfig::default())
    }

    /// Handle configured from a TOML file.
    pub fn from_config_path(path: impl AsRef<std::path::Path>) -> Result<Self, QubeeError> {
        Ok(Self::from_config(QubeeConfig::from_path(path)?))
    }

    pub fn from_config(config: QubeeConfig) -> Self {
        Self::with_alphabet(Arc::new(Alphabet::qubee()), config)
    }

    /// Handle over a custom alphabet. Build the alphabet with
    /// [`Alphabet::builder`] so its invariants are checked first.
    pub fn with_alphabet(alphabet: Arc<Alphabet>, config: QubeeConfig) -> Self {
        debug!(
            "building handle: mode={} preserve_case={} aggressive={}",
            config.mode, config.preserve_case, config.aggressive
        );

        let mut stopwords = Stopwords::new();
        stopwords.add(&config.extra_stopwords);

        Self {
            normalizer: build_normalizer(&alphabet, &config),
            validator: Validator::new(Arc::clone(&alphabet)),
            tokenizer: build_tokenizer(&alphabet, &config),
            stemmer: build_stemmer(&alphabet, &config),
            syllabifier: Syllabifier::new(Arc::clone(&alphabet)),
            tagger: RuleTagger::new(Arc::clone(&alphabet)),
            stopwords,
            alphabet,
            config,
        }
    }

    // =========================================================================
    // Core methods
    // =========================================================================

    pub fn normalize(&self, text: &str) -> NormalizedText {
        self.normalizer.normalize(text)
    }

    /// Validate with the configured mode.
    pub fn validate(&self, text: &str) -> ValidationReport {
        self.validator.validate(text, self.config.mode)
    }

    /// Words with unusual vowel sequences or consonant clusters.
    pub fn check_phonotactics(&self, text: &str) -> Vec<(String, WordIssue)> {
        self.validator.check_phonotactics(text)
    }

    pub fn words(&self, text: &str) -> Vec<String> {
        self.tokenizer.words(text)
    }

    pub fn tokens(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokens(text)
    }

    pub fn sentences(&self, text: &str) -> Vec<String> {
        self.tokenizer.sentences(text)
    }

    pub fn sentence_tokens(&self, text: &str) -> Vec<Token> {
        self.tokenizer.sentence_tokens(text)
    }

    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    pub fn syllables(&self, word: &str) -> Vec<String> {
        self.syllabifier
            .split_into_syllables(word)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Syllables of every word of `text`.
    pub fn syllabify_text(&self, text: &str) -> Vec<Vec<String>> {
        self.words(text)
            .iter()
            .map(|word| self.syllables(word))
            .collect()
    }

    /// Tag every word of `text`.
    pub fn tag(&self, text: &str) -> Vec<TaggedWord> {
        self.tagger.tag(&self.words(text))
    }

    /// Stopword check including functional-suffix variants. The word is
    /// folded and uppercased first, so any casing matches.
    pub fn is_stopword(&self, word: &str) -> bool {
        let key: String = word
            .chars()
            .map(|c| simple_upper(self.alphabet.fold(c)))
            .collect();
        self.stopwords.is_stopword(&key, true)
    }

    /// Per-word stem, lemma, syllables, tag and stopword flag.
    pub fn analyze(&self, text: &str) -> Vec<WordAnalysis> {
        self.words(text)
            .into_iter()
            .map(|word| {
                let pos = self.tagger.tag_word(&word);
                WordAnalysis {
                    stem: self.stemmer.stem(&word),
                    lemma: self.stemmer.lemmatize(&word, pos),
                    syllables: self.syllables(&word),
                    is_stopword: self.is_stopword(&word),
                    pos,
                    word,
                }
            })
            .collect()
    }

    pub fn metrics(&self, text: &str) -> TextMetrics {
        TextMetrics::compute(text, &self.tokenizer, &self.alphabet)
    }

    pub fn readability(&self, text: &str) -> Readability {
        Readability::compute(text, &self.tokenizer, &self.syllabifier)
    }

    /// Word n-grams of `text`.
    pub fn ngrams(&self, text: &str, n: usize) -> Vec<Vec<String>> {
        ngrams(&self.words(text), n)
    }

    /// Mean type-token ratio over windows of `window` words.
    pub fn moving_type_token_ratio(&self, text: &str, window: usize) -> f64 {
        moving_type_token_ratio(&self.words(text), window)
    }

    /// Word phrases of 2 to 4 words occurring more than once.
    pub fn repeated_phrases(&self, text: &str) -> Vec<(String, usize)> {
        repeated_phrases(&self.words(text), 2, 4)
    }

    /// Corpus pipeline with this handle's tokenizer and stemmer settings.
    pub fn pipeline(&self) -> CorpusPipeline {
        CorpusPipeline::new(self.tokenizer.clone(), self.stemmer.clone())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    pub fn config(&self) -> &QubeeConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    pub fn stopwords_mut(&mut self) -> &mut Stopwords {
        &mut self.stopwords
    }

    pub fn tagger_mut(&mut self) -> &mut RuleTagger {
        &mut self.tagger
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    pub fn set_preserve_case(&mut self, value: bool) {
        debug!("preserve_case = {value}");
        self.config.preserve_case = value;
        self.normalizer = build_normalizer(&self.alphabet, &self.config);
        self.tokenizer = build_tokenizer(&self.alphabet, &self.config);
    }

    pub fn set_mode(&mut self, mode: ValidationMode) {
        debug!("mode = {mode}");
        self.config.mode = mode;
        self.tokenizer = build_tokenizer(&self.alphabet, &self.config);
    }

    pub fn set_aggressive(&mut self, value: bool) {
        debug!("aggressive = {value}");
        self.config.aggressive = value;
        self.stemmer = build_stemmer(&self.alphabet, &self.config);
    }
}

// ---------------------------------------------------------------------------
// Component construction
// ---------------------------------------------------------------------------

fn build_normalizer(alphabet: &Arc<Alphabet>, config: &QubeeConfig) -> Normalizer {
    Normalizer::new(
        Arc::clone(alphabet),
        NormalizerOptions {
            preserve_case: config.preserve_case,
            ..NormalizerOptions::default()
        },
    )
}

fn build_tokenizer(alphabet: &Arc<Alphabet>, config: &QubeeConfig) -> Tokenizer {
    let abbreviations = match &config.abbreviations {
        Some(list) => list.clone(),
        None => DEFAULT_ABBREVIATIONS.iter().map(|a| a.to_string()).collect(),
    };
    Tokenizer::new(
        Arc::clone(alphabet),
        TokenizerOptions {
            preserve_case: config.preserve_case,
            mode: config.mode,
            abbreviations,
        },
    )
}

fn build_stemmer(alphabet: &Arc<Alphabet>, config: &QubeeConfig) -> Stemmer {
    Stemmer::new(
        Arc::clone(alphabet),
        StemmerOptions {
            aggressive: config.aggressive,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pipeline() {
        let h = QubeeHandle::new();
        assert_eq!(h.normalize("  \u{00C1}f\u{00E1}an   Oromoo  ").as_str(), "AFAAN OROMOO");
        assert_eq!(h.stem("barattoota"), "barat");
        assert_eq!(h.syllables("Oromoo"), vec!["O", "ro", "moo"]);
    }

    #[test]
    fn analyze_words() {
        let h = QubeeHandle::new();
        let out = h.analyze("Barattoota fi dhufan.");
        let words: Vec<&str> = out.iter().map(|a| a.word.as_str()).collect();
        assert_eq!(words, vec!["BARATTOOTA", "FI", "DHUFAN"]);

        assert_eq!(out[0].stem, "BARAT");
        assert_eq!(out[0].pos, PosTag::Unk);
        assert!(!out[0].is_stopword);

        assert_eq!(out[1].pos, PosTag::Conj);
        assert!(out[1].is_stopword);

        assert_eq!(out[2].stem, "DHUF");
        assert_eq!(out[2].syllables, vec!["DHU", "FAN"]);
    }

    #[test]
    fn stopword_check_ignores_case() {
        let h = QubeeHandle::new();
        assert!(h.is_stopword("kun"));
        assert!(h.is_stopword("Isati"));
        assert!(!h.is_stopword("mana"));
    }

    #[test]
    fn config_is_applied() {
        let config = QubeeConfig {
            preserve_case: true,
            mode: ValidationMode::Strict,
            aggressive: true,
            abbreviations: Some(vec!["kit".to_string()]),
            extra_stopwords: vec!["mana".to_string()],
        };
        let h = QubeeHandle::from_config(config);
        assert_eq!(h.words("Afaan Oromoo"), vec!["Afaan", "Oromoo"]);
        assert!(!h.validate("Afaan, Oromoo").is_valid);
        assert_eq!(h.stem("namootaaf"), "nam");
        assert_eq!(h.sentences("Kit. 3 dha. Eeyyee."), vec!["Kit. 3 dha.", "Eeyyee."]);
        assert!(h.is_stopword("MANA"));
    }

    #[test]
    fn setters_rebuild_components() {
        let mut h = QubeeHandle::new();
        assert_eq!(h.words("Afaan"), vec!["AFAAN"]);
        h.set_preserve_case(true);
        assert_eq!(h.words("Afaan"), vec!["Afaan"]);
        assert_eq!(h.normalize("Afaan").as_str(), "Afaan");

        assert!(h.validate("Afaan, Oromoo").is_valid);
        h.set_mode(ValidationMode::Strict);
        assert!(!h.validate("Afaan, Oromoo").is_valid);
        assert_eq!(h.pipeline().tokenizer().mode(), ValidationMode::Strict);

        assert_eq!(h.stem("namootaaf"), "namootaaf");
        h.set_aggressive(true);
        assert_eq!(h.stem("namootaaf"), "nam");
    }

    #[test]
    fn syllabify_text_per_word() {
        let h = QubeeHandle::new();
        assert_eq!(
            h.syllabify_text("mana bishaan"),
            vec![vec!["MA", "NA"], vec!["BI", "SHAAN"]]
        );
    }

    #[test]
    fn tag_text() {
        let tagged = QubeeHandle::new().tag("Afaan fi 2");
        let tags: Vec<PosTag> = tagged.iter().map(|t| t.tag).collect();
        assert_eq!(tags, vec![PosTag::Noun, PosTag::Conj, PosTag::Num]);
    }

    #[test]
    fn word_sequences() {
        let h = QubeeHandle::new();
        let text = "Nagaa\u{0301}n bulte. Nagaan bulte!";
        assert_eq!(h.ngrams(text, 3)[0], vec!["NAGAAN", "BULTE", "NAGAAN"]);
        assert!(h.ngrams(text, 5).is_empty());
        assert_eq!(h.repeated_phrases(text), vec![("NAGAAN BULTE".to_string(), 2)]);
        assert!((h.moving_type_token_ratio(text, 2) - 1.0).abs() < 1e-9);
        assert_eq!(h.moving_type_token_ratio(text, 9), 0.0);
    }

    #[test]
    fn metrics_and_readability() {
        let h = QubeeHandle::new();
        assert_eq!(h.metrics("Kuni mana koo dha.").words, 4);
        assert_eq!(h.readability("Kuni mana koo dha.").syllables, 6);
    }
}
