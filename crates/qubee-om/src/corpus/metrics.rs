// Text statistics, word frequencies and readability.

use std::fmt;

use hashbrown::{HashMap, HashSet};
use serde::Serialize;

use qubee_core::Alphabet;

use crate::corpus::ProcessedDocument;
use crate::syllabifier::Syllabifier;
use crate::tokenizer::Tokenizer;

/// Number of entries in [`TextMetrics::top_words`].
const TOP_WORDS: usize = 10;

/// Counts words and returns the `top_n` most frequent, most frequent
/// first. Equal counts keep first-occurrence order.
pub fn word_frequency<S: AsRef<str>>(tokens: &[S], top_n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (i, token) in tokens.iter().enumerate() {
        counts.entry(token.as_ref()).or_insert((0, i)).0 += 1;
    }

    let mut entries: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    entries.sort_by(|(_, (ca, fa)), (_, (cb, fb))| cb.cmp(ca).then(fa.cmp(fb)));
    entries
        .into_iter()
        .take(top_n)
        .map(|(word, (count, _))| (word.to_string(), count))
        .collect()
}

/// Token counts across documents, keeping words seen at least `min_count`
/// times. Sorted by count, then alphabetically.
pub fn vocabulary(docs: &[ProcessedDocument], min_count: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in docs.iter().flat_map(|d| &d.tokens) {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut vocab: Vec<(String, usize)> = counts
        .into_iter()
        .filter(|&(_, count)| count >= min_count)
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    vocab.sort_by(|(wa, ca), (wb, cb)| cb.cmp(ca).then_with(|| wa.cmp(wb)));
    vocab
}

/// Contiguous runs of `n` tokens, in text order. Empty when `n` is 0 or
/// longer than `tokens`.
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<Vec<String>> {
    if n == 0 || n > tokens.len() {
        return Vec::new();
    }
    tokens
        .windows(n)
        .map(|w| w.iter().map(|t| t.as_ref().to_string()).collect())
        .collect()
}

/// Mean type-token ratio over every window of `window` consecutive
/// tokens. Less sensitive to text length than the overall ratio. 0 when
/// `window` is 0 or longer than `tokens`.
pub fn moving_type_token_ratio<S: AsRef<str>>(tokens: &[S], window: usize) -> f64 {
    if window == 0 || window > tokens.len() {
        return 0.0;
    }
    let mut seen: HashSet<&str> = HashSet::with_capacity(window);
    let mut total = 0.0;
    let windows = tokens.windows(window);
    let count = windows.len();
    for w in windows {
        seen.clear();
        seen.extend(w.iter().map(|t| t.as_ref()));
        total += ratio(seen.len(), window);
    }
    total / count as f64
}

/// Phrases of `min_words..=max_words` tokens that occur more than once,
/// joined by single spaces. Most frequent first; equal counts keep
/// first-occurrence order. Occurrences may overlap.
pub fn repeated_phrases<S: AsRef<str>>(
    tokens: &[S],
    min_words: usize,
    max_words: usize,
) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut order = 0;
    for n in min_words.max(1)..=max_words.min(tokens.len()) {
        for w in tokens.windows(n) {
            let phrase = w.iter().map(|t| t.as_ref()).collect::<Vec<&str>>().join(" ");
            counts.entry(phrase).or_insert((0, order)).0 += 1;
            order += 1;
        }
    }

    let mut phrases: Vec<(String, (usize, usize))> =
        counts.into_iter().filter(|(_, (count, _))| *count > 1).collect();
    phrases.sort_by(|(_, (ca, fa)), (_, (cb, fb))| cb.cmp(ca).then(fa.cmp(fb)));
    phrases
        .into_iter()
        .map(|(phrase, (count, _))| (phrase, count))
        .collect()
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

// ---------------------------------------------------------------------------
// Text metrics
// ---------------------------------------------------------------------------

/// Descriptive statistics of one text. Words are tokenizer words, so they
/// are normalized before counting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMetrics {
    pub characters: usize,
    pub letters: usize,
    pub words: usize,
    pub unique_words: usize,
    pub sentences: usize,
    pub type_token_ratio: f64,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub vowels: usize,
    pub consonants: usize,
    pub vowel_consonant_ratio: f64,
    pub top_words: Vec<(String, usize)>,
}

impl TextMetrics {
    pub fn compute(text: &str, tokenizer: &Tokenizer, alphabet: &Alphabet) -> Self {
        let words = tokenizer.words(text);
        let sentences = tokenizer.sentence_tokens(text).len();

        let unique_words = {
            let mut seen: Vec<&str> = words.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            seen.len()
        };
        let word_chars: usize = words.iter().map(|w| w.chars().count()).sum();
        let vowels = alphabet.count_vowels(text);
        let consonants = alphabet.count_consonants(text);

        Self {
            characters: text.chars().count(),
            letters: text.chars().filter(|c| c.is_alphabetic()).count(),
            words: words.len(),
            unique_words,
            sentences,
            type_token_ratio: ratio(unique_words, words.len()),
            avg_word_length: ratio(word_chars, words.len()),
            avg_sentence_length: ratio(words.len(), sentences),
            vowels,
            consonants,
            vowel_consonant_ratio: ratio(vowels, consonants),
            top_words: word_frequency(&words, TOP_WORDS),
        }
    }
}

// ---------------------------------------------------------------------------
// Readability
// ---------------------------------------------------------------------------

/// Reading-ease band of a Flesch score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadabilityLevel {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    Easy,
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    Standard,
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    Difficult,
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
}

impl ReadabilityLevel {
    pub fn from_score(score: f64) -> Self {
        if score > 90.0 {
            ReadabilityLevel::VeryEasy
        } else if score > 80.0 {
            ReadabilityLevel::Easy
        } else if score > 70.0 {
            ReadabilityLevel::FairlyEasy
        } else if score > 60.0 {
            ReadabilityLevel::Standard
        } else if score > 50.0 {
            ReadabilityLevel::FairlyDifficult
        } else if score > 30.0 {
            ReadabilityLevel::Difficult
        } else {
            ReadabilityLevel::VeryDifficult
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReadabilityLevel::VeryEasy => "Very Easy",
            ReadabilityLevel::Easy => "Easy",
            ReadabilityLevel::FairlyEasy => "Fairly Easy",
            ReadabilityLevel::Standard => "Standard",
            ReadabilityLevel::FairlyDifficult => "Fairly Difficult",
            ReadabilityLevel::Difficult => "Difficult",
            ReadabilityLevel::VeryDifficult => "Very Difficult",
        }
    }
}

impl fmt::Display for ReadabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flesch reading ease with the English constants:
/// `206.835 - 1.015 * words/sentence - 84.6 * syllables/word`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readability {
    pub flesch_score: f64,
    pub level: ReadabilityLevel,
    pub avg_words_per_sentence: f64,
    pub avg_syllables_per_word: f64,
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
}

impl Readability {
    /// Empty text has zero averages and so scores 206.835.
    pub fn compute(text: &str, tokenizer: &Tokenizer, syllabifier: &Syllabifier) -> Self {
        let words = tokenizer.words(text);
        let sentences = tokenizer.sentence_tokens(text).len();
        let syllables: usize = words.iter().map(|w| syllabifier.count_syllables(w)).sum();

        let avg_words_per_sentence = ratio(words.len(), sentences);
        let avg_syllables_per_word = ratio(syllables, words.len());
        let flesch_score = 206.835 - 1.015 * avg_words_per_sentence - 84.6 * avg_syllables_per_word;

        Self {
            flesch_score,
            level: ReadabilityLevel::from_score(flesch_score),
            avg_words_per_sentence,
            avg_syllables_per_word,
            sentences,
            words: words.len(),
            syllables,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::tokenizer::TokenizerOptions;

    fn tokenizer(alphabet: &Arc<Alphabet>) -> Tokenizer {
        Tokenizer::new(Arc::clone(alphabet), TokenizerOptions::default())
    }

    #[test]
    fn frequency_ties_keep_first_occurrence() {
        let tokens = ["MANA", "FI", "BISHAAN", "FI", "MANA", "DHA"];
        assert_eq!(
            word_frequency(&tokens, 3),
            vec![
                ("MANA".to_string(), 2),
                ("FI".to_string(), 2),
                ("BISHAAN".to_string(), 1)
            ]
        );
        assert!(word_frequency::<&str>(&[], 5).is_empty());
    }

    #[test]
    fn vocabulary_min_count() {
        let doc = |id: &str, tokens: &[&str]| ProcessedDocument {
            id: id.to_string(),
            invalid_chars: Vec::new(),
            sentences: Vec::new(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            stems: Vec::new(),
        };
        let docs = [doc("a", &["MANA", "FI", "DHA"]), doc("b", &["FI", "MANA", "KUNI"])];
        assert_eq!(
            vocabulary(&docs, 2),
            vec![("FI".to_string(), 2), ("MANA".to_string(), 2)]
        );
        assert_eq!(vocabulary(&docs, 1).len(), 4);
    }

    #[test]
    fn bigrams_and_trigrams() {
        let tokens = ["AFAAN", "OROMOO", "AFAAN", "GUDDAA"];
        assert_eq!(
            ngrams(&tokens, 2),
            vec![
                vec!["AFAAN", "OROMOO"],
                vec!["OROMOO", "AFAAN"],
                vec!["AFAAN", "GUDDAA"]
            ]
        );
        assert_eq!(ngrams(&tokens, 4).len(), 1);
    }

    #[test]
    fn ngrams_longer_than_text() {
        assert!(ngrams(&["MANA", "DHA"], 3).is_empty());
        assert!(ngrams(&["MANA"], 0).is_empty());
        assert!(ngrams::<&str>(&[], 1).is_empty());
    }

    #[test]
    fn moving_ttr() {
        // windows: [MANA FI MANA] 2/3, [FI MANA DHA] 3/3
        let tokens = ["MANA", "FI", "MANA", "DHA"];
        let ttr = moving_type_token_ratio(&tokens, 3);
        assert!((ttr - (2.0 / 3.0 + 1.0) / 2.0).abs() < 1e-9);
        assert!((moving_type_token_ratio(&tokens, 1) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn moving_ttr_window_too_large() {
        assert_eq!(moving_type_token_ratio(&["MANA", "FI"], 3), 0.0);
        assert_eq!(moving_type_token_ratio(&["MANA", "FI"], 0), 0.0);
    }

    #[test]
    fn phrases_seen_twice() {
        let alphabet = Arc::new(Alphabet::qubee());
        let t = tokenizer(&alphabet);
        let words = t.words("Nagaan bulte. Nagaan bulte? Eeyyee, nagaan bulte.");
        assert_eq!(repeated_phrases(&words, 2, 3), vec![("NAGAAN BULTE".to_string(), 3)]);

        let words = t.words("Akkam jirta obboleessa? Akkam jirta obboleessa!");
        assert_eq!(
            repeated_phrases(&words, 2, 3),
            vec![
                ("AKKAM JIRTA".to_string(), 2),
                ("JIRTA OBBOLEESSA".to_string(), 2),
                ("AKKAM JIRTA OBBOLEESSA".to_string(), 2),
            ]
        );
    }

    #[test]
    fn phrases_need_enough_words() {
        assert!(repeated_phrases(&["MANA", "MANA"], 3, 4).is_empty());
        assert!(repeated_phrases::<&str>(&[], 2, 4).is_empty());
    }

    #[test]
    fn text_metrics() {
        let alphabet = Arc::new(Alphabet::qubee());
        let m = TextMetrics::compute(
            "Afaan Oromoo afaan guddaa dha.",
            &tokenizer(&alphabet),
            &alphabet,
        );
        assert_eq!(m.words, 5);
        assert_eq!(m.unique_words, 4);
        assert_eq!(m.sentences, 1);
        assert_eq!(m.characters, 30);
        assert_eq!(m.letters, 25);
        assert_eq!(m.vowels, 14);
        assert_eq!(m.consonants, 11);
        assert!((m.type_token_ratio - 0.8).abs() < 1e-9);
        assert!((m.avg_word_length - 5.0).abs() < 1e-9);
        assert_eq!(m.top_words[0], ("AFAAN".to_string(), 2));
    }

    #[test]
    fn metrics_of_empty_text() {
        let alphabet = Arc::new(Alphabet::qubee());
        let m = TextMetrics::compute("", &tokenizer(&alphabet), &alphabet);
        assert_eq!(m.words, 0);
        assert_eq!(m.type_token_ratio, 0.0);
        assert_eq!(m.vowel_consonant_ratio, 0.0);
        assert!(m.top_words.is_empty());
    }

    #[test]
    fn readability_score() {
        let alphabet = Arc::new(Alphabet::qubee());
        let syllabifier = Syllabifier::new(Arc::clone(&alphabet));
        // 4 words, 1 sentence, 2 + 2 + 1 + 1 syllables
        let r = Readability::compute("Kuni mana koo dha.", &tokenizer(&alphabet), &syllabifier);
        assert_eq!(r.words, 4);
        assert_eq!(r.sentences, 1);
        assert_eq!(r.syllables, 6);
        let expected = 206.835 - 1.015 * 4.0 - 84.6 * 1.5;
        assert!((r.flesch_score - expected).abs() < 1e-9);
        assert_eq!(r.level, ReadabilityLevel::FairlyEasy);
    }

    #[test]
    fn readability_levels() {
        assert_eq!(ReadabilityLevel::from_score(95.0), ReadabilityLevel::VeryEasy);
        assert_eq!(ReadabilityLevel::from_score(90.0), ReadabilityLevel::Easy);
        assert_eq!(ReadabilityLevel::from_score(55.0), ReadabilityLevel::FairlyDifficult);
        assert_eq!(ReadabilityLevel::from_score(-12.0), ReadabilityLevel::VeryDifficult);
        assert_eq!(ReadabilityLevel::Standard.to_string(), "Standard");
        assert_eq!(
            serde_json::to_string(&ReadabilityLevel::FairlyEasy).unwrap(),
            "\"Fairly Easy\""
        );
    }
}
