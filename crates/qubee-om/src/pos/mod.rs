// Part-of-speech tagging.
//
// The rule tagger is a thin lookup-and-suffix model: a lexicon of fixed
// words, closed classes, then verb and noun endings. It is meant to be
// replaced or extended through the `Tagger` trait.

pub mod tagset;

use std::sync::Arc;

use hashbrown::HashMap;
use serde::Serialize;

use qubee_core::character::simple_lower;
use qubee_core::{Alphabet, PosTag};

use crate::oromo::constants::{ADPOSITIONS, CONJUNCTIONS, NUMBER_WORDS};

use self::tagset::{NOUN_SUFFIXES, VERB_SUFFIXES, map_to_universal};

/// Words with a fixed tag, lowercase.
const DEFAULT_LEXICON: &[(&str, PosTag)] = &[
    ("guddaa", PosTag::Adj),
    ("xixiqqoo", PosTag::Adj),
    ("waa'ee", PosTag::Noun),
    ("afaan", PosTag::Noun),
    ("biyya", PosTag::Noun),
    ("ani", PosTag::Pron),
    ("isin", PosTag::Pron),
];

/// A word with its tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: PosTag,
}

/// Assigns one tag per word.
pub trait Tagger {
    fn tag_word(&self, word: &str) -> PosTag;

    /// Tag every word, keeping order and surface text.
    fn tag(&self, words: &[String]) -> Vec<TaggedWord> {
        words
            .iter()
            .map(|word| TaggedWord {
                word: word.clone(),
                tag: self.tag_word(word),
            })
            .collect()
    }
}

/// Rule-based tagger with lexicon overrides.
#[derive(Debug, Clone)]
pub struct RuleTagger {
    alphabet: Arc<Alphabet>,
    lexicon: HashMap<String, PosTag>,
}

impl RuleTagger {
    pub fn new(alphabet: Arc<Alphabet>) -> Self {
        let lexicon = DEFAULT_LEXICON
            .iter()
            .map(|&(word, tag)| (word.to_string(), tag))
            .collect();
        Self { alphabet, lexicon }
    }

    /// Add or replace a lexicon entry. Matching is case-insensitive.
    pub fn with_entry(mut self, word: &str, tag: PosTag) -> Self {
        self.insert(word, tag);
        self
    }

    pub fn insert(&mut self, word: &str, tag: PosTag) {
        let key = self.key(word);
        self.lexicon.insert(key, tag);
    }

    fn key(&self, word: &str) -> String {
        word.trim()
            .chars()
            .map(|c| simple_lower(self.alphabet.fold(c)))
            .collect()
    }

    fn is_qubee_word(&self, word: &str) -> bool {
        word.chars()
            .all(|c| self.alphabet.is_qubee_letter(c) || self.alphabet.is_connector(c))
    }
}

impl Tagger for RuleTagger {
    fn tag_word(&self, word: &str) -> PosTag {
        let w = self.key(word);
        if w.is_empty() {
            return PosTag::Unk;
        }

        if let Some(&tag) = self.lexicon.get(&w) {
            return tag;
        }
        if NUMBER_WORDS.contains(&w.as_str()) || is_number(&w) {
            return PosTag::Num;
        }
        if w.chars().all(|c| c.is_ascii_punctuation() && c != '\'') {
            return PosTag::Punc;
        }
        if CONJUNCTIONS.contains(&w.as_str()) {
            return PosTag::Conj;
        }
        if ADPOSITIONS.contains(&w.as_str()) {
            return PosTag::Adp;
        }
        if let Some((_, tag)) = VERB_SUFFIXES.iter().find(|(suffix, _)| w.ends_with(suffix)) {
            return map_to_universal(tag);
        }
        if let Some((_, tag)) = NOUN_SUFFIXES.iter().find(|(suffix, _)| w.ends_with(suffix)) {
            return map_to_universal(tag);
        }
        if self.is_qubee_word(&w) {
            if w.contains(['-', '\'']) {
                return PosTag::Noun;
            }
            return PosTag::Unk;
        }
        PosTag::X
    }
}

/// Digits with an optional decimal part: `12`, `3.5`.
fn is_number(word: &str) -> bool {
    let (int, frac) = match word.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (word, None),
    };
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    digits(int) && frac.is_none_or(digits)
}
