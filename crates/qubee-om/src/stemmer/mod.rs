// Ordered suffix-stripping stemmer for Afaan Oromoo.
//
// Each pass runs the stages in order, removing at most one suffix per
// stage. After a pass that removed something, a trailing geminate consonant
// is reduced to one (barr -> bar). Passes repeat until nothing changes, so
// stem(stem(w)) == stem(w).

pub mod stages;

use std::sync::Arc;

use log::trace;

use qubee_core::character::{is_lower, simple_lower, simple_upper};
use qubee_core::{Alphabet, PosTag};

use crate::oromo::constants::{INFINITIVE_SUFFIX, IRREGULAR_VERBS, VERB_ROOTS};

pub use stages::{DEFAULT_STAGES, Guard, Stage, StageKind};

/// Configuration options for the stemmer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StemmerOptions {
    /// Also try the short, ambiguous suffixes of every stage.
    pub aggressive: bool,
}

#[derive(Debug, Clone)]
pub struct Stemmer {
    alphabet: Arc<Alphabet>,
    options: StemmerOptions,
    stages: Vec<Stage>,
}

impl Stemmer {
    pub fn new(alphabet: Arc<Alphabet>, options: StemmerOptions) -> Self {
        Self::with_stages(alphabet, options, DEFAULT_STAGES.to_vec())
    }

    pub fn with_stages(alphabet: Arc<Alphabet>, options: StemmerOptions, stages: Vec<Stage>) -> Self {
        Self {
            alphabet,
            options,
            stages,
        }
    }

    /// Append a stage after the existing ones.
    pub fn push_stage(&mut self, stage: Stage) {
        self.stages.push(stage);
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn options(&self) -> StemmerOptions {
        self.options
    }

    /// Stem one word.
    ///
    /// Matching ignores case and diacritics; the result is a prefix of the
    /// diacritic-folded input and keeps its case. Words without a vowel are
    /// returned unchanged.
    pub fn stem(&self, word: &str) -> String {
        self.stem_with(word, self.options.aggressive)
    }

    /// Aggressive stem, regardless of the configured mode.
    pub fn root(&self, word: &str) -> String {
        self.stem_with(word, true)
    }

    /// Stem plus the infinitive ending for verbs:
    /// `lemmatize("dhufan", PosTag::Verb) == "dhufuu"`.
    pub fn lemmatize(&self, word: &str, pos: PosTag) -> String {
        let stem = self.stem(word);
        if pos != PosTag::Verb || stem.is_empty() || self.upper(&stem).ends_with("UU") {
            return stem;
        }
        // Uppercase ending only after an all-uppercase stem.
        let suffix: String = if stem.chars().any(is_lower) {
            INFINITIVE_SUFFIX.chars().map(simple_lower).collect()
        } else {
            INFINITIVE_SUFFIX.chars().map(simple_upper).collect()
        };
        stem + &suffix
    }

    /// Irregular verb form, or a word whose stem is a known verb root.
    pub fn is_verb(&self, word: &str) -> bool {
        let upper = self.upper(word);
        if IRREGULAR_VERBS.iter().any(|&(form, _)| form == upper) {
            return true;
        }
        let stem = self.upper(&self.stem(word));
        VERB_ROOTS.contains(&stem.as_str())
    }

    /// Word carrying a plural suffix.
    pub fn is_noun(&self, word: &str) -> bool {
        let upper = self.upper(word);
        stages::PLURAL
            .suffixes
            .iter()
            .any(|suffix| upper.len() > suffix.len() && upper.ends_with(suffix))
    }

    // -- Internals ----------------------------------------------------------

    fn stem_with(&self, word: &str, aggressive: bool) -> String {
        if word.is_empty() || !self.alphabet.has_vowel(word) {
            return word.to_string();
        }

        let chars: Vec<char> = word.chars().map(|c| self.alphabet.fold(c)).collect();
        let upper: Vec<char> = chars.iter().map(|&c| simple_upper(c)).collect();
        let mut len = chars.len();

        loop {
            let before = len;

            if let Some(root_len) = irregular_root_len(&upper[..len]) {
                trace!("irregular form {:?}", &upper[..len]);
                len = root_len;
            }

            let mut stripped = false;
            for stage in &self.stages {
                if let Some(k) = self.longest_match(stage, &upper[..len], aggressive) {
                    trace!("{} stage strips {} chars", stage.kind, k);
                    len -= k;
                    stripped = true;
                }
            }

            if stripped && self.ends_in_geminate(&upper[..len]) {
                len -= 1;
            }
            if len == before {
                break;
            }
        }

        chars[..len].iter().collect()
    }

    /// Length of the longest suffix of `stage` that `word` ends with and
    /// whose removal passes the stage guard.
    fn longest_match(&self, stage: &Stage, word: &[char], aggressive: bool) -> Option<usize> {
        stage
            .candidates(aggressive)
            .filter_map(|suffix| {
                let k = suffix.len();
                if k >= word.len() || !ends_with(word, suffix) {
                    return None;
                }
                let residual = &word[..word.len() - k];
                self.passes(stage.guard, residual).then_some(k)
            })
            .max()
    }

    fn passes(&self, guard: Guard, residual: &[char]) -> bool {
        residual.len() >= guard.min_len
            && residual.iter().filter(|&&c| self.alphabet.is_vowel(c)).count() >= guard.min_vowels
    }

    /// Doubled final consonant with a vowel still before it.
    fn ends_in_geminate(&self, word: &[char]) -> bool {
        match word {
            [rest @ .., a, b] => {
                a == b
                    && self.alphabet.is_consonant(*b)
                    && rest.iter().any(|&c| self.alphabet.is_vowel(c))
            }
            _ => false,
        }
    }

    fn upper(&self, word: &str) -> String {
        word.chars()
            .map(|c| simple_upper(self.alphabet.fold(c)))
            .collect()
    }
}

fn ends_with(word: &[char], suffix: &str) -> bool {
    let k = suffix.len();
    word.len() >= k && word[word.len() - k..].iter().copied().eq(suffix.chars())
}

fn irregular_root_len(word: &[char]) -> Option<usize> {
    IRREGULAR_VERBS.iter().find_map(|&(form, root)| {
        (word.len() == form.len() && word.iter().copied().eq(form.chars())).then_some(root.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stemmer() -> Stemmer {
        Stemmer::new(Arc::new(Alphabet::qubee()), StemmerOptions::default())
    }

    fn aggressive() -> Stemmer {
        Stemmer::new(
            Arc::new(Alphabet::qubee()),
            StemmerOptions { aggressive: true },
        )
    }

    #[test]
    fn verb_suffix_then_geminate() {
        assert_eq!(stemmer().stem("barreessuu"), "bar");
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(stemmer().stem("barattoota"), "barat");
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(stemmer().stem("BARATTOOTA"), "BARAT");
        assert_eq!(stemmer().stem("Barattoota"), "Barat");
    }

    #[test]
    fn diacritics_are_folded() {
        assert_eq!(stemmer().stem("bar\u{00E1}ttoota"), "barat");
    }

    #[test]
    fn irregular_forms() {
        assert_eq!(stemmer().stem("dhufan"), "dhuf");
        assert_eq!(stemmer().stem("KENNAN"), "KENN");
    }

    #[test]
    fn suffixes_stack_across_passes() {
        // case in the first pass, plural in the second
        assert_eq!(stemmer().stem("barattootatti"), "barat");
    }

    #[test]
    fn aggressive_mode_strips_short_suffixes() {
        assert_eq!(stemmer().stem("namootaaf"), "namootaaf");
        assert_eq!(aggressive().stem("namootaaf"), "nam");
    }

    #[test]
    fn lengthened_plural_is_not_split_by_case() {
        // dative -f after a lengthened plural vowel
        assert_eq!(aggressive().stem("barattootaaf"), "barat");
        assert_eq!(stemmer().stem("barattootaa"), "barat");
        assert_eq!(aggressive().stem("barattootaa"), "barat");
    }

    #[test]
    fn irregular_root_is_not_degeminated() {
        assert_eq!(stemmer().stem("kennan"), "kenn");
    }

    #[test]
    fn words_without_vowels_unchanged() {
        assert_eq!(stemmer().stem("kkf"), "kkf");
        assert_eq!(stemmer().stem("2024"), "2024");
        assert_eq!(stemmer().stem(""), "");
    }

    #[test]
    fn guard_blocks_stripping_last_vowel() {
        // "uu" alone would leave no vowel
        assert_eq!(stemmer().stem("dhuu"), "dhuu");
        assert_eq!(stemmer().stem("lee"), "lee");
    }

    #[test]
    fn stemming_is_idempotent() {
        let s = aggressive();
        for word in ["barreessuu", "barattoota", "namootaaf", "manneen", "dhufan", "keessatti"] {
            let once = s.stem(word);
            assert_eq!(s.stem(&once), once, "{word}");
        }
    }

    #[test]
    fn root_is_aggressive() {
        let s = stemmer();
        assert_eq!(s.root("namootaaf"), aggressive().stem("namootaaf"));
    }

    #[test]
    fn lemmatize_verbs() {
        let s = stemmer();
        assert_eq!(s.lemmatize("dhufan", PosTag::Verb), "dhufuu");
        assert_eq!(s.lemmatize("DHUFAN", PosTag::Verb), "DHUFUU");
        assert_eq!(s.lemmatize("Dhufan", PosTag::Verb), "Dhufuu");
        assert_eq!(s.lemmatize("barattoota", PosTag::Noun), "barat");
    }

    #[test]
    fn verb_and_noun_checks() {
        let s = stemmer();
        assert!(s.is_verb("beekan"));
        assert!(s.is_verb("barreessuu"));
        assert!(!s.is_verb("mana"));
        assert!(s.is_noun("barattoota"));
        assert!(!s.is_noun("mana"));
    }

    #[test]
    fn appended_stage_runs_last() {
        const DIMINUTIVE: Stage = Stage {
            kind: StageKind::Derivational,
            suffixes: &["ICCA"],
            aggressive_suffixes: &[],
            guard: Guard {
                min_vowels: 1,
                min_len: 2,
            },
        };
        let mut s = stemmer();
        assert_eq!(s.stem("mankicca"), "mankicca");
        s.push_stage(DIMINUTIVE);
        assert_eq!(s.stem("mankicca"), "mank");
        assert_eq!(s.stages().len(), 6);
    }
}
