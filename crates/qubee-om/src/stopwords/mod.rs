// Stopword lists for Afaan Oromoo.
//
// Words are stored uppercase and looked up by exact membership. Input is
// expected to be normalized already (uppercase, no diacritics); lowercase
// input is not found. The tokenizer's default output follows this
// convention.

use std::fmt;
use std::str::FromStr;

use hashbrown::HashSet;

use crate::error::QubeeError;
use crate::oromo::constants::STOPWORD_VARIANT_SUFFIXES;

/// Stopwords that belong to no category.
const DEFAULT_STOPWORDS: &[&str] = &[
    "WAA", "WAAEE", "WAAEEN", "ANI", "ATE", "ISA", "ISI", "ISAN", "FI", "YOO", "SILAA", "ERGASII",
    "IRRA", "KEESSAA", "GADII", "TAA", "DHA", "JIRA", "AMMA", "AMMAA", "SANA", "EENYUU", "MAAL",
    "EESSAA", "KUN", "SUN", "KANA", "HAA", "TAY", "NU", "NUU",
];

/// Grouping of stopwords by word class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopwordCategory {
    Pronouns,
    Conjunctions,
    Prepositions,
    AuxiliaryVerbs,
    Demonstratives,
    QuestionWords,
    Adverbs,
}

impl StopwordCategory {
    pub const ALL: [StopwordCategory; 7] = [
        StopwordCategory::Pronouns,
        StopwordCategory::Conjunctions,
        StopwordCategory::Prepositions,
        StopwordCategory::AuxiliaryVerbs,
        StopwordCategory::Demonstratives,
        StopwordCategory::QuestionWords,
        StopwordCategory::Adverbs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StopwordCategory::Pronouns => "pronouns",
            StopwordCategory::Conjunctions => "conjunctions",
            StopwordCategory::Prepositions => "prepositions",
            StopwordCategory::AuxiliaryVerbs => "auxiliary_verbs",
            StopwordCategory::Demonstratives => "demonstratives",
            StopwordCategory::QuestionWords => "question_words",
            StopwordCategory::Adverbs => "adverbs",
        }
    }

    /// Built-in members, uppercase.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            StopwordCategory::Pronouns => &[
                "ANI", "ATE", "ISAN", "ISA", "ISI", "ISII", "NU", "NUU", "ISIN", "KEENYA",
                "KEENYAA", "KEE", "KIYYA", "SANI", "SAN",
            ],
            StopwordCategory::Conjunctions => &[
                "FI", "YOO", "SILAA", "YEROO", "ERGASII", "HAA", "TAY", "AKKAS", "AKKANA",
            ],
            StopwordCategory::Prepositions => &[
                "IRRA", "IRRAA", "IRRAAN", "IRRAATTI", "KEESSAA", "KEESSATTI", "GADII", "GADI",
                "WAAJIN", "FAANAA",
            ],
            StopwordCategory::AuxiliaryVerbs => &["TAA", "TAUU", "DHA", "DHAUU", "JIRA", "JIRUU"],
            StopwordCategory::Demonstratives => &["KUN", "SUN", "KANA", "SANA", "AKKANA", "AKKAS"],
            StopwordCategory::QuestionWords => &["EENYUU", "MAAL", "EESSAA", "YOO"],
            StopwordCategory::Adverbs => &["AMMA", "AMMAA", "ACHII", "ASI", "DHUGAA", "DHUGAATTI"],
        }
    }
}

impl FromStr for StopwordCategory {
    type Err = QubeeError;

    /// Accepts the snake_case name, with `-` or spaces in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        StopwordCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| QubeeError::UnknownStopwordCategory(s.to_string()))
    }
}

impl fmt::Display for StopwordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stopword set: the default list plus every category.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    pub fn new() -> Self {
        let words = DEFAULT_STOPWORDS
            .iter()
            .chain(StopwordCategory::ALL.iter().flat_map(|c| c.words()))
            .map(|w| w.to_string())
            .collect();
        Self { words }
    }

    /// An empty set, for fully custom lists.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership. With `check_variants`, a word that becomes a
    /// stopword after removing a short functional suffix (`-TI`, `-N`,
    /// `-F`, `-KEE`, ...) also counts.
    pub fn is_stopword(&self, word: &str, check_variants: bool) -> bool {
        if word.is_empty() {
            return false;
        }
        if self.words.contains(word) {
            return true;
        }
        check_variants
            && STOPWORD_VARIANT_SUFFIXES.iter().any(|suffix| {
                word.len() > suffix.len()
                    && word
                        .strip_suffix(suffix)
                        .is_some_and(|base| self.words.contains(base))
            })
    }

    pub fn remove_stopwords<S: AsRef<str>>(&self, words: &[S], check_variants: bool) -> Vec<String> {
        words
            .iter()
            .map(AsRef::as_ref)
            .filter(|w| !self.is_stopword(w, check_variants))
            .map(str::to_string)
            .collect()
    }

    /// Drop the words belonging to any of `categories`. An empty category
    /// list keeps every word.
    pub fn filter_by_category<S: AsRef<str>>(
        &self,
        words: &[S],
        categories: &[StopwordCategory],
    ) -> Vec<String> {
        words
            .iter()
            .map(AsRef::as_ref)
            .filter(|w| !categories.iter().any(|c| c.words().contains(w)))
            .map(str::to_string)
            .collect()
    }

    /// Add words. They are uppercased to match the stored convention.
    pub fn add<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_uppercase()));
    }

    pub fn remove<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for w in words {
            self.words.remove(&w.as_ref().to_uppercase());
        }
    }

    /// Sorted stopwords. With categories, only their built-in members.
    pub fn words(&self, categories: &[StopwordCategory]) -> Vec<String> {
        let mut out: Vec<String> = if categories.is_empty() {
            self.words.iter().cloned().collect()
        } else {
            let set: HashSet<&str> = categories.iter().flat_map(|c| c.words()).copied().collect();
            set.into_iter().map(str::to_string).collect()
        };
        out.sort_unstable();
        out
    }
}
