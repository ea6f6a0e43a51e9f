// Qubee alphabet table: letter classes, clusters, diacritics and the
// character whitelist every other component is checked against.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::character::{simple_lower, simple_upper};
use crate::error::AlphabetError;

// ---------------------------------------------------------------------------
// Qubee data
// ---------------------------------------------------------------------------

const QUBEE_VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U'];

const QUBEE_CONSONANTS: &[char] = &[
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'X',
    'Y', 'Z',
];

/// Native consonant digraphs (qubee dachaa).
const QUBEE_DIGRAPHS: &[&str] = &["CH", "DH", "NY", "PH", "SH"];

/// Long vowels, written as doubled letters.
const QUBEE_DIPHTHONGS: &[&str] = &["AA", "EE", "II", "OO", "UU"];

/// Digraphs found in loanwords and names, not part of the native inventory.
const QUBEE_FOREIGN_DIGRAPHS: &[&str] = &["TS", "ZH"];

/// Decorated vowels (acute and grave) and their base letters. The
/// lowercase pairs are derived when the table is assembled.
const QUBEE_DIACRITICS: &[(char, char)] = &[
    ('\u{00C1}', 'A'), // Á
    ('\u{00C0}', 'A'), // À
    ('\u{00C9}', 'E'), // É
    ('\u{00C8}', 'E'), // È
    ('\u{00CD}', 'I'), // Í
    ('\u{00CC}', 'I'), // Ì
    ('\u{00D3}', 'O'), // Ó
    ('\u{00D2}', 'O'), // Ò
    ('\u{00DA}', 'U'), // Ú
    ('\u{00D9}', 'U'), // Ù
];

/// Punctuation accepted by lenient validation.
const QUBEE_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '\'', '"', '(', ')', '[', ']', '!', '?', '-',
];

/// Punctuation that may appear inside a word. Strict validation accepts
/// these and nothing else besides letters and whitespace.
const QUBEE_CONNECTORS: &[char] = &['\'', '-'];

/// Whitespace characters included in `valid_chars`.
const VALID_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

// ---------------------------------------------------------------------------
// CharClass
// ---------------------------------------------------------------------------

/// Phonological class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharClass {
    Vowel,
    Consonant,
    Other,
}

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

/// Immutable alphabet table.
///
/// All lookups are case-insensitive and diacritic-aware: `á` is a vowel
/// because it folds to `a`. The classification table and the set of valid
/// characters are computed once when the alphabet is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    vowels: Vec<char>,
    consonants: Vec<char>,
    digraphs: Vec<[char; 2]>,
    diphthongs: Vec<[char; 2]>,
    foreign_digraphs: Vec<[char; 2]>,
    diacritics: HashMap<char, char>,
    punctuation: Vec<char>,
    connectors: Vec<char>,
    classes: HashMap<char, CharClass>,
    valid_chars: HashSet<char>,
}

impl Alphabet {
    /// The standard Qubee alphabet for Afaan Oromoo.
    pub fn qubee() -> Self {
        AlphabetBuilder::qubee().assemble()
    }

    pub fn builder() -> AlphabetBuilder {
        AlphabetBuilder::new()
    }

    // -- Single characters --------------------------------------------------

    /// Phonological class of `c`.
    pub fn classify(&self, c: char) -> CharClass {
        self.classes.get(&c).copied().unwrap_or(CharClass::Other)
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.classify(c) == CharClass::Vowel
    }

    pub fn is_consonant(&self, c: char) -> bool {
        self.classify(c) == CharClass::Consonant
    }

    /// A base letter in either case, or a decorated vowel.
    pub fn is_qubee_letter(&self, c: char) -> bool {
        self.classify(c) != CharClass::Other
    }

    pub fn is_diacritic(&self, c: char) -> bool {
        self.diacritics.contains_key(&c)
    }

    /// Whitelisted punctuation (lenient mode).
    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }

    /// Intraword punctuation (apostrophe, hyphen).
    pub fn is_connector(&self, c: char) -> bool {
        self.connectors.contains(&c)
    }

    /// Membership in the full character whitelist.
    pub fn is_valid_char(&self, c: char) -> bool {
        self.valid_chars.contains(&c)
    }

    /// Base letter of a decorated character, or the character itself.
    /// Case is preserved: `á` folds to `a`, `Á` to `A`.
    pub fn fold(&self, c: char) -> char {
        self.diacritics.get(&c).copied().unwrap_or(c)
    }

    // -- Pairs --------------------------------------------------------------

    /// Class of the two-letter unit `a b` if it is a digraph (native or
    /// foreign, `Consonant`) or a long vowel (`Vowel`).
    pub fn pair_class(&self, a: char, b: char) -> Option<CharClass> {
        let key = [self.canonical(a), self.canonical(b)];
        if self.digraphs.contains(&key) || self.foreign_digraphs.contains(&key) {
            Some(CharClass::Consonant)
        } else if self.diphthongs.contains(&key) {
            Some(CharClass::Vowel)
        } else {
            None
        }
    }

    /// Whether `text` is exactly one native consonant digraph.
    pub fn is_digraph(&self, text: &str) -> bool {
        self.pair_of(text).is_some_and(|key| self.digraphs.contains(&key))
    }

    /// Whether `text` is exactly one foreign digraph.
    pub fn is_foreign_digraph(&self, text: &str) -> bool {
        self.pair_of(text)
            .is_some_and(|key| self.foreign_digraphs.contains(&key))
    }

    /// Whether `text` is exactly one long vowel.
    pub fn is_diphthong(&self, text: &str) -> bool {
        self.pair_of(text).is_some_and(|key| self.diphthongs.contains(&key))
    }

    // -- Strings ------------------------------------------------------------

    /// Replace every decorated character with its base letter, preserving
    /// case and leaving all other characters untouched.
    pub fn normalize_diacritics(&self, text: &str) -> String {
        text.chars().map(|c| self.fold(c)).collect()
    }

    pub fn count_vowels(&self, text: &str) -> usize {
        text.chars().filter(|&c| self.is_vowel(c)).count()
    }

    pub fn count_consonants(&self, text: &str) -> usize {
        text.chars().filter(|&c| self.is_consonant(c)).count()
    }

    pub fn has_vowel(&self, text: &str) -> bool {
        text.chars().any(|c| self.is_vowel(c))
    }

    // -- Inventory ----------------------------------------------------------

    /// Every base letter, uppercase, in alphabetical order.
    pub fn all_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .vowels
            .iter()
            .chain(self.consonants.iter())
            .copied()
            .collect();
        letters.sort_unstable();
        letters.dedup();
        letters
    }

    pub fn vowels(&self) -> &[char] {
        &self.vowels
    }

    pub fn consonants(&self) -> &[char] {
        &self.consonants
    }

    pub fn digraphs(&self) -> &[[char; 2]] {
        &self.digraphs
    }

    pub fn diphthongs(&self) -> &[[char; 2]] {
        &self.diphthongs
    }

    pub fn foreign_digraphs(&self) -> &[[char; 2]] {
        &self.foreign_digraphs
    }

    pub fn punctuation(&self) -> &[char] {
        &self.punctuation
    }

    /// The character whitelist, sorted.
    pub fn valid_chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.valid_chars.iter().copied().collect();
        chars.sort_unstable();
        chars
    }

    // -- Internals ----------------------------------------------------------

    fn canonical(&self, c: char) -> char {
        simple_upper(self.fold(c))
    }

    fn pair_of(&self, text: &str) -> Option<[char; 2]> {
        let mut chars = text.chars();
        let (a, b) = (chars.next()?, chars.next()?);
        if chars.next().is_some() {
            return None;
        }
        Some([self.canonical(a), self.canonical(b)])
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::qubee()
    }
}

// ---------------------------------------------------------------------------
// AlphabetBuilder
// ---------------------------------------------------------------------------

/// Builder for alternate alphabets (tests, dialect experiments).
///
/// Letters and clusters may be given in any case; they are stored
/// uppercase. [`AlphabetBuilder::build`] checks the table invariants.
#[derive(Debug, Clone, Default)]
pub struct AlphabetBuilder {
    vowels: Vec<char>,
    consonants: Vec<char>,
    digraphs: Vec<String>,
    diphthongs: Vec<String>,
    foreign_digraphs: Vec<String>,
    diacritics: Vec<(char, char)>,
    punctuation: Vec<char>,
    connectors: Vec<char>,
}

impl AlphabetBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preloaded with the Qubee data.
    pub fn qubee() -> Self {
        Self {
            vowels: QUBEE_VOWELS.to_vec(),
            consonants: QUBEE_CONSONANTS.to_vec(),
            digraphs: QUBEE_DIGRAPHS.iter().map(|s| s.to_string()).collect(),
            diphthongs: QUBEE_DIPHTHONGS.iter().map(|s| s.to_string()).collect(),
            foreign_digraphs: QUBEE_FOREIGN_DIGRAPHS.iter().map(|s| s.to_string()).collect(),
            diacritics: QUBEE_DIACRITICS.to_vec(),
            punctuation: QUBEE_PUNCTUATION.to_vec(),
            connectors: QUBEE_CONNECTORS.to_vec(),
        }
    }

    pub fn vowels(mut self, vowels: impl IntoIterator<Item = char>) -> Self {
        self.vowels = vowels.into_iter().collect();
        self
    }

    pub fn consonants(mut self, consonants: impl IntoIterator<Item = char>) -> Self {
        self.consonants = consonants.into_iter().collect();
        self
    }

    pub fn digraph(mut self, digraph: &str) -> Self {
        self.digraphs.push(digraph.to_string());
        self
    }

    pub fn diphthong(mut self, diphthong: &str) -> Self {
        self.diphthongs.push(diphthong.to_string());
        self
    }

    pub fn foreign_digraph(mut self, digraph: &str) -> Self {
        self.foreign_digraphs.push(digraph.to_string());
        self
    }

    pub fn diacritic(mut self, decorated: char, base: char) -> Self {
        self.diacritics.push((decorated, base));
        self
    }

    pub fn punctuation(mut self, punctuation: impl IntoIterator<Item = char>) -> Self {
        self.punctuation = punctuation.into_iter().collect();
        self
    }

    pub fn connectors(mut self, connectors: impl IntoIterator<Item = char>) -> Self {
        self.connectors = connectors.into_iter().collect();
        self
    }

    /// Validate the invariants and assemble the alphabet.
    pub fn build(self) -> Result<Alphabet, AlphabetError> {
        let vowels = upper_set(&self.vowels);
        let consonants = upper_set(&self.consonants);

        if vowels.is_empty() {
            return Err(AlphabetError::NoVowels);
        }
        if let Some(&c) = vowels.iter().find(|c| consonants.contains(c)) {
            return Err(AlphabetError::OverlappingClasses(c));
        }
        for digraph in self.digraphs.iter().chain(self.foreign_digraphs.iter()) {
            match upper_pair(digraph) {
                Some([a, b]) if consonants.contains(&a) && consonants.contains(&b) => {}
                _ => return Err(AlphabetError::InvalidDigraph(digraph.clone())),
            }
        }
        for diphthong in &self.diphthongs {
            match upper_pair(diphthong) {
                Some([a, b]) if vowels.contains(&a) && vowels.contains(&b) => {}
                _ => return Err(AlphabetError::InvalidDiphthong(diphthong.clone())),
            }
        }
        for &(key, base) in &self.diacritics {
            if !vowels.contains(&simple_upper(base)) {
                return Err(AlphabetError::DiacriticNotVowel { key, base });
            }
        }

        Ok(self.assemble())
    }

    /// Assemble without validation. Only used for data known to be valid.
    fn assemble(self) -> Alphabet {
        let vowels = upper_set(&self.vowels);
        let consonants = upper_set(&self.consonants);
        let pairs = |list: &[String]| -> Vec<[char; 2]> {
            list.iter().filter_map(|s| upper_pair(s)).collect()
        };
        let digraphs = pairs(&self.digraphs);
        let diphthongs = pairs(&self.diphthongs);
        let foreign_digraphs = pairs(&self.foreign_digraphs);

        // Case-preserving diacritic map: every entry in both cases.
        let mut diacritics = HashMap::new();
        for &(key, base) in &self.diacritics {
            diacritics.insert(simple_upper(key), simple_upper(base));
            diacritics.insert(simple_lower(key), simple_lower(base));
        }

        let mut classes = HashMap::new();
        for &v in &vowels {
            classes.insert(v, CharClass::Vowel);
            classes.insert(simple_lower(v), CharClass::Vowel);
        }
        for &c in &consonants {
            classes.insert(c, CharClass::Consonant);
            classes.insert(simple_lower(c), CharClass::Consonant);
        }
        for (&key, &base) in &diacritics {
            let class = classes.get(&base).copied().unwrap_or(CharClass::Other);
            classes.insert(key, class);
        }

        let mut valid_chars: HashSet<char> = classes.keys().copied().collect();
        valid_chars.extend(self.punctuation.iter().copied());
        valid_chars.extend(self.connectors.iter().copied());
        valid_chars.extend(VALID_WHITESPACE.iter().copied());

        Alphabet {
            vowels,
            consonants,
            digraphs,
            diphthongs,
            foreign_digraphs,
            diacritics,
            punctuation: self.punctuation,
            connectors: self.connectors,
            classes,
            valid_chars,
        }
    }
}

/// Uppercase, sorted, deduplicated copy of a letter list.
fn upper_set(letters: &[char]) -> Vec<char> {
    let mut out: Vec<char> = letters.iter().map(|&c| simple_upper(c)).collect();
    out.sort_unstable();
    out.dedup();
    out
}

fn upper_pair(s: &str) -> Option<[char; 2]> {
    let mut chars = s.chars().map(simple_upper);
    let pair = [chars.next()?, chars.next()?];
    if chars.next().is_some() {
        return None;
    }
    Some(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qubee() -> Alphabet {
        Alphabet::qubee()
    }

    // -- Invariants --

    #[test]
    fn qubee_data_passes_validation() {
        let built = AlphabetBuilder::qubee().build().unwrap();
        assert_eq!(built, Alphabet::qubee());
    }

    #[test]
    fn vowels_and_consonants_are_disjoint() {
        let a = qubee();
        for v in a.vowels() {
            assert!(!a.consonants().contains(v));
        }
    }

    #[test]
    fn every_diacritic_folds_to_a_vowel() {
        let a = qubee();
        for c in ['\u{00C1}', '\u{00E1}', '\u{00E9}', '\u{00CD}', '\u{00F3}', '\u{00F9}'] {
            assert!(a.is_diacritic(c));
            assert!(a.is_vowel(a.fold(c)));
        }
    }

    #[test]
    fn overlapping_classes_rejected() {
        let err = AlphabetBuilder::qubee()
            .vowels(['a', 'e', 'y'])
            .build()
            .unwrap_err();
        assert_eq!(err, AlphabetError::OverlappingClasses('Y'));
    }

    #[test]
    fn diacritic_to_consonant_rejected() {
        let err = AlphabetBuilder::qubee()
            .diacritic('\u{00C7}', 'C') // Ç
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            AlphabetError::DiacriticNotVowel {
                key: '\u{00C7}',
                base: 'C'
            }
        );
    }

    #[test]
    fn digraph_with_vowel_rejected() {
        let err = AlphabetBuilder::qubee().digraph("AH").build().unwrap_err();
        assert_eq!(err, AlphabetError::InvalidDigraph("AH".to_string()));
    }

    #[test]
    fn diphthong_with_consonant_rejected() {
        let err = AlphabetBuilder::qubee().diphthong("AB").build().unwrap_err();
        assert_eq!(err, AlphabetError::InvalidDiphthong("AB".to_string()));
    }

    #[test]
    fn empty_alphabet_rejected() {
        assert_eq!(
            AlphabetBuilder::new().build().unwrap_err(),
            AlphabetError::NoVowels
        );
    }

    // -- Classification --

    #[test]
    fn vowel_checks_are_case_insensitive() {
        let a = qubee();
        assert!(a.is_vowel('a'));
        assert!(a.is_vowel('A'));
        assert!(a.is_vowel('\u{00E1}')); // á
        assert!(!a.is_vowel('b'));
        assert!(!a.is_vowel('1'));
    }

    #[test]
    fn consonant_checks() {
        let a = qubee();
        assert!(a.is_consonant('x'));
        assert!(a.is_consonant('Q'));
        assert!(a.is_consonant('y'));
        assert!(!a.is_consonant('o'));
        assert!(!a.is_consonant('\''));
    }

    #[test]
    fn qubee_letters() {
        let a = qubee();
        assert!(a.is_qubee_letter('d'));
        assert!(a.is_qubee_letter('\u{00D3}')); // Ó
        assert!(!a.is_qubee_letter('\u{00E4}')); // ä is not Qubee
        assert!(!a.is_qubee_letter('-'));
    }

    #[test]
    fn classify_table() {
        let a = qubee();
        assert_eq!(a.classify('o'), CharClass::Vowel);
        assert_eq!(a.classify('M'), CharClass::Consonant);
        assert_eq!(a.classify('.'), CharClass::Other);
    }

    // -- Pairs --

    #[test]
    fn digraphs_and_diphthongs() {
        let a = qubee();
        assert!(a.is_digraph("dh"));
        assert!(a.is_digraph("NY"));
        assert!(!a.is_digraph("ts"));
        assert!(a.is_foreign_digraph("ts"));
        assert!(a.is_diphthong("oo"));
        assert!(a.is_diphthong("\u{00E1}a")); // áa
        assert!(!a.is_diphthong("ao"));
        assert!(!a.is_digraph("dhu"));
    }

    #[test]
    fn pair_class_lookup() {
        let a = qubee();
        assert_eq!(a.pair_class('s', 'h'), Some(CharClass::Consonant));
        assert_eq!(a.pair_class('Z', 'h'), Some(CharClass::Consonant));
        assert_eq!(a.pair_class('e', 'E'), Some(CharClass::Vowel));
        assert_eq!(a.pair_class('r', 'r'), None);
    }

    // -- Diacritics --

    #[test]
    fn normalize_diacritics_preserves_case() {
        let a = qubee();
        assert_eq!(a.normalize_diacritics("\u{00C1}f\u{00E1}an"), "Afaan");
        assert_eq!(a.normalize_diacritics("ORÓMOO"), "OROMOO");
        assert_eq!(a.normalize_diacritics("waa'ee 12!"), "waa'ee 12!");
    }

    #[test]
    fn normalize_diacritics_is_idempotent() {
        let a = qubee();
        let once = a.normalize_diacritics("B\u{00E0}r\u{00CD}s\u{00FA}");
        assert_eq!(a.normalize_diacritics(&once), once);
    }

    // -- Inventory --

    #[test]
    fn all_letters_are_alphabetical() {
        let letters: String = qubee().all_letters().into_iter().collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn valid_chars_closure() {
        let a = qubee();
        let valid = a.valid_chars();
        assert!(valid.contains(&'a'));
        assert!(valid.contains(&'Z'));
        assert!(valid.contains(&'\u{00FA}'));
        assert!(valid.contains(&'?'));
        assert!(valid.contains(&' '));
        assert!(!valid.contains(&'1'));
        assert!(!valid.contains(&'@'));
        // 26 letters x 2 cases + 20 diacritics + 13 punctuation + 4 whitespace
        assert_eq!(valid.len(), 52 + 20 + 13 + 4);
    }

    #[test]
    fn counts() {
        let a = qubee();
        assert_eq!(a.count_vowels("Oromoo"), 4);
        assert_eq!(a.count_consonants("Oromoo"), 2);
        assert!(a.has_vowel("mana"));
        assert!(!a.has_vowel("KKF"));
    }

    // -- Properties --

    proptest::proptest! {
        #[test]
        fn folding_is_idempotent(text in "\\PC{0,40}") {
            let a = qubee();
            let once = a.normalize_diacritics(&text);
            proptest::prop_assert_eq!(a.normalize_diacritics(&once), once);
        }

        #[test]
        fn folding_maps_decorated_vowels(c in proptest::char::any()) {
            let a = qubee();
            let folded = a.fold(c);
            if a.is_diacritic(c) {
                proptest::prop_assert!(a.is_vowel(folded));
                proptest::prop_assert!(!a.is_diacritic(folded));
            } else {
                proptest::prop_assert_eq!(folded, c);
            }
        }
    }
}
