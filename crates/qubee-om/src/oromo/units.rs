// Phonological units of a word.
//
// A unit is one letter, or two letters that act as one sound: a consonant
// digraph (DH, SH, ...) or a long vowel (AA, EE, ...). Pairs are matched
// greedily from the left, so "aaa" scans as AA + A.

use qubee_core::{Alphabet, CharClass};

/// One unit, as a byte range into the scanned word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unit {
    pub start: usize,
    pub end: usize,
    pub class: CharClass,
}

impl Unit {
    pub fn is_vowel(&self) -> bool {
        self.class == CharClass::Vowel
    }

    pub fn is_consonant(&self) -> bool {
        self.class == CharClass::Consonant
    }

    pub fn as_str<'a>(&self, word: &'a str) -> &'a str {
        &word[self.start..self.end]
    }
}

/// Split `word` into units. Characters outside the alphabet become
/// single-character units of class `Other`.
pub(crate) fn scan_units(alphabet: &Alphabet, word: &str) -> Vec<Unit> {
    let mut units = Vec::with_capacity(word.len());
    let mut iter = word.char_indices().peekable();

    while let Some((start, c)) = iter.next() {
        let class = alphabet.classify(c);
        if class != CharClass::Other {
            let pair = iter
                .peek()
                .and_then(|&(next_start, next)| {
                    alphabet
                        .pair_class(c, next)
                        .map(|pair| (next_start + next.len_utf8(), pair))
                });
            if let Some((end, pair)) = pair {
                iter.next();
                units.push(Unit {
                    start,
                    end,
                    class: pair,
                });
                continue;
            }
        }
        units.push(Unit {
            start,
            end: start + c.len_utf8(),
            class,
        });
    }

    units
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(word: &str) -> Vec<(String, CharClass)> {
        let alphabet = Alphabet::qubee();
        scan_units(&alphabet, word)
            .into_iter()
            .map(|u| (u.as_str(word).to_string(), u.class))
            .collect()
    }

    #[test]
    fn digraphs_and_long_vowels_are_single_units() {
        let units = classes("dhaabbata");
        let texts: Vec<&str> = units.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(texts, vec!["dh", "aa", "b", "b", "a", "t", "a"]);
        assert_eq!(units[0].1, CharClass::Consonant);
        assert_eq!(units[1].1, CharClass::Vowel);
    }

    #[test]
    fn greedy_left_to_right() {
        let texts: Vec<String> = classes("aaa").into_iter().map(|(t, _)| t).collect();
        assert_eq!(texts, vec!["aa", "a"]);
    }

    #[test]
    fn other_characters_stand_alone() {
        let units = classes("waa'ee");
        assert_eq!(units.len(), 4);
        assert_eq!(units[2], ("'".to_string(), CharClass::Other));
    }

    #[test]
    fn decorated_long_vowel() {
        let units = classes("\u{00E1}an"); // áan
        assert_eq!(units[0], ("\u{00E1}a".to_string(), CharClass::Vowel));
    }
}
