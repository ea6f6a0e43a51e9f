// Syllabification of Qubee words.
//
// A word is scanned into units (letters, digraphs, long vowels). Vowel
// units are syllable nuclei. Between two nuclei:
// - no consonant: split between the vowels
// - one consonant: it opens the next syllable (CV over VC)
// - two or more: the first closes the previous syllable, the rest open
//   the next one
// Leading consonants join the first syllable and trailing ones the last.
// Characters outside the alphabet (apostrophe, digits) are elements of
// their own and separate the letter runs around them.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use qubee_core::{Alphabet, CharClass};

use crate::oromo::units::{Unit, scan_units};

/// Shape of one syllable, with digraphs and long vowels counted as one
/// unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SyllableShape {
    V,
    VC,
    CV,
    CVC,
    Other,
}

impl fmt::Display for SyllableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SyllableShape::V => "V",
            SyllableShape::VC => "VC",
            SyllableShape::CV => "CV",
            SyllableShape::CVC => "CVC",
            SyllableShape::Other => "OTHER",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Syllabifier {
    alphabet: Arc<Alphabet>,
}

impl Syllabifier {
    pub fn new(alphabet: Arc<Alphabet>) -> Self {
        Self { alphabet }
    }

    /// Split one word into syllables. The elements concatenate to `word`
    /// exactly; empty input gives no elements.
    ///
    /// `"Oromoo"` splits into `["O", "ro", "moo"]`.
    pub fn split_into_syllables<'a>(&self, word: &'a str) -> Vec<&'a str> {
        let units = scan_units(&self.alphabet, word);
        let mut out = Vec::new();

        let mut run_start = 0;
        for (i, unit) in units.iter().enumerate() {
            if unit.class == CharClass::Other {
                split_run(word, &units[run_start..i], &mut out);
                out.push(unit.as_str(word));
                run_start = i + 1;
            }
        }
        split_run(word, &units[run_start..], &mut out);

        out
    }

    /// Number of syllable nuclei, at least one for a non-empty word.
    pub fn count_syllables(&self, word: &str) -> usize {
        if word.is_empty() {
            return 0;
        }
        let nuclei = scan_units(&self.alphabet, word)
            .iter()
            .filter(|u| u.is_vowel())
            .count();
        nuclei.max(1)
    }

    /// Shape of each element of [`Self::split_into_syllables`].
    pub fn syllable_pattern(&self, word: &str) -> Vec<SyllableShape> {
        self.split_into_syllables(word)
            .into_iter()
            .map(|syl| self.shape(syl))
            .collect()
    }

    pub fn shape(&self, syllable: &str) -> SyllableShape {
        let units = scan_units(&self.alphabet, syllable);
        let classes: Vec<CharClass> = units.iter().map(|u| u.class).collect();
        match classes.as_slice() {
            [CharClass::Vowel] => SyllableShape::V,
            [CharClass::Vowel, CharClass::Consonant] => SyllableShape::VC,
            [CharClass::Consonant, CharClass::Vowel] => SyllableShape::CV,
            [CharClass::Consonant, CharClass::Vowel, CharClass::Consonant] => SyllableShape::CVC,
            _ => SyllableShape::Other,
        }
    }
}

/// Syllabify one run of letter units and push the pieces to `out`.
fn split_run<'a>(word: &'a str, run: &[Unit], out: &mut Vec<&'a str>) {
    let (Some(first), Some(last)) = (run.first(), run.last()) else {
        return;
    };

    let nuclei: Vec<usize> = run
        .iter()
        .enumerate()
        .filter(|(_, u)| u.is_vowel())
        .map(|(i, _)| i)
        .collect();

    // Byte offsets where a new syllable starts.
    let mut cuts = Vec::with_capacity(nuclei.len());
    for pair in nuclei.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let cut_unit = match next - prev - 1 {
            0 => next,
            1 => prev + 1,
            _ => prev + 2,
        };
        cuts.push(run[cut_unit].start);
    }

    let mut start = first.start;
    for cut in cuts {
        out.push(&word[start..cut]);
        start = cut;
    }
    out.push(&word[start..last.end]);
}
