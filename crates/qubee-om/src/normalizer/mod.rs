// Text normalization: punctuation standardization, diacritic folding,
// casing policy and whitespace cleanup.
//
// The steps run in a fixed order over a single pass of the input:
// 0. canonical composition (NFC), Unicode punctuation standardization,
//    zero-width characters to space
// 1. diacritic folding
// 1b. characters outside the lenient whitelist to space
// 2. uppercase (unless case is preserved)
// 3. whitespace collapse
// 4. trim

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use unicode_normalization::{UnicodeNormalization, is_nfc};

use qubee_core::Alphabet;
use qubee_core::character::{is_zero_width, simple_upper};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration options for the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerOptions {
    /// Keep the input's letter case instead of uppercasing.
    pub preserve_case: bool,

    /// Map typographic quotes, dashes and the ellipsis to their ASCII forms.
    pub standardize_punctuation: bool,

    /// Replace characters the lenient validator would reject (digits,
    /// symbols, non-Qubee letters) with a space.
    pub strip_invalid: bool,

    /// Replace `. , ; : ! ?` with a space. Apostrophes and hyphens stay.
    pub remove_punctuation: bool,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            preserve_case: false,
            standardize_punctuation: true,
            strip_invalid: true,
            remove_punctuation: false,
        }
    }
}

// ---------------------------------------------------------------------------
// NormalizedText
// ---------------------------------------------------------------------------

/// Output of [`Normalizer::normalize`]: no diacritics, single interior
/// spaces, no leading or trailing whitespace.
///
/// Only the normalizer can construct one:
///
/// ```compile_fail
/// let text = qubee_om::normalizer::NormalizedText::default();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NormalizedText> for String {
    fn from(text: NormalizedText) -> Self {
        text.0
    }
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// Canonical text normalizer for Qubee.
#[derive(Debug, Clone)]
pub struct Normalizer {
    alphabet: Arc<Alphabet>,
    options: NormalizerOptions,
}

impl Normalizer {
    pub fn new(alphabet: Arc<Alphabet>, options: NormalizerOptions) -> Self {
        Self { alphabet, options }
    }

    pub fn options(&self) -> NormalizerOptions {
        self.options
    }

    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Normalize `text`. Never fails; empty input gives empty output.
    ///
    /// `"  Áfáan   Oromoo  "` normalizes to `"AFAAN OROMOO"`.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let mut out = String::with_capacity(text.len());
        let mut pending_space = false;

        for c in text.nfc() {
            match self.standard_form(c) {
                Some(replacement) => {
                    for r in replacement.chars() {
                        self.push_char(r, &mut out, &mut pending_space);
                    }
                }
                None => self.push_char(c, &mut out, &mut pending_space),
            }
        }

        NormalizedText(out)
    }

    pub fn normalize_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<NormalizedText> {
        texts.iter().map(|t| self.normalize(t.as_ref())).collect()
    }

    /// Step 0. Zero-width characters always become a space; typographic
    /// punctuation only when standardization is enabled.
    fn standard_form(&self, c: char) -> Option<&'static str> {
        if is_zero_width(c) {
            return Some(" ");
        }
        if !self.options.standardize_punctuation {
            return None;
        }
        match c {
            '\u{2018}' | '\u{2019}' => Some("'"),
            '\u{201C}' | '\u{201D}' => Some("\""),
            '\u{2010}' | '\u{2011}' | '\u{2013}' | '\u{2014}' => Some("-"),
            '\u{2026}' => Some("..."),
            _ => None,
        }
    }

    /// Steps 1 to 4 for one character.
    fn push_char(&self, c: char, out: &mut String, pending_space: &mut bool) {
        let mut c = self.alphabet.fold(c);

        if self.options.strip_invalid && !self.is_lenient_char(c) {
            c = ' ';
        }
        if self.options.remove_punctuation && is_removable_punctuation(c) {
            c = ' ';
        }

        if c.is_whitespace() {
            // Leading whitespace is dropped, interior runs become one space
            // and trailing whitespace is never flushed.
            if !out.is_empty() {
                *pending_space = true;
            }
            return;
        }
        if *pending_space {
            out.push(' ');
            *pending_space = false;
        }
        out.push(if self.options.preserve_case {
            c
        } else {
            simple_upper(c)
        });
    }

    fn is_lenient_char(&self, c: char) -> bool {
        c.is_whitespace() || self.alphabet.is_qubee_letter(c) || self.alphabet.is_punctuation(c)
    }
}

/// Canonical composition of `text`, borrowed when it is already NFC.
///
/// A decomposed `a` + U+0301 becomes `á`, which the alphabet folds.
pub fn compose(text: &str) -> Cow<'_, str> {
    if is_nfc(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    }
}

fn is_removable_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':' | '!' | '?')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(Arc::new(Alphabet::qubee()), NormalizerOptions::default())
    }

    fn with(options: NormalizerOptions) -> Normalizer {
        Normalizer::new(Arc::new(Alphabet::qubee()), options)
    }

    #[test]
    fn folds_uppercases_and_collapses() {
        assert_eq!(
            normalizer().normalize("  \u{00C1}f\u{00E1}an   Oromoo  ").as_str(),
            "AFAAN OROMOO"
        );
    }

    #[test]
    fn decomposed_diacritics_are_composed_first() {
        assert_eq!(
            normalizer().normalize("  A\u{0301}fa\u{0301}an   Oromoo  ").as_str(),
            "AFAAN OROMOO"
        );
        assert_eq!(normalizer().normalize("gu\u{0300}dda\u{0301}a").as_str(), "GUDDAA");
    }

    #[test]
    fn compose_borrows_composed_text() {
        assert!(matches!(compose("Afaan \u{00C1}"), Cow::Borrowed(_)));
        assert_eq!(compose("A\u{0301}"), "\u{00C1}");
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(normalizer().normalize("").is_empty());
        assert!(normalizer().normalize(" \t\n ").is_empty());
    }

    #[test]
    fn preserve_case_keeps_letters() {
        let n = with(NormalizerOptions {
            preserve_case: true,
            ..NormalizerOptions::default()
        });
        assert_eq!(n.normalize("Afaan  \u{00D3}romoo").as_str(), "Afaan Oromoo");
    }

    #[test]
    fn typographic_punctuation_is_standardized() {
        let n = normalizer();
        assert_eq!(n.normalize("waa\u{2019}ee").as_str(), "WAA'EE");
        assert_eq!(n.normalize("\u{201C}Eeyyee\u{201D}").as_str(), "\"EEYYEE\"");
        assert_eq!(n.normalize("Afaan\u{2013}Oromoo").as_str(), "AFAAN-OROMOO");
        assert_eq!(n.normalize("dha\u{2026}").as_str(), "DHA...");
    }

    #[test]
    fn zero_width_becomes_space() {
        assert_eq!(normalizer().normalize("mana\u{200B}barumsaa").as_str(), "MANA BARUMSAA");
    }

    #[test]
    fn invalid_characters_are_stripped() {
        assert_eq!(normalizer().normalize("Barattoota 25 @ mana").as_str(), "BARATTOOTA MANA");
    }

    #[test]
    fn invalid_characters_kept_when_stripping_disabled() {
        let n = with(NormalizerOptions {
            strip_invalid: false,
            ..NormalizerOptions::default()
        });
        assert_eq!(n.normalize("kutaa 3ffaa").as_str(), "KUTAA 3FFAA");
    }

    #[test]
    fn punctuation_removal_keeps_connectors() {
        let n = with(NormalizerOptions {
            remove_punctuation: true,
            ..NormalizerOptions::default()
        });
        assert_eq!(n.normalize("Eeyyee, waa'ee Afaan-Oromoo!").as_str(), "EEYYEE WAA'EE AFAAN-OROMOO");
    }

    #[test]
    fn normalize_is_idempotent() {
        let n = normalizer();
        let once = n.normalize(" G\u{00FA}dd\u{00E1}a  d\u{00E9}? ");
        assert_eq!(n.normalize(&once), once);
    }

    #[test]
    fn batch() {
        let out = normalizer().normalize_batch(&["mana", " bishaan "]);
        let texts: Vec<&str> = out.iter().map(|t| t.as_str()).collect();
        assert_eq!(texts, vec!["MANA", "BISHAAN"]);
    }

    #[test]
    fn display_and_deref() {
        let text = normalizer().normalize("nagaa");
        assert_eq!(text.to_string(), "NAGAA");
        assert!(text.starts_with("NA"));
        assert_eq!(String::from(text), "NAGAA");
    }
}
