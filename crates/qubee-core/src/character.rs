// Character classification for tokenization and Unicode case utilities.
//
// This is the script-level view of a character (letter, digit, whitespace,
// punctuation). The language-level view (vowel, consonant, diacritic) lives
// in the alphabet table.

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification used by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    CharType::Unknown
}

/// Whether `c` forms part of a word: a letter or a digit.
pub fn is_word_char(c: char) -> bool {
    matches!(get_char_type(c), CharType::Letter | CharType::Digit)
}

/// Check whether a character is a punctuation character recognized by the
/// tokenizer.
fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | ':'
            | '!'
            | '?'
            | '\''
            | '"'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '-'
            | '/'
            | '&'
            | '\u{00AB}' // « LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00BB}' // » RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{2018}' // LEFT SINGLE QUOTATION MARK
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
            | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
            | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
            | '\u{2026}' // HORIZONTAL ELLIPSIS
    )
}

// ---------------------------------------------------------------------------
// Punctuation roles
// ---------------------------------------------------------------------------

/// Apostrophe variants. In Qubee the apostrophe (hudhaa) marks a glottal
/// stop and stays inside the word.
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

/// Hyphen variants that may join the parts of a compound word.
pub fn is_hyphen(c: char) -> bool {
    matches!(c, '-' | '\u{2010}' | '\u{2011}')
}

/// Characters that keep a word together when they sit between two word
/// characters.
pub fn is_word_connector(c: char) -> bool {
    is_apostrophe(c) || is_hyphen(c)
}

/// Sentence-final punctuation.
pub fn is_sentence_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\u{2026}')
}

/// Closing quotes and brackets that may follow sentence-final punctuation
/// and still belong to the sentence.
pub fn is_closing_punctuation(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | ')' | ']' | '}' | '\u{00BB}' | '\u{2019}' | '\u{201D}'
    )
}

/// Zero-width characters that carry no text but break naive word matching.
pub fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}')
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// One-to-one mappings only: for characters whose full case mapping expands
// to several characters only the first one is kept, so the character count
// of a string never changes under these helpers.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Check whether a character is whitespace.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}
