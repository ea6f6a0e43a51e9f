// Token type produced by the tokenizer.

use serde::{Deserialize, Serialize};

use crate::enums::TokenKind;

/// A word or sentence segment of a source text.
///
/// `start` and `end` are character offsets (not byte offsets) into the
/// source text the token was cut from, `end` exclusive. `text` is the
/// normalized surface form, which may differ from the source slice in case,
/// diacritics and whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self {
            kind,
            text: text.into(),
            start,
            end,
        }
    }

    pub fn word(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(TokenKind::Word, text, start, end)
    }

    pub fn sentence(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(TokenKind::Sentence, text, start, end)
    }

    /// Length of the source span in characters.
    pub fn span_len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
