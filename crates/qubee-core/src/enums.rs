// Shared enums: token kinds, validation modes and part-of-speech tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownModeError;

/// Kinds of segments produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A single word.
    Word,
    /// A whole sentence including its terminal punctuation.
    Sentence,
}

/// Character validation policy.
///
/// `Lenient` accepts letters, diacritics, whitespace and the punctuation
/// whitelist. `Strict` accepts only letters, diacritics, apostrophe, hyphen
/// and whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ValidationMode {
    #[default]
    Lenient,
    Strict,
}

impl ValidationMode {
    pub fn is_strict(self) -> bool {
        self == ValidationMode::Strict
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValidationMode::Lenient => "lenient",
            ValidationMode::Strict => "strict",
        }
    }
}

impl From<bool> for ValidationMode {
    /// `true` selects strict mode.
    fn from(strict: bool) -> Self {
        if strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        }
    }
}

impl FromStr for ValidationMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(ValidationMode::Lenient),
            "strict" => Ok(ValidationMode::Strict),
            _ => Err(UnknownModeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for ValidationMode {
    type Error = UnknownModeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ValidationMode> for String {
    fn from(mode: ValidationMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Part of speech
// ---------------------------------------------------------------------------

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Noun,
    Verb,
    Adj,
    Adv,
    Pron,
    Det,
    Adp,
    Conj,
    Prt,
    Intj,
    Num,
    Punc,
    /// Foreign or otherwise non-Qubee token.
    X,
    /// Qubee word that no rule recognized.
    Unk,
}

impl PosTag {
    pub const ALL: [PosTag; 14] = [
        PosTag::Noun,
        PosTag::Verb,
        PosTag::Adj,
        PosTag::Adv,
        PosTag::Pron,
        PosTag::Det,
        PosTag::Adp,
        PosTag::Conj,
        PosTag::Prt,
        PosTag::Intj,
        PosTag::Num,
        PosTag::Punc,
        PosTag::X,
        PosTag::Unk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adj => "ADJ",
            PosTag::Adv => "ADV",
            PosTag::Pron => "PRON",
            PosTag::Det => "DET",
            PosTag::Adp => "ADP",
            PosTag::Conj => "CONJ",
            PosTag::Prt => "PRT",
            PosTag::Intj => "INTJ",
            PosTag::Num => "NUM",
            PosTag::Punc => "PUNC",
            PosTag::X => "X",
            PosTag::Unk => "UNK",
        }
    }

    /// Human-readable name.
    pub fn description(self) -> &'static str {
        match self {
            PosTag::Noun => "Noun",
            PosTag::Verb => "Verb",
            PosTag::Adj => "Adjective",
            PosTag::Adv => "Adverb",
            PosTag::Pron => "Pronoun",
            PosTag::Det => "Determiner",
            PosTag::Adp => "Adposition",
            PosTag::Conj => "Conjunction",
            PosTag::Prt => "Particle",
            PosTag::Intj => "Interjection",
            PosTag::Num => "Numeral",
            PosTag::Punc => "Punctuation",
            PosTag::X => "Other",
            PosTag::Unk => "Unknown",
        }
    }
}

impl FromStr for PosTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        PosTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == upper)
            .ok_or_else(|| format!("unknown part-of-speech tag {s:?}"))
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_default_is_lenient() {
        assert_eq!(ValidationMode::default(), ValidationMode::Lenient);
    }

    #[test]
    fn mode_from_bool() {
        assert_eq!(ValidationMode::from(true), ValidationMode::Strict);
        assert_eq!(ValidationMode::from(false), ValidationMode::Lenient);
    }

    #[test]
    fn mode_parse_is_case_insensitive() {
        assert_eq!("Strict".parse::<ValidationMode>(), Ok(ValidationMode::Strict));
        assert_eq!(" lenient ".parse::<ValidationMode>(), Ok(ValidationMode::Lenient));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = "strictest".parse::<ValidationMode>().unwrap_err();
        assert_eq!(err, UnknownModeError("strictest".to_string()));
        assert!(err.to_string().contains("strictest"));
    }

    #[test]
    fn mode_display_roundtrips_through_parse() {
        for mode in [ValidationMode::Lenient, ValidationMode::Strict] {
            assert_eq!(mode.to_string().parse::<ValidationMode>(), Ok(mode));
        }
    }

    #[test]
    fn token_kind_is_copy() {
        let a = TokenKind::Word;
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, TokenKind::Sentence);
    }

    #[test]
    fn pos_tag_parse() {
        assert_eq!("noun".parse::<PosTag>(), Ok(PosTag::Noun));
        assert_eq!("PUNC".parse::<PosTag>(), Ok(PosTag::Punc));
        assert!("VB".parse::<PosTag>().is_err());
    }

    #[test]
    fn pos_tag_names() {
        for tag in PosTag::ALL {
            assert_eq!(tag.to_string().parse::<PosTag>(), Ok(tag));
        }
        assert_eq!(PosTag::Adp.description(), "Adposition");
    }
}
