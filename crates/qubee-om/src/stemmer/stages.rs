// Suffix-stripping stage descriptors.
//
// Suffixes are uppercase ASCII. Within a stage the longest matching suffix
// wins, so list order does not matter.

use std::fmt;

/// Morphological category removed by a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Plural,
    Possessive,
    Case,
    Derivational,
    Verb,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StageKind::Plural => "plural",
            StageKind::Possessive => "possessive",
            StageKind::Case => "case",
            StageKind::Derivational => "derivational",
            StageKind::Verb => "verb",
        })
    }
}

/// Precondition on the residual left after removing a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    /// Vowels the residual must still contain.
    pub min_vowels: usize,
    /// Characters the residual must still contain.
    pub min_len: usize,
}

/// One ordered affix-stripping stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub kind: StageKind,
    pub suffixes: &'static [&'static str],
    /// Extra candidates tried only in aggressive mode.
    pub aggressive_suffixes: &'static [&'static str],
    pub guard: Guard,
}

impl Stage {
    /// Candidate suffixes for the given mode.
    pub fn candidates(&self, aggressive: bool) -> impl Iterator<Item = &'static str> + '_ {
        let extra: &'static [&'static str] = if aggressive {
            self.aggressive_suffixes
        } else {
            &[]
        };
        self.suffixes.iter().chain(extra.iter()).copied()
    }
}

const GUARD: Guard = Guard {
    min_vowels: 1,
    min_len: 2,
};

/// The verb stage needs a longer residual: short verbal endings (-U, -E)
/// also end many nouns.
const VERB_GUARD: Guard = Guard {
    min_vowels: 1,
    min_len: 3,
};

pub const PLURAL: Stage = Stage {
    kind: StageKind::Plural,
    suffixes: &["TOOTAA", "OOTAA", "TOOTA", "OOTA", "OTA", "WWAN", "OOLEE", "OLEE", "LEE", "YYII"],
    aggressive_suffixes: &["TA", "WAN"],
    guard: GUARD,
};

pub const POSSESSIVE: Stage = Stage {
    kind: StageKind::Possessive,
    suffixes: &["ISAANII", "KEESSAN", "KEENYAA", "KEENYA", "ISAA", "ISII", "KOO", "KEE", "SAA"],
    aggressive_suffixes: &["SA", "SI", "KO", "KE"],
    guard: GUARD,
};

pub const CASE: Stage = Stage {
    kind: StageKind::Case,
    suffixes: &[
        "KEESSATTI", "KEESSAA", "IRRATTI", "IRRAAN", "IRRAA", "DHAAN", "DHAA", "TIIN", "ETTI",
        "TTI", "IIF", "TII", "NII",
    ],
    aggressive_suffixes: &["TI", "IN", "F", "N", "AA"],
    guard: GUARD,
};

pub const DERIVATIONAL: Stage = Stage {
    kind: StageKind::Derivational,
    suffixes: &["UMMAA", "UMMA", "ICHAA", "ICHA", "EENYA", "INA"],
    aggressive_suffixes: &["MAA", "NYA", "ACHA"],
    guard: GUARD,
};

pub const VERB: Stage = Stage {
    kind: StageKind::Verb,
    suffixes: &[
        "EESSUU", "ACHUU", "SIISUU", "ISUU", "AMUU", "ATUU", "ITAN", "ATAN", "ANII", "ANI",
        "NEENI", "UU",
    ],
    aggressive_suffixes: &["AN", "TE", "NE", "E", "U"],
    guard: VERB_GUARD,
};

/// Default stage order.
pub const DEFAULT_STAGES: &[Stage] = &[PLURAL, POSSESSIVE, CASE, DERIVATIONAL, VERB];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_order() {
        let kinds: Vec<StageKind> = DEFAULT_STAGES.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StageKind::Plural,
                StageKind::Possessive,
                StageKind::Case,
                StageKind::Derivational,
                StageKind::Verb
            ]
        );
    }

    #[test]
    fn suffixes_are_uppercase_ascii() {
        for stage in DEFAULT_STAGES {
            for suffix in stage.candidates(true) {
                assert!(!suffix.is_empty());
                assert!(suffix.bytes().all(|b| b.is_ascii_uppercase()), "{suffix}");
            }
        }
    }

    #[test]
    fn aggressive_adds_candidates() {
        assert_eq!(PLURAL.candidates(false).count(), 8);
        assert_eq!(PLURAL.candidates(true).count(), 10);
    }

    #[test]
    fn verb_guard_is_stricter() {
        assert!(VERB.guard.min_len > PLURAL.guard.min_len);
    }
}
