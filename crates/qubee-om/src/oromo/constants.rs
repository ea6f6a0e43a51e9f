// Shared Afaan Oromoo language constants used across multiple modules.
//
// Individual constants may be unused when their consumer feature is disabled.

/// Abbreviations after which a single period does not end a sentence.
pub(crate) const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "DR", "PROF", "MR", "MRS", "MS", "OB", "AD", "FKN", "KKF", "LAK",
];

/// Three-consonant clusters that occur in native words.
pub(crate) const LICENSED_TRIPLE_CLUSTERS: &[&str] = &["NTR", "STR"];

/// Irregular verb forms and their roots. Every root is a prefix of its form.
pub(crate) const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("DHUFAN", "DHUF"),
    ("DHAQAN", "DHAQ"),
    ("BEEKAN", "BEEK"),
    ("JEDHAN", "JEDH"),
    ("QABAN", "QAB"),
    ("ARGATAN", "ARGAT"),
    ("BARATAN", "BARAT"),
    ("DHIISAN", "DHIIS"),
    ("FIDAN", "FID"),
    ("KENNAN", "KENN"),
];

/// Common verb roots, uppercase.
pub(crate) const VERB_ROOTS: &[&str] = &[
    "DHUF", "DHAQ", "BEEK", "JEDH", "QAB", "ARGAT", "BARAT", "DHIIS", "FID", "KENN", "BAR", "HIM",
];

/// Infinitive ending appended by lemmatization.
pub(crate) const INFINITIVE_SUFFIX: &str = "uu";

/// Cardinal number words, lowercase.
#[allow(dead_code)]
pub(crate) const NUMBER_WORDS: &[&str] = &[
    "tokko", "lama", "sadi", "afur", "shan", "jahaa", "torba", "saddeet", "sagal", "kudhan",
    "kudha",
];

/// Coordinating conjunctions, lowercase.
#[allow(dead_code)]
pub(crate) const CONJUNCTIONS: &[&str] = &["fi", "yookiin"];

/// Adpositions, lowercase.
#[allow(dead_code)]
pub(crate) const ADPOSITIONS: &[&str] = &[
    "gara", "jalatti", "bira", "keessa", "alaa", "wajjin", "malee", "waa'ee",
];

/// Short functional suffixes stripped when looking up stopword variants.
#[allow(dead_code)]
pub(crate) const STOPWORD_VARIANT_SUFFIXES: &[&str] = &[
    "TII", "TI", "NI", "N", "FI", "F", "SI", "S", "KEE", "SAA", "SA",
];
