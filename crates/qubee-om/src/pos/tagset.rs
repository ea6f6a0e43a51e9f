// Afaan Oromoo part-of-speech tagset and its mapping to universal tags.

use qubee_core::PosTag;

/// One language-specific tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub tag: &'static str,
    pub description: &'static str,
    pub universal: PosTag,
}

const fn info(tag: &'static str, description: &'static str, universal: PosTag) -> TagInfo {
    TagInfo {
        tag,
        description,
        universal,
    }
}

pub const TAGSET: &[TagInfo] = &[
    // Nouns
    info("NN", "Common noun", PosTag::Noun),
    info("NNC", "Count noun", PosTag::Noun),
    info("NNM", "Mass noun", PosTag::Noun),
    info("NPROP", "Proper noun", PosTag::Noun),
    info("NPL", "Plural noun", PosTag::Noun),
    // Pronouns
    info("PPER", "Personal pronoun", PosTag::Pron),
    info("PDEM", "Demonstrative pronoun", PosTag::Pron),
    info("PINT", "Interrogative pronoun", PosTag::Pron),
    info("PREL", "Relative pronoun", PosTag::Pron),
    info("POSS", "Possessive pronoun", PosTag::Pron),
    info("PREFL", "Reflexive pronoun", PosTag::Pron),
    // Verbs
    info("VB", "Base form verb", PosTag::Verb),
    info("VBF", "Finite verb", PosTag::Verb),
    info("VBINF", "Infinitive verb", PosTag::Verb),
    info("VBIMP", "Imperative verb", PosTag::Verb),
    info("VBPART", "Participial verb", PosTag::Verb),
    info("VBCAUS", "Causative verb", PosTag::Verb),
    info("VBPASS", "Passive verb", PosTag::Verb),
    info("VBREFL", "Reflexive verb", PosTag::Verb),
    info("VBAUX", "Auxiliary verb", PosTag::Verb),
    // Adjectives
    info("JJ", "Adjective", PosTag::Adj),
    info("JJC", "Comparative adjective", PosTag::Adj),
    info("JJS", "Superlative adjective", PosTag::Adj),
    info("JJNUM", "Numeral adjective", PosTag::Adj),
    info("JJPOSS", "Possessive adjective", PosTag::Adj),
    // Adverbs
    info("RB", "Adverb", PosTag::Adv),
    info("RBC", "Comparative adverb", PosTag::Adv),
    info("RBS", "Superlative adverb", PosTag::Adv),
    info("RBINT", "Interrogative adverb", PosTag::Adv),
    info("RBNEG", "Negative adverb", PosTag::Adv),
    // Determiners
    info("DT", "Determiner", PosTag::Det),
    info("DTDEM", "Demonstrative determiner", PosTag::Det),
    info("DTINT", "Interrogative determiner", PosTag::Det),
    info("DTPOSS", "Possessive determiner", PosTag::Det),
    info("DTIND", "Indefinite determiner", PosTag::Det),
    // Adpositions
    info("IN", "Preposition", PosTag::Adp),
    info("POST", "Postposition", PosTag::Adp),
    // Conjunctions
    info("CC", "Coordinating conjunction", PosTag::Conj),
    info("CS", "Subordinating conjunction", PosTag::Conj),
    // Particles
    info("RP", "Particle", PosTag::Prt),
    info("NEG", "Negative particle", PosTag::Prt),
    info("FOC", "Focus particle", PosTag::Prt),
    info("Q", "Question particle", PosTag::Prt),
    // Interjections
    info("UH", "Interjection", PosTag::Intj),
    // Numerals
    info("CD", "Cardinal number", PosTag::Num),
    info("OD", "Ordinal number", PosTag::Num),
    // Other
    info("FW", "Foreign word", PosTag::X),
    info("SYM", "Symbol", PosTag::X),
    info("LS", "List item marker", PosTag::X),
    // Punctuation
    info(".", "Sentence-final punctuation", PosTag::Punc),
    info(",", "Comma", PosTag::Punc),
    info(":", "Colon", PosTag::Punc),
    info(";", "Semicolon", PosTag::Punc),
    info("``", "Opening quote", PosTag::Punc),
    info("''", "Closing quote", PosTag::Punc),
    info("(", "Opening parenthesis", PosTag::Punc),
    info(")", "Closing parenthesis", PosTag::Punc),
];

/// Verb endings (lowercase) and the tag they indicate. Checked in order.
pub const VERB_SUFFIXES: &[(&str, &str)] = &[
    ("uu", "VBINF"),
    ("aa", "VBF"),
    ("ee", "VBF"),
    ("i", "VBIMP"),
    ("u", "VBPART"),
    ("si", "VBCAUS"),
    ("am", "VBPASS"),
    ("at", "VBREFL"),
];

/// Noun endings (lowercase) and the tag they indicate. Checked in order.
pub const NOUN_SUFFIXES: &[(&str, &str)] = &[
    ("ii", "NPL"),
    ("ww", "NPL"),
    ("aa", "NN"),
    ("oo", "NN"),
    ("uu", "NN"),
];

pub fn lookup(tag: &str) -> Option<&'static TagInfo> {
    TAGSET.iter().find(|info| info.tag == tag)
}

pub fn description(tag: &str) -> Option<&'static str> {
    lookup(tag).map(|info| info.description)
}

pub fn universal(tag: &str) -> Option<PosTag> {
    lookup(tag).map(|info| info.universal)
}

/// Universal tag for `tag`, `X` when unknown.
pub fn map_to_universal(tag: &str) -> PosTag {
    universal(tag).unwrap_or(PosTag::X)
}

pub fn is_known_tag(tag: &str) -> bool {
    lookup(tag).is_some()
}

/// All language-specific tags in table order.
pub fn all_tags() -> Vec<&'static str> {
    TAGSET.iter().map(|info| info.tag).collect()
}

pub fn tags_by_category(category: PosTag) -> Vec<&'static str> {
    TAGSET
        .iter()
        .filter(|info| info.universal == category)
        .map(|info| info.tag)
        .collect()
}
