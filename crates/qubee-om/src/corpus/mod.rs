// Document pipeline: raw text in, normalized sentences, tokens and stems
// out, one JSON object per document.

pub mod metrics;

use std::io::Write;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::QubeeError;
use crate::stemmer::Stemmer;
use crate::tokenizer::Tokenizer;

pub use metrics::{
    Readability, ReadabilityLevel, TextMetrics, moving_type_token_ratio, ngrams, repeated_phrases,
    vocabulary, word_frequency,
};

/// One input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Pipeline output for one document. `stems` is parallel to `tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    pub id: String,
    pub invalid_chars: Vec<char>,
    pub sentences: Vec<String>,
    pub tokens: Vec<String>,
    pub stems: Vec<String>,
}

/// Runs tokenizer and stemmer over documents.
#[derive(Debug, Clone)]
pub struct CorpusPipeline {
    tokenizer: Tokenizer,
    stemmer: Stemmer,
}

impl CorpusPipeline {
    pub fn new(tokenizer: Tokenizer, stemmer: Stemmer) -> Self {
        Self { tokenizer, stemmer }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn stemmer(&self) -> &Stemmer {
        &self.stemmer
    }

    /// Process one document. Invalid characters are reported with the
    /// tokenizer's validation mode and never stop processing.
    pub fn process(&self, doc: &Document) -> ProcessedDocument {
        let report = self.tokenizer.validate(&doc.text);
        let sentences = self.tokenizer.sentences(&doc.text);
        let tokens = self.tokenizer.words(&doc.text);
        let stems = tokens.iter().map(|t| self.stemmer.stem(t)).collect();

        debug!(
            "document {}: {} sentences, {} tokens, {} invalid chars",
            doc.id,
            sentences.len(),
            tokens.len(),
            report.invalid_chars.len()
        );

        ProcessedDocument {
            id: doc.id.clone(),
            invalid_chars: report.invalid_chars,
            sentences,
            tokens,
            stems,
        }
    }

    /// Process documents, keeping input order.
    #[cfg(not(feature = "parallel"))]
    pub fn process_batch(&self, docs: &[Document]) -> Vec<ProcessedDocument> {
        debug!("processing {} documents", docs.len());
        docs.iter().map(|doc| self.process(doc)).collect()
    }

    /// Process documents on the rayon pool, keeping input order.
    #[cfg(feature = "parallel")]
    pub fn process_batch(&self, docs: &[Document]) -> Vec<ProcessedDocument> {
        use rayon::prelude::*;

        debug!("processing {} documents in parallel", docs.len());
        docs.par_iter().map(|doc| self.process(doc)).collect()
    }
}

/// Write one JSON object per line.
pub fn write_jsonl<W: Write>(docs: &[ProcessedDocument], mut writer: W) -> Result<(), QubeeError> {
    for doc in docs {
        serde_json::to_writer(&mut writer, doc)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use qubee_core::Alphabet;

    use super::*;
    use crate::stemmer::StemmerOptions;
    use crate::tokenizer::TokenizerOptions;

    fn pipeline() -> CorpusPipeline {
        let alphabet = Arc::new(Alphabet::qubee());
        CorpusPipeline::new(
            Tokenizer::new(Arc::clone(&alphabet), TokenizerOptions::default()),
            Stemmer::new(alphabet, StemmerOptions::default()),
        )
    }

    #[test]
    fn process_document() {
        let doc = Document::new("d1", "Barattoota barreessuu. Mana 12!");
        let out = pipeline().process(&doc);
        assert_eq!(out.id, "d1");
        assert_eq!(out.sentences, vec!["BARATTOOTA BARREESSUU.", "MANA 12!"]);
        assert_eq!(out.tokens, vec!["BARATTOOTA", "BARREESSUU", "MANA", "12"]);
        assert_eq!(out.stems, vec!["BARAT", "BAR", "MANA", "12"]);
        assert_eq!(out.invalid_chars, vec!['1', '2']);
    }

    #[test]
    fn stems_parallel_tokens() {
        let doc = Document::new("d2", "Afaan Oromoo afaan guddaa dha.");
        let out = pipeline().process(&doc);
        assert_eq!(out.tokens.len(), out.stems.len());
    }

    #[test]
    fn empty_document() {
        let out = pipeline().process(&Document::new("empty", ""));
        assert!(out.sentences.is_empty());
        assert!(out.tokens.is_empty());
        assert!(out.invalid_chars.is_empty());
    }

    #[test]
    fn batch_keeps_order() {
        let docs: Vec<Document> = (0..8)
            .map(|i| Document::new(format!("d{i}"), "Kuni kitaaba dha."))
            .collect();
        let out = pipeline().process_batch(&docs);
        let ids: Vec<&str> = out.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d0", "d1", "d2", "d3", "d4", "d5", "d6", "d7"]);
    }

    #[test]
    fn jsonl_output() {
        let docs = pipeline().process_batch(&[
            Document::new("a", "Mana."),
            Document::new("b", "Bishaan."),
        ]);
        let mut buf = Vec::new();
        write_jsonl(&docs, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: ProcessedDocument = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, docs[0]);
        assert!(lines[1].contains("\"id\":\"b\""));
    }
}
