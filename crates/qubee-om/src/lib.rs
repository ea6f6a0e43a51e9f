//! Afaan Oromoo language module.
//!
//! Rule-based processing of Qubee text: normalization, character
//! validation, word and sentence tokenization, suffix-stripping stemming
//! and syllabification. The collaborator modules (part-of-speech tagging,
//! stopwords, the corpus pipeline) and the [`handle::QubeeHandle`] facade
//! are behind cargo features.
//!
//! Every component takes the alphabet as an `Arc<Alphabet>`:
//!
//! ```
//! use std::sync::Arc;
//! use qubee_core::Alphabet;
//! use qubee_om::stemmer::{Stemmer, StemmerOptions};
//!
//! let stemmer = Stemmer::new(Arc::new(Alphabet::qubee()), StemmerOptions::default());
//! assert_eq!(stemmer.stem("barattoota"), "barat");
//! ```

pub mod error;
pub mod normalizer;
pub(crate) mod oromo;
pub mod stemmer;
pub mod syllabifier;
pub mod tokenizer;
pub mod validator;

#[cfg(feature = "pos")]
pub mod pos;

#[cfg(feature = "stopwords")]
pub mod stopwords;

#[cfg(feature = "corpus")]
pub mod corpus;

#[cfg(feature = "handle")]
pub mod config;

#[cfg(feature = "handle")]
pub mod handle;

pub use error::QubeeError;

#[cfg(feature = "handle")]
pub use handle::QubeeHandle;
