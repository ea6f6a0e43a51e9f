//! Shared building blocks for Afaan Oromoo (Qubee) text processing.
//!
//! The [`alphabet::Alphabet`] is the single source of truth for letter
//! classes. It is an ordinary immutable value: construct it once (usually
//! with [`alphabet::Alphabet::qubee`]), wrap it in an `Arc` and hand it to
//! every component that needs it.

pub mod alphabet;
pub mod character;
pub mod enums;
pub mod error;
pub mod token;

pub use alphabet::{Alphabet, AlphabetBuilder, CharClass};
pub use enums::{PosTag, TokenKind, ValidationMode};
pub use error::{AlphabetError, UnknownModeError};
pub use token::Token;
