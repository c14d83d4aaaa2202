//! Core domain types for letter constraints
//!
//! Letter sets, known positions and configuration errors. Everything here is
//! immutable once parsed and free of I/O.

mod error;
mod known;
mod letters;

pub use error::{ConfigError, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
pub use known::KnownPositions;
pub use letters::{ALPHABET_LEN, LetterSet};
