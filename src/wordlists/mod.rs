//! Dictionary word lists
//!
//! Loads plain-text dictionaries (one word per line) from disk.

pub mod loader;

pub use loader::{DEFAULT_DICTIONARY, DictionaryError, load_candidates};
