//! Constraint compiler
//!
//! Turns excluded letters, known positions and a word length into a single
//! anchored pattern for dictionary words.

mod constraints;
mod pattern;

pub use constraints::{ConstraintArgs, Constraints};
pub use pattern::{Pattern, Slot, letter_class};

use crate::core::{ConfigError, KnownPositions, LetterSet, MIN_WORD_LENGTH};

/// Compile a pattern straight from raw `-exclude` and `-known` arguments
///
/// # Errors
/// Returns `ConfigError::WordLengthTooShort` for lengths below 2,
/// `ConfigError::WordLengthTooLong` above 64, and
/// `ConfigError::AllLettersExcluded` when no letter is left for open slots.
///
/// # Examples
/// ```
/// use wordle_sieve::compiler::compile_pattern;
///
/// let pattern = compile_pattern(5, "", "1a,5e").unwrap();
/// assert_eq!(pattern.as_str(), "^a[a-z][a-z][a-z]e$");
/// ```
pub fn compile_pattern(
    word_length: usize,
    exclude_arg: &str,
    known_arg: &str,
) -> Result<Pattern, ConfigError> {
    if word_length < 2 {
        return Err(ConfigError::WordLengthTooShort(
            i64::try_from(word_length).unwrap_or(MIN_WORD_LENGTH - 1),
        ));
    }

    let excluded = LetterSet::parse_list(exclude_arg);
    let known = KnownPositions::parse(known_arg, word_length);
    Pattern::compile(word_length, excluded, &known)
}
