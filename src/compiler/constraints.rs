//! Parsed constraint set
//!
//! Built once from the raw command line strings and passed by reference to the
//! compiler and filters.

use super::pattern::Pattern;
use crate::core::{ConfigError, KnownPositions, LetterSet, MAX_WORD_LENGTH, MIN_WORD_LENGTH};

/// Raw, unparsed constraint arguments
#[derive(Debug, Clone, Copy)]
pub struct ConstraintArgs<'a> {
    pub word_length: i64,
    pub exclude: &'a str,
    pub include: &'a str,
    pub known: &'a str,
}

/// Validated letter constraints for one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    word_length: usize,
    excluded: LetterSet,
    included: LetterSet,
    known: KnownPositions,
}

impl Constraints {
    /// Validate and parse raw arguments
    ///
    /// Malformed tokens inside `exclude`, `include` and `known` are dropped.
    /// Only whole-configuration problems are errors.
    ///
    /// # Errors
    /// - `WordLengthTooShort` if the length is below 2
    /// - `WordLengthTooLong` if the length is above 64
    /// - `NoConstraints` if exclude, include and known are all empty
    /// - `AllLettersExcluded` if every letter is excluded
    pub fn parse(args: &ConstraintArgs<'_>) -> Result<Self, ConfigError> {
        if args.word_length < MIN_WORD_LENGTH {
            return Err(ConfigError::WordLengthTooShort(args.word_length));
        }
        if args.word_length > MAX_WORD_LENGTH {
            return Err(ConfigError::WordLengthTooLong(args.word_length));
        }
        let word_length = usize::try_from(args.word_length)
            .map_err(|_| ConfigError::WordLengthTooShort(args.word_length))?;

        if args.exclude.is_empty() && args.include.is_empty() && args.known.is_empty() {
            return Err(ConfigError::NoConstraints);
        }

        let excluded = LetterSet::parse_list(args.exclude);
        if excluded.is_full() {
            return Err(ConfigError::AllLettersExcluded);
        }

        Ok(Self {
            word_length,
            excluded,
            included: LetterSet::parse_list(args.include),
            known: KnownPositions::parse(args.known, word_length),
        })
    }

    /// Compile the position pattern for these constraints
    ///
    /// # Errors
    /// Returns `ConfigError::Pattern` if the expression cannot be built.
    pub fn pattern(&self) -> Result<Pattern, ConfigError> {
        Pattern::compile(self.word_length, self.excluded, &self.known)
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    #[must_use]
    pub const fn included(&self) -> LetterSet {
        self.included
    }

    #[must_use]
    pub const fn known(&self) -> &KnownPositions {
        &self.known
    }

    /// Letters that are both required and excluded
    ///
    /// Such constraints are accepted but can never match a word.
    #[must_use]
    pub const fn conflicting(&self) -> LetterSet {
        self.included.intersection(self.excluded)
    }

    /// True when more distinct letters are required than the word can hold
    #[must_use]
    pub const fn included_exceeds_length(&self) -> bool {
        self.included.len() > self.word_length
    }
}
