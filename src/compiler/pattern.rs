//! Compiled word pattern
//!
//! A pattern has one slot per position. A slot is either a fixed letter or the
//! class of letters that have not been excluded. The slots are composed into a
//! single regular expression anchored at both ends, such as
//! `^a[df-z][df-z][df-z]e$`.

use crate::core::{ConfigError, KnownPositions, LetterSet, MAX_WORD_LENGTH};
use regex::Regex;

/// A single position in the pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Letter confirmed at this position
    Fixed(u8),
    /// Any letter that has not been excluded
    Open,
}

/// Anchored per-position matcher for dictionary words
#[derive(Debug, Clone)]
pub struct Pattern {
    slots: Vec<Slot>,
    letter_group: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern for words of `word_length` letters
    ///
    /// # Errors
    /// Returns `ConfigError::WordLengthTooLong` above 64 letters,
    /// `ConfigError::AllLettersExcluded` if `excluded` holds the whole
    /// alphabet, or `ConfigError::Pattern` if the resulting expression cannot be
    /// compiled.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::compiler::Pattern;
    /// use wordle_sieve::core::{KnownPositions, LetterSet};
    ///
    /// let excluded = LetterSet::parse_list("s,t");
    /// let known = KnownPositions::parse("1a,5e", 5);
    /// let pattern = Pattern::compile(5, excluded, &known).unwrap();
    ///
    /// assert_eq!(pattern.as_str(), "^a[a-ru-z][a-ru-z][a-ru-z]e$");
    /// assert!(pattern.is_match("apple"));
    /// assert!(!pattern.is_match("aside"));
    /// ```
    pub fn compile(
        word_length: usize,
        excluded: LetterSet,
        known: &KnownPositions,
    ) -> Result<Self, ConfigError> {
        let length_limit = usize::try_from(MAX_WORD_LENGTH).unwrap_or(usize::MAX);
        if word_length > length_limit {
            return Err(ConfigError::WordLengthTooLong(
                i64::try_from(word_length).unwrap_or(i64::MAX),
            ));
        }

        let letter_group = letter_class(excluded)?;

        let slots: Vec<Slot> = (0..word_length)
            .map(|position| known.get(position).map_or(Slot::Open, Slot::Fixed))
            .collect();

        let body = if known.is_empty() {
            format!("{letter_group}{{{word_length}}}")
        } else {
            slots
                .iter()
                .map(|slot| match slot {
                    Slot::Fixed(letter) => (*letter as char).to_string(),
                    Slot::Open => letter_group.clone(),
                })
                .collect()
        };

        let regex = Regex::new(&format!("^{body}$"))?;

        Ok(Self {
            slots,
            letter_group,
            regex,
        })
    }

    /// Check whether a lowercase word fits the pattern
    ///
    /// The word must have exactly as many letters as the pattern has slots.
    #[inline]
    #[must_use]
    pub fn is_match(&self, word: &str) -> bool {
        word.len() == self.slots.len() && self.regex.is_match(word)
    }

    /// The class used for positions without a known letter, e.g. `[a-z]`
    #[must_use]
    pub fn letter_group(&self) -> &str {
        &self.letter_group
    }

    /// The anchored regular expression source
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.slots.len()
    }
}

/// Render the class of letters not in `excluded`
///
/// Runs of three or more consecutive letters are written as ranges, so
/// excluding `a,b,c,e` gives `[df-z]` and excluding nothing gives `[a-z]`.
///
/// # Errors
/// Returns `ConfigError::AllLettersExcluded` when no letter remains.
pub fn letter_class(excluded: LetterSet) -> Result<String, ConfigError> {
    if excluded.is_full() {
        return Err(ConfigError::AllLettersExcluded);
    }

    let allowed: Vec<u8> = excluded.complement().iter().collect();
    let mut class = String::from("[");

    let mut start = 0;
    while start < allowed.len() {
        let mut end = start;
        while end + 1 < allowed.len() && allowed[end + 1] == allowed[end] + 1 {
            end += 1;
        }

        if end - start >= 2 {
            class.push(allowed[start] as char);
            class.push('-');
            class.push(allowed[end] as char);
        } else {
            class.extend(allowed[start..=end].iter().map(|&b| b as char));
        }
        start = end + 1;
    }

    class.push(']');
    Ok(class)
}
