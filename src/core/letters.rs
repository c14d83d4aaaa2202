//! Letter set representation
//!
//! A `LetterSet` stores up to 26 lowercase ASCII letters as a bitmask, one bit
//! per letter (`a` = bit 0). Used for both excluded and included letters.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter `a` through `z`
    pub const ALPHABET: Self = Self((1 << ALPHABET_LEN) - 1);

    /// Parse a comma-separated list of single letters
    ///
    /// The argument is lowercased and split on `,`. Tokens that are not exactly
    /// one ASCII letter are dropped without error, so `"m,,s,xy,3,E"` yields
    /// `{e, m, s}`. Tokens are not trimmed.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::LetterSet;
    ///
    /// let set = LetterSet::parse_list("m,S,e,xy,3");
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(b's'));
    /// assert!(!set.contains(b'x'));
    /// ```
    #[must_use]
    pub fn parse_list(arg: &str) -> Self {
        let mut set = Self::EMPTY;
        if arg.is_empty() {
            return set;
        }

        for token in arg.to_lowercase().split(',') {
            match token.as_bytes() {
                [letter] if letter.is_ascii_lowercase() => set.insert(*letter),
                _ => {
                    if !token.is_empty() {
                        tracing::debug!(token, "discarding malformed letter token");
                    }
                }
            }
        }

        set
    }

    /// Add a letter to the set
    ///
    /// Non-letters are ignored.
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        if let Some(bit) = Self::bit(letter) {
            self.0 |= bit;
        }
    }

    /// Check whether the set contains a letter
    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        Self::bit(letter).is_some_and(|bit| self.0 & bit != 0)
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when all 26 letters are present
    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == Self::ALPHABET.0
    }

    /// Letters not in this set
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::ALPHABET.0)
    }

    /// Letters present in both sets
    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }

    /// Check whether `word` contains every letter of the set
    #[must_use]
    pub fn all_present_in(self, word: &str) -> bool {
        self.iter().all(|letter| word.as_bytes().contains(&letter))
    }

    #[inline]
    fn bit(letter: u8) -> Option<u32> {
        letter
            .is_ascii_lowercase()
            .then(|| 1u32 << (letter - b'a'))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
