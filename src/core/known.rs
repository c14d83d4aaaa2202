//! Known letter positions
//!
//! Maps zero-based positions to the letter confirmed at that position.

use rustc_hash::FxHashMap;
use regex::Regex;
use std::sync::LazyLock;

/// Extracts `<position><letter>` from a token, first occurrence wins.
static POSITION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)([a-z])").expect("position token regex is valid"));

/// Letters confirmed at specific positions
///
/// Positions are stored zero-based. At most one letter per position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KnownPositions {
    letters: FxHashMap<usize, u8>,
}

impl KnownPositions {
    /// Parse comma-separated `<position><letter>` tokens with 1-based positions
    ///
    /// Tokens without a position/letter pair, or whose position is outside
    /// `1..=word_length`, are dropped. When two tokens name the same position
    /// the later one wins.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::KnownPositions;
    ///
    /// let known = KnownPositions::parse("1a,5E,9z,junk,1c", 5);
    /// assert_eq!(known.get(0), Some(b'c'));
    /// assert_eq!(known.get(4), Some(b'e'));
    /// assert_eq!(known.len(), 2);
    /// ```
    #[must_use]
    pub fn parse(arg: &str, word_length: usize) -> Self {
        let mut letters = FxHashMap::default();
        if arg.is_empty() {
            return Self { letters };
        }

        for token in arg.to_lowercase().split(',') {
            let Some(captures) = POSITION_TOKEN.captures(token) else {
                tracing::debug!(token, "discarding known-position token without <pos><letter>");
                continue;
            };

            let position = match captures[1].parse::<usize>() {
                Ok(position) if (1..=word_length).contains(&position) => position,
                _ => {
                    tracing::debug!(token, word_length, "discarding out-of-range position");
                    continue;
                }
            };

            letters.insert(position - 1, captures[2].as_bytes()[0]);
        }

        Self { letters }
    }

    /// Letter known at a zero-based position
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<u8> {
        self.letters.get(&position).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Known `(position, letter)` pairs ordered by position
    #[must_use]
    pub fn sorted(&self) -> Vec<(usize, u8)> {
        let mut pairs: Vec<(usize, u8)> = self.letters.iter().map(|(&p, &l)| (p, l)).collect();
        pairs.sort_unstable();
        pairs
    }
}
