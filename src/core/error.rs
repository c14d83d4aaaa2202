//! Configuration errors
//!
//! Raised before any dictionary word is read.

use std::fmt;

/// Minimum supported word length
pub const MIN_WORD_LENGTH: i64 = 2;

/// Maximum supported word length
pub const MAX_WORD_LENGTH: i64 = 64;

/// Error type for unusable constraint configurations
#[derive(Debug)]
pub enum ConfigError {
    WordLengthTooShort(i64),
    WordLengthTooLong(i64),
    NoConstraints,
    AllLettersExcluded,
    Pattern(regex::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordLengthTooShort(len) => {
                write!(f, "Word length must be at least {MIN_WORD_LENGTH}, got {len}")
            }
            Self::WordLengthTooLong(len) => {
                write!(f, "Word length must be at most {MAX_WORD_LENGTH}, got {len}")
            }
            Self::NoConstraints => write!(
                f,
                "No arguments were provided. Use -exclude, -include or -known"
            ),
            Self::AllLettersExcluded => {
                write!(f, "All 26 letters of the alphabet have been excluded")
            }
            Self::Pattern(e) => write!(f, "Failed to compile word pattern: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<regex::Error> for ConfigError {
    fn from(e: regex::Error) -> Self {
        Self::Pattern(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_word_length() {
        let err = ConfigError::WordLengthTooShort(1);
        assert_eq!(err.to_string(), "Word length must be at least 2, got 1");
    }

    #[test]
    fn display_word_length_too_long() {
        let err = ConfigError::WordLengthTooLong(65);
        assert_eq!(err.to_string(), "Word length must be at most 64, got 65");
    }

    #[test]
    fn display_all_excluded() {
        assert!(
            ConfigError::AllLettersExcluded
                .to_string()
                .contains("All 26 letters")
        );
    }
}
