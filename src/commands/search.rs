//! Dictionary search command
//!
//! Validates the constraints, compiles the pattern, then runs the dictionary
//! through the position and included-letter filters.

use crate::compiler::{ConstraintArgs, Constraints, Pattern};
use crate::core::ConfigError;
use crate::filter::retain_included;
use crate::wordlists::{DEFAULT_DICTIONARY, DictionaryError, load_candidates};
use std::path::{Path, PathBuf};

/// Configuration for one search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub dictionary: PathBuf,
    pub word_length: i64,
    pub exclude: String,
    pub include: String,
    pub known: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            word_length: 5,
            exclude: String::new(),
            include: String::new(),
            known: String::new(),
        }
    }
}

/// Validated constraints and their compiled pattern, ready to run
#[derive(Debug, Clone)]
pub struct SearchPlan {
    constraints: Constraints,
    pattern: Pattern,
}

impl SearchPlan {
    /// Build a plan from raw arguments
    ///
    /// # Errors
    /// Returns a `ConfigError` if the word length is outside 2..=64, no
    /// constraint was given, or every letter is excluded.
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        let constraints = Constraints::parse(&ConstraintArgs {
            word_length: config.word_length,
            exclude: &config.exclude,
            include: &config.include,
            known: &config.known,
        })?;

        let conflicting = constraints.conflicting();
        if !conflicting.is_empty() {
            tracing::warn!(
                letters = %conflicting,
                "letters are both included and excluded, no word can match"
            );
        }
        if constraints.included_exceeds_length() {
            tracing::warn!(
                included = constraints.included().len(),
                word_length = constraints.word_length(),
                "more included letters than the word length, ignoring -include"
            );
        }

        let pattern = constraints.pattern()?;
        Ok(Self {
            constraints,
            pattern,
        })
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Run the plan against a dictionary file
    ///
    /// # Errors
    /// Returns a `DictionaryError` if the dictionary cannot be opened or read.
    pub fn execute<P: AsRef<Path>>(&self, dictionary: P) -> Result<Vec<String>, DictionaryError> {
        let matched = load_candidates(dictionary, &self.pattern)?;
        Ok(self.filter_included(matched))
    }

    /// Apply the included-letter stage to position-filtered words
    #[must_use]
    pub fn filter_included(&self, words: Vec<String>) -> Vec<String> {
        retain_included(
            words,
            self.constraints.word_length(),
            self.constraints.included(),
        )
    }
}

/// Build and run a search in one step
///
/// # Errors
/// Returns the configuration or dictionary error that stopped the search.
pub fn run_search(config: &SearchConfig) -> anyhow::Result<Vec<String>> {
    let plan = SearchPlan::new(config)?;
    Ok(plan.execute(&config.dictionary)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(exclude: &str, include: &str, known: &str) -> SearchConfig {
        SearchConfig {
            exclude: exclude.to_string(),
            include: include.to_string(),
            known: known.to_string(),
            ..SearchConfig::default()
        }
    }

    fn sample() -> Vec<String> {
        ["apple", "angle", "ankle", "amble"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.dictionary, PathBuf::from("../wordlewords.txt"));
    }

    #[test]
    fn plan_rejects_empty_constraints() {
        assert!(matches!(
            SearchPlan::new(&config("", "", "")),
            Err(ConfigError::NoConstraints)
        ));
    }

    #[test]
    fn plan_rejects_max_length() {
        let huge = SearchConfig {
            word_length: i64::MAX,
            ..config("q", "", "")
        };
        assert!(matches!(
            SearchPlan::new(&huge),
            Err(ConfigError::WordLengthTooLong(i64::MAX))
        ));
    }

    #[test]
    fn plan_compiles_pattern() {
        let plan = SearchPlan::new(&config("s", "", "1a")).unwrap();
        assert_eq!(plan.pattern().as_str(), "^a[a-rt-z][a-rt-z][a-rt-z][a-rt-z]$");
        assert_eq!(plan.constraints().word_length(), 5);
    }

    #[test]
    fn plan_filter_included() {
        let plan = SearchPlan::new(&config("", "p", "")).unwrap();
        assert_eq!(plan.filter_included(sample()), vec!["apple"]);
    }

    #[test]
    fn plan_accepts_conflicting_letters() {
        let plan = SearchPlan::new(&config("e", "e", "")).unwrap();
        assert!(!plan.constraints().conflicting().is_empty());
    }

    #[test]
    fn run_search_missing_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let missing = SearchConfig {
            dictionary: dir.path().join("absent.txt"),
            ..config("", "", "1a")
        };
        let err = run_search(&missing).unwrap_err();
        assert!(err.to_string().contains("absent.txt"));
    }
}
