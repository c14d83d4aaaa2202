//! Dictionary loading utilities
//!
//! Opens a dictionary file and streams it through the position filter, so the
//! full word list is never held in memory.

use crate::compiler::Pattern;
use crate::filter::filter_lines;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Dictionary path used when none is given
pub const DEFAULT_DICTIONARY: &str = "../wordlewords.txt";

/// Error type for dictionary access
#[derive(Debug)]
pub enum DictionaryError {
    Open { path: PathBuf, source: io::Error },
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "Unable to open \"{}\": {source}", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "Unable to read \"{}\": {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } => Some(source),
        }
    }
}

/// Load the dictionary words that match `pattern`
///
/// Lines are lowercased before matching; order follows the file.
///
/// # Errors
///
/// Returns `DictionaryError::Open` if the file cannot be opened and
/// `DictionaryError::Read` if a line cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_sieve::compiler::compile_pattern;
/// use wordle_sieve::wordlists::load_candidates;
///
/// let pattern = compile_pattern(5, "s,t", "1a").unwrap();
/// let words = load_candidates("wordlewords.txt", &pattern).unwrap();
/// println!("Kept {} words", words.len());
/// ```
pub fn load_candidates<P: AsRef<Path>>(
    path: P,
    pattern: &Pattern,
) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    filter_lines(BufReader::new(file), pattern).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_pattern;
    use std::io::Write;

    #[test]
    fn load_candidates_filters_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple\nANGLE\nbrick\nan\n\napples").unwrap();

        let pattern = compile_pattern(5, "", "1a").unwrap();
        let words = load_candidates(file.path(), &pattern).unwrap();

        assert_eq!(words, vec!["apple", "angle"]);
    }

    #[test]
    fn load_candidates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let pattern = compile_pattern(5, "", "1a").unwrap();

        let err = load_candidates(&missing, &pattern).unwrap_err();
        assert!(matches!(err, DictionaryError::Open { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn load_candidates_skips_non_utf8_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"apple\ncaf\xe9s\nangle\n").unwrap();

        let pattern = compile_pattern(5, "", "1a").unwrap();
        let words = load_candidates(file.path(), &pattern).unwrap();
        assert_eq!(words, vec!["apple", "angle"]);
    }

    #[cfg(unix)]
    #[test]
    fn load_candidates_directory_is_read_error() {
        // Opening a directory succeeds on Unix, reading it fails
        let dir = tempfile::tempdir().unwrap();
        let pattern = compile_pattern(5, "", "1a").unwrap();

        let err = load_candidates(dir.path(), &pattern).unwrap_err();
        assert!(matches!(err, DictionaryError::Read { .. }));
    }
}
