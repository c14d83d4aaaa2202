//! Results file
//!
//! Writes the surviving words to a flat text file, replacing any previous run.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File written by `-save`, relative to the current directory
pub const RESULTS_FILE: &str = "results.txt";

/// First line of the results file
pub const RESULTS_HEADER: &str = "Potential solutions:";

/// Error type for saving results
#[derive(Debug)]
pub enum ResultsError {
    Remove { path: PathBuf, source: io::Error },
    Create { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for ResultsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remove { path, source } => write!(
                f,
                "Unable to remove existing file \"{}\": {source}",
                path.display()
            ),
            Self::Create { path, source } => {
                write!(f, "Unable to open \"{}\": {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Unable to write \"{}\": {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ResultsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Remove { source, .. } | Self::Create { source, .. } | Self::Write { source, .. } => {
                Some(source)
            }
        }
    }
}

/// Save words to `path` under the results header
///
/// An existing file at `path` is removed first, so the last run wins.
///
/// # Errors
/// Returns a `ResultsError` naming the step that failed.
pub fn save_results<P: AsRef<Path>>(path: P, words: &[String]) -> Result<(), ResultsError> {
    let path = path.as_ref();

    if fs::metadata(path).is_ok() {
        fs::remove_file(path).map_err(|source| ResultsError::Remove {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| ResultsError::Create {
            path: path.to_path_buf(),
            source,
        })?;

    write_results(BufWriter::new(file), words).map_err(|source| ResultsError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = words.len(), "saved results");
    Ok(())
}

fn write_results<W: Write>(mut out: W, words: &[String]) -> io::Result<()> {
    writeln!(out, "{RESULTS_HEADER}")?;
    for word in words {
        writeln!(out, "{word}")?;
    }
    out.flush()
}
