//! Position filter
//!
//! Streams dictionary lines and keeps the ones matching the compiled pattern.

use crate::compiler::Pattern;
use std::io::{self, BufRead};

/// Normalize a dictionary line and test it against the pattern
///
/// Returns the lowercased word when it has the pattern's length and matches.
#[must_use]
pub fn accept_word(line: &str, pattern: &Pattern) -> Option<String> {
    let word = line.to_lowercase();
    pattern.is_match(&word).then_some(word)
}

/// Filter every line of `reader` through the pattern, preserving order
///
/// Only the surviving words are kept in memory. Lines that are not valid
/// UTF-8 can never match and are skipped.
///
/// # Errors
/// Returns the first I/O error raised while reading.
pub fn filter_lines<R: BufRead>(mut reader: R, pattern: &Pattern) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut buf = Vec::new();
    let mut scanned = 0usize;
    let mut undecodable = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        scanned += 1;

        let Ok(line) = std::str::from_utf8(strip_line_ending(&buf)) else {
            undecodable += 1;
            continue;
        };
        if let Some(word) = accept_word(line, pattern) {
            words.push(word);
        }
    }

    tracing::debug!(
        scanned,
        undecodable,
        kept = words.len(),
        pattern = pattern.as_str(),
        "position filter"
    );
    Ok(words)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_pattern;
    use std::io::Cursor;

    #[test]
    fn accept_word_lowercases() {
        let pattern = compile_pattern(5, "", "1a").unwrap();
        assert_eq!(accept_word("APPLE", &pattern).as_deref(), Some("apple"));
    }

    #[test]
    fn accept_word_rejects_wrong_length() {
        let pattern = compile_pattern(5, "", "1a").unwrap();
        assert_eq!(accept_word("apples", &pattern), None);
        assert_eq!(accept_word("", &pattern), None);
    }

    #[test]
    fn filter_lines_preserves_order() {
        let pattern = compile_pattern(5, "", "5e").unwrap();
        let input = Cursor::new("uncle\napple\nbrick\nAngle\n");
        let words = filter_lines(input, &pattern).unwrap();
        assert_eq!(words, vec!["uncle", "apple", "angle"]);
    }

    #[test]
    fn filter_lines_handles_crlf() {
        let pattern = compile_pattern(5, "", "1a").unwrap();
        let input = Cursor::new("apple\r\nangle\r\n");
        let words = filter_lines(input, &pattern).unwrap();
        assert_eq!(words, vec!["apple", "angle"]);
    }

    #[test]
    fn filter_lines_empty_input() {
        let pattern = compile_pattern(5, "x", "").unwrap();
        let words = filter_lines(Cursor::new(""), &pattern).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn filter_lines_skips_undecodable_lines() {
        let pattern = compile_pattern(5, "", "1a").unwrap();
        let input = Cursor::new(b"apple\ncaf\xe9s\nangle\n".to_vec());
        let words = filter_lines(input, &pattern).unwrap();
        assert_eq!(words, vec!["apple", "angle"]);
    }

    #[test]
    fn filter_lines_last_line_without_newline() {
        let pattern = compile_pattern(5, "", "1a").unwrap();
        let input = Cursor::new(b"\xff\xfe\r\napple\r\nangle".to_vec());
        let words = filter_lines(input, &pattern).unwrap();
        assert_eq!(words, vec!["apple", "angle"]);
    }

    #[test]
    fn filter_lines_propagates_read_errors() {
        struct Broken;

        impl io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk went away"))
            }
        }

        let pattern = compile_pattern(5, "", "1a").unwrap();
        let err = filter_lines(io::BufReader::new(Broken), &pattern).unwrap_err();
        assert_eq!(err.to_string(), "disk went away");
    }
}
