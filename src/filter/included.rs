//! Included-letter filter
//!
//! Second pass over the position-filtered words: every included letter must
//! appear somewhere in the word.

use crate::core::LetterSet;

/// Keep words containing every letter of a raw `-include` argument
///
/// The argument is parsed like `-exclude` (malformed tokens dropped). See
/// [`retain_included`] for when the filter is skipped.
#[must_use]
pub fn filter_included(words: Vec<String>, word_length: usize, include_arg: &str) -> Vec<String> {
    if include_arg.is_empty() {
        return words;
    }
    retain_included(words, word_length, LetterSet::parse_list(include_arg))
}

/// Keep words containing every letter of `included`
///
/// The input is returned unchanged when it is empty, when `word_length < 2`,
/// when `included` is empty, or when `included` has more letters than a word
/// can hold. The narrowed list replaces the input only if it is shorter.
#[must_use]
pub fn retain_included(words: Vec<String>, word_length: usize, included: LetterSet) -> Vec<String> {
    if words.is_empty() || word_length < 2 || included.is_empty() {
        return words;
    }
    if included.len() > word_length {
        tracing::debug!(
            included = included.len(),
            word_length,
            "more included letters than positions, skipping included filter"
        );
        return words;
    }

    let filtered: Vec<String> = words
        .iter()
        .filter(|word| included.all_present_in(word))
        .cloned()
        .collect();

    tracing::debug!(before = words.len(), after = filtered.len(), "included filter");

    if filtered.len() < words.len() {
        filtered
    } else {
        words
    }
}
