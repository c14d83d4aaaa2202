//! Formatting utilities for terminal output

use crate::compiler::{Pattern, Slot};

/// Placeholder for positions without a known letter
const OPEN_SLOT: char = '_';

/// Render the known letters as a slot view, e.g. `[a___e]`
#[must_use]
pub fn known_slots(pattern: &Pattern) -> String {
    let mut result = String::with_capacity(pattern.word_length() + 2);
    result.push('[');
    for slot in pattern.slots() {
        result.push(match slot {
            Slot::Fixed(letter) => *letter as char,
            Slot::Open => OPEN_SLOT,
        });
    }
    result.push(']');
    result
}

/// Count line printed above the solutions
#[must_use]
pub fn solutions_header(count: usize) -> String {
    format!("{count} possible solutions:")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_pattern;

    #[test]
    fn known_slots_mixed() {
        let pattern = compile_pattern(5, "", "1a,5e").unwrap();
        assert_eq!(known_slots(&pattern), "[a___e]");
    }

    #[test]
    fn known_slots_none_known() {
        let pattern = compile_pattern(3, "x", "").unwrap();
        assert_eq!(known_slots(&pattern), "[___]");
    }

    #[test]
    fn solutions_header_counts() {
        assert_eq!(solutions_header(0), "0 possible solutions:");
        assert_eq!(solutions_header(12), "12 possible solutions:");
    }
}
