//! Display functions for search results

use super::formatters::{known_slots, solutions_header};
use crate::compiler::{Constraints, Pattern};
use colored::Colorize;
use std::io::{self, Write};

/// Print how the constraint arguments were interpreted
pub fn print_diagnostics(constraints: &Constraints, pattern: &Pattern) {
    if !constraints.excluded().is_empty() {
        println!("{}", "Letters to exclude:".bright_cyan().bold());
        println!("{}\n", constraints.excluded());
    }
    if !constraints.included().is_empty() {
        println!("{}", "Letters to include:".bright_cyan().bold());
        println!("{}\n", constraints.included());
    }

    println!("{}", "Known letters:".bright_cyan().bold());
    println!("{}\n", known_slots(pattern).bright_yellow());

    println!(
        "{}",
        "Regex letter group for unknown positions:".bright_cyan().bold()
    );
    println!("{}\n", pattern.letter_group());

    println!("{}", "Regex pattern to apply to each word:".bright_cyan().bold());
    println!("{}\n", pattern.as_str().green());
}

/// Write the count line followed by one word per line
///
/// # Errors
/// Returns any error raised by the writer.
pub fn write_solutions<W: Write>(out: &mut W, words: &[String]) -> io::Result<()> {
    writeln!(out, "{}", solutions_header(words.len()))?;
    for word in words {
        writeln!(out, "{word}")?;
    }
    Ok(())
}
