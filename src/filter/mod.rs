//! Candidate filter
//!
//! Stage A keeps dictionary words matching the position pattern. Stage B keeps
//! words containing every included letter.

pub mod included;
pub mod position;

pub use included::{filter_included, retain_included};
pub use position::{accept_word, filter_lines};
