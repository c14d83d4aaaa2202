//! Terminal and file output
//!
//! Display utilities for search results, verbose diagnostics and the results
//! file.

pub mod display;
pub mod formatters;
pub mod results;

pub use display::{print_diagnostics, write_solutions};
pub use results::{RESULTS_FILE, RESULTS_HEADER, ResultsError, save_results};
