//! Wordle Sieve
//!
//! Filters a dictionary of fixed-length words down to the candidates consistent
//! with known letter positions, included letters and excluded letters.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_sieve::commands::{SearchConfig, SearchPlan};
//!
//! let config = SearchConfig {
//!     exclude: "s,t".to_string(),
//!     include: "l".to_string(),
//!     known: "1a,5e".to_string(),
//!     ..SearchConfig::default()
//! };
//!
//! let plan = SearchPlan::new(&config).unwrap();
//! println!("Pattern: {}", plan.pattern().as_str());
//! let words = plan.execute(&config.dictionary).unwrap();
//! println!("{} possible solutions", words.len());
//! ```

// Core domain types
pub mod core;

// Constraint compilation
pub mod compiler;

// Candidate filtering
pub mod filter;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal and file output
pub mod output;
