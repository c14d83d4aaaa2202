//! Command implementations

pub mod search;

pub use search::{SearchConfig, SearchPlan, run_search};
