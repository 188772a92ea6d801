//! Contains utility functions to read simulation tables and compare results

mod compare_results;
mod table;

pub use compare_results::*;
pub use table::*;
