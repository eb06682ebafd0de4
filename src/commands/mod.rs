//! Command implementations
//!
//! The tool answers exactly one configuration query per invocation;
//! the report module holds the flag parsing and rendering for it.

mod report;

pub use report::{Query, QueryFlags, Report, report};
