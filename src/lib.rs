//! Exact binomial expansion of (x+1)^n over an unbounded decimal integer.
//!
//! [`math`] is the pure core. [`session`] wraps it with timing and report output.

pub mod config;
pub mod error;
pub mod math;
pub mod report;
pub mod session;
pub mod term_frontend;
