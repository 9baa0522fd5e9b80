//! # Strategies
//!
//! Module containing different strategies for performing certain procedures in the Simplex method.
//! One example is the decision on how to pivot.
pub mod pivot_rule;
