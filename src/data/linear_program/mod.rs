//! # Representing linear programs
//!
//! A linear program in standard form (equality constraints, nonnegative variables, maximized
//! objective) and the solution that the simplex method derives for it.
pub mod problem;
pub mod solution;
