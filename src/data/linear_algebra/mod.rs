//! # Linear algebra primitives
//!
//! Dense storage for the simplex tableau.

pub mod matrix;

/// Default tolerance for comparisons of tableau values against zero and one.
///
/// Values are accumulated through repeated row operations, so exact comparisons break down after
/// a few pivots.
pub const EPSILON: f64 = 1e-10;
