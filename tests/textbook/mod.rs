//! # Textbook problems
//!
//! Small linear programs from introductory texts, stated with explicit slack and surplus
//! variables.
use dense_simplex::data::linear_program::problem::Problem;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Maximize `3 x0 + 5 x1` subject to `x0 <= 4`, `2 x1 <= 12` and `3 x0 + 2 x1 <= 18`.
fn wyndor_glass() -> Problem {
    Problem::new(
        &[3, 5, 0, 0, 0],
        &[
            [1, 0, 1, 0, 0],
            [0, 2, 0, 1, 0],
            [3, 2, 0, 0, 1],
        ],
        &[4, 12, 18],
    ).unwrap()
}

/// Minimize `0.4 x0 + 0.5 x1` (by maximizing its negation) subject to `0.3 x0 + 0.1 x1 <= 2.7`,
/// `0.5 x0 + 0.5 x1 = 6` and `0.6 x0 + 0.4 x1 >= 6`.
fn radiation_therapy() -> Problem {
    Problem::new(
        &[-0.4, -0.5, 0f64, 0f64],
        &[
            [0.3, 0.1, 1f64, 0f64],
            [0.5, 0.5, 0f64, 0f64],
            [0.6, 0.4, 0f64, -1f64],
        ],
        &[2.7, 6f64, 6f64],
    ).unwrap()
}
