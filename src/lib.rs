//! # A dense linear program solver
//!
//! Linear programs in standard form are solved using the Simplex Method as described in the book
//! Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz, on a dense
//! tableau of floating point numbers.
//!
//! ```
//! use dense_simplex::algorithm::Solve;
//! use dense_simplex::data::linear_program::problem::Problem;
//!
//! // Maximize 2 x0 + 3 x1 subject to x0 - 2 x1 <= 4, 2 x0 + x1 <= 18 and x1 <= 10
//! let problem = Problem::new(
//!     &[2, 3, 0, 0, 0],
//!     &[[1, -2, 1, 0, 0], [2, 1, 0, 1, 0], [0, 1, 0, 0, 1]],
//!     &[4, 18, 10],
//! )?;
//! let solution = problem.solve(100, false)?;
//! assert!((solution.objective_value() - 38f64).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;
