//! # Error reporting
//!
//! Construction of a `Problem` fails fast on inconsistent input, and solving can fail when the
//! iteration budget runs out under both pivot rules.
//!
//! A problem being infeasible or unbounded is not an error: those are regular outcomes of the
//! simplex method, see `data::linear_program::solution::State`.
use std::error::Error;
use std::fmt;

/// A `ProblemError` is created when the data describing a linear program is inconsistent.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ProblemError {
    /// There are no variables or no constraints.
    Empty,
    /// A constraint row or the right-hand side doesn't have the length implied by the other input.
    DimensionMismatch {
        /// Which part of the input has the wrong length.
        what: &'static str,
        /// The length implied by the other input.
        expected: usize,
        /// The actual length.
        found: usize,
    },
    /// There are more constraints than variables, so the constraint matrix can't have full row
    /// rank.
    RankDeficient {
        #[allow(missing_docs)]
        nr_constraints: usize,
        #[allow(missing_docs)]
        nr_variables: usize,
    },
    /// An input value could not be converted into a floating point number.
    NotRepresentable {
        /// Which part of the input contains the value.
        what: &'static str,
        /// Position of the value in that part of the input.
        index: usize,
    },
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProblemError::Empty => write!(f, "a problem needs at least one variable and one constraint"),
            ProblemError::DimensionMismatch { what, expected, found } => write!(
                f, "size mismatch: {} has length {}, expected {}", what, found, expected,
            ),
            ProblemError::RankDeficient { nr_constraints, nr_variables } => write!(
                f,
                "full rank condition not met: {} constraints for only {} variables",
                nr_constraints, nr_variables,
            ),
            ProblemError::NotRepresentable { what, index } => write!(
                f, "value at index {} of {} can't be represented as a float", index, what,
            ),
        }
    }
}

impl Error for ProblemError {}

/// A `SolveError` is returned when the simplex method did not reach a terminal state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// Both the standard pivot rule and Bland's rule used up the iteration budget.
    Unsolvable {
        /// The maximum number of iterations that each attempt was allowed.
        max_iterations: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::Unsolvable { max_iterations } => write!(
                f,
                "solver could not find a solution, try increasing the max iterations (currently {})",
                max_iterations,
            ),
        }
    }
}

impl Error for SolveError {}
