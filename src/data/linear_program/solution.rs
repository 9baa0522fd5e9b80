//! # Representation of solutions
//!
//! Once the simplex method terminates, the terminal tableau is turned into a `Solution`: the state
//! the method ended in and, if an optimum was found, the value of each variable.
use std::fmt;

use itertools::Itertools;

/// Terminal state of the simplex method.
///
/// None of these are errors: they are the three possible outcomes for a linear program.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum State {
    Optimal,
    Unbounded,
    Infeasible,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            State::Optimal => "optimal",
            State::Unbounded => "unbounded",
            State::Infeasible => "infeasible",
        })
    }
}

/// Result of solving a linear program.
///
/// The objective value is finite when the state is optimal, positive infinity when the problem is
/// unbounded, and `NaN` when it is infeasible. Only an optimal solution has an assignment.
#[derive(Clone, Debug)]
pub struct Solution {
    state: State,
    objective_value: f64,
    /// Basic variable for each constraint row, only when optimal.
    basis: Option<Vec<usize>>,
    /// Values of the variables, only when optimal.
    assignment: Option<Vec<f64>>,
}

impl Solution {
    /// Build a solution from a terminal tableau.
    ///
    /// # Arguments
    ///
    /// * `state`: State the simplex method terminated in.
    /// * `objective_value`: Objective value in the tableau; only read if the state is optimal.
    /// * `basis`: For each constraint row, the index of the variable that is basic in that row.
    /// * `constraint_values`: Right-hand side of each constraint row.
    ///
    /// # Return value
    ///
    /// For an optimal state, the assignment is a zero vector of length `max(basis) + 1`, with the
    /// basic variables set to the right-hand side value of their row.
    pub fn new(
        state: State,
        objective_value: f64,
        basis: Vec<usize>,
        constraint_values: &[f64],
    ) -> Self {
        match state {
            State::Optimal => {
                debug_assert_eq!(basis.len(), constraint_values.len());

                let length = basis.iter().max().map_or(0, |&max| max + 1);
                let mut assignment = vec![0f64; length];
                for (&column, &value) in basis.iter().zip(constraint_values) {
                    assignment[column] = value;
                }

                Self {
                    state,
                    objective_value,
                    basis: Some(basis),
                    assignment: Some(assignment),
                }
            },
            State::Unbounded => Self::unbounded(),
            State::Infeasible => Self::infeasible(),
        }
    }

    /// An unbounded problem has an infinite objective value and no assignment.
    pub fn unbounded() -> Self {
        Self {
            state: State::Unbounded,
            objective_value: f64::INFINITY,
            basis: None,
            assignment: None,
        }
    }

    /// An infeasible problem has no objective value and no assignment.
    pub fn infeasible() -> Self {
        Self {
            state: State::Infeasible,
            objective_value: f64::NAN,
            basis: None,
            assignment: None,
        }
    }

    #[allow(missing_docs)]
    pub fn state(&self) -> State {
        self.state
    }

    #[allow(missing_docs)]
    pub fn is_optimal(&self) -> bool {
        self.state == State::Optimal
    }

    /// Value of the objective function.
    ///
    /// Positive infinity if unbounded, `NaN` if infeasible.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Value of each variable up to and including the basic variable with the highest index.
    pub fn assignment(&self) -> Option<&[f64]> {
        self.assignment.as_deref()
    }

    /// Index of the basic variable of each constraint row in the final tableau.
    pub fn basis(&self) -> Option<&[usize]> {
        self.basis.as_deref()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.assignment {
            Some(assignment) => write!(
                f, "z* = {}, x* = [{}]", self.objective_value, assignment.iter().join(", "),
            ),
            None => write!(f, "the problem is {}", self.state),
        }
    }
}
