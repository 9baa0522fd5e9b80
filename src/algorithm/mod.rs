//! # Algorithms
use crate::algorithm::observer::PivotObserver;
use crate::algorithm::options::SolveOptions;
use crate::data::linear_program::solution::Solution;
use crate::error::SolveError;

pub mod two_phase;
pub mod options;
pub mod observer;
pub(crate) mod utilities;

/// A problem formulation that can be solved to optimality.
pub trait Solve {
    /// Solve the problem.
    ///
    /// # Arguments
    ///
    /// * `max_iterations`: Maximum number of pivots per phase, for each of the pivot rules.
    /// * `use_blands_rule`: Use Bland's rule from the start. If `false`, the standard rule is used
    /// until it exceeds the maximum number of iterations, after which Bland's rule takes over.
    ///
    /// # Return value
    ///
    /// A solution that is optimal, unbounded or infeasible.
    ///
    /// # Errors
    ///
    /// If Bland's rule exceeds the maximum number of iterations.
    fn solve(&self, max_iterations: usize, use_blands_rule: bool) -> Result<Solution, SolveError> {
        let options = SolveOptions::default()
            .with_max_iterations(max_iterations)
            .with_blands_rule(use_blands_rule);
        self.solve_with(&options, &mut ())
    }

    /// Solve the problem, reporting every pivot to an observer.
    fn solve_with<O: PivotObserver>(
        &self,
        options: &SolveOptions,
        observer: &mut O,
    ) -> Result<Solution, SolveError>;
}
