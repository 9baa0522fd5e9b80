//! # Termination
//!
//! Before every pivot, the tableau is inspected to decide whether the method should continue.
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::solution::State;

/// What the Simplex method should do next with a tableau.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Step {
    /// Bring `column` into the basis in constraint row `row`.
    Pivot {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
    },
    /// Stop, the tableau is in a terminal state.
    Terminate(State),
}

/// Classify the tableau, or select the pivot that should be made next.
///
/// * Without a column of negative relative cost, the tableau is optimal if the constraint values
/// are nonnegative, and infeasible otherwise.
/// * With such a column but without a positive coefficient in it, the problem is unbounded.
pub fn next_step<PR: PivotRule>(tableau: &Tableau, rule: &mut PR) -> Step {
    match rule.select_primal_pivot_column(tableau) {
        Some((column, _)) => match rule.select_primal_pivot_row(tableau, column) {
            Some(row) => Step::Pivot { row, column },
            None => Step::Terminate(State::Unbounded),
        },
        None => if tableau.is_primal_feasible() {
            Step::Terminate(State::Optimal)
        } else {
            Step::Terminate(State::Infeasible)
        },
    }
}
