//! # Phase one
//!
//! Computing a feasible solution: the first phase of the two phase method.
//!
//! For each constraint row without a basic variable, an artificial variable is added. The sum of
//! these variables is then minimized; if that minimum is zero, the artificial variables can be
//! removed and a basic feasible solution of the original problem remains.
use log::debug;

use crate::algorithm::two_phase::tableau::Tableau;

/// Add an artificial variable for each constraint row that has no basic variable.
///
/// The cost row is replaced by the one for maximizing the negative sum of the artificial
/// variables.
///
/// # Return value
///
/// The number of artificial variables added.
pub fn add_artificial_variables(tableau: &mut Tableau) -> usize {
    let rows = tableau.rows_without_basic_variable();
    debug!("adding {} artificial variables for rows {:?}", rows.len(), rows);

    tableau.add_artificial_columns(&rows);
    let costs = (0..tableau.nr_columns())
        .map(|j| if tableau.is_artificial(j) { -1f64 } else { 0f64 })
        .collect::<Vec<_>>();
    tableau.set_objective(&costs);

    rows.len()
}

/// Remove the artificial variables from a tableau for which phase one terminated optimally.
///
/// Artificial variables that are still basic at a positive level mean that the problem is
/// infeasible. Those that are basic at zero level are pivoted out of the basis, or, if that is not
/// possible, their row is removed. After that, the cost row is recomputed for the original
/// objective function.
///
/// # Arguments
///
/// * `tableau`: Tableau with artificial variables and a complete basis.
/// * `objective`: Objective coefficients of the original variables.
///
/// # Return value
///
/// Whether the problem is feasible, and if so, which rows were removed.
pub fn drop_artificial_variables(tableau: &mut Tableau, objective: &[f64]) -> RankedFeasibilityResult {
    debug_assert_eq!(objective.len(), tableau.nr_artificial_start());

    if let Some(row) = (0..tableau.nr_rows())
        .filter(|&row| tableau.basis()[row].is_none_or(|j| tableau.is_artificial(j)))
        .find(|&row| tableau.constraint_value(row) > tableau.epsilon()) {
        debug!("artificial variable in row {} has positive value {}", row, tableau.constraint_value(row));
        return RankedFeasibilityResult::Infeasible;
    }

    let rows_to_remove = remove_artificial_basis_variables(tableau);
    let rank = if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        debug!("removing redundant rows {:?}", rows_to_remove);
        tableau.remove_rows(&rows_to_remove);
        Rank::Deficient(rows_to_remove)
    };

    debug!("dropping {} artificial variables", tableau.nr_artificial_variables());
    tableau.remove_artificial_columns();
    tableau.set_objective(objective);

    RankedFeasibilityResult::Feasible(rank)
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant. Is sorted as a side effect of the algorithm.
fn remove_artificial_basis_variables(tableau: &mut Tableau) -> Vec<usize> {
    let mut rows_to_remove = Vec::new();

    for row in 0..tableau.nr_rows() {
        if !tableau.basis()[row].is_none_or(|j| tableau.is_artificial(j)) {
            continue;
        }

        let pivot_column = (0..tableau.nr_artificial_start())
            .filter(|&j| !tableau.basis().contains(&Some(j)))
            .find(|&j| tableau.coefficient(row, j).abs() > tableau.epsilon());

        match pivot_column {
            Some(column) => tableau.bring_into_basis(row, column),
            None => rows_to_remove.push(row),
        }
    }

    debug_assert!(rows_to_remove.is_sorted());
    rows_to_remove
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, Eq, PartialEq)]
pub enum RankedFeasibilityResult {
    /// The problem is feasible, the tableau now has a basis without artificial variables.
    Feasible(Rank),
    /// The problem is not feasible.
    Infeasible,
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices should be provided,
/// that when removed, makes the matrix or linear program full rank.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}
