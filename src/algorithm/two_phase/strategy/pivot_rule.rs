//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use enum_map::Enum;

use crate::algorithm::two_phase::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. The minimum ratio test is the same
/// for all rules; only the way ties are broken differs.
pub trait PivotRule {
    /// Identifies the rule, for diagnostics.
    const RULE: Rule;

    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Column index and relative cost of the entering variable, or `None` if no relative cost is
    /// negative.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)>;

    /// Row selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Index of the constraint row of the departing variable, or `None` if the column has no
    /// positive coefficient.
    fn select_primal_pivot_row(&mut self, tableau: &Tableau, column: usize) -> Option<usize> {
        tableau.select_primal_pivot_row(column, Self::RULE == Rule::Bland)
    }
}

/// Names of the available pivot rules.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Rule {
    /// Dantzig's original rule: the most negative relative cost enters.
    Dantzig,
    /// Bland's anti-cycling rule: the lowest indices enter and leave.
    Bland,
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Combined with breaking ratio ties on the lowest leaving column index, this is Bland's rule,
/// which can't cycle.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    const RULE: Rule = Rule::Bland;

    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        (0..tableau.nr_columns())
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|&(_, cost)| cost < -tableau.epsilon())
    }
}

/// Simply pivot on the column, which has the most negative relative cost.
///
/// Ties are broken by the lowest column index.
pub struct SteepestDescentAlongVariable;
impl PivotRule for SteepestDescentAlongVariable {
    const RULE: Rule = Rule::Dantzig;

    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        let mut smallest = None;
        for (j, cost) in (0..tableau.nr_columns())
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|&(_, cost)| cost < -tableau.epsilon()) {
            if let Some((existing_j, existing_cost)) = smallest.as_mut() {
                if cost < *existing_cost {
                    *existing_j = j;
                    *existing_cost = cost;
                }
            } else { smallest = Some((j, cost)) }
        }

        smallest
    }
}
