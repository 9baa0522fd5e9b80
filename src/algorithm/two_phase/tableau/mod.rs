//! # Simplex tableau
//!
//! A dense matrix with one more row and one more column than the linear program it represents.
//!
//! Row `0` holds the negated relative costs, with the current objective function value in the
//! last column. The other rows hold the constraints, with the current value of the basic
//! variables in the last column. Artificial columns, if any, are located directly before that
//! last column.
use std::fmt;

use itertools::Itertools;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::{Solution, State};

/// The data structure that is mutated by the Simplex algorithm.
///
/// Constraint rows are indexed `0` until `self.nr_rows()`; they are stored one row lower in the
/// matrix, below the cost row.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau {
    /// Matrix of size (m + 1) x (n + a + 1).
    ///
    /// This attribute changes with a basis change.
    matrix: DenseMatrix,
    /// Maps the rows to the column containing its pivot, if any.
    ///
    /// Derived from the matrix after every change to it.
    basis: Vec<Option<usize>>,
    /// Number of artificial columns, which are the last columns before the right-hand side.
    nr_artificial_variables: usize,
    /// Tolerance for comparisons against zero and one.
    epsilon: f64,
}

impl Tableau {
    /// Create the initial tableau `[-c^T, 0; A, b]` of a problem.
    ///
    /// The basis is derived immediately, but the cost row is not priced out against it.
    pub fn new(problem: &Problem, epsilon: f64) -> Self {
        let cost_row = problem.objective().iter()
            .map(|&cost| -cost)
            .chain(std::iter::once(0f64))
            .collect::<Vec<_>>();
        let data = std::iter::once(cost_row)
            .chain((0..problem.nr_constraints()).map(|i| {
                problem.constraints().row(i).copied()
                    .chain(std::iter::once(problem.b()[i]))
                    .collect::<Vec<_>>()
            }))
            .collect();

        let mut tableau = Self {
            matrix: DenseMatrix::from_data(data),
            basis: Vec::with_capacity(problem.nr_constraints()),
            nr_artificial_variables: 0,
            epsilon,
        };
        tableau.refresh_basis();

        tableau
    }

    /// Find, for each constraint row, the column that is a unit vector with its one in that row.
    ///
    /// Only the constraint rows are inspected. When several columns qualify, the first one with a
    /// zero relative cost is preferred over the first one overall.
    ///
    /// # Return value
    ///
    /// For each constraint row, the index of that column, or `None` if there is no such column.
    pub fn derive_basis(&self) -> Vec<Option<usize>> {
        let mut basis = vec![None; self.nr_rows()];
        let mut priced_out = vec![false; self.nr_rows()];

        for j in 0..self.nr_columns() {
            if let Some(row) = self.unit_column_row(j) {
                let is_priced_out = self.relative_cost(j).abs() <= self.epsilon;
                if basis[row].is_none() || (is_priced_out && !priced_out[row]) {
                    basis[row] = Some(j);
                    priced_out[row] = is_priced_out;
                }
            }
        }

        basis
    }

    /// The constraint row in which column `j` has its single one, if it is a unit vector.
    fn unit_column_row(&self, j: usize) -> Option<usize> {
        let mut row_of_one = None;
        for (i, value) in self.matrix.column(j).skip(1).enumerate() {
            if (value - 1f64).abs() <= self.epsilon && row_of_one.is_none() {
                row_of_one = Some(i);
            } else if value.abs() > self.epsilon {
                return None;
            }
        }

        row_of_one
    }

    fn refresh_basis(&mut self) {
        self.basis = self.derive_basis();
    }

    /// Basic variable of each constraint row, as last derived.
    pub fn basis(&self) -> &[Option<usize>] {
        &self.basis
    }

    /// Whether every constraint row has a basic variable.
    pub fn has_complete_basis(&self) -> bool {
        self.basis.iter().all(Option::is_some)
    }

    /// Constraint rows without a basic variable.
    pub fn rows_without_basic_variable(&self) -> Vec<usize> {
        self.basis.iter().positions(Option::is_none).collect()
    }

    /// Brings a column into the basis by Gauss-Jordan elimination around the pivot.
    ///
    /// The pivot row is normalized, after which multiples of it are subtracted from all other
    /// rows, including the cost row. The entering column is then set to an exact unit vector.
    ///
    /// # Arguments
    ///
    /// * `pivot_row`: Constraint row index of the pivot, in range 0 until `self.nr_rows()`.
    /// * `pivot_column`: Column index of the pivot, in range 0 until `self.nr_columns()`.
    pub fn bring_into_basis(&mut self, pivot_row: usize, pivot_column: usize) {
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(pivot_column < self.nr_columns());

        let matrix_row = pivot_row + 1;
        let pivot_value = self.matrix.get_value(matrix_row, pivot_column);
        debug_assert!(pivot_value.abs() > self.epsilon);

        self.matrix.multiply_row(matrix_row, 1f64 / pivot_value);
        for i in (0..self.matrix.nr_rows()).filter(|&i| i != matrix_row) {
            let factor = self.matrix.get_value(i, pivot_column);
            if factor != 0f64 {
                self.matrix.mul_add_rows(matrix_row, i, -factor);
            }
        }
        for i in 0..self.matrix.nr_rows() {
            self.matrix.set_value(i, pivot_column, if i == matrix_row { 1f64 } else { 0f64 });
        }

        self.refresh_basis();
    }

    /// Determine the row to pivot on, given the column.
    ///
    /// This is the row with the minimal ratio between the constraint value and the positive
    /// coefficient in the column. Only exactly equal ratios tie, so that the chosen row never has a
    /// larger ratio than another one. Ties go to the first row, or, with Bland's rule, to the row
    /// whose basic variable has the lowest index.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column.
    /// * `blands_rule`: Whether to break ties on the index of the leaving variable.
    ///
    /// # Return value
    ///
    /// The constraint row index, or `None` if no coefficient is positive.
    pub fn select_primal_pivot_row(&self, column: usize, blands_rule: bool) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen index, minimum ratio, corresponding leaving column (for Bland's algorithm))
        let mut min_values: Option<(usize, f64, usize)> = None;
        for row in 0..self.nr_rows() {
            let xij = self.coefficient(row, column);
            if xij > self.epsilon {
                let ratio = self.constraint_value(row) / xij;
                let leaving_column = self.basis[row].unwrap_or(usize::MAX);
                if let Some((min_index, min_ratio, min_leaving_column)) = &mut min_values {
                    if ratio < *min_ratio {
                        *min_index = row;
                        *min_ratio = ratio;
                        *min_leaving_column = leaving_column;
                    } else if blands_rule
                        && ratio == *min_ratio
                        && leaving_column < *min_leaving_column {
                        *min_index = row;
                        *min_leaving_column = leaving_column;
                    }
                } else {
                    min_values = Some((row, ratio, leaving_column))
                }
            }
        }

        min_values.map(|(min_index, _, _)| min_index)
    }

    /// Replace the cost row by the one of the objective `costs`, priced out against the basis.
    ///
    /// Relative cost `j` becomes `sum_i costs[basis(i)] * a_ij - costs[j]`, the objective value
    /// `sum_i costs[basis(i)] * b_i`. Rows without a basic variable don't contribute.
    ///
    /// # Arguments
    ///
    /// * `costs`: Objective coefficient for every column, artificial ones included.
    pub(crate) fn set_objective(&mut self, costs: &[f64]) {
        debug_assert_eq!(costs.len(), self.nr_columns());

        let basic_costs = self.basis.iter()
            .map(|column| column.map_or(0f64, |j| costs[j]))
            .collect::<Vec<_>>();
        let cost_row = costs.iter()
            .copied()
            .chain(std::iter::once(0f64))
            .enumerate()
            .map(|(j, cost)| {
                let basic_part = basic_costs.iter()
                    .enumerate()
                    .map(|(i, basic_cost)| basic_cost * self.matrix.get_value(i + 1, j))
                    .sum::<f64>();
                basic_part - cost
            })
            .collect::<Vec<_>>();

        self.matrix.set_row(0, cost_row);
        self.refresh_basis();
    }

    /// Append a unit column for each of the given constraint rows.
    ///
    /// The new columns are inserted before the right-hand side, in the order of `rows`.
    pub(crate) fn add_artificial_columns(&mut self, rows: &[usize]) {
        debug_assert_eq!(self.nr_artificial_variables, 0);
        debug_assert!(rows.iter().all(|&row| row < self.nr_rows()));

        let first = self.nr_columns();
        self.matrix.insert_zero_columns(first, rows.len());
        for (k, &row) in rows.iter().enumerate() {
            self.matrix.set_value(row + 1, first + k, 1f64);
        }
        self.nr_artificial_variables = rows.len();

        self.refresh_basis();
    }

    /// Remove all artificial columns.
    pub(crate) fn remove_artificial_columns(&mut self) {
        let first = self.nr_artificial_start();
        let indices = (first..self.nr_columns()).collect::<Vec<_>>();
        self.matrix.remove_columns(&indices);
        self.nr_artificial_variables = 0;

        self.refresh_basis();
    }

    /// Remove constraint rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted, deduplicated constraint row indices.
    pub(crate) fn remove_rows(&mut self, rows: &[usize]) {
        let matrix_rows = rows.iter().map(|row| row + 1).collect::<Vec<_>>();
        self.matrix.remove_rows(&matrix_rows);

        self.refresh_basis();
    }

    /// Index of the first artificial column, equal to the number of original variables.
    pub fn nr_artificial_start(&self) -> usize {
        self.nr_columns() - self.nr_artificial_variables
    }

    /// Whether a column belongs to an artificial variable.
    pub fn is_artificial(&self, j: usize) -> bool {
        j >= self.nr_artificial_start() && j < self.nr_columns()
    }

    #[allow(missing_docs)]
    pub fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial_variables
    }

    /// The value in the cost row of column `j`.
    ///
    /// Zero for basic columns. A negative value means that bringing the column into the basis
    /// increases the objective value.
    pub fn relative_cost(&self, j: usize) -> f64 {
        debug_assert!(j < self.nr_columns());

        self.matrix.get_value(0, j)
    }

    /// Coefficient in constraint row `i` and column `j`.
    pub fn coefficient(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows());

        self.matrix.get_value(i + 1, j)
    }

    /// Right-hand side value of constraint row `i`.
    pub fn constraint_value(&self, i: usize) -> f64 {
        self.matrix.get_value(i + 1, self.nr_columns())
    }

    /// The current value of the objective function.
    pub fn objective_function_value(&self) -> f64 {
        self.matrix.get_value(0, self.nr_columns())
    }

    /// Whether all constraint values are nonnegative, up to the tolerance.
    pub fn is_primal_feasible(&self) -> bool {
        (0..self.nr_rows()).all(|i| self.constraint_value(i) >= -self.epsilon)
    }

    /// Number of constraint rows.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows() - 1
    }

    /// Number of variable columns, artificial ones included.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns() - 1
    }

    #[allow(missing_docs)]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Build the solution corresponding to the current basis.
    ///
    /// # Arguments
    ///
    /// * `state`: State the method terminated in.
    pub fn current_solution(&self, state: State) -> Solution {
        let (basis, values): (Vec<_>, Vec<_>) = self.basis.iter()
            .enumerate()
            .filter_map(|(i, column)| column.map(|j| (j, self.constraint_value(i))))
            .unzip();

        Solution::new(state, self.objective_function_value(), basis, &values)
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = 10;
        let separator_width = (self.nr_columns() + 2) * (width + 1);

        write!(f, "{:>width$} ", "basis", width = width)?;
        for j in 0..self.nr_columns() {
            let name = if self.is_artificial(j) { format!("a{}", j) } else { format!("x{}", j) };
            write!(f, "{:>width$} ", name, width = width)?;
        }
        writeln!(f, "{:>width$}", "rhs", width = width)?;
        writeln!(f, "{}", "-".repeat(separator_width))?;

        for i in 0..self.matrix.nr_rows() {
            let label = match i {
                0 => "z".to_string(),
                _ => self.basis[i - 1].map_or("-".to_string(), |j| format!("x{}", j)),
            };
            write!(f, "{:>width$} ", label, width = width)?;
            writeln!(f, "{}", self.matrix.row(i).map(|value| format!("{:>width$.4}", value, width = width)).join(" "))?;
        }

        Ok(())
    }
}
