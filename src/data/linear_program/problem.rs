//! # Linear programs in standard form
//!
//! Maximize `c^T x` subject to `A x = b` and `x >= 0`. Inequalities should already have been
//! rewritten into equalities using slack or surplus variables.
use num_traits::ToPrimitive;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::error::ProblemError;

/// An immutable linear program in standard form.
///
/// The input is widened to `f64` on construction, regardless of the type it was provided in.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    /// Objective coefficients `c`, one for each variable.
    objective: Vec<f64>,
    /// Coefficient matrix `A` of size `m` x `n`.
    constraints: DenseMatrix,
    /// Right-hand side `b`, one for each constraint.
    b: Vec<f64>,
}

impl Problem {
    /// Create a new problem, after checking that the dimensions agree.
    ///
    /// # Arguments
    ///
    /// * `objective`: Values of the objective function, of size `n`.
    /// * `constraints`: Coefficients, row-major, of size `m` x `n`.
    /// * `b`: Right-hand side, of size `m`.
    ///
    /// # Errors
    ///
    /// If the sizes don't match, if `m > n` (the constraint matrix can't have full row rank) or if
    /// a value can't be converted into a float.
    pub fn new<T, R>(objective: &[T], constraints: &[R], b: &[T]) -> Result<Self, ProblemError>
    where
        T: ToPrimitive,
        R: AsRef<[T]>,
    {
        let nr_constraints = b.len();
        let nr_variables = objective.len();

        if nr_constraints == 0 || nr_variables == 0 {
            return Err(ProblemError::Empty);
        }
        if constraints.len() != nr_constraints {
            return Err(ProblemError::DimensionMismatch {
                what: "coefficient matrix",
                expected: nr_constraints,
                found: constraints.len(),
            });
        }
        if let Some(row) = constraints.iter().find(|row| row.as_ref().len() != nr_variables) {
            return Err(ProblemError::DimensionMismatch {
                what: "constraint row",
                expected: nr_variables,
                found: row.as_ref().len(),
            });
        }
        if nr_constraints > nr_variables {
            return Err(ProblemError::RankDeficient { nr_constraints, nr_variables });
        }

        let objective = widen(objective, "objective")?;
        let b = widen(b, "right-hand side")?;
        let rows = constraints.iter()
            .map(|row| widen(row.as_ref(), "coefficient matrix"))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            objective,
            constraints: DenseMatrix::from_data(rows),
            b,
        })
    }

    /// Objective function coefficients.
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    /// Constraint coefficient matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix {
        &self.constraints
    }

    /// Right-hand side `b`.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Number of constraints, `m`.
    pub fn nr_constraints(&self) -> usize {
        self.b.len()
    }
}

fn widen<T: ToPrimitive>(values: &[T], what: &'static str) -> Result<Vec<f64>, ProblemError> {
    values.iter()
        .enumerate()
        .map(|(index, value)| value.to_f64().ok_or(ProblemError::NotRepresentable { what, index }))
        .collect()
}
