use approx::{assert_abs_diff_eq, assert_relative_eq};

use dense_simplex::algorithm::Solve;
use dense_simplex::algorithm::observer::PivotCounter;
use dense_simplex::algorithm::options::SolveOptions;
use dense_simplex::algorithm::two_phase::Phase;
use dense_simplex::data::linear_program::problem::Problem;
use dense_simplex::data::linear_program::solution::State;
use dense_simplex::error::{ProblemError, SolveError};

use super::{radiation_therapy, wyndor_glass};

#[test]
fn wyndor_glass_optimal() {
    let solution = wyndor_glass().solve(100, false).unwrap();

    assert_eq!(solution.state(), State::Optimal);
    assert_relative_eq!(solution.objective_value(), 36f64, max_relative = 1e-12);
    let assignment = solution.assignment().unwrap();
    assert_abs_diff_eq!(assignment[0], 2f64, epsilon = 1e-9);
    assert_abs_diff_eq!(assignment[1], 6f64, epsilon = 1e-9);
}

#[test]
fn wyndor_glass_blands_rule() {
    let solution = wyndor_glass().solve(100, true).unwrap();
    assert_relative_eq!(solution.objective_value(), 36f64, max_relative = 1e-12);
}

#[test]
fn radiation_therapy_two_phase() {
    let mut counter = PivotCounter::new();
    let solution = radiation_therapy()
        .solve_with(&SolveOptions::default(), &mut counter)
        .unwrap();

    assert!(solution.is_optimal());
    assert!(counter.in_phase(Phase::One) > 0);
    assert_abs_diff_eq!(solution.objective_value(), -5.25, epsilon = 1e-9);
    let assignment = solution.assignment().unwrap();
    assert_abs_diff_eq!(assignment[0], 7.5, epsilon = 1e-9);
    assert_abs_diff_eq!(assignment[1], 4.5, epsilon = 1e-9);
}

#[test]
fn integer_and_float_input_agree() {
    let integers = Problem::new(&[1i64, 2], &[[1i64, 1]], &[3i64]).unwrap();
    let floats = Problem::new(&[1f32, 2f32], &[[1f32, 1f32]], &[3f32]).unwrap();
    assert_eq!(integers, floats);

    let solution = integers.solve(100, false).unwrap();
    assert_abs_diff_eq!(solution.objective_value(), 6f64);
    assert_eq!(solution.to_string(), "z* = 6, x* = [0, 3]");
}

#[test]
fn invalid_input() {
    assert!(matches!(
        Problem::new(&[1, 1], &[[1, 1]], &[1, 2]),
        Err(ProblemError::DimensionMismatch { .. }),
    ));
    assert!(matches!(
        Problem::new(&[1], &[[1], [1]], &[1, 1]),
        Err(ProblemError::RankDeficient { nr_constraints: 2, nr_variables: 1 }),
    ));
}

#[test]
fn iteration_limit() {
    let result = wyndor_glass().solve(0, true);
    assert_eq!(result.err(), Some(SolveError::Unsolvable { max_iterations: 0 }));
}
