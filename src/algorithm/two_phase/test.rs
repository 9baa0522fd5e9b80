use approx::assert_abs_diff_eq;

use crate::algorithm::Solve;
use crate::algorithm::observer::{PivotCounter, PivotEvent};
use crate::algorithm::options::SolveOptions;
use crate::algorithm::two_phase::{Driver, Phase};
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule, Rule, SteepestDescentAlongVariable};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::termination::{next_step, Step};
use crate::data::linear_algebra::EPSILON;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::State;
use crate::error::SolveError;
use crate::tests::{problem_1, problem_2, problem_3};

#[test]
fn pivot_events() {
    let mut events: Vec<PivotEvent> = Vec::new();
    problem_1::problem().solve_with(&SolveOptions::default(), &mut events).unwrap();

    assert_eq!(events, vec![
        PivotEvent { phase: Phase::Two, rule: Rule::Dantzig, iteration: 0, entering_column: 1, departing_row: 2 },
        PivotEvent { phase: Phase::Two, rule: Rule::Dantzig, iteration: 1, entering_column: 0, departing_row: 1 },
    ]);
}

#[test]
fn no_pivot_at_optimum() {
    let problem = problem_1::problem();
    let mut tableau = Tableau::new(&problem, EPSILON);
    tableau.set_objective(problem.objective());
    let options = SolveOptions::default();
    let mut observer = ();
    let mut driver = Driver::new(&options, &mut observer);

    assert_eq!(driver.run(&mut tableau, Phase::Two), Ok(State::Optimal));
    assert_eq!(driver.pivots, 2);

    let mut rule = <SteepestDescentAlongVariable as PivotRule>::new();
    assert_eq!(next_step(&tableau, &mut rule), Step::Terminate(State::Optimal));
    let mut rule = <FirstProfitable as PivotRule>::new();
    assert_eq!(next_step(&tableau, &mut rule), Step::Terminate(State::Optimal));

    // Running again on the terminal tableau changes nothing
    let before = tableau.clone();
    assert_eq!(driver.run(&mut tableau, Phase::Two), Ok(State::Optimal));
    assert_eq!(driver.pivots, 2);
    assert_eq!(tableau, before);
}

#[test]
fn last_iteration_is_classified() {
    // Two pivots are needed, the termination check after the second is free
    let solution = problem_1::problem().solve(2, false).unwrap();
    assert!(solution.is_optimal());

    // The standard rule stops after one pivot, Bland's rule finishes from there
    let mut counter = PivotCounter::new();
    let options = SolveOptions::default().with_max_iterations(1);
    let solution = problem_1::problem().solve_with(&options, &mut counter).unwrap();
    assert!(solution.is_optimal());
    assert_abs_diff_eq!(solution.objective_value(), 38f64, epsilon = 1e-9);
    assert_eq!(counter.with_rule(Rule::Dantzig), 1);
    assert!(counter.used_blands_rule());
}

#[test]
fn unsolvable() {
    assert_eq!(
        problem_2::problem().solve(3, false).map(|solution| solution.state()),
        Err(SolveError::Unsolvable { max_iterations: 3 }),
    );
    assert_eq!(
        problem_2::problem().solve(0, true).map(|solution| solution.state()),
        Err(SolveError::Unsolvable { max_iterations: 0 }),
    );
}

#[test]
fn cycling_budget_per_rule() {
    // Four pivots of the standard rule don't break the cycle, Bland's rule then needs three
    let mut counter = PivotCounter::new();
    let options = SolveOptions::default().with_max_iterations(4);
    let solution = problem_3::problem().solve_with(&options, &mut counter).unwrap();

    assert!(solution.is_optimal());
    assert_abs_diff_eq!(solution.objective_value(), 1f64, epsilon = 1e-9);
    assert_eq!(counter.with_rule(Rule::Dantzig), 4);
    assert!(counter.used_blands_rule());

    assert!(matches!(
        problem_3::problem().solve(3, false),
        Err(SolveError::Unsolvable { max_iterations: 3 }),
    ));
}

#[test]
fn two_phase_same_optimum() {
    // The first problem with the first and last row scaled, such that the slacks are no longer
    // unit columns
    let scaled = Problem::new(
        &[2, 3, 0, 0, 0],
        &[
            [2, -4, 2, 0, 0],
            [2, 1, 0, 1, 0],
            [0, 3, 0, 0, 3],
        ],
        &[8, 18, 30],
    ).unwrap();
    let mut counter = PivotCounter::new();
    let scaled_solution = scaled.solve_with(&SolveOptions::default(), &mut counter).unwrap();
    let solution = problem_1::problem().solve(100, false).unwrap();

    assert!(counter.in_phase(Phase::One) > 0);
    assert!(scaled_solution.is_optimal());
    assert_abs_diff_eq!(scaled_solution.objective_value(), solution.objective_value(), epsilon = 1e-9);
    assert_abs_diff_eq!(scaled_solution.assignment().unwrap()[..2], solution.assignment().unwrap()[..2], epsilon = 1e-9);
}

#[test]
fn phase_one_infeasible() {
    // x0 + x1 can't be both 1 and 2
    let problem = Problem::new(&[1, 1], &[[1, 1], [1, 1]], &[1, 2]).unwrap();
    let mut counter = PivotCounter::new();
    let solution = problem.solve_with(&SolveOptions::default(), &mut counter).unwrap();

    assert_eq!(solution.state(), State::Infeasible);
    assert_eq!(counter.in_phase(Phase::Two), 0);
}

#[test]
fn redundant_constraint() {
    let problem = Problem::new(&[1, 1], &[[1, 1], [2, 2]], &[2, 4]).unwrap();
    let solution = problem.solve(100, false).unwrap();

    assert!(solution.is_optimal());
    assert_abs_diff_eq!(solution.objective_value(), 2f64, epsilon = 1e-9);
    assert_eq!(solution.basis().map(<[usize]>::len), Some(1));
}

#[test]
fn custom_tolerance() {
    let options = SolveOptions::default().with_epsilon(1e-6);
    let solution = problem_1::problem().solve_with(&options, &mut ()).unwrap();

    assert_abs_diff_eq!(solution.objective_value(), 38f64, epsilon = 1e-9);
}

#[test]
fn near_tie_in_ratio_test() {
    // Maximize x0 subject to x0 <= 1 and 1e5 x0 <= 1e5 - 5e-6
    let problem = Problem::new(
        &[1f64, 0f64, 0f64],
        &[[1f64, 1f64, 0f64], [1e5f64, 0f64, 1f64]],
        &[1f64, 1e5f64 - 5e-6f64],
    ).unwrap();

    for use_blands_rule in [false, true] {
        let solution = problem.solve(100, use_blands_rule).unwrap();
        assert!(solution.is_optimal());
        assert_abs_diff_eq!(solution.objective_value(), 1f64 - 5e-11, epsilon = 1e-14);
        assert_eq!(solution.basis(), Some(&[1, 0][..]));
    }
}
