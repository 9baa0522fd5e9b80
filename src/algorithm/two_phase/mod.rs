//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! If the initial tableau lacks a basic variable for some rows, a feasible basis is first computed
//! using artificial variables (phase one), after which the original objective is optimized (phase
//! two).
use enum_map::Enum;
use log::{debug, info, trace};

use crate::algorithm::Solve;
use crate::algorithm::observer::{PivotEvent, PivotObserver};
use crate::algorithm::options::SolveOptions;
use crate::algorithm::two_phase::phase_one::RankedFeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule, Rule, SteepestDescentAlongVariable};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::termination::{next_step, Step};
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::{Solution, State};
use crate::error::SolveError;

pub mod tableau;
pub mod strategy;
pub mod termination;
pub mod phase_one;

#[cfg(test)]
mod test;

/// The two phases of the method.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Finding a basic feasible solution, using artificial variables.
    One,
    /// Optimizing the original objective function.
    Two,
}

impl Solve for Problem {
    fn solve_with<O: PivotObserver>(
        &self,
        options: &SolveOptions,
        observer: &mut O,
    ) -> Result<Solution, SolveError> {
        let mut tableau = Tableau::new(self, options.epsilon);
        let mut driver = Driver::new(options, observer);

        if tableau.has_complete_basis() {
            tableau.set_objective(self.objective());
        } else {
            info!("no identifiable basis, using the two-phase method");
            phase_one::add_artificial_variables(&mut tableau);

            let state = driver.run(&mut tableau, Phase::One)?;
            if state != State::Optimal {
                info!("phase one ended {}, the problem is infeasible", state);
                return Ok(Solution::infeasible());
            }
            match phase_one::drop_artificial_variables(&mut tableau, self.objective()) {
                RankedFeasibilityResult::Feasible(rank) => debug!("phase one done, rank: {:?}", rank),
                RankedFeasibilityResult::Infeasible => {
                    info!("artificial variable remains positive, the problem is infeasible");
                    return Ok(Solution::infeasible());
                },
            }
        }

        let state = driver.run(&mut tableau, Phase::Two)?;
        info!("solve ended {} after {} pivots", state, driver.pivots);

        Ok(tableau.current_solution(state))
    }
}

/// State that is kept across the phases of a solve.
struct Driver<'a, O> {
    rule: Rule,
    max_iterations: usize,
    /// Number of pivots made so far.
    pivots: usize,
    observer: &'a mut O,
}

impl<'a, O: PivotObserver> Driver<'a, O> {
    fn new(options: &SolveOptions, observer: &'a mut O) -> Self {
        Self {
            rule: if options.use_blands_rule { Rule::Bland } else { Rule::Dantzig },
            max_iterations: options.max_iterations,
            pivots: 0,
            observer,
        }
    }

    /// Iterate until the tableau is in a terminal state.
    ///
    /// When the standard rule runs out of iterations, possibly because it is cycling, the
    /// iterations continue on the same tableau with Bland's rule. That rule is then kept for the
    /// remainder of the solve.
    ///
    /// # Errors
    ///
    /// If also Bland's rule runs out of iterations.
    fn run(&mut self, tableau: &mut Tableau, phase: Phase) -> Result<State, SolveError> {
        loop {
            let outcome = match self.rule {
                Rule::Dantzig => self.primal::<SteepestDescentAlongVariable>(tableau, phase),
                Rule::Bland => self.primal::<FirstProfitable>(tableau, phase),
            };

            match (outcome, self.rule) {
                (Outcome::Terminated(state), _) => break Ok(state),
                (Outcome::IterationLimit, Rule::Dantzig) => {
                    info!(
                        "no termination after {} iterations in phase {:?}, possible cycling detected, resorting to Bland's rule",
                        self.max_iterations, phase,
                    );
                    self.rule = Rule::Bland;
                },
                (Outcome::IterationLimit, Rule::Bland) => break Err(SolveError::Unsolvable {
                    max_iterations: self.max_iterations,
                }),
            }
        }
    }

    /// Make at most `max_iterations` pivots using a single pivot rule.
    ///
    /// After the last allowed pivot, the tableau is classified once more.
    fn primal<PR: PivotRule>(&mut self, tableau: &mut Tableau, phase: Phase) -> Outcome {
        let mut rule = PR::new();

        for _ in 0..self.max_iterations {
            match next_step(tableau, &mut rule) {
                Step::Pivot { row, column } => {
                    let event = PivotEvent {
                        phase,
                        rule: PR::RULE,
                        iteration: self.pivots,
                        entering_column: column,
                        departing_row: row,
                    };
                    self.observer.on_pivot(&event);

                    tableau.bring_into_basis(row, column);
                    self.pivots += 1;
                    debug!(
                        "phase {:?}, pivot {} ({:?}): column {} enters in row {}, objective value {}",
                        phase, event.iteration, PR::RULE, column, row, tableau.objective_function_value(),
                    );
                    trace!("\n{}", tableau);
                },
                Step::Terminate(state) => return Outcome::Terminated(state),
            }
        }

        match next_step(tableau, &mut rule) {
            Step::Pivot { .. } => Outcome::IterationLimit,
            Step::Terminate(state) => Outcome::Terminated(state),
        }
    }
}

/// How a run of the primal Simplex method with a single pivot rule ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Outcome {
    Terminated(State),
    IterationLimit,
}
