//! # Observing the pivots
//!
//! Every basis change made during a solve is reported to a `PivotObserver`.
use enum_map::EnumMap;

use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::strategy::pivot_rule::Rule;

/// A single basis change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PivotEvent {
    /// Phase of the two-phase method the pivot was made in.
    pub phase: Phase,
    /// Rule that selected the pivot.
    pub rule: Rule,
    /// Number of pivots made earlier in the same solve.
    pub iteration: usize,
    /// Column of the variable entering the basis.
    pub entering_column: usize,
    /// Constraint row of the variable leaving the basis.
    pub departing_row: usize,
}

/// Receives a `PivotEvent` just before the corresponding pivot is made.
pub trait PivotObserver {
    #[allow(missing_docs)]
    fn on_pivot(&mut self, event: &PivotEvent);
}

/// Ignores all pivots.
impl PivotObserver for () {
    fn on_pivot(&mut self, _: &PivotEvent) {}
}

/// Collects all pivots.
impl PivotObserver for Vec<PivotEvent> {
    fn on_pivot(&mut self, event: &PivotEvent) {
        self.push(*event);
    }
}

/// Counts the pivots by phase and by rule.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PivotCounter {
    by_phase: EnumMap<Phase, usize>,
    by_rule: EnumMap<Rule, usize>,
}

impl PivotCounter {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pivots made in a phase.
    pub fn in_phase(&self, phase: Phase) -> usize {
        self.by_phase[phase]
    }

    /// Number of pivots selected by a rule.
    pub fn with_rule(&self, rule: Rule) -> usize {
        self.by_rule[rule]
    }

    /// Whether Bland's rule made any pivot.
    pub fn used_blands_rule(&self) -> bool {
        self.by_rule[Rule::Bland] > 0
    }

    #[allow(missing_docs)]
    pub fn total(&self) -> usize {
        self.by_phase.values().sum()
    }
}

impl PivotObserver for PivotCounter {
    fn on_pivot(&mut self, event: &PivotEvent) {
        self.by_phase[event.phase] += 1;
        self.by_rule[event.rule] += 1;
    }
}
