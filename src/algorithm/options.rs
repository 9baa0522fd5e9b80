//! # Solver configuration
use crate::data::linear_algebra::EPSILON;

/// Parameters of a single solve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolveOptions {
    /// Maximum number of pivots per phase, for each of the pivot rules.
    pub max_iterations: usize,
    /// Use Bland's rule from the start, instead of only after the standard rule fails.
    pub use_blands_rule: bool,
    /// Tolerance for all comparisons of tableau values against zero and one.
    pub epsilon: f64,
}

impl SolveOptions {
    #[allow(missing_docs)]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[allow(missing_docs)]
    pub fn with_blands_rule(mut self, use_blands_rule: bool) -> Self {
        self.use_blands_rule = use_blands_rule;
        self
    }

    /// Change the tolerance.
    ///
    /// Values that are too small make unit columns unrecognizable after a few pivots; values that
    /// are too large hide small but meaningful coefficients.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        debug_assert!(epsilon >= 0f64);

        self.epsilon = epsilon;
        self
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            use_blands_rule: false,
            epsilon: EPSILON,
        }
    }
}
