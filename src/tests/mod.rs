//! # Integration tests that require a look inside the crate.
//!
//! Each module holds one small linear program in standard form, with tests that solve it
//! completely. Convention for function names:
//!
//! * `fn problem()`: The problem as it would be constructed by a user.
//! * `fn optimal_assignment()`: The assignment of the optimal solution, if there is one.
