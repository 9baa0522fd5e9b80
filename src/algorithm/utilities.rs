//! # Utilities
//!
//! Helper functions for algorithms.
use std::collections::HashSet;

/// Reduce the size of the vector by removing values.
///
/// Used to drop artificial columns and redundant rows from the tableau.
///
/// # Arguments
///
/// * `vector` - `Vec` to remove indices from.
/// * `indices` - A set of indices to remove from the vector, assumed sorted.
pub(crate) fn remove_indices<T>(vector: &mut Vec<T>, indices: &[usize]) {
    debug_assert!(indices.len() <= vector.len());
    debug_assert!(indices.is_sorted());
    // All values are unique
    debug_assert_eq!(indices.iter().collect::<HashSet<_>>().len(), indices.len());
    debug_assert!(indices.iter().all(|&i| i < vector.len()));

    let mut i = 0;
    let mut j = 0;
    vector.retain(|_| {
        let keep = i == indices.len() || j < indices[i];
        if !keep {
            // must have j == indices[i]
            i += 1;
        }
        j += 1;
        keep
    });
}
