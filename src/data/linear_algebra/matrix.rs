//! # Dense matrix
//!
//! Row-major storage for the simplex tableau. Dimensions are fixed at creation, except for the
//! column insertions and removals that the two-phase method needs for its artificial variables.
use std::slice::Iter;

use crate::algorithm::utilities::remove_indices;

/// Uses a `Vec<Vec<f64>>` as underlying data structure, one `Vec` per row.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    data: Vec<Vec<f64>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl DenseMatrix {
    /// Create a `DenseMatrix` from the provided row-major data.
    ///
    /// All rows should have the same length; this is checked only in debug builds, as the callers
    /// validate their input before getting here.
    pub fn from_data(data: Vec<Vec<f64>>) -> DenseMatrix {
        let (nr_rows, nr_columns) = get_data_dimensions(&data);
        DenseMatrix { data, nr_rows, nr_columns }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| row[j])
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> Iter<'_, f64> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Change row `i` to the provided `row_values`.
    pub fn set_row(&mut self, i: usize, row_values: Vec<f64>) {
        debug_assert!(i < self.nr_rows);
        debug_assert_eq!(row_values.len(), self.nr_columns);

        self.data[i] = row_values;
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: f64) {
        debug_assert!(i < self.nr_rows);

        for value in self.data[i].iter_mut() {
            *value *= factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: f64) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        // Split the borrow, the two rows are distinct
        let (read, write) = if read_row < write_row {
            let (head, tail) = self.data.split_at_mut(write_row);
            (&head[read_row], &mut tail[0])
        } else {
            let (head, tail) = self.data.split_at_mut(read_row);
            (&tail[0], &mut head[write_row])
        };

        for (target, &source) in write.iter_mut().zip(read.iter()) {
            *target += factor * source;
        }
    }

    /// Insert `count` zero columns, such that the first of them gets index `at`.
    ///
    /// Columns with index `at` or higher are shifted `count` places to the right.
    pub fn insert_zero_columns(&mut self, at: usize, count: usize) {
        debug_assert!(at <= self.nr_columns);

        for row in self.data.iter_mut() {
            row.splice(at..at, std::iter::repeat_n(0f64, count));
        }
        self.nr_columns += count;
    }

    /// Remove columns by index.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, deduplicated column indices.
    pub fn remove_columns(&mut self, indices: &[usize]) {
        debug_assert!(indices.len() < self.nr_columns);

        for row in self.data.iter_mut() {
            remove_indices(row, indices);
        }
        self.nr_columns -= indices.len();
    }

    /// Remove rows by index.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, deduplicated row indices.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        debug_assert!(indices.len() < self.nr_rows);

        remove_indices(&mut self.data, indices);
        self.nr_rows -= indices.len();
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

/// If all row sizes agree, return the dimensions of the vector `data`.
fn get_data_dimensions(data: &[Vec<f64>]) -> (usize, usize) {
    let nr_rows = data.len();
    debug_assert!(nr_rows > 0);
    let nr_columns = data[0].len();
    debug_assert!(nr_columns > 0);

    debug_assert!(
        data.iter().all(|row| row.len() == nr_columns),
        "Row lengths not equal: first row has length {}", nr_columns,
    );

    (nr_rows, nr_columns)
}
