//! Construction and initialization logic for SparseMatrix.
//!
//! This module contains the constructors, dimension validation and the
//! `Default`, `Extend` and bulk-loading implementations.

use crate::arena::Arena;
use crate::error::{InitResult, MatrixError};
use crate::types::{SparseMatrix, NULL_NODE};

/// Smallest usable number of dimensions
pub(crate) const MIN_DIMENSIONS: usize = 1;

impl<T, const N: usize> SparseMatrix<T, N> {
    /// Create an empty matrix whose unwritten cells read as `default`.
    ///
    /// # Arguments
    ///
    /// * `default` - Value held by every cell that was never written
    ///
    /// # Returns
    ///
    /// Returns `Ok(SparseMatrix)` if `N` is at least 1, `Err(MatrixError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparsematrix::SparseMatrix;
    ///
    /// let matrix = SparseMatrix::<i32, 3>::new(0).unwrap();
    /// assert!(matrix.is_empty());
    /// assert!(SparseMatrix::<i32, 0>::new(0).is_err());
    /// ```
    pub fn new(default: T) -> InitResult<Self> {
        Self::with_capacity(default, 0)
    }

    /// Create an empty matrix with room for `nodes` nodes before the arena
    /// has to grow.
    ///
    /// Every materialized cell needs at most `N` nodes, plus one root
    /// sentinel for the whole matrix.
    pub fn with_capacity(default: T, nodes: usize) -> InitResult<Self> {
        validation::validate_dimensions(N)?;

        Ok(Self {
            default,
            root: NULL_NODE,
            arena: Arena::with_capacity(nodes),
        })
    }

    /// Number of coordinates in a path.
    pub fn dimensions(&self) -> usize {
        N
    }

    /// The value every unwritten cell holds.
    pub fn default_value(&self) -> &T {
        &self.default
    }
}

impl<T: PartialEq, const N: usize> SparseMatrix<T, N> {
    /// Build a matrix from `(path, value)` pairs, applied in order.
    ///
    /// Later writes to the same path overwrite earlier ones, and entries
    /// equal to `default` are not materialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparsematrix::SparseMatrix;
    ///
    /// let matrix = SparseMatrix::from_entries(0, [([1, 2], 5), ([3, 4], 0)]).unwrap();
    /// assert_eq!(matrix.len(), 1);
    /// assert_eq!(matrix[[1, 2]], 5);
    /// ```
    pub fn from_entries<I>(default: T, entries: I) -> InitResult<Self>
    where
        I: IntoIterator<Item = ([usize; N], T)>,
    {
        let mut matrix = Self::new(default)?;
        matrix.extend(entries);
        Ok(matrix)
    }
}

impl<T: PartialEq, const N: usize> Extend<([usize; N], T)> for SparseMatrix<T, N> {
    fn extend<I: IntoIterator<Item = ([usize; N], T)>>(&mut self, iter: I) {
        for (path, value) in iter {
            self.set(path, value);
        }
    }
}

impl<T: Default, const N: usize> Default for SparseMatrix<T, N> {
    /// Create a matrix whose default is `T::default()`.
    fn default() -> Self {
        Self::new(T::default()).expect("SparseMatrix needs at least one dimension")
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that a dimension count is usable.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if valid, `Err(MatrixError)` otherwise.
    pub fn validate_dimensions(dimensions: usize) -> InitResult<()> {
        if dimensions < MIN_DIMENSIONS {
            Err(MatrixError::invalid_dimensions(dimensions, MIN_DIMENSIONS))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_construction() {
        let matrix = SparseMatrix::<i32, 2>::new(-1).unwrap();
        assert_eq!(matrix.dimensions(), 2);
        assert_eq!(*matrix.default_value(), -1);
        assert_eq!(matrix.root, NULL_NODE);
        assert_eq!(matrix.node_count(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let result = SparseMatrix::<i32, 0>::new(0);
        assert!(matches!(result, Err(MatrixError::InvalidDimensions(_))));
    }

    #[test]
    fn test_matrix_default() {
        let matrix = SparseMatrix::<String, 1>::default();
        assert_eq!(matrix.default_value(), "");
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_with_capacity_preallocates() {
        let matrix = SparseMatrix::<u8, 4>::with_capacity(0, 64).unwrap();
        assert!(matrix.arena_stats().total_capacity >= 64);
        assert_eq!(matrix.arena_stats().allocated_count, 0);
    }

    #[test]
    fn test_from_entries_last_write_wins() {
        let matrix =
            SparseMatrix::from_entries(0, [([1, 1], 3), ([2, 2], 4), ([1, 1], 5), ([2, 2], 0)])
                .unwrap();
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix[[1, 1]], 5);
        assert_eq!(matrix[[2, 2]], 0);
    }

    #[test]
    fn test_validate_dimensions() {
        assert!(validation::validate_dimensions(1).is_ok());
        assert!(validation::validate_dimensions(0).is_err());
    }
}
