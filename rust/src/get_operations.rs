//! GET operations for SparseMatrix.
//!
//! This module contains the read-only operations: cell lookup, the
//! read-only child lookup that reports `NotFound` instead of creating nodes,
//! and counting. Nothing in here ever allocates or frees a node.

use std::ops::Index;

use crate::error::{LookupResult, MatrixError};
use crate::types::{NodeId, SparseMatrix, NULL_NODE};

impl<T, const N: usize> SparseMatrix<T, N> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value stored at `path`.
    ///
    /// Cells that were never written read as the default value. Reading has
    /// no effect on the shape of the tree or on [`len`](Self::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use sparsematrix::SparseMatrix;
    ///
    /// let mut matrix = SparseMatrix::<i32, 2>::new(-1).unwrap();
    /// matrix.set([3, 4], 12);
    /// assert_eq!(matrix.get([3, 4]), &12);
    /// assert_eq!(matrix.get([4, 3]), &-1);
    /// assert_eq!(matrix.len(), 1);
    /// ```
    pub fn get(&self, path: [usize; N]) -> &T {
        self.find(&path)
            .and_then(|id| self.node(id))
            .and_then(|node| node.value())
            .unwrap_or(&self.default)
    }

    /// Get the value stored at `path`, failing with `NotFound` when the cell
    /// is not materialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparsematrix::SparseMatrix;
    ///
    /// let mut matrix = SparseMatrix::<i32, 2>::new(0).unwrap();
    /// matrix.set([1, 1], 5);
    /// assert_eq!(matrix.try_get([1, 1]).unwrap(), &5);
    /// assert!(matrix.try_get([1, 2]).is_err());
    /// ```
    pub fn try_get(&self, path: [usize; N]) -> LookupResult<&T> {
        let id = self.resolve(&path)?;
        self.node(id)
            .and_then(|node| node.value())
            .ok_or_else(|| MatrixError::not_found(&path))
    }

    /// Check whether the cell at `path` holds a non-default value.
    pub fn contains(&self, path: [usize; N]) -> bool {
        self.find(&path).is_some()
    }

    /// Returns true if no cell holds a non-default value.
    pub fn is_empty(&self) -> bool {
        self.root == NULL_NODE
    }

    // ============================================================================
    // NODE LOOKUP HELPERS
    // ============================================================================

    /// Read-only child lookup.
    ///
    /// Returns the child of `parent` with the given coordinate, or
    /// `NotFound` if there is none. Unlike
    /// [`child_at_mut`](Self::child_at_mut) this never creates a node.
    pub(crate) fn child_at(&self, parent: NodeId, coordinate: usize) -> LookupResult<NodeId> {
        self.node(parent)
            .and_then(|node| {
                node.children().iter().copied().find(|&child| {
                    self.node(child)
                        .is_some_and(|child| child.coordinate == coordinate)
                })
            })
            .ok_or_else(|| MatrixError::not_found(&[coordinate]))
    }

    /// Follow `prefix` from the root and return the node it leads to.
    ///
    /// An empty prefix resolves to the root sentinel.
    pub(crate) fn resolve(&self, prefix: &[usize]) -> LookupResult<NodeId> {
        debug_assert!(prefix.len() <= N);
        if self.root == NULL_NODE {
            return Err(MatrixError::not_found(prefix));
        }

        prefix.iter().try_fold(self.root, |id, &coordinate| {
            self.child_at(id, coordinate)
                .map_err(|_| MatrixError::not_found(prefix))
        })
    }

    /// Like [`resolve`](Self::resolve) but without an error payload.
    pub(crate) fn find(&self, prefix: &[usize]) -> Option<NodeId> {
        self.resolve(prefix).ok()
    }
}

impl<T: PartialEq, const N: usize> SparseMatrix<T, N> {
    /// Returns the number of materialized (non-default) cells.
    ///
    /// This walks the whole tree; it always agrees with the number of items
    /// produced by [`iter`](Self::iter).
    pub fn len(&self) -> usize {
        self.view().size()
    }

    /// Alias for [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Index<[usize; N]> for SparseMatrix<T, N> {
    type Output = T;

    /// Read the cell at `path`; unwritten cells read as the default.
    fn index(&self, path: [usize; N]) -> &T {
        self.get(path)
    }
}
