//! Dimension-aware accessors for SparseMatrix.
//!
//! A [`View`] is a read-only handle on one node of the tree, scoped to the
//! dimensions below it. A [`ViewMut`] is the writing front-end: it records
//! the coordinates chained so far and, once all `N` are given, acts as a
//! proxy for a single cell. Nodes are only created when a `ViewMut` writes a
//! non-default value, so chaining and reading never change the tree.

use crate::error::{LookupResult, MatrixError};
use crate::iteration::ViewIter;
use crate::types::{NodeId, SparseMatrix};

/// Read-only handle on a subtree of a matrix.
///
/// `level` is the number of coordinates still needed to reach a cell: a
/// view of the whole matrix has level `N`, a view of a single cell level 0.
/// A view may be unbound, meaning nothing is materialized below its
/// coordinates.
pub struct View<'a, T, const N: usize> {
    matrix: &'a SparseMatrix<T, N>,
    node: Option<NodeId>,
    level: usize,
}

impl<'a, T, const N: usize> Clone for View<'a, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, const N: usize> Copy for View<'a, T, N> {}

impl<'a, T, const N: usize> View<'a, T, N> {
    pub(crate) fn new(matrix: &'a SparseMatrix<T, N>, node: Option<NodeId>, level: usize) -> Self {
        debug_assert!(level <= N);
        Self {
            matrix,
            node,
            level,
        }
    }

    /// Number of coordinates still needed to reach a cell.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns true if anything is materialized below this view.
    pub fn is_bound(&self) -> bool {
        self.node.is_some()
    }

    /// Descend one dimension without creating anything.
    ///
    /// # Errors
    ///
    /// `NotFound` if no cell below this view has `coordinate` in the next
    /// dimension.
    ///
    /// # Panics
    ///
    /// Panics when called on a cell view (level 0).
    ///
    /// # Examples
    ///
    /// ```
    /// use sparsematrix::SparseMatrix;
    ///
    /// let mut matrix = SparseMatrix::<i32, 2>::new(0).unwrap();
    /// matrix.set([1, 2], 3);
    ///
    /// let row = matrix.view().at(1).unwrap();
    /// assert_eq!(row.size(), 1);
    /// assert_eq!(row.at(2).unwrap().value(), Some(&3));
    /// assert!(row.at(3).is_err());
    /// ```
    pub fn at(&self, coordinate: usize) -> LookupResult<View<'a, T, N>> {
        assert!(self.level > 0, "cannot index below the last dimension");
        let node = self
            .node
            .ok_or_else(|| MatrixError::not_found(&[coordinate]))?;
        let child = self.matrix.child_at(node, coordinate)?;
        Ok(Self::new(self.matrix, Some(child), self.level - 1))
    }

    /// Read the cell at `coordinate` of the last dimension, falling back to
    /// the default value.
    ///
    /// # Panics
    ///
    /// Panics unless this view is one dimension above the cells (level 1).
    pub fn get(&self, coordinate: usize) -> &'a T {
        assert_eq!(self.level, 1, "get needs a view of the last dimension");
        self.at(coordinate)
            .ok()
            .and_then(|cell| cell.value())
            .unwrap_or(&self.matrix.default)
    }

    /// The value of a cell view, `None` when the cell is not materialized or
    /// this is not a cell view.
    pub fn value(&self) -> Option<&'a T> {
        if self.level != 0 {
            return None;
        }
        let matrix = self.matrix;
        self.node
            .and_then(|id| matrix.node(id))
            .and_then(|node| node.value())
    }

    /// Iterate over the materialized cells below this view.
    ///
    /// Paths hold the remaining `level` coordinates only.
    pub fn iter(&self) -> ViewIter<'a, T, N> {
        ViewIter::new(self.matrix, self.node, self.level)
    }
}

impl<'a, T: PartialEq, const N: usize> View<'a, T, N> {
    /// Number of non-default cells below this view.
    pub fn size(&self) -> usize {
        let Some(id) = self.node else {
            return 0;
        };
        let node = self.matrix.live_node(id);

        if self.level == 0 {
            return usize::from(!node.is_default(&self.matrix.default));
        }
        node.children()
            .iter()
            .map(|&child| Self::new(self.matrix, Some(child), self.level - 1).size())
            .sum()
    }
}

impl<'a, T, const N: usize> std::fmt::Debug for View<'a, T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("node", &self.node)
            .field("level", &self.level)
            .finish()
    }
}

/// Writing front-end of a matrix.
///
/// Created by [`SparseMatrix::view_mut`] or [`SparseMatrix::at`]. Each call
/// to [`at`](Self::at) fixes one more coordinate; with all `N` fixed the
/// handle reads and writes that cell.
pub struct ViewMut<'a, T, const N: usize> {
    matrix: &'a mut SparseMatrix<T, N>,
    path: [usize; N],
    depth: usize,
}

impl<'a, T, const N: usize> ViewMut<'a, T, N> {
    pub(crate) fn new(matrix: &'a mut SparseMatrix<T, N>) -> Self {
        Self {
            matrix,
            path: [0; N],
            depth: 0,
        }
    }

    /// Number of coordinates still needed to reach a cell.
    pub fn level(&self) -> usize {
        N - self.depth
    }

    /// Coordinates fixed so far.
    pub fn prefix(&self) -> &[usize] {
        &self.path[..self.depth]
    }

    /// Fix the next coordinate. Never fails and never allocates.
    ///
    /// # Panics
    ///
    /// Panics if all `N` coordinates are already fixed.
    pub fn at(mut self, coordinate: usize) -> Self {
        assert!(self.depth < N, "cannot index below the last dimension");
        self.path[self.depth] = coordinate;
        self.depth += 1;
        self
    }

    /// Read-only view of the subtree under the fixed coordinates.
    pub fn view(&self) -> View<'_, T, N> {
        self.matrix.view_at(self.prefix())
    }

    /// Read the cell.
    ///
    /// # Panics
    ///
    /// Panics unless all `N` coordinates are fixed.
    pub fn get(&self) -> &T {
        self.assert_cell("read");
        self.matrix.get(self.path)
    }

    fn assert_cell(&self, action: &str) {
        assert_eq!(
            self.depth, N,
            "cannot {} a cell with only {} of {} coordinates",
            action, self.depth, N
        );
    }
}

impl<'a, T: PartialEq, const N: usize> ViewMut<'a, T, N> {
    /// Write the cell, returning the previously materialized value.
    ///
    /// # Panics
    ///
    /// Panics unless all `N` coordinates are fixed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparsematrix::SparseMatrix;
    ///
    /// let mut matrix = SparseMatrix::<i32, 3>::new(-1).unwrap();
    /// matrix.at(100).at(101).at(102).set(314);
    /// assert_eq!(*matrix.at(100).at(101).at(102).get(), 314);
    /// assert_eq!(*matrix.at(7).at(7).at(7).get(), -1);
    /// assert_eq!(matrix.len(), 1);
    /// ```
    pub fn set(&mut self, value: T) -> Option<T> {
        self.assert_cell("write");
        self.matrix.set(self.path, value)
    }

    /// Write the default value into the cell.
    pub fn reset(&mut self) -> Option<T> {
        self.assert_cell("reset");
        self.matrix.remove(self.path)
    }

    /// Number of non-default cells under the fixed coordinates.
    pub fn size(&self) -> usize {
        self.view().size()
    }
}

impl<T, const N: usize> SparseMatrix<T, N> {
    /// Read-only view of the whole matrix.
    pub fn view(&self) -> View<'_, T, N> {
        View::new(self, self.find(&[]), N)
    }

    /// Read-only view of the subtree under `prefix`, unbound if nothing is
    /// materialized there.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` has more than `N` coordinates.
    pub fn view_at(&self, prefix: &[usize]) -> View<'_, T, N> {
        assert!(prefix.len() <= N, "prefix longer than the matrix has dimensions");
        View::new(self, self.find(prefix), N - prefix.len())
    }

    /// Writing front-end with no coordinates fixed yet.
    pub fn view_mut(&mut self) -> ViewMut<'_, T, N> {
        ViewMut::new(self)
    }

    /// Fix the first coordinate of a write; shorthand for
    /// `view_mut().at(coordinate)`.
    pub fn at(&mut self, coordinate: usize) -> ViewMut<'_, T, N> {
        self.view_mut().at(coordinate)
    }
}
