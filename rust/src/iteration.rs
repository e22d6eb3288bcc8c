//! Iterator implementations for SparseMatrix.
//!
//! All iterators share one traversal, [`Odometer`]: a cursor per remaining
//! dimension, each pointing into the children of the node selected by the
//! cursor before it. The innermost cursor advances fastest; when it runs off
//! the end of its siblings the next-outer cursor advances and everything
//! inside it restarts at the first child. Children are visited in the order
//! they were materialized.

use std::iter::FusedIterator;

use crate::types::{NodeId, SparseMatrix};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Iterator over `(path, value)` pairs of the materialized cells.
pub struct Iter<'a, T, const N: usize> {
    odometer: Odometer<'a, T, N>,
}

/// Iterator over the paths of the materialized cells.
pub struct Keys<'a, T, const N: usize> {
    items: Iter<'a, T, N>,
}

/// Iterator over the values of the materialized cells.
pub struct Values<'a, T, const N: usize> {
    items: Iter<'a, T, N>,
}

/// Iterator over the cells below a [`View`](crate::View), yielding the
/// coordinates of the remaining dimensions only.
pub struct ViewIter<'a, T, const N: usize> {
    odometer: Odometer<'a, T, N>,
}

/// Per-level cursors over the tree.
struct Odometer<'a, T, const N: usize> {
    matrix: &'a SparseMatrix<T, N>,
    /// Node the traversal starts from.
    base: Option<NodeId>,
    /// Number of levels between `base` and the leaves.
    depth: usize,
    /// `(parent, index into parent's children)`, outermost level first.
    cursors: Vec<(NodeId, usize)>,
    finished: bool,
}

// ============================================================================
// SPARSE MATRIX ITERATOR METHODS
// ============================================================================

impl<T, const N: usize> SparseMatrix<T, N> {
    /// Returns an iterator over all `(path, value)` pairs of materialized
    /// cells.
    ///
    /// The order is that of a depth-first walk visiting each node's children
    /// in the order they were first written.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparsematrix::SparseMatrix;
    ///
    /// let mut matrix = SparseMatrix::<i32, 2>::new(0).unwrap();
    /// matrix.set([2, 2], 4);
    /// matrix.set([1, 1], 1);
    /// matrix.set([2, 0], 2);
    ///
    /// let items: Vec<_> = matrix.iter().collect();
    /// assert_eq!(items, vec![([2, 2], &4), ([2, 0], &2), ([1, 1], &1)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            odometer: Odometer::new(self, self.find(&[]), N),
        }
    }

    /// Returns an iterator over the paths of all materialized cells.
    pub fn keys(&self) -> Keys<'_, T, N> {
        Keys { items: self.iter() }
    }

    /// Returns an iterator over the values of all materialized cells.
    pub fn values(&self) -> Values<'_, T, N> {
        Values { items: self.iter() }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a SparseMatrix<T, N> {
    type Item = ([usize; N], &'a T);
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// ODOMETER IMPLEMENTATION
// ============================================================================

impl<'a, T, const N: usize> Odometer<'a, T, N> {
    fn new(matrix: &'a SparseMatrix<T, N>, base: Option<NodeId>, depth: usize) -> Self {
        let mut odometer = Self {
            matrix,
            base,
            depth,
            cursors: Vec::with_capacity(depth),
            finished: base.is_none(),
        };
        if !odometer.finished {
            odometer.descend();
        }
        odometer
    }

    /// Node selected by the cursor at `level`.
    fn selected(&self, level: usize) -> NodeId {
        let (parent, index) = self.cursors[level];
        self.matrix.live_node(parent).children()[index]
    }

    /// Parent for a cursor at `level`.
    fn parent_for(&self, level: usize) -> Option<NodeId> {
        if level == 0 {
            self.base
        } else {
            Some(self.selected(level - 1))
        }
    }

    /// Point every missing cursor at the first child of its parent.
    fn descend(&mut self) {
        while self.cursors.len() < self.depth {
            let level = self.cursors.len();
            let parent = match self.parent_for(level) {
                Some(parent) => parent,
                None => {
                    self.finished = true;
                    return;
                }
            };
            assert!(
                self.matrix.live_node(parent).child_count() > 0,
                "interior node {} has no children",
                parent
            );
            self.cursors.push((parent, 0));
        }
    }

    /// Leaf under the cursors.
    fn current(&self) -> NodeId {
        match self.cursors.len() {
            0 => self.base.unwrap_or_else(|| panic!("odometer has no base node")),
            len => self.selected(len - 1),
        }
    }

    /// Move to the next leaf, carrying into outer cursors on exhaustion.
    fn advance(&mut self) {
        let mut level = self.cursors.len();
        loop {
            if level == 0 {
                self.finished = true;
                self.cursors.clear();
                return;
            }
            let (parent, index) = &mut self.cursors[level - 1];
            *index += 1;
            if *index < self.matrix.live_node(*parent).child_count() {
                break;
            }
            level -= 1;
        }
        self.cursors.truncate(level);
        self.descend();
    }

    /// Value of the leaf under the cursors, `None` once exhausted.
    fn current_value(&self) -> Option<&'a T> {
        if self.finished {
            return None;
        }
        let matrix = self.matrix;
        let leaf = self.current();
        let value = matrix
            .live_node(leaf)
            .value()
            .unwrap_or_else(|| panic!("odometer stopped on interior node {}", leaf));
        Some(value)
    }

    /// Coordinate of the node selected at `level`.
    fn coordinate(&self, level: usize) -> usize {
        self.matrix.live_node(self.selected(level)).coordinate
    }
}

impl<'a, T, const N: usize> PartialEq for Odometer<'a, T, N> {
    /// Two traversals are equal when both are exhausted, or when they walk
    /// the same matrix and sit on the same cursors.
    fn eq(&self, other: &Self) -> bool {
        match (self.finished, other.finished) {
            (true, true) => true,
            (false, false) => {
                std::ptr::eq(self.matrix, other.matrix)
                    && self.base == other.base
                    && self.cursors == other.cursors
            }
            _ => false,
        }
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = ([usize; N], &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.odometer.current_value()?;
        let mut path = [0; N];
        for (level, slot) in path.iter_mut().enumerate() {
            *slot = self.odometer.coordinate(level);
        }
        self.odometer.advance();
        Some((path, value))
    }
}

impl<'a, T, const N: usize> FusedIterator for Iter<'a, T, N> {}

impl<'a, T, const N: usize> PartialEq for Iter<'a, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.odometer == other.odometer
    }
}

// ============================================================================
// KEYS / VALUES IMPLEMENTATION
// ============================================================================

impl<'a, T, const N: usize> Iterator for Keys<'a, T, N> {
    type Item = [usize; N];

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(path, _)| path)
    }
}

impl<'a, T, const N: usize> FusedIterator for Keys<'a, T, N> {}

impl<'a, T, const N: usize> Iterator for Values<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, value)| value)
    }
}

impl<'a, T, const N: usize> FusedIterator for Values<'a, T, N> {}

// ============================================================================
// VIEWITER IMPLEMENTATION
// ============================================================================

impl<'a, T, const N: usize> ViewIter<'a, T, N> {
    pub(crate) fn new(matrix: &'a SparseMatrix<T, N>, base: Option<NodeId>, depth: usize) -> Self {
        Self {
            odometer: Odometer::new(matrix, base, depth),
        }
    }
}

impl<'a, T, const N: usize> Iterator for ViewIter<'a, T, N> {
    type Item = (Vec<usize>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.odometer.current_value()?;
        let path = (0..self.odometer.depth)
            .map(|level| self.odometer.coordinate(level))
            .collect();
        self.odometer.advance();
        Some((path, value))
    }
}

impl<'a, T, const N: usize> FusedIterator for ViewIter<'a, T, N> {}
