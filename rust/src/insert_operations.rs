//! INSERT operations for SparseMatrix.
//!
//! Writes are the only place nodes come into existence. Each level of a path
//! is materialized on demand the first time a non-default value is written
//! beneath it; writing the default hands off to the pruning code in
//! `delete_operations`.

use crate::types::{Node, NodeId, SparseMatrix, NULL_NODE};

impl<T: PartialEq, const N: usize> SparseMatrix<T, N> {
    /// Store `value` at `path` and return the previously materialized value.
    ///
    /// Writing the default value is a removal: the cell's leaf and every
    /// ancestor left without children are freed, and nothing is allocated
    /// if the cell was not materialized to begin with.
    ///
    /// # Returns
    ///
    /// The old value if the cell held a non-default value, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparsematrix::SparseMatrix;
    ///
    /// let mut matrix = SparseMatrix::<i32, 1>::new(0).unwrap();
    /// assert_eq!(matrix.set([0], 1000), None);
    /// assert_eq!(matrix.set([0], 1001), Some(1000));
    /// assert_eq!(matrix.set([2], 0), None);
    /// assert_eq!(matrix.len(), 1);
    /// ```
    pub fn set(&mut self, path: [usize; N], value: T) -> Option<T> {
        if value == self.default {
            return self.remove(path);
        }

        let (prefix, last) = path.split_at(N - 1);
        let parent = self.materialize(prefix);

        match self.child_at(parent, last[0]) {
            Ok(leaf) => Some(self.live_node_mut(leaf).replace_value(value)),
            Err(_) => {
                let leaf = self.allocate_node(Node::leaf(last[0], parent, value));
                self.live_node_mut(parent).push_child(leaf);
                log::trace!("materialized leaf {} at {:?}", leaf, path);
                None
            }
        }
    }
}

impl<T, const N: usize> SparseMatrix<T, N> {
    /// Mutating child lookup.
    ///
    /// Returns the interior child of `parent` with the given coordinate,
    /// creating it (appended after the existing siblings) if there is none.
    /// Never fails.
    pub(crate) fn child_at_mut(&mut self, parent: NodeId, coordinate: usize) -> NodeId {
        if let Ok(child) = self.child_at(parent, coordinate) {
            return child;
        }

        let child = self.allocate_node(Node::interior(coordinate, parent));
        self.live_node_mut(parent).push_child(child);
        log::trace!(
            "materialized node {} for coordinate {} under {}",
            child,
            coordinate,
            parent
        );
        child
    }

    /// Install the root sentinel if the matrix has none yet.
    pub(crate) fn ensure_root(&mut self) -> NodeId {
        if self.root == NULL_NODE {
            self.root = self.allocate_node(Node::root());
            log::trace!("bound root {}", self.root);
        }
        self.root
    }

    /// Create every interior node along `prefix` and return the last one.
    pub(crate) fn materialize(&mut self, prefix: &[usize]) -> NodeId {
        debug_assert!(prefix.len() < N);
        let root = self.ensure_root();
        prefix
            .iter()
            .fold(root, |id, &coordinate| self.child_at_mut(id, coordinate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_creates_one_node_per_level() {
        let mut matrix = SparseMatrix::<i32, 3>::new(0).unwrap();
        assert_eq!(matrix.set([1, 2, 3], 4), None);
        // root sentinel + one node per dimension
        assert_eq!(matrix.node_count(), 4);

        // shares the [1, 2] prefix
        matrix.set([1, 2, 4], 5);
        assert_eq!(matrix.node_count(), 5);

        matrix.set([1, 3, 4], 6);
        assert_eq!(matrix.node_count(), 7);
        assert_eq!(matrix.len(), 3);
    }

    #[test]
    fn test_overwrite_keeps_shape() {
        let mut matrix = SparseMatrix::<i32, 2>::new(-1).unwrap();
        matrix.set([100, 100], 314);
        let nodes = matrix.node_count();

        assert_eq!(matrix.set([100, 100], 315), Some(314));
        assert_eq!(matrix[[100, 100]], 315);
        assert_eq!(matrix.node_count(), nodes);
        assert_eq!(matrix.len(), 1);
    }

    #[test]
    fn test_writing_default_to_unwritten_cell_allocates_nothing() {
        let mut matrix = SparseMatrix::<i32, 2>::new(-1).unwrap();
        assert_eq!(matrix.set([104, 105], -1), None);
        assert_eq!(matrix.node_count(), 0);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_child_at_mut_appends_once() {
        let mut matrix = SparseMatrix::<i32, 3>::new(0).unwrap();
        let root = matrix.ensure_root();

        let a = matrix.child_at_mut(root, 9);
        let b = matrix.child_at_mut(root, 1);
        assert_eq!(matrix.child_at_mut(root, 9), a);
        assert_eq!(matrix.live_node(root).children(), &[a, b]);
        assert_eq!(matrix.live_node(b).parent(), root);
    }

    #[test]
    fn test_one_dimensional_leaves_hang_off_root() {
        let mut matrix = SparseMatrix::<i32, 1>::new(0).unwrap();
        matrix.set([0], 1000);
        matrix.set([1], 1001);

        let root = matrix.live_node(matrix.root);
        assert_eq!(root.child_count(), 2);
        assert!(root
            .children()
            .iter()
            .all(|&id| matrix.live_node(id).is_leaf()));
    }
}
