//! DELETE operations for SparseMatrix.
//!
//! This module holds the pruning protocol. A node is owned by exactly one
//! parent's children list (the root sentinel by the matrix itself). When a
//! leaf goes back to the default value it is freed and unlinked from its
//! parent; a parent left without children is freed in turn, and so on up to
//! the root sentinel, whose removal unbinds the matrix.

use crate::types::{NodeId, NodeKind, SparseMatrix, NULL_NODE};

impl<T, const N: usize> SparseMatrix<T, N> {
    /// Reset the cell at `path` to the default value.
    ///
    /// # Returns
    ///
    /// The value the cell held if it was materialized, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparsematrix::SparseMatrix;
    ///
    /// let mut matrix = SparseMatrix::<i32, 2>::new(0).unwrap();
    /// matrix.set([1, 2], 3);
    /// assert_eq!(matrix.remove([1, 2]), Some(3));
    /// assert_eq!(matrix.remove([1, 2]), None);
    /// assert!(matrix.is_empty());
    /// ```
    pub fn remove(&mut self, path: [usize; N]) -> Option<T> {
        let leaf = self.find(&path)?;
        Some(self.prune(leaf))
    }

    /// Drop every cell, returning the matrix to its freshly built state.
    pub fn clear(&mut self) {
        log::debug!("clearing {} nodes", self.arena.len());
        self.arena.clear();
        self.root = NULL_NODE;
    }

    /// Free `leaf` and every ancestor it leaves childless.
    ///
    /// Returns the value the leaf held.
    ///
    /// # Panics
    ///
    /// Panics if `leaf` is not an allocated leaf, or if any node on the way
    /// up is missing from its parent's children.
    pub(crate) fn prune(&mut self, leaf: NodeId) -> T {
        let node = self
            .deallocate_node(leaf)
            .unwrap_or_else(|| panic!("pruned leaf {} is not allocated", leaf));
        let value = match node.kind {
            NodeKind::Leaf { value } => value,
            NodeKind::Interior { .. } => panic!("prune called on interior node {}", leaf),
        };
        log::trace!("pruned leaf {} at coordinate {}", leaf, node.coordinate);

        let mut child = leaf;
        let mut parent = node.parent;
        while self.unlink(parent, child) == 0 {
            let emptied = self
                .deallocate_node(parent)
                .unwrap_or_else(|| panic!("pruned node {} is not allocated", parent));
            if emptied.parent == NULL_NODE {
                assert_eq!(parent, self.root, "parentless node {} is not the root", parent);
                self.root = NULL_NODE;
                log::trace!("unbound root {}", parent);
                break;
            }

            log::trace!(
                "pruned empty node {} at coordinate {}",
                parent,
                emptied.coordinate
            );
            child = parent;
            parent = emptied.parent;
        }

        value
    }

    /// Remove `child` from `parent`'s children and return how many are left.
    fn unlink(&mut self, parent: NodeId, child: NodeId) -> usize {
        assert!(parent != NULL_NODE, "node {} has no parent to unlink from", child);
        self.live_node_mut(parent).remove_child(child)
    }
}
