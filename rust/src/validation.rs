//! Validation and debugging utilities for SparseMatrix.
//!
//! This module contains invariant checking over the whole tree and a
//! printable dump of its structure, used by the tests and handy when
//! debugging the pruning code.

use std::collections::HashSet;
use std::fmt::Debug;

use crate::error::{MatrixError, MatrixResult, MatrixResultExt};
use crate::types::{NodeId, NodeKind, SparseMatrix, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<T: PartialEq, const N: usize> SparseMatrix<T, N> {
    /// Check if the tree maintains its invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies that sibling coordinates are unique, that every back-reference
    /// names the node owning the child, that no default leaf or childless
    /// interior node survived pruning, that the arena holds exactly the
    /// reachable nodes, and that counting agrees with iteration.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        self.check_tree_structure().map_err(|e| e.to_string())?;
        self.check_count_consistency()?;
        Ok(())
    }

    /// Check the shape of the tree and arena-tree consistency.
    fn check_tree_structure(&self) -> MatrixResult<()> {
        if self.root == NULL_NODE {
            if !self.arena.is_empty() {
                return Err(MatrixError::corrupted_tree(
                    "Arena",
                    &format!("{} nodes allocated but root is unbound", self.arena.len()),
                ));
            }
            return Ok(());
        }

        let root = self
            .node(self.root)
            .ok_or_else(|| MatrixError::corrupted_tree("Root", "root id is not allocated"))?;
        if root.parent != NULL_NODE {
            return Err(MatrixError::corrupted_tree(
                "Root",
                &format!("root has parent {}", root.parent),
            ));
        }

        let reachable = self
            .check_node(self.root, N)
            .with_context("Tree structure check")?;
        if reachable != self.arena.len() {
            return Err(MatrixError::data_integrity(
                "Node consistency check",
                &format!(
                    "{} nodes reachable vs {} in arena",
                    reachable,
                    self.arena.len()
                ),
            ));
        }
        Ok(())
    }

    /// Recursively check a node at `level`, returning the number of nodes in
    /// its subtree.
    fn check_node(&self, id: NodeId, level: usize) -> MatrixResult<usize> {
        let node = self
            .node(id)
            .ok_or_else(|| MatrixError::corrupted_tree("Node", &format!("{} is dangling", id)))?;

        match &node.kind {
            NodeKind::Leaf { value } => {
                if level != 0 {
                    return Err(MatrixError::corrupted_tree(
                        "Leaf",
                        &format!("leaf {} found at level {}", id, level),
                    ));
                }
                if *value == self.default {
                    return Err(MatrixError::data_integrity(
                        "Pruning",
                        &format!("leaf {} holds the default value", id),
                    ));
                }
                Ok(1)
            }
            NodeKind::Interior { children } => {
                if level == 0 {
                    return Err(MatrixError::corrupted_tree(
                        "Interior",
                        &format!("interior node {} found at the leaf level", id),
                    ));
                }
                if children.is_empty() {
                    return Err(MatrixError::data_integrity(
                        "Pruning",
                        &format!("interior node {} has no children", id),
                    ));
                }

                let mut coordinates = HashSet::with_capacity(children.len());
                let mut count = 1;
                for &child_id in children {
                    let child = self.node(child_id).ok_or_else(|| {
                        MatrixError::corrupted_tree("Node", &format!("{} is dangling", child_id))
                    })?;
                    if child.parent != id {
                        return Err(MatrixError::corrupted_tree(
                            "Back-reference",
                            &format!(
                                "node {} points at parent {} but is owned by {}",
                                child_id, child.parent, id
                            ),
                        ));
                    }
                    if !coordinates.insert(child.coordinate) {
                        return Err(MatrixError::corrupted_tree(
                            "Siblings",
                            &format!("coordinate {} repeated under {}", child.coordinate, id),
                        ));
                    }
                    count += self.check_node(child_id, level - 1)?;
                }
                Ok(count)
            }
        }
    }

    /// Check that counting and iterating agree.
    fn check_count_consistency(&self) -> Result<(), String> {
        let iterated = self.iter().count();
        let counted = self.len();
        if iterated != counted {
            return Err(format!(
                "Iterator returned {} cells but matrix counts {}",
                iterated, counted
            ));
        }
        Ok(())
    }

    // ============================================================================
    // VALIDATION HELPERS FOR OPERATIONS
    // ============================================================================

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Check if the matrix is in a valid state for an operation
    pub fn validate_for_operation(&self, operation: &str) -> MatrixResult<()> {
        self.check_invariants_detailed()
            .map_err(|e| MatrixError::data_integrity(operation, &e))
    }
}

// ============================================================================
// DEBUGGING UTILITIES
// ============================================================================

impl<T: Debug, const N: usize> SparseMatrix<T, N> {
    /// Render the tree one node per line, children indented below their
    /// parent.
    pub fn tree_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.root == NULL_NODE {
            lines.push("Root: <unbound>".to_string());
        } else {
            self.collect_lines(self.root, 0, &mut lines);
        }
        lines
    }

    /// Prints the tree structure for debugging.
    pub fn print_tree(&self) {
        println!("Tree structure:");
        for line in self.tree_lines() {
            println!("{}", line);
        }
    }

    fn collect_lines(&self, id: NodeId, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        let Some(node) = self.node(id) else {
            lines.push(format!("{}Node[id={}]: <missing>", indent, id));
            return;
        };

        match &node.kind {
            NodeKind::Leaf { value } => {
                lines.push(format!(
                    "{}Leaf[id={}, coord={}]: {:?}",
                    indent, id, node.coordinate, value
                ));
            }
            NodeKind::Interior { children } => {
                if id == self.root {
                    lines.push(format!("{}Root[id={}]: {} children", indent, id, children.len()));
                } else {
                    lines.push(format!(
                        "{}Node[id={}, coord={}]: {} children",
                        indent,
                        id,
                        node.coordinate,
                        children.len()
                    ));
                }
                for &child in children {
                    self.collect_lines(child, depth + 1, lines);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Node;

    #[test]
    fn test_fresh_matrix_is_valid() {
        let matrix = SparseMatrix::<i32, 2>::new(0).unwrap();
        assert!(matrix.check_invariants());
        assert_eq!(matrix.validate(), Ok(()));
    }

    #[test]
    fn test_valid_after_mixed_operations() {
        let mut matrix = SparseMatrix::<i32, 3>::new(-1).unwrap();
        for i in 0..20 {
            matrix.set([i % 3, i % 5, i], i as i32);
        }
        for i in (0..20).step_by(2) {
            matrix.set([i % 3, i % 5, i], -1);
        }
        assert!(matrix.validate_for_operation("mixed").is_ok());
    }

    #[test]
    fn test_detects_default_leaf() {
        let mut matrix = SparseMatrix::<i32, 1>::new(0).unwrap();
        matrix.set([1], 5);
        let leaf = matrix.find(&[1]).unwrap();
        matrix.live_node_mut(leaf).replace_value(0);

        let err = matrix.check_invariants_detailed().unwrap_err();
        assert!(err.contains("holds the default value"), "{}", err);
    }

    #[test]
    fn test_detects_empty_interior() {
        let mut matrix = SparseMatrix::<i32, 2>::new(0).unwrap();
        matrix.set([1, 1], 5);
        let root = matrix.root;
        let orphan = matrix.allocate_node(Node::interior(9, root));
        matrix.live_node_mut(root).push_child(orphan);

        let err = matrix.validate().unwrap_err();
        assert!(err.contains("has no children"), "{}", err);
    }

    #[test]
    fn test_detects_leaked_node() {
        let mut matrix = SparseMatrix::<i32, 2>::new(0).unwrap();
        matrix.set([1, 1], 5);
        matrix.allocate_node(Node::leaf(3, NULL_NODE, 1));

        let err = matrix.validate_for_operation("leak").unwrap_err();
        assert!(matches!(err, MatrixError::DataIntegrityError(_)));
        assert!(err.to_string().contains("reachable"));
    }

    #[test]
    fn test_detects_duplicate_coordinate() {
        let mut matrix = SparseMatrix::<i32, 1>::new(0).unwrap();
        matrix.set([1], 5);
        let root = matrix.root;
        let twin = matrix.allocate_node(Node::leaf(1, root, 6));
        matrix.live_node_mut(root).push_child(twin);

        assert!(!matrix.check_invariants());
    }

    #[test]
    fn test_tree_lines() {
        let mut matrix = SparseMatrix::<i32, 2>::new(0).unwrap();
        assert_eq!(matrix.tree_lines(), vec!["Root: <unbound>".to_string()]);

        matrix.set([4, 7], 12);
        let lines = matrix.tree_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Root["));
        assert!(lines[1].contains("coord=4"));
        assert!(lines[2].ends_with("coord=7]: 12"));
        matrix.print_tree();
    }
}
