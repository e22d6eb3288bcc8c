//! Node implementation for SparseMatrix.
//!
//! A node is either an interior node holding the ids of its children or a
//! leaf holding a value. The methods here only touch the node itself; the
//! operations that need the arena (lookup, auto-vivification, pruning) live
//! on the matrix.

use crate::types::{Node, NodeId, NodeKind, NULL_NODE};

impl<T> Node<T> {
    /// Create an interior node without children.
    pub fn interior(coordinate: usize, parent: NodeId) -> Self {
        Self {
            coordinate,
            parent,
            kind: NodeKind::Interior {
                children: Vec::new(),
            },
        }
    }

    /// Create a leaf node holding `value`.
    pub fn leaf(coordinate: usize, parent: NodeId, value: T) -> Self {
        Self {
            coordinate,
            parent,
            kind: NodeKind::Leaf { value },
        }
    }

    /// Create the coordinate-less root sentinel.
    pub fn root() -> Self {
        Self::interior(0, NULL_NODE)
    }

    /// The coordinate this node stands for.
    pub fn coordinate(&self) -> usize {
        self.coordinate
    }

    /// The parent's id, `NULL_NODE` for the root sentinel.
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    /// Returns true if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Children in insertion order; empty for a leaf.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Interior { children } => children,
            NodeKind::Leaf { .. } => &[],
        }
    }

    /// Number of children; zero for a leaf.
    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// The stored value, `None` for interior nodes.
    pub fn value(&self) -> Option<&T> {
        match &self.kind {
            NodeKind::Leaf { value } => Some(value),
            NodeKind::Interior { .. } => None,
        }
    }

    /// Store `value` in this leaf and return the previous one.
    ///
    /// # Panics
    ///
    /// Panics if called on an interior node.
    pub fn replace_value(&mut self, value: T) -> T {
        match &mut self.kind {
            NodeKind::Leaf { value: slot } => std::mem::replace(slot, value),
            NodeKind::Interior { .. } => panic!("replace_value called on an interior node"),
        }
    }

    /// Returns true if this is a leaf whose value equals `default`.
    pub fn is_default(&self, default: &T) -> bool
    where
        T: PartialEq,
    {
        self.value().is_some_and(|value| value == default)
    }

    /// Append a child id.
    ///
    /// # Panics
    ///
    /// Panics if called on a leaf.
    pub(crate) fn push_child(&mut self, child: NodeId) {
        match &mut self.kind {
            NodeKind::Interior { children } => children.push(child),
            NodeKind::Leaf { .. } => panic!("push_child called on a leaf"),
        }
    }

    /// Remove `child` from the children, preserving the order of the rest.
    ///
    /// Returns the number of children left.
    ///
    /// # Panics
    ///
    /// Panics if `child` is not one of this node's children.
    pub(crate) fn remove_child(&mut self, child: NodeId) -> usize {
        let children = match &mut self.kind {
            NodeKind::Interior { children } => children,
            NodeKind::Leaf { .. } => panic!("remove_child called on a leaf"),
        };
        let index = children
            .iter()
            .position(|&id| id == child)
            .unwrap_or_else(|| panic!("pruned node {} is not a child of its parent", child));
        children.remove(index);
        children.len()
    }
}
