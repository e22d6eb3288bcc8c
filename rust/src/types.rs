//! Core types and data structures for SparseMatrix.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the sparse matrix implementation.

use crate::arena::Arena;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Sentinel ID meaning "no node"
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Sparse N-dimensional matrix.
///
/// Every cell of the matrix is addressed by a path of `N` unsigned
/// coordinates. Cells that were never written (or were written back to the
/// default) implicitly hold the default value and take no memory; only
/// cells holding something else are materialized as a chain of nodes, one
/// per dimension.
///
/// # Type Parameters
///
/// * `T` - Element type, compared against the default with `PartialEq`
/// * `N` - Number of dimensions, at least 1
///
/// # Examples
///
/// ```
/// use sparsematrix::SparseMatrix;
///
/// let mut matrix = SparseMatrix::<i32, 2>::new(-1).unwrap();
/// assert_eq!(matrix[[0, 0]], -1);
/// assert_eq!(matrix.len(), 0);
///
/// matrix.set([100, 100], 314);
/// assert_eq!(matrix[[100, 100]], 314);
/// assert_eq!(matrix.len(), 1);
///
/// matrix.at(100).at(100).set(-1);
/// assert!(matrix.is_empty());
/// ```
///
/// # Memory
///
/// - A materialized cell costs one node per dimension in the worst case
/// - Sibling nodes share their common path prefix
/// - Writing the default value reclaims the cell's nodes and every
///   ancestor left without children
#[derive(Debug, Clone)]
pub struct SparseMatrix<T, const N: usize> {
    /// Value held by every cell that is not materialized.
    pub(crate) default: T,
    /// Root sentinel at level `N`, or `NULL_NODE` when nothing is materialized.
    pub(crate) root: NodeId,
    /// Storage for every node of the tree.
    pub(crate) arena: Arena<Node<T>>,
}

/// One coordinate of a path, at some level of the tree.
///
/// Level 0 nodes are leaves carrying a value; every other level carries the
/// nodes of the next dimension. The root sentinel sits at level `N` and its
/// coordinate is meaningless.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    /// Coordinate value, unique among siblings.
    pub(crate) coordinate: usize,
    /// Non-owning back-reference to the parent, `NULL_NODE` for the root.
    pub(crate) parent: NodeId,
    /// Children or value, depending on the level.
    pub(crate) kind: NodeKind<T>,
}

/// Payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<T> {
    /// Interior level: child nodes in insertion order.
    Interior { children: Vec<NodeId> },
    /// Leaf level: the stored value.
    Leaf { value: T },
}
