//! Slot arena that owns every node of a matrix.
//!
//! Nodes refer to each other by `NodeId` instead of by pointer, so the
//! parent/child relationship never forms an ownership cycle. Freed slots are
//! recycled through a free list.

use crate::types::{Node, NodeId, SparseMatrix, NULL_NODE};

/// Statistics for an arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
}

/// Arena allocator handing out `NodeId`s for stored items.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    /// Slot storage, `None` for freed slots
    slots: Vec<Option<T>>,
    /// Free slot indices for reuse
    free_list: Vec<usize>,
    /// Number of occupied slots
    allocated: usize,
}

impl<T> Arena<T> {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Create a new arena with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Allocate a new item in the arena and return its ID
    ///
    /// # Panics
    ///
    /// Panics if the arena outgrows the `NodeId` space.
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = match self.free_list.pop() {
            Some(free_index) => {
                self.slots[free_index] = Some(item);
                free_index
            }
            None => {
                self.slots.push(Some(item));
                self.slots.len() - 1
            }
        };
        self.allocated += 1;

        let id = NodeId::try_from(index).expect("arena index exceeds NodeId range");
        assert!(id != NULL_NODE, "arena index collides with NULL_NODE");
        id
    }

    /// Deallocate an item from the arena and return it
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = self.index_of(id)?;
        let item = self.slots[index].take()?;
        self.free_list.push(index);
        self.allocated -= 1;
        Some(item)
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let index = self.index_of(id)?;
        self.slots[index].as_ref()
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = self.index_of(id)?;
        self.slots[index].as_mut()
    }

    /// Check if an ID is valid and allocated
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    fn index_of(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }
        let index = usize::try_from(id).ok()?;
        (index < self.slots.len()).then_some(index)
    }

    /// Get arena statistics
    pub fn stats(&self) -> ArenaStats {
        let total_capacity = self.slots.capacity();
        let utilization = if total_capacity > 0 {
            self.allocated as f64 / total_capacity as f64
        } else {
            0.0
        };

        ArenaStats {
            total_capacity,
            allocated_count: self.allocated,
            free_count: self.free_list.len(),
            utilization,
        }
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.allocated
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.allocated == 0
    }

    /// Get the number of free slots
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Clear all items from the arena
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.allocated = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SPARSE MATRIX NODE ALLOCATION HELPERS
// ============================================================================

impl<T, const N: usize> SparseMatrix<T, N> {
    /// Allocate a node in the arena and return its ID.
    #[inline]
    pub(crate) fn allocate_node(&mut self, node: Node<T>) -> NodeId {
        self.arena.allocate(node)
    }

    /// Deallocate a node from the arena.
    #[inline]
    pub(crate) fn deallocate_node(&mut self, id: NodeId) -> Option<Node<T>> {
        self.arena.deallocate(id)
    }

    /// Look up a node by ID.
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(id)
    }

    /// Look up a node that the tree structure guarantees to be allocated.
    ///
    /// # Panics
    ///
    /// Panics if `id` is dangling, which means the tree is corrupted.
    #[inline]
    pub(crate) fn live_node(&self, id: NodeId) -> &Node<T> {
        self.arena
            .get(id)
            .unwrap_or_else(|| panic!("node {} is referenced but not allocated", id))
    }

    /// Mutable counterpart of [`live_node`](Self::live_node).
    #[inline]
    pub(crate) fn live_node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.arena
            .get_mut(id)
            .unwrap_or_else(|| panic!("node {} is referenced but not allocated", id))
    }

    /// Number of nodes currently allocated, the root sentinel included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }
}
