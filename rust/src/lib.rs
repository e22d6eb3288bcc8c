//! Sparse N-dimensional matrix.
//!
//! A [`SparseMatrix<T, N>`] is indexed by paths of `N` unsigned coordinates.
//! Every cell that was never written holds a default value chosen at
//! construction time, and only cells holding something else take memory.
//!
//! Internally every materialized cell is a chain of nodes, one per
//! dimension, living in an index arena. Writing the default value back into
//! a cell frees its leaf and every ancestor left without children, so the
//! tree never carries empty branches. Reading never creates nodes.
//!
//! ```
//! use sparsematrix::SparseMatrix;
//!
//! let mut matrix = SparseMatrix::<i32, 2>::new(0).unwrap();
//! for i in 0..10 {
//!     matrix.set([i, i], i as i32);
//!     matrix.set([i, 9 - i], 9 - i as i32);
//! }
//! // [0][0] and [9][0] were set to the default and never materialized
//! assert_eq!(matrix.len(), 18);
//!
//! for (path, value) in &matrix {
//!     assert_eq!(matrix[path], *value);
//! }
//! ```

mod arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod types;
mod validation;
mod view;

pub use arena::{Arena, ArenaStats};
pub use error::{InitResult, LookupResult, MatrixError, MatrixResult, MatrixResultExt};
pub use iteration::{Iter, Keys, Values, ViewIter};
pub use types::{Node, NodeId, NodeKind, SparseMatrix, NULL_NODE};
pub use view::{View, ViewMut};
