//! Error handling and result types for SparseMatrix operations.
//!
//! Only the read-only and diagnostic paths of the matrix can fail. Writing
//! never fails: missing nodes are created on demand. Broken internal
//! invariants are not errors at all; they abort through `assert!`.

/// Error type for sparse matrix operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// No materialized cell or node at the requested coordinates.
    NotFound(String),
    /// The matrix was declared with an unusable number of dimensions.
    InvalidDimensions(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// Tree corruption detected.
    CorruptedTree(String),
}

impl MatrixError {
    /// Create a NotFound error naming the coordinates that were looked up
    pub fn not_found(path: &[usize]) -> Self {
        Self::NotFound(format!("no entry at {:?}", path))
    }

    /// Create an InvalidDimensions error with context
    pub fn invalid_dimensions(dimensions: usize, min_required: usize) -> Self {
        Self::InvalidDimensions(format!(
            "{} dimensions is invalid (minimum required: {})",
            dimensions, min_required
        ))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::NotFound(msg) => write!(f, "Not found: {}", msg),
            MatrixError::InvalidDimensions(msg) => write!(f, "Invalid dimensions: {}", msg),
            MatrixError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            MatrixError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for MatrixError {}

/// Public result type for matrix operations that may fail
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Result type for read-only lookups
pub type LookupResult<T> = Result<T, MatrixError>;

/// Result type for matrix construction and validation
pub type InitResult<T> = Result<T, MatrixError>;

/// Result extension trait for attaching context to matrix errors
pub trait MatrixResultExt<T> {
    /// Prefix the error message with additional context
    fn with_context(self, context: &str) -> MatrixResult<T>;

    /// Prefix the error message with the name of the failing operation
    fn with_operation(self, operation: &str) -> MatrixResult<T>;

    /// Log the error and continue with the type's default value
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> MatrixResultExt<T> for Result<T, MatrixError> {
    fn with_context(self, context: &str) -> MatrixResult<T> {
        self.map_err(|e| match e {
            MatrixError::NotFound(msg) => MatrixError::NotFound(format!("{}: {}", context, msg)),
            MatrixError::InvalidDimensions(msg) => {
                MatrixError::InvalidDimensions(format!("{}: {}", context, msg))
            }
            MatrixError::DataIntegrityError(msg) => MatrixError::data_integrity(context, &msg),
            MatrixError::CorruptedTree(msg) => MatrixError::corrupted_tree(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> MatrixResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }

    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                log::warn!("sparse matrix operation failed, using default: {}", e);
                T::default()
            }
        }
    }
}
