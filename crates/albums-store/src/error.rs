/// Errors from album store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the collection lock.
    #[error("album store lock poisoned: {0}")]
    Poisoned(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
