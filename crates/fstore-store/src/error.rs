use fstore_types::FileName;

/// Errors from store operations.
///
/// Every variant except [`StoreError::Io`] is an expected outcome that callers
/// report back to the user; `Io` is a fault in the underlying filesystem.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A file with this name is already stored.
    #[error("file already exists: {0}")]
    NameExists(FileName),

    /// The uploaded content is byte-identical to an already stored file.
    #[error("content of {name} duplicates stored file {existing}")]
    DuplicateContent { name: FileName, existing: FileName },

    /// No file with this name is stored.
    #[error("file not found: {0}")]
    NotFound(FileName),

    /// The name cannot be used as a store file name.
    #[error("invalid file name: {0:?}")]
    InvalidName(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Returns `true` for filesystem faults, as opposed to reportable outcomes.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
