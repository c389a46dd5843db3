use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid file name: {0:?}")]
    InvalidFileName(String),

    #[error("unknown sort order: {0:?} (expected \"asc\" or \"dsc\")")]
    InvalidSortOrder(String),
}
