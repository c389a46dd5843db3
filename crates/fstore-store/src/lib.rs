//! File storage for fstore.
//!
//! This crate implements the server-side bookkeeping of the file store: a
//! flat, name-keyed set of files with duplicate uploads rejected by SHA-256
//! content hash, plus word statistics computed over every stored file.
//!
//! # Storage Backends
//!
//! All backends implement the [`FileStore`] trait:
//!
//! - [`DirectoryStore`] -- a plain directory on disk
//! - [`InMemoryFileStore`] -- `BTreeMap`-based store for tests and embedding
//!
//! # Operations
//!
//! [`FileService`] wraps a backend with a [`HashIndex`] and implements add,
//! list, remove, update, word count, and frequent words.
//!
//! # Design Rules
//!
//! 1. File names are single path components ([`fstore_types::FileName`]).
//! 2. The hash index always describes the live store: removes release a
//!    file's hash, updates re-record it, and opening a store rebuilds it.
//! 3. Mutations are serialized by the index mutex; reads are not.
//! 4. An add batch stops at the first conflict and does not roll back.
//! 5. All I/O errors are propagated, never silently ignored.

pub mod directory;
pub mod error;
pub mod index;
pub mod memory;
pub mod service;
pub mod traits;
pub mod words;

// Re-export primary types at crate root for ergonomic imports.
pub use directory::DirectoryStore;
pub use error::{StoreError, StoreResult};
pub use index::HashIndex;
pub use memory::InMemoryFileStore;
pub use service::{FileService, NewFile, StoreStats};
pub use traits::FileStore;
pub use words::WordCounter;
