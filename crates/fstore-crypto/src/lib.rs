//! Content hashing for fstore.
//!
//! Provides SHA-256 digests of file contents. The digest is the store's
//! deduplication key.
//!
//! All crypto operations wrap established libraries; there is no custom cryptography.

pub mod hasher;

pub use hasher::ContentHasher;
