//! Foundation types for fstore.
//!
//! This crate provides the small value types shared by the store, the server,
//! and the command-line client. Every other fstore crate depends on
//! `fstore-types`.
//!
//! # Key Types
//!
//! - [`ContentHash`]: SHA-256 digest of a file's full content
//! - [`FileName`]: Validated, store-relative file name
//! - [`SortOrder`]: Ranking direction for frequent-word queries
//! - [`WordFrequency`]: A `(token, count)` pair

pub mod error;
pub mod hash;
pub mod name;
pub mod words;

pub use error::TypeError;
pub use hash::ContentHash;
pub use name::FileName;
pub use words::{SortOrder, WordFrequency};
