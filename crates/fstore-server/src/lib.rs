//! HTTP server for fstore.
//!
//! Serves a single upload directory over HTTP: multipart uploads with
//! content-hash deduplication, listing, removal, replacement, and word
//! statistics across every stored file.

pub mod config;
pub mod error;
pub mod handler;
pub mod messages;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use router::build_router;
pub use server::FileServer;
