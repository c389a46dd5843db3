//! HTTP surface of fstore.
//!
//! Defines the endpoint paths, multipart field names, and JSON bodies shared
//! by the server and the command-line client.

pub mod endpoint;
pub mod message;

pub use endpoint::{endpoints, fields, HealthResponse, DEFAULT_PORT};
pub use message::{
    FileListResponse, FrequentWordsQuery, FrequentWordsResponse, MessageResponse,
    WordCountResponse, DEFAULT_FREQ_LIMIT,
};
