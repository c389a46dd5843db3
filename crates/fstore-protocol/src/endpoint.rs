/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8000;

/// HTTP endpoint paths for the fstore API.
///
/// `FILE` carries a `:name` path parameter in axum route syntax; clients
/// append the percent-encoded name to `FILES` instead.
pub mod endpoints {
    pub const FILES: &str = "/files";
    pub const ADD: &str = "/files/add";
    pub const FILE: &str = "/files/:name";
    pub const WORD_COUNT: &str = "/files/wc";
    pub const FREQ_WORDS: &str = "/files/freq-words";
    pub const HEALTH: &str = "/health";
}

/// Multipart form field names.
pub mod fields {
    /// Repeated once per uploaded file on `POST /files/add`.
    pub const ADD_FILES: &str = "files";
    /// The single replacement file on `PUT /files/:name`.
    pub const UPDATE_FILE: &str = "file";
}

/// Health check response, with a summary of what the store holds.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of stored files.
    pub files: usize,
    /// Total bytes across stored files.
    pub bytes: u64,
}

impl HealthResponse {
    pub fn ok(files: usize, bytes: u64) -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            files,
            bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_carries_store_summary() {
        let h = HealthResponse::ok(2, 5);
        assert_eq!(h.status, "ok");
        assert!(!h.version.is_empty());
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["files"], 2);
        assert_eq!(json["bytes"], 5);
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(endpoints::FILES, "/files");
        assert_eq!(endpoints::ADD, "/files/add");
        assert_eq!(endpoints::WORD_COUNT, "/files/wc");
        assert_eq!(endpoints::FREQ_WORDS, "/files/freq-words");
        assert!(endpoints::FILE.starts_with(endpoints::FILES));
    }
}
