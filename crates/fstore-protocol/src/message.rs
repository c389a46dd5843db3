use serde::{Deserialize, Serialize};

use fstore_types::{SortOrder, WordFrequency};

/// Number of words returned by `GET /files/freq-words` without `limit`.
pub const DEFAULT_FREQ_LIMIT: usize = 10;

/// Outcome of a mutation, as human-readable text.
///
/// Conflicts and not-found results are reported here too, at HTTP 200; the
/// text is the only way to tell them apart from success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `GET /files`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListResponse {
    pub files: Vec<String>,
}

/// `GET /files/wc`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountResponse {
    pub total_words: u64,
}

/// Query string of `GET /files/freq-words`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequentWordsQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub order: SortOrder,
}

fn default_limit() -> usize {
    DEFAULT_FREQ_LIMIT
}

impl Default for FrequentWordsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FREQ_LIMIT,
            order: SortOrder::default(),
        }
    }
}

/// `GET /files/freq-words`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequentWordsResponse {
    pub frequent_words: Vec<WordFrequency>,
}
