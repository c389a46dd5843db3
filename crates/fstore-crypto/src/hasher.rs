use fstore_types::ContentHash;
use sha2::{Digest, Sha256};

/// SHA-256 content hasher.
///
/// No domain separation: the digest of a file is the plain SHA-256 of its
/// bytes, so it matches `sha256sum` output for the same file.
pub struct ContentHasher;

impl ContentHasher {
    /// Hash a complete buffer.
    pub fn hash(data: &[u8]) -> ContentHash {
        let mut out = [0u8; 32];
        out.copy_from_slice(&Sha256::digest(data));
        ContentHash::from_hash(out)
    }
}
