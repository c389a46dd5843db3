//! Content-hash index used for duplicate detection.
//!
//! The [`HashIndex`] maps each content hash to the file that claimed it, and
//! keeps the reverse mapping so a file's entry can be dropped when the file
//! is removed or rewritten.

use std::collections::{BTreeMap, HashMap};

use fstore_types::{ContentHash, FileName};

/// In-memory content hash → file name mapping.
#[derive(Debug, Default, Clone)]
pub struct HashIndex {
    by_hash: HashMap<ContentHash, FileName>,
    by_name: BTreeMap<FileName, ContentHash>,
}

impl HashIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed hashes.
    pub fn len(&self) -> usize {
        self.by_hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_hash.is_empty()
    }

    /// The file that owns `hash`, if any.
    pub fn lookup(&self, hash: &ContentHash) -> Option<&FileName> {
        self.by_hash.get(hash)
    }

    /// The hash recorded for `name`, if any.
    pub fn hash_of(&self, name: &FileName) -> Option<&ContentHash> {
        self.by_name.get(name)
    }

    /// Record `hash` as owned by `name`.
    ///
    /// Any previous hash recorded for `name` is released first. The first
    /// owner of a hash keeps it: returns `false` if another file already
    /// claimed the hash, leaving `name` unindexed.
    pub fn insert(&mut self, hash: ContentHash, name: FileName) -> bool {
        if self.by_hash.get(&hash) == Some(&name) {
            return true;
        }
        self.forget(&name);
        if self.by_hash.contains_key(&hash) {
            return false;
        }
        self.by_name.insert(name.clone(), hash);
        self.by_hash.insert(hash, name);
        true
    }

    /// Drop whatever hash `name` owns. Returns the released hash.
    pub fn forget(&mut self, name: &FileName) -> Option<ContentHash> {
        let hash = self.by_name.remove(name)?;
        self.by_hash.remove(&hash);
        Some(hash)
    }

    pub fn clear(&mut self) {
        self.by_hash.clear();
        self.by_name.clear();
    }
}
